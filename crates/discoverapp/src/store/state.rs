use crate::facets::spec::ALL;
use crate::model::{DisciplinaryType, Domain, TagMatch, ViewerRole};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The filter state of one discovery session.
///
/// Fields are private: the only way to change a live state is through
/// [`FilterStore`](super::FilterStore), which keeps the invariants. A
/// `FilterState` value on its own is an inert snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    #[serde(default)]
    pub(super) search_text: String,
    /// Insertion order is kept for chip display.
    #[serde(default)]
    pub(super) selected_tags: Vec<String>,
    /// Domains without an entry are at `"all"`.
    #[serde(default)]
    pub(super) domain_attribute: BTreeMap<Domain, String>,
    #[serde(default)]
    pub(super) disciplinary: DisciplinaryType,
    #[serde(default)]
    pub(super) active_subfilters: Vec<String>,
    #[serde(default)]
    pub(super) viewer_role: ViewerRole,
    #[serde(default)]
    pub(super) active_domain: Domain,
    #[serde(default)]
    pub(super) tag_match: TagMatch,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::with_defaults(Domain::default(), ViewerRole::default(), TagMatch::default())
    }
}

impl FilterState {
    /// A fresh session state: nothing selected, the given domain and role active.
    pub fn with_defaults(active_domain: Domain, viewer_role: ViewerRole, tag_match: TagMatch) -> Self {
        Self {
            search_text: String::new(),
            selected_tags: Vec::new(),
            domain_attribute: BTreeMap::new(),
            disciplinary: DisciplinaryType::All,
            active_subfilters: Vec::new(),
            viewer_role,
            active_domain,
            tag_match,
        }
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn selected_tags(&self) -> &[String] {
        &self.selected_tags
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| t == tag)
    }

    /// The attribute value selected for `domain`, `"all"` when unset.
    pub fn attribute(&self, domain: Domain) -> &str {
        self.domain_attribute
            .get(&domain)
            .map(String::as_str)
            .unwrap_or(ALL)
    }

    pub fn disciplinary(&self) -> DisciplinaryType {
        self.disciplinary
    }

    pub fn active_subfilters(&self) -> &[String] {
        &self.active_subfilters
    }

    pub fn is_subfilter_active(&self, value: &str) -> bool {
        self.active_subfilters.iter().any(|s| s == value)
    }

    pub fn viewer_role(&self) -> ViewerRole {
        self.viewer_role
    }

    pub fn active_domain(&self) -> Domain {
        self.active_domain
    }

    pub fn tag_match(&self) -> TagMatch {
        self.tag_match
    }

    /// True when no dimension constrains the catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.search_text.trim().is_empty()
            && self.selected_tags.is_empty()
            && self.domain_attribute.is_empty()
            && self.disciplinary == DisciplinaryType::All
            && self.active_subfilters.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_unfiltered() {
        let state = FilterState::default();
        assert!(state.is_unfiltered());
        assert_eq!(state.active_domain(), Domain::Artists);
        assert_eq!(state.viewer_role(), ViewerRole::Regular);
        assert_eq!(state.attribute(Domain::Venues), "all");
    }

    #[test]
    fn whitespace_search_counts_as_unfiltered() {
        let mut state = FilterState::default();
        state.search_text = "  ".into();
        assert!(state.is_unfiltered());
    }

    #[test]
    fn snapshot_serializes_with_lowercase_keys() {
        let mut state = FilterState::default();
        state.domain_attribute.insert(Domain::Resources, "space".into());
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["domain_attribute"]["resources"], "space");
        assert_eq!(json["active_domain"], "artists");

        let back: FilterState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn missing_fields_take_defaults() {
        let state: FilterState = serde_json::from_str(r#"{"search_text":"jazz"}"#).unwrap();
        assert_eq!(state.search_text(), "jazz");
        assert!(state.selected_tags().is_empty());
        assert_eq!(state.active_domain(), Domain::Artists);
    }
}
