use super::FilterState;
use crate::error::{DiscoverError, Result};
use crate::facets::spec::{attribute_selector, subfilter_spec};
use crate::model::{DisciplinaryType, Domain, ViewerRole};
use crate::taxonomy::TagTaxonomy;
use std::sync::Arc;

/// Outcome of a toggle mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Added,
    Removed,
}

/// The single writer of a [`FilterState`].
///
/// Every mutation either applies fully and bumps [`revision`](Self::revision),
/// or is rejected with an error and leaves both state and revision untouched.
#[derive(Debug, Clone)]
pub struct FilterStore {
    state: FilterState,
    initial: FilterState,
    taxonomy: Arc<TagTaxonomy>,
    revision: u64,
}

impl Default for FilterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterStore {
    /// A store with default session settings over the built-in taxonomy.
    pub fn new() -> Self {
        Self {
            state: FilterState::default(),
            initial: FilterState::default(),
            taxonomy: TagTaxonomy::shared(),
            revision: 0,
        }
    }

    /// A store starting from `initial`, which is also what [`reset`](Self::reset)
    /// returns to.
    ///
    /// `initial` is checked like a [`restore`](Self::restore) snapshot.
    pub fn with_state(initial: FilterState, taxonomy: Arc<TagTaxonomy>) -> Result<Self> {
        validate(&initial, &taxonomy)?;
        Ok(Self {
            state: initial.clone(),
            initial,
            taxonomy,
            revision: 0,
        })
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    pub fn snapshot(&self) -> FilterState {
        self.state.clone()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn taxonomy(&self) -> &TagTaxonomy {
        &self.taxonomy
    }

    fn applied(&mut self, what: &'static str) {
        self.revision += 1;
        tracing::debug!(revision = self.revision, mutation = what, "filter state updated");
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.state.search_text = text.into();
        self.applied("set_search_text");
    }

    /// Add `tag` if absent, remove it if present.
    ///
    /// Only taxonomy tags can be added. Removal always succeeds so a stale
    /// chip can still be dismissed.
    pub fn toggle_tag(&mut self, tag: &str) -> Result<Toggle> {
        if let Some(pos) = self.state.selected_tags.iter().position(|t| t == tag) {
            self.state.selected_tags.remove(pos);
            self.applied("toggle_tag");
            return Ok(Toggle::Removed);
        }
        if !self.taxonomy.contains_tag(tag) {
            tracing::warn!(tag, "rejected unknown tag");
            return Err(DiscoverError::UnknownTag(tag.to_string()));
        }
        self.state.selected_tags.push(tag.to_string());
        self.applied("toggle_tag");
        Ok(Toggle::Added)
    }

    pub fn clear_tags(&mut self) {
        self.state.selected_tags.clear();
        self.applied("clear_tags");
    }

    /// Select an attribute option for `domain`.
    ///
    /// `value` may name the option by value, label or alias; the canonical
    /// value is stored. Selecting `"all"` drops the constraint.
    pub fn set_domain_attribute(&mut self, domain: Domain, value: &str) -> Result<()> {
        let Some(option) = attribute_selector(domain).option(value) else {
            tracing::warn!(%domain, value, "rejected unknown attribute option");
            return Err(DiscoverError::UnknownAttribute {
                domain,
                value: value.to_string(),
            });
        };
        if option.is_all() {
            self.state.domain_attribute.remove(&domain);
        } else {
            self.state
                .domain_attribute
                .insert(domain, option.value.to_string());
        }
        self.applied("set_domain_attribute");
        Ok(())
    }

    pub fn set_disciplinary_type(&mut self, disciplinary: DisciplinaryType) {
        self.state.disciplinary = disciplinary;
        self.applied("set_disciplinary_type");
    }

    /// Toggle a subfilter of the active domain.
    pub fn toggle_subfilter(&mut self, value: &str) -> Result<Toggle> {
        let domain = self.state.active_domain;
        if let Some(pos) = self.state.active_subfilters.iter().position(|s| s == value) {
            self.state.active_subfilters.remove(pos);
            self.applied("toggle_subfilter");
            return Ok(Toggle::Removed);
        }
        if subfilter_spec(domain, value).is_none() {
            tracing::warn!(%domain, value, "rejected subfilter outside active domain");
            return Err(DiscoverError::UnknownSubfilter {
                domain,
                value: value.to_string(),
            });
        }
        self.state.active_subfilters.push(value.to_string());
        self.applied("toggle_subfilter");
        Ok(Toggle::Added)
    }

    pub fn clear_subfilters(&mut self) {
        self.state.active_subfilters.clear();
        self.applied("clear_subfilters");
    }

    pub fn set_viewer_role(&mut self, role: ViewerRole) {
        self.state.viewer_role = role;
        self.applied("set_viewer_role");
    }

    /// Switch domains. Subfilters belong to the old domain and are cleared;
    /// per-domain attribute selections are kept.
    pub fn set_active_domain(&mut self, domain: Domain) {
        self.state.active_domain = domain;
        self.state.active_subfilters.clear();
        self.applied("set_active_domain");
    }

    /// Back to the session's initial state.
    pub fn reset(&mut self) {
        self.state = self.initial.clone();
        self.applied("reset");
    }

    /// Replace the live state with an externally supplied snapshot.
    ///
    /// The snapshot is checked against the same rules the individual
    /// mutations enforce; on error nothing changes.
    pub fn restore(&mut self, state: FilterState) -> Result<()> {
        validate(&state, &self.taxonomy)?;
        self.state = state;
        self.applied("restore");
        Ok(())
    }
}

/// Applies the rules the individual mutations enforce to a whole state.
fn validate(state: &FilterState, taxonomy: &TagTaxonomy) -> Result<()> {
    if let Some(tag) = state
        .selected_tags
        .iter()
        .find(|t| !taxonomy.contains_tag(t))
    {
        return Err(DiscoverError::UnknownTag(tag.clone()));
    }
    for (domain, value) in &state.domain_attribute {
        let canonical = attribute_selector(*domain)
            .option(value)
            .filter(|o| !o.is_all() && o.value == value.as_str());
        if canonical.is_none() {
            return Err(DiscoverError::UnknownAttribute {
                domain: *domain,
                value: value.clone(),
            });
        }
    }
    if let Some(value) = state
        .active_subfilters
        .iter()
        .find(|v| subfilter_spec(state.active_domain, v).is_none())
    {
        return Err(DiscoverError::UnknownSubfilter {
            domain: state.active_domain,
            value: value.clone(),
        });
    }
    Ok(())
}
