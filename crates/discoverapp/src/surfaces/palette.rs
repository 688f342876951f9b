use super::{Dialog, FilterSurface};
use crate::error::Result;
use crate::model::{Icon, ViewerRole};
use crate::store::{FilterHandle, FilterState};
use crate::taxonomy::TagTaxonomy;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Roles offered in the "Quick Filters" group, in display order.
const QUICK_ROLES: [ViewerRole; 4] = [
    ViewerRole::Artist,
    ViewerRole::Venue,
    ViewerRole::Brand,
    ViewerRole::Resource,
];

const QUICK_FILTERS: &str = "Quick Filters";

/// A key event as seen by the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: char,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    pub fn ctrl(key: char) -> Self {
        Self {
            key,
            ctrl: true,
            meta: false,
        }
    }

    pub fn meta(key: char) -> Self {
        Self {
            key,
            ctrl: false,
            meta: true,
        }
    }

    fn is_palette_shortcut(&self) -> bool {
        self.key.eq_ignore_ascii_case(&'k') && (self.ctrl || self.meta)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PaletteEntry {
    Role { role: ViewerRole, active: bool },
    Tag { tag: String, selected: bool },
}

impl PaletteEntry {
    pub fn label(&self) -> String {
        match self {
            PaletteEntry::Role { role, .. } => format!("{} View", role.label()),
            PaletteEntry::Tag { tag, .. } => tag.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteGroup {
    pub heading: String,
    pub entries: Vec<PaletteEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteView {
    pub revision: u64,
    /// Shown in the search field.
    pub icon: Icon,
    pub open: bool,
    pub query: String,
    /// Empty when the query matches nothing.
    pub groups: Vec<PaletteGroup>,
}

/// Command palette over roles and the full tag universe.
///
/// Picking a tag toggles it and closes the palette. Picking a role switches
/// the viewer role and keeps the palette open.
#[derive(Debug, Clone)]
pub struct QuickFilterPalette {
    handle: FilterHandle,
    taxonomy: Arc<TagTaxonomy>,
    dialog: Dialog,
    query: String,
    rendered: Option<u64>,
}

impl QuickFilterPalette {
    pub fn new(handle: FilterHandle, taxonomy: Arc<TagTaxonomy>) -> Self {
        Self {
            handle,
            taxonomy,
            dialog: Dialog::new(true),
            query: String::new(),
            rendered: None,
        }
    }

    /// Returns true when the key was consumed.
    pub fn handle_key(&mut self, key: KeyPress) -> bool {
        if !key.is_palette_shortcut() {
            return false;
        }
        self.dialog.toggle();
        if !self.dialog.is_open() {
            self.query.clear();
        }
        true
    }

    pub fn close(&mut self) {
        self.dialog.close();
        self.query.clear();
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn select(&mut self, entry: &PaletteEntry) -> Result<()> {
        match entry {
            PaletteEntry::Role { role, .. } => {
                let role = *role;
                self.handle.update(|s| s.set_viewer_role(role));
            }
            PaletteEntry::Tag { tag, .. } => {
                self.handle.update(|s| s.toggle_tag(tag))?;
                self.dialog.item_selected();
                if !self.dialog.is_open() {
                    self.query.clear();
                }
            }
        }
        Ok(())
    }

    fn groups(&self, state: &FilterState) -> Vec<PaletteGroup> {
        let needle = self.query.trim().to_lowercase();
        let keep = |entry: &PaletteEntry| needle.is_empty() || entry.label().to_lowercase().contains(&needle);

        let mut groups = Vec::new();
        let roles: Vec<PaletteEntry> = QUICK_ROLES
            .iter()
            .map(|&role| PaletteEntry::Role {
                role,
                active: state.viewer_role() == role,
            })
            .filter(|e| keep(e))
            .collect();
        if !roles.is_empty() {
            groups.push(PaletteGroup {
                heading: QUICK_FILTERS.to_string(),
                entries: roles,
            });
        }

        let mut by_letter: BTreeMap<String, Vec<PaletteEntry>> = BTreeMap::new();
        for tag in self.taxonomy.all_tags() {
            let entry = PaletteEntry::Tag {
                tag: tag.clone(),
                selected: state.is_tag_selected(tag),
            };
            if !keep(&entry) {
                continue;
            }
            let letter = tag.chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
            by_letter.entry(letter).or_default().push(entry);
        }
        groups.extend(by_letter.into_iter().map(|(letter, entries)| PaletteGroup {
            heading: format!("Tags - {letter}"),
            entries,
        }));
        groups
    }
}

impl FilterSurface for QuickFilterPalette {
    type View = PaletteView;

    fn handle(&self) -> &FilterHandle {
        &self.handle
    }

    fn render(&mut self) -> PaletteView {
        let (state, revision) = self.handle.read(|s| (s.snapshot(), s.revision()));
        self.rendered = Some(revision);
        PaletteView {
            revision,
            icon: Icon::Search,
            open: self.dialog.is_open(),
            query: self.query.clone(),
            groups: self.groups(&state),
        }
    }

    fn dialog(&self) -> &Dialog {
        &self.dialog
    }

    fn rendered_revision(&self) -> Option<u64> {
        self.rendered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Domain;

    fn palette() -> QuickFilterPalette {
        let taxonomy = TagTaxonomy::builder()
            .category(Domain::Artists, "Genres", ["Jazz", "Blues", "Soul"])
            .category(Domain::Venues, "Venue Types", ["Club", "Theater"])
            .build();
        QuickFilterPalette::new(FilterHandle::default(), Arc::new(taxonomy))
    }

    fn headings(view: &PaletteView) -> Vec<&str> {
        view.groups.iter().map(|g| g.heading.as_str()).collect()
    }

    #[test]
    fn shortcut_toggles_palette() {
        let mut palette = palette();
        assert!(palette.handle_key(KeyPress::ctrl('k')));
        assert!(palette.dialog().is_open());
        assert!(palette.handle_key(KeyPress::meta('K')));
        assert!(!palette.dialog().is_open());
    }

    #[test]
    fn plain_k_is_ignored() {
        let mut palette = palette();
        assert!(!palette.handle_key(KeyPress::plain('k')));
        assert!(!palette.handle_key(KeyPress::ctrl('j')));
        assert!(!palette.dialog().is_open());
    }

    #[test]
    fn tags_are_grouped_by_sorted_first_letter() {
        let mut palette = palette();
        let view = palette.render();
        assert_eq!(
            headings(&view),
            ["Quick Filters", "Tags - B", "Tags - C", "Tags - J", "Tags - S", "Tags - T"]
        );
        assert_eq!(view.groups[0].entries[0].label(), "Artist View");
    }

    #[test]
    fn query_narrows_entries() {
        let mut palette = palette();
        palette.set_query("VEN");
        let view = palette.render();
        assert_eq!(headings(&view), ["Quick Filters"]);
        assert_eq!(view.groups[0].entries.len(), 1);

        palette.set_query("nothing like this");
        assert!(palette.render().groups.is_empty());
    }

    #[test]
    fn tag_selection_toggles_and_closes() {
        let mut palette = palette();
        palette.handle_key(KeyPress::ctrl('k'));
        let entry = PaletteEntry::Tag {
            tag: "Jazz".into(),
            selected: false,
        };
        palette.select(&entry).unwrap();

        assert!(!palette.dialog().is_open());
        assert!(palette.handle().snapshot().is_tag_selected("Jazz"));
    }

    #[test]
    fn role_selection_stays_open() {
        let mut palette = palette();
        palette.handle_key(KeyPress::ctrl('k'));
        let entry = PaletteEntry::Role {
            role: ViewerRole::Brand,
            active: false,
        };
        palette.select(&entry).unwrap();

        assert!(palette.dialog().is_open());
        assert_eq!(palette.handle().snapshot().viewer_role(), ViewerRole::Brand);
    }
}
