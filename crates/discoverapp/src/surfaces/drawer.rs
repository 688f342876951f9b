use super::{Chip, Dialog, FilterSurface};
use crate::context::ContextResolver;
use crate::error::Result;
use crate::model::{Domain, Icon};
use crate::store::{FilterHandle, Toggle};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawerCategory {
    pub name: String,
    pub tags: Vec<Chip>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawerView {
    pub revision: u64,
    /// Trigger button icon.
    pub icon: Icon,
    pub open: bool,
    pub domain: Domain,
    pub categories: Vec<DrawerCategory>,
    pub active_tags: Vec<String>,
}

/// Mobile drawer listing the active domain's tag categories.
#[derive(Debug, Clone)]
pub struct MobileDrawer {
    handle: FilterHandle,
    resolver: ContextResolver,
    dialog: Dialog,
    rendered: Option<u64>,
}

impl MobileDrawer {
    pub fn new(handle: FilterHandle, resolver: ContextResolver, close_on_select: bool) -> Self {
        Self {
            handle,
            resolver,
            dialog: Dialog::new(close_on_select),
            rendered: None,
        }
    }

    pub fn open(&mut self) {
        self.dialog.open();
    }

    pub fn close(&mut self) {
        self.dialog.close();
    }

    pub fn select_tag(&mut self, tag: &str) -> Result<Toggle> {
        let toggled = self.handle.update(|s| s.toggle_tag(tag))?;
        self.dialog.item_selected();
        Ok(toggled)
    }

    pub fn clear_tags(&mut self) {
        self.handle.update(|s| s.clear_tags());
    }
}

impl FilterSurface for MobileDrawer {
    type View = DrawerView;

    fn handle(&self) -> &FilterHandle {
        &self.handle
    }

    fn render(&mut self) -> DrawerView {
        let (state, revision) = self.handle.read(|s| (s.snapshot(), s.revision()));
        self.rendered = Some(revision);

        let domain = state.active_domain();
        let taxonomy = self.resolver.taxonomy();
        let categories = self
            .resolver
            .relevant_categories(domain)
            .iter()
            .map(|name| DrawerCategory {
                name: name.clone(),
                tags: taxonomy
                    .tags_in(name)
                    .iter()
                    .map(|t| Chip::tag(t, state.is_tag_selected(t)))
                    .collect(),
            })
            .collect();

        DrawerView {
            revision,
            icon: Icon::Menu,
            open: self.dialog.is_open(),
            domain,
            categories,
            active_tags: state.selected_tags().to_vec(),
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

    #[test]
    fn shows_categories_of_active_domain() {
        let handle = FilterHandle::default();
        handle.update(|s| s.set_active_domain(Domain::Venues));
        let mut drawer = MobileDrawer::new(handle, ContextResolver::builtin(), true);

        let view = drawer.render();
        let names: Vec<&str> = view.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Venue Types", "Venue Features", "Capacity"]);
    }

    #[test]
    fn selecting_a_tag_closes_the_drawer() {
        let mut drawer = MobileDrawer::new(FilterHandle::default(), ContextResolver::builtin(), true);
        drawer.open();
        drawer.select_tag("Soul").unwrap();

        assert!(!drawer.dialog().is_open());
        let view = drawer.render();
        assert_eq!(view.active_tags, ["Soul"]);
        assert!(view.categories[1].tags.iter().any(|c| c.value == "Soul" && c.selected));
    }

    #[test]
    fn drawer_can_stay_open() {
        let mut drawer = MobileDrawer::new(FilterHandle::default(), ContextResolver::builtin(), false);
        drawer.open();
        drawer.select_tag("Soul").unwrap();
        assert!(drawer.dialog().is_open());
    }

    #[test]
    fn rejected_tag_keeps_drawer_open() {
        let mut drawer = MobileDrawer::new(FilterHandle::default(), ContextResolver::builtin(), true);
        drawer.open();
        assert!(drawer.select_tag("Polka").is_err());
        assert!(drawer.dialog().is_open());
    }
}
