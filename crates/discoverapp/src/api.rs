//! # API Facade
//!
//! [`DiscoverApi`] is the single entry point for clients. It owns the shared
//! [`FilterHandle`] of a session and a [`CatalogSource`], and hands out
//! surfaces bound to that same handle.
//!
//! The facade adds no filtering logic of its own. Mutations forward to the
//! store, results come from [`facets::filter`](crate::facets::filter), and
//! facet vocabularies from the [`ContextResolver`]. It never prints and never
//! touches the terminal.
//!
//! ## Generic Over CatalogSource
//!
//! - Production: `DiscoverApi<InMemoryCatalog>` loaded from JSON or the sample
//! - Testing: any small `CatalogSource` built in the test

use crate::catalog::CatalogSource;
use crate::config::DiscoverConfig;
use crate::context::{ContextResolver, FacetContext};
use crate::error::Result;
use crate::facets::filter::{count_matches, filter_catalog};
use crate::model::{ContentItem, DisciplinaryType, Domain, ItemRef, ViewerRole};
use crate::store::{FilterHandle, FilterState, FilterStore, Toggle};
use crate::surfaces::{DesktopPanel, MobileDrawer, QuickFilterPalette};
use crate::taxonomy::TagTaxonomy;

pub struct DiscoverApi<C: CatalogSource> {
    catalog: C,
    handle: FilterHandle,
    resolver: ContextResolver,
    close_on_select: bool,
}

impl<C: CatalogSource> DiscoverApi<C> {
    /// Start a session with the defaults from `config`.
    pub fn new(catalog: C, config: &DiscoverConfig) -> Result<Self> {
        let initial = config.initial_state()?;
        let mut api = Self::with_state(catalog, initial)?;
        api.close_on_select = config.close_on_select;
        Ok(api)
    }

    /// Start a session from a saved state. Fails if `initial` breaks any
    /// rule a mutation would enforce.
    pub fn with_state(catalog: C, initial: FilterState) -> Result<Self> {
        let store = FilterStore::with_state(initial, TagTaxonomy::shared())?;
        Ok(Self {
            catalog,
            handle: FilterHandle::new(store),
            resolver: ContextResolver::builtin(),
            close_on_select: true,
        })
    }

    pub fn handle(&self) -> FilterHandle {
        self.handle.clone()
    }

    pub fn resolver(&self) -> &ContextResolver {
        &self.resolver
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    pub fn snapshot(&self) -> FilterState {
        self.handle.snapshot()
    }

    pub fn active_domain(&self) -> Domain {
        self.handle.read(|s| s.state().active_domain())
    }

    // --- Results ---

    /// Matching items of the active domain, in catalog order.
    pub fn visible_items(&self) -> Vec<ContentItem> {
        self.visible_in(self.active_domain())
    }

    pub fn visible_in(&self, domain: Domain) -> Vec<ContentItem> {
        let items = self.catalog.items(domain);
        self.handle.read(|s| filter_catalog(&items, s.state()))
    }

    /// Match counts for every domain tab.
    pub fn domain_counts(&self) -> Vec<(Domain, usize)> {
        let state = self.snapshot();
        Domain::ALL
            .into_iter()
            .map(|d| (d, count_matches(&self.catalog.items(d), &state)))
            .collect()
    }

    /// Reference for the navigation collaborator, if the item is currently visible.
    pub fn select_item(&self, domain: Domain, id: &str) -> Option<ItemRef> {
        self.visible_in(domain)
            .iter()
            .find(|i| i.id == id)
            .map(ContentItem::item_ref)
    }

    // --- Facets ---

    pub fn facets(&self) -> FacetContext {
        self.resolver.resolve(self.active_domain())
    }

    pub fn facets_for(&self, domain: Domain) -> FacetContext {
        self.resolver.resolve(domain)
    }

    // --- Surfaces ---

    pub fn desktop_panel(&self) -> DesktopPanel {
        DesktopPanel::new(self.handle(), self.resolver.clone())
    }

    pub fn mobile_drawer(&self) -> MobileDrawer {
        MobileDrawer::new(self.handle(), self.resolver.clone(), self.close_on_select)
    }

    pub fn quick_filter(&self) -> QuickFilterPalette {
        QuickFilterPalette::new(self.handle(), TagTaxonomy::shared())
    }

    // --- Mutations ---

    pub fn set_search_text(&self, text: &str) {
        self.handle.update(|s| s.set_search_text(text));
    }

    pub fn toggle_tag(&self, tag: &str) -> Result<Toggle> {
        self.handle.update(|s| s.toggle_tag(tag))
    }

    pub fn clear_tags(&self) {
        self.handle.update(FilterStore::clear_tags);
    }

    /// Set the attribute of the active domain.
    pub fn set_attribute(&self, value: &str) -> Result<()> {
        let domain = self.active_domain();
        self.set_domain_attribute(domain, value)
    }

    pub fn set_domain_attribute(&self, domain: Domain, value: &str) -> Result<()> {
        self.handle.update(|s| s.set_domain_attribute(domain, value))
    }

    pub fn set_disciplinary_type(&self, disciplinary: DisciplinaryType) {
        self.handle.update(|s| s.set_disciplinary_type(disciplinary));
    }

    pub fn toggle_subfilter(&self, value: &str) -> Result<Toggle> {
        self.handle.update(|s| s.toggle_subfilter(value))
    }

    pub fn clear_subfilters(&self) {
        self.handle.update(FilterStore::clear_subfilters);
    }

    pub fn set_viewer_role(&self, role: ViewerRole) {
        self.handle.update(|s| s.set_viewer_role(role));
    }

    pub fn set_active_domain(&self, domain: Domain) {
        self.handle.update(|s| s.set_active_domain(domain));
    }

    pub fn reset(&self) {
        self.handle.update(FilterStore::reset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{sample_catalog, InMemoryCatalog};
    use crate::surfaces::FilterSurface;

    fn api() -> DiscoverApi<InMemoryCatalog> {
        DiscoverApi::new(sample_catalog(), &DiscoverConfig::default()).unwrap()
    }

    fn names(items: &[ContentItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn starts_on_configured_domain() {
        let config = DiscoverConfig {
            default_domain: "brands".to_string(),
            ..Default::default()
        };
        let api = DiscoverApi::new(sample_catalog(), &config).unwrap();
        assert_eq!(api.active_domain(), Domain::Brands);
        assert_eq!(api.visible_items().len(), 3);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = DiscoverConfig {
            default_role: "admin".to_string(),
            ..Default::default()
        };
        assert!(DiscoverApi::new(sample_catalog(), &config).is_err());
    }

    #[test]
    fn visible_items_follow_active_domain() {
        let api = api();
        api.set_active_domain(Domain::Venues);
        assert_eq!(
            names(&api.visible_items()),
            ["The Electric Room", "Harmony Concert Hall", "Outdoor Amphitheater"]
        );
    }

    #[test]
    fn attribute_applies_to_active_domain() {
        let api = api();
        api.set_active_domain(Domain::Resources);
        api.set_attribute("offerer").unwrap();
        assert_eq!(
            names(&api.visible_items()),
            ["Sound Engineer Services", "Session Musicians Network"]
        );
    }

    #[test]
    fn domain_counts_cover_every_tab() {
        let api = api();
        api.set_search_text("nashville");
        let counts = api.domain_counts();
        assert_eq!(counts.len(), 7);
        assert!(counts.contains(&(Domain::Resources, 2)));
        assert!(counts.contains(&(Domain::Artists, 0)));
    }

    #[test]
    fn subfilter_leaves_other_tab_counts_alone() {
        let api = api();
        let before = api.domain_counts();
        api.toggle_subfilter("producers").unwrap();
        let after = api.domain_counts();

        for ((domain, was), (_, now)) in before.iter().zip(&after) {
            if *domain == Domain::Artists {
                assert!(now < was);
            } else {
                assert_eq!(now, was, "{domain} count changed");
            }
        }

        let venues = after.iter().find(|(d, _)| *d == Domain::Venues).map(|(_, n)| *n);
        api.set_active_domain(Domain::Venues);
        assert_eq!(Some(api.visible_items().len()), venues);
    }

    #[test]
    fn with_state_rejects_unknown_values() {
        let json = r#"{"active_subfilters":["concerts"],"selected_tags":["Polka"],"domain_attribute":{"resources":"boat"}}"#;
        let state: FilterState = serde_json::from_str(json).unwrap();
        assert!(DiscoverApi::with_state(sample_catalog(), state).is_err());
    }

    #[test]
    fn select_item_returns_ref_only_when_visible() {
        let api = api();
        assert_eq!(
            api.select_item(Domain::Artists, "2"),
            Some(ItemRef {
                domain: Domain::Artists,
                id: "2".to_string()
            })
        );
        api.toggle_tag("Soul").unwrap();
        assert_eq!(api.select_item(Domain::Artists, "2"), None);
    }

    #[test]
    fn surfaces_share_the_session() {
        let api = api();
        let mut drawer = api.mobile_drawer();
        let mut panel = api.desktop_panel();
        panel.render();

        drawer.select_tag("Jazz").unwrap();
        assert!(panel.is_stale());
        assert_eq!(api.snapshot().selected_tags(), ["Jazz"]);
        assert_eq!(names(&api.visible_items()), ["James Wilson"]);
    }

    #[test]
    fn reset_restores_configured_defaults() {
        let api = api();
        api.set_active_domain(Domain::Events);
        api.toggle_subfilter("concerts").unwrap();
        api.set_viewer_role(ViewerRole::Artist);
        api.reset();
        assert_eq!(api.snapshot(), FilterState::default());
    }
}
