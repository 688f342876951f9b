use discoverapp::api::DiscoverApi;
use discoverapp::catalog::sample_catalog;
use discoverapp::config::DiscoverConfig;
use discoverapp::model::{Domain, ViewerRole};
use discoverapp::surfaces::{FilterSurface, KeyPress, PaletteEntry, PanelBody, PanelTab};

#[test]
fn test_palette_selection_shows_up_in_panel_and_drawer() {
    let api = DiscoverApi::new(sample_catalog(), &DiscoverConfig::default()).unwrap();
    let mut panel = api.desktop_panel();
    let mut drawer = api.mobile_drawer();
    let mut palette = api.quick_filter();

    panel.select_tab(PanelTab::Tags);
    panel.render();
    drawer.render();

    palette.handle_key(KeyPress::meta('k'));
    palette.set_query("blue");
    let view = palette.render();
    let entry = view
        .groups
        .iter()
        .flat_map(|g| g.entries.iter())
        .find(|e| e.label() == "Blues")
        .cloned()
        .unwrap();
    palette.select(&entry).unwrap();

    assert!(!palette.dialog().is_open());
    assert!(panel.is_stale());
    assert!(drawer.is_stale());

    let PanelBody::Tags { active_tags, .. } = panel.render().body else {
        panic!("expected tags tab");
    };
    assert_eq!(active_tags, ["Blues"]);
    assert_eq!(drawer.render().active_tags, ["Blues"]);
    assert!(!panel.is_stale());
}

#[test]
fn test_role_change_from_palette_reaches_user_tab() {
    let api = DiscoverApi::new(sample_catalog(), &DiscoverConfig::default()).unwrap();
    let mut panel = api.desktop_panel();
    let mut palette = api.quick_filter();

    palette.handle_key(KeyPress::ctrl('k'));
    palette
        .select(&PaletteEntry::Role {
            role: ViewerRole::Resource,
            active: false,
        })
        .unwrap();
    assert!(palette.dialog().is_open());

    panel.select_tab(PanelTab::User);
    let PanelBody::User { roles } = panel.render().body else {
        panic!("expected user tab");
    };
    let active: Vec<&str> = roles.iter().filter(|r| r.selected).map(|r| r.value.as_str()).collect();
    assert_eq!(active, ["resource"]);
}

#[test]
fn test_domain_switch_in_panel_resets_drawer_categories() {
    let api = DiscoverApi::new(sample_catalog(), &DiscoverConfig::default()).unwrap();
    let mut panel = api.desktop_panel();
    let mut drawer = api.mobile_drawer();

    panel.toggle_subfilter("producers").unwrap();
    panel.select_domain(Domain::Brands);

    let view = drawer.render();
    assert_eq!(view.domain, Domain::Brands);
    assert_eq!(view.categories[0].name, "Brand Types");
    assert!(api.snapshot().active_subfilters().is_empty());
}

#[test]
fn test_stale_subfilter_from_old_domain_is_rejected() {
    let api = DiscoverApi::new(sample_catalog(), &DiscoverConfig::default()).unwrap();
    let mut panel = api.desktop_panel();
    let mut other = api.desktop_panel();

    other.select_domain(Domain::Venues);
    let err = panel.toggle_subfilter("vocalists").unwrap_err();
    assert!(err.is_invariant_violation());
    assert!(api.snapshot().active_subfilters().is_empty());
}
