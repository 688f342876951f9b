use super::{Chip, Dialog, FilterSurface};
use crate::context::ContextResolver;
use crate::error::Result;
use crate::model::{DisciplinaryType, Domain, Icon, ViewerRole};
use crate::store::{FilterHandle, FilterState, Toggle};
use serde::Serialize;

/// Inner tabs of the desktop filter panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelTab {
    #[default]
    Main,
    Tags,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainTab {
    pub domain: Domain,
    pub label: &'static str,
    pub icon: Icon,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "tab", rename_all = "lowercase")]
pub enum PanelBody {
    Main {
        attribute_label: String,
        attributes: Vec<Chip>,
        /// Artists only.
        disciplinary: Vec<Chip>,
        subfilters: Vec<Chip>,
        active_subfilters: Vec<String>,
    },
    Tags {
        context_tags: Vec<Chip>,
        active_tags: Vec<String>,
    },
    User {
        roles: Vec<Chip>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelView {
    pub revision: u64,
    pub domain_tabs: Vec<DomainTab>,
    pub panel_open: bool,
    pub tab: PanelTab,
    pub body: PanelBody,
}

/// Domain tabs with a toggleable filter panel.
///
/// Picking an option in the panel leaves it open; it only closes on an
/// explicit [`close_panel`](Self::close_panel) or [`toggle_panel`](Self::toggle_panel).
#[derive(Debug, Clone)]
pub struct DesktopPanel {
    handle: FilterHandle,
    resolver: ContextResolver,
    dialog: Dialog,
    tab: PanelTab,
    rendered: Option<u64>,
}

impl DesktopPanel {
    pub fn new(handle: FilterHandle, resolver: ContextResolver) -> Self {
        Self {
            handle,
            resolver,
            dialog: Dialog::new(false),
            tab: PanelTab::Main,
            rendered: None,
        }
    }

    pub fn tab(&self) -> PanelTab {
        self.tab
    }

    pub fn select_tab(&mut self, tab: PanelTab) {
        self.tab = tab;
    }

    pub fn toggle_panel(&mut self) {
        self.dialog.toggle();
    }

    pub fn close_panel(&mut self) {
        self.dialog.close();
    }

    pub fn select_domain(&mut self, domain: Domain) {
        self.handle.update(|s| s.set_active_domain(domain));
    }

    /// Set the attribute of the active domain.
    pub fn select_attribute(&mut self, value: &str) -> Result<()> {
        self.handle.update(|s| {
            let domain = s.state().active_domain();
            s.set_domain_attribute(domain, value)
        })?;
        self.dialog.item_selected();
        Ok(())
    }

    pub fn select_disciplinary(&mut self, disciplinary: DisciplinaryType) {
        self.handle.update(|s| s.set_disciplinary_type(disciplinary));
        self.dialog.item_selected();
    }

    pub fn toggle_subfilter(&mut self, value: &str) -> Result<Toggle> {
        let toggled = self.handle.update(|s| s.toggle_subfilter(value))?;
        self.dialog.item_selected();
        Ok(toggled)
    }

    pub fn clear_subfilters(&mut self) {
        self.handle.update(|s| s.clear_subfilters());
    }

    pub fn toggle_tag(&mut self, tag: &str) -> Result<Toggle> {
        let toggled = self.handle.update(|s| s.toggle_tag(tag))?;
        self.dialog.item_selected();
        Ok(toggled)
    }

    pub fn clear_tags(&mut self) {
        self.handle.update(|s| s.clear_tags());
    }

    pub fn select_role(&mut self, role: ViewerRole) {
        self.handle.update(|s| s.set_viewer_role(role));
        self.dialog.item_selected();
    }

    fn body(&self, state: &FilterState) -> PanelBody {
        let domain = state.active_domain();
        match self.tab {
            PanelTab::Main => {
                let current = state.attribute(domain);
                let attributes = self
                    .resolver
                    .attribute_options(domain)
                    .into_iter()
                    .map(|o| {
                        let selected = o.value == current;
                        Chip::new(o.value, o.label, selected)
                    })
                    .collect();
                let disciplinary = if domain == Domain::Artists {
                    self.resolver
                        .disciplinary_options()
                        .into_iter()
                        .map(|o| {
                            let selected = o.value == state.disciplinary().as_str();
                            Chip::new(o.value, o.label, selected)
                        })
                        .collect()
                } else {
                    Vec::new()
                };
                let subfilters = self
                    .resolver
                    .relevant_subfilters(domain)
                    .into_iter()
                    .map(|o| {
                        let selected = state.is_subfilter_active(&o.value);
                        Chip::new(o.value, o.label, selected)
                    })
                    .collect();
                PanelBody::Main {
                    attribute_label: self.resolver.attribute_selector(domain).label.to_string(),
                    attributes,
                    disciplinary,
                    subfilters,
                    active_subfilters: state.active_subfilters().to_vec(),
                }
            }
            PanelTab::Tags => PanelBody::Tags {
                context_tags: self
                    .resolver
                    .context_tags(domain, self.resolver.taxonomy().all_tags())
                    .iter()
                    .map(|t| Chip::tag(t, state.is_tag_selected(t)))
                    .collect(),
                active_tags: state.selected_tags().to_vec(),
            },
            PanelTab::User => PanelBody::User {
                roles: ViewerRole::ALL
                    .iter()
                    .map(|r| Chip::new(r.as_str(), r.label(), *r == state.viewer_role()))
                    .collect(),
            },
        }
    }
}

impl FilterSurface for DesktopPanel {
    type View = PanelView;

    fn handle(&self) -> &FilterHandle {
        &self.handle
    }

    fn render(&mut self) -> PanelView {
        let (state, revision) = self.handle.read(|s| (s.snapshot(), s.revision()));
        self.rendered = Some(revision);

        let domain_tabs = Domain::ALL
            .into_iter()
            .map(|d| DomainTab {
                domain: d,
                label: d.label(),
                icon: d.icon(),
                active: d == state.active_domain(),
            })
            .collect();

        PanelView {
            revision,
            domain_tabs,
            panel_open: self.dialog.is_open(),
            tab: self.tab,
            body: self.body(&state),
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

    fn panel() -> DesktopPanel {
        DesktopPanel::new(FilterHandle::default(), ContextResolver::builtin())
    }

    #[test]
    fn main_tab_shows_domain_attribute_and_subfilters() {
        let mut panel = panel();
        panel.select_domain(Domain::Resources);
        let view = panel.render();

        let PanelBody::Main {
            attribute_label,
            attributes,
            disciplinary,
            subfilters,
            ..
        } = view.body
        else {
            panic!("expected main tab");
        };
        assert_eq!(attribute_label, "Resource Type");
        assert_eq!(attributes[0].value, "all");
        assert!(attributes[0].selected);
        assert!(disciplinary.is_empty());
        assert_eq!(subfilters.len(), 4);
    }

    #[test]
    fn artists_main_tab_has_disciplinary_selector() {
        let mut panel = panel();
        panel.select_disciplinary(DisciplinaryType::Multi);
        let PanelBody::Main { disciplinary, .. } = panel.render().body else {
            panic!("expected main tab");
        };
        let selected: Vec<&str> = disciplinary
            .iter()
            .filter(|c| c.selected)
            .map(|c| c.value.as_str())
            .collect();
        assert_eq!(selected, ["multi"]);
    }

    #[test]
    fn tags_tab_marks_selected_context_tags() {
        let mut panel = panel();
        panel.toggle_tag("Jazz").unwrap();
        panel.select_tab(PanelTab::Tags);

        let PanelBody::Tags {
            context_tags,
            active_tags,
        } = panel.render().body
        else {
            panic!("expected tags tab");
        };
        assert!(context_tags.iter().any(|c| c.value == "Jazz" && c.selected));
        assert!(context_tags.iter().any(|c| c.value == "Soul" && !c.selected));
        assert_eq!(active_tags, ["Jazz"]);
    }

    #[test]
    fn user_tab_lists_roles() {
        let mut panel = panel();
        panel.select_role(ViewerRole::Venue);
        panel.select_tab(PanelTab::User);
        let PanelBody::User { roles } = panel.render().body else {
            panic!("expected user tab");
        };
        assert_eq!(roles.len(), 5);
        assert!(roles.iter().any(|r| r.value == "venue" && r.selected));
    }

    #[test]
    fn domain_tab_switch_clears_subfilters() {
        let mut panel = panel();
        panel.toggle_subfilter("vocalists").unwrap();
        panel.select_domain(Domain::Events);

        let view = panel.render();
        assert!(view.domain_tabs.iter().any(|t| t.domain == Domain::Events && t.active));
        assert!(panel.handle().snapshot().active_subfilters().is_empty());
    }

    #[test]
    fn panel_stays_open_after_selection() {
        let mut panel = panel();
        panel.toggle_panel();
        panel.select_attribute("jazz").unwrap();
        assert!(panel.dialog().is_open());
        panel.close_panel();
        assert!(!panel.dialog().is_open());
    }

    #[test]
    fn rejected_selection_keeps_view_fresh() {
        let mut panel = panel();
        panel.render();
        assert!(panel.select_attribute("polka").is_err());
        assert!(!panel.is_stale());
    }
}
