//! # Surfaces
//!
//! Presentation adapters over one shared [`FilterHandle`]. There are three:
//!
//! - [`DesktopPanel`]: domain tabs plus a tabbed filter panel.
//! - [`MobileDrawer`]: tag categories in a drawer that closes on selection.
//! - [`QuickFilterPalette`]: a `Ctrl/Cmd+K` command palette.
//!
//! None of them keeps a copy of the filter state. Interactions go straight to
//! the store through the handle and views are rebuilt from the store on every
//! [`render`](FilterSurface::render). A view knows the store revision it was
//! built from, so a surface can tell when another surface has moved the state
//! on ([`is_stale`](FilterSurface::is_stale)).
//!
//! Views are plain data. Turning them into pixels or terminal lines is the
//! client's job.

mod desktop;
mod drawer;
mod palette;

pub use desktop::{DesktopPanel, DomainTab, PanelBody, PanelTab, PanelView};
pub use drawer::{DrawerCategory, DrawerView, MobileDrawer};
pub use palette::{KeyPress, PaletteEntry, PaletteGroup, PaletteView, QuickFilterPalette};

use crate::store::FilterHandle;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DialogState {
    #[default]
    Closed,
    Open,
}

/// Open/closed state of a surface's dialog or drawer.
///
/// Each surface owns its own; opening the palette says nothing about the
/// drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Dialog {
    state: DialogState,
    close_on_select: bool,
}

impl Dialog {
    pub fn new(close_on_select: bool) -> Self {
        Self {
            state: DialogState::Closed,
            close_on_select,
        }
    }

    pub fn state(&self) -> DialogState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == DialogState::Open
    }

    pub fn close_on_select(&self) -> bool {
        self.close_on_select
    }

    pub fn open(&mut self) {
        self.state = DialogState::Open;
    }

    pub fn close(&mut self) {
        self.state = DialogState::Closed;
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            DialogState::Open => DialogState::Closed,
            DialogState::Closed => DialogState::Open,
        };
    }

    /// An item inside the dialog was picked.
    pub fn item_selected(&mut self) {
        if self.close_on_select {
            self.close();
        }
    }
}

/// A selectable value with its display label and selection marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chip {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

impl Chip {
    pub fn new(value: impl Into<String>, label: impl Into<String>, selected: bool) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            selected,
        }
    }

    /// A chip whose label is its value, as used for tags.
    pub fn tag(tag: &str, selected: bool) -> Self {
        Self::new(tag, tag, selected)
    }
}

/// Contract shared by all surfaces.
pub trait FilterSurface {
    type View;

    fn handle(&self) -> &FilterHandle;

    /// Build a view from the current store state.
    fn render(&mut self) -> Self::View;

    fn dialog(&self) -> &Dialog;

    /// Revision of the last render, `None` before the first one.
    fn rendered_revision(&self) -> Option<u64>;

    /// True when the store has changed since the last render.
    fn is_stale(&self) -> bool {
        self.rendered_revision() != Some(self.handle().revision())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialog_starts_closed() {
        assert_eq!(Dialog::new(true).state(), DialogState::Closed);
    }

    #[test]
    fn toggle_flips_state() {
        let mut dialog = Dialog::new(false);
        dialog.toggle();
        assert!(dialog.is_open());
        dialog.toggle();
        assert!(!dialog.is_open());
    }

    #[test]
    fn item_selection_closes_only_with_close_on_select() {
        let mut closing = Dialog::new(true);
        closing.open();
        closing.item_selected();
        assert!(!closing.is_open());

        let mut sticky = Dialog::new(false);
        sticky.open();
        sticky.item_selected();
        assert!(sticky.is_open());
    }
}
