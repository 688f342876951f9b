//! Terminal styles.
//!
//! Code refers to styles by what they mark (a heading, a selected chip, muted
//! metadata), never by color. `console` drops the escapes on its own when
//! stdout is not a terminal or `NO_COLOR` is set.

use console::Style;
use once_cell::sync::Lazy;

pub static HEADING: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().color256(246));
pub static BADGE: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static TAG: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static SELECTED: Lazy<Style> = Lazy::new(|| Style::new().green().bold());
