//! # Rendering
//!
//! Turns library results into terminal text. Every function returns a
//! `String` so output can be checked without a terminal; the command layer
//! does the printing.
//!
//! Column layout uses display width (`unicode-width`), not byte or char
//! counts, so names like "Café Aurora" line up.

use super::styles::{BADGE, HEADING, MUTED, SELECTED, TAG};
use discoverapp::context::{ContextResolver, FacetChoice};
use discoverapp::model::{ContentItem, Domain};
use discoverapp::store::FilterState;
use discoverapp::taxonomy::TagTaxonomy;
use serde::Serialize;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH: usize = 30;
const LOCATION_WIDTH: usize = 20;

fn pad(s: &str, width: usize) -> String {
    let w = s.width();
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut current = 0;
    let limit = max_width.saturating_sub(1);
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > limit {
            break;
        }
        result.push(c);
        current += w;
    }
    result.push('…');
    result
}

fn cell(s: &str, width: usize) -> String {
    pad(&truncate_to_width(s, width), width)
}

/// One line per visible item, under a heading with the match count.
pub fn item_list(domain: Domain, items: &[ContentItem], state: &FilterState) -> String {
    let mut out = String::new();
    let heading = format!("{} ({})", domain.label(), items.len());
    let _ = writeln!(out, "{}", HEADING.apply_to(heading));

    if items.is_empty() {
        let _ = writeln!(
            out,
            "  {}",
            MUTED.apply_to(format!("No {} match the current filters.", domain.as_str()))
        );
    }
    for item in items {
        let tags: Vec<String> = item
            .tags
            .iter()
            .map(|t| {
                if state.is_tag_selected(t) {
                    SELECTED.apply_to(t).to_string()
                } else {
                    TAG.apply_to(t).to_string()
                }
            })
            .collect();
        let _ = writeln!(
            out,
            "  {}  {}  {}  {}",
            cell(&item.name, NAME_WIDTH),
            MUTED.apply_to(cell(&item.location, LOCATION_WIDTH)),
            BADGE.apply_to(format!("[{}]", item.badge())),
            tags.join(", ")
        );
    }

    if let Some(summary) = filter_summary(state) {
        let _ = writeln!(out, "\n{}", MUTED.apply_to(summary));
    }
    out
}

/// Active filters in one line, `None` when nothing constrains the list.
pub fn filter_summary(state: &FilterState) -> Option<String> {
    let domain = state.active_domain();
    let mut parts = Vec::new();
    let search = state.search_text().trim();
    if !search.is_empty() {
        parts.push(format!("search \"{}\"", search));
    }
    if !state.selected_tags().is_empty() {
        parts.push(format!("tags {}", state.selected_tags().join(", ")));
    }
    let attribute = state.attribute(domain);
    if attribute != "all" {
        parts.push(format!("type {}", attribute));
    }
    if domain == Domain::Artists && state.disciplinary().as_str() != "all" {
        parts.push(state.disciplinary().label().to_lowercase());
    }
    if !state.active_subfilters().is_empty() {
        parts.push(format!("subfilters {}", state.active_subfilters().join(", ")));
    }
    if parts.is_empty() {
        None
    } else {
        Some(format!("Filters: {}", parts.join(" · ")))
    }
}

#[derive(Serialize)]
struct ListJson<'a> {
    domain: Domain,
    count: usize,
    filters: &'a FilterState,
    items: &'a [ContentItem],
}

pub fn item_list_json(domain: Domain, items: &[ContentItem], state: &FilterState) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ListJson {
        domain,
        count: items.len(),
        filters: state,
        items,
    })
}

/// Categories and tags of the given domains.
pub fn tag_tree(taxonomy: &TagTaxonomy, domains: &[Domain]) -> String {
    let mut out = String::new();
    for (i, domain) in domains.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "{}", HEADING.apply_to(domain.label()));
        let categories = taxonomy.categories_for(*domain);
        if categories.is_empty() {
            let _ = writeln!(out, "  {}", MUTED.apply_to("No tag categories."));
        }
        let width = categories.iter().map(|c| c.width()).max().unwrap_or(0);
        for category in categories {
            let _ = writeln!(
                out,
                "  {}  {}",
                pad(category, width),
                TAG.apply_to(taxonomy.tags_in(category).join(", "))
            );
        }
    }
    out
}

fn choice_lines(out: &mut String, choices: &[FacetChoice]) {
    let width = choices.iter().map(|c| c.value.width()).max().unwrap_or(0);
    for choice in choices {
        let _ = writeln!(
            out,
            "  {}  {}",
            pad(&choice.value, width),
            MUTED.apply_to(&choice.label)
        );
    }
}

pub fn subfilter_list(resolver: &ContextResolver, domain: Domain) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", HEADING.apply_to(format!("{} subfilters", domain.label())));
    choice_lines(&mut out, &resolver.relevant_subfilters(domain));
    out
}

pub fn attribute_list(resolver: &ContextResolver, domain: Domain) -> String {
    let mut out = String::new();
    let selector = resolver.attribute_selector(domain);
    let _ = writeln!(out, "{}", HEADING.apply_to(selector.label));
    choice_lines(&mut out, &resolver.attribute_options(domain));
    if domain == Domain::Artists {
        let _ = writeln!(out, "\n{}", HEADING.apply_to("Disciplinary Type"));
        choice_lines(&mut out, &resolver.disciplinary_options());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use discoverapp::store::FilterStore;

    fn item(name: &str) -> ContentItem {
        ContentItem::new("1", Domain::Venues, name, "Brooklyn, NY")
            .with_tags(["Live Music"])
            .with_subtype("Club")
    }

    #[test]
    fn test_pad_uses_display_width() {
        assert_eq!(pad("Café", 6), "Café  ");
        assert_eq!(pad("日本", 6), "日本  ");
        assert_eq!(pad("toolong", 3), "toolong");
    }

    #[test]
    fn test_truncate_adds_ellipsis() {
        assert_eq!(truncate_to_width("Harmony Concert Hall", 10), "Harmony C…");
        assert_eq!(truncate_to_width("Short", 10), "Short");
    }

    #[test]
    fn test_item_list_shows_count_and_badge() {
        let out = item_list(Domain::Venues, &[item("The Electric Room")], &FilterState::default());
        assert!(out.contains("Venues (1)"));
        assert!(out.contains("The Electric Room"));
        assert!(out.contains("[Club]"));
        assert!(!out.contains("Filters:"));
    }

    #[test]
    fn test_empty_list_message() {
        let out = item_list(Domain::Brands, &[], &FilterState::default());
        assert!(out.contains("No brands match the current filters."));
    }

    #[test]
    fn test_filter_summary_lists_active_dimensions() {
        let mut store = FilterStore::new();
        store.set_search_text(" austin ");
        store.toggle_tag("Jazz").unwrap();
        store.toggle_subfilter("producers").unwrap();
        let summary = filter_summary(store.state()).unwrap();
        assert_eq!(summary, "Filters: search \"austin\" · tags Jazz · subfilters producers");
    }

    #[test]
    fn test_json_output_includes_filters() {
        let json = item_list_json(Domain::Venues, &[item("The Electric Room")], &FilterState::default()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["count"], 1);
        assert_eq!(value["items"][0]["subtype"], "Club");
        assert_eq!(value["filters"]["active_domain"], "artists");
    }

    #[test]
    fn test_attribute_list_for_artists_has_disciplinary() {
        let out = attribute_list(&ContextResolver::builtin(), Domain::Artists);
        assert!(out.contains("Artist Style"));
        assert!(out.contains("Disciplinary Type"));
        assert!(out.contains("multi"));
    }

    #[test]
    fn test_tag_tree_for_one_domain() {
        let out = tag_tree(TagTaxonomy::builtin(), &[Domain::Events]);
        assert!(out.contains("Event Setting"));
        assert!(out.contains("Outdoor"));
        assert!(!out.contains("Venue Types"));
    }
}
