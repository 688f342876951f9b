//! The filter predicate engine.
//!
//! An item is visible when every dimension of the [`FilterState`] accepts it
//! (AND across dimensions). Each dimension has its own predicate so callers and
//! tests can probe them separately:
//!
//! | Dimension | Predicate | Inactive when |
//! |-----------|-----------|---------------|
//! | search text | [`matches_search`] | text is blank |
//! | selected tags | [`matches_tags`] | no tags selected |
//! | domain attribute | [`matches_attribute`] | value is `"all"` |
//! | subfilters | [`matches_subfilters`] | none active, or the item is outside the active domain |
//!
//! ## Tag Semantics
//!
//! Selected tags combine with AND by default: an item must carry **every**
//! selected tag, so each added tag narrows the result. `TagMatch::Any` is the
//! opt-in alternative where one shared tag is enough.
//!
//! Everything here is pure: no I/O, no errors, and [`filter_catalog`] keeps
//! the input order of the items it returns.

use super::spec::{attribute_selector, subfilter_spec, AttributeKind, FacetOption, SubfilterRule};
use crate::model::{ContentItem, Domain, TagMatch};
use crate::store::FilterState;

/// True if `item` passes every active dimension of `state`.
pub fn matches(item: &ContentItem, state: &FilterState) -> bool {
    matches_search(item, state.search_text())
        && matches_tags(item, state.selected_tags(), state.tag_match())
        && matches_attribute(item, state)
        && (item.domain != state.active_domain()
            || matches_subfilters(item, state.active_domain(), state.active_subfilters()))
}

/// Stable filter over a catalog slice.
pub fn filter_catalog(items: &[ContentItem], state: &FilterState) -> Vec<ContentItem> {
    filter_refs(items, state).into_iter().cloned().collect()
}

/// Like [`filter_catalog`] but borrows the matching items.
pub fn filter_refs<'a>(items: &'a [ContentItem], state: &FilterState) -> Vec<&'a ContentItem> {
    items.iter().filter(|item| matches(item, state)).collect()
}

pub fn count_matches(items: &[ContentItem], state: &FilterState) -> usize {
    items.iter().filter(|item| matches(item, state)).count()
}

/// Case-insensitive substring search over name, location and tags.
pub fn matches_search(item: &ContentItem, text: &str) -> bool {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    item.name.to_lowercase().contains(&needle)
        || item.location.to_lowercase().contains(&needle)
        || item.tags.iter().any(|t| t.to_lowercase().contains(&needle))
}

pub fn matches_tags(item: &ContentItem, selected: &[String], mode: TagMatch) -> bool {
    if selected.is_empty() {
        return true;
    }
    match mode {
        TagMatch::All => selected.iter().all(|tag| item.tags.contains(tag)),
        TagMatch::Any => selected.iter().any(|tag| item.tags.contains(tag)),
    }
}

/// Checks the attribute selected for the item's own domain.
///
/// The active domain plays no part here: an artist style never affects a
/// venue, whichever tab is showing.
pub fn matches_attribute(item: &ContentItem, state: &FilterState) -> bool {
    if item.domain == Domain::Artists && !state.disciplinary().accepts(item.multidisciplinary) {
        return false;
    }

    let value = state.attribute(item.domain);
    let selector = attribute_selector(item.domain);
    let Some(option) = selector.option(value) else {
        // The store rejects unknown options on every entry path.
        return true;
    };
    if option.is_all() {
        return true;
    }

    match selector.kind {
        AttributeKind::Style => item.styles.iter().any(|s| option.names(s)),
        AttributeKind::Subtype => {
            if option.catch_all {
                !selector
                    .options
                    .iter()
                    .filter(|o| !o.is_all() && !o.catch_all)
                    .any(|o| subtype_matches(item, o))
            } else {
                subtype_matches(item, option)
            }
        }
    }
}

fn subtype_matches(item: &ContentItem, option: &FacetOption) -> bool {
    item.subtype.as_deref().is_some_and(|s| option.names(s))
        || item.kind.as_deref().is_some_and(|k| option.names(k))
}

/// Every active subfilter must be satisfied by some attribute of the item.
pub fn matches_subfilters(item: &ContentItem, domain: Domain, active: &[String]) -> bool {
    active.iter().all(|value| match subfilter_spec(domain, value) {
        Some(spec) => satisfies(item, spec.rule),
        None => true,
    })
}

fn satisfies(item: &ContentItem, rule: SubfilterRule) -> bool {
    let SubfilterRule::AnyOf(needles) = rule else {
        return true;
    };
    let hit = |text: &str| needles.iter().any(|n| text.trim().eq_ignore_ascii_case(n));

    item.tags.iter().any(|t| hit(t.as_str()))
        || item.subtype.as_deref().is_some_and(hit)
        || item.kind.as_deref().is_some_and(hit)
        || item.styles.iter().any(|s| hit(s.as_str()))
        || item.disciplines.iter().any(|d| hit(d.as_str()))
}
