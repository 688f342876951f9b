//! # Facets
//!
//! Per-domain facet vocabularies ([`spec`]) and the predicate engine that
//! evaluates a filter state against catalog items ([`filter`]).

pub mod filter;
pub mod spec;

pub use filter::{count_matches, filter_catalog, filter_refs, matches};
pub use spec::{
    attribute_selector, subfilter_spec, subfilters_for, AttributeKind, AttributeSelector,
    FacetOption, SubfilterRule, SubfilterSpec,
};
