//! # Context Resolver
//!
//! Narrows the facet vocabulary to what is relevant for one domain: the tag
//! categories to show, the attribute options, the subfilter chips and the
//! featured tags of the domain.
//!
//! Every lookup is keyed by [`Domain`], so there is always an answer. The only
//! fail-soft path is [`ContextResolver::resolve_named`], where a domain name
//! that does not parse yields an empty [`FacetContext`].

use crate::facets::spec::{attribute_selector, subfilter_spec, subfilters_for, AttributeSelector, SubfilterSpec};
use crate::model::{DisciplinaryType, Domain};
use crate::taxonomy::TagTaxonomy;
use serde::Serialize;
use std::sync::Arc;

/// Featured tags per domain, in display order.
const FEATURED_TAGS: &[(Domain, &[&str])] = &[
    (
        Domain::Artists,
        &[
            "Vocalist",
            "Guitar",
            "Producer",
            "Rapper",
            "Performance Artist",
            "Visual Artist",
            "R&B",
            "Soul",
            "Blues",
            "Jazz",
        ],
    ),
    (
        Domain::Resources,
        &["Studio", "Gallery", "Practice Room", "Exhibition Space", "Workshop", "Soundproofed"],
    ),
    (
        Domain::Projects,
        &["Music Production", "Photography", "Film", "Budget: $5-10K", "Budget: $2-5K"],
    ),
    (Domain::Events, &["Concert", "Exhibition", "Workshop", "Networking"]),
    (Domain::Venues, &["Concert Hall", "Club", "Theater", "Outdoor"]),
    (Domain::Brands, &["Record Label", "Fashion", "Technology", "Food & Beverage"]),
    (
        Domain::Communities,
        &["Educational", "Professional", "Neighborhood", "Interest-based"],
    ),
];

fn featured(domain: Domain) -> &'static [&'static str] {
    FEATURED_TAGS
        .iter()
        .find(|(d, _)| *d == domain)
        .map(|(_, tags)| *tags)
        .unwrap_or(&[])
}

/// A `{value, label}` pair for a selectable chip or option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetChoice {
    pub value: String,
    pub label: String,
}

impl From<&SubfilterSpec> for FacetChoice {
    fn from(spec: &SubfilterSpec) -> Self {
        Self {
            value: spec.value.to_string(),
            label: spec.label.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryFacet {
    pub name: String,
    pub tags: Vec<String>,
}

/// Everything a surface needs to render the facets of one domain.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FacetContext {
    /// `None` only for the empty context of an unknown domain name.
    pub domain: Option<Domain>,
    pub categories: Vec<CategoryFacet>,
    pub attribute_label: String,
    pub attribute_options: Vec<FacetChoice>,
    /// Non-empty for artists only.
    pub disciplinary_options: Vec<FacetChoice>,
    pub subfilters: Vec<FacetChoice>,
    pub context_tags: Vec<String>,
}

impl FacetContext {
    pub fn is_empty(&self) -> bool {
        self.domain.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct ContextResolver {
    taxonomy: Arc<TagTaxonomy>,
}

impl Default for ContextResolver {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ContextResolver {
    pub fn new(taxonomy: Arc<TagTaxonomy>) -> Self {
        Self { taxonomy }
    }

    pub fn builtin() -> Self {
        Self::new(TagTaxonomy::shared())
    }

    pub fn taxonomy(&self) -> &TagTaxonomy {
        &self.taxonomy
    }

    pub fn relevant_categories(&self, domain: Domain) -> &[String] {
        self.taxonomy.categories_for(domain)
    }

    pub fn relevant_subfilters(&self, domain: Domain) -> Vec<FacetChoice> {
        subfilters_for(domain).iter().map(FacetChoice::from).collect()
    }

    pub fn subfilter(&self, domain: Domain, value: &str) -> Option<&'static SubfilterSpec> {
        subfilter_spec(domain, value)
    }

    /// The featured tags of `domain` that also appear in `all_tags`, in
    /// featured order.
    pub fn context_tags(&self, domain: Domain, all_tags: &[String]) -> Vec<String> {
        featured(domain)
            .iter()
            .filter(|tag| all_tags.iter().any(|t| t == *tag))
            .map(|tag| tag.to_string())
            .collect()
    }

    pub fn attribute_selector(&self, domain: Domain) -> AttributeSelector {
        attribute_selector(domain)
    }

    /// Single-select options for `domain`; the first is always `"all"`.
    pub fn attribute_options(&self, domain: Domain) -> Vec<FacetChoice> {
        attribute_selector(domain)
            .options
            .iter()
            .map(|o| FacetChoice {
                value: o.value.to_string(),
                label: o.label.to_string(),
            })
            .collect()
    }

    pub fn disciplinary_options(&self) -> Vec<FacetChoice> {
        DisciplinaryType::ALL
            .iter()
            .map(|d| FacetChoice {
                value: d.as_str().to_string(),
                label: d.label().to_string(),
            })
            .collect()
    }

    pub fn resolve(&self, domain: Domain) -> FacetContext {
        let categories = self
            .relevant_categories(domain)
            .iter()
            .map(|name| CategoryFacet {
                name: name.clone(),
                tags: self.taxonomy.tags_in(name).to_vec(),
            })
            .collect();
        let disciplinary_options = if domain == Domain::Artists {
            self.disciplinary_options()
        } else {
            Vec::new()
        };

        FacetContext {
            domain: Some(domain),
            categories,
            attribute_label: attribute_selector(domain).label.to_string(),
            attribute_options: self.attribute_options(domain),
            disciplinary_options,
            subfilters: self.relevant_subfilters(domain),
            context_tags: self.context_tags(domain, self.taxonomy.all_tags()),
        }
    }

    /// Like [`resolve`](Self::resolve) for a domain given by name. Unknown
    /// names give an empty context.
    pub fn resolve_named(&self, name: &str) -> FacetContext {
        match Domain::lookup(name) {
            Some(domain) => self.resolve(domain),
            None => {
                tracing::debug!(name, "no facet context for unknown domain");
                FacetContext::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn context_tags_keep_featured_order() {
        let resolver = ContextResolver::builtin();
        let all = tags(&["Outdoor", "Theater", "Jazz", "Club"]);
        assert_eq!(
            resolver.context_tags(Domain::Venues, &all),
            ["Club", "Theater", "Outdoor"]
        );
    }

    #[test]
    fn context_tags_drop_tags_missing_from_universe() {
        // "Concert Hall" is featured for venues but is not a taxonomy tag.
        let resolver = ContextResolver::builtin();
        let ctx = resolver.context_tags(Domain::Venues, resolver.taxonomy().all_tags());
        assert!(!ctx.contains(&"Concert Hall".to_string()));
        assert!(ctx.contains(&"Club".to_string()));
    }

    #[test]
    fn context_tags_empty_universe() {
        let resolver = ContextResolver::builtin();
        assert!(resolver.context_tags(Domain::Artists, &[]).is_empty());
    }

    #[test]
    fn relevant_subfilters_are_value_label_pairs() {
        let subs = ContextResolver::builtin().relevant_subfilters(Domain::Events);
        assert_eq!(subs[0].value, "concerts");
        assert_eq!(subs[0].label, "Concerts");
        assert_eq!(subs.len(), 5);
    }

    #[test]
    fn only_artists_get_disciplinary_options() {
        let resolver = ContextResolver::builtin();
        assert_eq!(resolver.resolve(Domain::Artists).disciplinary_options.len(), 3);
        assert!(resolver.resolve(Domain::Venues).disciplinary_options.is_empty());
    }

    #[test]
    fn resolve_bundles_categories_with_tags() {
        let ctx = ContextResolver::builtin().resolve(Domain::Events);
        assert_eq!(ctx.domain, Some(Domain::Events));
        assert_eq!(ctx.attribute_label, "Event Type");
        assert_eq!(ctx.attribute_options[0].value, "all");
        let names: Vec<&str> = ctx.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Event Types", "Event Duration", "Event Setting"]);
        assert_eq!(ctx.categories[2].tags, ["Outdoor"]);
    }

    #[test]
    fn resolve_named_is_fail_soft() {
        let resolver = ContextResolver::builtin();
        assert!(resolver.resolve_named("spaceships").is_empty());
        assert_eq!(resolver.resolve_named("Venue").domain, Some(Domain::Venues));
    }

    #[test]
    fn custom_taxonomy_narrows_categories() {
        let taxonomy = TagTaxonomy::builder()
            .category(Domain::Brands, "Brand Types", ["Fashion"])
            .build();
        let resolver = ContextResolver::new(Arc::new(taxonomy));
        assert_eq!(resolver.relevant_categories(Domain::Brands), ["Brand Types"]);
        assert!(resolver.relevant_categories(Domain::Artists).is_empty());
        assert_eq!(resolver.resolve(Domain::Brands).context_tags, ["Fashion"]);
    }
}
