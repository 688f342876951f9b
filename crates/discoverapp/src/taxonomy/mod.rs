//! # Tag Taxonomy
//!
//! Static vocabulary of selectable tags: `domain → ordered categories` and
//! `category → ordered tags`, plus the flat deduplicated tag universe.
//!
//! The taxonomy is immutable once built. The process-wide instance is
//! [`TagTaxonomy::builtin`]; custom vocabularies go through
//! [`TagTaxonomy::builder`].
//!
//! ## Lookup Misses
//!
//! Taxonomy data is not guaranteed to be complete for every domain, so a miss
//! is never an error:
//!
//! | Query | Miss returns |
//! |-------|--------------|
//! | [`TagTaxonomy::categories_for`] | `&[]` |
//! | [`TagTaxonomy::tags_in`] | `&[]` |
//! | [`TagTaxonomy::contains_tag`] | `false` |
//!
//! Items may carry tags the taxonomy does not know. Those tags stay visible as
//! item metadata but can never be selected as a facet.

mod builtin;

use crate::model::Domain;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

static BUILTIN: Lazy<Arc<TagTaxonomy>> = Lazy::new(|| {
    let taxonomy = builtin::BUILTIN_CATEGORIES
        .iter()
        .fold(TagTaxonomy::builder(), |builder, (domain, category, tags)| {
            builder.category(*domain, *category, tags.iter().copied())
        })
        .build();
    Arc::new(taxonomy)
});

#[derive(Debug, Clone, Default)]
pub struct TagTaxonomy {
    domains: BTreeMap<Domain, Vec<String>>,
    categories: HashMap<String, Vec<String>>,
    all: Vec<String>,
    known: HashSet<String>,
}

impl TagTaxonomy {
    /// The process-wide taxonomy seeded with the product vocabulary.
    pub fn builtin() -> &'static TagTaxonomy {
        &BUILTIN
    }

    /// Shared handle to the built-in taxonomy, for stores and resolvers.
    pub fn shared() -> Arc<TagTaxonomy> {
        Arc::clone(&BUILTIN)
    }

    pub fn builder() -> TagTaxonomyBuilder {
        TagTaxonomyBuilder::default()
    }

    pub fn categories_for(&self, domain: Domain) -> &[String] {
        self.domains.get(&domain).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn tags_in(&self, category: &str) -> &[String] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every tag, deduplicated, in first-registered order.
    pub fn all_tags(&self) -> &[String] {
        &self.all
    }

    /// Tags of all categories belonging to `domain`, deduplicated.
    pub fn tags_for(&self, domain: Domain) -> Vec<String> {
        let mut seen = HashSet::new();
        self.categories_for(domain)
            .iter()
            .flat_map(|category| self.tags_in(category))
            .filter(|tag| seen.insert(tag.as_str()))
            .cloned()
            .collect()
    }

    pub fn contains_tag(&self, tag: &str) -> bool {
        self.known.contains(tag)
    }
}

/// Accumulates categories; registering the same category twice merges its tags.
#[derive(Debug, Default)]
pub struct TagTaxonomyBuilder {
    taxonomy: TagTaxonomy,
}

impl TagTaxonomyBuilder {
    pub fn category<I, T>(mut self, domain: Domain, name: impl Into<String>, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let name = name.into();
        let tx = &mut self.taxonomy;

        let domain_categories = tx.domains.entry(domain).or_default();
        if !domain_categories.contains(&name) {
            domain_categories.push(name.clone());
        }

        let category_tags = tx.categories.entry(name).or_default();
        for tag in tags {
            let tag = tag.into();
            if !category_tags.contains(&tag) {
                category_tags.push(tag.clone());
            }
            if tx.known.insert(tag.clone()) {
                tx.all.push(tag);
            }
        }
        self
    }

    pub fn build(self) -> TagTaxonomy {
        self.taxonomy
    }
}
