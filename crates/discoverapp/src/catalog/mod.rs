//! # Catalog Sources
//!
//! The engine never owns content. It asks a [`CatalogSource`] for the items of
//! a domain and filters what it gets back.
//!
//! - [`InMemoryCatalog`]: a plain vector of items, optionally loaded from a
//!   JSON array of [`ContentItem`]s.
//! - [`sample_catalog`]: the demo content the discovery page ships with.
//!
//! Item ids are unique within a domain. Two domains may reuse an id, which is
//! why navigation goes through [`ItemRef`](crate::model::ItemRef).

mod sample;

pub use sample::sample_catalog;

use crate::error::Result;
use crate::model::{ContentItem, Domain};
use std::fs;
use std::path::Path;

/// Supplies catalog items to the engine.
pub trait CatalogSource {
    /// Items of `domain` in catalog order.
    fn items(&self, domain: Domain) -> Vec<ContentItem>;

    /// Items of every domain, domain by domain in tab order.
    fn all_items(&self) -> Vec<ContentItem> {
        Domain::ALL.into_iter().flat_map(|d| self.items(d)).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryCatalog {
    items: Vec<ContentItem>,
}

impl InMemoryCatalog {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }

    pub fn push(&mut self, item: ContentItem) {
        self.items.push(item);
    }

    /// Parse a JSON array of items.
    pub fn from_json(json: &str) -> Result<Self> {
        let items: Vec<ContentItem> = serde_json::from_str(json)?;
        Ok(Self::new(items))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let catalog = Self::from_json(&content)?;
        tracing::debug!(path = %path.display(), items = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn find(&self, domain: Domain, id: &str) -> Option<&ContentItem> {
        self.items.iter().find(|i| i.domain == domain && i.id == id)
    }
}

impl CatalogSource for InMemoryCatalog {
    fn items(&self, domain: Domain) -> Vec<ContentItem> {
        self.items
            .iter()
            .filter(|i| i.domain == domain)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DiscoverError;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const JSON: &str = r#"[
        {"id": "s1", "domain": "resources", "name": "Downtown Recording Studio",
         "location": "New York, NY", "tags": ["Studio"], "subtype": "Space", "kind": "space"},
        {"id": "1", "domain": "artists", "name": "Elena Rivera", "tags": ["Vocalist"]},
        {"id": "1", "domain": "venues", "name": "The Electric Room", "subtype": "Club"}
    ]"#;

    #[test]
    fn from_json_reads_optional_fields() {
        let catalog = InMemoryCatalog::from_json(JSON).unwrap();
        assert_eq!(catalog.len(), 3);

        let studio = catalog.find(Domain::Resources, "s1").unwrap();
        assert_eq!(studio.kind.as_deref(), Some("space"));
        let elena = catalog.find(Domain::Artists, "1").unwrap();
        assert_eq!(elena.location, "");
        assert!(elena.subtype.is_none());
    }

    #[test]
    fn ids_are_scoped_by_domain() {
        let catalog = InMemoryCatalog::from_json(JSON).unwrap();
        assert_eq!(catalog.find(Domain::Venues, "1").unwrap().name, "The Electric Room");
        assert!(catalog.find(Domain::Brands, "1").is_none());
    }

    #[test]
    fn items_are_grouped_by_domain_in_tab_order() {
        let catalog = InMemoryCatalog::from_json(JSON).unwrap();
        let ids: Vec<(Domain, String)> = catalog
            .all_items()
            .into_iter()
            .map(|i| (i.domain, i.id))
            .collect();
        assert_eq!(
            ids,
            vec![
                (Domain::Artists, "1".to_string()),
                (Domain::Resources, "s1".to_string()),
                (Domain::Venues, "1".to_string()),
            ]
        );
    }

    #[test]
    fn invalid_json_is_a_serialization_error() {
        let err = InMemoryCatalog::from_json(r#"[{"id": "x", "domain": "planets", "name": "Mars"}]"#)
            .unwrap_err();
        assert!(matches!(err, DiscoverError::Serialization(_)));
    }

    #[test]
    fn load_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(JSON.as_bytes()).unwrap();
        let catalog = InMemoryCatalog::load(file.path()).unwrap();
        assert_eq!(catalog.items(Domain::Resources).len(), 1);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = InMemoryCatalog::load(&dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, DiscoverError::Io(_)));
    }
}
