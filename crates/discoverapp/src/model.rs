//! # Domain Model
//!
//! Core types shared by every layer of the engine: the seven content
//! [`Domain`]s, the catalog entry [`ContentItem`], and the small closed enums
//! that make up a filter state ([`ViewerRole`], [`DisciplinaryType`],
//! [`TagMatch`]).
//!
//! ## Content Items
//!
//! Items are owned by the catalog collaborator. The engine only reads them, so
//! every field is plain data with serde support for loading catalogs from JSON:
//!
//! ```json
//! { "id": "s1", "domain": "resources", "name": "Downtown Recording Studio",
//!   "location": "New York, NY", "tags": ["Studio"], "subtype": "Space", "kind": "space" }
//! ```
//!
//! Optional fields (`subtype`, `kind`, `multidisciplinary`, `styles`,
//! `disciplines`) default to empty when absent.
//!
//! ## Icons
//!
//! Presentation icons are an explicit [`Icon`] enum reached through
//! [`Domain::icon`], never a lookup keyed by arbitrary strings.

use crate::error::{DiscoverError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Domain {
    #[default]
    Artists,
    Resources,
    Projects,
    Events,
    Venues,
    Communities,
    Brands,
}

impl Domain {
    /// All domains in tab order.
    pub const ALL: [Domain; 7] = [
        Domain::Artists,
        Domain::Resources,
        Domain::Projects,
        Domain::Events,
        Domain::Venues,
        Domain::Communities,
        Domain::Brands,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Artists => "artists",
            Domain::Resources => "resources",
            Domain::Projects => "projects",
            Domain::Events => "events",
            Domain::Venues => "venues",
            Domain::Communities => "communities",
            Domain::Brands => "brands",
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Domain::Artists => "Artists",
            Domain::Resources => "Resources",
            Domain::Projects => "Projects",
            Domain::Events => "Events",
            Domain::Venues => "Venues",
            Domain::Communities => "Communities",
            Domain::Brands => "Brands",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            Domain::Artists => Icon::Music,
            Domain::Resources => Icon::Package,
            Domain::Projects => Icon::Grid,
            Domain::Events => Icon::Calendar,
            Domain::Venues => Icon::MapPin,
            Domain::Communities => Icon::Users,
            Domain::Brands => Icon::Tag,
        }
    }

    /// Lenient lookup: any case, singular or plural. Returns `None` on a miss.
    pub fn lookup(name: &str) -> Option<Domain> {
        let name = name.trim().to_ascii_lowercase();
        Domain::ALL
            .into_iter()
            .find(|d| name == d.as_str() || name == d.singular())
    }

    fn singular(&self) -> &'static str {
        match self {
            Domain::Artists => "artist",
            Domain::Resources => "resource",
            Domain::Projects => "project",
            Domain::Events => "event",
            Domain::Venues => "venue",
            Domain::Communities => "community",
            Domain::Brands => "brand",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = DiscoverError;

    fn from_str(s: &str) -> Result<Self> {
        Domain::lookup(s).ok_or_else(|| DiscoverError::UnknownDomain(s.to_string()))
    }
}

/// Icons available to surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Grid,
    Calendar,
    Users,
    Music,
    Package,
    Search,
    Menu,
    MapPin,
    Tag,
}

impl Icon {
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Grid => "grid",
            Icon::Calendar => "calendar",
            Icon::Users => "users",
            Icon::Music => "music",
            Icon::Package => "package",
            Icon::Search => "search",
            Icon::Menu => "menu",
            Icon::MapPin => "map-pin",
            Icon::Tag => "tag",
        }
    }
}

/// Who the user is browsing as.
///
/// The role changes labels and the actions a surface offers. It never changes
/// which items match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    #[default]
    Regular,
    Artist,
    Venue,
    Brand,
    Resource,
}

impl ViewerRole {
    pub const ALL: [ViewerRole; 5] = [
        ViewerRole::Regular,
        ViewerRole::Artist,
        ViewerRole::Venue,
        ViewerRole::Brand,
        ViewerRole::Resource,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewerRole::Regular => "regular",
            ViewerRole::Artist => "artist",
            ViewerRole::Venue => "venue",
            ViewerRole::Brand => "brand",
            ViewerRole::Resource => "resource",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ViewerRole::Regular => "Regular",
            ViewerRole::Artist => "Artist",
            ViewerRole::Venue => "Venue",
            ViewerRole::Brand => "Brand",
            ViewerRole::Resource => "Resource",
        }
    }
}

impl fmt::Display for ViewerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewerRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        ViewerRole::ALL
            .into_iter()
            .find(|r| r.as_str() == lower)
            .ok_or_else(|| format!("unknown viewer role '{}'", s))
    }
}

/// Artist-only selector over `ContentItem::multidisciplinary`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisciplinaryType {
    #[default]
    All,
    Single,
    Multi,
}

impl DisciplinaryType {
    pub const ALL: [DisciplinaryType; 3] = [
        DisciplinaryType::All,
        DisciplinaryType::Single,
        DisciplinaryType::Multi,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DisciplinaryType::All => "all",
            DisciplinaryType::Single => "single",
            DisciplinaryType::Multi => "multi",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DisciplinaryType::All => "All Artists",
            DisciplinaryType::Single => "Single Discipline",
            DisciplinaryType::Multi => "Multidisciplinary",
        }
    }

    /// Whether an item with the given flag passes. Absent counts as single.
    pub fn accepts(&self, multidisciplinary: Option<bool>) -> bool {
        let multi = multidisciplinary.unwrap_or(false);
        match self {
            DisciplinaryType::All => true,
            DisciplinaryType::Single => !multi,
            DisciplinaryType::Multi => multi,
        }
    }
}

impl FromStr for DisciplinaryType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        DisciplinaryType::ALL
            .into_iter()
            .find(|d| d.as_str() == lower)
            .ok_or_else(|| format!("unknown disciplinary type '{}'", s))
    }
}

/// How selected tags combine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagMatch {
    /// Every selected tag must be present. Adding tags narrows the result.
    #[default]
    All,
    /// At least one selected tag must be present. Adding tags can widen the
    /// result, so selections no longer narrow monotonically.
    Any,
}

impl TagMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            TagMatch::All => "all",
            TagMatch::Any => "any",
        }
    }
}

impl FromStr for TagMatch {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(TagMatch::All),
            "any" => Ok(TagMatch::Any),
            _ => Err(format!("unknown tag match mode '{}' (expected all or any)", s)),
        }
    }
}

/// The `(domain, id)` pair handed to the navigation collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemRef {
    pub domain: Domain,
    pub id: String,
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub domain: Domain,
    pub name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    /// Raw item type as reported by the catalog (e.g. `space`, `tool`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multidisciplinary: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub disciplines: Vec<String>,
}

impl ContentItem {
    pub fn new(
        id: impl Into<String>,
        domain: Domain,
        name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            domain,
            name: name.into(),
            location: location.into(),
            tags: Vec::new(),
            subtype: None,
            kind: None,
            multidisciplinary: None,
            styles: Vec::new(),
            disciplines: Vec::new(),
        }
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_subtype(mut self, subtype: impl Into<String>) -> Self {
        self.subtype = Some(subtype.into());
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    pub fn with_styles<I, T>(mut self, styles: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.styles = styles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_disciplines<I, T>(mut self, disciplines: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.disciplines = disciplines.into_iter().map(Into::into).collect();
        self
    }

    pub fn multidisciplinary(mut self, value: bool) -> Self {
        self.multidisciplinary = Some(value);
        self
    }

    pub fn item_ref(&self) -> ItemRef {
        ItemRef {
            domain: self.domain,
            id: self.id.clone(),
        }
    }

    /// Badge text shown on cards: the subtype, else the raw kind, else the domain label.
    pub fn badge(&self) -> &str {
        self.subtype
            .as_deref()
            .or(self.kind.as_deref())
            .unwrap_or_else(|| self.domain.label())
    }
}
