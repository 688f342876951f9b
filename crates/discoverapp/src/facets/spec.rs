//! Facet option specifications and the per-domain vocabularies.
//!
//! Two kinds of domain-scoped facets exist:
//!
//! - **Attribute selectors**: single-select, one active value per domain,
//!   `"all"` meaning "no constraint". See [`attribute_selector`].
//! - **Subfilters**: multi-select refinements, valid only for the active
//!   domain. See [`subfilters_for`].
//!
//! Both tables are keyed by [`Domain`], so every domain has an entry and a
//! missing option is simply `None`.

use crate::model::Domain;

/// The value meaning "no constraint" for every attribute selector.
pub const ALL: &str = "all";

/// What part of an item an attribute selector inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    /// Matches against `ContentItem::styles`.
    Style,
    /// Matches against `ContentItem::subtype` or `ContentItem::kind`.
    Subtype,
}

/// One entry in a single-select vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacetOption {
    pub value: &'static str,
    pub label: &'static str,
    /// Additional spellings that count as this option when matching items.
    pub aliases: &'static [&'static str],
    /// Matches items that no sibling option matches.
    pub catch_all: bool,
}

impl FacetOption {
    const fn new(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            aliases: &[],
            catch_all: false,
        }
    }

    const fn aliases(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    const fn catch_all(mut self) -> Self {
        self.catch_all = true;
        self
    }

    /// True if `text` names this option by value, label or alias (any case).
    pub fn names(&self, text: &str) -> bool {
        let text = text.trim();
        text.eq_ignore_ascii_case(self.value)
            || text.eq_ignore_ascii_case(self.label)
            || self.aliases.iter().any(|a| text.eq_ignore_ascii_case(a))
    }

    pub fn is_all(&self) -> bool {
        self.value == ALL
    }
}

/// A domain's single-select attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeSelector {
    pub domain: Domain,
    pub label: &'static str,
    pub kind: AttributeKind,
    /// First entry is always the `"all"` option.
    pub options: &'static [FacetOption],
}

impl AttributeSelector {
    /// Resolve user input (value, label or alias) to the canonical option.
    pub fn option(&self, text: &str) -> Option<&'static FacetOption> {
        self.options.iter().find(|o| o.names(text))
    }
}

/// How a subfilter maps onto item attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubfilterRule {
    /// Satisfied when any needle names a tag, the subtype, the kind, a style
    /// or a discipline of the item.
    AnyOf(&'static [&'static str]),
    /// No mapping defined; the subfilter never excludes.
    Unmapped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubfilterSpec {
    pub value: &'static str,
    pub label: &'static str,
    pub rule: SubfilterRule,
}

impl SubfilterSpec {
    const fn new(value: &'static str, label: &'static str, needles: &'static [&'static str]) -> Self {
        Self {
            value,
            label,
            rule: SubfilterRule::AnyOf(needles),
        }
    }

    const fn unmapped(value: &'static str, label: &'static str) -> Self {
        Self {
            value,
            label,
            rule: SubfilterRule::Unmapped,
        }
    }
}

const ARTIST_STYLES: &[FacetOption] = &[
    FacetOption::new(ALL, "All Styles"),
    FacetOption::new("rock", "Rock"),
    FacetOption::new("pop", "Pop"),
    FacetOption::new("hip-hop", "Hip-Hop/Rap").aliases(&["Hip-Hop", "Rap"]),
    FacetOption::new("electronic", "Electronic"),
    FacetOption::new("jazz", "Jazz"),
    FacetOption::new("classical", "Classical"),
    FacetOption::new("folk", "Folk"),
    FacetOption::new("r-and-b", "R&B/Soul").aliases(&["R&B", "Soul"]),
    FacetOption::new("country", "Country"),
    FacetOption::new("experimental", "Experimental"),
];

const RESOURCE_TYPES: &[FacetOption] = &[
    FacetOption::new(ALL, "All Resources"),
    FacetOption::new("space", "Spaces"),
    FacetOption::new("tool", "Tools & Equipment").aliases(&["Tool/Equipment", "Equipment"]),
    FacetOption::new("offerer", "Service Providers").aliases(&["Service Provider", "Service"]),
    FacetOption::new("other", "Other Resources").catch_all(),
];

const PROJECT_TYPES: &[FacetOption] = &[
    FacetOption::new(ALL, "All Projects"),
    FacetOption::new("music", "Music"),
    FacetOption::new("art", "Art").aliases(&["Visual Art"]),
    FacetOption::new("film", "Film"),
    FacetOption::new("fashion", "Fashion"),
    FacetOption::new("tech", "Tech").aliases(&["Technology"]),
];

const EVENT_TYPES: &[FacetOption] = &[
    FacetOption::new(ALL, "All Events"),
    FacetOption::new("concert", "Concerts"),
    FacetOption::new("exhibition", "Exhibitions"),
    FacetOption::new("workshop", "Workshops"),
    FacetOption::new("festival", "Festivals"),
    FacetOption::new("networking", "Networking"),
];

const VENUE_TYPES: &[FacetOption] = &[
    FacetOption::new(ALL, "All Venues"),
    FacetOption::new("club", "Clubs"),
    FacetOption::new("concert-hall", "Concert Halls").aliases(&["Concert Hall"]),
    FacetOption::new("theater", "Theaters").aliases(&["Theatre"]),
    FacetOption::new("outdoor", "Outdoor"),
    FacetOption::new("cafe", "Cafes").aliases(&["Café"]),
    FacetOption::new("gallery", "Galleries"),
];

const COMMUNITY_TYPES: &[FacetOption] = &[
    FacetOption::new(ALL, "All Communities"),
    FacetOption::new("music", "Music"),
    FacetOption::new("art", "Art"),
    FacetOption::new("tech", "Tech"),
    FacetOption::new("social", "Social"),
    FacetOption::new("professional", "Professional"),
    FacetOption::new("interest", "Interest-based").aliases(&["Interest"]),
];

const BRAND_TYPES: &[FacetOption] = &[
    FacetOption::new(ALL, "All Brands"),
    FacetOption::new("label", "Labels").aliases(&["Record Label"]),
    FacetOption::new("equipment", "Equipment"),
    FacetOption::new("fashion", "Fashion"),
    FacetOption::new("food", "Food & Beverage"),
    FacetOption::new("tech", "Tech").aliases(&["Technology"]),
    FacetOption::new("media", "Media"),
];

/// The single-select attribute of `domain`.
pub fn attribute_selector(domain: Domain) -> AttributeSelector {
    let (label, kind, options) = match domain {
        Domain::Artists => ("Artist Style", AttributeKind::Style, ARTIST_STYLES),
        Domain::Resources => ("Resource Type", AttributeKind::Subtype, RESOURCE_TYPES),
        Domain::Projects => ("Project Type", AttributeKind::Subtype, PROJECT_TYPES),
        Domain::Events => ("Event Type", AttributeKind::Subtype, EVENT_TYPES),
        Domain::Venues => ("Venue Type", AttributeKind::Subtype, VENUE_TYPES),
        Domain::Communities => ("Community Type", AttributeKind::Subtype, COMMUNITY_TYPES),
        Domain::Brands => ("Brand Type", AttributeKind::Subtype, BRAND_TYPES),
    };
    AttributeSelector {
        domain,
        label,
        kind,
        options,
    }
}

const ARTIST_SUBFILTERS: &[SubfilterSpec] = &[
    SubfilterSpec::new("vocalists", "Vocalists", &["Vocalist", "Rapper", "Singer"]),
    SubfilterSpec::new("producers", "Producers", &["Producer"]),
    SubfilterSpec::new("instrumentalists", "Instrumentalists", &["Instrumentalist", "Guitar"]),
    SubfilterSpec::new("djs", "DJs", &["DJ"]),
    SubfilterSpec::new("composers", "Composers", &["Composer"]),
];

const RESOURCE_SUBFILTERS: &[SubfilterSpec] = &[
    SubfilterSpec::new("spaces", "Spaces", &["Space"]),
    SubfilterSpec::new("tools", "Tools", &["Tool/Equipment", "Tool", "Equipment Available"]),
    SubfilterSpec::new("services", "Services", &["Service Provider", "Offerer"]),
    SubfilterSpec::unmapped("materials", "Materials"),
];

const PROJECT_SUBFILTERS: &[SubfilterSpec] = &[
    SubfilterSpec::new("music", "Music", &["Music", "Music Production"]),
    SubfilterSpec::new("art", "Art", &["Art", "Visual Arts"]),
    SubfilterSpec::new("film", "Film", &["Film"]),
    SubfilterSpec::new("fashion", "Fashion", &["Fashion"]),
    SubfilterSpec::new("tech", "Tech", &["Tech", "Technology"]),
];

const EVENT_SUBFILTERS: &[SubfilterSpec] = &[
    SubfilterSpec::new("concerts", "Concerts", &["Concert", "Festival"]),
    SubfilterSpec::new("exhibitions", "Exhibitions", &["Exhibition"]),
    SubfilterSpec::new("workshops", "Workshops", &["Workshop"]),
    SubfilterSpec::new("festivals", "Festivals", &["Festival"]),
    SubfilterSpec::new("networking", "Networking", &["Networking"]),
];

const VENUE_SUBFILTERS: &[SubfilterSpec] = &[
    SubfilterSpec::new("clubs", "Clubs", &["Club"]),
    SubfilterSpec::new("concert halls", "Concert Halls", &["Concert Hall"]),
    SubfilterSpec::new("theaters", "Theaters", &["Theater", "Theatre"]),
    SubfilterSpec::new("outdoor", "Outdoor", &["Outdoor"]),
    SubfilterSpec::new("cafes", "Cafes", &["Cafe", "Café"]),
    SubfilterSpec::new("galleries", "Galleries", &["Gallery"]),
];

const COMMUNITY_SUBFILTERS: &[SubfilterSpec] = &[
    SubfilterSpec::new("music", "Music", &["Music", "Music Production"]),
    SubfilterSpec::new("art", "Art", &["Art", "Visual Arts"]),
    SubfilterSpec::new("tech", "Tech", &["Tech", "Music Tech"]),
    SubfilterSpec::unmapped("social", "Social"),
    SubfilterSpec::new("professional", "Professional", &["Professional"]),
    SubfilterSpec::new("interest", "Interest", &["Interest-based"]),
];

const BRAND_SUBFILTERS: &[SubfilterSpec] = &[
    SubfilterSpec::new("labels", "Labels", &["Label", "Record Label"]),
    SubfilterSpec::new("equipment", "Equipment", &["Equipment", "Audio Equipment"]),
    SubfilterSpec::new("fashion", "Fashion", &["Fashion", "Streetwear"]),
    SubfilterSpec::new("food", "Food", &["Food & Beverage"]),
    SubfilterSpec::new("tech", "Tech", &["Tech", "Technology"]),
    SubfilterSpec::unmapped("media", "Media"),
];

/// The multi-select subfilter vocabulary of `domain`, in display order.
pub fn subfilters_for(domain: Domain) -> &'static [SubfilterSpec] {
    match domain {
        Domain::Artists => ARTIST_SUBFILTERS,
        Domain::Resources => RESOURCE_SUBFILTERS,
        Domain::Projects => PROJECT_SUBFILTERS,
        Domain::Events => EVENT_SUBFILTERS,
        Domain::Venues => VENUE_SUBFILTERS,
        Domain::Communities => COMMUNITY_SUBFILTERS,
        Domain::Brands => BRAND_SUBFILTERS,
    }
}

/// Look up a subfilter by exact value.
pub fn subfilter_spec(domain: Domain, value: &str) -> Option<&'static SubfilterSpec> {
    subfilters_for(domain).iter().find(|s| s.value == value)
}
