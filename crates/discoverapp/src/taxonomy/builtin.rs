//! Built-in tag vocabulary, grouped the way the facet panels show it.

use crate::model::Domain;

pub(super) type CategoryRow = (Domain, &'static str, &'static [&'static str]);

pub(super) const BUILTIN_CATEGORIES: &[CategoryRow] = &[
    (
        Domain::Artists,
        "Artist Types",
        &["Vocalist", "Guitar", "Producer", "Rapper", "Performance Artist", "Visual Artist"],
    ),
    (
        Domain::Artists,
        "Genres",
        &["R&B", "Soul", "Blues", "Jazz", "Electronic", "Hip-Hop"],
    ),
    (
        Domain::Resources,
        "Space Types",
        &["Studio", "Gallery", "Practice Room", "Exhibition Space", "Workshop", "Treehouse"],
    ),
    (
        Domain::Resources,
        "Space Features",
        &["Soundproofed", "24/7 Access", "Equipment Available", "Storage"],
    ),
    (
        Domain::Resources,
        "Space Size",
        &["200 sq ft", "1500 sq ft", "150 sq ft"],
    ),
    (
        Domain::Projects,
        "Project Types",
        &["Music Production", "Photography", "Film"],
    ),
    (
        Domain::Projects,
        "Timeline",
        &["2-Month Timeline", "1-Week Timeline", "3-Month Timeline"],
    ),
    (
        Domain::Projects,
        "Budget",
        &["Budget: $5-10K", "Budget: $2-5K", "Remote Possible"],
    ),
    (
        Domain::Events,
        "Event Types",
        &["Concert", "Exhibition", "Workshop", "Networking", "Educational"],
    ),
    (
        Domain::Events,
        "Event Duration",
        &["Multiple Days", "One-Day Event", "Weekend Event"],
    ),
    (Domain::Events, "Event Setting", &["Outdoor"]),
    (
        Domain::Venues,
        "Venue Types",
        &["Club", "Theater", "Outdoor"],
    ),
    (
        Domain::Venues,
        "Venue Features",
        &["Live Music", "All Ages", "Sound System", "Grand Piano", "Classical"],
    ),
    (
        Domain::Venues,
        "Capacity",
        &["200 Capacity", "400 Capacity", "1000 Capacity", "5000 Capacity"],
    ),
    (
        Domain::Communities,
        "Community Focus",
        &["Music Production", "Visual Arts", "Music Tech", "Collaboration", "Networking"],
    ),
    (
        Domain::Communities,
        "Community Size",
        &["50+ Members", "100+ Members", "200+ Members"],
    ),
    (
        Domain::Brands,
        "Brand Types",
        &["Record Label", "Fashion", "Technology", "Food & Beverage"],
    ),
    (
        Domain::Brands,
        "Brand Offerings",
        &["Streetwear", "Collaborations", "Audio Equipment", "Sponsorships", "Distribution", "Indie"],
    ),
];
