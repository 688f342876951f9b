use super::InMemoryCatalog;
use crate::model::{ContentItem, Domain};

fn item(domain: Domain, id: &str, name: &str, location: &str, tags: &[&str], subtype: &str) -> ContentItem {
    ContentItem::new(id, domain, name, location)
        .with_tags(tags.iter().copied())
        .with_subtype(subtype)
}

/// The demo catalog of the discovery page.
pub fn sample_catalog() -> InMemoryCatalog {
    use Domain::*;

    let items = vec![
        item(Artists, "1", "Elena Rivera", "Los Angeles, CA", &["Vocalist", "R&B", "Soul"], "Vocalist")
            .with_styles(["R&B"])
            .with_disciplines(["Vocalist"])
            .multidisciplinary(false),
        item(Artists, "2", "James Wilson", "Chicago, IL", &["Guitar", "Blues", "Jazz"], "Instrumentalist")
            .with_styles(["Jazz"])
            .with_disciplines(["Instrumentalist"])
            .multidisciplinary(false),
        item(Artists, "3", "Mia Chen", "New York, NY", &["Producer", "Electronic", "Hip-Hop"], "Producer")
            .with_styles(["Electronic", "Hip-Hop"])
            .with_disciplines(["Producer", "DJ"])
            .multidisciplinary(true),
        item(Artists, "4", "Marcus Johnson", "Atlanta, GA", &["Rapper", "Hip-Hop", "Producer"], "Vocalist")
            .with_styles(["Hip-Hop"])
            .with_disciplines(["Rapper", "Producer"])
            .multidisciplinary(true),
        item(Resources, "s1", "Downtown Recording Studio", "New York, NY", &["Studio", "Soundproofed", "200 sq ft"], "Space")
            .with_kind("space"),
        item(Resources, "s2", "Artist Collective Gallery", "Portland, OR", &["Gallery", "Exhibition Space", "1500 sq ft"], "Space")
            .with_kind("space"),
        item(Resources, "s3", "Musician's Practice Space", "Austin, TX", &["Practice Room", "24/7 Access", "150 sq ft"], "Space")
            .with_kind("space"),
        item(Resources, "t1", "Professional Lighting Kit", "Chicago, IL", &["Equipment Available", "Photography"], "Tool/Equipment")
            .with_kind("tool"),
        item(Resources, "t2", "Mobile Recording Equipment", "Nashville, TN", &["Equipment Available", "Music Production"], "Tool/Equipment")
            .with_kind("tool"),
        item(Resources, "o1", "Sound Engineer Services", "Los Angeles, CA", &["Music Production", "Studio"], "Service Provider")
            .with_kind("offerer"),
        item(Resources, "o2", "Session Musicians Network", "Nashville, TN", &["Music Production", "Jazz", "Blues"], "Service Provider")
            .with_kind("offerer"),
        item(Projects, "1", "Indie Album Recording", "Nashville, TN", &["Music Production", "2-Month Timeline", "Budget: $5-10K"], "Music"),
        item(Projects, "2", "Fashion Photography Series", "Los Angeles, CA", &["Photography", "1-Week Timeline", "Budget: $2-5K"], "Fashion"),
        item(Projects, "3", "Documentary Film Editing", "Chicago, IL", &["Film", "3-Month Timeline", "Remote Possible"], "Film"),
        item(Events, "1", "Summer Music Festival", "Austin, TX", &["Concert", "Outdoor", "Multiple Days"], "Festival"),
        item(Events, "2", "Art Gallery Opening", "New York, NY", &["Exhibition", "Networking", "One-Day Event"], "Exhibition"),
        item(Events, "3", "Music Industry Workshop", "Los Angeles, CA", &["Workshop", "Educational", "Weekend Event"], "Workshop"),
        item(Venues, "1", "The Electric Room", "Brooklyn, NY", &["Live Music", "200 Capacity", "Sound System"], "Club"),
        item(Venues, "2", "Harmony Concert Hall", "Chicago, IL", &["Classical", "400 Capacity", "Grand Piano"], "Concert Hall"),
        item(Venues, "3", "Outdoor Amphitheater", "Denver, CO", &["Outdoor", "1000 Capacity", "Summer Events"], "Outdoor"),
        item(Communities, "1", "Beat Makers Alliance", "Worldwide (Online)", &["Music Production", "Collaboration", "200+ Members"], "Music"),
        item(Communities, "2", "Art Collective NYC", "New York, NY", &["Visual Arts", "Exhibitions", "50+ Members"], "Art"),
        item(Communities, "3", "Tech Musicians Network", "San Francisco, CA", &["Music Tech", "Networking", "100+ Members"], "Tech"),
        item(Brands, "1", "Melody Records", "Los Angeles, CA", &["Record Label", "Indie", "Distribution"], "Label"),
        item(Brands, "2", "Soundwave Audio", "Nashville, TN", &["Audio Equipment", "Professional", "Industry"], "Equipment"),
        item(Brands, "3", "UrbanWear", "New York, NY", &["Fashion", "Streetwear", "Collaborations"], "Fashion"),
    ];
    InMemoryCatalog::new(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogSource;

    #[test]
    fn every_domain_has_sample_items() {
        let catalog = sample_catalog();
        for domain in Domain::ALL {
            assert!(!catalog.items(domain).is_empty(), "{domain} is empty");
        }
        assert_eq!(catalog.items(Domain::Resources).len(), 7);
    }

    #[test]
    fn resource_kinds_are_set() {
        let catalog = sample_catalog();
        assert!(catalog
            .items(Domain::Resources)
            .iter()
            .all(|i| i.kind.is_some()));
    }
}
