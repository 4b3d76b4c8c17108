//! Grouping engine.
//!
//! Partitions an already-sorted sequence into labeled groups by a
//! configurable key, preserving first-seen order of distinct labels, then
//! orders the groups themselves by the direction applied to the natural
//! order of the key values. Item order inside a group is never touched;
//! only the sorter decides intra-group order.

use super::collapse::Cluster;
use crate::config::StaticConfig;
use crate::core::{CollectionNo, GroupKey, Objekt, SortDirection};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Label an item for the given group key.
pub fn group_label(objekt: &Objekt, key: GroupKey) -> String {
    let c = objekt.collection();
    match key {
        GroupKey::Artist => c.artist.clone(),
        GroupKey::Member => c.member.clone(),
        GroupKey::Season => c.season.clone(),
        GroupKey::Class => c.class.clone(),
        GroupKey::CollectionNo => c.collection_no.clone(),
        GroupKey::SeasonCollectionNo => format!("{} {}", c.season, c.collection_no),
    }
}

/// First-seen-order partition by label. Every input item lands in exactly
/// one group; nothing is dropped or cloned.
fn partition_by<T>(items: Vec<T>, label_of: impl Fn(&T) -> String) -> Vec<(String, Vec<T>)> {
    let mut groups: Vec<(String, Vec<T>)> = Vec::new();
    let mut index_by_label: HashMap<String, usize> = HashMap::new();

    for item in items {
        let label = label_of(&item);
        match index_by_label.get(&label) {
            Some(&i) => groups[i].1.push(item),
            None => {
                index_by_label.insert(label.clone(), groups.len());
                groups.push((label, vec![item]));
            }
        }
    }
    groups
}

/// Natural order of two group labels for a key: seasons by declared
/// ordinal, collection numbers numerically, composite labels by season
/// then number, everything else lexicographic case-insensitive.
fn compare_labels(a: &str, b: &str, key: GroupKey, config: &StaticConfig) -> Ordering {
    match key {
        GroupKey::Season => compare_season_labels(a, b, config),
        GroupKey::CollectionNo => CollectionNo::parse_lossy(a).cmp(&CollectionNo::parse_lossy(b)),
        GroupKey::SeasonCollectionNo => {
            let (sa, na) = split_season_no(a);
            let (sb, nb) = split_season_no(b);
            compare_season_labels(sa, sb, config)
                .then_with(|| CollectionNo::parse_lossy(na).cmp(&CollectionNo::parse_lossy(nb)))
        }
        _ => a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase()),
    }
}

fn compare_season_labels(a: &str, b: &str, config: &StaticConfig) -> Ordering {
    match (config.season_ordinal(a), config.season_ordinal(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase()),
    }
}

fn split_season_no(label: &str) -> (&str, &str) {
    label.split_once(' ').unwrap_or((label, ""))
}

fn group_sequence<T>(
    items: Vec<T>,
    key: Option<GroupKey>,
    direction: SortDirection,
    config: &StaticConfig,
    label_of: impl Fn(&T, GroupKey) -> String,
) -> Vec<(String, Vec<T>)> {
    let Some(key) = key else {
        // Ungrouped: one group with an empty label, order untouched.
        return vec![(String::new(), items)];
    };

    let mut groups = partition_by(items, |item| label_of(item, key));
    groups.sort_by(|(a, _), (b, _)| {
        let ord = compare_labels(a, b, key, config);
        match direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    log::debug!("group: {} groups by {:?}", groups.len(), key);
    groups
}

/// Group plain items.
pub fn group_objekts(
    objekts: Vec<Objekt>,
    key: Option<GroupKey>,
    direction: SortDirection,
    config: &StaticConfig,
) -> Vec<(String, Vec<Objekt>)> {
    group_sequence(objekts, key, direction, config, group_label)
}

/// Group clusters by their representative's label.
pub fn group_clusters(
    clusters: Vec<Cluster>,
    key: Option<GroupKey>,
    direction: SortDirection,
    config: &StaticConfig,
) -> Vec<(String, Vec<Cluster>)> {
    group_sequence(clusters, key, direction, config, |cluster, k| {
        group_label(cluster.representative(), k)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CatalogObjekt, OnlineType};
    use chrono::{TimeZone, Utc};

    fn catalog(slug: &str, season: &str, member: &str, no: &str) -> Objekt {
        Objekt::Catalog(CatalogObjekt {
            slug: slug.to_string(),
            collection_id: slug.to_uppercase(),
            artist: "tripleS".to_string(),
            member: member.to_string(),
            season: season.to_string(),
            class: "First".to_string(),
            on_offline: OnlineType::Online,
            collection_no: no.to_string(),
            background_color: "#000".to_string(),
            accent_color: "#000".to_string(),
            text_color: "#fff".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        })
    }

    fn config() -> StaticConfig {
        StaticConfig::default()
    }

    #[test]
    fn no_key_yields_single_unlabeled_group_in_input_order() {
        let items = vec![catalog("b", "Atom01", "A", "101Z"), catalog("a", "Atom01", "B", "102Z")];
        let groups = group_objekts(items, None, SortDirection::Asc, &config());
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "");
        assert_eq!(groups[0].1[0].slug(), "b");
    }

    #[test]
    fn desc_direction_reverses_group_order_not_item_order() {
        let items = vec![
            catalog("a1", "Atom01", "A", "101Z"),
            catalog("b1", "Atom01", "B", "101Z"),
            catalog("a2", "Atom01", "A", "102Z"),
            catalog("c1", "Atom01", "C", "101Z"),
        ];
        let groups = group_objekts(items, Some(GroupKey::Member), SortDirection::Desc, &config());
        let labels: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["C", "B", "A"]);
        // Intra-group order is the sorter's order, untouched by grouping.
        let a_slugs: Vec<&str> = groups[2].1.iter().map(|o| o.slug()).collect();
        assert_eq!(a_slugs, vec!["a1", "a2"]);
    }

    #[test]
    fn season_groups_order_by_declared_ordinal() {
        let items = vec![
            catalog("e", "Ever01", "A", "101Z"),
            catalog("a", "Atom01", "A", "101Z"),
            catalog("d", "Divine01", "A", "101Z"),
        ];
        let groups = group_objekts(items, Some(GroupKey::Season), SortDirection::Asc, &config());
        let labels: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["Atom01", "Divine01", "Ever01"]);
    }

    #[test]
    fn season_collection_no_groups_compose_both_orders() {
        let items = vec![
            catalog("b", "Binary01", "A", "101Z"),
            catalog("a2", "Atom01", "A", "102Z"),
            catalog("a1", "Atom01", "A", "101Z"),
        ];
        let groups = group_objekts(
            items,
            Some(GroupKey::SeasonCollectionNo),
            SortDirection::Asc,
            &config(),
        );
        let labels: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["Atom01 101Z", "Atom01 102Z", "Binary01 101Z"]);
    }

    #[test]
    fn collection_no_groups_order_numerically_not_lexicographically() {
        let items = vec![
            catalog("a", "Atom01", "A", "99Z"),
            catalog("b", "Atom01", "A", "101Z"),
        ];
        let groups = group_objekts(
            items,
            Some(GroupKey::CollectionNo),
            SortDirection::Asc,
            &config(),
        );
        let labels: Vec<&str> = groups.iter().map(|(l, _)| l.as_str()).collect();
        assert_eq!(labels, vec!["99Z", "101Z"]);
    }

    #[test]
    fn grouping_partitions_without_loss() {
        let items: Vec<Objekt> = (0..10)
            .map(|i| catalog(&format!("s{i}"), "Atom01", if i % 2 == 0 { "A" } else { "B" }, "101Z"))
            .collect();
        let groups = group_objekts(items, Some(GroupKey::Member), SortDirection::Asc, &config());
        let total: usize = groups.iter().map(|(_, g)| g.len()).sum();
        assert_eq!(total, 10);
    }
}
