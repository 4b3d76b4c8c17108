//! Configurable ordering for items and clusters.
//!
//! Comparator table (primary basis / fixed ascending tie-break):
//!
//! | key          | basis                              | tie-break              |
//! |--------------|------------------------------------|------------------------|
//! | date         | creation timestamp                 | slug                   |
//! | season       | season ordinal order               | collection-no value    |
//! | collectionNo | collection-no numeric value        | trailing letter        |
//! | member       | member display name                | collection-no value    |
//! | serial       | serial (catalog items always last) | slug                   |
//! | duplicate    | copy count, most first             | slug                   |
//!
//! `desc` reverses the primary comparison only; tie-breaks stay ascending
//! so equal primary keys order deterministically either way.

use super::collapse::Cluster;
use crate::config::StaticConfig;
use crate::core::{Objekt, SortDirection, SortKey};
use std::cmp::Ordering;

fn apply_direction(ord: Ordering, direction: SortDirection) -> Ordering {
    match direction {
        SortDirection::Asc => ord,
        SortDirection::Desc => ord.reverse(),
    }
}

/// Season comparison: declared ordinals first, unknown seasons after all
/// known ones, ordered among themselves by name.
fn compare_seasons(a: &str, b: &str, config: &StaticConfig) -> Ordering {
    match (config.season_ordinal(a), config.season_ordinal(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase()),
    }
}

fn compare_objekts_by(
    a: &Objekt,
    b: &Objekt,
    key: SortKey,
    direction: SortDirection,
    config: &StaticConfig,
) -> Ordering {
    let (ca, cb) = (a.collection(), b.collection());
    match key {
        SortKey::Date => apply_direction(ca.created_at.cmp(&cb.created_at), direction)
            .then_with(|| ca.slug.cmp(&cb.slug)),
        SortKey::Season => {
            apply_direction(compare_seasons(&ca.season, &cb.season, config), direction)
                .then_with(|| a.collection_no().value.cmp(&b.collection_no().value))
        }
        SortKey::CollectionNo => {
            let (na, nb) = (a.collection_no(), b.collection_no());
            apply_direction(na.value.cmp(&nb.value), direction)
                .then_with(|| na.letter.cmp(&nb.letter))
        }
        SortKey::Member => apply_direction(
            ca.member
                .to_ascii_lowercase()
                .cmp(&cb.member.to_ascii_lowercase()),
            direction,
        )
        .then_with(|| a.collection_no().value.cmp(&b.collection_no().value)),
        SortKey::Serial => {
            // Catalog-only items sort last regardless of direction.
            let ord = match (a.serial(), b.serial()) {
                (Some(x), Some(y)) => apply_direction(x.cmp(&y), direction),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            ord.then_with(|| ca.slug.cmp(&cb.slug))
        }
        // Copy count is a cluster property; single items are all equal.
        SortKey::Duplicate => ca.slug.cmp(&cb.slug),
    }
}

/// Sort a plain item sequence in place. The orchestrator rejects the
/// ownership-mode keys (`serial`, `duplicate`) for catalog-only input
/// before calling this.
pub fn sort_objekts(
    objekts: &mut [Objekt],
    key: SortKey,
    direction: SortDirection,
    config: &StaticConfig,
) {
    objekts.sort_by(|a, b| compare_objekts_by(a, b, key, direction, config));
}

/// Sort clusters in place. Every key compares cluster representatives
/// except `serial` (minimum serial in the cluster, catalog clusters last)
/// and `duplicate` (copy count, most copies first before direction).
pub fn sort_clusters(
    clusters: &mut [Cluster],
    key: SortKey,
    direction: SortDirection,
    config: &StaticConfig,
) {
    clusters.sort_by(|a, b| match key {
        SortKey::Duplicate => {
            apply_direction(b.copies().cmp(&a.copies()), direction)
                .then_with(|| a.representative().slug().cmp(b.representative().slug()))
        }
        SortKey::Serial => {
            let ord = match (a.min_serial(), b.min_serial()) {
                (Some(x), Some(y)) => apply_direction(x.cmp(&y), direction),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            };
            ord.then_with(|| a.representative().slug().cmp(b.representative().slug()))
        }
        _ => compare_objekts_by(a.representative(), b.representative(), key, direction, config),
    });
}
