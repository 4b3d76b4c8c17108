//! Duplicate collapsing for ownership-mode sequences.
//!
//! Owned snapshots repeat a collection once per physical/digital copy.
//! Collapsing groups same-slug items into [`Cluster`]s ordered by the
//! first occurrence of each slug, keeping the arrival order of duplicates
//! inside each cluster. When collapsing is off every item becomes a
//! singleton cluster so downstream stages see one shape.

use crate::core::Objekt;
use serde::Serialize;
use std::collections::HashMap;

/// Non-empty ordered run of items sharing a catalog slug.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Cluster {
    items: Vec<Objekt>,
}

impl Cluster {
    fn of(first: Objekt) -> Self {
        Self { items: vec![first] }
    }

    /// First-arrived instance; stands in for the cluster in sorting and
    /// grouping decisions.
    pub fn representative(&self) -> &Objekt {
        &self.items[0]
    }

    /// Owned copy count for this slug.
    pub fn copies(&self) -> usize {
        self.items.len()
    }

    /// Smallest serial among owned instances; `None` for a cluster made
    /// of a catalog entry (unowned widening).
    pub fn min_serial(&self) -> Option<u32> {
        self.items.iter().filter_map(|o| o.serial()).min()
    }

    pub fn items(&self) -> &[Objekt] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Objekt> {
        self.items
    }
}

/// Collapse same-slug items, first-seen order, stable within clusters.
pub fn collapse_duplicates(objekts: Vec<Objekt>) -> Vec<Cluster> {
    let mut clusters: Vec<Cluster> = Vec::new();
    let mut index_by_slug: HashMap<String, usize> = HashMap::new();

    for objekt in objekts {
        match index_by_slug.get(objekt.slug()) {
            Some(&i) => clusters[i].items.push(objekt),
            None => {
                index_by_slug.insert(objekt.slug().to_string(), clusters.len());
                clusters.push(Cluster::of(objekt));
            }
        }
    }

    log::debug!("collapse: {} clusters", clusters.len());
    clusters
}

/// Wrap each item as its own cluster, preserving order.
pub fn singleton_clusters(objekts: Vec<Objekt>) -> Vec<Cluster> {
    objekts.into_iter().map(Cluster::of).collect()
}
