//! Pipeline orchestrator.
//!
//! One entry point per consumption mode, each a pure function over
//! immutable snapshots: raw items flow through filter, duplicate collapse
//! (ownership mode), sort and grouping, with completion stats computed
//! alongside for the progress view. Recomputation from scratch is the only
//! update model; callers re-invoke whenever a snapshot or the option set
//! changes and may discard stale results freely.

pub mod collapse;
pub mod group;
pub mod progress;
pub mod sort;

pub use collapse::Cluster;
pub use progress::ProgressStats;

use crate::config::StaticConfig;
use crate::core::{CatalogObjekt, GroupKey, Objekt, OwnedObjekt, SortDirection, SortKey};
use crate::errors::{CosmodexError, Result};
use crate::filters::{filter_objekts, EvalContext, FilterOptions};
use crate::query::{parse_query, QuerySet};
use serde::Serialize;
use std::collections::HashSet;

/// Shaped catalog browsing output: ordered `(label, items)` groups.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView {
    pub groups: Vec<(String, Vec<Objekt>)>,
    /// Items across all groups; equals the filtered input count.
    pub total: usize,
    /// Row-chunking hint for the rendering consumer.
    pub columns: usize,
}

/// Shaped ownership browsing output: ordered `(label, clusters)` groups.
#[derive(Debug, Clone, Serialize)]
pub struct OwnedView {
    pub groups: Vec<(String, Vec<Cluster>)>,
    /// Individual copies across all clusters.
    pub total: usize,
    /// Cluster count, i.e. distinct collections after collapsing.
    pub clusters: usize,
    pub columns: usize,
}

/// One progress scope: its obtainable candidates and completion stats.
#[derive(Debug, Clone, Serialize)]
pub struct ProgressScope {
    pub label: String,
    pub stats: ProgressStats,
    pub objekts: Vec<Objekt>,
}

fn parse_search(options: &FilterOptions, config: &StaticConfig) -> QuerySet {
    options
        .search
        .as_deref()
        .map(|raw| parse_query(raw, config))
        .unwrap_or_default()
}

fn check_common(options: &FilterOptions) -> Result<()> {
    if options.group_direction.is_some() && options.group_by.is_none() {
        return Err(CosmodexError::precondition(
            "groupDirection requires groupBy",
        ));
    }
    if options.columns == 0 {
        return Err(CosmodexError::precondition("columns must be at least 1"));
    }
    Ok(())
}

fn check_catalog_sort(sort: SortKey) -> Result<()> {
    if matches!(sort, SortKey::Serial | SortKey::Duplicate) {
        return Err(CosmodexError::precondition(format!(
            "sort key {:?} requires ownership-instance data",
            sort
        )));
    }
    Ok(())
}

/// Catalog browsing mode: filter, sort and group definition-level entries.
pub fn shape_catalog(
    catalog: Vec<CatalogObjekt>,
    options: &FilterOptions,
    config: &StaticConfig,
) -> Result<CatalogView> {
    check_common(options)?;
    check_catalog_sort(options.sort)?;

    let query = parse_search(options, config);
    let ctx = EvalContext::new(options, &query);

    let items: Vec<Objekt> = catalog.into_iter().map(Objekt::from).collect();
    let mut kept = filter_objekts(items, &ctx);
    sort::sort_objekts(&mut kept, options.sort, options.sort_direction, config);

    let group_direction = options.group_direction.unwrap_or(SortDirection::Asc);
    let groups = group::group_objekts(kept, options.group_by, group_direction, config);
    let total = groups.iter().map(|(_, g)| g.len()).sum();

    Ok(CatalogView {
        groups,
        total,
        columns: options.columns,
    })
}

/// Profile ownership mode: owned instances, optionally widened with
/// not-yet-owned catalog entries (`unowned`), collapsed into clusters,
/// sorted and grouped.
pub fn shape_owned(
    owned: Vec<OwnedObjekt>,
    catalog: &[CatalogObjekt],
    pins: &HashSet<String>,
    options: &FilterOptions,
    config: &StaticConfig,
) -> Result<OwnedView> {
    check_common(options)?;

    let owned_slugs: HashSet<String> = owned.iter().map(|o| o.collection.slug.clone()).collect();

    let mut items: Vec<Objekt> = owned.into_iter().map(Objekt::from).collect();
    if options.unowned {
        items.extend(catalog.iter().cloned().map(Objekt::from));
    }

    let query = parse_search(options, config);
    let ctx = EvalContext::new(options, &query)
        .with_pins(pins)
        .with_owned_slugs(&owned_slugs);
    let kept = filter_objekts(items, &ctx);

    let mut clusters = if options.combine_duplicates {
        collapse::collapse_duplicates(kept)
    } else {
        collapse::singleton_clusters(kept)
    };
    sort::sort_clusters(&mut clusters, options.sort, options.sort_direction, config);

    let group_direction = options.group_direction.unwrap_or(SortDirection::Asc);
    let groups = group::group_clusters(clusters, options.group_by, group_direction, config);

    let total = groups
        .iter()
        .flat_map(|(_, clusters)| clusters.iter())
        .map(Cluster::copies)
        .sum();
    let cluster_count = groups.iter().map(|(_, clusters)| clusters.len()).sum();

    Ok(OwnedView {
        groups,
        total,
        clusters: cluster_count,
        columns: options.columns,
    })
}

/// Progress mode: partition the filtered catalog into scopes (default: per
/// member) and compute completion stats per scope against the owned set.
/// `group_direction` alone is accepted here because a scope key always
/// applies.
pub fn shape_progress(
    catalog: Vec<CatalogObjekt>,
    owned: &[OwnedObjekt],
    options: &FilterOptions,
    config: &StaticConfig,
) -> Result<Vec<ProgressScope>> {
    check_catalog_sort(options.sort)?;

    let query = parse_search(options, config);
    let ctx = EvalContext::new(options, &query);

    let items: Vec<Objekt> = catalog.into_iter().map(Objekt::from).collect();
    let mut kept = filter_objekts(items, &ctx);
    sort::sort_objekts(&mut kept, options.sort, options.sort_direction, config);

    let scope_key = options.group_by.unwrap_or(GroupKey::Member);
    let group_direction = options.group_direction.unwrap_or(SortDirection::Asc);
    let groups = group::group_objekts(kept, Some(scope_key), group_direction, config);

    let owned_slugs: HashSet<String> = owned.iter().map(|o| o.collection.slug.clone()).collect();

    Ok(groups
        .into_iter()
        .map(|(label, objekts)| {
            let stats = progress::progress_stats(
                objekts.iter().map(|o| o.slug()),
                &owned_slugs,
                &config.unobtainable,
            );
            ProgressScope {
                label,
                stats,
                objekts,
            }
        })
        .collect())
}
