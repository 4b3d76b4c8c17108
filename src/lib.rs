//! cosmodex: objekt collection shaping engine.
//!
//! Turns an in-memory catalog and ownership snapshot plus a flat
//! filter/option set into the grouped, ordered, deduplicated sequence a
//! viewer sees, with per-scope completion statistics. The engine is
//! synchronous and pure: every entry point in [`pipeline`] recomputes its
//! output from the immutable snapshots it is handed, so concurrent calls
//! over different snapshots need no locking and stale results can simply
//! be discarded.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod filters;
pub mod io;
pub mod pipeline;
pub mod query;

// Re-export commonly used types
pub use crate::core::{
    CatalogObjekt, CollectionNo, Edition, GroupKey, Objekt, OnlineType, OwnedObjekt,
    SortDirection, SortKey,
};

pub use crate::config::{get_config, StaticConfig};

pub use crate::errors::{CosmodexError, Result};

pub use crate::filters::{keeps, EvalContext, FilterOptions};

pub use crate::pipeline::{
    shape_catalog, shape_owned, shape_progress, CatalogView, Cluster, OwnedView, ProgressScope,
    ProgressStats,
};

pub use crate::query::{parse_query, QuerySet};
