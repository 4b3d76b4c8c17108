//! Core data model.

pub mod types;

pub use types::{
    CatalogObjekt, CollectionNo, Edition, GroupKey, Objekt, OnlineType, OwnedObjekt,
    SortDirection, SortKey,
};
