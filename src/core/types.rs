//! Objekt data model shared across the pipeline.
//!
//! Two item shapes exist: catalog entries (definition-level, no owner) and
//! owned instances (one physical/digital copy with serial, owner address
//! and transferability). They are carried as a tagged sum type [`Objekt`]
//! so every pipeline stage pattern-matches instead of assuming fields
//! exist.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Online/offline distribution type of a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OnlineType {
    Online,
    Offline,
}

impl fmt::Display for OnlineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnlineType::Online => write!(f, "online"),
            OnlineType::Offline => write!(f, "offline"),
        }
    }
}

/// Sort keys recognized by the sorter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Date,
    Season,
    CollectionNo,
    Member,
    /// Ownership mode only.
    Serial,
    /// Ownership mode only; orders by cluster copy count.
    Duplicate,
}

/// Sort / group ordering direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    /// Catalog views ship newest-first.
    #[default]
    Desc,
}

/// Group keys recognized by the grouping engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "camelCase")]
pub enum GroupKey {
    Artist,
    Member,
    Season,
    Class,
    CollectionNo,
    /// Composite "Season CollectionNo" label.
    SeasonCollectionNo,
}

/// Print edition derived from the collection-number band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
pub enum Edition {
    #[serde(rename = "1st")]
    #[value(name = "1st")]
    First,
    #[serde(rename = "2nd")]
    #[value(name = "2nd")]
    Second,
    #[serde(rename = "3rd")]
    #[value(name = "3rd")]
    Third,
}

impl Edition {
    /// Band mapping used by the edition filter: 101-108 first, 109-116
    /// second, 117-120 third. Numbers outside the bands have no edition.
    pub fn from_collection_no(no: &CollectionNo) -> Option<Edition> {
        match no.value {
            101..=108 => Some(Edition::First),
            109..=116 => Some(Edition::Second),
            117..=120 => Some(Edition::Third),
            _ => None,
        }
    }
}

/// Parsed form of a collection-number string such as `"117Z"`: the numeric
/// value plus an optional trailing edition letter (stored lowercase).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CollectionNo {
    pub value: u32,
    pub letter: Option<char>,
}

impl CollectionNo {
    /// Parse `"301"`, `"301z"`, `"117Z"`. Returns `None` when the string
    /// has no leading digits or trailing garbage beyond one letter.
    pub fn parse(raw: &str) -> Option<CollectionNo> {
        let raw = raw.trim();
        let digits_end = raw.find(|c: char| !c.is_ascii_digit()).unwrap_or(raw.len());
        if digits_end == 0 {
            return None;
        }
        let value: u32 = raw[..digits_end].parse().ok()?;
        let rest = &raw[digits_end..];
        let letter = match rest.len() {
            0 => None,
            1 => {
                let c = rest.chars().next()?;
                if c.is_ascii_alphabetic() {
                    Some(c.to_ascii_lowercase())
                } else {
                    return None;
                }
            }
            _ => return None,
        };
        Some(CollectionNo { value, letter })
    }

    /// Total parse: malformed strings collapse to the zero number, which
    /// sorts before everything real. Keeps the pipeline panic-free on
    /// dirty snapshot data.
    pub fn parse_lossy(raw: &str) -> CollectionNo {
        CollectionNo::parse(raw).unwrap_or_default()
    }
}

impl Ord for CollectionNo {
    fn cmp(&self, other: &Self) -> Ordering {
        // Numeric value first, trailing letter breaks ties. A bare number
        // orders before any lettered variant of the same value.
        self.value
            .cmp(&other.value)
            .then_with(|| self.letter.cmp(&other.letter))
    }
}

impl PartialOrd for CollectionNo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CollectionNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter {
            Some(l) => write!(f, "{}{}", self.value, l),
            None => write!(f, "{}", self.value),
        }
    }
}

/// Definition-level catalog entry. Field names mirror the upstream JSON
/// snapshot shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogObjekt {
    /// Stable catalog identity.
    pub slug: String,
    /// Display id, e.g. "Divine01 SeoYeon 117Z". Color overrides key on it.
    pub collection_id: String,
    pub artist: String,
    pub member: String,
    pub season: String,
    pub class: String,
    pub on_offline: OnlineType,
    /// Kept verbatim; parse with [`CollectionNo`] when comparing.
    pub collection_no: String,
    pub background_color: String,
    pub accent_color: String,
    pub text_color: String,
    pub created_at: DateTime<Utc>,
}

impl CatalogObjekt {
    pub fn collection_no(&self) -> CollectionNo {
        CollectionNo::parse_lossy(&self.collection_no)
    }
}

/// One concrete owned copy: the catalog attributes plus instance state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OwnedObjekt {
    #[serde(flatten)]
    pub collection: CatalogObjekt,
    /// Unique instance id.
    pub id: String,
    pub serial: u32,
    /// Current owner address.
    pub owner: String,
    pub transferable: bool,
    pub received_at: DateTime<Utc>,
}

/// Tagged sum over the two item shapes. Stages that only need the common
/// catalog attributes go through [`Objekt::collection`]; instance-only
/// attributes come back as `Option`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Objekt {
    Owned(OwnedObjekt),
    Catalog(CatalogObjekt),
}

impl Objekt {
    pub fn collection(&self) -> &CatalogObjekt {
        match self {
            Objekt::Catalog(c) => c,
            Objekt::Owned(o) => &o.collection,
        }
    }

    pub fn slug(&self) -> &str {
        &self.collection().slug
    }

    pub fn collection_no(&self) -> CollectionNo {
        self.collection().collection_no()
    }

    pub fn serial(&self) -> Option<u32> {
        match self {
            Objekt::Catalog(_) => None,
            Objekt::Owned(o) => Some(o.serial),
        }
    }

    pub fn transferable(&self) -> Option<bool> {
        match self {
            Objekt::Catalog(_) => None,
            Objekt::Owned(o) => Some(o.transferable),
        }
    }

    pub fn is_owned_instance(&self) -> bool {
        matches!(self, Objekt::Owned(_))
    }
}

impl From<CatalogObjekt> for Objekt {
    fn from(value: CatalogObjekt) -> Self {
        Objekt::Catalog(value)
    }
}

impl From<OwnedObjekt> for Objekt {
    fn from(value: OwnedObjekt) -> Self {
        Objekt::Owned(value)
    }
}
