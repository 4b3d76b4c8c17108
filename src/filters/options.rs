//! Flat filter/option set driving one pipeline run.

use crate::core::{Edition, GroupKey, OnlineType, SortDirection, SortKey};
use serde::{Deserialize, Serialize};

/// Grid width the rendering consumer uses when no override is given.
pub const DEFAULT_COLUMNS: usize = 7;

/// Everything a viewer can configure for one shaping run. Absent optional
/// fields mean "no constraint". The set is recomputed-from by the caller
/// on every change; the engine never mutates or persists it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterOptions {
    pub artist: Option<String>,
    pub member: Option<String>,
    pub season: Option<String>,
    pub class: Option<String>,
    pub on_offline: Option<OnlineType>,
    pub edition: Option<Edition>,
    /// Ownership-instance items only; catalog items always pass.
    pub transferable: Option<bool>,
    /// Quick-search string, parsed by [`crate::query::parse_query`].
    pub search: Option<String>,
    pub sort: SortKey,
    pub sort_direction: SortDirection,
    pub group_by: Option<GroupKey>,
    /// Meaningful only when `group_by` is set; supplying it alone is a
    /// precondition failure.
    pub group_direction: Option<SortDirection>,
    pub combine_duplicates: bool,
    /// Row-chunking hint for the rendering consumer; the engine only
    /// validates and forwards it.
    pub columns: usize,
    /// Widens an ownership view with catalog entries not yet owned.
    pub unowned: bool,
    /// Drops pinned slugs from the result.
    pub hide_pins: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            artist: None,
            member: None,
            season: None,
            class: None,
            on_offline: None,
            edition: None,
            transferable: None,
            search: None,
            // The catalog index ships newest-first.
            sort: SortKey::Date,
            sort_direction: SortDirection::Desc,
            group_by: None,
            group_direction: None,
            combine_duplicates: false,
            columns: DEFAULT_COLUMNS,
            unowned: false,
            hide_pins: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unconstrained_newest_first() {
        let options = FilterOptions::default();
        assert_eq!(options.sort, SortKey::Date);
        assert_eq!(options.sort_direction, SortDirection::Desc);
        assert!(options.artist.is_none());
        assert!(options.search.is_none());
        assert_eq!(options.columns, DEFAULT_COLUMNS);
    }

    #[test]
    fn options_deserialize_from_camel_case() {
        let options: FilterOptions = serde_json::from_str(
            r#"{"groupBy":"seasonCollectionNo","groupDirection":"desc","combineDuplicates":true}"#,
        )
        .unwrap();
        assert_eq!(options.group_by, Some(crate::core::GroupKey::SeasonCollectionNo));
        assert_eq!(options.group_direction, Some(SortDirection::Desc));
        assert!(options.combine_duplicates);
    }
}
