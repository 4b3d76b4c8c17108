//! Combined predicate evaluator.
//!
//! Applies every recognized option in the documented order: attribute
//! equalities, transferability, the parsed quick-search predicate set,
//! the hide-pins exclusion, then the `unowned` widening special case. The
//! unowned case is the one place the evaluator consults state beyond the
//! single item: a catalog entry already present in the owned-slug set is
//! dropped so it does not shadow the owned copies it widened in next to.

use super::options::FilterOptions;
use super::predicates::*;
use crate::core::Objekt;
use crate::query::QuerySet;
use std::collections::HashSet;

/// Everything one keep/drop decision needs. Borrowed immutable snapshots;
/// building one allocates nothing.
#[derive(Clone, Copy)]
pub struct EvalContext<'a> {
    pub options: &'a FilterOptions,
    pub query: &'a QuerySet,
    /// Pinned slugs, dropped when `hide_pins` is set.
    pub pins: Option<&'a HashSet<String>>,
    /// Slugs of owned collections; present only in combined
    /// catalog+ownership views.
    pub owned_slugs: Option<&'a HashSet<String>>,
}

impl<'a> EvalContext<'a> {
    pub fn new(options: &'a FilterOptions, query: &'a QuerySet) -> Self {
        Self {
            options,
            query,
            pins: None,
            owned_slugs: None,
        }
    }

    pub fn with_pins(mut self, pins: &'a HashSet<String>) -> Self {
        self.pins = Some(pins);
        self
    }

    pub fn with_owned_slugs(mut self, owned_slugs: &'a HashSet<String>) -> Self {
        self.owned_slugs = Some(owned_slugs);
        self
    }
}

/// Decide keep/drop for one item. Pure function of its inputs.
pub fn keeps(objekt: &Objekt, ctx: &EvalContext) -> bool {
    let options = ctx.options;

    if !matches_artist(objekt, options.artist.as_deref())
        || !matches_member(objekt, options.member.as_deref())
        || !matches_season(objekt, options.season.as_deref())
        || !matches_class(objekt, options.class.as_deref())
        || !matches_online_type(objekt, options.on_offline)
        || !matches_edition(objekt, options.edition)
        || !matches_transferable(objekt, options.transferable)
    {
        return false;
    }

    if !ctx.query.matches(objekt) {
        return false;
    }

    if options.hide_pins {
        if let Some(pins) = ctx.pins {
            if pins.contains(objekt.slug()) {
                return false;
            }
        }
    }

    // Unowned widening: catalog entries ride along only while their slug
    // is still missing from the owned set.
    if options.unowned && !objekt.is_owned_instance() {
        if let Some(owned) = ctx.owned_slugs {
            if owned.contains(objekt.slug()) {
                return false;
            }
        }
    }

    true
}

/// Filter a sequence, logging the in/out counts at debug level.
pub fn filter_objekts(objekts: Vec<Objekt>, ctx: &EvalContext) -> Vec<Objekt> {
    let total = objekts.len();
    let kept: Vec<Objekt> = objekts.into_iter().filter(|o| keeps(o, ctx)).collect();
    log::debug!("filter: kept {} of {} objekts", kept.len(), total);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CatalogObjekt, OnlineType, OwnedObjekt};
    use crate::query::parse_query;
    use chrono::{TimeZone, Utc};

    fn catalog(member: &str, season: &str, collection_no: &str) -> Objekt {
        Objekt::Catalog(CatalogObjekt {
            slug: format!(
                "{}-{}-{}",
                season.to_lowercase(),
                member.to_lowercase(),
                collection_no.to_lowercase()
            ),
            collection_id: format!("{season} {member} {collection_no}"),
            artist: "tripleS".to_string(),
            member: member.to_string(),
            season: season.to_string(),
            class: "First".to_string(),
            on_offline: OnlineType::Online,
            collection_no: collection_no.to_string(),
            background_color: "#000000".to_string(),
            accent_color: "#000000".to_string(),
            text_color: "#FFFFFF".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
        })
    }

    fn owned(member: &str, season: &str, collection_no: &str, serial: u32) -> Objekt {
        let Objekt::Catalog(collection) = catalog(member, season, collection_no) else {
            unreachable!()
        };
        Objekt::Owned(OwnedObjekt {
            id: format!("{}-{}", collection.slug, serial),
            collection,
            serial,
            owner: "0xabc".to_string(),
            transferable: true,
            received_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        })
    }

    #[test]
    fn default_options_keep_everything() {
        let options = FilterOptions::default();
        let query = QuerySet::default();
        let ctx = EvalContext::new(&options, &query);
        assert!(keeps(&catalog("SeoYeon", "Divine01", "117Z"), &ctx));
        assert!(keeps(&owned("YooYeon", "Atom01", "301Z", 5), &ctx));
    }

    #[test]
    fn attribute_filters_combine_with_and() {
        let options = FilterOptions {
            member: Some("SeoYeon".to_string()),
            season: Some("Divine01".to_string()),
            ..Default::default()
        };
        let query = QuerySet::default();
        let ctx = EvalContext::new(&options, &query);
        assert!(keeps(&catalog("SeoYeon", "Divine01", "117Z"), &ctx));
        assert!(!keeps(&catalog("SeoYeon", "Atom01", "117Z"), &ctx));
        assert!(!keeps(&catalog("YooYeon", "Divine01", "117Z"), &ctx));
    }

    #[test]
    fn query_set_gates_the_result() {
        let config = crate::config::StaticConfig::default();
        let query = parse_query("yy 301-302", &config);
        let options = FilterOptions::default();
        let ctx = EvalContext::new(&options, &query);
        assert!(keeps(&catalog("YooYeon", "Atom01", "301Z"), &ctx));
        assert!(!keeps(&catalog("YooYeon", "Atom01", "303Z"), &ctx));
        assert!(!keeps(&catalog("SeoYeon", "Atom01", "301Z"), &ctx));
    }

    #[test]
    fn serial_range_excludes_catalog_items() {
        let config = crate::config::StaticConfig::default();
        let query = parse_query("#1-20", &config);
        let options = FilterOptions::default();
        let ctx = EvalContext::new(&options, &query);
        assert!(keeps(&owned("SeoYeon", "Divine01", "117Z", 20), &ctx));
        assert!(!keeps(&owned("SeoYeon", "Divine01", "117Z", 21), &ctx));
        assert!(!keeps(&catalog("SeoYeon", "Divine01", "117Z"), &ctx));
    }

    #[test]
    fn hide_pins_drops_pinned_slugs() {
        let options = FilterOptions {
            hide_pins: true,
            ..Default::default()
        };
        let query = QuerySet::default();
        let pinned = catalog("SeoYeon", "Divine01", "117Z");
        let pins: HashSet<String> = [pinned.slug().to_string()].into_iter().collect();
        let ctx = EvalContext::new(&options, &query).with_pins(&pins);
        assert!(!keeps(&pinned, &ctx));
        assert!(keeps(&catalog("SeoYeon", "Divine01", "118Z"), &ctx));
    }

    #[test]
    fn unowned_widening_drops_already_owned_catalog_entries() {
        let options = FilterOptions {
            unowned: true,
            ..Default::default()
        };
        let query = QuerySet::default();
        let owned_item = owned("SeoYeon", "Divine01", "117Z", 1);
        let owned_slugs: HashSet<String> = [owned_item.slug().to_string()].into_iter().collect();
        let ctx = EvalContext::new(&options, &query).with_owned_slugs(&owned_slugs);

        // The owned instance itself stays.
        assert!(keeps(&owned_item, &ctx));
        // Its catalog twin is dropped; a genuinely unowned one stays.
        assert!(!keeps(&catalog("SeoYeon", "Divine01", "117Z"), &ctx));
        assert!(keeps(&catalog("SeoYeon", "Divine01", "118Z"), &ctx));
    }

    #[test]
    fn hide_pins_and_unowned_are_independent_gates() {
        let options = FilterOptions {
            unowned: true,
            hide_pins: true,
            ..Default::default()
        };
        let query = QuerySet::default();
        let item = catalog("SeoYeon", "Divine01", "118Z");
        let pins: HashSet<String> = [item.slug().to_string()].into_iter().collect();
        let owned_slugs = HashSet::new();
        let ctx = EvalContext::new(&options, &query)
            .with_pins(&pins)
            .with_owned_slugs(&owned_slugs);
        // Unowned would widen it in, but the pin gate already dropped it.
        assert!(!keeps(&item, &ctx));
    }
}
