//! Pure per-option predicates for filtering objekts.
//!
//! Each predicate checks exactly one recognized option against one item
//! and is total: an absent option or an attribute the item shape does not
//! carry evaluates permissively. The combined evaluator in
//! [`super::evaluate`] ANDs them in the documented order.

use crate::core::{Edition, Objekt, OnlineType};

#[inline]
pub fn matches_artist(objekt: &Objekt, artist: Option<&str>) -> bool {
    artist.map_or(true, |a| objekt.collection().artist.eq_ignore_ascii_case(a))
}

#[inline]
pub fn matches_member(objekt: &Objekt, member: Option<&str>) -> bool {
    member.map_or(true, |m| objekt.collection().member.eq_ignore_ascii_case(m))
}

#[inline]
pub fn matches_season(objekt: &Objekt, season: Option<&str>) -> bool {
    season.map_or(true, |s| objekt.collection().season.eq_ignore_ascii_case(s))
}

#[inline]
pub fn matches_class(objekt: &Objekt, class: Option<&str>) -> bool {
    class.map_or(true, |c| objekt.collection().class.eq_ignore_ascii_case(c))
}

#[inline]
pub fn matches_online_type(objekt: &Objekt, on_offline: Option<OnlineType>) -> bool {
    on_offline.map_or(true, |t| objekt.collection().on_offline == t)
}

/// Edition bands derive from the collection number; items outside every
/// band fail any edition constraint.
#[inline]
pub fn matches_edition(objekt: &Objekt, edition: Option<Edition>) -> bool {
    edition.map_or(true, |e| {
        Edition::from_collection_no(&objekt.collection_no()) == Some(e)
    })
}

/// Transferability exists only on owned instances; catalog items pass.
#[inline]
pub fn matches_transferable(objekt: &Objekt, transferable: Option<bool>) -> bool {
    match (transferable, objekt.transferable()) {
        (Some(wanted), Some(actual)) => wanted == actual,
        _ => true,
    }
}
