//! Shared fixture builders for integration tests.

use chrono::{TimeZone, Utc};
use cosmodex::{CatalogObjekt, OnlineType, OwnedObjekt};

pub fn catalog_objekt(
    member: &str,
    season: &str,
    class: &str,
    collection_no: &str,
    day: u32,
) -> CatalogObjekt {
    CatalogObjekt {
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
        class: class.to_string(),
        on_offline: OnlineType::Online,
        collection_no: collection_no.to_string(),
        background_color: "#FFDD00".to_string(),
        accent_color: "#FFDD00".to_string(),
        text_color: "#000000".to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 1, day, 0, 0, 0).unwrap(),
    }
}

pub fn owned_objekt(
    member: &str,
    season: &str,
    class: &str,
    collection_no: &str,
    serial: u32,
) -> OwnedObjekt {
    let collection = catalog_objekt(member, season, class, collection_no, 1);
    OwnedObjekt {
        id: format!("{}-{}", collection.slug, serial),
        collection,
        serial,
        owner: "0x08d5a2d0bd99a9e9b0f4a2f1a2e3fd2f4f4d33a1".to_string(),
        transferable: true,
        received_at: Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
    }
}
