//! Snapshot loading.
//!
//! The engine consumes fully materialized in-memory lists; these helpers
//! read them from JSON files for the CLI and apply the collaborator-side
//! normalization the engine itself does not perform (color overrides for
//! collections with known-bad upstream metadata).

use crate::config::StaticConfig;
use crate::core::{CatalogObjekt, OwnedObjekt};
use crate::errors::{CosmodexError, Result};
use std::fs;
use std::path::Path;

fn parse_error(path: &Path, err: serde_json::Error) -> CosmodexError {
    CosmodexError::Parse {
        path: path.to_path_buf(),
        message: err.to_string(),
    }
}

/// Fix accent/text colors for collections listed in the override tables.
/// Keyed by collection id, applied before the engine sees the item.
pub fn apply_color_overrides(objekt: &mut CatalogObjekt, config: &StaticConfig) {
    if let Some(accent) = config.accent_overrides.get(&objekt.collection_id) {
        objekt.background_color = accent.clone();
        objekt.accent_color = accent.clone();
    }
    if let Some(font) = config.font_overrides.get(&objekt.collection_id) {
        objekt.text_color = font.clone();
    }
}

/// Load a catalog snapshot and normalize colors.
pub fn load_catalog(path: &Path, config: &StaticConfig) -> Result<Vec<CatalogObjekt>> {
    let contents = fs::read_to_string(path)?;
    let mut catalog: Vec<CatalogObjekt> =
        serde_json::from_str(&contents).map_err(|e| parse_error(path, e))?;
    for objekt in &mut catalog {
        apply_color_overrides(objekt, config);
    }
    log::debug!("loaded {} catalog entries from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Load an ownership snapshot (the flattened result of however many fetch
/// rounds assembled it).
pub fn load_owned(path: &Path, config: &StaticConfig) -> Result<Vec<OwnedObjekt>> {
    let contents = fs::read_to_string(path)?;
    let mut owned: Vec<OwnedObjekt> =
        serde_json::from_str(&contents).map_err(|e| parse_error(path, e))?;
    for objekt in &mut owned {
        apply_color_overrides(&mut objekt.collection, config);
    }
    log::debug!("loaded {} owned objekts from {}", owned.len(), path.display());
    Ok(owned)
}

/// Load a pin list: a JSON array of slugs.
pub fn load_pins(path: &Path) -> Result<std::collections::HashSet<String>> {
    let contents = fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| parse_error(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OnlineType;
    use chrono::{TimeZone, Utc};

    #[test]
    fn overrides_apply_by_collection_id() {
        let config = StaticConfig::default();
        let mut objekt = CatalogObjekt {
            slug: "divine01-seoyeon-117z".to_string(),
            collection_id: "Divine01 SeoYeon 117Z".to_string(),
            artist: "tripleS".to_string(),
            member: "SeoYeon".to_string(),
            season: "Divine01".to_string(),
            class: "First".to_string(),
            on_offline: OnlineType::Online,
            collection_no: "117Z".to_string(),
            background_color: "#123456".to_string(),
            accent_color: "#123456".to_string(),
            text_color: "#000000".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        apply_color_overrides(&mut objekt, &config);
        assert_eq!(objekt.accent_color, "#B400FF");
        assert_eq!(objekt.background_color, "#B400FF");
        // No font override for this collection.
        assert_eq!(objekt.text_color, "#000000");
    }

    #[test]
    fn unlisted_collections_keep_their_colors() {
        let config = StaticConfig::default();
        let mut objekt = CatalogObjekt {
            slug: "atom01-yooyeon-301z".to_string(),
            collection_id: "Atom01 YooYeon 301Z".to_string(),
            artist: "tripleS".to_string(),
            member: "YooYeon".to_string(),
            season: "Atom01".to_string(),
            class: "Special".to_string(),
            on_offline: OnlineType::Online,
            collection_no: "301Z".to_string(),
            background_color: "#FFDD00".to_string(),
            accent_color: "#FFDD00".to_string(),
            text_color: "#000000".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        };
        apply_color_overrides(&mut objekt, &config);
        assert_eq!(objekt.accent_color, "#FFDD00");
    }
}
