//! Process-wide constant configuration.
//!
//! The member shorthand table, season ordinals, unobtainable slug set and
//! color overrides are loaded once at startup (optionally merged with a
//! `.cosmodex.toml` found in the directory hierarchy) and passed by
//! reference into the pure pipeline functions. Nothing here is mutated
//! after load.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Immutable lookup tables shared by the parser, evaluator and sorter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticConfig {
    /// Known artist display names/codes, used by query token matching.
    #[serde(default = "default_artists")]
    pub artists: Vec<String>,

    /// Seasons in declared ordinal order; drives season sorting.
    #[serde(default = "default_seasons")]
    pub seasons: Vec<String>,

    /// Quick-search member abbreviations, lowercase shorthand to canonical
    /// member display name.
    #[serde(default = "default_member_shorthands")]
    pub member_shorthands: HashMap<String, String>,

    /// Catalog slugs excluded from completion accounting.
    #[serde(default = "default_unobtainable")]
    pub unobtainable: HashSet<String>,

    /// Accent/background color fixes keyed by collection id.
    #[serde(default = "default_accent_overrides")]
    pub accent_overrides: HashMap<String, String>,

    /// Text color fixes keyed by collection id.
    #[serde(default = "default_font_overrides")]
    pub font_overrides: HashMap<String, String>,
}

impl Default for StaticConfig {
    fn default() -> Self {
        Self {
            artists: default_artists(),
            seasons: default_seasons(),
            member_shorthands: default_member_shorthands(),
            unobtainable: default_unobtainable(),
            accent_overrides: default_accent_overrides(),
            font_overrides: default_font_overrides(),
        }
    }
}

impl StaticConfig {
    /// Position of a season in the declared order. Unknown seasons have no
    /// ordinal and sort after all known ones.
    pub fn season_ordinal(&self, season: &str) -> Option<usize> {
        self.seasons
            .iter()
            .position(|s| s.eq_ignore_ascii_case(season))
    }

    /// Resolve a quick-search shorthand to its canonical member name.
    pub fn resolve_shorthand(&self, token: &str) -> Option<&str> {
        self.member_shorthands
            .get(&token.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// Case-insensitive substring/equality match against known artist
    /// names, returning the canonical name on a hit.
    pub fn match_artist(&self, token: &str) -> Option<&str> {
        let needle = token.to_ascii_lowercase();
        self.artists
            .iter()
            .find(|a| a.to_ascii_lowercase().contains(&needle))
            .map(String::as_str)
    }

    pub fn is_unobtainable(&self, slug: &str) -> bool {
        self.unobtainable.contains(slug)
    }
}

fn default_artists() -> Vec<String> {
    vec!["tripleS".to_string(), "artms".to_string()]
}

fn default_seasons() -> Vec<String> {
    ["Atom01", "Binary01", "Cream01", "Divine01", "Ever01"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_member_shorthands() -> HashMap<String, String> {
    [
        // tripleS
        ("sy", "SeoYeon"),
        ("hr", "HyeRin"),
        ("jw", "JiWoo"),
        ("cy", "ChaeYeon"),
        ("yy", "YooYeon"),
        ("sm", "SooMin"),
        ("naky", "NaKyoung"),
        ("nk", "NaKyoung"),
        ("yb", "YuBin"),
        ("kd", "Kaede"),
        ("dh", "DaHyun"),
        ("kt", "Kotone"),
        ("yj", "YeonJi"),
        ("nn", "Nien"),
        ("sh", "SoHyun"),
        ("xy", "Xinyu"),
        ("my", "Mayu"),
        ("ln", "Lynn"),
        ("jb", "JooBin"),
        ("hy", "HaYeon"),
        ("so", "ShiOn"),
        ("cw", "ChaeWon"),
        ("sl", "Sullin"),
        ("sa", "SeoAh"),
        ("jy", "JiYeon"),
        // ARTMS
        ("hj", "HeeJin"),
        ("hs", "HaSeul"),
        ("kl", "KimLip"),
        ("js", "JinSoul"),
        ("ch", "Choerry"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_unobtainable() -> HashSet<String> {
    // Event/promo collections that can no longer be obtained; excluded
    // from completion accounting.
    [
        "atom01-heejin-100z",
        "atom01-haseul-100z",
        "atom01-kimlip-100z",
        "atom01-jinsoul-100z",
        "atom01-choerry-100z",
        "binary01-heejin-100z",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_accent_overrides() -> HashMap<String, String> {
    // Upstream metadata ships a handful of wrong accent colors.
    [
        ("Divine01 SeoYeon 117Z", "#B400FF"),
        ("Divine01 SeoYeon 118Z", "#B400FF"),
        ("Divine01 SeoYeon 119Z", "#B400FF"),
        ("Divine01 SeoYeon 120Z", "#B400FF"),
        ("Divine01 SeoYeon 317Z", "#df2e37"),
        ("Binary01 Choerry 201Z", "#FFFFFF"),
        ("Binary01 Choerry 202Z", "#FFFFFF"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

fn default_font_overrides() -> HashMap<String, String> {
    [
        ("Atom01 HeeJin 322Z", "#FFFFFF"),
        ("Atom01 HeeJin 323Z", "#FFFFFF"),
        ("Atom01 HeeJin 324Z", "#FFFFFF"),
        ("Atom01 HeeJin 325Z", "#FFFFFF"),
        ("Ever01 SeoYeon 338Z", "#07328D"),
    ]
    .iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Cache the configuration
static CONFIG: OnceLock<StaticConfig> = OnceLock::new();

fn read_config_file(path: &Path) -> Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

fn parse_config(contents: &str) -> Result<StaticConfig, String> {
    toml::from_str::<StaticConfig>(contents)
        .map_err(|e| format!("Failed to parse .cosmodex.toml: {}", e))
}

fn try_load_config_from_path(config_path: &Path) -> Option<StaticConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                log::warn!(
                    "Failed to read config file {}: {}",
                    config_path.display(),
                    e
                );
            }
            return None;
        }
    };

    match parse_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            eprintln!("Warning: {}. Using defaults.", e);
            None
        }
    }
}

fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from `.cosmodex.toml` if one exists in the current
/// directory hierarchy, falling back to the built-in tables.
pub fn load_config() -> StaticConfig {
    const MAX_TRAVERSAL_DEPTH: usize = 10;

    let current = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            return StaticConfig::default();
        }
    };

    directory_ancestors(current, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(".cosmodex.toml"))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_default()
}

/// Get the cached configuration.
pub fn get_config() -> &'static StaticConfig {
    CONFIG.get_or_init(load_config)
}
