//! Completion progress accounting.
//!
//! For a candidate scope (e.g. every catalog entry of one member) and an
//! owned-slug set, computes how much of the obtainable catalog is owned.
//! Unobtainable slugs are excluded from both sides of the ratio, and the
//! percentage floors rather than rounds so 99.9% never reads as complete.

use serde::Serialize;
use std::collections::HashSet;

/// Ownership completion for one scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressStats {
    /// Obtainable candidates that are owned.
    pub owned: usize,
    /// Obtainable candidates (unobtainables excluded).
    pub total: usize,
    /// `floor(owned / total * 100)`; 0 when the scope has no obtainable
    /// candidates.
    pub percentage: u32,
}

/// Compute completion stats for one scope of candidate slugs.
pub fn progress_stats<'a, I>(
    candidates: I,
    owned_slugs: &HashSet<String>,
    unobtainable: &HashSet<String>,
) -> ProgressStats
where
    I: IntoIterator<Item = &'a str>,
{
    let mut total = 0usize;
    let mut owned = 0usize;
    for slug in candidates {
        if unobtainable.contains(slug) {
            continue;
        }
        total += 1;
        if owned_slugs.contains(slug) {
            owned += 1;
        }
    }

    let percentage = if total == 0 {
        0
    } else {
        (owned * 100 / total) as u32
    };

    ProgressStats {
        owned,
        total,
        percentage,
    }
}
