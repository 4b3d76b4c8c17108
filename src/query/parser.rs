//! Total parser for the quick-search mini language.
//!
//! Grammar: split on commas into OR-ed term groups, split each group on
//! whitespace into AND-ed tokens, then classify every token by trying, in
//! order: serial range, collection-number range, member shorthand, artist
//! name, member-substring fallback. Classification always succeeds, so
//! parsing never fails; a garbage token just becomes a substring predicate
//! that matches nothing or everything on its own merits.

use super::ast::{QuerySet, Term, TermGroup};
use crate::config::StaticConfig;
use regex::Regex;
use std::sync::OnceLock;

fn serial_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^#(\d+)(?:-(\d+))?$").unwrap())
}

fn collection_range_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // Optional leading "c" as in the documented "c301-302" form.
    RE.get_or_init(|| Regex::new(r"^[cC]?(\d+)([a-zA-Z])?(?:-(\d+)([a-zA-Z])?)?$").unwrap())
}

/// Parse a raw search string against the shorthand/artist tables.
pub fn parse_query(raw: &str, config: &StaticConfig) -> QuerySet {
    let groups: Vec<TermGroup> = raw
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(|piece| TermGroup {
            terms: piece
                .split_whitespace()
                .map(|token| classify_token(token, config))
                .collect(),
        })
        .filter(|group| !group.terms.is_empty())
        .collect();

    QuerySet { groups }
}

fn classify_token(token: &str, config: &StaticConfig) -> Term {
    if let Some(term) = parse_serial_range(token) {
        return term;
    }
    if let Some(term) = parse_collection_range(token) {
        return term;
    }
    if let Some(member) = config.resolve_shorthand(token) {
        return Term::Member(member.to_string());
    }
    if let Some(artist) = config.match_artist(token) {
        return Term::Artist(artist.to_string());
    }
    Term::MemberText(token.to_ascii_lowercase())
}

fn parse_serial_range(token: &str) -> Option<Term> {
    let caps = serial_range_re().captures(token)?;
    let a: u32 = caps.get(1)?.as_str().parse().ok()?;
    let b: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => a,
    };
    Some(Term::SerialRange {
        lo: a.min(b),
        hi: a.max(b),
    })
}

fn parse_collection_range(token: &str) -> Option<Term> {
    let caps = collection_range_re().captures(token)?;
    let a: u32 = caps.get(1)?.as_str().parse().ok()?;
    let letter_a = caps.get(2).and_then(|m| m.as_str().chars().next());
    let (b, letter_b) = match caps.get(3) {
        Some(m) => (
            m.as_str().parse().ok()?,
            caps.get(4).and_then(|m| m.as_str().chars().next()),
        ),
        None => (a, letter_a),
    };

    // A letter on exactly one bound constrains the edition letter; a
    // matching pair does too. Conflicting letters drop the constraint
    // rather than failing the token.
    let letter = match (letter_a, letter_b) {
        (Some(x), Some(y)) if x.eq_ignore_ascii_case(&y) => Some(x),
        (Some(_), Some(_)) => None,
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
    .map(|c| c.to_ascii_lowercase());

    Some(Term::CollectionRange {
        lo: a.min(b),
        hi: a.max(b),
        letter,
    })
}
