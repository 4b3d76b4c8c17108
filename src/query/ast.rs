//! Predicate AST for the quick-search mini language.
//!
//! A search string parses into a [`QuerySet`]: comma-separated term groups
//! combined with OR, each group a whitespace-separated list of terms
//! combined with AND. An empty set matches everything, so an empty or
//! unparsable search never restricts the result.

use crate::core::Objekt;

/// One resolved search token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Term {
    /// `#10-100` / `#10`: inclusive serial range. Unsatisfiable for
    /// catalog items, which carry no serial.
    SerialRange { lo: u32, hi: u32 },
    /// `301z-302z` / `201z` / `c301-302`: inclusive collection-number
    /// range with an optional edition-letter equality constraint.
    CollectionRange {
        lo: u32,
        hi: u32,
        letter: Option<char>,
    },
    /// Shorthand resolved to a canonical member name, exact match.
    Member(String),
    /// Known artist name/code, exact match.
    Artist(String),
    /// Fallback: case-insensitive substring of the member display name.
    MemberText(String),
}

impl Term {
    pub fn matches(&self, objekt: &Objekt) -> bool {
        match self {
            Term::SerialRange { lo, hi } => objekt
                .serial()
                .is_some_and(|s| (*lo..=*hi).contains(&s)),
            Term::CollectionRange { lo, hi, letter } => {
                let no = objekt.collection_no();
                (*lo..=*hi).contains(&no.value)
                    && letter.map_or(true, |l| no.letter == Some(l))
            }
            Term::Member(name) => objekt.collection().member.eq_ignore_ascii_case(name),
            Term::Artist(name) => objekt.collection().artist.eq_ignore_ascii_case(name),
            Term::MemberText(text) => objekt
                .collection()
                .member
                .to_ascii_lowercase()
                .contains(text.as_str()),
        }
    }
}

/// AND of terms.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TermGroup {
    pub terms: Vec<Term>,
}

impl TermGroup {
    pub fn matches(&self, objekt: &Objekt) -> bool {
        self.terms.iter().all(|term| term.matches(objekt))
    }
}

/// OR of term groups; empty means "match everything".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QuerySet {
    pub groups: Vec<TermGroup>,
}

impl QuerySet {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn matches(&self, objekt: &Objekt) -> bool {
        self.groups.is_empty() || self.groups.iter().any(|group| group.matches(objekt))
    }
}
