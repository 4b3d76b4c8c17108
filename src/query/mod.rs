//! Quick-search mini language: predicate AST and total parser.

pub mod ast;
pub mod parser;

pub use ast::{QuerySet, Term, TermGroup};
pub use parser::parse_query;
