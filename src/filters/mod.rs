//! Filter option set and the predicate evaluator.

pub mod evaluate;
pub mod options;
pub mod predicates;

pub use evaluate::{filter_objekts, keeps, EvalContext};
pub use options::{FilterOptions, DEFAULT_COLUMNS};
