//! Application logic: the evaluator and what callers build on its output.

pub mod evaluator;
pub mod summary;

pub use self::evaluator::{Evaluator, evaluate, evaluate_table};
pub use self::summary::{BidSummary, ItemTotal, StatusCounts};
