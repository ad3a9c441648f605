//! Errors surfaced to callers.
//!
//! Malformed cells (bad price, bad end time, ...) are never errors: they are
//! absorbed by defaults while a row is resolved. Only a table whose shape is
//! wrong, or a config that makes no sense, reaches the caller.

use thiserror::Error;

/// TableError is a structural problem with the input table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("table must be a JSON array of rows, got {0}")]
    NotTabular(&'static str),

    #[error("row {index} is not an object")]
    RowNotObject { index: usize },

    #[error("missing required columns: {0:?}")]
    MissingColumns(Vec<String>),
}

/// ConfigError is returned by `BidConfigBuilder::build`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("total_budget must be a positive amount, got {0}")]
    NonPositiveBudget(f64),

    #[error("per_item_cap must be a positive amount when set, got {0}")]
    NonPositiveCap(f64),

    #[error("snipe_window_minutes must be at least 1")]
    ZeroSnipeWindow,
}
