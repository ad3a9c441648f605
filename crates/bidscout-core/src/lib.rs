//! bidscout-core
//!
//! Rule-based bid decisions over a table of auction listings.
//!
//! # Module layout
//! - **domain**: listings, decisions, config, errors
//! - **ports**: seams for time (`Clock`) and the mocked outcome (`OutcomeSource`)
//! - **app**: the evaluator and the per-item summary
//! - **table**: loading listings from a JSON table

pub mod domain;
pub mod ports;
pub mod app;
pub mod table;

pub use app::{BidSummary, Evaluator, ItemTotal, StatusCounts, evaluate, evaluate_table};
pub use domain::{
    AuctionListing, BidConfig, BidDecision, BidStatus, ConfigError, EndTime, TableError,
};
pub use ports::{Clock, FixedClock, FixedOutcome, OutcomeSource, RandomOutcome, SystemClock};
