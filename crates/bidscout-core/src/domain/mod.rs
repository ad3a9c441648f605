//! Domain model (listings, decisions, config, errors).

pub mod config;
pub mod decision;
pub mod errors;
pub mod listing;

pub use config::{BidConfig, BidConfigBuilder, SUGGESTED_PER_ITEM_CAP};
pub use decision::{BidDecision, BidStatus, TIMESTAMP_FORMAT};
pub use errors::{ConfigError, TableError};
pub use listing::{AuctionListing, EndTime, ResolvedListing, parse_end_time};
