//! Decision model: the output row of one evaluation.

use std::fmt;

use serde::Serialize;

/// Text format for `end_time` inputs and the `timestamp` output column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Mocked outcome label attached to every decision.
///
/// It has no link to the bid amount; see `ports::OutcomeSource`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BidStatus {
    Winning,
    Outbid,
}

impl BidStatus {
    pub const ALL: [BidStatus; 2] = [BidStatus::Winning, BidStatus::Outbid];

    pub fn as_str(self) -> &'static str {
        match self {
            BidStatus::Winning => "Winning",
            BidStatus::Outbid => "Outbid",
        }
    }
}

impl fmt::Display for BidStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// One bid decision, emitted for a listing that passed the budget filters.
///
/// Field order is the column order of the output table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BidDecision {
    pub item_name: String,
    pub current_price: f64,

    /// Rounded to 2 decimal places, clamped to the per-item cap when one is set.
    pub bid_amount: f64,
    pub status: BidStatus,

    /// Never negative; rounded to 1 decimal place.
    pub minutes_left: f64,

    /// Evaluation instant shared by every decision of one call.
    pub timestamp: String,
}
