//! Summary views over a set of decisions (what a dashboard charts).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::{BidDecision, BidStatus};

/// Total bid amount for one item name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemTotal {
    pub item_name: String,
    pub bid_amount: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub winning: usize,
    pub outbid: usize,
}

/// Aggregate of one evaluation's decisions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BidSummary {
    /// Sorted by item name. Rows sharing a name are summed.
    pub by_item: Vec<ItemTotal>,
    pub statuses: StatusCounts,
    pub total_bid: f64,
}

impl BidSummary {
    pub fn from_decisions(decisions: &[BidDecision]) -> Self {
        let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
        let mut statuses = StatusCounts::default();

        for d in decisions {
            *totals.entry(d.item_name.as_str()).or_insert(0.0) += d.bid_amount;
            match d.status {
                BidStatus::Winning => statuses.winning += 1,
                BidStatus::Outbid => statuses.outbid += 1,
            }
        }

        let by_item: Vec<ItemTotal> = totals
            .into_iter()
            .map(|(item_name, bid_amount)| ItemTotal {
                item_name: item_name.to_string(),
                bid_amount,
            })
            .collect();
        let total_bid: f64 = by_item.iter().map(|t| t.bid_amount).sum();

        Self {
            by_item,
            statuses,
            total_bid,
        }
    }

    /// No bids were placed; show an informational message, not an error.
    pub fn is_empty(&self) -> bool {
        self.by_item.is_empty()
    }
}
