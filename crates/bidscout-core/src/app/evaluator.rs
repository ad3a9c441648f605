//! Evaluator - turns a table of listings into bid decisions.
//!
//! Each row is decided on its own; nothing carries over between rows or
//! between calls. The only inputs besides the rows are the config and the
//! two ports (clock, outcome source).

use chrono::NaiveDateTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde_json::Value;

use crate::domain::{AuctionListing, BidConfig, BidDecision, ResolvedListing, TIMESTAMP_FORMAT, TableError};
use crate::ports::{Clock, OutcomeSource, RandomOutcome, SystemClock};
use crate::table::listings_from_json;

/// Multiplier applied to the base bid inside the snipe window.
pub const SNIPE_AGGRESSIVENESS: f64 = 1.25;

/// Multiplier applied outside the snipe window.
pub const BASE_AGGRESSIVENESS: f64 = 1.0;

/// Evaluator applies one `BidConfig` to tables of listings.
///
/// # Testability
/// - the clock and the outcome source are type parameters
/// - tests use `FixedClock` and `FixedOutcome` to get deterministic output
#[derive(Debug, Clone)]
pub struct Evaluator<C = SystemClock, S = RandomOutcome> {
    config: BidConfig,
    clock: C,
    outcomes: S,
}

impl Evaluator {
    /// Evaluator on the wall clock with random outcome labels.
    pub fn new(config: BidConfig) -> Self {
        Self::with_ports(config, SystemClock, RandomOutcome)
    }
}

impl<C: Clock, S: OutcomeSource> Evaluator<C, S> {
    pub fn with_ports(config: BidConfig, clock: C, outcomes: S) -> Self {
        Self {
            config,
            clock,
            outcomes,
        }
    }

    /// Decide every listing against a single evaluation instant.
    ///
    /// Output order follows input order; filtered rows are left out.
    pub fn evaluate(&self, listings: &[AuctionListing]) -> Vec<BidDecision> {
        let now = self.clock.now();
        let timestamp = now.format(TIMESTAMP_FORMAT).to_string();

        let decisions: Vec<BidDecision> = listings
            .iter()
            .enumerate()
            .filter_map(|(index, listing)| self.decide(index, listing.resolve(now), now, &timestamp))
            .collect();

        tracing::info!(
            rows = listings.len(),
            decisions = decisions.len(),
            skipped = listings.len() - decisions.len(),
            "evaluated auction table"
        );
        decisions
    }

    /// Load a JSON table and evaluate it. Only a malformed table shape is an error.
    pub fn evaluate_table(&self, table: &Value) -> Result<Vec<BidDecision>, TableError> {
        let listings = listings_from_json(table)?;
        Ok(self.evaluate(&listings))
    }

    fn decide(
        &self,
        index: usize,
        row: ResolvedListing,
        now: NaiveDateTime,
        timestamp: &str,
    ) -> Option<BidDecision> {
        if row.current_price > self.config.total_budget {
            tracing::debug!(
                row = index,
                item = %row.item_name,
                current_price = row.current_price,
                total_budget = self.config.total_budget,
                "skipped: price above total budget"
            );
            return None;
        }
        if let Some(cap) = self.config.per_item_cap {
            if row.current_price > cap {
                tracing::debug!(
                    row = index,
                    item = %row.item_name,
                    current_price = row.current_price,
                    per_item_cap = cap,
                    "skipped: price above per-item cap"
                );
                return None;
            }
        }

        let minutes_left = minutes_until(row.end_time, now);
        let aggressiveness = aggressiveness(minutes_left, self.config.snipe_window_minutes);

        let base_bid = row.current_price + row.min_increment;
        let mut bid_amount = round_to(base_bid * aggressiveness, 2);
        if let Some(cap) = self.config.per_item_cap {
            bid_amount = bid_amount.min(cap);
        }

        let status = self.outcomes.classify(&row.item_name, bid_amount);

        Some(BidDecision {
            item_name: row.item_name,
            current_price: row.current_price,
            bid_amount,
            status,
            minutes_left: round_to(minutes_left, 1),
            timestamp: timestamp.to_string(),
        })
    }
}

/// Evaluate with the wall clock and random outcome labels.
pub fn evaluate(listings: &[AuctionListing], config: &BidConfig) -> Vec<BidDecision> {
    Evaluator::new(*config).evaluate(listings)
}

/// Load a JSON table and evaluate it with the wall clock and random outcome labels.
pub fn evaluate_table(table: &Value, config: &BidConfig) -> Result<Vec<BidDecision>, TableError> {
    Evaluator::new(*config).evaluate_table(table)
}

/// Minutes from `now` until `end_time`, floored at zero.
fn minutes_until(end_time: NaiveDateTime, now: NaiveDateTime) -> f64 {
    let delta = end_time - now;
    let seconds = match delta.num_microseconds() {
        Some(micros) => micros as f64 / 1_000_000.0,
        None => delta.num_milliseconds() as f64 / 1_000.0,
    };
    (seconds / 60.0).max(0.0)
}

/// Decided on the unrounded minutes left.
fn aggressiveness(minutes_left: f64, snipe_window_minutes: u32) -> f64 {
    if minutes_left <= f64::from(snipe_window_minutes) {
        SNIPE_AGGRESSIVENESS
    } else {
        BASE_AGGRESSIVENESS
    }
}

/// Round the exact binary value of `value` to `places` decimals, ties to even,
/// and return the `f64` nearest to the rounded decimal.
///
/// Values outside `Decimal` range (infinities, |x| > ~7.9e28) have no
/// fractional digits left to round and pass through unchanged.
fn round_to(value: f64, places: u32) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_string().parse().ok())
        .unwrap_or(value)
}
