use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use bidscout_core::domain::{SUGGESTED_PER_ITEM_CAP, TIMESTAMP_FORMAT};
use bidscout_core::table::listings_from_json;
use bidscout_core::{AuctionListing, BidConfig, BidDecision, BidSummary, EndTime, Evaluator};
use tracing::info;

const DEFAULT_TABLE_PATH: &str = "data/auctions.json";
const BAR_WIDTH: f64 = 40.0;

/// Reads the three knobs from the environment, falling back to the dashboard defaults.
fn config_from_env() -> Result<BidConfig> {
    let mut builder = BidConfig::builder();

    if let Some(budget) = env_value::<f64>("BIDSCOUT_TOTAL_BUDGET")? {
        builder = builder.total_budget(budget);
    }

    builder = match std::env::var("BIDSCOUT_PER_ITEM_CAP") {
        Ok(raw) if matches!(raw.trim().to_ascii_lowercase().as_str(), "none" | "off" | "") => {
            builder.no_per_item_cap()
        }
        Ok(raw) => builder.per_item_cap(
            raw.trim()
                .parse()
                .with_context(|| format!("BIDSCOUT_PER_ITEM_CAP={raw:?} is not a number"))?,
        ),
        Err(_) => builder.per_item_cap(SUGGESTED_PER_ITEM_CAP),
    };

    if let Some(minutes) = env_value::<u32>("BIDSCOUT_SNIPE_WINDOW_MINUTES")? {
        builder = builder.snipe_window_minutes(minutes);
    }

    Ok(builder.build()?)
}

fn env_value<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name}={raw:?} is not valid")),
        Err(_) => Ok(None),
    }
}

fn load_table(path: &Path) -> Result<serde_json::Value> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading auction table {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing auction table {}", path.display()))
}

fn cell<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn print_listings(listings: &[AuctionListing]) {
    println!("Active auctions");
    println!("{:<24} {:>12} {:>12}  {}", "item_name", "current_price", "min_increment", "end_time");
    for l in listings {
        let end_time = l.end_time.as_ref().map(|e| match e {
            EndTime::At(at) => at.format(TIMESTAMP_FORMAT).to_string(),
            EndTime::Text(text) => text.clone(),
        });
        println!(
            "{:<24} {:>12} {:>12}  {}",
            cell(l.item_name.as_deref()),
            cell(l.current_price),
            cell(l.min_increment),
            cell(end_time),
        );
    }
    println!();
}

fn print_decisions(decisions: &[BidDecision]) {
    println!("Bid results");
    println!(
        "{:<24} {:>12} {:>10} {:<8} {:>12}  {}",
        "item_name", "current_price", "bid_amount", "status", "minutes_left", "timestamp"
    );
    for d in decisions {
        println!(
            "{:<24} {:>12.2} {:>10.2} {:<8} {:>12.1}  {}",
            d.item_name, d.current_price, d.bid_amount, d.status, d.minutes_left, d.timestamp
        );
    }
    println!();
}

fn print_summary(summary: &BidSummary) {
    println!("Total bid amount by item");
    let max = summary
        .by_item
        .iter()
        .map(|t| t.bid_amount)
        .fold(0.0_f64, f64::max);
    for total in &summary.by_item {
        let len = if max > 0.0 { (total.bid_amount / max * BAR_WIDTH).round() as usize } else { 0 };
        println!("{:<24} {:>10.2} {}", total.item_name, total.bid_amount, "#".repeat(len));
    }
    println!(
        "winning={} outbid={} total={:.2}",
        summary.statuses.winning, summary.statuses.outbid, summary.total_bid
    );
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .without_time()
        .with_target(false)
        .init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_TABLE_PATH));

    // (A) config and table
    let config = config_from_env()?;
    info!(
        total_budget = config.total_budget,
        per_item_cap = ?config.per_item_cap,
        snipe_window_minutes = config.snipe_window_minutes,
        "config loaded"
    );
    let table = load_table(&path)?;
    let listings = listings_from_json(&table)?;
    print_listings(&listings);

    // (B) one evaluation over the whole table
    let decisions = Evaluator::new(config).evaluate(&listings);

    // (C) results and summary
    let summary = BidSummary::from_decisions(&decisions);
    if summary.is_empty() {
        println!("No bids placed based on the current settings.");
        return Ok(());
    }
    print_decisions(&decisions);
    print_summary(&summary);
    Ok(())
}
