//! Loading listings from a JSON table.
//!
//! A table is an array of row objects keyed by column name. The shape is
//! checked strictly; the cells are not. A cell with the wrong type is treated
//! as missing and picks up its default when the row is resolved.

use serde_json::{Map, Value};

use crate::domain::{AuctionListing, EndTime, TableError};

pub const REQUIRED_COLUMNS: [&str; 4] = ["item_name", "current_price", "min_increment", "end_time"];

/// Convert a JSON table into listings, keeping row order.
///
/// A column counts as present when at least one row has the key. Rows that
/// omit a present column get `None` for it.
pub fn listings_from_json(table: &Value) -> Result<Vec<AuctionListing>, TableError> {
    let rows = match table {
        Value::Array(rows) => rows,
        other => return Err(TableError::NotTabular(json_kind(other))),
    };

    let mut objects = Vec::with_capacity(rows.len());
    for (index, row) in rows.iter().enumerate() {
        match row {
            Value::Object(obj) => objects.push(obj),
            _ => return Err(TableError::RowNotObject { index }),
        }
    }

    if !objects.is_empty() {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|column| !objects.iter().any(|obj| obj.contains_key(**column)))
            .map(|column| column.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(TableError::MissingColumns(missing));
        }
    }

    Ok(objects.into_iter().map(listing_from_row).collect())
}

fn listing_from_row(row: &Map<String, Value>) -> AuctionListing {
    AuctionListing {
        item_name: row.get("item_name").and_then(text_cell),
        current_price: row.get("current_price").and_then(number_cell),
        min_increment: row.get("min_increment").and_then(number_cell),
        end_time: row.get("end_time").and_then(end_time_cell),
    }
}

fn text_cell(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn number_cell(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| !v.is_nan())
}

fn end_time_cell(value: &Value) -> Option<EndTime> {
    match value {
        Value::String(s) => Some(EndTime::Text(s.clone())),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
