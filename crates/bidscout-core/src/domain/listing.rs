//! Listing model: one input row and its resolved form.
//!
//! Cells may be missing. `resolve` turns a raw row into concrete values by
//! substituting defaults, so one bad cell never fails the row.

use chrono::NaiveDateTime;

use super::decision::TIMESTAMP_FORMAT;

pub const DEFAULT_ITEM_NAME: &str = "Unknown Item";
pub const DEFAULT_CURRENT_PRICE: f64 = 0.0;
pub const DEFAULT_MIN_INCREMENT: f64 = 1.0;

/// When an auction closes, as supplied by the data source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndTime {
    /// A time value the caller already parsed.
    At(NaiveDateTime),

    /// Text expected in the form `YYYY-MM-DD HH:MM:SS`.
    Text(String),
}

impl From<NaiveDateTime> for EndTime {
    fn from(at: NaiveDateTime) -> Self {
        EndTime::At(at)
    }
}

impl From<&str> for EndTime {
    fn from(text: &str) -> Self {
        EndTime::Text(text.to_string())
    }
}

impl From<String> for EndTime {
    fn from(text: String) -> Self {
        EndTime::Text(text)
    }
}

/// Parse an end time in the fixed `YYYY-MM-DD HH:MM:SS` form.
pub fn parse_end_time(text: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT)
}

/// A raw input row. `None` is a missing or null cell.
///
/// Rows from JSON go through `table::listings_from_json`, which applies the
/// lenient per-cell rules; there is no serde path for this type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuctionListing {
    pub item_name: Option<String>,
    pub current_price: Option<f64>,
    pub min_increment: Option<f64>,
    pub end_time: Option<EndTime>,
}

/// A row with every default applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedListing {
    pub item_name: String,
    pub current_price: f64,
    pub min_increment: f64,
    pub end_time: NaiveDateTime,
}

impl AuctionListing {
    pub fn new(
        item_name: impl Into<String>,
        current_price: f64,
        min_increment: f64,
        end_time: impl Into<EndTime>,
    ) -> Self {
        Self {
            item_name: Some(item_name.into()),
            current_price: Some(current_price),
            min_increment: Some(min_increment),
            end_time: Some(end_time.into()),
        }
    }

    pub fn with_current_price(mut self, current_price: f64) -> Self {
        self.current_price = Some(current_price);
        self
    }

    pub fn with_min_increment(mut self, min_increment: f64) -> Self {
        self.min_increment = Some(min_increment);
        self
    }

    pub fn with_end_time(mut self, end_time: impl Into<EndTime>) -> Self {
        self.end_time = Some(end_time.into());
        self
    }

    /// Apply defaults. A missing or unparsable end time becomes `now`.
    pub fn resolve(&self, now: NaiveDateTime) -> ResolvedListing {
        let item_name = self
            .item_name
            .clone()
            .unwrap_or_else(|| DEFAULT_ITEM_NAME.to_string());

        let end_time = match &self.end_time {
            Some(EndTime::At(at)) => *at,
            Some(EndTime::Text(text)) => match parse_end_time(text) {
                Ok(at) => at,
                Err(e) => {
                    tracing::warn!(item = %item_name, end_time = %text, error = %e, "unparsable end_time, using evaluation time");
                    now
                }
            },
            None => {
                tracing::warn!(item = %item_name, "missing end_time, using evaluation time");
                now
            }
        };

        ResolvedListing {
            item_name,
            current_price: present_or(self.current_price, DEFAULT_CURRENT_PRICE),
            min_increment: present_or(self.min_increment, DEFAULT_MIN_INCREMENT),
            end_time,
        }
    }
}

/// NaN counts as missing. Infinities are real values and reach the budget filters.
fn present_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| !v.is_nan()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn parses_fixed_pattern() {
        let at = parse_end_time("2024-01-01 12:00:00").unwrap();
        assert_eq!(at, noon());
    }

    #[rstest]
    #[case::iso_t("2024-01-01T12:00:00")]
    #[case::date_only("2024-01-01")]
    #[case::garbage("soon")]
    #[case::empty("")]
    fn rejects_other_patterns(#[case] text: &str) {
        assert!(parse_end_time(text).is_err());
    }

    #[test]
    fn resolve_keeps_present_values() {
        let listing = AuctionListing::new("Vase", 100.0, 10.0, "2024-01-01 13:00:00");
        let resolved = listing.resolve(noon());
        assert_eq!(resolved.item_name, "Vase");
        assert_eq!(resolved.current_price, 100.0);
        assert_eq!(resolved.min_increment, 10.0);
        assert_eq!(resolved.end_time, parse_end_time("2024-01-01 13:00:00").unwrap());
    }

    #[test]
    fn resolve_applies_defaults_to_missing_cells() {
        let resolved = AuctionListing::default().resolve(noon());
        assert_eq!(resolved.item_name, DEFAULT_ITEM_NAME);
        assert_eq!(resolved.current_price, 0.0);
        assert_eq!(resolved.min_increment, 1.0);
        assert_eq!(resolved.end_time, noon());
    }

    #[test]
    fn resolve_treats_nan_as_missing() {
        let listing = AuctionListing::default()
            .with_current_price(f64::NAN)
            .with_min_increment(f64::NAN);
        let resolved = listing.resolve(noon());
        assert_eq!(resolved.current_price, DEFAULT_CURRENT_PRICE);
        assert_eq!(resolved.min_increment, DEFAULT_MIN_INCREMENT);
    }

    #[rstest]
    #[case::inf(f64::INFINITY)]
    #[case::neg_inf(f64::NEG_INFINITY)]
    fn resolve_keeps_infinite_numbers(#[case] value: f64) {
        let listing = AuctionListing::default()
            .with_current_price(value)
            .with_min_increment(value);
        let resolved = listing.resolve(noon());
        assert_eq!(resolved.current_price, value);
        assert_eq!(resolved.min_increment, value);
    }

    #[test]
    fn resolve_falls_back_to_now_on_bad_end_time() {
        let listing = AuctionListing::new("Lamp", 5.0, 1.0, "next tuesday");
        assert_eq!(listing.resolve(noon()).end_time, noon());
    }

    #[test]
    fn resolve_uses_time_values_as_is() {
        let later = noon() + chrono::Duration::minutes(30);
        let listing = AuctionListing::default().with_end_time(later);
        assert_eq!(listing.resolve(noon()).end_time, later);
    }
}
