//! Evaluator configuration: the three knobs a user can turn.

use serde::Deserialize;

use super::errors::ConfigError;

/// Per-item cap the presentation layer starts from. The library default is no cap.
pub const SUGGESTED_PER_ITEM_CAP: f64 = 800.0;

const DEFAULT_TOTAL_BUDGET: f64 = 1000.0;
const DEFAULT_SNIPE_WINDOW_MINUTES: u32 = 5;

/// Thresholds applied to every row of one evaluation.
///
/// - `total_budget`: rows priced above it are skipped.
/// - `per_item_cap`: rows priced above it are skipped, and bids are clamped to it.
/// - `snipe_window_minutes`: at or below this many minutes left, bids get more aggressive.
///
/// The values have no enforced relationship to each other; a cap above the
/// budget is allowed.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct BidConfig {
    pub total_budget: f64,
    pub per_item_cap: Option<f64>,
    pub snipe_window_minutes: u32,
}

impl Default for BidConfig {
    fn default() -> Self {
        Self {
            total_budget: DEFAULT_TOTAL_BUDGET,
            per_item_cap: None,
            snipe_window_minutes: DEFAULT_SNIPE_WINDOW_MINUTES,
        }
    }
}

impl BidConfig {
    pub fn builder() -> BidConfigBuilder {
        BidConfigBuilder::new()
    }

    /// Check the invariants `BidConfigBuilder::build` enforces.
    ///
    /// Useful after deserializing, since serde bypasses the builder.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.total_budget.is_finite() && self.total_budget > 0.0) {
            return Err(ConfigError::NonPositiveBudget(self.total_budget));
        }
        if let Some(cap) = self.per_item_cap {
            if !(cap.is_finite() && cap > 0.0) {
                return Err(ConfigError::NonPositiveCap(cap));
            }
        }
        if self.snipe_window_minutes == 0 {
            return Err(ConfigError::ZeroSnipeWindow);
        }
        Ok(())
    }
}

/// BidConfigBuilder は既定値から始めて `build()` 時に検証する
///
/// # Fail-fast 設計
/// - 各 setter は値を保持するだけ
/// - build() で不変条件をチェックし、違反があれば ConfigError を返す
///
/// # 使用例
/// ```ignore
/// let config = BidConfig::builder()
///     .total_budget(2500.0)
///     .per_item_cap(800.0)
///     .snipe_window_minutes(10)
///     .build()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct BidConfigBuilder {
    config: BidConfig,
}

impl BidConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_budget(mut self, amount: f64) -> Self {
        self.config.total_budget = amount;
        self
    }

    pub fn per_item_cap(mut self, amount: f64) -> Self {
        self.config.per_item_cap = Some(amount);
        self
    }

    pub fn no_per_item_cap(mut self) -> Self {
        self.config.per_item_cap = None;
        self
    }

    pub fn snipe_window_minutes(mut self, minutes: u32) -> Self {
        self.config.snipe_window_minutes = minutes;
        self
    }

    pub fn build(self) -> Result<BidConfig, ConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn defaults_match_documented_values() {
        let config = BidConfig::default();
        assert_eq!(config.total_budget, 1000.0);
        assert_eq!(config.per_item_cap, None);
        assert_eq!(config.snipe_window_minutes, 5);
    }

    #[test]
    fn builder_overrides_defaults() {
        let config = BidConfig::builder()
            .total_budget(2500.0)
            .per_item_cap(SUGGESTED_PER_ITEM_CAP)
            .snipe_window_minutes(10)
            .build()
            .unwrap();
        assert_eq!(config.total_budget, 2500.0);
        assert_eq!(config.per_item_cap, Some(800.0));
        assert_eq!(config.snipe_window_minutes, 10);
    }

    #[test]
    fn cap_above_budget_is_allowed() {
        let config = BidConfig::builder()
            .total_budget(100.0)
            .per_item_cap(500.0)
            .build();
        assert!(config.is_ok());
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-5.0)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn builder_rejects_bad_budget(#[case] budget: f64) {
        let err = BidConfig::builder().total_budget(budget).build().unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveBudget(_)));
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-1.0)]
    fn builder_rejects_bad_cap(#[case] cap: f64) {
        let err = BidConfig::builder().per_item_cap(cap).build().unwrap_err();
        assert!(matches!(err, ConfigError::NonPositiveCap(_)));
    }

    #[test]
    fn builder_rejects_zero_snipe_window() {
        let err = BidConfig::builder().snipe_window_minutes(0).build().unwrap_err();
        assert_eq!(err, ConfigError::ZeroSnipeWindow);
    }

    #[test]
    fn deserialize_fills_omitted_fields() {
        let config: BidConfig = serde_json::from_str(r#"{"per_item_cap": 800.0}"#).unwrap();
        assert_eq!(config.total_budget, 1000.0);
        assert_eq!(config.per_item_cap, Some(800.0));
        assert_eq!(config.snipe_window_minutes, 5);
        assert!(config.validate().is_ok());
    }
}
