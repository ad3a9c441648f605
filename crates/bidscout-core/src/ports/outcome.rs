//! OutcomeSource port - 入札結果ラベルのモック
//!
//! 実際の入札は一切行いません。status は出力テーブルを埋めるためだけに
//! 存在し、`bid_amount` とは無関係です。
//!
//! # 実装
//! - **RandomOutcome**: 本番用（一様ランダム）
//! - **FixedOutcome**: テスト用（決定的）

use rand::seq::SliceRandom;

use crate::domain::BidStatus;

/// OutcomeSource は判定結果を Winning / Outbid に分類
///
/// # 設計原則
/// - 「分類する」という単一の能力だけを持つ
/// - 引数は無視してよい（RandomOutcome は無視する）
///
/// # Thread Safety
/// - `Send + Sync` を要求（Decider と同じ）
pub trait OutcomeSource: Send + Sync {
    fn classify(&self, item_name: &str, bid_amount: f64) -> BidStatus;
}

/// RandomOutcome は `BidStatus::ALL` から一様に選ぶ（thread-local RNG）
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomOutcome;

impl OutcomeSource for RandomOutcome {
    fn classify(&self, _item_name: &str, _bid_amount: f64) -> BidStatus {
        *BidStatus::ALL
            .choose(&mut rand::thread_rng())
            .unwrap_or(&BidStatus::Outbid)
    }
}

/// FixedOutcome は常に同じ status を返す（テスト用）
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcome(pub BidStatus);

impl OutcomeSource for FixedOutcome {
    fn classify(&self, _item_name: &str, _bid_amount: f64) -> BidStatus {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_outcome_is_deterministic() {
        let source = FixedOutcome(BidStatus::Winning);
        for amount in [1.0, 50.0, 1e6] {
            assert_eq!(source.classify("Vase", amount), BidStatus::Winning);
        }
    }

    #[test]
    fn random_outcome_produces_both_labels() {
        let source = RandomOutcome;
        let draws: Vec<BidStatus> = (0..200).map(|_| source.classify("Vase", 110.0)).collect();
        // 偽陽性の確率は 2^-199
        assert!(draws.contains(&BidStatus::Winning));
        assert!(draws.contains(&BidStatus::Outbid));
    }
}
