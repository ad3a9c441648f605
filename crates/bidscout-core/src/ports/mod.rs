//! Ports - 抽象化レイヤー
//!
//! Evaluator が依存する「非決定的なもの」を trait として切り出します。
//! 本番実装とテスト用の固定実装を差し替えられるようにするためです。
//!
//! # ポート一覧
//! - **Clock**: 評価時刻（壁時計）
//! - **OutcomeSource**: Winning / Outbid のモック判定

pub mod clock;
pub mod outcome;

// 主要な trait と実装を再エクスポート
pub use self::clock::{Clock, FixedClock, SystemClock};
pub use self::outcome::{FixedOutcome, OutcomeSource, RandomOutcome};
