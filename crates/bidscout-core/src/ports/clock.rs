//! Clock port - 時刻の抽象化
//!
//! 入力の end_time はタイムゾーンを持たないため、Clock もローカルの
//! naive な時刻を返し、同じ基準で比較します。
//!
//! # 実装
//! - **SystemClock**: 本番用（ローカル壁時計）
//! - **FixedClock**: テスト用

use chrono::{Local, NaiveDateTime};

/// Clock は評価時刻を提供
///
/// # 不変条件
/// - Evaluator は 1 回の評価につき `now()` を 1 度だけ呼び、全行で使い回す
///
/// # テスト容易性
/// - trait により時刻を差し替え可能
/// - テストでは FixedClock を使用
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// SystemClock はローカルの壁時計
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// FixedClock は常に同じ時刻を返す（テスト用）
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    at: NaiveDateTime,
}

impl FixedClock {
    pub fn new(at: NaiveDateTime) -> Self {
        Self { at }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.at
    }
}
