//! 擬似解析
//!
//! 設定された時間だけ待ってから食品テーブルを照合する。
//! 画像は送信も解析もしない。

use food_analyzer_common::{AnalysisTicket, AnalyzerConfig, FoodDatabase, FoodRecord, Result};
use gloo::timers::future::TimeoutFuture;

/// 解析を実行する
///
/// # Arguments
/// * `config` - 待ち時間の設定
/// * `database` - 食品テーブル
/// * `ticket` - `AnalyzerState::begin_analysis` の受付票
pub async fn run_analysis(
    config: &AnalyzerConfig,
    database: &FoodDatabase,
    ticket: &AnalysisTicket,
) -> Result<FoodRecord> {
    if config.analysis_delay_ms > 0 {
        TimeoutFuture::new(config.analysis_delay_ms).await;
    }

    let started = js_sys::Date::now();
    let outcome = ticket.run(database);
    log::debug!(
        "lookup for {:?} took {:.1}ms",
        ticket.food_name(),
        js_sys::Date::now() - started
    );

    if let Ok(record) = &outcome {
        if let Ok(json) = serde_json::to_string(record) {
            log::debug!("analysis result: {}", json);
        }
    }

    outcome
}
