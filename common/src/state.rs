//! 画面状態
//!
//! 入力（画像・食品名）と解析結果を1つの構造体で管理する。
//! UIフレームワークには依存しない。

use log::{debug, warn};

use crate::database::FoodDatabase;
use crate::error::Result;
use crate::types::{FoodRecord, ImageSelection};

/// 解析1回分の受付票
///
/// `begin_analysis` 時点の食品名と世代番号を保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTicket {
    generation: u64,
    food_name: String,
}

impl AnalysisTicket {
    pub fn food_name(&self) -> &str {
        &self.food_name
    }

    /// 受付時点の食品名で照合する
    pub fn run(&self, database: &FoodDatabase) -> Result<FoodRecord> {
        database.lookup(&self.food_name)
    }
}

/// アナライザの画面状態
#[derive(Debug, Clone, Default)]
pub struct AnalyzerState {
    image: Option<ImageSelection>,
    food_name: String,
    loading: bool,
    error: Option<String>,
    result: Option<FoodRecord>,
    /// 画像を選び直すたびに進む
    generation: u64,
}

impl AnalyzerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn image(&self) -> Option<&ImageSelection> {
        self.image.as_ref()
    }

    pub fn preview_url(&self) -> Option<&str> {
        self.image.as_ref().map(|image| image.preview_url.as_str())
    }

    pub fn food_name(&self) -> &str {
        &self.food_name
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&FoodRecord> {
        self.result.as_ref()
    }

    /// 解析ボタンを押せるか
    pub fn can_analyze(&self) -> bool {
        !self.loading
    }

    /// 画像を選択する
    ///
    /// 前の画像を置き換え、結果とエラーを消す。
    /// 置き換えた画像を返すので、呼び出し側でプレビューURLを解放すること。
    pub fn select_image(&mut self, image: ImageSelection) -> Option<ImageSelection> {
        debug!("image selected: {}", image.file_name);
        self.result = None;
        self.error = None;
        self.generation += 1;
        self.image.replace(image)
    }

    /// 食品名を更新する（正規化は照合時のみ）
    pub fn set_food_name(&mut self, food_name: impl Into<String>) {
        self.food_name = food_name.into();
    }

    /// 解析を開始する
    ///
    /// 解析中は `None` を返し、二重起動しない。
    pub fn begin_analysis(&mut self) -> Option<AnalysisTicket> {
        if self.loading {
            debug!("analysis already in flight");
            return None;
        }

        self.loading = true;
        self.error = None;

        Some(AnalysisTicket {
            generation: self.generation,
            food_name: self.food_name.clone(),
        })
    }

    /// 解析結果を反映する
    ///
    /// 受付後に画像が選び直されていた場合は結果を捨てる（ローディングは解除）。
    /// 反映した場合は `true`。
    pub fn finish_analysis(&mut self, ticket: AnalysisTicket, outcome: Result<FoodRecord>) -> bool {
        self.loading = false;

        if ticket.generation != self.generation {
            warn!(
                "discarding stale analysis (generation {} != {})",
                ticket.generation, self.generation
            );
            return false;
        }

        match outcome {
            Ok(record) => {
                debug!("analysis done: {}", record.name);
                self.result = Some(record);
                self.error = None;
            }
            Err(err) => {
                debug!("analysis failed: {}", err);
                self.result = None;
                self.error = Some(err.to_string());
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::TriState;

    fn analyze(state: &mut AnalyzerState) -> bool {
        let db = FoodDatabase::builtin();
        let ticket = state.begin_analysis().expect("解析開始失敗");
        let outcome = ticket.run(&db);
        state.finish_analysis(ticket, outcome)
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = AnalyzerState::new();
        assert!(state.image().is_none());
        assert!(state.preview_url().is_none());
        assert_eq!(state.food_name(), "");
        assert!(!state.is_loading());
        assert!(state.can_analyze());
        assert!(state.error().is_none());
        assert!(state.result().is_none());
    }

    #[test]
    fn test_analyze_known_food() {
        let mut state = AnalyzerState::new();
        state.set_food_name("APPLE");
        assert!(analyze(&mut state));

        let result = state.result().expect("結果なし");
        assert_eq!(result.name, "Apple");
        assert!(state.error().is_none());
        assert!(!state.is_loading());
    }

    #[test]
    fn test_analyze_empty_name_without_image() {
        let mut state = AnalyzerState::new();
        assert!(analyze(&mut state));

        assert_eq!(
            state.error(),
            Some("Please enter a food name or take a photo of the food item")
        );
        assert!(state.result().is_none());
    }

    #[test]
    fn test_analyze_empty_name_with_image_still_fails() {
        let mut state = AnalyzerState::new();
        state.select_image(ImageSelection::new("plate.jpg", "blob:1"));
        analyze(&mut state);

        assert!(state.error().is_some());
        assert!(state.result().is_none());
    }

    #[test]
    fn test_error_replaces_previous_result() {
        let mut state = AnalyzerState::new();
        state.set_food_name("apple");
        analyze(&mut state);
        state.set_food_name("");
        analyze(&mut state);

        // 結果とエラーは同時に存在しない
        assert!(state.result().is_none());
        assert!(state.error().is_some());
    }

    #[test]
    fn test_success_clears_previous_error() {
        let mut state = AnalyzerState::new();
        analyze(&mut state);
        state.set_food_name("kiwi");
        analyze(&mut state);

        assert!(state.error().is_none());
        assert_eq!(state.result().unwrap().consumable, TriState::Unknown);
    }

    #[test]
    fn test_select_image_clears_result_and_error() {
        let mut state = AnalyzerState::new();
        state.set_food_name("mushroom");
        analyze(&mut state);
        assert!(state.result().is_some());

        state.select_image(ImageSelection::new("a.jpg", "blob:a"));
        assert!(state.result().is_none());
        assert!(state.error().is_none());

        state.set_food_name("");
        analyze(&mut state);
        assert!(state.error().is_some());

        state.select_image(ImageSelection::new("b.jpg", "blob:b"));
        assert!(state.error().is_none());
        assert!(state.result().is_none());
    }

    #[test]
    fn test_select_image_returns_replaced() {
        let mut state = AnalyzerState::new();
        assert!(state.select_image(ImageSelection::new("a.jpg", "blob:a")).is_none());

        let replaced = state.select_image(ImageSelection::new("b.jpg", "blob:b"));
        assert_eq!(replaced.map(|i| i.preview_url), Some("blob:a".to_string()));
        assert_eq!(state.preview_url(), Some("blob:b"));
    }

    #[test]
    fn test_begin_analysis_refused_while_loading() {
        let mut state = AnalyzerState::new();
        state.set_food_name("apple");
        let ticket = state.begin_analysis().expect("解析開始失敗");
        assert!(state.is_loading());
        assert!(!state.can_analyze());
        assert!(state.begin_analysis().is_none());

        let outcome = ticket.run(&FoodDatabase::builtin());
        state.finish_analysis(ticket, outcome);
        assert!(state.can_analyze());
    }

    #[test]
    fn test_ticket_snapshots_food_name() {
        let mut state = AnalyzerState::new();
        state.set_food_name("raw chicken");
        let ticket = state.begin_analysis().unwrap();
        state.set_food_name("apple");

        assert_eq!(ticket.food_name(), "raw chicken");
        let outcome = ticket.run(&FoodDatabase::builtin());
        state.finish_analysis(ticket, outcome);
        assert_eq!(state.result().unwrap().name, "Raw Chicken");
    }

    #[test]
    fn test_stale_outcome_is_discarded() {
        let mut state = AnalyzerState::new();
        state.set_food_name("apple");
        let ticket = state.begin_analysis().unwrap();

        // 解析中に画像を選び直す
        state.select_image(ImageSelection::new("new.jpg", "blob:new"));
        let outcome = ticket.run(&FoodDatabase::builtin());
        assert!(!state.finish_analysis(ticket, outcome));

        assert!(!state.is_loading());
        assert!(state.result().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_stale_error_is_discarded() {
        let mut state = AnalyzerState::new();
        let ticket = state.begin_analysis().unwrap();
        state.select_image(ImageSelection::new("new.jpg", "blob:new"));

        assert!(!state.finish_analysis(ticket, Err(Error::MissingInput)));
        assert!(state.error().is_none());
    }
}
