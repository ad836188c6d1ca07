use food_analyzer_common::{AnalysisTicket, FoodRecord};

/// デコード済みのプレビュー画像（RGBA）
pub struct PreviewImage {
    pub size: [usize; 2],
    pub pixels: Vec<u8>,
}

/// ワーカースレッドからUIへの通知
pub enum UiMessage {
    AnalyzeDone {
        ticket: AnalysisTicket,
        outcome: food_analyzer_common::Result<FoodRecord>,
    },
    PreviewLoaded {
        preview_url: String,
        image: Result<PreviewImage, String>,
    },
}
