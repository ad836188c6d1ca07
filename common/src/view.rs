//! 表示用の文言とヘルパー
//!
//! WebとデスクトップのどちらのUIでも同じ表示になるよう、
//! ラベル・強調色・栄養成分の行をここでまとめて組み立てる。

use crate::types::{FoodRecord, NutritionInfo, TriState};

pub const TITLE: &str = "Food Analyzer";
pub const SUBTITLE: &str = "Identify food items and check if they're safe to consume";
pub const UPLOAD_LABEL: &str = "Upload Food Image";
pub const UPLOAD_HINT: &str = "Click to upload or take a photo";
pub const FOOD_NAME_LABEL: &str = "Or Enter Food Name";
pub const FOOD_NAME_PLACEHOLDER: &str = "e.g., Apple, Raw Chicken, Mushroom";
pub const ANALYZE_LABEL: &str = "Analyze Food Item";
pub const ANALYZING_LABEL: &str = "Analyzing...";
pub const NUTRITION_UNAVAILABLE: &str = "Nutritional information not available for this item.";
pub const DISCLAIMER: &str = "Disclaimer: This app is for demonstration purposes only. \
Always consult official food safety resources and professionals for food safety concerns.";

/// 受け付ける画像のMIMEタイプ
pub const IMAGE_ACCEPT: &str = "image/*";

/// デスクトップのファイルダイアログで使う拡張子
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "bmp"];

/// フラグの強調色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Positive,
    Negative,
    Caution,
}

impl Emphasis {
    /// CSSクラス名
    pub fn css_class(&self) -> &'static str {
        match self {
            Emphasis::Positive => "green-text",
            Emphasis::Negative => "red-text",
            Emphasis::Caution => "yellow-text",
        }
    }

    /// RGB
    pub fn rgb(&self) -> [u8; 3] {
        match self {
            Emphasis::Positive => [0x16, 0xa3, 0x4a],
            Emphasis::Negative => [0xdc, 0x26, 0x26],
            Emphasis::Caution => [0xca, 0x8a, 0x04],
        }
    }
}

impl TriState {
    pub fn label(&self) -> &'static str {
        match self {
            TriState::Yes => "Yes",
            TriState::No => "No",
            TriState::Unknown => "Unknown",
        }
    }

    pub fn emphasis(&self) -> Emphasis {
        match self {
            TriState::Yes => Emphasis::Positive,
            TriState::No => Emphasis::Negative,
            TriState::Unknown => Emphasis::Caution,
        }
    }
}

impl NutritionInfo {
    /// 栄養成分表の行（ラベル, 値）
    pub fn rows(&self) -> [(&'static str, String); 5] {
        [
            ("Calories:", self.calories.to_string()),
            ("Protein:", self.protein.clone()),
            ("Carbs:", self.carbs.clone()),
            ("Fat:", self.fat.clone()),
            ("Fiber:", self.fiber.clone()),
        ]
    }

    /// ビタミン・ミネラルの行。空なら `None`
    pub fn vitamins_line(&self) -> Option<String> {
        if self.vitamins.is_empty() {
            None
        } else {
            Some(self.vitamins.join(", "))
        }
    }
}

impl FoodRecord {
    /// 状態表示の2項目（ラベル, 値）
    pub fn status_items(&self) -> [(&'static str, TriState); 2] {
        [("Consumable:", self.consumable), ("Safe to Eat:", self.safe_to_eat)]
    }

    /// 「栄養成分なし」の注記を出すか
    ///
    /// 食べられないと分かっている食品には出さない。
    pub fn shows_nutrition_unavailable(&self) -> bool {
        self.nutrition.is_none() && self.consumable != TriState::No
    }
}

/// 解析ボタンの文言
pub fn analyze_button_label(loading: bool) -> &'static str {
    if loading {
        ANALYZING_LABEL
    } else {
        ANALYZE_LABEL
    }
}
