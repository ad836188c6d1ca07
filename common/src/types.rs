//! 食品レコードの型定義
//!
//! Web(WASM)とデスクトップで共有される型:
//! - TriState: はい/いいえ/不明 の3値フラグ
//! - NutritionInfo: 栄養成分
//! - FoodRecord: 解析結果（ルックアップの出力）
//! - ImageSelection: UIが保持する選択画像

use serde::{Deserialize, Serialize};

/// 3値フラグ
///
/// JSONでは `true` / `false` / `"Unknown"` として表現する。
/// 文字列はすべて `Unknown` として読み込む。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "RawFlag", into = "RawFlag")]
pub enum TriState {
    Yes,
    No,
    #[default]
    Unknown,
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawFlag {
    Known(bool),
    Other(String),
}

impl From<RawFlag> for TriState {
    fn from(raw: RawFlag) -> Self {
        match raw {
            RawFlag::Known(value) => value.into(),
            RawFlag::Other(_) => TriState::Unknown,
        }
    }
}

impl From<TriState> for RawFlag {
    fn from(flag: TriState) -> Self {
        match flag {
            TriState::Yes => RawFlag::Known(true),
            TriState::No => RawFlag::Known(false),
            TriState::Unknown => RawFlag::Other("Unknown".to_string()),
        }
    }
}

impl From<bool> for TriState {
    fn from(value: bool) -> Self {
        if value {
            TriState::Yes
        } else {
            TriState::No
        }
    }
}

/// 栄養成分
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionInfo {
    pub calories: u32,
    pub protein: String,
    pub carbs: String,
    pub fat: String,
    pub fiber: String,

    /// 表示順を保持する
    #[serde(default)]
    pub vitamins: Vec<String>,
}

/// 食品レコード
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodRecord {
    pub name: String,
    pub consumable: TriState,
    pub safe_to_eat: TriState,
    pub description: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,

    #[serde(default)]
    pub nutrition: Option<NutritionInfo>,
}

/// 選択中の画像
///
/// 画像の中身は解析に使わない。プレビュー用URLの解放は呼び出し側が行う
/// （Webなら `URL.revokeObjectURL`）。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ImageSelection {
    pub file_name: String,
    pub preview_url: String,
}

impl ImageSelection {
    pub fn new(file_name: impl Into<String>, preview_url: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            preview_url: preview_url.into(),
        }
    }
}
