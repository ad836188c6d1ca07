//! 食品データベース（固定テーブル）
//!
//! 食品名を小文字化して固定テーブルと照合する。
//! 画像の中身は一切参照しない。

use std::collections::HashMap;

use log::debug;

use crate::error::{Error, Result};
use crate::types::{FoodRecord, NutritionInfo, TriState};

/// テーブルに無い食品の説明文
pub const UNKNOWN_DESCRIPTION: &str =
    "Item not found in database. Please consult with a food safety expert.";

/// テーブルに無い食品の警告文
pub const UNKNOWN_WARNING: &str = "Cannot determine safety of unidentified food items.";

/// 食品データベース
#[derive(Debug, Clone)]
pub struct FoodDatabase {
    /// 小文字化した食品名→レコード
    records: HashMap<String, FoodRecord>,
}

impl Default for FoodDatabase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FoodDatabase {
    /// 組み込みの3件で構築
    pub fn builtin() -> Self {
        let records = [
            ("apple", apple()),
            ("raw chicken", raw_chicken()),
            ("mushroom", wild_mushroom()),
        ]
        .into_iter()
        .map(|(key, record)| (key.to_string(), record))
        .collect();

        Self { records }
    }

    /// 食品名で照合する
    ///
    /// - 小文字化した名前がテーブルにあればそのレコード
    /// - 無ければ入力名そのままの「不明」レコード
    /// - 空文字は `Error::MissingInput`
    ///
    /// 前後の空白は除去しない。空白のみの名前は「不明」扱いになる。
    pub fn lookup(&self, food_name: &str) -> Result<FoodRecord> {
        let search_term = food_name.to_lowercase();

        if let Some(record) = self.records.get(&search_term) {
            debug!("lookup hit: {:?}", search_term);
            return Ok(record.clone());
        }

        if search_term.is_empty() {
            debug!("lookup rejected: empty food name");
            return Err(Error::MissingInput);
        }

        debug!("lookup miss: {:?}", search_term);
        Ok(unknown_record(food_name))
    }
}

/// テーブルに無い食品の汎用レコード
pub fn unknown_record(food_name: &str) -> FoodRecord {
    FoodRecord {
        name: food_name.to_string(),
        consumable: TriState::Unknown,
        safe_to_eat: TriState::Unknown,
        description: UNKNOWN_DESCRIPTION.to_string(),
        warning: Some(UNKNOWN_WARNING.to_string()),
        nutrition: None,
    }
}

fn apple() -> FoodRecord {
    FoodRecord {
        name: "Apple".to_string(),
        consumable: TriState::Yes,
        safe_to_eat: TriState::Yes,
        description: "Fresh fruit, edible raw.".to_string(),
        warning: None,
        nutrition: Some(nutrition(95, "0.5g", "25g", "0.3g", "4g", &["Vitamin C", "Vitamin A"])),
    }
}

fn raw_chicken() -> FoodRecord {
    FoodRecord {
        name: "Raw Chicken".to_string(),
        consumable: TriState::Yes,
        safe_to_eat: TriState::No,
        description: "Uncooked poultry, must be thoroughly cooked before consumption."
            .to_string(),
        warning: Some("Risk of salmonella if consumed raw.".to_string()),
        nutrition: Some(nutrition(120, "25g", "0g", "3g", "0g", &["Vitamin B6", "Niacin"])),
    }
}

fn wild_mushroom() -> FoodRecord {
    FoodRecord {
        name: "Wild Mushroom (Unidentified)".to_string(),
        consumable: TriState::No,
        safe_to_eat: TriState::No,
        description: "Unidentified wild mushroom species.".to_string(),
        warning: Some(
            "Never consume unidentified mushrooms. Some species can be deadly.".to_string(),
        ),
        nutrition: None,
    }
}

fn nutrition(
    calories: u32,
    protein: &str,
    carbs: &str,
    fat: &str,
    fiber: &str,
    vitamins: &[&str],
) -> NutritionInfo {
    NutritionInfo {
        calories,
        protein: protein.to_string(),
        carbs: carbs.to_string(),
        fat: fat.to_string(),
        fiber: fiber.to_string(),
        vitamins: vitamins.iter().map(|v| v.to_string()).collect(),
    }
}
