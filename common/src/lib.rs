//! Food Analyzer Common Library
//!
//! Web(WASM)とデスクトップで共有される型・食品テーブル・画面状態

pub mod config;
pub mod database;
pub mod error;
pub mod state;
pub mod types;
pub mod view;

pub use config::AnalyzerConfig;
pub use database::FoodDatabase;
pub use error::{Error, Result};
pub use state::{AnalysisTicket, AnalyzerState};
pub use types::{FoodRecord, ImageSelection, NutritionInfo, TriState};
pub use view::Emphasis;
