use anyhow::{Context, Result};
use food_analyzer_common::AnalyzerConfig;
use image::ImageReader;
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::PreviewImage;

/// 待ち時間の上書き用環境変数
pub const DELAY_ENV: &str = "FOOD_ANALYZER_DELAY_MS";

const PREVIEW_MAX_WIDTH: u32 = 480;
const PREVIEW_MAX_HEIGHT: u32 = 320;

pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("home directory not found")?;
    Ok(home.join(".config").join("food-analyzer").join("config.json"))
}

/// 設定を読み込む（環境変数を優先）
pub fn load_config() -> Result<AnalyzerConfig> {
    let config = load_config_from(&config_path()?)?;
    Ok(apply_delay_env(config, std::env::var(DELAY_ENV).ok()))
}

/// 環境変数の待ち時間を反映する
///
/// 値が不正な場合は警告を出し、ファイルの設定をそのまま使う。
pub fn apply_delay_env(config: AnalyzerConfig, value: Option<String>) -> AnalyzerConfig {
    let Some(value) = value else {
        return config;
    };
    match config.clone().with_delay_override(&value) {
        Ok(overridden) => overridden,
        Err(err) => {
            log::warn!("ignoring {DELAY_ENV}={value:?}: {err}");
            config
        }
    }
}

/// ファイルが無ければ既定値
pub fn load_config_from(path: &Path) -> Result<AnalyzerConfig> {
    if !path.exists() {
        return Ok(AnalyzerConfig::default());
    }
    let content = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config = AnalyzerConfig::from_json(&content)
        .with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
}

pub fn load_preview(path: &Path) -> Result<PreviewImage> {
    let image = ImageReader::open(path)
        .with_context(|| format!("open {}", path.display()))?
        .with_guessed_format()
        .with_context(|| format!("detect format {}", path.display()))?
        .decode()
        .with_context(|| format!("decode {}", path.display()))?;

    let thumb = image.thumbnail(PREVIEW_MAX_WIDTH, PREVIEW_MAX_HEIGHT);
    Ok(PreviewImage {
        size: [thumb.width() as usize, thumb.height() as usize],
        pixels: thumb.to_rgba8().into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempdir().unwrap();
        let config = load_config_from(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"analysis_delay_ms": 200}"#).unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.analysis_delay_ms, 200);
        assert!(config.show_disclaimer);
    }

    #[test]
    fn test_load_config_broken_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ broken").unwrap();

        let err = load_config_from(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parse"));
    }

    #[test]
    fn test_delay_env_override() {
        let config = AnalyzerConfig {
            show_disclaimer: false,
            ..Default::default()
        };
        let config = apply_delay_env(config, Some("300".to_string()));
        assert_eq!(config.analysis_delay_ms, 300);
        assert!(!config.show_disclaimer);
    }

    #[test]
    fn test_delay_env_invalid_keeps_file_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"analysis_delay_ms": 200, "show_disclaimer": false}"#).unwrap();
        let file_config = load_config_from(&path).unwrap();

        let config = apply_delay_env(file_config.clone(), Some("soon".to_string()));
        assert_eq!(config, file_config);

        let config = apply_delay_env(file_config.clone(), None);
        assert_eq!(config, file_config);
    }

    #[test]
    fn test_load_preview_png() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dish.png");
        image::RgbaImage::from_pixel(800, 400, image::Rgba([200, 40, 40, 255]))
            .save(&path)
            .unwrap();

        let preview = load_preview(&path).unwrap();
        assert!(preview.size[0] <= PREVIEW_MAX_WIDTH as usize);
        assert!(preview.size[1] <= PREVIEW_MAX_HEIGHT as usize);
        assert_eq!(preview.pixels.len(), preview.size[0] * preview.size[1] * 4);
    }

    #[test]
    fn test_load_preview_not_an_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.png");
        fs::write(&path, "hello").unwrap();

        assert!(load_preview(&path).is_err());
    }
}
