//! アナライザ設定

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 解析待ち時間の既定値（ミリ秒）
pub const DEFAULT_ANALYSIS_DELAY_MS: u32 = 1500;

/// 解析待ち時間の上限（ミリ秒）
pub const MAX_ANALYSIS_DELAY_MS: u32 = 60_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// 擬似的な解析待ち時間
    pub analysis_delay_ms: u32,
    pub show_disclaimer: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            analysis_delay_ms: DEFAULT_ANALYSIS_DELAY_MS,
            show_disclaimer: true,
        }
    }
}

impl AnalyzerConfig {
    /// JSON文字列から読み込み（省略した項目は既定値）
    pub fn from_json(content: &str) -> Result<Self> {
        let config: AnalyzerConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// 待ち時間を上書きする（環境変数などの文字列から）
    pub fn with_delay_override(mut self, value: &str) -> Result<Self> {
        let delay: u32 = value
            .trim()
            .parse()
            .map_err(|_| Error::Config(format!("invalid analysis delay: {}", value)))?;
        self.analysis_delay_ms = delay;
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.analysis_delay_ms > MAX_ANALYSIS_DELAY_MS {
            return Err(Error::Config(format!(
                "analysis_delay_ms must be <= {}, got {}",
                MAX_ANALYSIS_DELAY_MS, self.analysis_delay_ms
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalyzerConfig::default();
        assert_eq!(config.analysis_delay_ms, 1500);
        assert!(config.show_disclaimer);
    }

    #[test]
    fn test_from_json_partial() {
        let config = AnalyzerConfig::from_json(r#"{"analysis_delay_ms": 0}"#).unwrap();
        assert_eq!(config.analysis_delay_ms, 0);
        assert!(config.show_disclaimer);
    }

    #[test]
    fn test_from_json_empty_object() {
        let config = AnalyzerConfig::from_json("{}").unwrap();
        assert_eq!(config, AnalyzerConfig::default());
    }

    #[test]
    fn test_from_json_invalid() {
        let result = AnalyzerConfig::from_json("{");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_from_json_delay_too_long() {
        let result = AnalyzerConfig::from_json(r#"{"analysis_delay_ms": 600000}"#);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_delay_override() {
        let config = AnalyzerConfig::default().with_delay_override(" 250 ").unwrap();
        assert_eq!(config.analysis_delay_ms, 250);

        let result = AnalyzerConfig::default().with_delay_override("soon");
        assert!(matches!(result, Err(Error::Config(_))));
    }
}
