//! ページ埋め込みの設定読み込み
//!
//! `index.html` の `<script id="food-analyzer-config" type="application/json">`
//! があればその内容を `AnalyzerConfig` として読む。無ければ既定値。

use food_analyzer_common::AnalyzerConfig;

pub const CONFIG_ELEMENT_ID: &str = "food-analyzer-config";

/// ページから設定を読み込む
///
/// 読み込みに失敗した場合は警告を出して既定値を使う。
pub fn load() -> AnalyzerConfig {
    let content = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());

    match content {
        Some(content) => parse(&content),
        None => AnalyzerConfig::default(),
    }
}

/// 設定JSONを解釈する（空文字は既定値）
pub fn parse(content: &str) -> AnalyzerConfig {
    if content.trim().is_empty() {
        return AnalyzerConfig::default();
    }

    match AnalyzerConfig::from_json(content) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("invalid page config, using defaults: {}", err);
            AnalyzerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse("  \n"), AnalyzerConfig::default());
    }

    #[test]
    fn test_parse_override() {
        let config = parse(r#"{"analysis_delay_ms": 10, "show_disclaimer": false}"#);
        assert_eq!(config.analysis_delay_ms, 10);
        assert!(!config.show_disclaimer);
    }

    #[test]
    fn test_parse_invalid_falls_back() {
        assert_eq!(parse("not json"), AnalyzerConfig::default());
    }
}
