//! 文件名合成服务 - 业务能力层
//!
//! 只负责"元数据 → 文件名"的拼装，纯函数、无 IO

use crate::models::ReportMetadata;

/// Windows 文件名中的非法字符
const INVALID_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// 清洗单个字段值
///
/// 移除文件名非法字符，再去掉首尾空白
pub fn sanitize_component(raw: &str) -> String {
    let cleaned: String = raw.chars().filter(|c| !INVALID_CHARS.contains(c)).collect();
    cleaned.trim().to_string()
}

/// 根据元数据合成新文件名
///
/// 格式固定为 `{Application}-{MarketScope}-{FileName}-{Source}-{Date}{扩展名}`。
/// 缺失字段使用默认值，每个字段独立清洗，不对拼装结果二次清洗。
///
/// # 参数
/// - `metadata`: 封面识别结果
/// - `original_ext`: 原文件扩展名（含点，如 ".pdf"）
pub fn synthesize_name(metadata: &ReportMetadata, original_ext: &str) -> String {
    let app = sanitize_component(metadata.application.as_deref().unwrap_or("Unknown"));
    let scope = sanitize_component(metadata.market_scope.as_deref().unwrap_or("WW"));
    let title = sanitize_component(metadata.file_name.as_deref().unwrap_or("Untitled"));
    let source = sanitize_component(metadata.source.as_deref().unwrap_or("Unknown"));
    let date = sanitize_component(metadata.date.as_deref().unwrap_or("000000"));

    format!("{}-{}-{}-{}-{}{}", app, scope, title, source, date, original_ext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_removes_invalid_chars() {
        // 九个非法字符全部移除，其余字符原样保留
        assert_eq!(sanitize_component("a<b>c:d\"e/f\\g|h?i*j"), "abcdefghij");
        assert_eq!(sanitize_component("AI 半導體"), "AI 半導體");
    }

    #[test]
    fn test_sanitize_trims_whitespace() {
        assert_eq!(sanitize_component("  ADAS  "), "ADAS");
        // 先移除非法字符再去空白：去掉字符后暴露出的空白也要清掉
        assert_eq!(sanitize_component("* MS *"), "MS");
    }

    #[test]
    fn test_sanitize_keeps_inner_whitespace() {
        assert_eq!(sanitize_component("Morgan Stanley"), "Morgan Stanley");
    }

    #[test]
    fn test_synthesize_exact_assembly() {
        let metadata = ReportMetadata {
            application: Some("ADAS".to_string()),
            market_scope: Some("WW".to_string()),
            file_name: Some("車載傳感器市場分析".to_string()),
            source: Some("MS".to_string()),
            date: Some("220625".to_string()),
        };

        assert_eq!(
            synthesize_name(&metadata, ".pdf"),
            "ADAS-WW-車載傳感器市場分析-MS-220625.pdf"
        );
    }

    #[test]
    fn test_synthesize_all_defaults() {
        let metadata = ReportMetadata::default();

        assert_eq!(
            synthesize_name(&metadata, ".pdf"),
            "Unknown-WW-Untitled-Unknown-000000.pdf"
        );
    }

    #[test]
    fn test_synthesize_partial_defaults_are_independent() {
        // 部分字段缺失时，其它字段不受影响
        let metadata = ReportMetadata {
            application: Some("AI".to_string()),
            date: Some("240315".to_string()),
            ..Default::default()
        };

        assert_eq!(
            synthesize_name(&metadata, ".pdf"),
            "AI-WW-Untitled-Unknown-240315.pdf"
        );

        let metadata = ReportMetadata {
            file_name: Some("記憶體產業展望".to_string()),
            ..Default::default()
        };

        assert_eq!(
            synthesize_name(&metadata, ".pdf"),
            "Unknown-WW-記憶體產業展望-Unknown-000000.pdf"
        );
    }

    #[test]
    fn test_synthesize_sanitizes_each_field() {
        let metadata = ReportMetadata {
            application: Some("A/I".to_string()),
            market_scope: Some(" WW ".to_string()),
            file_name: Some("半導體: 展望?".to_string()),
            source: Some("G|S".to_string()),
            date: Some("23*1231".to_string()),
        };

        assert_eq!(
            synthesize_name(&metadata, ".pdf"),
            "AI-WW-半導體 展望-GS-231231.pdf"
        );
    }
}
