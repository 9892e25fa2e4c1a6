//! 报告元数据模型

use serde::Deserialize;

/// 封面识别得到的报告元数据
///
/// 五个字段与模型输出的 JSON 键一一对应，均为可选，
/// 缺失时由文件名合成器填充默认值
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportMetadata {
    /// 行业应用领域（如 AI、ADAS、Semi）
    #[serde(rename = "Application")]
    pub application: Option<String>,
    /// 市场范围：WW（全球）或 CN（中国）
    #[serde(rename = "MarketScope")]
    pub market_scope: Option<String>,
    /// 报告标题（繁體中文）
    #[serde(rename = "FileName")]
    pub file_name: Option<String>,
    /// 研究机构缩写（如 MS、GS、CICC）
    #[serde(rename = "Source")]
    pub source: Option<String>,
    /// 报告日期，YYMMDD 格式
    #[serde(rename = "Date")]
    pub date: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "Application": "ADAS",
            "MarketScope": "WW",
            "FileName": "車載傳感器市場分析",
            "Source": "MS",
            "Date": "220625"
        }"#;

        let metadata: ReportMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.application.as_deref(), Some("ADAS"));
        assert_eq!(metadata.market_scope.as_deref(), Some("WW"));
        assert_eq!(metadata.file_name.as_deref(), Some("車載傳感器市場分析"));
        assert_eq!(metadata.source.as_deref(), Some("MS"));
        assert_eq!(metadata.date.as_deref(), Some("220625"));
    }

    #[test]
    fn test_deserialize_partial_record() {
        // 缺失的键应解析为 None，而不是报错
        let json = r#"{"Application": "AI", "Date": "240101"}"#;

        let metadata: ReportMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.application.as_deref(), Some("AI"));
        assert!(metadata.market_scope.is_none());
        assert!(metadata.file_name.is_none());
        assert!(metadata.source.is_none());
        assert_eq!(metadata.date.as_deref(), Some("240101"));
    }

    #[test]
    fn test_deserialize_ignores_unknown_keys() {
        let json = r#"{"Application": "Semi", "Confidence": 0.9}"#;

        let metadata: ReportMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(metadata.application.as_deref(), Some("Semi"));
    }
}
