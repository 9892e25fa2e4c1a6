//! 封面识别服务 - 业务能力层
//!
//! 只负责"封面图片 → 报告元数据"这一个能力，不关心流程
//!
//! ## 技术栈
//! - 使用 `async-openai` crate 进行 API 调用
//! - 兼容 OpenAI API 的服务（默认为 Gemini 的 OpenAI 兼容端点）

use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestMessageContentPartImage,
        ChatCompletionRequestMessageContentPartText, ChatCompletionRequestUserMessageArgs,
        ChatCompletionRequestUserMessageContent, ChatCompletionRequestUserMessageContentPart,
        CreateChatCompletionRequestArgs, ImageDetail, ImageUrl,
    },
    Client,
};
use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ClassifyError;
use crate::models::ReportMetadata;

/// 封面识别指令模板（v1）
///
/// 这是与外部模型之间的输出契约：五个键的名称和语义固定，
/// 修改时必须同步调整 `ReportMetadata` 的字段映射
const COVER_PROMPT_V1: &str = r#"Analyze this research report cover page. Extract the following information to rename the file.
Return ONLY a raw JSON object (no markdown formatting) with these keys:
- "Application": The main industry application (e.g., AI, ADAS, Semi, DRAM, Auto, EV). keep it short.
- "MarketScope": "WW" for Worldwide/Global, "CN" for China. Default to "WW" if unclear but looks global.
- "FileName": Comprehend the report content and generate a concise, impactful title in Traditional Chinese (繁體中文). Ensure it is NOT URL-encoded.
- "Source": The research institution or bank name (short abbreviation if possible, e.g. MS for Morgan Stanley, GS for Goldman Sachs, CICC).
- "Date": Date of the report in YYMMDD format (e.g., 220625 for June 25, 2022).

Example JSON:
{
    "Application": "ADAS",
    "MarketScope": "WW",
    "FileName": "車載傳感器市場分析",
    "Source": "MS",
    "Date": "220625"
}"#;

/// 封面识别能力
///
/// 任何失败都在本层内消化并记录日志，返回 `None` 由调用方跳过该文件。
/// 本层不做重试，限流等待是流水线的职责。
#[allow(async_fn_in_trait)]
pub trait CoverClassifier {
    /// 识别封面图片，返回结构化元数据
    async fn classify(&self, image: &[u8]) -> Option<ReportMetadata>;
}

/// 基于 LLM Vision API 的封面识别器
pub struct LlmClassifier {
    client: Client<OpenAIConfig>,
    model_name: String,
}

impl LlmClassifier {
    /// 创建新的封面识别器
    ///
    /// API Key、端点与模型均由配置注入，不读取全局状态
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(&config.llm_api_key)
            .with_api_base(&config.llm_api_base_url);

        let client = Client::with_config(openai_config);

        Self {
            client,
            model_name: config.llm_model_name.clone(),
        }
    }

    /// 发送封面图片并解析元数据
    async fn request_metadata(&self, image: &[u8]) -> Result<ReportMetadata, ClassifyError> {
        debug!("调用 LLM API，模型: {}", self.model_name);
        debug!("封面图片大小: {} 字节", image.len());

        // 图片以 data URL 内嵌在消息里，MIME 类型声明为 image/png
        let data_url = format!("data:image/png;base64,{}", BASE64_STANDARD.encode(image));

        let content_parts: Vec<ChatCompletionRequestUserMessageContentPart> = vec![
            ChatCompletionRequestUserMessageContentPart::Text(
                ChatCompletionRequestMessageContentPartText {
                    text: COVER_PROMPT_V1.to_string(),
                },
            ),
            ChatCompletionRequestUserMessageContentPart::ImageUrl(
                ChatCompletionRequestMessageContentPartImage {
                    image_url: ImageUrl {
                        url: data_url,
                        detail: Some(ImageDetail::High),
                    },
                },
            ),
        ];

        let user_msg = ChatCompletionRequestUserMessageArgs::default()
            .content(ChatCompletionRequestUserMessageContent::Array(content_parts))
            .build()?;

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(vec![ChatCompletionRequestMessage::User(user_msg)])
            .temperature(0.1)
            .max_tokens(1024u32)
            .build()?;

        let response = self.client.chat().create(request).await?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or(ClassifyError::EmptyContent)?;

        debug!("LLM API 调用成功");

        let metadata: ReportMetadata = serde_json::from_str(strip_code_fence(&content))?;

        Ok(metadata)
    }
}

impl CoverClassifier for LlmClassifier {
    async fn classify(&self, image: &[u8]) -> Option<ReportMetadata> {
        match self.request_metadata(image).await {
            Ok(metadata) => Some(metadata),
            Err(e) => {
                warn!("封面识别失败: {}", e);
                None
            }
        }
    }
}

/// 剥离回复外层的 Markdown 代码块围栏
///
/// 模型偶尔无视指令把 JSON 包在 ```json ... ``` 里
fn strip_code_fence(text: &str) -> &str {
    let mut text = text.trim();

    if let Some(rest) = text.strip_prefix("```json") {
        text = rest;
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest;
    }

    if let Some(rest) = text.strip_suffix("```") {
        text = rest;
    }

    text.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence_json_block() {
        let wrapped = "```json\n{\"Application\": \"AI\"}\n```";
        assert_eq!(strip_code_fence(wrapped), "{\"Application\": \"AI\"}");
    }

    #[test]
    fn test_strip_code_fence_plain_block() {
        let wrapped = "```\n{\"Application\": \"AI\"}\n```";
        assert_eq!(strip_code_fence(wrapped), "{\"Application\": \"AI\"}");
    }

    #[test]
    fn test_strip_code_fence_no_fence() {
        let raw = "{\"Application\": \"AI\"}";
        assert_eq!(strip_code_fence(raw), raw);
    }

    #[test]
    fn test_strip_code_fence_surrounding_whitespace() {
        let wrapped = "  ```json\n{}\n```  ";
        assert_eq!(strip_code_fence(wrapped), "{}");
    }

    #[test]
    fn test_fenced_reply_parses_to_metadata() {
        let reply = "```json\n{\"Application\": \"DRAM\", \"MarketScope\": \"CN\", \"FileName\": \"存儲市場週報\", \"Source\": \"CICC\", \"Date\": \"230810\"}\n```";

        let metadata: ReportMetadata = serde_json::from_str(strip_code_fence(reply)).unwrap();
        assert_eq!(metadata.application.as_deref(), Some("DRAM"));
        assert_eq!(metadata.market_scope.as_deref(), Some("CN"));
        assert_eq!(metadata.file_name.as_deref(), Some("存儲市場週報"));
        assert_eq!(metadata.source.as_deref(), Some("CICC"));
        assert_eq!(metadata.date.as_deref(), Some("230810"));
    }

    /// 测试真实 API 的封面识别
    ///
    /// 运行方式：
    /// ```bash
    /// cargo test test_classify_live -- --ignored --nocapture
    /// ```
    #[tokio::test]
    #[ignore]
    async fn test_classify_live() {
        let _ = tracing_subscriber::fmt::try_init();

        let config = Config::from_env();
        let classifier = LlmClassifier::new(&config);

        // 1x1 像素的 PNG，仅验证 API 通路
        let png: &[u8] = &[
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48,
            0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x02, 0x00, 0x00,
            0x00, 0x90, 0x77, 0x53, 0xDE, 0x00, 0x00, 0x00, 0x0C, 0x49, 0x44, 0x41, 0x54, 0x08,
            0xD7, 0x63, 0xF8, 0xCF, 0xC0, 0x00, 0x00, 0x00, 0x03, 0x00, 0x01, 0x73, 0x75, 0x01,
            0x18, 0x00, 0x00, 0x00, 0x00, 0x49, 0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
        ];

        let result = classifier.classify(png).await;

        match result {
            Some(metadata) => {
                println!("\n========== 识别结果 ==========");
                println!("{:?}", metadata);
                println!("==============================\n");
                println!("✅ 封面识别调用成功！");
            }
            None => {
                println!("❌ 封面识别失败（检查 LLM_API_KEY 与模型是否支持视觉输入）");
                panic!("封面识别测试失败");
            }
        }
    }
}
