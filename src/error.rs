//! 错误类型定义
//!
//! 组件内部使用具体错误类型，在各自的能力边界处被消化并转为 `None`

use pdfium_render::prelude::PdfiumError;
use thiserror::Error;

/// 封面提取过程中的错误
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Pdfium 动态库加载失败
    #[error("Pdfium 库加载失败: {0}")]
    Library(#[source] PdfiumError),
    /// PDF 文档打开或读取失败
    #[error("PDF 文档打开失败: {0}")]
    Document(#[source] PdfiumError),
    /// 文档没有任何页面
    #[error("PDF 文档没有页面")]
    EmptyDocument,
    /// 封面页渲染失败
    #[error("封面页渲染失败: {0}")]
    Render(#[source] PdfiumError),
    /// 渲染结果编码为 PNG 失败
    #[error("封面图片编码失败: {0}")]
    Encode(#[from] image::ImageError),
}

/// 封面识别过程中的错误
#[derive(Debug, Error)]
pub enum ClassifyError {
    /// LLM API 调用失败（网络、鉴权、限流等）
    #[error("LLM API 调用失败: {0}")]
    Api(#[from] async_openai::error::OpenAIError),
    /// 模型返回了空内容
    #[error("LLM 返回内容为空")]
    EmptyContent,
    /// 模型回复无法解析为元数据 JSON
    #[error("元数据 JSON 解析失败: {0}")]
    Parse(#[from] serde_json::Error),
}
