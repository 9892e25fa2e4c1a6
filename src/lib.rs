//! # PDF Report Renamer
//!
//! 使用视觉大模型识别 PDF 报告封面并批量重命名、归档的工具
//!
//! ## 架构设计
//!
//! ### ① 业务能力层（Services）
//! - `services/cover_extractor` - 封面提取能力（PDF 第一页 → PNG 字节）
//! - `services/classifier` - 封面识别能力（PNG → 结构化元数据）
//! - `services/naming` - 文件名合成（纯函数）
//! - `services/collision` - 重名解决（数字后缀探测）
//!
//! ### ② 流程层（Processor）
//! - `processor` - 单个文件的完整处理流程与目录扫描
//!
//! ### ③ 编排层（App）
//! - `app` - 目录准备、顺序循环、限流等待与最终统计
//!
//! 失败语义：每个能力层把自身的失败消化为 `None`，
//! 流水线把它记为单文件失败后继续处理下一个，整个批次不会中断。

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod processor;
pub mod services;

// 重新导出常用类型
pub use app::{run_pipeline, App, RunStats};
pub use config::Config;
pub use models::ReportMetadata;
pub use processor::FileOutcome;
pub use services::classifier::{CoverClassifier, LlmClassifier};
pub use services::cover_extractor::{CoverExtractor, PdfCoverExtractor};
