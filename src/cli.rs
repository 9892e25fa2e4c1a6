//! 命令行参数定义

use clap::Parser;

/// 使用 AI 视觉模型识别封面并批量重命名 PDF 报告
#[derive(Parser, Debug)]
#[command(name = "pdf_report_renamer")]
#[command(about = "使用 AI 识别封面并批量重命名 PDF 报告（默认试运行）")]
#[command(version)]
pub struct Cli {
    /// 执行实际的重命名移动操作（默认为试运行，只打印计划）
    #[arg(long)]
    pub execute: bool,
}
