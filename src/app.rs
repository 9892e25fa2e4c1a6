//! 应用编排层
//!
//! 负责目录准备、文件扫描、顺序处理、限流等待与最终统计

use std::fs;

use anyhow::{Context, Result};
use tokio::time::{sleep, Duration};
use tracing::{info, warn};

use crate::config::Config;
use crate::processor::{self, FileOutcome};
use crate::services::classifier::{CoverClassifier, LlmClassifier};
use crate::services::cover_extractor::{CoverExtractor, PdfCoverExtractor};

/// 应用主结构
pub struct App {
    config: Config,
    extractor: PdfCoverExtractor,
    classifier: LlmClassifier,
}

/// 处理统计
#[derive(Debug, Default)]
pub struct RunStats {
    pub moved: usize,
    pub planned: usize,
    pub failed: usize,
    pub total: usize,
}

impl App {
    /// 初始化应用
    ///
    /// 创建输入输出目录，构造封面提取器与识别器
    pub fn initialize(config: Config) -> Result<Self> {
        log_startup(&config);

        fs::create_dir_all(&config.input_dir)
            .with_context(|| format!("无法创建输入目录: {}", config.input_dir.display()))?;
        fs::create_dir_all(&config.output_dir)
            .with_context(|| format!("无法创建输出目录: {}", config.output_dir.display()))?;

        let classifier = LlmClassifier::new(&config);

        Ok(Self {
            config,
            extractor: PdfCoverExtractor::new(),
            classifier,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunStats> {
        let stats = run_pipeline(&self.extractor, &self.classifier, &self.config).await?;

        print_final_stats(&stats, self.config.dry_run);

        Ok(stats)
    }
}

/// 顺序处理输入目录下的全部 PDF
///
/// 单线程逐个处理：前一个文件完整走完流程后才开始下一个。
/// 提取器与识别器通过泛型注入，流水线本身可用确定性桩实现测试。
pub async fn run_pipeline<E, C>(extractor: &E, classifier: &C, config: &Config) -> Result<RunStats>
where
    E: CoverExtractor,
    C: CoverClassifier,
{
    info!("📁 正在扫描目录: {}", config.input_dir.display());
    let pdf_files = processor::scan_pdf_files(&config.input_dir)?;

    if pdf_files.is_empty() {
        warn!("⚠️ 未找到 PDF 文件，程序结束");
        return Ok(RunStats::default());
    }

    info!("✓ 找到 {} 个 PDF 文件\n", pdf_files.len());

    let mut stats = RunStats {
        total: pdf_files.len(),
        ..Default::default()
    };

    for (idx, pdf_path) in pdf_files.iter().enumerate() {
        let outcome = processor::process_file(
            extractor,
            classifier,
            pdf_path,
            &config.output_dir,
            config.dry_run,
            idx + 1,
        )
        .await;

        match outcome {
            FileOutcome::Moved(_) => stats.moved += 1,
            FileOutcome::Planned(_) => stats.planned += 1,
            FileOutcome::Failed(_) => stats.failed += 1,
        }

        // 每个文件处理完后固定等待，尊重外部服务的限流
        sleep(Duration::from_secs(config.pacing_delay_secs)).await;
    }

    Ok(stats)
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - PDF 报告自动重命名");
    info!("运行模式: {}", if config.dry_run { "试运行" } else { "执行" });
    info!("输入目录: {}", config.input_dir.display());
    info!("输出目录: {}", config.output_dir.display());
    info!("{}", "=".repeat(60));
}

fn print_final_stats(stats: &RunStats, dry_run: bool) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    if dry_run {
        info!("📝 试运行计划: {}/{}", stats.planned, stats.total);
    } else {
        info!("✅ 已移动: {}/{}", stats.moved, stats.total);
    }
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
}
