//! 核心流水线模块
//!
//! 负责单个 PDF 文件的 提取 → 识别 → 命名 → 移动 流程，
//! 以及输入目录的扫描

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::services::classifier::CoverClassifier;
use crate::services::collision::resolve_collision;
use crate::services::cover_extractor::CoverExtractor;
use crate::services::naming::synthesize_name;

/// 单个文件的处理结果
#[derive(Debug)]
pub enum FileOutcome {
    /// 已移动到目标路径
    Moved(PathBuf),
    /// 试运行：仅计算出目标路径，未触碰文件系统
    Planned(PathBuf),
    /// 处理失败，原文件保持原位
    Failed(String),
}

/// 处理单个 PDF 文件
///
/// 每一步失败都只影响当前文件，绝不中断整个批次；
/// 移动之前的任何失败都不会在目标目录留下半成品
///
/// # 参数
/// - `extractor`: 封面提取器
/// - `classifier`: 封面识别器
/// - `pdf_path`: 待处理文件路径
/// - `output_dir`: 目标目录
/// - `dry_run`: 是否为试运行
/// - `file_index`: 文件序号（用于日志）
pub async fn process_file<E, C>(
    extractor: &E,
    classifier: &C,
    pdf_path: &Path,
    output_dir: &Path,
    dry_run: bool,
    file_index: usize,
) -> FileOutcome
where
    E: CoverExtractor,
    C: CoverClassifier,
{
    log_file_start(file_index, pdf_path);

    // 1. 提取封面
    let Some(image) = extractor.extract(pdf_path) else {
        warn!("[文件 {}] ⚠️ 封面提取失败，跳过此文件", file_index);
        return FileOutcome::Failed("封面提取失败".to_string());
    };

    // 2. 识别元数据
    let Some(metadata) = classifier.classify(&image).await else {
        warn!("[文件 {}] ⚠️ 封面识别失败，跳过此文件", file_index);
        return FileOutcome::Failed("封面识别失败".to_string());
    };

    // 3. 合成新文件名
    let original_ext = pdf_path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();
    let new_name = synthesize_name(&metadata, &original_ext);

    // 4. 解决重名
    let dest_path = resolve_collision(&output_dir.join(&new_name));

    // 5. 移动或打印
    if dry_run {
        info!(
            "[文件 {}] [试运行] 重命名并移动: '{}' -> '{}'",
            file_index,
            pdf_path.display(),
            dest_path.display()
        );
        return FileOutcome::Planned(dest_path);
    }

    // rename 保证内容逐位不变，跨设备等系统级失败按单文件失败处理
    match fs::rename(pdf_path, &dest_path) {
        Ok(()) => {
            info!("[文件 {}] ✅ 已移动到: {}", file_index, dest_path.display());
            FileOutcome::Moved(dest_path)
        }
        Err(e) => {
            warn!("[文件 {}] ❌ 移动失败: {}", file_index, e);
            FileOutcome::Failed(format!("移动失败: {}", e))
        }
    }
}

/// 扫描输入目录下的 PDF 文件
///
/// 只枚举直接子项，不递归子目录；按文件名排序保证运行结果可复现
pub fn scan_pdf_files(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(input_dir)
        .with_context(|| format!("无法读取目录: {}", input_dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.is_file() && has_pdf_extension(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

fn has_pdf_extension(path: &Path) -> bool {
    path.extension()
        .map(|e| e.to_string_lossy().eq_ignore_ascii_case("pdf"))
        .unwrap_or(false)
}

// ========== 日志辅助函数 ==========

fn log_file_start(file_index: usize, path: &Path) {
    info!("[文件 {}] {}", file_index, "─".repeat(40));
    info!(
        "[文件 {}] 正在处理: {}",
        file_index,
        path.file_name().unwrap_or_default().to_string_lossy()
    );
}
