//! 封面提取服务 - 业务能力层
//!
//! 使用 Pdfium 将 PDF 第一页渲染为 PNG，供视觉模型识别
//!
//! 注意：pdfium-render 需要本机安装 pdfium 动态库，
//! 优先从当前目录加载，失败后回退到系统库路径

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;
use pdfium_render::prelude::{PdfRenderConfig, Pdfium, PdfiumError};
use tracing::warn;

use crate::error::ExtractError;

/// 渲染放大倍数，2 倍线性缩放保证封面文字清晰可读
const RENDER_SCALE: f32 = 2.0;

/// 封面提取能力
///
/// 任何失败都在本层内消化并记录日志，返回 `None` 由调用方跳过该文件
pub trait CoverExtractor {
    /// 提取文档封面，返回 PNG 编码的图片字节
    fn extract(&self, path: &Path) -> Option<Vec<u8>>;
}

/// 基于 Pdfium 的 PDF 封面提取器
pub struct PdfCoverExtractor;

impl PdfCoverExtractor {
    pub fn new() -> Self {
        Self
    }

    /// 渲染第一页并编码为 PNG
    ///
    /// 文档句柄在函数返回时随作用域释放，无论成功还是失败
    fn render_cover(&self, path: &Path) -> Result<Vec<u8>, ExtractError> {
        let pdfium = load_pdfium().map_err(ExtractError::Library)?;

        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(ExtractError::Document)?;

        if document.pages().len() == 0 {
            return Err(ExtractError::EmptyDocument);
        }

        let page = document.pages().get(0).map_err(ExtractError::Document)?;

        let width = (page.width().value * RENDER_SCALE) as i32;
        let height = (page.height().value * RENDER_SCALE) as i32;
        let render_config = PdfRenderConfig::new()
            .set_target_width(width)
            .set_target_height(height);

        let bitmap = page
            .render_with_config(&render_config)
            .map_err(ExtractError::Render)?;

        // PNG 为无损编码，保证封面上的小号文字不被压缩糊掉
        let mut buffer = Vec::new();
        bitmap
            .as_image()
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)?;

        Ok(buffer)
    }
}

impl CoverExtractor for PdfCoverExtractor {
    fn extract(&self, path: &Path) -> Option<Vec<u8>> {
        match self.render_cover(path) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!("封面提取失败 ({}): {}", path.display(), e);
                None
            }
        }
    }
}

impl Default for PdfCoverExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// 加载 Pdfium 动态库：优先当前目录，失败后回退系统库
fn load_pdfium() -> Result<Pdfium, PdfiumError> {
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_missing_file_returns_none() {
        // 无论是库缺失还是文件不存在，都应软失败为 None
        let extractor = PdfCoverExtractor::new();
        assert!(extractor.extract(Path::new("不存在的文件.pdf")).is_none());
    }
}
