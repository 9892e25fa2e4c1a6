//! 程序配置

use std::path::PathBuf;

/// 程序配置文件
#[derive(Clone, Debug)]
pub struct Config {
    /// 待整理 PDF 所在目录
    pub input_dir: PathBuf,
    /// 整理后 PDF 存放目录
    pub output_dir: PathBuf,
    /// 是否为试运行（只计算并打印，不移动文件）
    pub dry_run: bool,
    /// 每个文件处理完后的等待秒数，避免触发 API 限流
    pub pacing_delay_secs: u64,
    // --- LLM 配置 ---
    pub llm_api_key: String,
    pub llm_api_base_url: String,
    pub llm_model_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("未整理"),
            output_dir: PathBuf::from("已整理"),
            dry_run: true,
            pacing_delay_secs: 1,
            llm_api_key: String::new(),
            llm_api_base_url: "https://generativelanguage.googleapis.com/v1beta/openai"
                .to_string(),
            llm_model_name: "gemini-2.0-flash".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            input_dir: std::env::var("INPUT_DIR").map(PathBuf::from).unwrap_or(default.input_dir),
            output_dir: std::env::var("OUTPUT_DIR").map(PathBuf::from).unwrap_or(default.output_dir),
            dry_run: default.dry_run,
            pacing_delay_secs: std::env::var("PACING_DELAY_SECS").ok().and_then(|v| v.parse().ok()).unwrap_or(default.pacing_delay_secs),
            // 兼容旧部署：优先 LLM_API_KEY，其次 GEMINI_API_KEY
            llm_api_key: std::env::var("LLM_API_KEY").or_else(|_| std::env::var("GEMINI_API_KEY")).unwrap_or(default.llm_api_key),
            llm_api_base_url: std::env::var("LLM_API_BASE_URL").unwrap_or(default.llm_api_base_url),
            llm_model_name: std::env::var("LLM_MODEL_NAME").unwrap_or(default.llm_model_name),
        }
    }
}
