use anyhow::Result;
use clap::Parser;
use tracing::error;

use pdf_report_renamer::app::App;
use pdf_report_renamer::cli::Cli;
use pdf_report_renamer::config::Config;
use pdf_report_renamer::logger;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载 .env 文件（不存在时忽略）
    dotenvy::dotenv().ok();

    // 解析命令行参数
    let cli = Cli::parse();

    // 加载配置
    let mut config = Config::from_env();
    config.dry_run = !cli.execute;

    // API Key 是启动前置条件，缺失时在处理任何文件之前退出
    if config.llm_api_key.is_empty() {
        error!("错误: 未在环境变量或 .env 文件中找到 LLM_API_KEY");
        std::process::exit(1);
    }

    // 初始化并运行应用
    App::initialize(config)?.run().await?;

    Ok(())
}
