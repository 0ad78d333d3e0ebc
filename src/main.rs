//! Dirty JSON Gen CLI
//!
//! 脏 JSON 测试数据生成工具的命令行入口点。

use clap::Parser;
use dirty_json_gen::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 初始化 tracing 日志
    // 优先使用环境变量 RUST_LOG，否则使用命令行参数指定的级别
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.clone().into()),
        )
        .init();

    cli::run(&cli).await
}
