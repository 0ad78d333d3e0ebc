//! 命令行接口
//!
//! 使用 clap derive 宏定义参数，并提供命令执行入口。
//!
//! # 使用示例
//!
//! ```bash
//! # 默认生成 10000 个文件到 jsonObjects 目录
//! dirty-json-gen
//!
//! # 自定义数量与输出目录
//! dirty-json-gen --count 100 --output-dir ./out
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::field::DirtyPolicy;
use crate::writer::BatchWriter;

/// 脏 JSON 测试数据生成工具
///
/// 生成五种类型的半结构化 JSON 记录，字段按固定概率
/// 被替换为 null 或完全省略，每条记录写入独立文件。
#[derive(Parser, Debug)]
#[command(name = "dirty-json-gen")]
#[command(version, about = "生成轻度脏 JSON 测试数据")]
pub struct Cli {
    /// 日志级别 (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// 生成的记录数量
    #[arg(short, long, default_value_t = 10_000)]
    pub count: usize,

    /// 输出目录，不存在时自动创建
    #[arg(short, long, default_value = "jsonObjects")]
    pub output_dir: PathBuf,
}

/// 执行生成任务
///
/// 写入失败时错误带上下文向上传播，进程以非零码退出。
pub async fn run(cli: &Cli) -> Result<()> {
    info!(
        count = cli.count,
        output_dir = %cli.output_dir.display(),
        "开始批量生成"
    );

    let writer = BatchWriter::new(&cli.output_dir, DirtyPolicy::default());
    let stats = writer.run(cli.count).await.context("批量生成失败")?;

    info!(written = stats.written, "全部文件已写入");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["dirty-json-gen"]);

        assert_eq!(cli.count, 10_000);
        assert_eq!(cli.output_dir, PathBuf::from("jsonObjects"));
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_cli_custom_args() {
        let cli = Cli::parse_from([
            "dirty-json-gen",
            "--count",
            "100",
            "--output-dir",
            "/tmp/out",
            "--log-level",
            "debug",
        ]);

        assert_eq!(cli.count, 100);
        assert_eq!(cli.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(cli.log_level, "debug");
    }

    #[test]
    fn test_cli_short_args() {
        let cli = Cli::parse_from(["dirty-json-gen", "-c", "10", "-o", "out"]);

        assert_eq!(cli.count, 10);
        assert_eq!(cli.output_dir, PathBuf::from("out"));
    }
}
