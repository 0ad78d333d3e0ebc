//! 错误类型定义
//!
//! 使用 thiserror 定义库层错误。生成本身不会失败，
//! 唯一的失败来源是输出目录与文件的 I/O 操作。

use std::path::PathBuf;

use thiserror::Error;

/// 生成器错误类型
#[derive(Debug, Error)]
pub enum GenError {
    #[error("创建输出目录失败: {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("写入文件失败: {path}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON 序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
}
