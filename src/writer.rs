//! 批量写入器
//!
//! 每次迭代均匀随机选择一种记录类型，生成、剥离省略字段、
//! 序列化为缩进 JSON，并以单调递增的序号写入独立文件。

use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::Rng;
use tracing::info;

use crate::error::GenError;
use crate::field::DirtyPolicy;
use crate::generators::{RecordGenerator, default_generators};

/// 进度日志间隔（条）
const PROGRESS_INTERVAL: usize = 500;

/// 批量写入器
///
/// 持有输出目录与全部生成器。写入顺序由 1 起始的计数器决定，
/// 与所选记录类型无关。写入失败不重试，错误向上传播终止本次运行。
pub struct BatchWriter {
    output_dir: PathBuf,
    generators: Vec<Box<dyn RecordGenerator>>,
}

impl BatchWriter {
    /// 创建批量写入器
    pub fn new(output_dir: impl AsRef<Path>, policy: DirtyPolicy) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
            generators: default_generators(policy),
        }
    }

    /// 输出目录
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// 生成并写入指定数量的记录
    ///
    /// 写入前确保输出目录存在。文件名为 `data_<N>.json`，
    /// N 从 1 开始在整个运行期间单调递增，无空洞无重复。
    pub async fn run(&self, quantity: usize) -> Result<WriteStats, GenError> {
        let started = Instant::now();

        tokio::fs::create_dir_all(&self.output_dir)
            .await
            .map_err(|source| GenError::CreateDir {
                path: self.output_dir.clone(),
                source,
            })?;

        let mut rng = rand::thread_rng();
        let mut file_counter = 0usize;

        for i in 0..quantity {
            let generator = &self.generators[rng.gen_range(0..self.generators.len())];
            let record = generator.generate();

            // 剥离省略字段后序列化为 2 空格缩进的 JSON
            let json = record.into_json();
            let text = serde_json::to_string_pretty(&json)?;

            file_counter += 1;
            let path = self.output_dir.join(format!("data_{file_counter}.json"));
            tokio::fs::write(&path, text)
                .await
                .map_err(|source| GenError::WriteFile { path, source })?;

            if i % PROGRESS_INTERVAL == 0 {
                info!(generated = i, total = quantity, "生成进度");
            }
        }

        let stats = WriteStats {
            written: file_counter,
            output_dir: self.output_dir.clone(),
            elapsed_ms: started.elapsed().as_millis(),
        };

        info!(
            written = stats.written,
            elapsed_ms = stats.elapsed_ms,
            output_dir = %stats.output_dir.display(),
            "批量生成完成"
        );

        Ok(stats)
    }
}

/// 一次批量运行的结果统计
#[derive(Debug, Clone)]
pub struct WriteStats {
    /// 实际写入的文件数
    pub written: usize,
    /// 输出目录
    pub output_dir: PathBuf,
    /// 运行耗时（毫秒）
    pub elapsed_ms: u128,
}
