//! Dirty JSON Gen
//!
//! 生成轻度"脏"的半结构化 JSON 测试数据。
//! 五种记录类型（person、product、location、transaction、event），
//! 每个可选字段按固定概率被替换为显式 null 或完全省略，
//! 每条记录序列化为独立的 JSON 文件。
//!
//! # 主要模块
//!
//! - `field`: 字段三态值与脏化策略
//! - `record`: 记录类型判别器与有序记录容器
//! - `generators`: 五种记录类型的生成器
//! - `writer`: 批量生成与文件写入循环
//!
//! # 使用示例
//!
//! ```rust,no_run
//! use dirty_json_gen::field::DirtyPolicy;
//! use dirty_json_gen::writer::BatchWriter;
//!
//! # async fn demo() -> Result<(), dirty_json_gen::error::GenError> {
//! let writer = BatchWriter::new("jsonObjects", DirtyPolicy::default());
//! let stats = writer.run(100).await?;
//! assert_eq!(stats.written, 100);
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod error;
pub mod field;
pub mod generators;
pub mod record;
pub mod writer;
