//! 记录生成器
//!
//! 每种记录类型一个生成器，统一实现 [`RecordGenerator`] trait。
//! 生成器只负责产出带三态字段的记录，不做任何 I/O。

mod event;
mod location;
mod person;
mod product;
mod transaction;

pub use event::EventGenerator;
pub use location::LocationGenerator;
pub use person::PersonGenerator;
pub use product::ProductGenerator;
pub use transaction::TransactionGenerator;

use chrono::{Duration, SecondsFormat, Utc};
use rand::Rng;

use crate::field::DirtyPolicy;
use crate::record::{Record, RecordKind};

/// 记录生成器 trait
///
/// 设计为同步接口，生成是纯计算操作，不涉及 I/O。
/// 每次调用只消耗伪随机源，不会失败。
pub trait RecordGenerator: Send + Sync {
    /// 生成一条记录
    fn generate(&self) -> Record;

    /// 该生成器产出的记录类型
    fn kind(&self) -> RecordKind;
}

/// 按固定顺序构建全部五种生成器
///
/// 批量写入器从返回的切片中均匀随机选取，顺序与 [`RecordKind::ALL`] 一致。
pub fn default_generators(policy: DirtyPolicy) -> Vec<Box<dyn RecordGenerator>> {
    vec![
        Box::new(PersonGenerator::new(policy)),
        Box::new(ProductGenerator::new(policy)),
        Box::new(LocationGenerator::new(policy)),
        Box::new(TransactionGenerator::new(policy)),
        Box::new(EventGenerator::new(policy)),
    ]
}

/// 生成两位小数的金额
///
/// 先格式化为货币字符串再解析回数值，与货币字符串来源保持一致。
pub(crate) fn currency_amount(rng: &mut impl Rng, min: f64, max: f64) -> f64 {
    format!("{:.2}", rng.gen_range(min..max))
        .parse()
        .unwrap_or(min)
}

/// 生成过去某一时刻的 ISO-8601 时间戳
///
/// 时刻在当前时间之前的 `max_seconds_ago` 秒内均匀随机，毫秒精度。
pub(crate) fn past_timestamp(rng: &mut impl Rng, max_seconds_ago: i64) -> String {
    let seconds_ago = rng.gen_range(0..max_seconds_ago);
    (Utc::now() - Duration::seconds(seconds_ago)).to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_generators_order() {
        let generators = default_generators(DirtyPolicy::default());

        assert_eq!(generators.len(), 5);
        let kinds: Vec<RecordKind> = generators.iter().map(|g| g.kind()).collect();
        assert_eq!(kinds, RecordKind::ALL);
    }

    #[test]
    fn test_currency_amount_two_decimals() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let amount = currency_amount(&mut rng, 1.0, 1000.0);
            // 两位小数：放大 100 倍后为整数
            let scaled = amount * 100.0;
            assert!((scaled - scaled.round()).abs() < 1e-6, "非两位小数: {amount}");
            assert!((1.0..1000.0).contains(&amount));
        }
    }

    #[test]
    fn test_past_timestamp_parseable() {
        let mut rng = rand::thread_rng();
        let ts = past_timestamp(&mut rng, 86_400);

        let parsed = chrono::DateTime::parse_from_rfc3339(&ts).unwrap();
        assert!(parsed.timestamp() <= Utc::now().timestamp());
    }
}
