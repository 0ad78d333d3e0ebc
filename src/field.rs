//! 字段三态与脏化策略
//!
//! 定义可选内容字段的三种状态（缺失、显式 null、有值），
//! 以及在构造记录时按固定概率注入缺失的策略。

use rand::Rng;
use serde_json::Value;

/// 可选内容字段的三态结果
///
/// 与语言原生的 `Option` 不同，这里区分"键不存在"和"键存在但值为 null"：
/// - `Absent`: 键完全不出现在输出中
/// - `Null`: 键出现，值为 JSON null，表示"已知缺失"
/// - `Value`: 键出现，携带生成的值
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Absent,
    Null,
    Value(Value),
}

impl FieldValue {
    /// 是否为完全缺失
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// 是否为显式 null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// 转换为输出用的 JSON 值
    ///
    /// `Absent` 返回 None（调用方应丢弃该键），
    /// `Null` 返回 JSON null，`Value` 返回原值。
    pub fn into_json(self) -> Option<Value> {
        match self {
            Self::Absent => None,
            Self::Null => Some(Value::Null),
            Self::Value(v) => Some(v),
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// 脏化策略
///
/// 对每个可选内容字段独立应用：按 `null_rate` 概率替换为显式 null，
/// 按 `omit_rate` 概率完全省略，其余情况保留原值。
/// 嵌套结构的子字段在构造嵌套对象时各自独立应用同一规则。
#[derive(Debug, Clone, Copy)]
pub struct DirtyPolicy {
    /// 显式 null 概率
    pub null_rate: f64,
    /// 完全省略概率
    pub omit_rate: f64,
}

impl Default for DirtyPolicy {
    /// 默认策略：10% null，10% 省略，80% 保留
    fn default() -> Self {
        Self {
            null_rate: 0.1,
            omit_rate: 0.1,
        }
    }
}

impl DirtyPolicy {
    /// 创建自定义比例的策略
    pub fn new(null_rate: f64, omit_rate: f64) -> Self {
        Self {
            null_rate,
            omit_rate,
        }
    }

    /// 对单个字段值应用策略
    ///
    /// 抽取 [0,1) 均匀随机数：落在 [0, null_rate) 返回 `Null`，
    /// 落在 [null_rate, null_rate + omit_rate) 返回 `Absent`，
    /// 否则原值保留。
    pub fn apply(&self, value: Value, rng: &mut impl Rng) -> FieldValue {
        let r: f64 = rng.gen_range(0.0..1.0);
        if r < self.null_rate {
            FieldValue::Null
        } else if r < self.null_rate + self.omit_rate {
            FieldValue::Absent
        } else {
            FieldValue::Value(value)
        }
    }
}
