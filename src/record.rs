//! 记录容器
//!
//! 定义五种记录类型的判别器，以及承载三态字段的有序记录容器。
//! 记录生成后不再修改，只经过一次省略剥离转为 JSON 输出。

use rand::Rng;
use serde_json::{Map, Value, json};

use crate::field::FieldValue;

/// 记录类型判别器
///
/// 对应输出 JSON 中固定的 `type` 字段取值。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Person,
    Product,
    Location,
    Transaction,
    Event,
}

impl RecordKind {
    /// 全部记录类型，按固定顺序排列
    pub const ALL: [RecordKind; 5] = [
        Self::Person,
        Self::Product,
        Self::Location,
        Self::Transaction,
        Self::Event,
    ];

    /// 判别器字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "person",
            Self::Product => "product",
            Self::Location => "location",
            Self::Transaction => "transaction",
            Self::Event => "event",
        }
    }

    /// 均匀随机选择一种记录类型
    pub fn choose(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }

    /// 从判别器字符串解析
    pub fn from_discriminator(s: &str) -> Option<Self> {
        match s {
            "person" => Some(Self::Person),
            "product" => Some(Self::Product),
            "location" => Some(Self::Location),
            "transaction" => Some(Self::Transaction),
            "event" => Some(Self::Event),
            _ => None,
        }
    }
}

/// 一条生成的记录
///
/// 字段按插入顺序保存，每个字段携带三态值。
/// `type` 判别器在构造时写入，保证始终存在且非 null。
#[derive(Debug, Clone)]
pub struct Record {
    kind: RecordKind,
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    /// 创建指定类型的空记录，自动写入判别器字段
    pub fn new(kind: RecordKind) -> Self {
        Self {
            kind,
            fields: vec![(
                "type".to_string(),
                FieldValue::Value(json!(kind.as_str())),
            )],
        }
    }

    /// 记录类型
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// 追加一个字段
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.push((name.into(), value));
    }

    /// 按名称查找字段
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// 全部字段（含三态，未剥离）
    pub fn fields(&self) -> &[(String, FieldValue)] {
        &self.fields
    }

    /// 剥离省略字段并转为 JSON 对象
    ///
    /// `Absent` 字段的键被丢弃，`Null` 字段渲染为 JSON null，
    /// 其余字段原值保留，字段顺序与插入顺序一致。
    pub fn into_json(self) -> Value {
        let mut map = Map::new();
        for (name, value) in self.fields {
            if let Some(v) = value.into_json() {
                map.insert(name, v);
            }
        }
        Value::Object(map)
    }
}

/// 构造嵌套对象
///
/// 子字段已各自独立应用过脏化策略，这里剥离其中的省略项，
/// 返回可作为外层字段值的 JSON 对象。
pub fn nested_object(fields: Vec<(&str, FieldValue)>) -> Value {
    let mut map = Map::new();
    for (name, value) in fields {
        if let Some(v) = value.into_json() {
            map.insert(name.to_string(), v);
        }
    }
    Value::Object(map)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_as_str() {
        assert_eq!(RecordKind::Person.as_str(), "person");
        assert_eq!(RecordKind::Product.as_str(), "product");
        assert_eq!(RecordKind::Location.as_str(), "location");
        assert_eq!(RecordKind::Transaction.as_str(), "transaction");
        assert_eq!(RecordKind::Event.as_str(), "event");
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in RecordKind::ALL {
            assert_eq!(RecordKind::from_discriminator(kind.as_str()), Some(kind));
        }
        assert_eq!(RecordKind::from_discriminator("unknown"), None);
    }

    #[test]
    fn test_kind_choose_covers_all() {
        let mut rng = rand::thread_rng();
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(RecordKind::choose(&mut rng));
        }
        assert_eq!(seen.len(), 5);
    }

    #[test]
    fn test_record_discriminator_always_present() {
        let record = Record::new(RecordKind::Product);
        assert_eq!(
            record.get("type"),
            Some(&FieldValue::Value(json!("product")))
        );

        let json = record.into_json();
        assert_eq!(json["type"], json!("product"));
    }

    #[test]
    fn test_into_json_strips_absent_keeps_null() {
        let mut record = Record::new(RecordKind::Person);
        record.insert("name", FieldValue::Value(json!("Alice")));
        record.insert("email", FieldValue::Null);
        record.insert("phone", FieldValue::Absent);

        let json = record.into_json();
        let obj = json.as_object().unwrap();

        assert_eq!(obj["name"], json!("Alice"));
        assert_eq!(obj["email"], Value::Null);
        assert!(!obj.contains_key("phone"));
    }

    #[test]
    fn test_into_json_preserves_insertion_order() {
        let mut record = Record::new(RecordKind::Person);
        record.insert("id", FieldValue::Value(json!("1")));
        record.insert("name", FieldValue::Value(json!("Bob")));
        record.insert("age", FieldValue::Value(json!(33)));

        let json = record.into_json();
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["type", "id", "name", "age"]);
    }

    #[test]
    fn test_nested_object_strips_absent() {
        let nested = nested_object(vec![
            ("street", FieldValue::Value(json!("Main St"))),
            ("city", FieldValue::Null),
            ("zip", FieldValue::Absent),
        ]);
        let obj = nested.as_object().unwrap();

        assert_eq!(obj.len(), 2);
        assert_eq!(obj["street"], json!("Main St"));
        assert_eq!(obj["city"], Value::Null);
    }
}
