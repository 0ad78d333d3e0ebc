//! 人员记录生成器

use fake::Fake;
use fake::faker::address::en::{CityName, StreetName, ZipCode};
use fake::faker::company::en::{BsAdj, BsNoun, BsVerb};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;
use serde_json::json;

use super::RecordGenerator;
use crate::field::{DirtyPolicy, FieldValue};
use crate::record::{Record, RecordKind, nested_object};

/// 人员记录生成器
///
/// 标识字段 `id` 为纯数字字符串，始终存在。
/// 其余字段独立应用脏化策略，`address` 为嵌套结构，
/// 其子字段在嵌套对象构造时再次独立应用策略。
pub struct PersonGenerator {
    policy: DirtyPolicy,
}

impl PersonGenerator {
    pub fn new(policy: DirtyPolicy) -> Self {
        Self { policy }
    }
}

impl Default for PersonGenerator {
    fn default() -> Self {
        Self::new(DirtyPolicy::default())
    }
}

impl RecordGenerator for PersonGenerator {
    fn generate(&self) -> Record {
        let mut rng = rand::thread_rng();
        let mut record = Record::new(RecordKind::Person);

        record.insert(
            "id",
            FieldValue::Value(json!(rng.gen_range(0u64..10_000_000_000).to_string())),
        );
        record.insert(
            "name",
            self.policy.apply(json!(Name().fake::<String>()), &mut rng),
        );
        record.insert(
            "email",
            self.policy
                .apply(json!(SafeEmail().fake::<String>()), &mut rng),
        );
        record.insert(
            "phone",
            self.policy
                .apply(json!(PhoneNumber().fake::<String>()), &mut rng),
        );
        record.insert(
            "age",
            self.policy.apply(json!(rng.gen_range(18..=90)), &mut rng),
        );

        // 标签固定三元素：形容词、名词、动词
        let tags = json!([
            BsAdj().fake::<String>(),
            BsNoun().fake::<String>(),
            BsVerb().fake::<String>(),
        ]);
        record.insert("tags", self.policy.apply(tags, &mut rng));

        let address = nested_object(vec![
            (
                "street",
                self.policy
                    .apply(json!(StreetName().fake::<String>()), &mut rng),
            ),
            (
                "city",
                self.policy
                    .apply(json!(CityName().fake::<String>()), &mut rng),
            ),
            (
                "zip",
                self.policy
                    .apply(json!(ZipCode().fake::<String>()), &mut rng),
            ),
        ]);
        record.insert("address", self.policy.apply(address, &mut rng));

        record
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Person
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_discriminator_and_id() {
        let generator = PersonGenerator::default();

        for _ in 0..50 {
            let record = generator.generate();
            assert_eq!(record.kind(), RecordKind::Person);

            let json = record.into_json();
            assert_eq!(json["type"], json!("person"));

            // 标识字段始终存在，为纯数字字符串
            let id = json["id"].as_str().unwrap();
            assert!(!id.is_empty());
            assert!(id.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_person_age_in_range() {
        // 策略关闭时所有字段必然存在
        let generator = PersonGenerator::new(DirtyPolicy::new(0.0, 0.0));

        for _ in 0..50 {
            let json = generator.generate().into_json();
            let age = json["age"].as_i64().unwrap();
            assert!((18..=90).contains(&age));
        }
    }

    #[test]
    fn test_person_full_shape_when_clean() {
        let generator = PersonGenerator::new(DirtyPolicy::new(0.0, 0.0));
        let json = generator.generate().into_json();

        for key in ["type", "id", "name", "email", "phone", "age", "tags", "address"] {
            assert!(json.get(key).is_some(), "缺少字段: {key}");
        }

        assert_eq!(json["tags"].as_array().unwrap().len(), 3);

        let address = json["address"].as_object().unwrap();
        for key in ["street", "city", "zip"] {
            assert!(address.contains_key(key), "缺少地址子字段: {key}");
        }
    }
}
