//! 地点记录生成器

use fake::Fake;
use fake::faker::address::en::{CityName, CountryName, StreetName};
use fake::faker::phone_number::en::PhoneNumber;
use rand::Rng;
use serde_json::{Value, json};
use uuid::Uuid;

use super::RecordGenerator;
use crate::field::{DirtyPolicy, FieldValue};
use crate::record::{Record, RecordKind, nested_object};

/// 地点记录生成器
///
/// `phones` 列表第二个元素以 50% 概率为 null，
/// 该随机独立于整个 `phones` 字段自身的脏化策略。
pub struct LocationGenerator {
    policy: DirtyPolicy,
}

impl LocationGenerator {
    pub fn new(policy: DirtyPolicy) -> Self {
        Self { policy }
    }
}

impl Default for LocationGenerator {
    fn default() -> Self {
        Self::new(DirtyPolicy::default())
    }
}

impl RecordGenerator for LocationGenerator {
    fn generate(&self) -> Record {
        let mut rng = rand::thread_rng();
        let mut record = Record::new(RecordKind::Location);

        record.insert("id", FieldValue::Value(json!(Uuid::new_v4().to_string())));
        record.insert(
            "name",
            self.policy
                .apply(json!(CityName().fake::<String>()), &mut rng),
        );

        // 经纬度保留六位小数
        let latitude = (rng.gen_range(-90.0..90.0_f64) * 1e6).round() / 1e6;
        let longitude = (rng.gen_range(-180.0..180.0_f64) * 1e6).round() / 1e6;
        record.insert("latitude", self.policy.apply(json!(latitude), &mut rng));
        record.insert("longitude", self.policy.apply(json!(longitude), &mut rng));

        let address = nested_object(vec![
            (
                "street",
                self.policy
                    .apply(json!(StreetName().fake::<String>()), &mut rng),
            ),
            (
                "country",
                self.policy
                    .apply(json!(CountryName().fake::<String>()), &mut rng),
            ),
        ]);
        record.insert("address", self.policy.apply(address, &mut rng));

        // 第一个号码必然非 null，第二个 50% 概率为 null
        let second = if rng.gen_bool(0.5) {
            json!(PhoneNumber().fake::<String>())
        } else {
            Value::Null
        };
        let phones = json!([PhoneNumber().fake::<String>(), second]);
        record.insert("phones", self.policy.apply(phones, &mut rng));

        record
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Location
    }
}
