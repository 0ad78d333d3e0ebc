//! 商品记录生成器

use fake::Fake;
use fake::faker::company::en::{BsAdj, BsNoun, CatchPhrase, Industry};
use rand::Rng;
use serde_json::json;
use uuid::Uuid;

use super::{RecordGenerator, currency_amount};
use crate::field::{DirtyPolicy, FieldValue};
use crate::record::{Record, RecordKind};

/// 商品记录生成器
///
/// 标识字段 `sku` 为 UUID 字符串，始终存在。
/// `price` 由两位小数的货币字符串解析而来。
pub struct ProductGenerator {
    policy: DirtyPolicy,
}

impl ProductGenerator {
    pub fn new(policy: DirtyPolicy) -> Self {
        Self { policy }
    }
}

impl Default for ProductGenerator {
    fn default() -> Self {
        Self::new(DirtyPolicy::default())
    }
}

impl RecordGenerator for ProductGenerator {
    fn generate(&self) -> Record {
        let mut rng = rand::thread_rng();
        let mut record = Record::new(RecordKind::Product);

        record.insert("sku", FieldValue::Value(json!(Uuid::new_v4().to_string())));
        record.insert(
            "name",
            self.policy
                .apply(json!(CatchPhrase().fake::<String>()), &mut rng),
        );
        record.insert(
            "category",
            self.policy
                .apply(json!(Industry().fake::<String>()), &mut rng),
        );
        record.insert(
            "price",
            self.policy
                .apply(json!(currency_amount(&mut rng, 1.0, 1000.0)), &mut rng),
        );
        record.insert(
            "available",
            self.policy.apply(json!(rng.gen_bool(0.5)), &mut rng),
        );

        // 标签固定两元素：形容词、名词
        let tags = json!([BsAdj().fake::<String>(), BsNoun().fake::<String>()]);
        record.insert("tags", self.policy.apply(tags, &mut rng));

        record
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Product
    }
}
