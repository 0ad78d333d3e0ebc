//! 交易记录生成器

use fake::Fake;
use fake::faker::currency::en::CurrencyCode;
use fake::faker::lorem::en::Sentence;
use rand::Rng;
use serde_json::json;
use uuid::Uuid;

use super::{RecordGenerator, currency_amount, past_timestamp};
use crate::field::{DirtyPolicy, FieldValue};
use crate::record::{Record, RecordKind};

/// 交易状态取值，均匀随机选取
const STATUSES: [&str; 3] = ["completed", "pending", "failed"];

/// 交易记录生成器
///
/// 标识字段 `transactionId` 为 UUID 字符串，始终存在。
/// `date` 为最近 24 小时内的 ISO-8601 时间戳。
pub struct TransactionGenerator {
    policy: DirtyPolicy,
}

impl TransactionGenerator {
    pub fn new(policy: DirtyPolicy) -> Self {
        Self { policy }
    }
}

impl Default for TransactionGenerator {
    fn default() -> Self {
        Self::new(DirtyPolicy::default())
    }
}

impl RecordGenerator for TransactionGenerator {
    fn generate(&self) -> Record {
        let mut rng = rand::thread_rng();
        let mut record = Record::new(RecordKind::Transaction);

        record.insert(
            "transactionId",
            FieldValue::Value(json!(Uuid::new_v4().to_string())),
        );
        record.insert(
            "amount",
            self.policy
                .apply(json!(currency_amount(&mut rng, 1.0, 1000.0)), &mut rng),
        );
        record.insert(
            "currency",
            self.policy
                .apply(json!(CurrencyCode().fake::<String>()), &mut rng),
        );
        record.insert(
            "date",
            self.policy
                .apply(json!(past_timestamp(&mut rng, 86_400)), &mut rng),
        );
        record.insert(
            "description",
            self.policy
                .apply(json!(Sentence(3..8).fake::<String>()), &mut rng),
        );

        let status = STATUSES[rng.gen_range(0..STATUSES.len())];
        record.insert("status", self.policy.apply(json!(status), &mut rng));

        record
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Transaction
    }
}
