//! 事件记录生成器

use fake::Fake;
use fake::faker::address::en::CityName;
use fake::faker::internet::en::{DomainSuffix, IPv4};
use fake::faker::lorem::en::{Word, Words};
use fake::faker::name::en::Name;
use rand::Rng;
use serde_json::json;

use super::{RecordGenerator, past_timestamp};
use crate::field::DirtyPolicy;
use crate::record::{Record, RecordKind, nested_object};

/// 事件记录生成器
///
/// 事件是唯一没有标识字段的记录类型，只有判别器保证存在。
/// `metadata` 为嵌套结构，子字段独立应用脏化策略。
pub struct EventGenerator {
    policy: DirtyPolicy,
}

impl EventGenerator {
    pub fn new(policy: DirtyPolicy) -> Self {
        Self { policy }
    }

    /// 生成形如 `word.suffix` 的域名
    fn domain_name() -> String {
        format!(
            "{}.{}",
            Word().fake::<String>().to_lowercase(),
            DomainSuffix().fake::<String>()
        )
    }
}

impl Default for EventGenerator {
    fn default() -> Self {
        Self::new(DirtyPolicy::default())
    }
}

impl RecordGenerator for EventGenerator {
    fn generate(&self) -> Record {
        let mut rng = rand::thread_rng();
        let mut record = Record::new(RecordKind::Event);

        // 名称为 1-3 个单词组成的短语
        let name = Words(1..4).fake::<Vec<String>>().join(" ");
        record.insert("name", self.policy.apply(json!(name), &mut rng));

        // 时间戳在过去一年内
        record.insert(
            "timestamp",
            self.policy
                .apply(json!(past_timestamp(&mut rng, 365 * 86_400)), &mut rng),
        );

        let participants = json!([Name().fake::<String>(), Name().fake::<String>()]);
        record.insert("participants", self.policy.apply(participants, &mut rng));

        record.insert(
            "location",
            self.policy
                .apply(json!(CityName().fake::<String>()), &mut rng),
        );

        let metadata = nested_object(vec![
            ("source", self.policy.apply(json!(Self::domain_name()), &mut rng)),
            ("ip", self.policy.apply(json!(IPv4().fake::<String>()), &mut rng)),
        ]);
        record.insert("metadata", self.policy.apply(metadata, &mut rng));

        record
    }

    fn kind(&self) -> RecordKind {
        RecordKind::Event
    }
}
