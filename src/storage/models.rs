use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

pub type BannerId = i64;

/// Banner，由外部系统维护，本服务只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub id: BannerId,
    pub name: String,
}

/// 单个分钟桶的点击数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickStat {
    pub banner_id: BannerId,
    /// 截断到分钟的本地时间
    pub timestamp: NaiveDateTime,
    pub count: i64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct StorageConfig {
    pub storage_type: String,
}
