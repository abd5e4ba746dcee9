use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::config::DatabaseConfig;
use crate::errors::Result;

pub mod backend;
pub mod models;

pub use backend::SeaOrmStorage;
pub use models::{Banner, BannerId, ClickStat, StorageConfig};

/// Banner 与点击统计的存储接口
///
/// Click service 只依赖这个 trait，测试里可以换成 mock 实现。
#[async_trait]
pub trait BannerStore: Send + Sync {
    /// 按 ID 查询 banner；不存在时返回 `BannerError::NotFound`
    async fn get_banner(&self, id: BannerId) -> Result<Banner>;

    /// 当前分钟的桶计数 +1（不存在则以 1 插入），单条原子 upsert
    async fn increment_click(&self, banner_id: BannerId) -> Result<()>;

    /// `[from, to]` 两端截断到分钟后的闭区间内所有桶，按时间升序
    ///
    /// 结果是稀疏的：没有点击的分钟不会出现。
    async fn get_stats(
        &self,
        banner_id: BannerId,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<ClickStat>>;

    /// 连通性检查
    async fn ping(&self) -> Result<()>;

    fn backend_config(&self) -> StorageConfig;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create(config: &DatabaseConfig) -> Result<Arc<SeaOrmStorage>> {
        let storage = SeaOrmStorage::new(config).await?;
        Ok(Arc::new(storage))
    }
}
