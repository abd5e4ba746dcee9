//! Click service
//!
//! Business logic shared by the HTTP handlers: validate that a banner
//! exists (cache first, store second) and delegate to the store.

use std::sync::Arc;

use chrono::NaiveDateTime;
use tracing::{debug, trace};

use crate::cache::ExistenceCache;
use crate::errors::Result;
use crate::storage::{BannerId, BannerStore, ClickStat};

pub struct ClickService {
    store: Arc<dyn BannerStore>,
    cache: Arc<dyn ExistenceCache>,
}

impl ClickService {
    pub fn new(store: Arc<dyn BannerStore>, cache: Arc<dyn ExistenceCache>) -> Self {
        Self { store, cache }
    }

    /// 为 banner 记录一次点击
    ///
    /// 缓存命中时不再回源确认 banner 是否存在，最多可能在 TTL 内
    /// 为一个刚被删除的 banner 记上点击。
    pub async fn register_click(&self, banner_id: BannerId) -> Result<()> {
        self.validate_banner(banner_id).await?;
        self.store.increment_click(banner_id).await
    }

    /// 查询 `[from, to]` 内按分钟聚合的点击数（升序、稀疏）
    pub async fn get_stats(
        &self,
        banner_id: BannerId,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<ClickStat>> {
        self.validate_banner(banner_id).await?;
        self.store.get_stats(banner_id, from, to).await
    }

    pub fn cache(&self) -> &Arc<dyn ExistenceCache> {
        &self.cache
    }

    pub fn store(&self) -> &Arc<dyn BannerStore> {
        &self.store
    }

    /// 缓存命中直接通过；未命中则查库，确认存在后写入缓存。
    /// 不存在或查询失败都不缓存。
    async fn validate_banner(&self, banner_id: BannerId) -> Result<()> {
        if self.cache.exists(banner_id) {
            trace!("Existence cache hit for banner {}", banner_id);
            return Ok(());
        }

        debug!("Existence cache miss for banner {}, querying store", banner_id);
        self.store.get_banner(banner_id).await?;
        self.cache.record(banner_id);
        Ok(())
    }
}
