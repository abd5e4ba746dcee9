//! Shared test doubles

#![allow(dead_code)]

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDateTime;
use parking_lot::Mutex;

use banner_counter::errors::{BannerError, Result};
use banner_counter::storage::{Banner, BannerId, BannerStore, ClickStat, StorageConfig};
use banner_counter::utils::truncate_to_minute;

/// In-memory `BannerStore` that counts how often each operation is called.
#[derive(Default)]
pub struct MockStore {
    banners: Mutex<HashSet<BannerId>>,
    buckets: Mutex<BTreeMap<(BannerId, NaiveDateTime), i64>>,
    pub lookups: AtomicUsize,
    pub increments: AtomicUsize,
    pub stats_queries: AtomicUsize,
    /// 所有操作都返回数据库错误
    pub fail: AtomicBool,
    /// 每次操作前的人为延迟
    delay: Mutex<Option<Duration>>,
}

impl MockStore {
    pub fn with_banners(ids: &[BannerId]) -> Arc<Self> {
        let store = Self::default();
        store.banners.lock().extend(ids.iter().copied());
        Arc::new(store)
    }

    pub fn add_banner(&self, id: BannerId) {
        self.banners.lock().insert(id);
    }

    pub fn remove_banner(&self, id: BannerId) {
        self.banners.lock().remove(&id);
    }

    pub fn set_bucket(&self, id: BannerId, at: NaiveDateTime, count: i64) {
        self.buckets.lock().insert((id, at), count);
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock() = Some(delay);
    }

    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn increments(&self) -> usize {
        self.increments.load(Ordering::SeqCst)
    }

    pub fn stats_queries(&self) -> usize {
        self.stats_queries.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.lookups() + self.increments() + self.stats_queries()
    }

    async fn before_call(&self) -> Result<()> {
        let delay = *self.delay.lock();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail.load(Ordering::SeqCst) {
            return Err(BannerError::database_connection("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl BannerStore for MockStore {
    async fn get_banner(&self, id: BannerId) -> Result<Banner> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.before_call().await?;
        if self.banners.lock().contains(&id) {
            Ok(Banner {
                id,
                name: format!("banner-{}", id),
            })
        } else {
            Err(BannerError::not_found(format!("banner {} not found", id)))
        }
    }

    async fn increment_click(&self, banner_id: BannerId) -> Result<()> {
        self.increments.fetch_add(1, Ordering::SeqCst);
        self.before_call().await?;
        let at = truncate_to_minute(banner_counter::utils::local_now());
        *self.buckets.lock().entry((banner_id, at)).or_insert(0) += 1;
        Ok(())
    }

    async fn get_stats(
        &self,
        banner_id: BannerId,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<ClickStat>> {
        self.stats_queries.fetch_add(1, Ordering::SeqCst);
        self.before_call().await?;
        let (from, to) = (truncate_to_minute(from), truncate_to_minute(to));
        Ok(self
            .buckets
            .lock()
            .range((banner_id, from)..=(banner_id, to))
            .map(|(&(banner_id, timestamp), &count)| ClickStat {
                banner_id,
                timestamp,
                count,
            })
            .collect())
    }

    async fn ping(&self) -> Result<()> {
        self.before_call().await
    }

    fn backend_config(&self) -> StorageConfig {
        StorageConfig {
            storage_type: "mock".to_string(),
        }
    }
}
