use std::time::Duration;

use moka::sync::Cache;
use tracing::trace;

use crate::cache::ExistenceCache;
use crate::storage::BannerId;

/// moka 实现：带容量上限的 TinyLFU 缓存，过期由 moka 自己处理
pub struct MokaExistenceCache {
    inner: Cache<BannerId, ()>,
}

impl MokaExistenceCache {
    pub fn new(max_capacity: u64, ttl: Duration) -> Self {
        let inner = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(ttl)
            .build();

        trace!(
            "MokaExistenceCache initialized: max_capacity={}, ttl={:?}",
            max_capacity, ttl
        );

        Self { inner }
    }
}

impl ExistenceCache for MokaExistenceCache {
    fn exists(&self, banner_id: BannerId) -> bool {
        self.inner.get(&banner_id).is_some()
    }

    fn record(&self, banner_id: BannerId) {
        self.inner.insert(banner_id, ());
    }

    fn len(&self) -> usize {
        self.inner.run_pending_tasks();
        self.inner.entry_count() as usize
    }

    fn cache_type(&self) -> &'static str {
        "moka"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_exists() {
        let cache = MokaExistenceCache::new(1000, Duration::from_secs(60));

        assert!(!cache.exists(1));
        cache.record(1);
        assert!(cache.exists(1));
        assert!(!cache.exists(2));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_ttl_expiry() {
        let cache = MokaExistenceCache::new(1000, Duration::from_millis(50));

        cache.record(5);
        assert!(cache.exists(5));

        std::thread::sleep(Duration::from_millis(120));

        assert!(!cache.exists(5));
    }
}
