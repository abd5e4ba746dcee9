//! Banner existence caching
//!
//! The click service consults an [`ExistenceCache`] before asking the store
//! whether a banner exists. The cache is purely a latency optimisation; the
//! service stays correct with [`NullExistenceCache`].

pub mod existence;
pub mod traits;

use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::config::CacheConfig;

pub use existence::{MokaExistenceCache, NullExistenceCache, TtlExistenceCache};
pub use traits::ExistenceCache;

pub struct ExistenceCacheFactory;

impl ExistenceCacheFactory {
    pub fn create(config: &CacheConfig) -> Arc<dyn ExistenceCache> {
        let ttl = Duration::from_secs(config.ttl_secs);

        match config.cache_type.as_str() {
            "memory" => Arc::new(TtlExistenceCache::new(ttl, config.sweep_threshold)),
            "moka" => Arc::new(MokaExistenceCache::new(config.max_capacity, ttl)),
            "null" => Arc::new(NullExistenceCache),
            other => {
                warn!(
                    "Unknown existence cache type '{}', falling back to 'memory'",
                    other
                );
                Arc::new(TtlExistenceCache::new(ttl, config.sweep_threshold))
            }
        }
    }
}
