//! RwLock + HashMap 实现的存在性缓存
//!
//! 读路径只检查 TTL，不删除过期条目；写入后条目数超过阈值时
//! 在写锁内同步扫描一次，清掉所有超过 TTL 的条目。

use std::collections::HashMap;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tracing::{debug, trace};

use crate::cache::ExistenceCache;
use crate::storage::BannerId;

pub const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);
pub const DEFAULT_SWEEP_THRESHOLD: usize = 1000;

pub struct TtlExistenceCache {
    entries: RwLock<HashMap<BannerId, Instant>>,
    ttl: Duration,
    sweep_threshold: usize,
}

impl Default for TtlExistenceCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_SWEEP_THRESHOLD)
    }
}

impl TtlExistenceCache {
    pub fn new(ttl: Duration, sweep_threshold: usize) -> Self {
        trace!(
            "TtlExistenceCache initialized: ttl={:?}, sweep_threshold={}",
            ttl, sweep_threshold
        );
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
            sweep_threshold,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    fn sweep(&self, entries: &mut HashMap<BannerId, Instant>, now: Instant) {
        let before = entries.len();
        entries.retain(|_, verified_at| now.saturating_duration_since(*verified_at) <= self.ttl);
        debug!(
            "Existence cache sweep: {} -> {} entries",
            before,
            entries.len()
        );
    }
}

impl ExistenceCache for TtlExistenceCache {
    fn exists(&self, banner_id: BannerId) -> bool {
        let entries = self.entries.read();
        entries
            .get(&banner_id)
            .is_some_and(|verified_at| verified_at.elapsed() < self.ttl)
    }

    fn record(&self, banner_id: BannerId) {
        let now = Instant::now();
        let mut entries = self.entries.write();
        entries.insert(banner_id, now);

        if entries.len() > self.sweep_threshold {
            self.sweep(&mut entries, now);
        }
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn cache_type(&self) -> &'static str {
        "memory"
    }
}
