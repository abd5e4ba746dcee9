use tracing::trace;

use crate::cache::ExistenceCache;
use crate::storage::BannerId;

/// 关闭缓存：每次校验都回源数据库
#[derive(Debug, Default, Clone, Copy)]
pub struct NullExistenceCache;

impl ExistenceCache for NullExistenceCache {
    fn exists(&self, _banner_id: BannerId) -> bool {
        trace!("NullExistenceCache: always miss");
        false
    }

    fn record(&self, _banner_id: BannerId) {
        trace!("NullExistenceCache: skip record");
    }

    fn len(&self) -> usize {
        0
    }

    fn cache_type(&self) -> &'static str {
        "null"
    }
}
