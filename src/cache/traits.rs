use crate::storage::BannerId;

/// Banner 存在性缓存
///
/// 只缓存"确认存在"的结果，不做负缓存：
/// - `exists` 返回 `true` 表示该 banner 在 TTL 内被确认过存在
/// - `exists` 返回 `false` 只表示需要回源查询，**不代表**不存在
///
/// 方法是同步的，实现中持锁期间不允许 await。
pub trait ExistenceCache: Send + Sync {
    /// 条目存在且未超过 TTL
    fn exists(&self, banner_id: BannerId) -> bool;

    /// 记录一次成功的存在性确认
    fn record(&self, banner_id: BannerId);

    /// 当前保存的条目数（可能包含尚未清理的过期条目）
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 实现名称，用于日志和健康检查
    fn cache_type(&self) -> &'static str;
}
