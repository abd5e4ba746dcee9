use crate::cache::ExistenceCacheFactory;
use crate::config::StaticConfig;
use crate::services::ClickService;
use crate::storage::{BannerStore, SeaOrmStorage, StorageFactory};
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub click_service: Arc<ClickService>,
}

/// 准备服务器启动的上下文
/// 包括存储连接、迁移和存在性缓存
pub async fn prepare_server_startup(config: &StaticConfig) -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to create storage backend")?;
    info!(
        "Using storage backend: {}",
        storage.backend_config().storage_type
    );

    let cache = ExistenceCacheFactory::create(&config.cache);
    info!(
        "Existence cache initialized: {} (ttl {}s)",
        cache.cache_type(),
        config.cache.ttl_secs
    );

    let store: Arc<dyn BannerStore> = storage.clone();
    let click_service = Arc::new(ClickService::new(store, cache));

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        storage,
        click_service,
    })
}
