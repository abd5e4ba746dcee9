//! Migrate mode
//!
//! Connects to the configured database, applies pending migrations and exits.

use anyhow::{Context, Result};
use tracing::info;

use crate::config::StaticConfig;
use crate::storage::StorageFactory;

pub async fn run_migrate(config: &StaticConfig) -> Result<()> {
    // 建立连接时会自动执行迁移
    let storage = StorageFactory::create(&config.database)
        .await
        .context("Failed to apply migrations")?;

    info!("Migrations applied on {}", storage.backend_name());
    storage
        .close()
        .await
        .context("Failed to close database connection")?;
    Ok(())
}
