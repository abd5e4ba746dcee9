//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations.

use chrono::NaiveDateTime;
use sea_orm::{ActiveValue::Set, EntityTrait, ExprTrait, sea_query::Expr, sea_query::OnConflict};
use tracing::trace;

use super::SeaOrmStorage;
use crate::errors::{BannerError, Result};
use crate::storage::BannerId;
use crate::utils::truncate_to_minute;

use migration::entities::click_stat;

impl SeaOrmStorage {
    /// 在 `at` 所在分钟的桶上计数 +1
    ///
    /// 单条 `INSERT ... ON CONFLICT (banner_id, timestamp) DO UPDATE SET count = count + 1`，
    /// 同一分钟内的并发点击完全依赖数据库的原子 upsert，不加应用层锁。
    pub async fn increment_click_at(&self, banner_id: BannerId, at: NaiveDateTime) -> Result<()> {
        let minute = truncate_to_minute(at);

        let model = click_stat::ActiveModel {
            banner_id: Set(banner_id),
            timestamp: Set(minute),
            count: Set(1),
        };

        // 用表名限定列，PostgreSQL / SQLite / MySQL 三种语法下都指向已有行
        let on_conflict = OnConflict::columns([
            click_stat::Column::BannerId,
            click_stat::Column::Timestamp,
        ])
        .value(
            click_stat::Column::Count,
            Expr::col((click_stat::Entity, click_stat::Column::Count)).add(1),
        )
        .to_owned();

        click_stat::Entity::insert(model)
            .on_conflict(on_conflict)
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                BannerError::database_operation(format!(
                    "failed to increment click for banner {}: {}",
                    banner_id, e
                ))
            })?;

        trace!("Click recorded for banner {} at {}", banner_id, minute);
        Ok(())
    }
}
