//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use chrono::NaiveDateTime;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::{debug, trace};

use super::SeaOrmStorage;
use super::converters::{model_to_banner, model_to_click_stat};
use crate::errors::{BannerError, Result};
use crate::storage::{Banner, BannerId, ClickStat};
use crate::utils::truncate_to_minute;

use migration::entities::{banner, click_stat};

impl SeaOrmStorage {
    pub(super) async fn find_banner(&self, id: BannerId) -> Result<Banner> {
        let model = banner::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                BannerError::database_operation(format!("failed to get banner {}: {}", id, e))
            })?;

        match model {
            Some(model) => {
                trace!("Banner {} found", id);
                Ok(model_to_banner(model))
            }
            None => Err(BannerError::not_found(format!("banner {} not found", id))),
        }
    }

    pub(super) async fn load_stats(
        &self,
        banner_id: BannerId,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Result<Vec<ClickStat>> {
        let from_minute = truncate_to_minute(from);
        let to_minute = truncate_to_minute(to);

        let models = click_stat::Entity::find()
            .filter(click_stat::Column::BannerId.eq(banner_id))
            .filter(click_stat::Column::Timestamp.gte(from_minute))
            .filter(click_stat::Column::Timestamp.lte(to_minute))
            .order_by_asc(click_stat::Column::Timestamp)
            .all(&self.db)
            .await
            .map_err(|e| {
                BannerError::database_operation(format!(
                    "failed to get stats for banner {}: {}",
                    banner_id, e
                ))
            })?;

        debug!(
            "Loaded {} stat buckets for banner {} ({} .. {})",
            models.len(),
            banner_id,
            from_minute,
            to_minute
        );

        Ok(models.into_iter().map(model_to_click_stat).collect())
    }
}
