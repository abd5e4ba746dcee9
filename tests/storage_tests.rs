//! Storage tests
//!
//! Minute-bucket upserts and ranged reads against a temporary SQLite database.

use std::sync::Arc;

use chrono::{Duration, NaiveDate, NaiveDateTime};
use sea_orm::{ActiveModelTrait, Set};
use tempfile::TempDir;

use banner_counter::config::DatabaseConfig;
use banner_counter::errors::BannerError;
use banner_counter::storage::{BannerStore, SeaOrmStorage};
use migration::entities::banner;

// =============================================================================
// Test Setup
// =============================================================================

struct TestDb {
    storage: Arc<SeaOrmStorage>,
    // 保持临时目录存活
    _dir: TempDir,
}

async fn setup() -> TestDb {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = dir.path().join("storage_test.db");
    let config = DatabaseConfig {
        database_url: format!("sqlite://{}?mode=rwc", db_path.display()),
        max_connections: 5,
        min_connections: 1,
        ..DatabaseConfig::default()
    };

    let storage = SeaOrmStorage::new(&config)
        .await
        .expect("Failed to create storage");

    TestDb {
        storage: Arc::new(storage),
        _dir: dir,
    }
}

async fn seed_banner(storage: &SeaOrmStorage, id: i64) {
    banner::ActiveModel {
        id: Set(id),
        name: Set(format!("banner-{}", id)),
    }
    .insert(storage.get_db())
    .await
    .expect("Failed to seed banner");
}

fn minute(h: u32, m: u32, s: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(h, m, s)
        .unwrap()
}

fn counts(stats: &[banner_counter::storage::ClickStat]) -> Vec<(NaiveDateTime, i64)> {
    stats.iter().map(|s| (s.timestamp, s.count)).collect()
}

// =============================================================================
// Banner lookup
// =============================================================================

#[tokio::test]
async fn test_get_banner_found() {
    let db = setup().await;
    seed_banner(&db.storage, 7).await;

    let banner = db.storage.get_banner(7).await.unwrap();
    assert_eq!(banner.id, 7);
    assert_eq!(banner.name, "banner-7");
}

#[tokio::test]
async fn test_get_banner_missing_is_not_found() {
    let db = setup().await;

    let err = db.storage.get_banner(404).await.unwrap_err();
    assert!(matches!(err, BannerError::NotFound(_)));
}

// =============================================================================
// Increment
// =============================================================================

#[tokio::test]
async fn test_two_clicks_same_minute_share_bucket() {
    let db = setup().await;
    seed_banner(&db.storage, 1).await;

    db.storage.increment_click_at(1, minute(10, 0, 5)).await.unwrap();
    db.storage.increment_click_at(1, minute(10, 0, 55)).await.unwrap();

    let stats = db
        .storage
        .get_stats(1, minute(10, 0, 0), minute(10, 1, 0))
        .await
        .unwrap();
    assert_eq!(counts(&stats), vec![(minute(10, 0, 0), 2)]);
}

#[tokio::test]
async fn test_increment_uses_current_minute() {
    let db = setup().await;
    seed_banner(&db.storage, 1).await;

    let before = banner_counter::utils::local_now();
    db.storage.increment_click(1).await.unwrap();
    let after = banner_counter::utils::local_now();

    let stats = db
        .storage
        .get_stats(1, before - Duration::minutes(1), after + Duration::minutes(1))
        .await
        .unwrap();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].count, 1);
    assert_eq!(stats[0].timestamp.format("%S").to_string(), "00");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_increments_are_not_lost() {
    let db = setup().await;
    seed_banner(&db.storage, 3).await;

    let at = minute(12, 30, 0);
    let tasks: Vec<_> = (0..20)
        .map(|_| {
            let storage = db.storage.clone();
            tokio::spawn(async move { storage.increment_click_at(3, at).await })
        })
        .collect();

    for task in tasks {
        task.await.unwrap().unwrap();
    }

    let stats = db.storage.get_stats(3, at, at + Duration::minutes(1)).await.unwrap();
    assert_eq!(counts(&stats), vec![(at, 20)]);
}

#[tokio::test]
async fn test_buckets_are_per_banner() {
    let db = setup().await;
    seed_banner(&db.storage, 1).await;
    seed_banner(&db.storage, 2).await;

    let at = minute(9, 0, 0);
    db.storage.increment_click_at(1, at).await.unwrap();
    db.storage.increment_click_at(2, at).await.unwrap();
    db.storage.increment_click_at(2, at).await.unwrap();

    let one = db.storage.get_stats(1, at, at + Duration::minutes(1)).await.unwrap();
    let two = db.storage.get_stats(2, at, at + Duration::minutes(1)).await.unwrap();
    assert_eq!(counts(&one), vec![(at, 1)]);
    assert_eq!(counts(&two), vec![(at, 2)]);
}

// =============================================================================
// Ranged reads
// =============================================================================

#[tokio::test]
async fn test_stats_are_sparse_and_ordered() {
    let db = setup().await;
    seed_banner(&db.storage, 5).await;

    // 故意乱序写入
    for _ in 0..5 {
        db.storage.increment_click_at(5, minute(8, 3, 10)).await.unwrap();
    }
    db.storage.increment_click_at(5, minute(8, 1, 30)).await.unwrap();
    db.storage.increment_click_at(5, minute(8, 0, 0)).await.unwrap();
    db.storage.increment_click_at(5, minute(8, 0, 59)).await.unwrap();

    let stats = db
        .storage
        .get_stats(5, minute(8, 0, 0), minute(8, 10, 0))
        .await
        .unwrap();
    assert_eq!(
        counts(&stats),
        vec![
            (minute(8, 0, 0), 2),
            (minute(8, 1, 0), 1),
            (minute(8, 3, 0), 5),
        ]
    );
}

#[tokio::test]
async fn test_stats_bounds_are_truncated_and_inclusive() {
    let db = setup().await;
    seed_banner(&db.storage, 6).await;

    db.storage.increment_click_at(6, minute(14, 0, 0)).await.unwrap();
    db.storage.increment_click_at(6, minute(14, 1, 0)).await.unwrap();
    db.storage.increment_click_at(6, minute(14, 2, 0)).await.unwrap();
    db.storage.increment_click_at(6, minute(14, 3, 0)).await.unwrap();

    // 14:01:45 -> 14:01, 14:02:30 -> 14:02
    let stats = db
        .storage
        .get_stats(6, minute(14, 1, 45), minute(14, 2, 30))
        .await
        .unwrap();
    assert_eq!(
        counts(&stats),
        vec![(minute(14, 1, 0), 1), (minute(14, 2, 0), 1)]
    );
}

#[tokio::test]
async fn test_stats_empty_range() {
    let db = setup().await;
    seed_banner(&db.storage, 8).await;
    db.storage.increment_click_at(8, minute(1, 0, 0)).await.unwrap();

    let stats = db
        .storage
        .get_stats(8, minute(2, 0, 0), minute(3, 0, 0))
        .await
        .unwrap();
    assert!(stats.is_empty());
}

#[tokio::test]
async fn test_ping_and_backend_config() {
    let db = setup().await;

    db.storage.ping().await.unwrap();
    assert_eq!(db.storage.backend_config().storage_type, "sqlite");
}
