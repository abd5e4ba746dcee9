use actix_web::{HttpResponse, Responder, web};
use serde_json::json;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, info, trace};

use crate::services::ClickService;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Local>,
}

impl AppStartTime {
    pub fn now() -> Self {
        Self {
            start_datetime: chrono::Local::now(),
        }
    }
}

/// Health Service
///
/// 直接检查存储连通性和缓存状态，不经过 banner 业务逻辑。
pub struct HealthService;

impl HealthService {
    pub async fn health_check(
        service: web::Data<Arc<ClickService>>,
        app_start_time: web::Data<AppStartTime>,
    ) -> impl Responder {
        let start_time = Instant::now();
        trace!("Received health check request");

        let store = service.store();
        let backend = store.backend_config();

        // 检查存储健康状况
        let storage_status = match tokio::time::timeout(Duration::from_secs(5), store.ping()).await
        {
            Ok(Ok(())) => json!({
                "status": "healthy",
                "backend": backend.storage_type,
            }),
            Ok(Err(e)) => {
                error!("Storage health check failed: {}", e);
                json!({
                    "status": "unhealthy",
                    "backend": backend.storage_type,
                    "error": format!("database error: {}", e),
                })
            }
            Err(_) => {
                error!("Storage health check timeout");
                json!({
                    "status": "unhealthy",
                    "backend": backend.storage_type,
                    "error": "timeout",
                })
            }
        };

        let cache = service.cache();
        let cache_status = json!({
            "status": "healthy",
            "cache_type": cache.cache_type(),
            "entries": cache.len(),
        });

        let now = chrono::Local::now();
        let uptime_seconds = (now - app_start_time.start_datetime).num_seconds().max(0) as u64;
        let is_healthy = storage_status["status"] == "healthy";

        let health_response = json!({
            "status": if is_healthy { "healthy" } else { "unhealthy" },
            "timestamp": now.to_rfc3339(),
            "uptime": uptime_seconds,
            "checks": {
                "storage": storage_status,
                "cache": cache_status,
            },
            "response_time_ms": start_time.elapsed().as_millis() as u64,
        });

        info!(
            "Health check completed in {:?}, status: {}, uptime: {}s",
            start_time.elapsed(),
            if is_healthy { "healthy" } else { "unhealthy" },
            uptime_seconds
        );

        if is_healthy {
            HttpResponse::Ok().json(health_response)
        } else {
            HttpResponse::ServiceUnavailable().json(health_response)
        }
    }

    // 就绪检查：数据库可达才返回 200
    pub async fn readiness_check(service: web::Data<Arc<ClickService>>) -> impl Responder {
        trace!("Received readiness check request");

        match tokio::time::timeout(Duration::from_secs(2), service.store().ping()).await {
            Ok(Ok(())) => HttpResponse::Ok()
                .append_header(("Content-Type", "text/plain"))
                .body("OK"),
            _ => HttpResponse::ServiceUnavailable()
                .append_header(("Content-Type", "text/plain"))
                .body("Unavailable"),
        }
    }

    // 活跃性检查
    pub async fn liveness_check() -> impl Responder {
        trace!("Received liveness check request");

        HttpResponse::NoContent().finish()
    }
}

/// Health 路由配置
pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(HealthService::health_check))
        .route("", web::head().to(HealthService::health_check))
        .route("/ready", web::get().to(HealthService::readiness_check))
        .route("/live", web::get().to(HealthService::liveness_check))
}
