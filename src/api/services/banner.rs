//! Banner click and stats handlers
//!
//! - `GET  /counter/{bannerID}`: register a click
//! - `POST /stats/{bannerID}`: per-minute click counts between `from` and `to`
//!
//! Input problems are answered with 400 before the service is called.
//! Every service failure (banner missing, database error, timeout) is logged
//! with the banner ID and answered with 404.

use std::sync::Arc;
use std::time::Duration;

use actix_web::error::InternalError;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use chrono::NaiveDateTime;
use tokio::time::timeout;
use tracing::{debug, error, trace, warn};

use super::types::{StatsRequest, StatsResponse};
use crate::config::ApiConfig;
use crate::errors::{BannerError, Result};
use crate::services::ClickService;
use crate::storage::BannerId;
use crate::utils::{parse_banner_id, parse_stats_timestamp};

/// 统计请求体上限，超出按格式错误处理（400）
pub const STATS_BODY_LIMIT: usize = 64 * 1024;

/// 单个请求的服务端处理时限，与客户端连接无关
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestTimeouts {
    pub click: Duration,
    pub stats: Duration,
}

impl Default for RequestTimeouts {
    fn default() -> Self {
        Self::from_config(&ApiConfig::default())
    }
}

impl RequestTimeouts {
    pub fn from_config(config: &ApiConfig) -> Self {
        Self {
            click: Duration::from_millis(config.click_timeout_ms),
            stats: Duration::from_millis(config.stats_timeout_ms),
        }
    }
}

pub struct BannerService;

impl BannerService {
    pub async fn register_click(
        path: web::Path<String>,
        service: web::Data<Arc<ClickService>>,
        timeouts: web::Data<RequestTimeouts>,
    ) -> impl Responder {
        let raw_id = path.into_inner();
        let Some(banner_id) = parse_banner_id(&raw_id) else {
            trace!("Invalid banner ID rejected: {:?}", raw_id);
            return HttpResponse::BadRequest().finish();
        };

        let result = Self::with_deadline(
            "register_click",
            timeouts.click,
            service.register_click(banner_id),
        )
        .await;

        match result {
            Ok(()) => HttpResponse::Ok().finish(),
            Err(e) => Self::failure_response(banner_id, &e),
        }
    }

    pub async fn get_stats(
        path: web::Path<String>,
        body: web::Bytes,
        service: web::Data<Arc<ClickService>>,
        timeouts: web::Data<RequestTimeouts>,
    ) -> impl Responder {
        let raw_id = path.into_inner();
        let Some(banner_id) = parse_banner_id(&raw_id) else {
            trace!("Invalid banner ID rejected: {:?}", raw_id);
            return HttpResponse::BadRequest().finish();
        };

        let (from, to) = match Self::parse_stats_request(&body) {
            Ok(range) => range,
            Err(e) => {
                debug!("Invalid stats request for banner {}: {}", banner_id, e);
                return HttpResponse::BadRequest().finish();
            }
        };

        let result = Self::with_deadline(
            "get_stats",
            timeouts.stats,
            service.get_stats(banner_id, from, to),
        )
        .await;

        match result {
            Ok(stats) => HttpResponse::Ok().json(StatsResponse::from(stats)),
            Err(e) => Self::failure_response(banner_id, &e),
        }
    }

    /// 解析并校验统计请求体，返回 `(from, to)`
    ///
    /// 两个字段都必须存在且非空，严格匹配固定格式，并且 `to > from`。
    pub fn parse_stats_request(body: &[u8]) -> Result<(NaiveDateTime, NaiveDateTime)> {
        let request: StatsRequest = serde_json::from_slice(body)
            .map_err(|e| BannerError::validation(format!("malformed request body: {}", e)))?;

        let from = Self::required_field(request.from, "from")?;
        let to = Self::required_field(request.to, "to")?;

        let from = parse_stats_timestamp(&from)?;
        let to = parse_stats_timestamp(&to)?;

        if to <= from {
            return Err(BannerError::validation(format!(
                "`to` ({}) must be after `from` ({})",
                to, from
            )));
        }

        Ok((from, to))
    }

    fn required_field(value: Option<String>, name: &str) -> Result<String> {
        value
            .filter(|v| !v.is_empty())
            .ok_or_else(|| BannerError::validation(format!("`{}` is required", name)))
    }

    /// 超时后直接丢弃 future，进行中的查询随之取消
    async fn with_deadline<T>(
        operation: &str,
        deadline: Duration,
        fut: impl std::future::Future<Output = Result<T>>,
    ) -> Result<T> {
        match timeout(deadline, fut).await {
            Ok(result) => result,
            Err(_) => Err(BannerError::timeout(format!(
                "{} exceeded {} ms",
                operation,
                deadline.as_millis()
            ))),
        }
    }

    // not found 和内部错误在线上都返回 404，只能靠日志区分
    fn failure_response(banner_id: BannerId, err: &BannerError) -> HttpResponse {
        if err.is_not_found() {
            warn!(banner_id, "Banner not found: {}", err);
        } else {
            error!(banner_id, code = err.code(), "Banner request failed: {}", err);
        }
        HttpResponse::NotFound().finish()
    }

    /// 请求体读取失败（超长、截断等）统一返回 400，而不是默认的 413
    fn stats_payload_config() -> web::PayloadConfig {
        web::PayloadConfig::new(STATS_BODY_LIMIT).error_handler(
            |err, _req: &HttpRequest| {
                debug!("Stats request body rejected: {}", err);
                InternalError::from_response(err, HttpResponse::BadRequest().finish()).into()
            },
        )
    }

    async fn route_not_found() -> HttpResponse {
        HttpResponse::NotFound().finish()
    }
}

/// Banner 路由配置
///
/// 路径参数吃掉剩余整段路径，这样 `/counter/` 和 `/counter/1/2` 也会进入
/// handler 并得到 400；同一路径上的其他方法返回 404。
pub fn banner_routes() -> actix_web::Scope {
    web::scope("")
        .service(
            web::resource("/counter/{banner_id:.*}")
                .route(web::get().to(BannerService::register_click))
                .default_service(web::route().to(BannerService::route_not_found)),
        )
        .service(
            web::resource("/stats/{banner_id:.*}")
                .app_data(BannerService::stats_payload_config())
                .route(web::post().to(BannerService::get_stats))
                .default_service(web::route().to(BannerService::route_not_found)),
        )
        .default_service(web::route().to(BannerService::route_not_found))
}
