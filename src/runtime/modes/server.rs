//! Server mode
//!
//! This module contains the HTTP server startup logic.
//! It configures and starts the HTTP server with all necessary routes.

use actix_web::{
    App, HttpServer,
    middleware::DefaultHeaders,
    web,
};
use anyhow::{Context, Result};
use std::time::Duration;
use tracing::{error, info, warn};

use crate::api::middleware::{RequestIdMiddleware, TimingMiddleware};
use crate::api::services::{AppStartTime, RequestTimeouts, banner_routes, health_routes};
use crate::config::StaticConfig;
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// This function:
/// 1. Records startup time
/// 2. Connects storage, runs migrations and builds the click service
/// 3. Configures and starts the HTTP server
/// 4. On SIGINT/SIGTERM drains in-flight requests and closes the pool
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server(config: &StaticConfig) -> Result<()> {
    let app_start_time = AppStartTime::now();

    let startup = lifetime::startup::prepare_server_startup(config)
        .await
        .inspect_err(|e| error!("Server startup failed: {:#}", e))?;

    let storage = startup.storage.clone();
    let click_service = startup.click_service.clone();
    let timeouts = RequestTimeouts::from_config(&config.api);

    let workers = config.server.workers.clamp(1, 32);
    warn!("Using {} workers for the server", workers);

    let shutdown_timeout = config.server.shutdown_timeout_secs;

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TimingMiddleware) // 在 request span 内记录请求延迟
            .wrap(RequestIdMiddleware) // 最外层，为每个请求生成 request_id
            .app_data(web::Data::new(click_service.clone()))
            .app_data(web::Data::new(timeouts))
            .app_data(web::Data::new(app_start_time.clone()))
            .wrap(DefaultHeaders::new().add(("Cache-Control", "no-cache, no-store, must-revalidate")))
            .service(health_routes())
            .service(banner_routes())
    })
    .keep_alive(Duration::from_secs(30))
    .client_request_timeout(Duration::from_millis(5000))
    .client_disconnect_timeout(Duration::from_millis(1000))
    .shutdown_timeout(shutdown_timeout)
    // 信号由我们自己处理，以便在 server 停止后关闭连接池
    .disable_signals()
    .workers(workers);

    let bind_address = config.bind_address();
    warn!("Starting server at http://{}", bind_address);
    let server = server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run();

    let handle = server.handle();
    let server_task = actix_web::rt::spawn(server);

    tokio::select! {
        res = server_task => {
            res.context("Server task panicked")??;
        }
        _ = lifetime::shutdown::listen_for_shutdown() => {
            info!(
                "Stopping server, waiting up to {}s for in-flight requests",
                shutdown_timeout
            );
            handle.stop(true).await;
        }
    }

    if let Err(e) = storage.close().await {
        error!("Failed to close database connection: {}", e);
    }
    warn!("Graceful shutdown completed");

    Ok(())
}
