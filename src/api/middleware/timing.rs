//! HTTP timing middleware
//!
//! Logs the latency and status of every request at debug level. Wrapped
//! before `RequestIdMiddleware`, so it runs inside the request span and the
//! log line carries the request ID.

use actix_service::{Service, Transform};
use actix_web::{
    Error,
    dev::{ServiceRequest, ServiceResponse},
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::rc::Rc;
use std::time::Instant;
use tracing::debug;

/// Requests slower than this are logged at warn level.
const SLOW_REQUEST_MS: u128 = 1000;

/// HTTP timing middleware factory
#[derive(Clone, Default)]
pub struct TimingMiddleware;

impl<S, B> Transform<S, ServiceRequest> for TimingMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TimingService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TimingService {
            service: Rc::new(service),
        }))
    }
}

pub struct TimingService<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for TimingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let start = Instant::now();
        let method = req.method().clone();
        let path = req.path().to_string();

        Box::pin(async move {
            let result = srv.call(req).await;

            let elapsed = start.elapsed();
            let status = match &result {
                Ok(response) => response.status().as_u16(),
                Err(_) => 500,
            };

            if elapsed.as_millis() >= SLOW_REQUEST_MS {
                tracing::warn!(%method, %path, status, ?elapsed, "Slow request");
            } else {
                debug!(%method, %path, status, ?elapsed, "Request completed");
            }

            result
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::middleware::{RequestId, RequestIdMiddleware};
    use actix_web::{App, HttpMessage, HttpRequest, HttpResponse, http::StatusCode, test, web};

    #[actix_rt::test]
    async fn test_timing_passes_response_through() {
        let app = test::init_service(
            App::new()
                .wrap(TimingMiddleware)
                .route("/", web::get().to(|| async { HttpResponse::Created().finish() })),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    // 与服务器中的注册顺序一致：request id 在外层，timing 在其内
    #[actix_rt::test]
    async fn test_runs_inside_request_id_layer() {
        let app = test::init_service(
            App::new()
                .wrap(TimingMiddleware)
                .wrap(RequestIdMiddleware)
                .route(
                    "/",
                    web::get().to(|req: HttpRequest| async move {
                        let seen = req.extensions().get::<RequestId>().is_some();
                        HttpResponse::Ok().body(if seen { "seen" } else { "missing" })
                    }),
                ),
        )
        .await;

        let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert!(resp.headers().contains_key("x-request-id"));
        assert_eq!(test::read_body(resp).await, "seen");
    }
}
