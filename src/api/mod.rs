//! HTTP layer: actix-web routes, handlers and middleware

pub mod middleware;
pub mod services;
