//! banner-counter - banner click counter with per-minute statistics
//!
//! # Architecture
//! - `cache`: banner existence cache (TTL map, moka, no-op)
//! - `storage`: banner / click bucket persistence over sea-orm
//! - `services`: click registration and stats business logic
//! - `api`: HTTP handlers and middleware
//! - `config`: configuration loading
//! - `runtime`: application lifecycle and execution modes
//! - `system`: logging initialization

pub mod api;
pub mod cache;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
