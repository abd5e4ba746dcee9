//! Service layer for business logic
//!
//! This module holds the logic that sits between the HTTP handlers and
//! the storage backend.

mod click_service;

pub use click_service::ClickService;
