//! Mode routing
//!
//! - Server mode (HTTP server, default)
//! - Migrate mode (apply schema migrations and exit)

pub mod migrate;
pub mod server;

pub use migrate::run_migrate;
pub use server::run_server;
