pub mod banner;
pub mod health;
pub mod types;

pub use banner::{BannerService, RequestTimeouts, STATS_BODY_LIMIT, banner_routes};
pub use health::{AppStartTime, HealthService, health_routes};
pub use types::{StatEntry, StatsRequest, StatsResponse};
