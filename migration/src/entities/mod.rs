pub mod banner;
pub mod click_stat;

pub use banner::Entity as BannerEntity;
pub use click_stat::Entity as ClickStatEntity;
