use crate::storage::{Banner, ClickStat};
use migration::entities::{banner, click_stat};

/// 将 Sea-ORM Model 转换为 Banner
pub fn model_to_banner(model: banner::Model) -> Banner {
    Banner {
        id: model.id,
        name: model.name,
    }
}

pub fn model_to_click_stat(model: click_stat::Model) -> ClickStat {
    ClickStat {
        banner_id: model.banner_id,
        timestamp: model.timestamp,
        count: model.count,
    }
}
