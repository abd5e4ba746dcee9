//! 统计接口的请求/响应结构

use serde::{Deserialize, Serialize};

use crate::storage::ClickStat;
use crate::utils::format_stats_timestamp;

/// `POST /stats/{bannerID}` 请求体
///
/// 两个字段都是 `YYYY-MM-DDTHH:MM:SS` 格式的本地时间。缺失和 `null`
/// 都解析为 `None`，由 handler 统一返回 400。
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StatsRequest {
    #[serde(default)]
    pub from: Option<String>,
    #[serde(default)]
    pub to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsResponse {
    pub stats: Vec<StatEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    #[serde(rename = "ts")]
    pub timestamp: String,
    #[serde(rename = "v")]
    pub value: i64,
}

impl From<Vec<ClickStat>> for StatsResponse {
    fn from(stats: Vec<ClickStat>) -> Self {
        Self {
            stats: stats
                .into_iter()
                .map(|stat| StatEntry {
                    timestamp: format_stats_timestamp(stat.timestamp),
                    value: stat.count,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_response_wire_format() {
        let timestamp = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(10, 5, 0)
            .unwrap();
        let response = StatsResponse::from(vec![ClickStat {
            banner_id: 1,
            timestamp,
            count: 3,
        }]);

        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"stats":[{"ts":"2024-01-01T10:05:00","v":3}]}"#);
    }

    #[test]
    fn test_empty_response_serializes_as_empty_list() {
        let json = serde_json::to_string(&StatsResponse::from(Vec::new())).unwrap();
        assert_eq!(json, r#"{"stats":[]}"#);
    }

    #[test]
    fn test_request_missing_fields_are_none() {
        let request: StatsRequest = serde_json::from_str(r#"{"from":"2024-01-01T00:00:00"}"#).unwrap();
        assert_eq!(request.from.as_deref(), Some("2024-01-01T00:00:00"));
        assert!(request.to.is_none());
    }
}
