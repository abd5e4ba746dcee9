pub mod time;

pub use time::{
    STATS_TIME_FORMAT, format_stats_timestamp, local_now, parse_stats_timestamp,
    truncate_to_minute,
};

/// 解析路径中的 banner ID：必须能解析为正的 i64，否则返回 `None`
pub fn parse_banner_id(raw: &str) -> Option<i64> {
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Some(id),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_banner_id_valid() {
        assert_eq!(parse_banner_id("1"), Some(1));
        assert_eq!(parse_banner_id("42"), Some(42));
        assert_eq!(parse_banner_id("9223372036854775807"), Some(i64::MAX));
    }

    #[test]
    fn test_parse_banner_id_invalid() {
        for raw in ["", "0", "-1", "abc", "1.5", "1/2", " 1", "1a", "99999999999999999999"] {
            assert_eq!(parse_banner_id(raw), None, "expected '{}' to be rejected", raw);
        }
    }
}
