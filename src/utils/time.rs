//! 统计接口使用的时间工具
//!
//! 所有时间都是进程本地的 naive 时间（不带时区），与请求体里的
//! `YYYY-MM-DDTHH:MM:SS` 格式保持一致，不做任何 UTC 转换。

use chrono::{Local, NaiveDateTime, Timelike};

use crate::errors::{BannerError, Result};

/// 请求与响应里使用的固定时间格式
pub const STATS_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// 当前本地时间（naive）
pub fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// 向下截断到所在分钟的起点
pub fn truncate_to_minute(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(ts)
}

/// 严格按 [`STATS_TIME_FORMAT`] 解析
///
/// 不接受小数秒、时区后缀或任何多余字符。
pub fn parse_stats_timestamp(value: &str) -> Result<NaiveDateTime> {
    // chrono 允许带符号的年份、不补零的字段和前导空格，先按字节校验形状
    if !has_stats_timestamp_shape(value) {
        return Err(BannerError::date_parse(format!(
            "timestamp '{}' does not match {}",
            value, STATS_TIME_FORMAT
        )));
    }
    Ok(NaiveDateTime::parse_from_str(value, STATS_TIME_FORMAT)?)
}

/// `YYYY-MM-DDTHH:MM:SS`：固定 19 字节，数字位与分隔符位置固定
fn has_stats_timestamp_shape(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 19
        && bytes.iter().enumerate().all(|(i, &b)| match i {
            4 | 7 => b == b'-',
            10 => b == b'T',
            13 | 16 => b == b':',
            _ => b.is_ascii_digit(),
        })
}

pub fn format_stats_timestamp(ts: NaiveDateTime) -> String {
    ts.format(STATS_TIME_FORMAT).to_string()
}
