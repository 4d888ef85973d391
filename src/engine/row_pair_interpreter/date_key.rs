// ==========================================
// 巡馆值班表转换器 - 日期提取
// ==========================================
// 日期列为 "月.日" 形式的小数 (如 12.07 → 07 日)
// ==========================================

use crate::domain::Cell;
use std::fmt;

/// 日期单元格被跳过的原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSkipReason {
    NotNumeric,
    Malformed(String),
    DayOutOfRange(String),
}

impl fmt::Display for DateSkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateSkipReason::NotNumeric => write!(f, "日期单元格非数字"),
            DateSkipReason::Malformed(raw) => write!(f, "日期格式无法识别: {}", raw),
            DateSkipReason::DayOutOfRange(day) => write!(f, "日期超出 1-31 范围: {}", day),
        }
    }
}

/// 从日期单元格提取两位日号
///
/// 数值按两位小数格式化后取小数部分, 左补零至两位; 日号须在 [1, 31]。
pub fn extract_day(cell: &Cell) -> Result<String, DateSkipReason> {
    let value = cell.as_number().ok_or(DateSkipReason::NotNumeric)?;

    let formatted = format!("{:.2}", value);
    let (_, fraction) = formatted
        .split_once('.')
        .ok_or_else(|| DateSkipReason::Malformed(formatted.clone()))?;
    let day = format!("{:0>2}", fraction);

    match day.parse::<u32>() {
        Ok(d) if (1..=31).contains(&d) => Ok(day),
        Ok(_) => Err(DateSkipReason::DayOutOfRange(day)),
        Err(_) => Err(DateSkipReason::Malformed(formatted)),
    }
}

/// 组装日期键 "YYYY-MM-DD"（年/月原样插入）
pub fn compose_date_key(year: &str, month: &str, day: &str) -> String {
    format!("{}-{}-{}", year, month, day)
}
