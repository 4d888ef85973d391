// ==========================================
// 巡馆值班表转换器 - 转换配置
// ==========================================
// 职责: 源文件/输出路径 + 年/月
// 红线: 年/月校验通过后原样写入日期键, 不做重新格式化
// ==========================================

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

// ==========================================
// 默认值
// ==========================================
pub mod defaults {
    pub const SOURCE: &str = "9.01-9.07巡馆.xlsx";
    pub const OUTPUT: &str = "data/schedule.json";
    pub const YEAR: &str = "2025";
    pub const MONTH: &str = "09";
}

/// 配置错误类型
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("年份格式错误: 期望 4 位数字，实际 {0}")]
    InvalidYear(String),

    #[error("月份格式错误: 期望 01-12 的两位数字，实际 {0}")]
    InvalidMonth(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// ==========================================
// ConvertConfig - 转换配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertConfig {
    pub source: PathBuf,
    pub output: PathBuf,
    pub year: String,
    pub month: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(defaults::SOURCE),
            output: PathBuf::from(defaults::OUTPUT),
            year: defaults::YEAR.to_string(),
            month: defaults::MONTH.to_string(),
        }
    }
}

impl ConvertConfig {
    pub fn new(
        source: impl Into<PathBuf>,
        output: impl Into<PathBuf>,
        year: impl Into<String>,
        month: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            output: output.into(),
            year: year.into(),
            month: month.into(),
        }
    }

    /// 校验年/月
    ///
    /// # 规则
    /// 1. 年份为 4 位 ASCII 数字
    /// 2. 月份为 2 位 ASCII 数字, 且与年份构成合法年月
    pub fn validate(&self) -> ConfigResult<()> {
        let year = parse_fixed_digits(&self.year, 4)
            .ok_or_else(|| ConfigError::InvalidYear(self.year.clone()))?;
        let month = parse_fixed_digits(&self.month, 2)
            .ok_or_else(|| ConfigError::InvalidMonth(self.month.clone()))?;

        NaiveDate::from_ymd_opt(year as i32, month, 1)
            .ok_or_else(|| ConfigError::InvalidMonth(self.month.clone()))?;

        Ok(())
    }
}

fn parse_fixed_digits(value: &str, width: usize) -> Option<u32> {
    if value.len() != width || !value.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    value.parse().ok()
}
