// ==========================================
// 巡馆值班表转换器 - 配置层
// ==========================================
// 职责: 转换参数（路径 + 年月）与默认值
// 来源: 命令行参数 / 环境变量 / 默认值
// ==========================================

pub mod convert_config;

// 重导出核心配置
pub use convert_config::{defaults, ConfigError, ConfigResult, ConvertConfig};
