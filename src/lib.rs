// ==========================================
// 巡馆值班表转换器 - 核心库
// ==========================================
// 输入: 每周巡馆值班 Excel 表
// 输出: 按日期组织的 JSON 排班
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 单元格/表格/排班结果
pub mod domain;

// 引擎层 - 行对解析规则
pub mod engine;

// 导入层 - 表格文件读取
pub mod importer;

// 导出层 - JSON 写出
pub mod exporter;

// 配置层 - 转换参数
pub mod config;

// 日志系统
pub mod logging;

// API 层 - 转换流程编排
pub mod api;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::{Cell, DayLayout, DutyEntry, Floor, Grid, Schedule, ScheduleSummary};

// 引擎
pub use engine::{interpret, RowPairInterpreter};

// API
pub use api::{ApiError, ConvertApi, ConvertReport};
pub use config::ConvertConfig;

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "巡馆值班表转换器";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
