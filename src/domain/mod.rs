// ==========================================
// 巡馆值班表转换器 - 领域模型层
// ==========================================
// 职责: 定义单元格、表格、排班结果等领域类型
// 红线: 不含文件读写逻辑,不含解析逻辑
// ==========================================

pub mod cell;
pub mod schedule;
pub mod types;

// 重导出核心类型
pub use cell::{cell_at, Cell, Grid};
pub use schedule::{DutyEntry, Schedule, ScheduleSummary, EMPTY_NAME_PLACEHOLDER};
pub use types::{DayLayout, Floor};
