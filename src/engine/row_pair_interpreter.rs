// ==========================================
// 巡馆值班表转换器 - 行对解析引擎
// ==========================================
// 红线: 单元格级异常只跳过, 不中断整个转换
// 红线: 版式逐日判定, 不假设整表一致
// ==========================================
// 职责: 表格 → 排班结果 的纯转换
// 输入: 表格 (前两行为表头) + 年/月字符串
// 输出: Schedule (日期键 → 值班条目)
// ==========================================

mod cell_cleaner;
mod core;
mod date_key;


pub use cell_cleaner::CellCleaner;
pub use self::core::{interpret, RowPairInterpreter, DATA_START_ROW};
pub use date_key::{extract_day, DateSkipReason};
