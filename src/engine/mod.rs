// ==========================================
// 巡馆值班表转换器 - 引擎层
// ==========================================
// 职责: 值班表解析规则, 不做文件读写
// 红线: 单元格级异常降级为跳过, 引擎本身不返回错误
// ==========================================

pub mod row_pair_interpreter;

// 重导出核心引擎
pub use row_pair_interpreter::{
    extract_day, interpret, CellCleaner, DateSkipReason, RowPairInterpreter, DATA_START_ROW,
};
