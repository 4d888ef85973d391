// ==========================================
// 巡馆值班表转换器 - 导出层
// ==========================================
// 职责: 排班结果 → JSON 文件
// ==========================================

pub mod error;
pub mod json_writer;

pub use error::{ExportError, ExportResult};
pub use json_writer::JsonScheduleWriter;
