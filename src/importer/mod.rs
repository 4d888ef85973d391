// ==========================================
// 巡馆值班表转换器 - 导入层
// ==========================================
// 职责: 外部表格文件 → 领域表格 (Grid)
// 支持: Excel, CSV
// ==========================================

// 模块声明
pub mod error;
pub mod file_parser;
pub mod grid_reader_trait;

// 重导出核心类型
pub use error::{ImportError, ImportResult};
pub use file_parser::{CsvGridReader, ExcelGridReader, UniversalGridReader};

// 重导出 Trait 接口
pub use grid_reader_trait::GridReader;
