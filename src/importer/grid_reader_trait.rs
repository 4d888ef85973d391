// ==========================================
// 巡馆值班表转换器 - 表格读取 Trait
// ==========================================
// 职责: 定义"读取一张表格"的接口（不包含实现）
// 红线: 读取器只负责还原单元格, 不做任何值班表语义解析
// ==========================================

use crate::domain::Grid;
use crate::importer::error::ImportResult;
use std::path::Path;

// ==========================================
// GridReader Trait
// ==========================================
// 用途: 表格读取接口
// 实现者: ExcelGridReader, CsvGridReader, UniversalGridReader
pub trait GridReader: Send + Sync {
    /// 读取文件为表格
    ///
    /// # 参数
    /// - file_path: 文件路径
    ///
    /// # 返回
    /// - Ok(Grid): 表格（行列均从 0 起, 与表格中的 A1 对齐）
    /// - Err: 文件不存在、格式不支持、解析失败
    fn read_grid(&self, file_path: &Path) -> ImportResult<Grid>;
}
