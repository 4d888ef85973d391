// ==========================================
// 巡馆值班表转换器 - 表格读取器实现
// ==========================================
// 支持: Excel (.xlsx/.xlsm/.xlsb/.xls/.ods) / CSV (.csv)
// 约定: 表头不做特殊处理, 与数据行一样进入表格
// ==========================================

use crate::domain::{Cell, Grid};
use crate::importer::error::{ImportError, ImportResult};
use crate::importer::grid_reader_trait::GridReader;
use calamine::{open_workbook_auto, Data, ExcelDateTime, Range, Reader};
use chrono::{Duration, NaiveDate};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;
use tracing::{debug, info};

const EXCEL_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

fn lowercase_extension(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase()
}

fn ensure_exists(path: &Path) -> ImportResult<()> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }
    Ok(())
}

// ==========================================
// Excel Reader 实现
// ==========================================
pub struct ExcelGridReader;

impl ExcelGridReader {
    /// calamine 单元格 → 领域单元格
    pub fn convert_cell(data: &Data) -> Cell {
        match data {
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::String(s) => Cell::Text(s.clone()),
            Data::Bool(true) => Cell::text("True"),
            Data::Bool(false) => Cell::text("False"),
            Data::DateTime(dt) => Cell::Text(Self::render_datetime(dt)),
            Data::DateTimeIso(s) => Cell::Text(s.clone()),
            Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(_) => Cell::Empty,
            Data::Empty => Cell::Empty,
        }
    }

    /// 日期格式单元格渲染为文本, 不参与数值日期解析
    ///
    /// 纯时间 (序列值 < 1) 渲染为 `HH:MM:SS`, 其余渲染为 `YYYY-MM-DD HH:MM:SS`。
    fn render_datetime(dt: &ExcelDateTime) -> String {
        let serial = dt.as_f64();
        let seconds = (serial * 86_400.0).round();
        let rendered = NaiveDate::from_ymd_opt(1899, 12, 30)
            .and_then(|base| base.and_hms_opt(0, 0, 0))
            .filter(|_| seconds.is_finite() && seconds.abs() < 1e12)
            .and_then(|base| base.checked_add_signed(Duration::seconds(seconds as i64)));

        match rendered {
            Some(value) if (0.0..1.0).contains(&serial) => value.format("%H:%M:%S").to_string(),
            Some(value) => value.format("%Y-%m-%d %H:%M:%S").to_string(),
            None => dt.to_string(),
        }
    }

    /// 工作表区域 → 表格
    ///
    /// calamine 的区域从第一个非空单元格开始; 这里补齐前导空行/空列,
    /// 使表格 (0, 0) 始终对应 A1。
    pub fn range_to_grid(range: &Range<Data>) -> Grid {
        let (row_offset, col_offset) = match range.start() {
            Some((r, c)) => (r as usize, c as usize),
            None => return Grid::default(),
        };

        let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];
        for data_row in range.rows() {
            let mut row = vec![Cell::Empty; col_offset];
            row.extend(data_row.iter().map(Self::convert_cell));
            rows.push(row);
        }

        Grid::new(rows)
    }
}

impl GridReader for ExcelGridReader {
    fn read_grid(&self, file_path: &Path) -> ImportResult<Grid> {
        let path = file_path;

        // 检查文件存在
        ensure_exists(path)?;

        // 检查扩展名
        let ext = lowercase_extension(path);
        if !EXCEL_EXTENSIONS.contains(&ext.as_str()) {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 打开 Excel 文件
        let mut workbook = open_workbook_auto(path)?;

        // 读取第一个 sheet
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| ImportError::NoWorksheet(path.display().to_string()))?;
        debug!(sheet = %sheet_name, "读取工作表");

        let range = workbook.worksheet_range(&sheet_name)?;
        let grid = Self::range_to_grid(&range);

        info!(path = %path.display(), rows = grid.row_count(), "Excel 读取完成");
        Ok(grid)
    }
}

// ==========================================
// CSV Reader 实现
// ==========================================
pub struct CsvGridReader;

impl CsvGridReader {
    /// CSV 字段 → 单元格: 空串为 Empty, 可解析为数字的为 Number, 其余为 Text
    pub fn convert_field(field: &str) -> Cell {
        if field.is_empty() {
            return Cell::Empty;
        }
        match field.trim().parse::<f64>() {
            Ok(n) => Cell::Number(n),
            Err(_) => Cell::text(field),
        }
    }
}

impl GridReader for CsvGridReader {
    fn read_grid(&self, file_path: &Path) -> ImportResult<Grid> {
        let path = file_path;

        // 检查文件存在
        ensure_exists(path)?;

        // 检查扩展名
        let ext = lowercase_extension(path);
        if ext != "csv" {
            return Err(ImportError::UnsupportedFormat(ext));
        }

        // 打开 CSV 文件
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(Self::convert_field).collect());
        }

        let grid = Grid::new(rows);
        info!(path = %path.display(), rows = grid.row_count(), "CSV 读取完成");
        Ok(grid)
    }
}

// ==========================================
// 通用表格读取器（根据扩展名自动选择）
// ==========================================
pub struct UniversalGridReader;

impl GridReader for UniversalGridReader {
    fn read_grid(&self, file_path: &Path) -> ImportResult<Grid> {
        let ext = lowercase_extension(file_path);

        match ext.as_str() {
            "csv" => CsvGridReader.read_grid(file_path),
            e if EXCEL_EXTENSIONS.contains(&e) => ExcelGridReader.read_grid(file_path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
