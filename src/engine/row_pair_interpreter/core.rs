// ==========================================
// 巡馆值班表转换器 - 行对解析引擎
// ==========================================
// 表格结构:
//   第 1-2 行: 表头 (跳过)
//   第 3 行起: 每两行一组 (时间行 + 人名行) 表示一天
//   A 列: 日期 (时间行)
//   B/C: 二层 | D/E: 三层 | F/G: 四层
// ==========================================

use crate::domain::{cell_at, Cell, DayLayout, DutyEntry, Floor, Grid, Schedule};
use tracing::{debug, info, instrument, trace};

use super::cell_cleaner::CellCleaner;
use super::date_key::{compose_date_key, extract_day};

/// 数据起始行（0 起计, 前两行为表头）
pub const DATA_START_ROW: usize = 2;

// ==========================================
// RowPairInterpreter - 行对解析引擎
// ==========================================
// 无状态引擎, 年/月通过参数传入
pub struct RowPairInterpreter {
    cleaner: CellCleaner,
}

impl RowPairInterpreter {
    /// 创建新的行对解析引擎
    pub fn new() -> Self {
        Self {
            cleaner: CellCleaner,
        }
    }

    /// 解析整张表格
    ///
    /// # 参数
    /// - `grid`: 表格
    /// - `year`/`month`: 原样写入日期键
    ///
    /// # 返回
    /// 日期键 → 值班条目（发现顺序）。末尾不成对的行直接结束遍历。
    #[instrument(skip(self, grid), fields(rows = grid.row_count()))]
    pub fn interpret(&self, grid: &Grid, year: &str, month: &str) -> Schedule {
        let mut schedule = Schedule::new();

        let mut start = DATA_START_ROW;
        while start + 1 < grid.row_count() {
            if let (Some(time_row), Some(name_row)) = (grid.row(start), grid.row(start + 1)) {
                self.interpret_pair(start, time_row, name_row, year, month, &mut schedule);
            }
            start += 2;
        }

        info!(
            days = schedule.day_count(),
            entries = schedule.entry_count(),
            "表格解析完成"
        );
        schedule
    }

    /// 解析单个行对（一天）
    fn interpret_pair(
        &self,
        start: usize,
        time_row: &[Cell],
        name_row: &[Cell],
        year: &str,
        month: &str,
        schedule: &mut Schedule,
    ) {
        // 1. 日期
        let day = match extract_day(cell_at(time_row, 0)) {
            Ok(day) => day,
            Err(reason) => {
                trace!(row = start + 1, reason = %reason, "跳过行对");
                return;
            }
        };
        let date_key = compose_date_key(year, month, &day);

        // 2. 版式
        let layout = Self::detect_layout(time_row);
        debug!(date = %date_key, row = start + 1, layout = %layout, "处理日期");

        // 3. 提取（日期键先于条目创建）
        let entries = schedule.day_mut(&date_key);
        for floor in Floor::ALL {
            for col in layout.columns_for(floor) {
                if let Some(entry) = self.extract_entry(floor, time_row, name_row, col) {
                    debug!(
                        date = %date_key,
                        floor = %entry.floor,
                        time = %entry.time,
                        name = %entry.name,
                        "添加值班条目"
                    );
                    entries.push(entry);
                }
            }
        }
    }

    /// 判定单日版式
    ///
    /// 合并版式: 时间行 B/D/F 均非空且 C/E/G 均为空; 其他一律视为正常版式。
    /// 只看时间行, 不看人名行。
    pub fn detect_layout(time_row: &[Cell]) -> DayLayout {
        let merged = Floor::ALL.iter().all(|floor| {
            !cell_at(time_row, floor.primary_column()).is_empty()
                && cell_at(time_row, floor.secondary_column()).is_empty()
        });

        if merged {
            DayLayout::Merged
        } else {
            DayLayout::Normal
        }
    }

    /// 提取单列的值班条目
    ///
    /// 时间与人名单元格均非空才参与; 人名空白用占位符; 时间 TRIM 后为空则不产生条目。
    pub fn extract_entry(
        &self,
        floor: Floor,
        time_row: &[Cell],
        name_row: &[Cell],
        col: usize,
    ) -> Option<DutyEntry> {
        let time = self.cleaner.clean_text(cell_at(time_row, col))?;
        let raw_name = self.cleaner.clean_text(cell_at(name_row, col))?;

        if time.is_empty() {
            return None;
        }

        let name = self.cleaner.clean_name(&raw_name);
        Some(DutyEntry::new(floor, time, name))
    }
}

impl Default for RowPairInterpreter {
    fn default() -> Self {
        Self::new()
    }
}

/// 便捷入口: 使用默认引擎解析表格
pub fn interpret(grid: &Grid, year: &str, month: &str) -> Schedule {
    RowPairInterpreter::new().interpret(grid, year, month)
}
