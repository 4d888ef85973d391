// ==========================================
// 巡馆值班表转换器 - 转换API
// ==========================================
// 职责: 封装完整转换流程
// 流程: 校验配置 → 读取表格 → 行对解析 → 统计 → 写出 JSON
// ==========================================

use crate::api::error::ApiResult;
use crate::config::ConvertConfig;
use crate::domain::{Grid, Schedule, ScheduleSummary};
use crate::engine::RowPairInterpreter;
use crate::exporter::JsonScheduleWriter;
use crate::importer::{GridReader, UniversalGridReader};
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// 转换结果报告
#[derive(Debug, Clone, Serialize)]
pub struct ConvertReport {
    /// 输出文件路径
    pub output: PathBuf,
    /// 统计信息
    pub summary: ScheduleSummary,
    /// 转换耗时
    pub elapsed: Duration,
}

/// 转换API
pub struct ConvertApi {
    config: ConvertConfig,
    reader: Box<dyn GridReader>,
    interpreter: RowPairInterpreter,
    writer: JsonScheduleWriter,
}

impl ConvertApi {
    /// 创建新的ConvertApi实例（按扩展名自动选择读取器）
    pub fn new(config: ConvertConfig) -> Self {
        Self::with_reader(config, Box::new(UniversalGridReader))
    }

    /// 使用指定读取器创建
    pub fn with_reader(config: ConvertConfig, reader: Box<dyn GridReader>) -> Self {
        Self {
            config,
            reader,
            interpreter: RowPairInterpreter::new(),
            writer: JsonScheduleWriter,
        }
    }

    /// 解析内存中的表格（不读写文件）
    pub fn convert_grid(&self, grid: &Grid) -> Schedule {
        self.interpreter
            .interpret(grid, &self.config.year, &self.config.month)
    }

    /// 执行完整转换
    ///
    /// # 返回
    /// - Ok(ConvertReport): 输出路径与统计
    /// - Err(ApiError): 配置非法、源文件无法读取或输出无法写入
    #[instrument(skip(self), fields(source = %self.config.source.display()))]
    pub fn run(&self) -> ApiResult<ConvertReport> {
        let start_time = Instant::now();

        // 1. 校验配置
        self.config.validate()?;

        // 2. 读取表格
        let grid = self.reader.read_grid(&self.config.source)?;
        info!(rows = grid.row_count(), "Excel总行数: {}", grid.row_count());

        // 3. 行对解析
        let schedule = self.convert_grid(&grid);
        let summary = schedule.summary();

        // 4. 写出
        self.writer.write(&schedule, &self.config.output)?;

        info!(output = %self.config.output.display(), "转换完成");
        info!(
            days = summary.days,
            total_entries = summary.total_entries,
            normal_days = summary.normal_days,
            merged_days = summary.merged_days,
            "共处理了 {} 天的数据",
            summary.days
        );

        Ok(ConvertReport {
            output: self.config.output.clone(),
            summary,
            elapsed: start_time.elapsed(),
        })
    }
}
