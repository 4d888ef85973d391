// ==========================================
// 巡馆值班表转换器 - JSON 写出
// ==========================================
// 格式: UTF-8, 两空格缩进, 中文原样输出, 保持日期与条目顺序
// 红线: 排班结果完整构建后一次性写出
// ==========================================

use crate::domain::Schedule;
use crate::exporter::error::{ExportError, ExportResult};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, instrument};

pub struct JsonScheduleWriter;

impl JsonScheduleWriter {
    /// 序列化为 JSON 文本
    pub fn to_json_string(&self, schedule: &Schedule) -> ExportResult<String> {
        Ok(serde_json::to_string_pretty(schedule)?)
    }

    /// 写出 JSON 文件（自动创建上级目录）
    #[instrument(skip(self, schedule), fields(path = %output_path.display()))]
    pub fn write(&self, schedule: &Schedule, output_path: &Path) -> ExportResult<()> {
        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| ExportError::CreateDirError {
                path: parent.display().to_string(),
                message: e.to_string(),
            })?;
        }

        let write_err = |e: std::io::Error| ExportError::WriteError {
            path: output_path.display().to_string(),
            message: e.to_string(),
        };

        let file = File::create(output_path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, schedule)?;
        writer.flush().map_err(write_err)?;

        debug!(days = schedule.day_count(), "JSON 写出完成");
        Ok(())
    }
}
