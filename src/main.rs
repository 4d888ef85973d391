// ==========================================
// 巡馆值班表转换器 - 命令行入口
// ==========================================
// 用法: patrol-roster [SOURCE] [-o OUTPUT] [--year YYYY] [--month MM]
// ==========================================

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use patrol_roster::config::{defaults, ConvertConfig};
use patrol_roster::logging::{self, LogFormat};
use patrol_roster::ConvertApi;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogFormatArg {
    Text,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(arg: LogFormatArg) -> Self {
        match arg {
            LogFormatArg::Text => LogFormat::Text,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "patrol-roster")]
#[command(author, version, about = "巡馆值班表 Excel 转 JSON", long_about = None)]
struct Cli {
    /// 源表格文件 (.xlsx/.xls/.ods/.csv)
    #[arg(value_name = "SOURCE", env = "PATROL_ROSTER_SOURCE", default_value = defaults::SOURCE)]
    source: PathBuf,

    /// 输出 JSON 文件
    #[arg(short, long, env = "PATROL_ROSTER_OUTPUT", default_value = defaults::OUTPUT)]
    output: PathBuf,

    /// 年份 (4 位数字)
    #[arg(long, env = "PATROL_ROSTER_YEAR", default_value = defaults::YEAR)]
    year: String,

    /// 月份 (两位数字, 如 09)
    #[arg(long, env = "PATROL_ROSTER_MONTH", default_value = defaults::MONTH)]
    month: String,

    /// 日志详细程度 (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// 日志格式
    #[arg(long, value_enum, default_value = "text")]
    log_format: LogFormatArg,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 初始化日志系统
    logging::init(cli.verbose, cli.log_format.into());

    tracing::info!("{} v{}", patrol_roster::APP_NAME, patrol_roster::VERSION);

    let config = ConvertConfig::new(cli.source, cli.output, cli.year, cli.month);
    let source = config.source.display().to_string();

    let report = ConvertApi::new(config)
        .run()
        .with_context(|| format!("转换失败: {}", source))?;

    tracing::info!(
        elapsed_ms = report.elapsed.as_millis() as u64,
        "已保存到 {}",
        report.output.display()
    );
    tracing::info!("总值班条目: {}", report.summary.total_entries);
    tracing::info!("正常结构天数: {}", report.summary.normal_days);
    tracing::info!("合并结构天数: {}", report.summary.merged_days);

    Ok(())
}
