// ==========================================
// 巡馆值班表转换器 - API层错误类型
// ==========================================
// 职责: 汇总配置/导入/导出错误, 统一向调用方暴露
// ==========================================

use crate::config::ConfigError;
use crate::exporter::ExportError;
use crate::importer::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),

    #[error("导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("导出失败: {0}")]
    Export(#[from] ExportError),
}

/// API层 Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
