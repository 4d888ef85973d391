// ==========================================
// 巡馆值班表转换器 - 导出模块错误类型
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("输出目录创建失败 ({path}): {message}")]
    CreateDirError { path: String, message: String },

    #[error("文件写入失败 ({path}): {message}")]
    WriteError { path: String, message: String },

    #[error("JSON 序列化失败: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
