// ==========================================
// 巡馆值班表转换器 - API层
// ==========================================
// 职责: 对外暴露转换入口, 编排导入/解析/导出
// ==========================================

pub mod convert_api;
pub mod error;

pub use convert_api::{ConvertApi, ConvertReport};
pub use error::{ApiError, ApiResult};
