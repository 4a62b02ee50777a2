// ==========================================
// 司法休假优化系统 - API 层
// ==========================================
// 职责: 提供评估/建议接口,供展示与报表协作方调用
// ==========================================

pub mod error;
pub mod optimizer_api;

// 重导出核心类型
pub use error::{ApiError, ApiResult};
pub use optimizer_api::OptimizerApi;
