// ==========================================
// 血库管理系统 - API层
// ==========================================
// 职责: 组合引擎、执行库存记账、产出响应载荷
// 红线: 不拥有存储；只返回纯结果或待持久化的变更
// ==========================================

pub mod collection_api;
pub mod dashboard_api;
pub mod error;
pub mod intake_api;
pub mod order_api;

// 重导出核心接口
pub use collection_api::{BloodUnitDraft, CollectionApi};
pub use dashboard_api::{DashboardApi, DashboardInsights};
pub use error::{ApiError, ApiResult};
pub use intake_api::{IntakeApi, IntakeAssessment};
pub use order_api::{OrderApi, OrderDraft};
