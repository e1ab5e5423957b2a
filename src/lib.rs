// ==========================================
// 血库管理系统 - 决策支持核心库
// ==========================================
// 系统定位: 决策支持系统 (人工最终控制权)
// 职责: 将受血者体征、供血者记录与库存/订单快照
//       转换为可解释的优先级/风险/匹配/预测决策
// 边界: 不含路由/鉴权/持久化/渲染，由外部协作方承担
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 配置层 - 阈值分档表与相容矩阵
pub mod config;

// 引擎层 - 评分与决策规则
pub mod engine;

// API 层 - 组合接口
pub mod api;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{
    BloodType, BloodUnitStatus, Component, OrderStatus, RecipientStatus, RecommendationPriority,
    RiskLevel, UrgencyLabel,
};

// 领域实体
pub use domain::{BloodUnit, Donor, InventoryBucket, Order, Recipient};

// 配置
pub use config::{CompatibilityMatrix, ScoringProfile};

// 引擎
pub use engine::{
    AutoFulfillScheduler, DemandForecast, DemandForecaster, DonorMatch, DonorMatcher,
    FulfillmentResult, FulfillmentSummary, InventoryAdvisor, PriorityFactor, PriorityScore,
    PriorityScorer, Recommendation, RiskStratifier, SurvivalEstimator,
};

// API
pub use api::{
    ApiError, ApiResult, CollectionApi, DashboardApi, DashboardInsights, IntakeApi,
    IntakeAssessment, OrderApi, OrderDraft,
};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "血库管理系统";

// ==========================================
// 预编译检查
// ==========================================
