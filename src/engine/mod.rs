// ==========================================
// 血库管理系统 - 引擎层
// ==========================================
// 职责: 实现评分与决策规则引擎
// 红线: 引擎是快照上的纯变换；时钟/随机源由参数注入；
//       所有规则输出可解释的因子/理由
// ==========================================

pub mod advisor;
pub mod forecast;
pub mod fulfillment;
pub mod matching;
pub mod priority;
pub mod risk;
pub mod survival;

// 重导出核心引擎
pub use advisor::{InventoryAdvisor, Recommendation};
pub use forecast::{DemandForecast, DemandForecaster, DemandPrediction};
pub use fulfillment::{AutoFulfillScheduler, FulfillmentResult, FulfillmentSummary};
pub use matching::{DonorMatch, DonorMatcher, MatchReason};
pub use priority::{PriorityFactor, PriorityFactorKind, PriorityScore, PriorityScorer};
pub use risk::RiskStratifier;
pub use survival::SurvivalEstimator;
