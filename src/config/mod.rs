// ==========================================
// 血库管理系统 - 配置层
// ==========================================
// 职责: 评分阈值分档表与血型相容矩阵
// 红线: 不可变配置数据，与评分逻辑分离，可独立测试与修订
// ==========================================

pub mod compatibility;
pub mod scoring_profile;

// 重导出核心配置类型
pub use compatibility::CompatibilityMatrix;
pub use scoring_profile::{
    AdvisorProfile, AgeRule, ForecastProfile, HypertensionRule, HypotensionBand, LowerBand,
    MatchProfile, PriorityProfile, RangeBand, RiskProfile, ScoringProfile, SurvivalProfile,
    WaitTimeRule,
};
