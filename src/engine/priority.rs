// ==========================================
// 血库管理系统 - 输注优先级评分引擎
// ==========================================
// 职责: 由受血者生命体征计算 0-100 输注优先级
// 输出: 分数 + 有序因子分解（可解释性）
// 红线: 加权规则评分，非统计模型；所有因子独立加和、各自封顶
// ==========================================

mod core;
mod scoring;

pub use self::core::{PriorityFactor, PriorityFactorKind, PriorityScore, PriorityScorer};
