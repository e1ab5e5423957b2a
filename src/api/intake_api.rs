// ==========================================
// 血库管理系统 - 受血者入科评估接口
// ==========================================
// 职责: 对同一份体征依次运行优先级/风险/生存三个评分引擎，
//       将派生分数写回受血者记录（由调用方持久化）
// 红线: 派生字段每次入科评估写一次；体征重新提交时重新调用即可
// ==========================================

use crate::config::scoring_profile::ScoringProfile;
use crate::domain::recipient::Recipient;
use crate::domain::types::RiskLevel;
use crate::engine::priority::{PriorityFactor, PriorityScorer};
use crate::engine::risk::RiskStratifier;
use crate::engine::survival::SurvivalEstimator;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// IntakeAssessment - 入科评估结果载荷
// ==========================================
// 交给展示层的只读响应；分数同时已写入受血者记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeAssessment {
    pub predicted_priority: i32,
    pub risk_score: i32,
    pub survival_probability: i32,
    pub risk_level: RiskLevel,
    pub priority_factors: Vec<PriorityFactor>,
}

// ==========================================
// IntakeApi - 入科评估接口
// ==========================================
pub struct IntakeApi {
    priority: PriorityScorer,
    risk: RiskStratifier,
    survival: SurvivalEstimator,
}

impl IntakeApi {
    /// 以规范阈值构造
    pub fn new() -> Self {
        Self {
            priority: PriorityScorer::new(),
            risk: RiskStratifier::new(),
            survival: SurvivalEstimator::new(),
        }
    }

    /// 以自定义阈值档案构造
    pub fn with_profile(profile: &ScoringProfile) -> Self {
        Self {
            priority: PriorityScorer::with_profile(profile.priority.clone()),
            risk: RiskStratifier::with_profile(profile.risk.clone()),
            survival: SurvivalEstimator::with_profile(profile.survival.clone()),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 入科评估: 三引擎依次评分并写回派生字段
    ///
    /// # 参数
    /// - `recipient`: 受血者记录（派生字段会被写入）
    /// - `now`: 当前时刻（等待时长因子基准）
    ///
    /// # 返回
    /// IntakeAssessment（含因子分解与风险等级标签）
    #[instrument(skip(self, recipient), fields(recipient_id = %recipient.recipient_id))]
    pub fn score_recipient(
        &self,
        recipient: &mut Recipient,
        now: DateTime<Utc>,
    ) -> IntakeAssessment {
        let priority = self.priority.score(recipient, now);
        let risk_score = self.risk.assess(recipient);
        let survival_probability = self.survival.estimate(recipient);

        recipient.predicted_priority = Some(priority.score);
        recipient.risk_score = Some(risk_score);
        recipient.survival_probability = Some(survival_probability);

        IntakeAssessment {
            predicted_priority: priority.score,
            risk_score,
            survival_probability,
            risk_level: RiskLevel::from_score(risk_score),
            priority_factors: priority.factors,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for IntakeApi {
    fn default() -> Self {
        Self::new()
    }
}
