// ==========================================
// 血库管理系统 - 临床风险分层引擎
// ==========================================
// 职责: 由生命体征计算 0-100 临床风险分数
// 输入: 受血者快照（与优先级评分共用同一体征）
// 输出: 风险分数（RiskLevel 由分数派生）
// ==========================================

use crate::config::scoring_profile::{self, RiskProfile};
use crate::domain::recipient::Recipient;

// ==========================================
// RiskStratifier - 风险分层引擎
// ==========================================
pub struct RiskStratifier {
    profile: RiskProfile,
}

impl RiskStratifier {
    /// 以规范阈值构造引擎
    pub fn new() -> Self {
        Self {
            profile: RiskProfile::default(),
        }
    }

    /// 以自定义阈值档案构造引擎
    pub fn with_profile(profile: RiskProfile) -> Self {
        Self { profile }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算临床风险分数
    ///
    /// 规则（独立加和，与优先级评分互不依赖）:
    /// - 血红蛋白 <7 → +40, 否则 <9 → +25
    /// - 收缩压 <90 → +30
    /// - 心率 >120 或 <50 → +20
    /// - 年龄 <5 或 >75 → +10
    ///
    /// 缺失字段贡献 0。
    ///
    /// # 返回
    /// clamp(总和, 0, 100)
    pub fn assess(&self, recipient: &Recipient) -> i32 {
        let profile = &self.profile;
        let mut risk = 0.0;

        if let Some(hb) = recipient.hemoglobin_level {
            risk += scoring_profile::lower_band_points(&profile.hemoglobin_bands, hb);
        }

        if let Some(sys) = recipient.systolic_bp {
            if sys < profile.hypotension.below {
                risk += profile.hypotension.points;
            }
        }

        if let Some(hr) = recipient.heart_rate {
            if profile.heart_rate.hits(hr) {
                risk += profile.heart_rate.points;
            }
        }

        if let Some(age) = recipient.age {
            if profile.age_extreme.hits(age as f64) {
                risk += profile.age_extreme.points;
            }
        }

        risk.clamp(0.0, 100.0).round() as i32
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for RiskStratifier {
    fn default() -> Self {
        Self::new()
    }
}
