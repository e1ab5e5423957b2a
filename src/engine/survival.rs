// ==========================================
// 血库管理系统 - 生存概率估计引擎
// ==========================================
// 职责: 基线减去体征减分项，得到 0-100 生存概率估计
// 输入: 受血者快照
// ==========================================

use crate::config::scoring_profile::{self, SurvivalProfile};
use crate::domain::recipient::Recipient;

// ==========================================
// SurvivalEstimator - 生存概率估计引擎
// ==========================================
pub struct SurvivalEstimator {
    profile: SurvivalProfile,
}

impl SurvivalEstimator {
    /// 以规范阈值构造引擎
    pub fn new() -> Self {
        Self {
            profile: SurvivalProfile::default(),
        }
    }

    /// 以自定义阈值档案构造引擎
    pub fn with_profile(profile: SurvivalProfile) -> Self {
        Self { profile }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 估计生存概率
    ///
    /// 基线 95，按档减分（每组取首个命中档）:
    /// - 血红蛋白 <6 → −30, <7 → −20, <8 → −10
    /// - 收缩压 <80 → −25, <90 → −15
    /// - 心率 >130 或 <45 → −20, >120 或 <50 → −10
    /// - 年龄 >80 → −15, >75 → −10, <5 → −12
    ///
    /// 缺失字段不减分。
    ///
    /// # 返回
    /// clamp(基线 − 减分, 0, 100)
    pub fn estimate(&self, recipient: &Recipient) -> i32 {
        let profile = &self.profile;
        let mut probability = profile.baseline;

        if let Some(hb) = recipient.hemoglobin_level {
            probability -= scoring_profile::lower_band_points(&profile.hemoglobin_penalties, hb);
        }

        if let Some(sys) = recipient.systolic_bp {
            probability -= scoring_profile::lower_band_points(&profile.systolic_penalties, sys);
        }

        if let Some(hr) = recipient.heart_rate {
            probability -= scoring_profile::range_band_points(&profile.heart_rate_penalties, hr);
        }

        if let Some(age) = recipient.age {
            probability -= scoring_profile::age_points(&profile.age_penalties, age);
        }

        probability.clamp(0.0, 100.0).round() as i32
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for SurvivalEstimator {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 单元测试
// ==========================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::BloodType;
    use chrono::{TimeZone, Utc};

    fn base_recipient() -> Recipient {
        Recipient::new(
            "R001",
            "测试受血者",
            BloodType::BNeg,
            Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_scenario_1_baseline_without_vitals() {
        // 场景1: 无体征 → 基线 95
        let engine = SurvivalEstimator::new();
        let recipient = base_recipient();

        assert_eq!(engine.estimate(&recipient), 95);
    }

    #[test]
    fn test_scenario_2_worst_case_clamped() {
        // 场景2: 危重组合 95−30−25−20−15 = 5
        let engine = SurvivalEstimator::new();
        let mut recipient = base_recipient();
        recipient.hemoglobin_level = Some(5.9);
        recipient.systolic_bp = Some(75.0);
        recipient.heart_rate = Some(140.0);
        recipient.age = Some(85);

        assert_eq!(engine.estimate(&recipient), 5);
    }

    #[test]
    fn test_scenario_3_penalty_band_order() {
        // 场景3: 减分档按序首个命中（hb=6.5 命中 <7 档）
        let engine = SurvivalEstimator::new();
        let mut recipient = base_recipient();
        recipient.hemoglobin_level = Some(6.5);

        assert_eq!(engine.estimate(&recipient), 75);
    }

    #[test]
    fn test_scenario_4_moderate_heart_rate_penalty() {
        // 场景4: hr=125 命中次档 −10（不命中 >130 档）
        let engine = SurvivalEstimator::new();
        let mut recipient = base_recipient();
        recipient.heart_rate = Some(125.0);

        assert_eq!(engine.estimate(&recipient), 85);
    }

    #[test]
    fn test_scenario_5_age_penalties() {
        // 场景5: 年龄规则按序（>80 → −15；>75 → −10；<5 → −12）
        let engine = SurvivalEstimator::new();

        let mut elderly = base_recipient();
        elderly.age = Some(82);
        assert_eq!(engine.estimate(&elderly), 80);

        let mut senior = base_recipient();
        senior.age = Some(78);
        assert_eq!(engine.estimate(&senior), 85);

        let mut infant = base_recipient();
        infant.age = Some(2);
        assert_eq!(engine.estimate(&infant), 83);
    }

    #[test]
    fn test_scenario_6_result_never_negative() {
        // 场景6: 减分超过基线时夹取到 0 以上
        let engine = SurvivalEstimator::with_profile(SurvivalProfile {
            baseline: 40.0,
            ..SurvivalProfile::default()
        });
        let mut recipient = base_recipient();
        recipient.hemoglobin_level = Some(5.0);
        recipient.systolic_bp = Some(70.0);

        assert_eq!(engine.estimate(&recipient), 0);
    }
}
