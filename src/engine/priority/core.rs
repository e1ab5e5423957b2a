use super::scoring;
use crate::config::scoring_profile::PriorityProfile;
use crate::domain::recipient::Recipient;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::instrument;

// ==========================================
// 因子分解（可解释性输出）
// ==========================================

/// 优先级评分因子类别，按求值顺序排列
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityFactorKind {
    Urgency,
    Hemoglobin,
    BloodPressure,
    HeartRate,
    Age,
    WaitTime,
}

impl fmt::Display for PriorityFactorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityFactorKind::Urgency => write!(f, "Urgency"),
            PriorityFactorKind::Hemoglobin => write!(f, "Hemoglobin"),
            PriorityFactorKind::BloodPressure => write!(f, "BP"),
            PriorityFactorKind::HeartRate => write!(f, "HR"),
            PriorityFactorKind::Age => write!(f, "Age"),
            PriorityFactorKind::WaitTime => write!(f, "Wait time"),
        }
    }
}

/// 单个因子的贡献（分值保留 1 位小数）
/// 字符串渲染属于展示层，核心只输出结构化键值对
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PriorityFactor {
    pub kind: PriorityFactorKind,
    pub points: f64,
}

impl PriorityFactor {
    fn new(kind: PriorityFactorKind, points: f64) -> Self {
        // 贡献值对外统一保留 1 位小数
        Self {
            kind,
            points: (points * 10.0).round() / 10.0,
        }
    }
}

/// 评分结果: 最终分数 + 按求值顺序排列的因子分解
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityScore {
    pub score: i32,
    pub factors: Vec<PriorityFactor>,
}

// ==========================================
// PriorityScorer - 输注优先级评分引擎
// ==========================================
pub struct PriorityScorer {
    profile: PriorityProfile,
}

impl PriorityScorer {
    /// 以规范阈值构造引擎
    pub fn new() -> Self {
        Self {
            profile: PriorityProfile::default(),
        }
    }

    /// 以自定义阈值档案构造引擎
    pub fn with_profile(profile: PriorityProfile) -> Self {
        Self { profile }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 计算输注优先级
    ///
    /// 因子独立加和（求值顺序即因子输出顺序）:
    /// 1) 紧急等级 urgency_level × 乘数（缺失按默认等级 5）
    /// 2) 血红蛋白分档
    /// 3) 血压分档（收缩压/舒张压齐备才评估）
    /// 4) 心率分档
    /// 5) 年龄分档
    /// 6) 等待时长（自入科时间起，24h 封顶饱和）
    ///
    /// 缺失的体征只是不贡献分值，不构成错误。
    /// 等待时长依赖注入的 `now`：同一体征在不同时刻得分可能不同，
    /// 测试必须固定 `now`。
    ///
    /// # 参数
    /// - `recipient`: 受血者快照
    /// - `now`: 当前时刻（由调用方时钟注入）
    ///
    /// # 返回
    /// PriorityScore，分数 = round(clamp(总和, 0, 100))
    #[instrument(skip(self, recipient), fields(recipient_id = %recipient.recipient_id))]
    pub fn score(&self, recipient: &Recipient, now: DateTime<Utc>) -> PriorityScore {
        let profile = &self.profile;
        let mut sum = 0.0;
        let mut factors = Vec::new();

        // 1. 紧急等级（恒有贡献）
        let urgency_level = recipient
            .urgency_level
            .unwrap_or(profile.default_urgency_level);
        let urgency_points = urgency_level as f64 * profile.urgency_multiplier;
        sum += urgency_points;
        factors.push(PriorityFactor::new(PriorityFactorKind::Urgency, urgency_points));

        // 2. 血红蛋白
        if let Some(hb) = recipient.hemoglobin_level {
            let points = scoring::hemoglobin_points(profile, hb);
            sum += points;
            factors.push(PriorityFactor::new(PriorityFactorKind::Hemoglobin, points));
        }

        // 3. 血压（两个读数齐备才评估）
        if let (Some(sys), Some(dia)) = (recipient.systolic_bp, recipient.diastolic_bp) {
            let points = scoring::blood_pressure_points(profile, sys, dia);
            sum += points;
            factors.push(PriorityFactor::new(PriorityFactorKind::BloodPressure, points));
        }

        // 4. 心率
        if let Some(hr) = recipient.heart_rate {
            let points = scoring::heart_rate_points(profile, hr);
            sum += points;
            factors.push(PriorityFactor::new(PriorityFactorKind::HeartRate, points));
        }

        // 5. 年龄
        if let Some(age) = recipient.age {
            let points = scoring::age_band_points(profile, age);
            sum += points;
            factors.push(PriorityFactor::new(PriorityFactorKind::Age, points));
        }

        // 6. 等待时长
        if let Some(admitted_at) = recipient.admitted_at {
            let points = scoring::wait_time_points(profile, admitted_at, now);
            sum += points;
            factors.push(PriorityFactor::new(PriorityFactorKind::WaitTime, points));
        }

        PriorityScore {
            score: sum.clamp(0.0, 100.0).round() as i32,
            factors,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for PriorityScorer {
    fn default() -> Self {
        Self::new()
    }
}
