// ==========================================
// 血库管理系统 - 评分配置档案
// ==========================================
// 职责: 各引擎的阈值分档表与权重，作为不可变配置注入引擎
// 红线: 阈值不散落在评分逻辑中；Default 即临床校准的规范值
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// 通用分档结构
// ==========================================

/// 下限分档: value < below → points（按序取首个命中档）
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LowerBand {
    pub below: f64,
    pub points: f64,
}

/// 双向越界分档: value > above 或 value < below → points（按序取首个命中档）
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RangeBand {
    pub above: f64,
    pub below: f64,
    pub points: f64,
}

impl RangeBand {
    /// 值是否落在越界区间
    pub fn hits(&self, value: f64) -> bool {
        value > self.above || value < self.below
    }
}

/// 年龄规则（按序取首个命中档）
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum AgeRule {
    /// age < 阈值 → points
    Below { years: i32, points: f64 },
    /// age > 阈值 → points
    Above { years: i32, points: f64 },
}

impl AgeRule {
    /// 年龄是否命中该档
    pub fn hits(&self, age: i32) -> bool {
        match *self {
            AgeRule::Below { years, .. } => age < years,
            AgeRule::Above { years, .. } => age > years,
        }
    }

    /// 该档贡献分值
    pub fn points(&self) -> f64 {
        match *self {
            AgeRule::Below { points, .. } | AgeRule::Above { points, .. } => points,
        }
    }
}

// ==========================================
// 分档求值（首个命中档生效）
// ==========================================

/// 下限分档求值: 返回首个 value < below 档的分值，无命中为 0
pub fn lower_band_points(bands: &[LowerBand], value: f64) -> f64 {
    bands
        .iter()
        .find(|band| value < band.below)
        .map(|band| band.points)
        .unwrap_or(0.0)
}

/// 越界分档求值: 返回首个命中档的分值，无命中为 0
pub fn range_band_points(bands: &[RangeBand], value: f64) -> f64 {
    bands
        .iter()
        .find(|band| band.hits(value))
        .map(|band| band.points)
        .unwrap_or(0.0)
}

/// 年龄规则求值: 返回首个命中规则的分值，无命中为 0
pub fn age_points(rules: &[AgeRule], age: i32) -> f64 {
    rules
        .iter()
        .find(|rule| rule.hits(age))
        .map(|rule| rule.points())
        .unwrap_or(0.0)
}

// ==========================================
// PriorityProfile - 优先级评分配置
// ==========================================

/// 低血压分档: sys < sys_below 或 dia < dia_below → points
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HypotensionBand {
    pub sys_below: f64,
    pub dia_below: Option<f64>, // 仅收缩压档位时为 None
    pub points: f64,
}

/// 高血压档: sys > sys_above 或 dia > dia_above → points
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HypertensionRule {
    pub sys_above: f64,
    pub dia_above: f64,
    pub points: f64,
}

/// 等待时长因子: min(max_points, hours / saturation_hours × max_points)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WaitTimeRule {
    pub max_points: f64,
    pub saturation_hours: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityProfile {
    /// urgency_level 乘数（等级 1-10 → 最高 25 分）
    pub urgency_multiplier: f64,
    /// urgency_level 缺失时的默认等级
    pub default_urgency_level: i32,
    pub hemoglobin_bands: Vec<LowerBand>,
    pub hypotension_bands: Vec<HypotensionBand>,
    pub hypertension: HypertensionRule,
    pub heart_rate_bands: Vec<RangeBand>,
    pub age_rules: Vec<AgeRule>,
    pub wait_time: WaitTimeRule,
}

impl Default for PriorityProfile {
    fn default() -> Self {
        Self {
            urgency_multiplier: 2.5,
            default_urgency_level: 5,
            hemoglobin_bands: vec![
                LowerBand { below: 6.0, points: 25.0 },
                LowerBand { below: 7.0, points: 22.0 },
                LowerBand { below: 8.0, points: 18.0 },
                LowerBand { below: 9.0, points: 15.0 },
                LowerBand { below: 10.0, points: 10.0 },
                LowerBand { below: 11.0, points: 5.0 },
            ],
            hypotension_bands: vec![
                HypotensionBand { sys_below: 90.0, dia_below: Some(60.0), points: 20.0 },
                HypotensionBand { sys_below: 100.0, dia_below: Some(65.0), points: 15.0 },
                HypotensionBand { sys_below: 110.0, dia_below: None, points: 10.0 },
            ],
            hypertension: HypertensionRule { sys_above: 180.0, dia_above: 120.0, points: 15.0 },
            heart_rate_bands: vec![
                RangeBand { above: 120.0, below: 50.0, points: 15.0 },
                RangeBand { above: 110.0, below: 55.0, points: 10.0 },
                RangeBand { above: 100.0, below: 60.0, points: 5.0 },
            ],
            age_rules: vec![
                AgeRule::Below { years: 5, points: 10.0 },
                AgeRule::Below { years: 12, points: 8.0 },
                AgeRule::Above { years: 75, points: 9.0 },
                AgeRule::Above { years: 65, points: 7.0 },
                AgeRule::Below { years: 18, points: 5.0 },
            ],
            wait_time: WaitTimeRule { max_points: 5.0, saturation_hours: 24.0 },
        }
    }
}

// ==========================================
// RiskProfile - 风险分层配置
// ==========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RiskProfile {
    /// 血红蛋白分档（先重后轻）
    pub hemoglobin_bands: Vec<LowerBand>,
    /// 严重低血压: sys < 阈值
    pub hypotension: LowerBand,
    /// 心动过速/过缓
    pub heart_rate: RangeBand,
    /// 年龄极值: < below 或 > above
    pub age_extreme: RangeBand,
}

impl Default for RiskProfile {
    fn default() -> Self {
        Self {
            hemoglobin_bands: vec![
                LowerBand { below: 7.0, points: 40.0 },
                LowerBand { below: 9.0, points: 25.0 },
            ],
            hypotension: LowerBand { below: 90.0, points: 30.0 },
            heart_rate: RangeBand { above: 120.0, below: 50.0, points: 20.0 },
            age_extreme: RangeBand { above: 75.0, below: 5.0, points: 10.0 },
        }
    }
}

// ==========================================
// SurvivalProfile - 生存概率估计配置
// ==========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurvivalProfile {
    /// 基线概率
    pub baseline: f64,
    /// 血红蛋白减分档
    pub hemoglobin_penalties: Vec<LowerBand>,
    /// 收缩压减分档
    pub systolic_penalties: Vec<LowerBand>,
    /// 心率减分档
    pub heart_rate_penalties: Vec<RangeBand>,
    /// 年龄减分规则
    pub age_penalties: Vec<AgeRule>,
}

impl Default for SurvivalProfile {
    fn default() -> Self {
        Self {
            baseline: 95.0,
            hemoglobin_penalties: vec![
                LowerBand { below: 6.0, points: 30.0 },
                LowerBand { below: 7.0, points: 20.0 },
                LowerBand { below: 8.0, points: 10.0 },
            ],
            systolic_penalties: vec![
                LowerBand { below: 80.0, points: 25.0 },
                LowerBand { below: 90.0, points: 15.0 },
            ],
            heart_rate_penalties: vec![
                RangeBand { above: 130.0, below: 45.0, points: 20.0 },
                RangeBand { above: 120.0, below: 50.0, points: 10.0 },
            ],
            age_penalties: vec![
                AgeRule::Above { years: 80, points: 15.0 },
                AgeRule::Above { years: 75, points: 10.0 },
                AgeRule::Below { years: 5, points: 12.0 },
            ],
        }
    }
}

// ==========================================
// ForecastProfile - 需求预测配置
// ==========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForecastProfile {
    /// 每血型取最近多少条历史订单
    pub history_window: usize,
    /// 无历史时的默认单均需求
    pub default_demand: f64,
    /// 周末需求乘数（周六/周日）
    pub weekend_multiplier: f64,
    /// 工作日需求乘数
    pub weekday_multiplier: f64,
    /// 抖动下界
    pub jitter_floor: f64,
    /// 抖动幅度（抖动 ∈ [floor, floor+span]）
    pub jitter_span: f64,
    /// 预测视野（天）
    pub horizon_days: f64,
    /// 高需求判定阈值（单位）
    pub high_demand_threshold: i32,
}

impl Default for ForecastProfile {
    fn default() -> Self {
        Self {
            history_window: 30,
            default_demand: 5.0,
            weekend_multiplier: 0.8,
            weekday_multiplier: 1.1,
            jitter_floor: 0.8,
            jitter_span: 0.4,
            horizon_days: 7.0,
            high_demand_threshold: 15,
        }
    }
}

// ==========================================
// MatchProfile - 供血者匹配配置
// ==========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchProfile {
    /// 同型匹配加分
    pub exact_match_points: i32,
    /// 异型相容加分
    pub compatible_points: i32,
    /// 捐献间隔窗口（天），超过窗口才有间隔加分
    pub donation_window_days: i64,
    /// 间隔窗口加分
    pub donation_window_points: i32,
    /// 首次捐献者加分（无捐献记录）
    pub first_time_points: i32,
    /// 资深捐献者判定阈值（次）
    pub experienced_threshold: i32,
    /// 资深捐献者加分
    pub experienced_points: i32,
    /// 有捐献史加分
    pub previous_donor_points: i32,
    /// 可联系加分（固定项）
    pub availability_points: i32,
    /// 返回的最大匹配数
    pub max_results: usize,
}

impl Default for MatchProfile {
    fn default() -> Self {
        Self {
            exact_match_points: 50,
            compatible_points: 30,
            donation_window_days: 56,
            donation_window_points: 20,
            first_time_points: 15,
            experienced_threshold: 5,
            experienced_points: 15,
            previous_donor_points: 10,
            availability_points: 15,
            max_results: 5,
        }
    }
}

// ==========================================
// AdvisorProfile - 库存建议配置
// ==========================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorProfile {
    /// 次优水位 = min_threshold × optimal_factor
    pub optimal_factor: f64,
    /// 建议补货目标 = min_threshold × restock_factor
    pub restock_factor: f64,
    /// 待履约订单积压阈值（条）
    pub pending_backlog_threshold: usize,
    /// 危重受血者优先级阈值
    pub critical_priority_threshold: i32,
}

impl Default for AdvisorProfile {
    fn default() -> Self {
        Self {
            optimal_factor: 1.5,
            restock_factor: 2.0,
            pending_backlog_threshold: 5,
            critical_priority_threshold: 80,
        }
    }
}

// ==========================================
// ScoringProfile - 全量配置聚合
// ==========================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoringProfile {
    #[serde(default)]
    pub priority: PriorityProfile,
    #[serde(default)]
    pub risk: RiskProfile,
    #[serde(default)]
    pub survival: SurvivalProfile,
    #[serde(default)]
    pub forecast: ForecastProfile,
    #[serde(default)]
    pub matching: MatchProfile,
    #[serde(default)]
    pub advisor: AdvisorProfile,
}
