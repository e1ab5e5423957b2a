// ==========================================
// 血库管理系统 - 需求预测引擎
// ==========================================
// 职责: 由历史订单量外推各血型 7 天需求
// 输入: 历史订单快照 + 库存快照（仅为签名对称保留）
// 输出: 8 个规范血型的预测单位数 + 文字洞察
// 红线: 时钟与随机源均由调用方注入；两者固定则输出确定
// ==========================================

use crate::config::scoring_profile::ForecastProfile;
use crate::domain::inventory::InventoryBucket;
use crate::domain::order::Order;
use crate::domain::types::BloodType;
use chrono::{Datelike, NaiveDate, Weekday};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::instrument;

// ==========================================
// 预测结果
// ==========================================

/// 单个血型的需求预测
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DemandPrediction {
    pub blood_type: BloodType,
    pub units: i32,
}

/// 全血型预测 + 洞察文本
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemandForecast {
    pub predictions: Vec<DemandPrediction>,
    pub insight: String,
}

// ==========================================
// DemandForecaster - 需求预测引擎
// ==========================================
pub struct DemandForecaster {
    profile: ForecastProfile,
}

impl DemandForecaster {
    /// 以规范配置构造引擎
    pub fn new() -> Self {
        Self {
            profile: ForecastProfile::default(),
        }
    }

    /// 以自定义配置构造引擎
    pub fn with_profile(profile: ForecastProfile) -> Self {
        Self { profile }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成 7 天需求预测
    ///
    /// 每个规范血型:
    /// 1) 取该血型最近 30 条历史订单（保持输入顺序，取尾部切片）
    ///    的平均请求单位数；无历史则取默认值 5
    /// 2) × 周内因子（周六/周日 0.8，其余 1.1，按注入的 today 判定）
    /// 3) × 抖动因子（[0.8, 1.2]，由注入的随机源抽取）
    /// 4) × 7 天视野，四舍五入
    ///
    /// # 参数
    /// - `historical_orders`: 历史订单（按持久层返回顺序）
    /// - `inventory`: 库存快照（当前算法未使用，保留签名对称）
    /// - `today`: 当前日期（周内因子基准）
    /// - `rng`: 随机源（测试用 StepRng 固定）
    #[instrument(skip_all, fields(history = historical_orders.len(), today = %today))]
    pub fn forecast<R: Rng>(
        &self,
        historical_orders: &[Order],
        inventory: &[InventoryBucket],
        today: NaiveDate,
        rng: &mut R,
    ) -> DemandForecast {
        let _ = inventory;
        let profile = &self.profile;

        let weekday_factor = match today.weekday() {
            Weekday::Sat | Weekday::Sun => profile.weekend_multiplier,
            _ => profile.weekday_multiplier,
        };

        let mut predictions = Vec::with_capacity(BloodType::ALL.len());
        for blood_type in BloodType::ALL {
            let avg_demand = self.average_demand(historical_orders, blood_type);

            // 抖动因子 ∈ [floor, floor + span]
            let jitter = profile.jitter_floor + rng.gen::<f64>() * profile.jitter_span;

            let units =
                (avg_demand * weekday_factor * jitter * profile.horizon_days).round() as i32;
            predictions.push(DemandPrediction { blood_type, units });
        }

        let insight = self.build_insight(&predictions);
        DemandForecast { predictions, insight }
    }

    // ==========================================
    // 指标计算
    // ==========================================

    /// 某血型最近窗口内的平均请求单位数
    ///
    /// 非正的 units_requested 按 1 个单位计（上游未填量的订单）
    fn average_demand(&self, historical_orders: &[Order], blood_type: BloodType) -> f64 {
        let matching: Vec<&Order> = historical_orders
            .iter()
            .filter(|order| order.blood_type == blood_type)
            .collect();

        let start = matching.len().saturating_sub(self.profile.history_window);
        let recent = &matching[start..];

        if recent.is_empty() {
            return self.profile.default_demand;
        }

        let total: i64 = recent
            .iter()
            .map(|order| i64::from(order.units_requested.max(1)))
            .sum();
        total as f64 / recent.len() as f64
    }

    /// 生成洞察文本: 列出高需求血型，否则提示常规监控
    fn build_insight(&self, predictions: &[DemandPrediction]) -> String {
        let high_demand: Vec<String> = predictions
            .iter()
            .filter(|p| p.units > self.profile.high_demand_threshold)
            .map(|p| p.blood_type.to_string())
            .collect();

        if high_demand.is_empty() {
            "Demand levels appear normal. Monitor inventory closely.".to_string()
        } else {
            format!(
                "High demand predicted for {}. Consider increasing stock levels.",
                high_demand.join(", ")
            )
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for DemandForecaster {
    fn default() -> Self {
        Self::new()
    }
}
