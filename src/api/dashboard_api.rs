// ==========================================
// 血库管理系统 - 驾驶舱洞察接口
// ==========================================
// 职责: 聚合快照指标（危重人数/库存告警/利用率）并附建议列表
// 输入: 受血者 + 库存 + 订单快照（只读）
// ==========================================

use crate::config::scoring_profile::AdvisorProfile;
use crate::domain::inventory::InventoryBucket;
use crate::domain::order::Order;
use crate::domain::recipient::Recipient;
use crate::engine::advisor::{InventoryAdvisor, Recommendation};
use serde::{Deserialize, Serialize};

// ==========================================
// DashboardInsights - 驾驶舱洞察载荷
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardInsights {
    /// predicted_priority 超阈值的受血者人数
    pub critical_recipients: usize,
    /// 低于最低阈值的库存桶数
    pub stock_alerts: usize,
    /// 库存利用率分数: round(已占用 / 总量 × 100)，空库存为 0
    pub optimization_score: i32,
    pub recommendations: Vec<Recommendation>,
}

// ==========================================
// DashboardApi - 驾驶舱洞察接口
// ==========================================
pub struct DashboardApi {
    advisor: InventoryAdvisor,
    critical_priority_threshold: i32,
}

impl DashboardApi {
    /// 以规范配置构造
    pub fn new() -> Self {
        let profile = AdvisorProfile::default();
        Self {
            critical_priority_threshold: profile.critical_priority_threshold,
            advisor: InventoryAdvisor::with_profile(profile),
        }
    }

    /// 以自定义配置构造
    pub fn with_profile(profile: AdvisorProfile) -> Self {
        Self {
            critical_priority_threshold: profile.critical_priority_threshold,
            advisor: InventoryAdvisor::with_profile(profile),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成驾驶舱洞察
    ///
    /// # 参数
    /// - `recipients`: 受血者快照
    /// - `inventory`: 库存快照
    /// - `orders`: 订单快照
    pub fn insights(
        &self,
        recipients: &[Recipient],
        inventory: &[InventoryBucket],
        orders: &[Order],
    ) -> DashboardInsights {
        let critical_recipients = recipients
            .iter()
            .filter(|r| r.predicted_priority.unwrap_or(0) > self.critical_priority_threshold)
            .count();

        let stock_alerts = inventory
            .iter()
            .filter(|b| b.available_units < b.min_threshold)
            .count();

        let total_capacity: i64 = inventory.iter().map(|b| i64::from(b.total_units)).sum();
        let utilized: i64 = inventory
            .iter()
            .map(|b| i64::from(b.total_units - b.available_units))
            .sum();
        let optimization_score = if total_capacity > 0 {
            (utilized as f64 / total_capacity as f64 * 100.0).round() as i32
        } else {
            0
        };

        DashboardInsights {
            critical_recipients,
            stock_alerts,
            optimization_score,
            recommendations: self.advisor.recommend(inventory, orders, recipients),
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for DashboardApi {
    fn default() -> Self {
        Self::new()
    }
}
