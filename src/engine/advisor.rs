// ==========================================
// 血库管理系统 - 库存建议引擎
// ==========================================
// 职责: 由库存/订单/受血者快照生成有序运营建议
// 红线: 规则独立、非互斥，命中即按序输出；不去重不重排
// ==========================================

use crate::config::scoring_profile::AdvisorProfile;
use crate::domain::inventory::InventoryBucket;
use crate::domain::order::Order;
use crate::domain::recipient::Recipient;
use crate::domain::types::RecommendationPriority;
use serde::{Deserialize, Serialize};

// ==========================================
// Recommendation - 运营建议记录
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: RecommendationPriority,
    pub title: String,
    pub description: String,
    pub action: String,
}

// ==========================================
// InventoryAdvisor - 库存建议引擎
// ==========================================
pub struct InventoryAdvisor {
    profile: AdvisorProfile,
}

impl InventoryAdvisor {
    /// 以规范配置构造引擎
    pub fn new() -> Self {
        Self {
            profile: AdvisorProfile::default(),
        }
    }

    /// 以自定义配置构造引擎
    pub fn with_profile(profile: AdvisorProfile) -> Self {
        Self { profile }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成运营建议
    ///
    /// 规则按契约顺序求值:
    /// 1) 逐库存桶（按快照迭代顺序）:
    ///    available < min_threshold → high 紧缺告警
    ///    否则 available < min_threshold × 1.5 → medium 次优告警
    /// 2) 待履约订单 > 5 条 → 一条 high 聚合建议
    /// 3) predicted_priority > 80 的受血者 > 0 人 → 一条 high 聚合建议
    ///
    /// # 参数
    /// - `inventory`: 库存快照
    /// - `orders`: 订单快照（含 pending 与 fulfilled）
    /// - `recipients`: 受血者快照
    pub fn recommend(
        &self,
        inventory: &[InventoryBucket],
        orders: &[Order],
        recipients: &[Recipient],
    ) -> Vec<Recommendation> {
        let profile = &self.profile;
        let mut recommendations = Vec::new();

        // 1. 逐桶库存水位检查
        for bucket in inventory {
            let optimal = bucket.min_threshold as f64 * profile.optimal_factor;
            if bucket.available_units < bucket.min_threshold {
                recommendations.push(Recommendation {
                    priority: RecommendationPriority::High,
                    title: format!(
                        "Critical: Low {} {}",
                        bucket.blood_type, bucket.component
                    ),
                    description: format!(
                        "Only {} units available (min: {})",
                        bucket.available_units, bucket.min_threshold
                    ),
                    action: format!(
                        "Initiate emergency procurement for {} {}",
                        bucket.blood_type, bucket.component
                    ),
                });
            } else if (bucket.available_units as f64) < optimal {
                let restock_target =
                    (bucket.min_threshold as f64 * profile.restock_factor).round() as i32;
                recommendations.push(Recommendation {
                    priority: RecommendationPriority::Medium,
                    title: format!(
                        "Warning: {} {} below optimal",
                        bucket.blood_type, bucket.component
                    ),
                    description: format!(
                        "Current: {} units, recommend: {}",
                        bucket.available_units, restock_target
                    ),
                    action: format!("Schedule donor drive for {}", bucket.blood_type),
                });
            }
        }

        // 2. 待履约订单积压
        let pending_count = orders.iter().filter(|order| order.is_pending()).count();
        if pending_count > profile.pending_backlog_threshold {
            recommendations.push(Recommendation {
                priority: RecommendationPriority::High,
                title: format!("{} Pending Orders", pending_count),
                description: "Multiple orders awaiting fulfillment".to_string(),
                action: "Review and prioritize based on recipient urgency".to_string(),
            });
        }

        // 3. 危重受血者
        let critical_count = recipients
            .iter()
            .filter(|r| r.predicted_priority.unwrap_or(0) > profile.critical_priority_threshold)
            .count();
        if critical_count > 0 {
            recommendations.push(Recommendation {
                priority: RecommendationPriority::High,
                title: format!("{} Critical Recipients", critical_count),
                description: "High-priority cases require immediate attention".to_string(),
                action: "Ensure blood availability for critical cases".to_string(),
            });
        }

        recommendations
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for InventoryAdvisor {
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
    use crate::domain::types::{BloodType, Component, OrderStatus};
    use chrono::{DateTime, TimeZone, Utc};

    // ==========================================
    // 测试数据准备
    // ==========================================

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap()
    }

    /// 创建测试用库存桶
    fn create_test_bucket(
        blood_type: BloodType,
        available_units: i32,
        min_threshold: i32,
    ) -> InventoryBucket {
        InventoryBucket {
            blood_type,
            component: Component::WholeBlood,
            total_units: available_units,
            available_units,
            reserved_units: 0,
            min_threshold,
            last_updated: now(),
        }
    }

    /// 创建测试用订单
    fn create_test_order(status: OrderStatus) -> Order {
        Order {
            order_id: "O001".to_string(),
            recipient_id: None,
            blood_type: BloodType::APos,
            component: Component::WholeBlood,
            units_requested: 2,
            urgency: None,
            status,
            created_at: now(),
            fulfilled_at: None,
        }
    }

    /// 创建带优先级的测试用受血者
    fn create_test_recipient(recipient_id: &str, predicted_priority: i32) -> Recipient {
        let mut recipient = Recipient::new(recipient_id, "测试受血者", BloodType::APos, now());
        recipient.predicted_priority = Some(predicted_priority);
        recipient
    }

    #[test]
    fn test_scenario_1_critical_low_stock() {
        // 场景1: available=5 < min=10 → 恰好一条 high 紧缺建议
        let advisor = InventoryAdvisor::new();
        let inventory = vec![create_test_bucket(BloodType::ONeg, 5, 10)];

        let recommendations = advisor.recommend(&inventory, &[], &[]);

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].priority, RecommendationPriority::High);
        assert_eq!(recommendations[0].title, "Critical: Low O- Whole Blood");
        assert_eq!(
            recommendations[0].description,
            "Only 5 units available (min: 10)"
        );
    }

    #[test]
    fn test_scenario_2_below_optimal() {
        // 场景2: 10 ≤ available=12 < 15 (=10×1.5) → medium 次优建议，目标 20
        let advisor = InventoryAdvisor::new();
        let inventory = vec![create_test_bucket(BloodType::BPos, 12, 10)];

        let recommendations = advisor.recommend(&inventory, &[], &[]);

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].priority, RecommendationPriority::Medium);
        assert_eq!(
            recommendations[0].description,
            "Current: 12 units, recommend: 20"
        );
        assert_eq!(recommendations[0].action, "Schedule donor drive for B+");
    }

    #[test]
    fn test_scenario_3_healthy_stock_no_recommendation() {
        // 场景3: available ≥ min×1.5 → 无建议
        let advisor = InventoryAdvisor::new();
        let inventory = vec![create_test_bucket(BloodType::APos, 15, 10)];

        let recommendations = advisor.recommend(&inventory, &[], &[]);

        assert!(recommendations.is_empty());
    }

    #[test]
    fn test_scenario_4_pending_backlog_aggregate() {
        // 场景4: 6 条 pending → 恰好一条聚合建议
        let advisor = InventoryAdvisor::new();
        let orders: Vec<Order> = (0..6).map(|_| create_test_order(OrderStatus::Pending)).collect();

        let recommendations = advisor.recommend(&[], &orders, &[]);

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].title, "6 Pending Orders");
    }

    #[test]
    fn test_scenario_5_pending_threshold_not_inclusive() {
        // 场景5: 恰好 5 条 pending 不触发（严格大于）
        let advisor = InventoryAdvisor::new();
        let orders: Vec<Order> = (0..5).map(|_| create_test_order(OrderStatus::Pending)).collect();

        let recommendations = advisor.recommend(&[], &orders, &[]);

        assert!(recommendations.is_empty());
    }

    #[test]
    fn test_scenario_6_fulfilled_orders_not_counted() {
        // 场景6: fulfilled 订单不计入积压
        let advisor = InventoryAdvisor::new();
        let mut orders: Vec<Order> =
            (0..4).map(|_| create_test_order(OrderStatus::Pending)).collect();
        orders.extend((0..4).map(|_| create_test_order(OrderStatus::Fulfilled)));

        let recommendations = advisor.recommend(&[], &orders, &[]);

        assert!(recommendations.is_empty());
    }

    #[test]
    fn test_scenario_7_critical_recipients_aggregate() {
        // 场景7: 2 名 priority>80 受血者 → 一条聚合建议
        let advisor = InventoryAdvisor::new();
        let recipients = vec![
            create_test_recipient("R1", 85),
            create_test_recipient("R2", 92),
            create_test_recipient("R3", 80), // 边界不计入
        ];

        let recommendations = advisor.recommend(&[], &[], &recipients);

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].title, "2 Critical Recipients");
    }

    #[test]
    fn test_scenario_8_emission_order_is_contract() {
        // 场景8: 输出顺序 = 桶迭代顺序 → 积压聚合 → 危重聚合
        let advisor = InventoryAdvisor::new();
        let inventory = vec![
            create_test_bucket(BloodType::ONeg, 2, 10),  // high 紧缺
            create_test_bucket(BloodType::APos, 12, 10), // medium 次优
        ];
        let orders: Vec<Order> = (0..7).map(|_| create_test_order(OrderStatus::Pending)).collect();
        let recipients = vec![create_test_recipient("R1", 90)];

        let recommendations = advisor.recommend(&inventory, &orders, &recipients);

        assert_eq!(recommendations.len(), 4);
        assert!(recommendations[0].title.starts_with("Critical: Low O-"));
        assert!(recommendations[1].title.starts_with("Warning: A+"));
        assert_eq!(recommendations[2].title, "7 Pending Orders");
        assert_eq!(recommendations[3].title, "1 Critical Recipients");
    }
}
