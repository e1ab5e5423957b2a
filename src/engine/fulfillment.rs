// ==========================================
// 血库管理系统 - 自动履约调度引擎
// ==========================================
// 职责: 按优先级降序的单趟贪心准入，将预留库存分配给待履约订单
// 输入: 待履约订单 + 受血者快照（取 predicted_priority）+ 库存桶（会被修改）
// 输出: 履约/跳过分组 + 汇总计数
// 红线: 单趟贪心，不回头重试被跳过的订单；不支持部分履约
//       同一 (blood_type, component) 桶的并发修改由调用方串行化
// ==========================================

use crate::domain::inventory::InventoryBucket;
use crate::domain::order::Order;
use crate::domain::recipient::Recipient;
use crate::domain::types::OrderStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::instrument;

// ==========================================
// 履约结果
// ==========================================

/// 汇总计数: fulfilled + skipped = total
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentSummary {
    pub fulfilled: usize,
    pub skipped: usize,
    pub total: usize,
}

/// 单趟调度结果，订单已按结果分组（由调用方持久化）
#[derive(Debug, Clone)]
pub struct FulfillmentResult {
    pub fulfilled_orders: Vec<Order>,
    pub skipped_orders: Vec<Order>,
    pub summary: FulfillmentSummary,
}

// ==========================================
// AutoFulfillScheduler - 自动履约调度引擎
// ==========================================
pub struct AutoFulfillScheduler {
    // 无状态引擎,不需要注入依赖
}

impl AutoFulfillScheduler {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 执行一趟自动履约
    ///
    /// 步骤:
    /// 1) 关联受血者 predicted_priority（受血者缺失按 0）
    /// 2) 按优先级降序稳定排序（同分保持取数顺序，无次级排序键）
    /// 3) 单趟遍历: 桶不存在或 reserved_units 不足 → 记为 skipped，
    ///    不改库存；否则置为 fulfilled（fulfilled_at = now）并将桶的
    ///    reserved_units 与 total_units 同减请求单位数
    ///
    /// 非 pending 的输入订单直接忽略（防御重复执行）。
    /// 被跳过的订单不会因后续订单释放容量而被重试。
    ///
    /// # 参数
    /// - `pending_orders`: 待履约订单（按持久层返回顺序）
    /// - `recipients`: 受血者快照
    /// - `inventory`: 库存桶（会被修改）
    /// - `now`: 当前时刻（fulfilled_at 取值）
    #[instrument(skip_all, fields(pending = pending_orders.len()))]
    pub fn run(
        &self,
        pending_orders: Vec<Order>,
        recipients: &[Recipient],
        inventory: &mut [InventoryBucket],
        now: DateTime<Utc>,
    ) -> FulfillmentResult {
        // 1. 关联优先级
        let priority_by_recipient: HashMap<&str, i32> = recipients
            .iter()
            .map(|r| (r.recipient_id.as_str(), r.predicted_priority.unwrap_or(0)))
            .collect();

        let mut ranked: Vec<(Order, i32)> = pending_orders
            .into_iter()
            .filter(|order| order.is_pending())
            .map(|order| {
                let priority = order
                    .recipient_id
                    .as_deref()
                    .and_then(|id| priority_by_recipient.get(id).copied())
                    .unwrap_or(0);
                (order, priority)
            })
            .collect();

        // 2. 稳定排序: 优先级降序
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        // 3. 单趟贪心分配
        let total = ranked.len();
        let mut fulfilled_orders = Vec::new();
        let mut skipped_orders = Vec::new();

        for (mut order, priority) in ranked {
            let bucket = inventory
                .iter_mut()
                .find(|b| b.matches(order.blood_type, order.component));

            match bucket {
                Some(bucket) if bucket.reserved_units >= order.units_requested => {
                    order.status = OrderStatus::Fulfilled;
                    order.fulfilled_at = Some(now);

                    bucket.reserved_units -= order.units_requested;
                    bucket.total_units -= order.units_requested;
                    bucket.last_updated = now;
                    debug_assert!(
                        bucket.is_balanced(),
                        "库存桶计数失衡: {} {}",
                        bucket.blood_type,
                        bucket.component
                    );

                    fulfilled_orders.push(order);
                }
                _ => {
                    tracing::debug!(
                        order_id = %order.order_id,
                        priority,
                        "预留库存不足，跳过订单"
                    );
                    skipped_orders.push(order);
                }
            }
        }

        FulfillmentResult {
            summary: FulfillmentSummary {
                fulfilled: fulfilled_orders.len(),
                skipped: skipped_orders.len(),
                total,
            },
            fulfilled_orders,
            skipped_orders,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for AutoFulfillScheduler {
    fn default() -> Self {
        Self::new()
    }
}
