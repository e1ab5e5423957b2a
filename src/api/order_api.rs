// ==========================================
// 血库管理系统 - 用血订单接口
// ==========================================
// 职责: 订单创建（预留库存）与人工履约（消耗预留）
// 记账规则: 创建 available→reserved 平移；履约 reserved/total 同减
//           （每次变更后 total = available + reserved 保持成立）
// 红线: 同一 (blood_type, component) 桶的并发读改写由调用方串行化；
//       库存变更由调用方在其事务边界内持久化
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::inventory::InventoryBucket;
use crate::domain::order::Order;
use crate::domain::types::{BloodType, Component, OrderStatus, UrgencyLabel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};
use uuid::Uuid;

// ==========================================
// OrderDraft - 订单创建请求
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDraft {
    pub recipient_id: Option<String>,
    pub blood_type: BloodType,
    pub component: Component,
    pub units_requested: i32,
    pub urgency: Option<UrgencyLabel>,
}

// ==========================================
// OrderApi - 用血订单接口
// ==========================================
pub struct OrderApi {
    // 无状态接口,库存由调用方传入
}

impl OrderApi {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 创建订单并预留库存
    ///
    /// 可用量不足是可恢复的业务条件，以 InsufficientInventory
    /// 返回缺口（请求量 vs 可用量），不是致命错误。
    ///
    /// # 参数
    /// - `draft`: 订单请求
    /// - `inventory`: 库存桶（命中桶会被修改: available−, reserved+）
    /// - `now`: 当前时刻（created_at 取值）
    ///
    /// # 返回
    /// 待履约订单记录（由调用方持久化）
    #[instrument(skip(self, draft, inventory), fields(
        blood_type = %draft.blood_type,
        component = %draft.component,
        units = draft.units_requested
    ))]
    pub fn create_order(
        &self,
        draft: OrderDraft,
        inventory: &mut [InventoryBucket],
        now: DateTime<Utc>,
    ) -> ApiResult<Order> {
        if draft.units_requested <= 0 {
            return Err(ApiError::InvalidInput(format!(
                "units_requested 必须为正数: {}",
                draft.units_requested
            )));
        }

        match inventory
            .iter_mut()
            .find(|b| b.matches(draft.blood_type, draft.component))
        {
            Some(bucket) if bucket.available_units >= draft.units_requested => {
                bucket.available_units -= draft.units_requested;
                bucket.reserved_units += draft.units_requested;
                bucket.last_updated = now;
                debug_assert!(
                    bucket.is_balanced(),
                    "库存桶计数失衡: {} {}",
                    bucket.blood_type,
                    bucket.component
                );

                Ok(Order {
                    order_id: Uuid::new_v4().to_string(),
                    recipient_id: draft.recipient_id,
                    blood_type: draft.blood_type,
                    component: draft.component,
                    units_requested: draft.units_requested,
                    urgency: draft.urgency,
                    status: OrderStatus::Pending,
                    created_at: now,
                    fulfilled_at: None,
                })
            }
            other => {
                let available = other.map(|b| b.available_units).unwrap_or(0);
                Err(ApiError::InsufficientInventory {
                    requested: draft.units_requested,
                    available,
                })
            }
        }
    }

    /// 人工履约单个订单
    ///
    /// 重复履约是业务错误；桶缺失时仍然履约订单，但记录告警
    /// （库存缺口属于数据问题，不应阻断临床流程）。
    ///
    /// # 参数
    /// - `order`: 待履约订单（status / fulfilled_at 会被写入）
    /// - `inventory`: 库存桶（命中桶会被修改: reserved−, total−）
    /// - `now`: 当前时刻（fulfilled_at 取值）
    #[instrument(skip(self, order, inventory), fields(order_id = %order.order_id))]
    pub fn fulfill_order(
        &self,
        order: &mut Order,
        inventory: &mut [InventoryBucket],
        now: DateTime<Utc>,
    ) -> ApiResult<()> {
        if order.status == OrderStatus::Fulfilled {
            return Err(ApiError::OrderAlreadyFulfilled(order.order_id.clone()));
        }

        order.status = OrderStatus::Fulfilled;
        order.fulfilled_at = Some(now);

        match inventory
            .iter_mut()
            .find(|b| b.matches(order.blood_type, order.component))
        {
            Some(bucket) => {
                bucket.reserved_units -= order.units_requested;
                bucket.total_units -= order.units_requested;
                bucket.last_updated = now;
                debug_assert!(
                    bucket.is_balanced(),
                    "库存桶计数失衡: {} {}",
                    bucket.blood_type,
                    bucket.component
                );
            }
            None => {
                warn!(
                    blood_type = %order.blood_type,
                    component = %order.component,
                    "履约订单缺少对应库存桶，库存未扣减"
                );
            }
        }

        Ok(())
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for OrderApi {
    fn default() -> Self {
        Self::new()
    }
}
