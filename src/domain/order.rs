// ==========================================
// 血库管理系统 - 用血订单领域模型
// ==========================================
// 职责: 订单快照实体
// 红线: fulfilled_at 只在履约时写入
// ==========================================

use crate::domain::types::{BloodType, Component, OrderStatus, UrgencyLabel};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Order - 用血订单
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    // ===== 主键与关联 =====
    pub order_id: String,
    pub recipient_id: Option<String>, // 关联受血者（可缺失，优先级按 0 处理）

    // ===== 请求内容 =====
    pub blood_type: BloodType,
    pub component: Component,
    pub units_requested: i32, // >0

    // ===== 业务标签 =====
    pub urgency: Option<UrgencyLabel>,

    // ===== 状态 =====
    pub status: OrderStatus,

    // ===== 时间信息 =====
    pub created_at: DateTime<Utc>,
    pub fulfilled_at: Option<DateTime<Utc>>,
}

impl Order {
    /// 是否为待履约订单
    pub fn is_pending(&self) -> bool {
        self.status == OrderStatus::Pending
    }
}
