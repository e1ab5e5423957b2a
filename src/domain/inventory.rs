// ==========================================
// 血库管理系统 - 库存领域模型
// ==========================================
// 职责: 库存桶与血袋实体
// 红线: total_units = available_units + reserved_units
//       （每次核心发出的增量变更后均成立）
// ==========================================

use crate::domain::types::{BloodType, BloodUnitStatus, Component};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 库存桶最低阈值默认值（单位）
pub const DEFAULT_MIN_THRESHOLD: i32 = 10;

// ==========================================
// InventoryBucket - 库存桶
// ==========================================
// 以 (blood_type, component) 为键的单位计数
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryBucket {
    // ===== 桶键 =====
    pub blood_type: BloodType,
    pub component: Component,

    // ===== 单位计数 =====
    pub total_units: i32,
    pub available_units: i32,
    pub reserved_units: i32,

    // ===== 补货阈值 =====
    pub min_threshold: i32,

    // ===== 审计字段 =====
    pub last_updated: DateTime<Utc>,
}

impl InventoryBucket {
    /// 构造一个空库存桶
    pub fn new(blood_type: BloodType, component: Component, now: DateTime<Utc>) -> Self {
        Self {
            blood_type,
            component,
            total_units: 0,
            available_units: 0,
            reserved_units: 0,
            min_threshold: DEFAULT_MIN_THRESHOLD,
            last_updated: now,
        }
    }

    /// 是否与给定桶键匹配
    pub fn matches(&self, blood_type: BloodType, component: Component) -> bool {
        self.blood_type == blood_type && self.component == component
    }

    /// 计数一致性校验: total = available + reserved
    pub fn is_balanced(&self) -> bool {
        self.total_units == self.available_units + self.reserved_units
    }
}

// ==========================================
// ScreeningResults - 血清学筛查结果
// ==========================================
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ScreeningResults {
    pub hiv: Option<bool>,
    pub hepatitis_b: Option<bool>,
    pub hepatitis_c: Option<bool>,
    pub syphilis: Option<bool>,
}

// ==========================================
// BloodUnit - 血袋
// ==========================================
// 失效日期由成分保质期在入库时推算
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodUnit {
    // ===== 主键 =====
    pub unit_id: String,

    // ===== 血液属性 =====
    pub blood_type: BloodType,
    pub component: Component,
    pub donor_id: Option<String>,

    // ===== 时间信息 =====
    pub collection_date: DateTime<Utc>,
    pub expiry_date: DateTime<Utc>,

    // ===== 标识与计量 =====
    pub bag_number: String,
    pub volume_ml: Option<f64>,

    // ===== 筛查与状态 =====
    pub screening: Option<ScreeningResults>,
    pub status: BloodUnitStatus,
}
