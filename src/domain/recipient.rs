// ==========================================
// 血库管理系统 - 受血者领域模型
// ==========================================
// 职责: 受血者快照实体（身份 + 生命体征 + 派生评分）
// 红线: 派生字段由评分核心写入，每次入科评估写一次
// ==========================================

use crate::domain::types::{BloodType, RecipientStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Recipient - 受血者
// ==========================================
// 身份字段（full_name, blood_type）由外部校验后传入
// 生命体征字段全部可选：缺失只意味着对应评分因子不计入
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipient {
    // ===== 主键 =====
    pub recipient_id: String,

    // ===== 身份信息 =====
    pub full_name: String,
    pub blood_type: BloodType,

    // ===== 就诊上下文（快照字段，核心只读）=====
    pub phone: Option<String>,
    pub hospital: Option<String>,
    pub condition: Option<String>,
    pub required_units: Option<i32>,

    // ===== 生命体征（评分输入）=====
    pub urgency_level: Option<i32>,     // 1-10，缺失时评分按 5 处理
    pub hemoglobin_level: Option<f64>,  // 血红蛋白 (g/dL)
    pub systolic_bp: Option<f64>,       // 收缩压 (mmHg)
    pub diastolic_bp: Option<f64>,      // 舒张压 (mmHg)
    pub heart_rate: Option<f64>,        // 心率 (bpm)
    pub age: Option<i32>,               // 年龄（岁）

    // ===== 时间信息 =====
    pub admitted_at: Option<DateTime<Utc>>, // 入科时间（等待时长因子基准）

    // ===== 派生评分（评分核心写入，均 ∈ [0,100]）=====
    pub predicted_priority: Option<i32>,    // 输注优先级
    pub risk_score: Option<i32>,            // 临床风险
    pub survival_probability: Option<i32>,  // 生存概率估计

    // ===== 状态 =====
    pub status: RecipientStatus,

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>,
}

impl Recipient {
    /// 构造一条仅含身份信息的受血者记录，其余字段取默认值
    ///
    /// # 参数
    /// - `recipient_id`: 受血者ID
    /// - `full_name`: 姓名
    /// - `blood_type`: 血型
    /// - `created_at`: 记录创建时间（由调用方时钟提供）
    pub fn new(
        recipient_id: impl Into<String>,
        full_name: impl Into<String>,
        blood_type: BloodType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            recipient_id: recipient_id.into(),
            full_name: full_name.into(),
            blood_type,
            phone: None,
            hospital: None,
            condition: None,
            required_units: None,
            urgency_level: None,
            hemoglobin_level: None,
            systolic_bp: None,
            diastolic_bp: None,
            heart_rate: None,
            age: None,
            admitted_at: None,
            predicted_priority: None,
            risk_score: None,
            survival_probability: None,
            status: RecipientStatus::Pending,
            created_at,
        }
    }
}
