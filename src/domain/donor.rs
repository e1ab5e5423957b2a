// ==========================================
// 血库管理系统 - 供血者领域模型
// ==========================================
// 职责: 供血者快照实体（匹配引擎只读输入）
// ==========================================

use crate::domain::types::BloodType;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

// ==========================================
// Donor - 供血者
// ==========================================
// is_eligible 为外部体检结论；匹配引擎只做血型相容过滤
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Donor {
    // ===== 主键 =====
    pub donor_id: String,

    // ===== 身份信息 =====
    pub full_name: String,
    pub blood_type: BloodType,
    pub date_of_birth: Option<NaiveDate>,
    pub phone: Option<String>,
    pub address: Option<String>,

    // ===== 捐献史（匹配评分输入）=====
    pub last_donation_date: Option<NaiveDate>, // 缺失 = 首次捐献者
    pub total_donations: i32,                  // 累计捐献次数 (≥0)
    pub is_eligible: bool,                     // 体检合格标志

    // ===== 备注 =====
    pub medical_history: Option<String>,

    // ===== 审计字段 =====
    pub created_at: DateTime<Utc>,
}
