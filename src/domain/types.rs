// ==========================================
// 血库管理系统 - 领域类型定义
// ==========================================
// 职责: 定义跨模块共享的枚举类型
// 序列化格式与外部服务的 JSON 载荷保持一致
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 血型 (Blood Type, ABO/Rh)
// ==========================================
// 8 个规范血型；ALL 的顺序即预测输出的规范顺序
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+")]
    APos,
    #[serde(rename = "A-")]
    ANeg,
    #[serde(rename = "B+")]
    BPos,
    #[serde(rename = "B-")]
    BNeg,
    #[serde(rename = "AB+")]
    AbPos,
    #[serde(rename = "AB-")]
    AbNeg,
    #[serde(rename = "O+")]
    OPos,
    #[serde(rename = "O-")]
    ONeg,
}

impl BloodType {
    /// 规范血型全集（需求预测按此顺序输出）
    pub const ALL: [BloodType; 8] = [
        BloodType::APos,
        BloodType::ANeg,
        BloodType::BPos,
        BloodType::BNeg,
        BloodType::AbPos,
        BloodType::AbNeg,
        BloodType::OPos,
        BloodType::ONeg,
    ];

    /// 从字符串解析血型
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "A+" => Some(BloodType::APos),
            "A-" => Some(BloodType::ANeg),
            "B+" => Some(BloodType::BPos),
            "B-" => Some(BloodType::BNeg),
            "AB+" => Some(BloodType::AbPos),
            "AB-" => Some(BloodType::AbNeg),
            "O+" => Some(BloodType::OPos),
            "O-" => Some(BloodType::ONeg),
            _ => None,
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BloodType::APos => write!(f, "A+"),
            BloodType::ANeg => write!(f, "A-"),
            BloodType::BPos => write!(f, "B+"),
            BloodType::BNeg => write!(f, "B-"),
            BloodType::AbPos => write!(f, "AB+"),
            BloodType::AbNeg => write!(f, "AB-"),
            BloodType::OPos => write!(f, "O+"),
            BloodType::ONeg => write!(f, "O-"),
        }
    }
}

// ==========================================
// 血液成分 (Blood Component)
// ==========================================
// 保质期天数为成分固有属性，入库时据此推算失效日期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    #[serde(rename = "Whole Blood")]
    WholeBlood,
    #[serde(rename = "Plasma")]
    Plasma,
    #[serde(rename = "Platelets")]
    Platelets,
    #[serde(rename = "RBC")]
    Rbc,
}

impl Component {
    /// 成分保质期（天）
    pub fn shelf_life_days(&self) -> i64 {
        match self {
            Component::WholeBlood => 35,
            Component::Plasma => 365,
            Component::Platelets => 5,
            Component::Rbc => 42,
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::WholeBlood => write!(f, "Whole Blood"),
            Component::Plasma => write!(f, "Plasma"),
            Component::Platelets => write!(f, "Platelets"),
            Component::Rbc => write!(f, "RBC"),
        }
    }
}

// ==========================================
// 订单状态 (Order Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,   // 待履约
    Fulfilled, // 已履约
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "pending"),
            OrderStatus::Fulfilled => write!(f, "fulfilled"),
        }
    }
}

// ==========================================
// 受血者状态 (Recipient Status)
// ==========================================
// 核心只在入科时写入 Pending，后续流转由外部协作方推进
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecipientStatus {
    Pending,    // 待处置
    Matched,    // 已匹配供血者
    Transfused, // 已输注
}

impl fmt::Display for RecipientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipientStatus::Pending => write!(f, "pending"),
            RecipientStatus::Matched => write!(f, "matched"),
            RecipientStatus::Transfused => write!(f, "transfused"),
        }
    }
}

// ==========================================
// 订单紧急标签 (Urgency Label)
// ==========================================
// 人工填报的业务标签，不参与评分（评分以 urgency_level 为准）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLabel {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for UrgencyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UrgencyLabel::Low => write!(f, "low"),
            UrgencyLabel::Medium => write!(f, "medium"),
            UrgencyLabel::High => write!(f, "high"),
            UrgencyLabel::Critical => write!(f, "critical"),
        }
    }
}

// ==========================================
// 风险等级 (Risk Level)
// ==========================================
// 由风险分数派生: >60 高危, >30 中危, 其余低危
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// 从风险分数派生风险等级
    pub fn from_score(score: i32) -> Self {
        if score > 60 {
            RiskLevel::High
        } else if score > 30 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RiskLevel::Low => write!(f, "Low"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::High => write!(f, "High"),
        }
    }
}

// ==========================================
// 运营建议优先级 (Recommendation Priority)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationPriority {
    Medium,
    High,
}

impl fmt::Display for RecommendationPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationPriority::Medium => write!(f, "medium"),
            RecommendationPriority::High => write!(f, "high"),
        }
    }
}

// ==========================================
// 血袋状态 (Blood Unit Status)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BloodUnitStatus {
    Available, // 可用
    Used,      // 已使用
    Expired,   // 已过期
    Discarded, // 已废弃
}

impl fmt::Display for BloodUnitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BloodUnitStatus::Available => write!(f, "available"),
            BloodUnitStatus::Used => write!(f, "used"),
            BloodUnitStatus::Expired => write!(f, "expired"),
            BloodUnitStatus::Discarded => write!(f, "discarded"),
        }
    }
}
