// ==========================================
// 血库管理系统 - 领域模型层
// ==========================================
// 职责: 定义领域实体与共享类型
// 红线: 不含数据访问逻辑,不含引擎逻辑
// ==========================================

pub mod donor;
pub mod inventory;
pub mod order;
pub mod recipient;
pub mod types;

// 重导出核心类型
pub use donor::Donor;
pub use inventory::{BloodUnit, InventoryBucket, ScreeningResults, DEFAULT_MIN_THRESHOLD};
pub use order::Order;
pub use recipient::Recipient;
pub use types::{
    BloodType, BloodUnitStatus, Component, OrderStatus, RecipientStatus, RecommendationPriority,
    RiskLevel, UrgencyLabel,
};
