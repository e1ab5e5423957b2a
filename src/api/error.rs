// ==========================================
// 血库管理系统 - API层错误类型
// ==========================================
// 职责: 定义组合层错误类型
// 红线: 业务性短缺是可恢复条件，必须携带缺口信息（可解释性）
// ==========================================

use crate::domain::types::{BloodType, Component};
use thiserror::Error;

/// API层错误类型
/// 所有错误信息必须包含显式原因
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 业务规则错误（可恢复）
    // ==========================================
    /// 库存不足（订单创建时的业务性短缺，携带缺口）
    #[error("库存不足: 请求 {requested} 单位, 可用 {available} 单位")]
    InsufficientInventory { requested: i32, available: i32 },

    /// 重复履约
    #[error("订单已履约: order_id={0}")]
    OrderAlreadyFulfilled(String),

    /// 库存桶不存在
    #[error("库存桶不存在: {blood_type} {component}")]
    BucketNotFound {
        blood_type: BloodType,
        component: Component,
    },

    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("资源未找到: {0}")]
    NotFound(String),

    // ==========================================
    // 通用错误
    // ==========================================
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_inventory_message_carries_shortfall() {
        let err = ApiError::InsufficientInventory { requested: 5, available: 2 };
        let message = err.to_string();
        assert!(message.contains('5'));
        assert!(message.contains('2'));
    }

    #[test]
    fn test_bucket_not_found_names_bucket() {
        let err = ApiError::BucketNotFound {
            blood_type: BloodType::AbNeg,
            component: Component::Plasma,
        };
        assert!(err.to_string().contains("AB-"));
        assert!(err.to_string().contains("Plasma"));
    }
}
