// ==========================================
// 血库管理系统 - 血型相容矩阵
// ==========================================
// 职责: 供血方血型 → 可供应的受血方血型集合
// 红线: 固定医学规则，常量装载，引擎只读
// ==========================================

use crate::domain::types::BloodType;
use serde::{Deserialize, Serialize};

// 供血方 → 受血方相容表（ABO/Rh 标准规则）
// O- 为万能供血者；AB+ 只能供给 AB+
static DONOR_RULES: [(BloodType, &[BloodType]); 8] = [
    (
        BloodType::ONeg,
        &[
            BloodType::ONeg,
            BloodType::OPos,
            BloodType::ANeg,
            BloodType::APos,
            BloodType::BNeg,
            BloodType::BPos,
            BloodType::AbNeg,
            BloodType::AbPos,
        ],
    ),
    (
        BloodType::OPos,
        &[BloodType::OPos, BloodType::APos, BloodType::BPos, BloodType::AbPos],
    ),
    (
        BloodType::ANeg,
        &[BloodType::ANeg, BloodType::APos, BloodType::AbNeg, BloodType::AbPos],
    ),
    (BloodType::APos, &[BloodType::APos, BloodType::AbPos]),
    (
        BloodType::BNeg,
        &[BloodType::BNeg, BloodType::BPos, BloodType::AbNeg, BloodType::AbPos],
    ),
    (BloodType::BPos, &[BloodType::BPos, BloodType::AbPos]),
    (BloodType::AbNeg, &[BloodType::AbNeg, BloodType::AbPos]),
    (BloodType::AbPos, &[BloodType::AbPos]),
];

// ==========================================
// CompatibilityMatrix - 相容矩阵
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompatibilityMatrix;

impl CompatibilityMatrix {
    /// 构造标准 ABO/Rh 相容矩阵
    pub fn new() -> Self {
        Self
    }

    /// 供血方血型可供应的受血方血型集合
    pub fn recipients_for(&self, donor: BloodType) -> &'static [BloodType] {
        DONOR_RULES
            .iter()
            .find(|(d, _)| *d == donor)
            .map(|(_, recipients)| *recipients)
            .unwrap_or(&[])
    }

    /// 判定供血方是否可向受血方供血
    pub fn can_supply(&self, donor: BloodType, recipient: BloodType) -> bool {
        self.recipients_for(donor).contains(&recipient)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_universal_donor() {
        // O- 对全部 8 个血型相容
        let matrix = CompatibilityMatrix::new();
        for recipient in BloodType::ALL {
            assert!(
                matrix.can_supply(BloodType::ONeg, recipient),
                "O- 应可供给 {}",
                recipient
            );
        }
    }

    #[test]
    fn test_universal_recipient_only_self_supply() {
        // AB+ 作为供血方只能供给 AB+
        let matrix = CompatibilityMatrix::new();
        assert_eq!(matrix.recipients_for(BloodType::AbPos), &[BloodType::AbPos]);
        assert!(!matrix.can_supply(BloodType::AbPos, BloodType::APos));
    }

    #[test]
    fn test_rh_negative_not_supplied_by_positive() {
        // Rh+ 供血方不能供给任何 Rh- 受血方
        let matrix = CompatibilityMatrix::new();
        for donor in [BloodType::OPos, BloodType::APos, BloodType::BPos, BloodType::AbPos] {
            for recipient in [BloodType::ONeg, BloodType::ANeg, BloodType::BNeg, BloodType::AbNeg] {
                assert!(
                    !matrix.can_supply(donor, recipient),
                    "{} 不应供给 {}",
                    donor,
                    recipient
                );
            }
        }
    }

    #[test]
    fn test_exact_type_always_compatible() {
        let matrix = CompatibilityMatrix::new();
        for bt in BloodType::ALL {
            assert!(matrix.can_supply(bt, bt), "{} 应可同型供血", bt);
        }
    }
}
