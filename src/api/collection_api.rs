// ==========================================
// 血库管理系统 - 血袋入库接口
// ==========================================
// 职责: 血袋登记（袋号生成、保质期推算）与库存桶累加
// 记账规则: 入库 total / available 同增（桶不存在则新建）
// ==========================================

use crate::domain::inventory::{BloodUnit, InventoryBucket, ScreeningResults};
use crate::domain::types::{BloodType, BloodUnitStatus, Component};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

// ==========================================
// BloodUnitDraft - 入库请求
// ==========================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BloodUnitDraft {
    pub blood_type: BloodType,
    pub component: Component,
    pub donor_id: Option<String>,
    /// 缺失时按时间戳规则生成
    pub bag_number: Option<String>,
    pub volume_ml: Option<f64>,
    pub screening: Option<ScreeningResults>,
}

// ==========================================
// CollectionApi - 血袋入库接口
// ==========================================
pub struct CollectionApi {
    // 无状态接口,库存由调用方传入
}

impl CollectionApi {
    /// 构造函数
    pub fn new() -> Self {
        Self {}
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 登记血袋并累加库存
    ///
    /// - 袋号缺失时生成 `BG{毫秒时间戳}-{序号}`（序号 = 既有血袋数 + 1）
    /// - 失效日期 = 采集时刻 + 成分保质期
    /// - 对应库存桶 total / available 各 +1；桶不存在则新建
    ///
    /// # 参数
    /// - `draft`: 入库请求
    /// - `inventory`: 库存桶集合（会被修改，可能追加新桶）
    /// - `existing_units`: 既有血袋总数（袋号序号基准，由调用方查得）
    /// - `now`: 当前时刻（采集时间与袋号时间戳取值）
    #[instrument(skip(self, draft, inventory), fields(
        blood_type = %draft.blood_type,
        component = %draft.component
    ))]
    pub fn register_unit(
        &self,
        draft: BloodUnitDraft,
        inventory: &mut Vec<InventoryBucket>,
        existing_units: usize,
        now: DateTime<Utc>,
    ) -> BloodUnit {
        let bag_number = draft.bag_number.unwrap_or_else(|| {
            format!("BG{}-{}", now.timestamp_millis(), existing_units + 1)
        });

        let expiry_date = now + Duration::days(draft.component.shelf_life_days());

        // 库存桶累加（不存在则新建）
        match inventory
            .iter_mut()
            .find(|b| b.matches(draft.blood_type, draft.component))
        {
            Some(bucket) => {
                bucket.total_units += 1;
                bucket.available_units += 1;
                bucket.last_updated = now;
                debug_assert!(
                    bucket.is_balanced(),
                    "库存桶计数失衡: {} {}",
                    bucket.blood_type,
                    bucket.component
                );
            }
            None => {
                let mut bucket = InventoryBucket::new(draft.blood_type, draft.component, now);
                bucket.total_units = 1;
                bucket.available_units = 1;
                inventory.push(bucket);
            }
        }

        BloodUnit {
            unit_id: Uuid::new_v4().to_string(),
            blood_type: draft.blood_type,
            component: draft.component,
            donor_id: draft.donor_id,
            collection_date: now,
            expiry_date,
            bag_number,
            volume_ml: draft.volume_ml,
            screening: draft.screening,
            status: BloodUnitStatus::Available,
        }
    }
}

// ==========================================
// Default trait 实现
// ==========================================
impl Default for CollectionApi {
    fn default() -> Self {
        Self::new()
    }
}
