// ==========================================
// 全业务链路 E2E 测试
// ==========================================
// 职责: 血袋入库 → 入科评估 → 订单预留 → 自动履约 → 驾驶舱洞察
// 验证: 库存桶计数在全链路各阶段保持 total = available + reserved
// ==========================================

use blood_vault_core::api::{
    ApiError, BloodUnitDraft, CollectionApi, DashboardApi, IntakeApi, OrderApi, OrderDraft,
};
use blood_vault_core::domain::inventory::InventoryBucket;
use blood_vault_core::domain::recipient::Recipient;
use blood_vault_core::domain::types::{BloodType, Component, OrderStatus, UrgencyLabel};
use blood_vault_core::engine::AutoFulfillScheduler;
use chrono::{DateTime, Duration, TimeZone, Utc};

// ==========================================
// 测试辅助函数
// ==========================================

/// 基准时刻: 2026-03-10 08:00:00 UTC
fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 8, 0, 0).unwrap()
}

/// 入库 n 袋同键血袋，返回库存桶集合
fn stock_units(
    blood_type: BloodType,
    component: Component,
    count: usize,
) -> Vec<InventoryBucket> {
    let api = CollectionApi::new();
    let mut inventory = Vec::new();
    for i in 0..count {
        api.register_unit(
            BloodUnitDraft {
                blood_type,
                component,
                donor_id: None,
                bag_number: None,
                volume_ml: Some(450.0),
                screening: None,
            },
            &mut inventory,
            i,
            now(),
        );
    }
    inventory
}

/// 创建带体征的受血者并完成入科评估
fn create_scored_recipient(
    recipient_id: &str,
    blood_type: BloodType,
    urgency_level: i32,
    hemoglobin_level: f64,
) -> Recipient {
    let mut recipient =
        Recipient::new(recipient_id, format!("受血者{}", recipient_id), blood_type, now());
    recipient.urgency_level = Some(urgency_level);
    recipient.hemoglobin_level = Some(hemoglobin_level);
    recipient.admitted_at = Some(now() - Duration::hours(12));

    IntakeApi::new().score_recipient(&mut recipient, now());
    recipient
}

fn assert_balanced(inventory: &[InventoryBucket], stage: &str) {
    for bucket in inventory {
        assert!(
            bucket.is_balanced(),
            "{} 阶段库存桶失衡: {} {} total={} available={} reserved={}",
            stage,
            bucket.blood_type,
            bucket.component,
            bucket.total_units,
            bucket.available_units,
            bucket.reserved_units
        );
    }
}

// ==========================================
// 全链路场景
// ==========================================

#[test]
fn test_full_flow_stock_reserve_fulfill() {
    // 入库 10 袋 → 两单预留 → 自动履约 → 洞察
    let order_api = OrderApi::new();
    let scheduler = AutoFulfillScheduler::new();
    let dashboard = DashboardApi::new();

    // 1. 入库
    let mut inventory = stock_units(BloodType::APos, Component::WholeBlood, 10);
    assert_eq!(inventory[0].total_units, 10);
    assert_balanced(&inventory, "入库");

    // 2. 入科评估: 危重与普通各一名
    let critical = create_scored_recipient("R_CRIT", BloodType::APos, 10, 5.5);
    let routine = create_scored_recipient("R_ROUT", BloodType::APos, 2, 13.0);
    assert!(
        critical.predicted_priority.unwrap() > routine.predicted_priority.unwrap(),
        "危重受血者优先级应更高"
    );

    // 3. 订单预留: 两单合计 10，预留恰好耗尽可用量
    let order_a = order_api
        .create_order(
            OrderDraft {
                recipient_id: Some("R_ROUT".to_string()),
                blood_type: BloodType::APos,
                component: Component::WholeBlood,
                units_requested: 6,
                urgency: Some(UrgencyLabel::Medium),
            },
            &mut inventory,
            now(),
        )
        .unwrap();
    let order_b = order_api
        .create_order(
            OrderDraft {
                recipient_id: Some("R_CRIT".to_string()),
                blood_type: BloodType::APos,
                component: Component::WholeBlood,
                units_requested: 4,
                urgency: Some(UrgencyLabel::Critical),
            },
            &mut inventory,
            now(),
        )
        .unwrap();
    assert_eq!(inventory[0].available_units, 0);
    assert_eq!(inventory[0].reserved_units, 10);
    assert_balanced(&inventory, "预留");

    // 4. 第三单超出可用量 → 业务性短缺
    let overdraft = order_api.create_order(
        OrderDraft {
            recipient_id: None,
            blood_type: BloodType::APos,
            component: Component::WholeBlood,
            units_requested: 1,
            urgency: None,
        },
        &mut inventory,
        now(),
    );
    assert!(matches!(
        overdraft,
        Err(ApiError::InsufficientInventory { requested: 1, available: 0 })
    ));

    // 5. 自动履约: 预留量足够两单全部履约
    let recipients = vec![critical.clone(), routine.clone()];
    let result = scheduler.run(
        vec![order_a, order_b],
        &recipients,
        &mut inventory,
        now() + Duration::hours(1),
    );

    assert_eq!(result.summary.fulfilled, 2);
    assert_eq!(result.summary.skipped, 0);
    // 危重受血者的订单先被处理
    assert_eq!(
        result.fulfilled_orders[0].recipient_id.as_deref(),
        Some("R_CRIT")
    );
    assert_eq!(inventory[0].total_units, 0);
    assert_eq!(inventory[0].reserved_units, 0);
    assert_balanced(&inventory, "履约");

    // 6. 驾驶舱洞察: 库存耗尽触发紧缺告警
    let insights = dashboard.insights(&recipients, &inventory, &result.fulfilled_orders);
    assert_eq!(insights.stock_alerts, 1);
    assert!(insights
        .recommendations
        .iter()
        .any(|r| r.title.starts_with("Critical: Low A+")));
}

#[test]
fn test_scarce_reserve_admits_by_priority() {
    // 预留量只够一单时，优先级高者履约、低者跳过，且计数守恒
    let order_api = OrderApi::new();
    let scheduler = AutoFulfillScheduler::new();

    let mut inventory = stock_units(BloodType::ONeg, Component::Rbc, 6);

    let critical = create_scored_recipient("R_CRIT", BloodType::ONeg, 10, 5.5);
    let routine = create_scored_recipient("R_ROUT", BloodType::ONeg, 1, 14.0);

    // 两单各要 4，但先只预留得出 6 → 第二单创建时余 2，不足
    let order_high = order_api
        .create_order(
            OrderDraft {
                recipient_id: Some("R_CRIT".to_string()),
                blood_type: BloodType::ONeg,
                component: Component::Rbc,
                units_requested: 4,
                urgency: Some(UrgencyLabel::Critical),
            },
            &mut inventory,
            now(),
        )
        .unwrap();
    let shortfall = order_api.create_order(
        OrderDraft {
            recipient_id: Some("R_ROUT".to_string()),
            blood_type: BloodType::ONeg,
            component: Component::Rbc,
            units_requested: 4,
            urgency: None,
        },
        &mut inventory,
        now(),
    );
    assert!(matches!(
        shortfall,
        Err(ApiError::InsufficientInventory { requested: 4, available: 2 })
    ));

    // 低优先级订单改要 2 单位并成功预留
    let order_low = order_api
        .create_order(
            OrderDraft {
                recipient_id: Some("R_ROUT".to_string()),
                blood_type: BloodType::ONeg,
                component: Component::Rbc,
                units_requested: 2,
                urgency: None,
            },
            &mut inventory,
            now(),
        )
        .unwrap();

    // 人为制造调度期预留缺口: 高优先级订单先被人工履约一次后
    // 再混入调度输入，验证防御性过滤
    let mut manually_fulfilled = order_high.clone();
    order_api
        .fulfill_order(&mut manually_fulfilled, &mut inventory, now())
        .unwrap();
    assert_balanced(&inventory, "人工履约");
    assert_eq!(inventory[0].reserved_units, 2);

    let result = scheduler.run(
        vec![manually_fulfilled, order_low],
        &[critical, routine],
        &mut inventory,
        now() + Duration::hours(2),
    );

    // 已履约订单被忽略；剩余低优先级订单用掉剩余预留
    assert_eq!(result.summary.fulfilled, 1);
    assert_eq!(result.summary.skipped, 0);
    assert_eq!(result.summary.total, 1);
    assert_eq!(result.fulfilled_orders[0].status, OrderStatus::Fulfilled);
    assert_eq!(inventory[0].reserved_units, 0);
    assert_balanced(&inventory, "调度");
}

#[test]
fn test_fulfilled_plus_skipped_equals_total() {
    // 任意混合输入下 fulfilled + skipped = total
    let order_api = OrderApi::new();
    let scheduler = AutoFulfillScheduler::new();

    let mut inventory = stock_units(BloodType::BPos, Component::Platelets, 5);
    let recipient = create_scored_recipient("R1", BloodType::BPos, 7, 8.0);

    let mut orders = Vec::new();
    for units in [2, 2, 2] {
        match order_api.create_order(
            OrderDraft {
                recipient_id: Some("R1".to_string()),
                blood_type: BloodType::BPos,
                component: Component::Platelets,
                units_requested: units,
                urgency: None,
            },
            &mut inventory,
            now(),
        ) {
            Ok(order) => orders.push(order),
            Err(ApiError::InsufficientInventory { .. }) => {}
            Err(other) => panic!("意外错误: {}", other),
        }
    }
    // 5 个可用只预留得出前两单（2+2），第三单短缺
    assert_eq!(orders.len(), 2);

    let result = scheduler.run(orders, &[recipient], &mut inventory, now());

    assert_eq!(
        result.summary.fulfilled + result.summary.skipped,
        result.summary.total
    );
    assert_eq!(result.summary.fulfilled, 2);
    assert_balanced(&inventory, "调度");
}
