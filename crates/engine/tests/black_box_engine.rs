//! Black-box tests over the engine's two entry points, driven through the
//! same serde shapes an embedding host would use.

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use shelfwise_core::{AnalysisError, RowLimits};
use shelfwise_engine::{RiskRequest, RestockRequest, assess_risk, plan_restock};

fn reference() -> DateTime<Utc> {
    "2026-04-01T00:00:00Z".parse().unwrap()
}

fn risk_request(value: serde_json::Value) -> RiskRequest {
    serde_json::from_value(value).expect("valid risk request")
}

fn restock_request(value: serde_json::Value) -> RestockRequest {
    serde_json::from_value(value).expect("valid restock request")
}

#[test]
fn out_of_stock_product_with_no_history_is_low_stock_only() {
    // Scenario: one product, zero stock, empty ledger.
    let req = risk_request(json!({
        "shop_id": "shop-1",
        "inventory": [{
            "id": "p1", "sku": "SKU-1", "name": "Widget",
            "quantity": 0, "price": 10.0, "cost": 5.0, "expiry_date": null
        }],
        "sales": []
    }));

    let res = assess_risk(req, reference(), &RowLimits::default()).unwrap();

    assert_eq!(res.at_risk.len(), 1);
    let flagged = &res.at_risk[0];
    assert_eq!(flagged.score, 80);
    assert_eq!(flagged.average_daily_sales, 0.0);
    assert!(flagged.action.reasoning.contains("0 units"));

    let wire = serde_json::to_value(&res).unwrap();
    assert_eq!(wire["at_risk"][0]["reasons"], json!(["LOW_STOCK"]));
    assert_eq!(wire["at_risk"][0]["action"]["kind"], "restock");
    assert_eq!(wire["meta"]["total_products"], 1);
    assert_eq!(wire["meta"]["flagged_count"], 1);
    assert_eq!(wire["meta"]["thresholds_used"]["low_stock"], 5);
}

#[test]
fn fast_selling_item_near_expiry_gets_a_wide_discount() {
    // Scenario: healthy stock and velocity, but three days from expiry.
    let expiry = (reference() + Duration::days(3)).date_naive();
    let mut sales = Vec::new();
    for d in 1..=10 {
        sales.push(json!({
            "product_id": "p2",
            "date": (reference() - Duration::days(d)).date_naive(),
            "quantity": 2
        }));
    }
    let req = risk_request(json!({
        "shop_id": "shop-1",
        "inventory": [{
            "id": "p2", "sku": "SKU-2", "name": "Yogurt",
            "quantity": 50, "price": 20.0, "cost": 10.0, "expiry_date": expiry
        }],
        "sales": sales
    }));

    let res = assess_risk(req, reference(), &RowLimits::default()).unwrap();

    let flagged = &res.at_risk[0];
    assert_eq!(flagged.average_daily_sales, 2.0);
    assert_eq!(flagged.days_to_expiry, Some(3));

    let wire = serde_json::to_value(&res).unwrap();
    assert_eq!(wire["at_risk"][0]["reasons"], json!(["NEAR_EXPIRY"]));
    assert_eq!(wire["at_risk"][0]["action"]["kind"], "discount");

    let range = flagged.action.discount_range.unwrap();
    assert!(range[0] >= 25, "min {} should have widened", range[0]);
    assert!(range[1] >= 40, "max {} should have widened", range[1]);
}

#[test]
fn profit_goal_funds_by_margin_and_respects_the_budget() {
    // Scenario: p1 has the stronger margin×velocity, p2 the raw volume.
    let req = restock_request(json!({
        "shop_id": "shop-1",
        "budget": 1000.0,
        "goal": "profit",
        "restock_days": 10,
        "products": [
            { "id": "p1", "name": "Margin maker", "quantity": 0,
              "price": 20.0, "cost": 10.0, "velocity": 5.0 },
            { "id": "p2", "name": "Volume mover", "quantity": 0,
              "price": 10.0, "cost": 8.0, "velocity": 20.0 }
        ]
    }));

    let plan = plan_restock(req, &RowLimits::default()).unwrap();

    assert_eq!(plan.items.len(), 2);
    assert_eq!(plan.items[0].product_id.as_str(), "p1");
    assert_eq!(plan.items[0].quantity, 50);
    assert!(plan.items[1].quantity < 100, "p2 is only partially funded");
    assert!(plan.totals.total_cost <= 1000.0 + 1e-6);

    let wire = serde_json::to_value(&plan).unwrap();
    assert_eq!(wire["strategy"], "profit");
    assert_eq!(wire["shop_id"], "shop-1");
    assert!(wire["insights"].as_array().is_some());
}

#[test]
fn zero_budget_returns_an_empty_plan_not_an_error() {
    let req = restock_request(json!({
        "shop_id": "shop-1",
        "budget": 0.0,
        "goal": "balanced",
        "restock_days": 14,
        "products": [
            { "id": "p1", "name": "Widget", "quantity": 0,
              "price": 20.0, "cost": 10.0, "velocity": 5.0 }
        ]
    }));

    let plan = plan_restock(req, &RowLimits::default()).unwrap();
    assert!(plan.items.is_empty());
    assert_eq!(plan.totals.total_cost, 0.0);
    assert_eq!(plan.totals.total_quantity, 0);
}

#[test]
fn empty_inputs_yield_a_well_formed_empty_report() {
    let req = risk_request(json!({
        "shop_id": "shop-1",
        "inventory": [],
        "sales": []
    }));
    let res = assess_risk(req, reference(), &RowLimits::default()).unwrap();
    assert!(res.at_risk.is_empty());
    assert_eq!(res.meta.total_products, 0);
    assert_eq!(res.meta.flagged_count, 0);
}

#[test]
fn identical_inputs_produce_byte_identical_responses() {
    let request = json!({
        "shop_id": "shop-1",
        "inventory": [
            { "id": "p1", "sku": "S1", "name": "A", "quantity": 0, "price": 10.0 },
            { "id": "p2", "sku": "S2", "name": "B", "quantity": 3, "price": 5.0 },
            { "id": "p3", "sku": "S3", "name": "C", "quantity": 2, "price": 8.0 }
        ],
        "sales": [
            { "product_id": "p2", "date": "2026-03-28", "quantity": 4 }
        ]
    });

    let first = assess_risk(risk_request(request.clone()), reference(), &RowLimits::default())
        .unwrap();
    let second = assess_risk(risk_request(request), reference(), &RowLimits::default()).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn partial_threshold_overrides_fall_back_to_defaults_and_are_echoed() {
    let req = risk_request(json!({
        "shop_id": "shop-1",
        "inventory": [],
        "sales": [],
        "thresholds": { "low_stock": 12 }
    }));
    let res = assess_risk(req, reference(), &RowLimits::default()).unwrap();
    assert_eq!(res.meta.thresholds_used.low_stock, 12);
    assert_eq!(res.meta.thresholds_used.expiry_days, 7);
    assert_eq!(res.meta.thresholds_used.slow_moving_window, 30);
    assert_eq!(res.meta.thresholds_used.slow_moving_threshold, 0.5);
}

#[test]
fn oversized_payloads_are_rejected_before_computation() {
    let sales: Vec<_> = (0..5)
        .map(|_| json!({ "product_id": "p1", "date": "2026-03-28", "quantity": 1 }))
        .collect();
    let req = risk_request(json!({
        "shop_id": "shop-1",
        "inventory": [],
        "sales": sales
    }));

    let err = assess_risk(req, reference(), &RowLimits::new(4)).unwrap_err();
    match err {
        AnalysisError::PayloadTooLarge {
            collection,
            rows,
            limit,
        } => {
            assert_eq!(collection, "sales");
            assert_eq!(rows, 5);
            assert_eq!(limit, 4);
        }
        other => panic!("expected PayloadTooLarge, got {other:?}"),
    }
}

#[test]
fn malformed_fields_are_rejected_with_a_field_message() {
    let req = risk_request(json!({
        "shop_id": "shop-1",
        "inventory": [{
            "id": "p1", "sku": "S1", "name": "A", "quantity": 1, "price": -3.0
        }],
        "sales": []
    }));
    let err = assess_risk(req, reference(), &RowLimits::default()).unwrap_err();
    match err {
        AnalysisError::Validation { field, message } => {
            assert_eq!(field, "inventory.price");
            assert!(message.contains("-3"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }

    let req = restock_request(json!({
        "shop_id": "shop-1",
        "budget": 100.0,
        "goal": "volume",
        "restock_days": 0,
        "products": []
    }));
    let err = plan_restock(req, &RowLimits::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::Validation { ref field, .. } if field == "restock_days"));
}

#[test]
fn negative_budget_is_rejected() {
    let req = restock_request(json!({
        "shop_id": "shop-1",
        "budget": -1.0,
        "goal": "profit",
        "restock_days": 14,
        "products": []
    }));
    let err = plan_restock(req, &RowLimits::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::Validation { ref field, .. } if field == "budget"));
}
