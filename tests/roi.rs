use rental_decision_toolbox::finance::roi::{compute_roi, RoiError, RoiInput};

fn base_input() -> RoiInput {
    RoiInput {
        purchase_price: 60_000_000.0,
        monthly_rental_rate: 3_200_000.0,
        utilization_rate: 0.65,
        monthly_operating_cost: 900_000.0,
    }
}

#[test]
fn effective_revenue_scales_with_utilization() {
    let res = compute_roi(&base_input()).expect("roi calc");
    assert!((res.effective_monthly_revenue - 2_080_000.0).abs() < 1e-6);
    assert!((res.net_monthly_income - 1_180_000.0).abs() < 1e-6);
}

#[test]
fn payback_and_return_match_hand_calc() {
    let res = compute_roi(&base_input()).expect("roi calc");
    assert!(
        (res.payback_months - 60_000_000.0 / 1_180_000.0).abs() < 1e-9,
        "payback={}",
        res.payback_months
    );
    assert!((res.annual_return_percent - 1_180_000.0 * 12.0 / 60_000_000.0 * 100.0).abs() < 1e-9);
}

#[test]
fn break_even_utilization_covers_costs() {
    let res = compute_roi(&base_input()).expect("roi calc");
    assert!((res.break_even_utilization - 900_000.0 / 3_200_000.0).abs() < 1e-9);
    // 손익분기 가동률로 계산하면 월 순수익이 0이 된다.
    let mut input = base_input();
    input.utilization_rate = res.break_even_utilization;
    let at_break_even = compute_roi(&input).expect("roi calc");
    assert!(at_break_even.net_monthly_income.abs() < 1e-6);
}

#[test]
fn non_positive_net_income_means_infinite_payback() {
    let mut input = base_input();
    input.utilization_rate = 0.2; // 실효 매출 640,000 < 지출 900,000
    let res = compute_roi(&input).expect("roi calc");
    assert!(res.net_monthly_income < 0.0);
    assert!(res.payback_months.is_infinite());
    assert!(res.annual_return_percent < 0.0);
}

#[test]
fn zero_rate_means_infinite_break_even() {
    let mut input = base_input();
    input.monthly_rental_rate = 0.0;
    let res = compute_roi(&input).expect("roi calc");
    assert!(res.break_even_utilization.is_infinite());
    assert_eq!(res.effective_monthly_revenue, 0.0);
}

#[test]
fn rejects_utilization_above_one() {
    let mut input = base_input();
    input.utilization_rate = 1.2;
    assert!(matches!(
        compute_roi(&input),
        Err(RoiError::InvalidInput(_))
    ));
}

#[test]
fn rejects_zero_purchase_price() {
    let mut input = base_input();
    input.purchase_price = 0.0;
    assert!(matches!(
        compute_roi(&input),
        Err(RoiError::InvalidInput(_))
    ));
}

#[test]
fn rejects_negative_operating_cost() {
    let mut input = base_input();
    input.monthly_operating_cost = -1.0;
    assert!(matches!(
        compute_roi(&input),
        Err(RoiError::InvalidInput(_))
    ));
}
