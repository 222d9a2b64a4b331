//! 렌트/구매 비교 모델의 시나리오 검증 및 회귀 테스트.

use rental_decision_toolbox::finance::rent_vs_buy::{
    compute, CostModelError, CostModelInput, Recommendation,
};

fn base_input() -> CostModelInput {
    CostModelInput {
        purchase_price: 150_000.0,
        hours_per_year: 800.0,
        years_of_ownership: 5,
        operator_wage_hourly: 50.0,
        maintenance_cost_per_hour: 15.0,
        monthly_rental_rate: 4500.0,
        annual_interest_rate: 0.06,
        tax_rate: 0.25,
        clamp_depreciation: false,
    }
}

#[test]
fn buy_breakdown_matches_hand_calc() {
    let out = compute(&base_input()).expect("valid input");
    assert!((out.utilization_rate - 800.0 / 2080.0).abs() < 1e-9);
    assert!((out.buy.operator_cost - 520_000.0).abs() < 1e-6);
    assert!((out.buy.maintenance_cost - 60_000.0).abs() < 1e-6);
    assert!((out.buy.insurance_cost - 11_250.0).abs() < 1e-6);
    assert!((out.buy.total_depreciation - 102_000.0).abs() < 1e-6);
    assert!((out.buy.resale_value - 48_000.0).abs() < 1e-6);
    assert!((out.buy.financing_cost - 22_500.0).abs() < 1e-6);
    assert!((out.buy.total_before_tax - 715_750.0).abs() < 1e-6);
    assert!((out.buy.tax_savings - 25_500.0).abs() < 1e-6);
    assert!((out.buy.total_after_tax - 690_250.0).abs() < 1e-6);
}

#[test]
fn rent_breakdown_matches_hand_calc() {
    let out = compute(&base_input()).expect("valid input");
    assert!((out.rent.rental_months_per_year - 800.0 / 176.0).abs() < 1e-9);
    assert!((out.rent.rental_cost - 4500.0 * (800.0 / 176.0) * 5.0).abs() < 1e-6);
    assert!((out.rent.operator_cost - 200_000.0).abs() < 1e-6);
    assert!(
        (out.rent.total_before_tax - (out.rent.rental_cost + out.rent.operator_cost)).abs() < 1e-9
    );
    assert!((out.rent.tax_savings - out.rent.rental_cost * 0.25).abs() < 1e-9);
    assert_eq!(out.recommendation, Recommendation::Rent);
}

#[test]
fn after_tax_totals_are_before_tax_minus_tax_savings() {
    let out = compute(&base_input()).expect("valid input");
    assert!((out.buy.total_after_tax - (out.buy.total_before_tax - out.buy.tax_savings)).abs() < 1e-9);
    assert!(
        (out.rent.total_after_tax - (out.rent.total_before_tax - out.rent.tax_savings)).abs() < 1e-9
    );
    assert!((out.savings - (out.buy.total_after_tax - out.rent.total_after_tax)).abs() < 1e-9);
}

#[test]
fn savings_percent_uses_buy_after_tax_base() {
    let out = compute(&base_input()).expect("valid input");
    let expected = out.savings.abs() / out.buy.total_after_tax * 100.0;
    assert!(
        (out.savings_percent - expected).abs() < 1e-9,
        "percent={} expected={}",
        out.savings_percent,
        expected
    );
}

#[test]
fn zero_interest_means_no_financing_cost() {
    let mut input = base_input();
    input.annual_interest_rate = 0.0;
    let out = compute(&input).expect("valid input");
    assert_eq!(out.buy.financing_cost, 0.0);
    // 금융비용 외의 구매 항목은 기준 시나리오와 동일해야 한다.
    let base = compute(&base_input()).expect("valid input");
    assert_eq!(out.buy.operator_cost, base.buy.operator_cost);
    assert_eq!(out.buy.insurance_cost, base.buy.insurance_cost);
    assert_eq!(out.buy.total_depreciation, base.buy.total_depreciation);
    assert!((out.buy.total_before_tax - (base.buy.total_before_tax - 22_500.0)).abs() < 1e-6);
}

#[test]
fn zero_hours_keeps_full_time_operator_cost() {
    let mut input = base_input();
    input.hours_per_year = 0.0;
    let out = compute(&input).expect("valid input");
    assert_eq!(out.utilization_rate, 0.0);
    assert_eq!(out.rent.rental_months_per_year, 0.0);
    assert_eq!(out.rent.rental_cost, 0.0);
    assert_eq!(out.rent.operator_cost, 0.0);
    assert_eq!(out.buy.maintenance_cost, 0.0);
    // 보유 장비는 가동이 없어도 전담 운전원 인건비가 그대로 발생한다.
    assert!((out.buy.operator_cost - 2080.0 * 50.0 * 5.0).abs() < 1e-6);
}

#[test]
fn buy_total_increases_with_purchase_price() {
    let mut previous = f64::NEG_INFINITY;
    for price in [50_000.0, 150_000.0, 500_000.0] {
        let mut input = base_input();
        input.purchase_price = price;
        let out = compute(&input).expect("valid input");
        assert!(
            out.buy.total_before_tax > previous,
            "price={price} total={}",
            out.buy.total_before_tax
        );
        previous = out.buy.total_before_tax;
    }
}

#[test]
fn recommendation_follows_after_tax_comparison() {
    // 렌탈이 유리한 기준 시나리오와 구매가 유리한 저가 장비 시나리오 양쪽 확인.
    let rent_case = compute(&base_input()).expect("valid input");
    assert_eq!(
        rent_case.recommendation == Recommendation::Rent,
        rent_case.buy.total_after_tax > rent_case.rent.total_after_tax
    );

    let mut input = base_input();
    input.purchase_price = 10_000.0;
    input.monthly_rental_rate = 50_000.0;
    let buy_case = compute(&input).expect("valid input");
    assert_eq!(buy_case.recommendation, Recommendation::Buy);
    assert!(buy_case.savings <= 0.0);
}

#[test]
fn tie_defaults_to_buy() {
    // 모든 금액이 0이면 두 시나리오 총액이 0으로 같아진다.
    let input = CostModelInput {
        purchase_price: 0.0,
        hours_per_year: 0.0,
        years_of_ownership: 1,
        operator_wage_hourly: 0.0,
        maintenance_cost_per_hour: 0.0,
        monthly_rental_rate: 0.0,
        annual_interest_rate: 0.0,
        tax_rate: 0.0,
        clamp_depreciation: false,
    };
    let out = compute(&input).expect("valid input");
    assert_eq!(out.savings, 0.0);
    assert_eq!(out.recommendation, Recommendation::Buy);
    assert_eq!(out.savings_percent, 0.0);
}

#[test]
fn identical_inputs_give_identical_outputs() {
    let a = compute(&base_input()).expect("valid input");
    let b = compute(&base_input()).expect("valid input");
    assert_eq!(a, b);
}

#[test]
fn unclamped_resale_value_can_go_negative() {
    let mut input = base_input();
    input.years_of_ownership = 10;
    let out = compute(&input).expect("valid input");
    // 20% + 12%*9 = 128% > 100% 이므로 잔존가치가 음수가 된다.
    assert!(out.buy.total_depreciation > input.purchase_price);
    assert!(out.buy.resale_value < 0.0);
}

#[test]
fn clamped_depreciation_never_exceeds_price() {
    let mut input = base_input();
    input.years_of_ownership = 10;
    input.clamp_depreciation = true;
    let out = compute(&input).expect("valid input");
    assert!((out.buy.total_depreciation - input.purchase_price).abs() < 1e-9);
    assert_eq!(out.buy.resale_value, 0.0);
    assert!((out.buy.tax_savings - input.purchase_price * 0.25).abs() < 1e-6);
}

#[test]
fn rejects_zero_years() {
    let mut input = base_input();
    input.years_of_ownership = 0;
    assert!(matches!(
        compute(&input),
        Err(CostModelError::InvalidInput(_))
    ));
}

#[test]
fn rejects_negative_purchase_price() {
    let mut input = base_input();
    input.purchase_price = -1.0;
    assert!(matches!(
        compute(&input),
        Err(CostModelError::InvalidInput(_))
    ));
}

#[test]
fn rejects_non_finite_hours() {
    let mut input = base_input();
    input.hours_per_year = f64::NAN;
    assert!(matches!(
        compute(&input),
        Err(CostModelError::InvalidInput(_))
    ));
}

#[test]
fn rejects_hours_above_standard_year() {
    let mut input = base_input();
    input.hours_per_year = 2081.0;
    assert!(matches!(
        compute(&input),
        Err(CostModelError::InvalidInput(_))
    ));
}

#[test]
fn rejects_tax_rate_of_one() {
    let mut input = base_input();
    input.tax_rate = 1.0;
    assert!(matches!(
        compute(&input),
        Err(CostModelError::InvalidInput(_))
    ));
}

#[test]
fn rejects_interest_rate_of_one() {
    let mut input = base_input();
    input.annual_interest_rate = 1.0;
    assert!(matches!(
        compute(&input),
        Err(CostModelError::InvalidInput(_))
    ));
}

#[test]
fn serializes_recommendation_as_lowercase() {
    let out = compute(&base_input()).expect("valid input");
    let json = serde_json::to_string(&out).expect("serialize");
    assert!(json.contains("\"recommendation\":\"rent\""), "json={json}");
}

#[test]
fn input_json_defaults_clamp_to_false() {
    let json = r#"{
        "purchase_price": 150000.0,
        "hours_per_year": 800.0,
        "years_of_ownership": 5,
        "operator_wage_hourly": 50.0,
        "maintenance_cost_per_hour": 15.0,
        "monthly_rental_rate": 4500.0,
        "annual_interest_rate": 0.06,
        "tax_rate": 0.25
    }"#;
    let input: CostModelInput = serde_json::from_str(json).expect("deserialize");
    assert!(!input.clamp_depreciation);
    let out = compute(&input).expect("valid input");
    assert!((out.buy.total_after_tax - 690_250.0).abs() < 1e-6);
}
