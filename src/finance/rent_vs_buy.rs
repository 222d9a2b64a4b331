use serde::{Deserialize, Serialize};

use crate::finance::depreciation;

/// 연간 표준 근로 시간 [h/년]. 보유 시나리오의 전담 운전원 인건비 산정 기준.
pub const STANDARD_WORK_HOURS_PER_YEAR: f64 = 2080.0;
/// 렌탈 1개월로 청구되는 가동 시간 [h] (8시간 × 22일).
pub const RENTAL_MONTH_HOURS: f64 = 176.0;
/// 연간 보험료율 (구매가 대비, 구매 시나리오에만 적용).
pub const INSURANCE_RATE_ANNUAL: f64 = 0.015;

/// 렌트/구매 비교 계산 오류를 표현한다.
#[derive(Debug)]
pub enum CostModelError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for CostModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostModelError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for CostModelError {}

/// 렌트/구매 비교 입력. 금액 단위는 [원].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CostModelInput {
    /// 장비 구매 가격 [원]
    pub purchase_price: f64,
    /// 연간 가동 시간 [h] (0 ~ 2080)
    pub hours_per_year: f64,
    /// 비교 기간 [년] (1 이상)
    pub years_of_ownership: u32,
    /// 운전원 시급 [원/h] (제수당 포함 총인건비 기준)
    pub operator_wage_hourly: f64,
    /// 시간당 정비비 [원/h] (구매 시나리오에만 적용)
    pub maintenance_cost_per_hour: f64,
    /// 월 렌탈료 [원/월]
    pub monthly_rental_rate: f64,
    /// 연이율 (0 이상 1 미만, 0이면 현금 구매)
    pub annual_interest_rate: f64,
    /// 유효 세율 (0 이상 1 미만)
    pub tax_rate: f64,
    /// 누적 감가상각을 구매가 이내로 제한할지 여부.
    /// false면 장기 보유 시 잔존가치가 음수가 될 수 있다.
    #[serde(default)]
    pub clamp_depreciation: bool,
}

/// 구매 시나리오 비용 내역 [원].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyBreakdown {
    pub operator_cost: f64,
    pub maintenance_cost: f64,
    pub insurance_cost: f64,
    pub financing_cost: f64,
    pub total_depreciation: f64,
    pub resale_value: f64,
    pub tax_savings: f64,
    pub total_before_tax: f64,
    pub total_after_tax: f64,
}

/// 렌탈 시나리오 비용 내역 [원].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RentBreakdown {
    pub rental_months_per_year: f64,
    pub rental_cost: f64,
    pub operator_cost: f64,
    pub tax_savings: f64,
    pub total_before_tax: f64,
    pub total_after_tax: f64,
}

/// 비교 권고.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Rent,
    Buy,
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Recommendation::Rent => write!(f, "rent"),
            Recommendation::Buy => write!(f, "buy"),
        }
    }
}

/// 렌트/구매 비교 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostModelOutput {
    /// 가동률 (연간 가동 시간 / 2080)
    pub utilization_rate: f64,
    pub buy: BuyBreakdown,
    pub rent: RentBreakdown,
    /// 세전 총액 차이 [원] (참고용, 권고에는 사용하지 않는다)
    pub savings_before_tax: f64,
    /// 세후 총액 차이 [원] (구매 − 렌탈, 양수면 렌탈이 유리)
    pub savings: f64,
    /// 절감률 [%]. 기준은 항상 구매 시나리오 세후 총액이다.
    pub savings_percent: f64,
    pub recommendation: Recommendation,
}

/// 입력을 검증한 뒤 구매/렌탈 시나리오의 총소유비용을 비교한다.
///
/// 검증에 실패하면 어떤 산술도 수행하지 않고 `InvalidInput`을 반환한다.
/// 잘못된 필드를 0으로 대체해 계산하면 권고가 반대로 뒤집힐 수 있으므로
/// 기본값 대체는 하지 않는다.
pub fn compute(input: &CostModelInput) -> Result<CostModelOutput, CostModelError> {
    validate(input)?;

    let years = input.years_of_ownership as f64;
    let utilization_rate = input.hours_per_year / STANDARD_WORK_HOURS_PER_YEAR;

    // 구매 시나리오.
    // 보유 장비는 가동률과 무관하게 전담 운전원을 상시 고용한다고 가정한다.
    // (렌탈 시나리오의 가동 시간 비례 인건비와 의도된 비대칭)
    let buy_operator_cost = STANDARD_WORK_HOURS_PER_YEAR * input.operator_wage_hourly * years;
    let maintenance_cost = input.hours_per_year * years * input.maintenance_cost_per_hour;
    let insurance_cost = input.purchase_price * INSURANCE_RATE_ANNUAL * years;
    let total_depreciation = depreciation::total_depreciation(
        input.purchase_price,
        input.years_of_ownership,
        input.clamp_depreciation,
    );
    let resale_value = input.purchase_price - total_depreciation;
    // 평균 잔액 근사: 상환 스케줄 대신 (구매가/2)에 이율을 적용한다.
    let financing_cost = (input.purchase_price / 2.0) * input.annual_interest_rate * years;
    let buy_total_before_tax = input.purchase_price
        + buy_operator_cost
        + maintenance_cost
        + insurance_cost
        + financing_cost
        - resale_value;
    let buy_tax_savings = total_depreciation * input.tax_rate;
    let buy_total_after_tax = buy_total_before_tax - buy_tax_savings;

    // 렌탈 시나리오.
    let rental_months_per_year = input.hours_per_year / RENTAL_MONTH_HOURS;
    let rental_cost = input.monthly_rental_rate * rental_months_per_year * years;
    let rent_operator_cost = input.hours_per_year * input.operator_wage_hourly * years;
    let rent_total_before_tax = rental_cost + rent_operator_cost;
    // 렌탈료는 전액 비용 처리 가능하다고 가정한다.
    let rent_tax_savings = rental_cost * input.tax_rate;
    let rent_total_after_tax = rent_total_before_tax - rent_tax_savings;

    // 비교는 항상 세후 총액 기준. savings == 0이면 구매 쪽으로 권고한다.
    let savings_before_tax = buy_total_before_tax - rent_total_before_tax;
    let savings = buy_total_after_tax - rent_total_after_tax;
    let savings_percent = if buy_total_after_tax > 0.0 {
        savings.abs() / buy_total_after_tax * 100.0
    } else {
        0.0
    };
    let recommendation = if savings > 0.0 {
        Recommendation::Rent
    } else {
        Recommendation::Buy
    };

    Ok(CostModelOutput {
        utilization_rate,
        buy: BuyBreakdown {
            operator_cost: buy_operator_cost,
            maintenance_cost,
            insurance_cost,
            financing_cost,
            total_depreciation,
            resale_value,
            tax_savings: buy_tax_savings,
            total_before_tax: buy_total_before_tax,
            total_after_tax: buy_total_after_tax,
        },
        rent: RentBreakdown {
            rental_months_per_year,
            rental_cost,
            operator_cost: rent_operator_cost,
            tax_savings: rent_tax_savings,
            total_before_tax: rent_total_before_tax,
            total_after_tax: rent_total_after_tax,
        },
        savings_before_tax,
        savings,
        savings_percent,
        recommendation,
    })
}

fn validate(input: &CostModelInput) -> Result<(), CostModelError> {
    if !input.purchase_price.is_finite() || input.purchase_price < 0.0 {
        return Err(CostModelError::InvalidInput(
            "구매 가격은 0 이상의 유한한 값이어야 합니다.",
        ));
    }
    if !input.hours_per_year.is_finite()
        || input.hours_per_year < 0.0
        || input.hours_per_year > STANDARD_WORK_HOURS_PER_YEAR
    {
        return Err(CostModelError::InvalidInput(
            "연간 가동 시간은 0 이상 2080 이하여야 합니다.",
        ));
    }
    if input.years_of_ownership < 1 {
        return Err(CostModelError::InvalidInput(
            "비교 기간은 1년 이상이어야 합니다.",
        ));
    }
    if !input.operator_wage_hourly.is_finite() || input.operator_wage_hourly < 0.0 {
        return Err(CostModelError::InvalidInput(
            "운전원 시급은 0 이상의 유한한 값이어야 합니다.",
        ));
    }
    if !input.maintenance_cost_per_hour.is_finite() || input.maintenance_cost_per_hour < 0.0 {
        return Err(CostModelError::InvalidInput(
            "시간당 정비비는 0 이상의 유한한 값이어야 합니다.",
        ));
    }
    if !input.monthly_rental_rate.is_finite() || input.monthly_rental_rate < 0.0 {
        return Err(CostModelError::InvalidInput(
            "월 렌탈료는 0 이상의 유한한 값이어야 합니다.",
        ));
    }
    if !input.annual_interest_rate.is_finite()
        || input.annual_interest_rate < 0.0
        || input.annual_interest_rate >= 1.0
    {
        return Err(CostModelError::InvalidInput(
            "연이율은 0 이상 1 미만이어야 합니다.",
        ));
    }
    if !input.tax_rate.is_finite() || input.tax_rate < 0.0 || input.tax_rate >= 1.0 {
        return Err(CostModelError::InvalidInput(
            "유효 세율은 0 이상 1 미만이어야 합니다.",
        ));
    }
    Ok(())
}
