use serde::{Deserialize, Serialize};

/// 렌탈 사업 수익성(ROI) 입력. 금액 단위는 [원].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiInput {
    /// 장비 구매 가격 [원]
    pub purchase_price: f64,
    /// 명목 월 렌탈료 [원/월] (가동률 100% 기준)
    pub monthly_rental_rate: f64,
    /// 기대 가동률 (0 ~ 1)
    pub utilization_rate: f64,
    /// 월 고정 지출 [원/월] (정비/보관/보험 등)
    pub monthly_operating_cost: f64,
}

/// 렌탈 사업 수익성 결과.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoiResult {
    /// 가동률을 반영한 실효 월 매출 [원/월]
    pub effective_monthly_revenue: f64,
    /// 월 순수익 [원/월]
    pub net_monthly_income: f64,
    /// 단순 회수기간 [개월]. 월 순수익이 0 이하면 무한대.
    pub payback_months: f64,
    /// 연환산 수익률 [%] (구매가 대비)
    pub annual_return_percent: f64,
    /// 월 지출을 충당하는 손익분기 가동률.
    /// 1을 넘으면 현재 렌탈료로는 손익분기에 도달할 수 없다는 뜻이다.
    pub break_even_utilization: f64,
}

/// ROI 계산 오류를 표현한다.
#[derive(Debug)]
pub enum RoiError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for RoiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RoiError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for RoiError {}

/// 가동률 보정 월 매출을 기준으로 수익성 지표를 계산한다.
pub fn compute_roi(input: &RoiInput) -> Result<RoiResult, RoiError> {
    if !input.purchase_price.is_finite() || input.purchase_price <= 0.0 {
        return Err(RoiError::InvalidInput("구매 가격은 0보다 커야 합니다."));
    }
    if !input.monthly_rental_rate.is_finite() || input.monthly_rental_rate < 0.0 {
        return Err(RoiError::InvalidInput(
            "월 렌탈료는 0 이상의 유한한 값이어야 합니다.",
        ));
    }
    if !input.utilization_rate.is_finite()
        || input.utilization_rate < 0.0
        || input.utilization_rate > 1.0
    {
        return Err(RoiError::InvalidInput("가동률은 0 이상 1 이하여야 합니다."));
    }
    if !input.monthly_operating_cost.is_finite() || input.monthly_operating_cost < 0.0 {
        return Err(RoiError::InvalidInput(
            "월 고정 지출은 0 이상의 유한한 값이어야 합니다.",
        ));
    }

    let effective_monthly_revenue = input.monthly_rental_rate * input.utilization_rate;
    let net_monthly_income = effective_monthly_revenue - input.monthly_operating_cost;
    let payback_months = if net_monthly_income > 0.0 {
        input.purchase_price / net_monthly_income
    } else {
        f64::INFINITY
    };
    let annual_return_percent = net_monthly_income * 12.0 / input.purchase_price * 100.0;
    let break_even_utilization = if input.monthly_rental_rate > 0.0 {
        input.monthly_operating_cost / input.monthly_rental_rate
    } else {
        f64::INFINITY
    };

    Ok(RoiResult {
        effective_monthly_revenue,
        net_monthly_income,
        payback_months,
        annual_return_percent,
        break_even_utilization,
    })
}
