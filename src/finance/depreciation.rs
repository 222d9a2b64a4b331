use serde::{Deserialize, Serialize};

/// 1차 연도 감가상각률 (취득가 대비 정률).
pub const DEPRECIATION_YEAR1_RATE: f64 = 0.20;
/// 2차 연도 이후 연간 감가상각률 (취득가 대비 정률).
pub const DEPRECIATION_YEAR2PLUS_RATE: f64 = 0.12;

/// 감가상각 계산 오류를 표현한다.
#[derive(Debug)]
pub enum DepreciationError {
    /// 입력값이 잘못된 경우
    InvalidInput(&'static str),
}

impl std::fmt::Display for DepreciationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DepreciationError::InvalidInput(msg) => write!(f, "입력 오류: {msg}"),
        }
    }
}

impl std::error::Error for DepreciationError {}

/// 연도별 감가상각 내역.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciationYear {
    /// 경과 연차 (1부터 시작)
    pub year: u32,
    /// 해당 연도 감가상각액 [원]
    pub depreciation: f64,
    /// 연말 장부가 [원]
    pub book_value: f64,
}

/// 감가상각 스케줄 전체.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepreciationSchedule {
    pub entries: Vec<DepreciationYear>,
    /// 누적 감가상각액 [원]
    pub total_depreciation: f64,
    /// 기간 종료 시점 장부가 [원]
    pub final_book_value: f64,
}

/// 취득가 기준 정률 스케줄을 연도별로 계산한다.
///
/// `clamp`가 true면 장부가가 0 아래로 내려가지 않도록 마지막 연도에서
/// 부분 상각하고 이후 연도는 0으로 처리한다. false면 장부가가 음수로
/// 내려갈 수 있다(내용연수를 넘긴 장비의 회계상 잔존가치).
pub fn schedule(
    purchase_price: f64,
    years: u32,
    clamp: bool,
) -> Result<DepreciationSchedule, DepreciationError> {
    if !purchase_price.is_finite() || purchase_price < 0.0 {
        return Err(DepreciationError::InvalidInput(
            "취득가는 0 이상의 유한한 값이어야 합니다.",
        ));
    }
    if years < 1 {
        return Err(DepreciationError::InvalidInput(
            "상각 기간은 1년 이상이어야 합니다.",
        ));
    }

    let mut entries = Vec::with_capacity(years as usize);
    let mut book_value = purchase_price;
    let mut total = 0.0;
    for year in 1..=years {
        let rate = if year == 1 {
            DEPRECIATION_YEAR1_RATE
        } else {
            DEPRECIATION_YEAR2PLUS_RATE
        };
        let mut depreciation = purchase_price * rate;
        if clamp && depreciation > book_value {
            depreciation = book_value.max(0.0);
        }
        book_value -= depreciation;
        total += depreciation;
        entries.push(DepreciationYear {
            year,
            depreciation,
            book_value,
        });
    }

    Ok(DepreciationSchedule {
        entries,
        total_depreciation: total,
        final_book_value: book_value,
    })
}

/// 누적 감가상각 총액만 필요한 경우의 폐형식 계산.
/// `years`는 1 이상이어야 한다(스케줄 계산과 동일한 규칙).
pub fn total_depreciation(purchase_price: f64, years: u32, clamp: bool) -> f64 {
    let years_f = years as f64;
    let total = purchase_price * DEPRECIATION_YEAR1_RATE
        + purchase_price * DEPRECIATION_YEAR2PLUS_RATE * (years_f - 1.0);
    if clamp {
        total.min(purchase_price)
    } else {
        total
    }
}
