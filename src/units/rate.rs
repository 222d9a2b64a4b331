use serde::{Deserialize, Serialize};

/// 렌탈 요율 단위. 내부 기준은 청구 시간당 요율(원/h)이다.
/// 기간 환산 계수는 청구 기준(1일=8h, 1주=40h, 1개월=176h)을 따른다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RateUnit {
    PerHour,
    PerDay,
    PerWeek,
    PerMonth,
}

const HOURS_PER_DAY: f64 = 8.0;
const HOURS_PER_WEEK: f64 = 40.0;
const HOURS_PER_MONTH: f64 = 176.0;

fn billed_hours(unit: RateUnit) -> f64 {
    match unit {
        RateUnit::PerHour => 1.0,
        RateUnit::PerDay => HOURS_PER_DAY,
        RateUnit::PerWeek => HOURS_PER_WEEK,
        RateUnit::PerMonth => HOURS_PER_MONTH,
    }
}

/// 주어진 요율을 시간당 요율(원/h)로 변환한다.
pub fn to_per_hour(value: f64, unit: RateUnit) -> f64 {
    value / billed_hours(unit)
}

/// 시간당 요율(원/h)을 원하는 기간 요율로 변환한다.
pub fn from_per_hour(value_per_h: f64, unit: RateUnit) -> f64 {
    value_per_h * billed_hours(unit)
}

/// 요율을 원하는 기간 단위로 변환한다.
pub fn convert_rate(value: f64, from: RateUnit, to: RateUnit) -> f64 {
    let per_hour = to_per_hour(value, from);
    from_per_hour(per_hour, to)
}
