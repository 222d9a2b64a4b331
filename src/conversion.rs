use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열은 `h`, `d`, `w`, `mo` 같은 축약형과 `시간`, `일`, `주`,
/// `개월` 같은 한글 표기를 모두 지원한다. 요율도 동일한 기간 표기를 쓴다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Duration => {
            let from = parse_duration_unit(from_unit_str)?;
            let to = parse_duration_unit(to_unit_str)?;
            Ok(convert_duration(value, from, to))
        }
        QuantityKind::RentalRate => {
            let from = parse_rate_unit(from_unit_str)?;
            let to = parse_rate_unit(to_unit_str)?;
            Ok(convert_rate(value, from, to))
        }
    }
}

/// 기간 단위 문자열을 파싱한다. CLI/GUI 공용.
pub fn parse_duration_unit(s: &str) -> Result<DurationUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "h" | "hr" | "hour" | "시간" => Ok(DurationUnit::Hour),
        "d" | "day" | "일" => Ok(DurationUnit::Day),
        "w" | "wk" | "week" | "주" => Ok(DurationUnit::Week),
        "mo" | "mon" | "month" | "월" | "개월" => Ok(DurationUnit::Month),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

/// 요율 단위 문자열을 파싱한다. 기간 표기와 같은 축약형을 쓴다.
pub fn parse_rate_unit(s: &str) -> Result<RateUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "h" | "hr" | "hour" | "시간" | "시간당" => Ok(RateUnit::PerHour),
        "d" | "day" | "일" | "일당" => Ok(RateUnit::PerDay),
        "w" | "wk" | "week" | "주" | "주당" => Ok(RateUnit::PerWeek),
        "mo" | "mon" | "month" | "월" | "개월" | "월당" => Ok(RateUnit::PerMonth),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
