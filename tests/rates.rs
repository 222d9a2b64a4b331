//! 청구 기간/요율 환산 회귀 테스트.

use rental_decision_toolbox::conversion::{self, ConversionError};
use rental_decision_toolbox::quantity::QuantityKind;
use rental_decision_toolbox::units::{convert_duration, convert_rate, DurationUnit, RateUnit};

#[test]
fn month_is_176_billed_hours() {
    let hours = convert_duration(1.0, DurationUnit::Month, DurationUnit::Hour);
    assert!((hours - 176.0).abs() < 1e-9);
}

#[test]
fn weeks_to_days_uses_billing_basis() {
    // 1주=40h, 1일=8h이므로 2주는 10일로 환산된다.
    let days = convert_duration(2.0, DurationUnit::Week, DurationUnit::Day);
    assert!((days - 10.0).abs() < 1e-9);
}

#[test]
fn monthly_rate_to_hourly() {
    let hourly = convert_rate(4_400.0, RateUnit::PerMonth, RateUnit::PerHour);
    assert!((hourly - 25.0).abs() < 1e-9);
}

#[test]
fn hourly_rate_to_weekly() {
    let weekly = convert_rate(100.0, RateUnit::PerHour, RateUnit::PerWeek);
    assert!((weekly - 4_000.0).abs() < 1e-9);
}

#[test]
fn rate_round_trip_preserves_value() {
    let monthly = 9_000_000.0;
    let daily = convert_rate(monthly, RateUnit::PerMonth, RateUnit::PerDay);
    let back = convert_rate(daily, RateUnit::PerDay, RateUnit::PerMonth);
    assert!((back - monthly).abs() < 1e-6);
}

#[test]
fn dispatcher_accepts_short_codes() {
    let v = conversion::convert(QuantityKind::Duration, 1.0, "mo", "h").expect("convert");
    assert!((v - 176.0).abs() < 1e-9);
    let r = conversion::convert(QuantityKind::RentalRate, 176.0, "mo", "h").expect("convert");
    assert!((r - 1.0).abs() < 1e-9);
}

#[test]
fn dispatcher_accepts_korean_aliases() {
    let v = conversion::convert(QuantityKind::Duration, 1.0, "개월", "시간").expect("convert");
    assert!((v - 176.0).abs() < 1e-9);
    let d = conversion::convert(QuantityKind::Duration, 1.0, "주", "일").expect("convert");
    assert!((d - 5.0).abs() < 1e-9);
}

#[test]
fn dispatcher_rejects_unknown_unit() {
    let err = conversion::convert(QuantityKind::Duration, 1.0, "fortnight", "h");
    assert!(matches!(err, Err(ConversionError::UnknownUnit(_))));
}
