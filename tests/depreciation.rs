use rental_decision_toolbox::finance::depreciation::{
    schedule, total_depreciation, DepreciationError,
};

#[test]
fn five_year_schedule_matches_hand_calc() {
    let s = schedule(150_000.0, 5, false).expect("schedule");
    let deps: Vec<f64> = s.entries.iter().map(|e| e.depreciation).collect();
    assert_eq!(deps.len(), 5);
    assert!((deps[0] - 30_000.0).abs() < 1e-9);
    for dep in &deps[1..] {
        assert!((dep - 18_000.0).abs() < 1e-9);
    }
    assert!((s.total_depreciation - 102_000.0).abs() < 1e-9);
    assert!((s.final_book_value - 48_000.0).abs() < 1e-9);
}

#[test]
fn unclamped_total_matches_closed_form() {
    for years in [1, 2, 5, 10, 25] {
        let s = schedule(100_000.0, years, false).expect("schedule");
        let expected = total_depreciation(100_000.0, years, false);
        assert!(
            (s.total_depreciation - expected).abs() < 1e-6,
            "years={years} schedule={} closed={}",
            s.total_depreciation,
            expected
        );
    }
}

#[test]
fn unclamped_book_value_goes_negative_past_full_write_off() {
    // 20% + 12%*9 = 128%: 8년차 이후 장부가가 음수로 내려간다.
    let s = schedule(100_000.0, 10, false).expect("schedule");
    assert!(s.final_book_value < 0.0);
    assert!(s.total_depreciation > 100_000.0);
}

#[test]
fn clamped_schedule_floors_book_value_at_zero() {
    let s = schedule(100_000.0, 10, true).expect("schedule");
    // 1년차 20,000 + 2~7년차 12,000씩 = 92,000이므로 8년차는 8,000만 상각된다.
    assert!((s.entries[7].depreciation - 8_000.0).abs() < 1e-9);
    assert_eq!(s.entries[8].depreciation, 0.0);
    assert_eq!(s.entries[9].depreciation, 0.0);
    assert!((s.total_depreciation - 100_000.0).abs() < 1e-9);
    assert!(s.final_book_value.abs() < 1e-9);
    for entry in &s.entries {
        assert!(entry.book_value >= -1e-9, "year={} book={}", entry.year, entry.book_value);
    }
}

#[test]
fn clamped_total_matches_closed_form() {
    for years in [1, 5, 8, 10, 30] {
        let s = schedule(100_000.0, years, true).expect("schedule");
        let expected = total_depreciation(100_000.0, years, true);
        assert!(
            (s.total_depreciation - expected).abs() < 1e-6,
            "years={years} schedule={} closed={}",
            s.total_depreciation,
            expected
        );
    }
}

#[test]
fn rejects_zero_years() {
    assert!(matches!(
        schedule(100_000.0, 0, false),
        Err(DepreciationError::InvalidInput(_))
    ));
}

#[test]
fn rejects_negative_price() {
    assert!(matches!(
        schedule(-1.0, 5, false),
        Err(DepreciationError::InvalidInput(_))
    ));
}
