use ranch_core::errors::PlanningError;
use ranch_core::planning::{
    to_annual, to_daily, to_monthly, to_quarterly, Period, PeriodAmount, PeriodTotals,
};

#[test]
fn annual_converts_down_with_fixed_ratios() {
    let insurance = PeriodAmount::annual(1200.0).expect("amount");
    assert!((to_quarterly(&insurance).unwrap() - 300.0).abs() < f64::EPSILON);
    assert!((to_monthly(&insurance).unwrap() - 100.0).abs() < f64::EPSILON);
    assert!((to_annual(&insurance).unwrap() - 1200.0).abs() < f64::EPSILON);
}

#[test]
fn monthly_converts_up_with_fixed_ratios() {
    let rent = PeriodAmount::monthly(300.0).expect("amount");
    assert!((to_quarterly(&rent).unwrap() - 900.0).abs() < f64::EPSILON);
    assert!((to_annual(&rent).unwrap() - 3600.0).abs() < f64::EPSILON);
}

#[test]
fn quarterly_to_quarterly_is_identity() {
    let amount = PeriodAmount::quarterly(750.0).expect("amount");
    assert!((to_quarterly(&amount).unwrap() - 750.0).abs() < f64::EPSILON);
}

#[test]
fn daily_uses_thirty_day_month_and_365_day_year() {
    let feed = PeriodAmount::daily(2.0).expect("amount");
    assert!((to_monthly(&feed).unwrap() - 60.0).abs() < f64::EPSILON);
    // Quarterly goes through the 30-day month, not the 365-day year.
    assert!((to_quarterly(&feed).unwrap() - 180.0).abs() < f64::EPSILON);
    assert!((to_annual(&feed).unwrap() - 730.0).abs() < f64::EPSILON);
}

#[test]
fn monthly_and_annual_convert_back_to_daily() {
    let monthly = PeriodAmount::monthly(60.0).expect("amount");
    assert!((to_daily(&monthly).unwrap() - 2.0).abs() < f64::EPSILON);
    let annual = PeriodAmount::annual(730.0).expect("amount");
    assert!((to_daily(&annual).unwrap() - 2.0).abs() < f64::EPSILON);
}

#[test]
fn quarterly_round_trip_is_exact() {
    let original = PeriodAmount::quarterly(1200.0).expect("amount");
    let monthly = to_monthly(&original).unwrap();
    let back = to_quarterly(&PeriodAmount::monthly(monthly).expect("amount")).unwrap();
    assert!((back - 1200.0).abs() < f64::EPSILON);
}

#[test]
fn negative_amount_is_rejected_at_construction() {
    let err = PeriodAmount::new(-1.0, Period::Monthly).unwrap_err();
    assert!(matches!(err, PlanningError::InvalidInput(_)));
}

#[test]
fn negative_amount_is_rejected_at_conversion() {
    let amount = PeriodAmount {
        value: -5.0,
        period: Period::Annual,
    };
    assert!(matches!(
        to_quarterly(&amount),
        Err(PlanningError::InvalidInput(_))
    ));
    assert!(matches!(
        to_daily(&amount),
        Err(PlanningError::InvalidInput(_))
    ));
}

#[test]
fn totals_derive_from_a_single_quarterly_basis() {
    let totals = PeriodTotals::from_quarterly(1200.0);
    assert!((totals.monthly - 400.0).abs() < f64::EPSILON);
    assert!((totals.quarterly - 1200.0).abs() < f64::EPSILON);
    assert!((totals.annual - 4800.0).abs() < f64::EPSILON);
}

#[test]
fn totals_derive_from_a_single_monthly_basis() {
    let totals = PeriodTotals::from_monthly(2400.0);
    assert!((totals.quarterly - 7200.0).abs() < f64::EPSILON);
    assert!((totals.annual - 28800.0).abs() < f64::EPSILON);
}
