use ranch_core::errors::PlanningError;
use ranch_core::planning::{aggregate_expenses, ExpenseLine, Period, PeriodAmount};

fn line(label: &str, value: f64, period: Period) -> ExpenseLine {
    ExpenseLine::new(label, PeriodAmount::new(value, period).expect("amount"))
}

#[test]
fn empty_list_yields_zero_totals() {
    let totals = aggregate_expenses(&[]).expect("totals");
    assert!((totals.monthly).abs() < f64::EPSILON);
    assert!((totals.quarterly).abs() < f64::EPSILON);
    assert!((totals.annual).abs() < f64::EPSILON);
}

#[test]
fn mixed_periods_normalize_through_one_quarterly_total() {
    let lines = vec![
        line("Insurance", 1200.0, Period::Annual),
        line("Rent", 300.0, Period::Monthly),
    ];
    let totals = aggregate_expenses(&lines).expect("totals");
    assert!((totals.quarterly - 1200.0).abs() < f64::EPSILON);
    assert!((totals.monthly - 400.0).abs() < f64::EPSILON);
    assert!((totals.annual - 4800.0).abs() < f64::EPSILON);
}

#[test]
fn aggregation_is_order_independent() {
    let forward = vec![
        line("Insurance", 1200.0, Period::Annual),
        line("Rent", 300.0, Period::Monthly),
        line("Base Electric", 450.0, Period::Quarterly),
        line("Base Water", 90.0, Period::Monthly),
    ];
    let mut reversed = forward.clone();
    reversed.reverse();
    let a = aggregate_expenses(&forward).expect("totals");
    let b = aggregate_expenses(&reversed).expect("totals");
    assert!((a.quarterly - b.quarterly).abs() < f64::EPSILON);
    assert!((a.monthly - b.monthly).abs() < f64::EPSILON);
    assert!((a.annual - b.annual).abs() < f64::EPSILON);
}

#[test]
fn description_is_carried_but_never_summed() {
    let described = line("Maintenance", 800.0, Period::Annual)
        .with_description("fence repairs and arena footing");
    let bare = line("Maintenance", 800.0, Period::Annual);
    let a = aggregate_expenses(&[described]).expect("totals");
    let b = aggregate_expenses(&[bare]).expect("totals");
    assert!((a.quarterly - b.quarterly).abs() < f64::EPSILON);
}

#[test]
fn negative_line_rejects_the_whole_aggregation() {
    let lines = vec![
        line("Rent", 300.0, Period::Monthly),
        ExpenseLine::new(
            "Bad",
            PeriodAmount {
                value: -1.0,
                period: Period::Monthly,
            },
        ),
    ];
    assert!(matches!(
        aggregate_expenses(&lines),
        Err(PlanningError::InvalidInput(_))
    ));
}
