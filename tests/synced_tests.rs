use ranch_core::errors::PlanningError;
use ranch_core::planning::{SyncedAmount, SyncedField};

#[test]
fn daily_edit_drives_monthly_and_yearly() {
    let mut amount = SyncedAmount::default();
    amount.set(SyncedField::Daily, 2.0).expect("set");
    assert!((amount.daily - 2.0).abs() < f64::EPSILON);
    assert!((amount.monthly - 60.0).abs() < f64::EPSILON);
    assert!((amount.yearly - 730.0).abs() < f64::EPSILON);
}

#[test]
fn monthly_edit_drives_daily_and_yearly() {
    let mut amount = SyncedAmount::default();
    amount.set(SyncedField::Monthly, 60.0).expect("set");
    assert!((amount.daily - 2.0).abs() < f64::EPSILON);
    assert!((amount.yearly - 720.0).abs() < f64::EPSILON);
}

#[test]
fn yearly_edit_drives_daily_and_monthly() {
    let mut amount = SyncedAmount::default();
    amount.set(SyncedField::Yearly, 730.0).expect("set");
    assert!((amount.daily - 2.0).abs() < f64::EPSILON);
    assert!((amount.monthly - 730.0 / 12.0).abs() < f64::EPSILON);
}

#[test]
fn last_edit_wins_over_previous_values() {
    let mut amount = SyncedAmount::default();
    amount.set(SyncedField::Daily, 2.0).expect("set");
    amount.set(SyncedField::Monthly, 90.0).expect("set");
    // The monthly edit is authoritative; daily and yearly are recomputed
    // from it, not from the earlier daily edit.
    assert!((amount.monthly - 90.0).abs() < f64::EPSILON);
    assert!((amount.daily - 3.0).abs() < f64::EPSILON);
    assert!((amount.yearly - 1080.0).abs() < f64::EPSILON);
}

#[test]
fn repeated_edits_of_the_same_field_do_not_drift() {
    let mut amount = SyncedAmount::default();
    amount.set(SyncedField::Monthly, 90.0).expect("set");
    amount.set(SyncedField::Monthly, 90.0).expect("set");
    assert!((amount.monthly - 90.0).abs() < f64::EPSILON);
    assert!((amount.daily - 3.0).abs() < f64::EPSILON);
}

#[test]
fn negative_edit_is_rejected_and_state_is_unchanged() {
    let mut amount = SyncedAmount::default();
    amount.set(SyncedField::Daily, 2.0).expect("set");
    let err = amount.set(SyncedField::Monthly, -1.0).unwrap_err();
    assert!(matches!(err, PlanningError::InvalidInput(_)));
    assert!((amount.monthly - 60.0).abs() < f64::EPSILON);
}
