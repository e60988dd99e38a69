//! Unit tests for the diagnostic sweeps
//!
//! Runs the sweeps on coarse grids and checks the pass/fail logic of the
//! reports.

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn round_trip_sweep_counts_every_step() {
    let report = check_round_trips(SWEEP_LIMIT / 4);

    assert_eq!(report.checked, 5);
    assert!(report.passed());
    assert_eq!(report.first_failure, None);
}

#[test]
fn zero_step_is_treated_as_one() {
    let report = check_round_trips(0);
    assert_eq!(report.checked, u64::from(SWEEP_LIMIT) + 1);
}

#[test]
fn multiplication_sweep_on_exact_grid() {
    // multiples of NORM / 2 multiply without rounding
    let step = Volume::NORM.raw() / 2;
    let report = check_multiplication(step, step, 0);

    assert_eq!(report.pairs, 5 * 4);
    assert_eq!(report.identity_failures, 0);
    assert!(report.max_linear_deviation <= 1);
    assert!(report.max_db_deviation <= 1);
}

#[test]
fn multiplication_report_enforces_mismatch_budget() {
    let report = MultiplicationReport {
        mismatches: 10,
        max_mismatches: 9,
        ..MultiplicationReport::default()
    };
    assert!(!report.passed());

    let report = MultiplicationReport {
        max_mismatches: 10,
        ..report
    };
    assert!(report.passed());
}

#[test]
fn multiplication_report_enforces_deviation() {
    let report = MultiplicationReport {
        max_db_deviation: 2,
        max_mismatches: u64::MAX,
        ..MultiplicationReport::default()
    };
    assert!(!report.passed());
}

#[test]
fn balance_sweep_on_coarse_grid() {
    let report = check_balance(Volume::NORM.raw() / 2);

    // 5 x 5 pairs minus the muted one, 11 targets each
    assert_eq!(report.checked, 24 * 11);
    assert_eq!(report.out_of_tolerance, 0);
    assert_eq!(report.muted_not_centered, 0);
    assert!(report.passed());
}

#[test]
fn balance_tolerance_is_asymmetric() {
    let wanted = Balance::new(0.0).unwrap();

    assert!(balance_within_tolerance(wanted, Balance::new(-0.05).unwrap()));
    assert!(!balance_within_tolerance(wanted, Balance::new(-0.06).unwrap()));
    assert!(balance_within_tolerance(wanted, Balance::new(0.5).unwrap()));
    assert!(!balance_within_tolerance(wanted, Balance::new(0.51).unwrap()));
}

#[test]
fn sweep_summary_reports_failures() {
    let mut report = SweepReport::default();
    assert!(report.passed());
    assert!(!report.summary().contains("FAILED"));

    report.balance.out_of_tolerance = 3;
    assert!(!report.passed());
    assert!(report.summary().contains("balance:        FAILED"));
}

#[test]
fn run_uses_configured_steps() {
    let config = DiagnosticsConfig {
        round_trip_step: SWEEP_LIMIT,
        multiply_step_a: SWEEP_LIMIT,
        multiply_step_b: SWEEP_LIMIT,
        balance_step: SWEEP_LIMIT,
        max_mismatches: 0,
    };

    let report = run(&config);

    assert_eq!(report.round_trip.checked, 2);
    assert_eq!(report.multiplication.pairs, 2);
    assert_eq!(report.balance.checked, 3 * 11);
    assert!(report.passed());
}
