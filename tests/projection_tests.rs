// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendscope::aggregate::{Series, aggregate};
use spendscope::error::ReportError;
use spendscope::models::{Frequency, Kind, TxRecord};
use spendscope::projection::{Horizon, predict_next, project};

fn saving(date: &str, amount: i64) -> TxRecord {
    TxRecord {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        amount: Decimal::from(amount),
        category: None,
        source: None,
        kind: Kind::Savings,
    }
}

fn monthly(records: &[TxRecord]) -> Series {
    aggregate(records, Kind::Savings, Frequency::Month)
}

#[test]
fn flat_projection_adds_the_average_each_month() {
    let series = monthly(&[saving("2025-01-15", 100), saving("2025-02-10", 200)]);
    let p = project(&series, Horizon::new(3)).unwrap();

    assert_eq!(p.average, Decimal::from(150));
    assert_eq!(p.last_observed.amount, Decimal::from(200));
    let values: Vec<Decimal> = p.points.iter().map(|pt| pt.amount).collect();
    assert_eq!(
        values,
        vec![Decimal::from(350), Decimal::from(500), Decimal::from(650)]
    );
    let starts: Vec<String> = p.points.iter().map(|pt| pt.start.to_string()).collect();
    assert_eq!(starts, vec!["2025-03-01", "2025-04-01", "2025-05-01"]);
    assert_eq!(p.projected_saving(), Decimal::from(450));
}

#[test]
fn projection_is_deterministic() {
    let series = monthly(&[
        saving("2024-11-03", 70),
        saving("2025-01-20", 10),
        saving("2025-01-21", 15),
    ]);
    let a = project(&series, Horizon::new(6)).unwrap();
    let b = project(&series, Horizon::new(6)).unwrap();
    assert_eq!(a, b);
    assert_eq!(a.points.len(), 6);
}

#[test]
fn zero_filled_months_count_toward_the_average() {
    // Nov 70, Dec 0, Jan 30
    let series = monthly(&[saving("2024-11-03", 70), saving("2025-01-20", 30)]);
    assert_eq!(series.len(), 3);
    let p = project(&series, Horizon::new(1)).unwrap();
    assert_eq!(
        p.average.round_dp(2),
        Decimal::from_str_exact("33.33").unwrap()
    );
    assert_eq!(p.points[0].start.to_string(), "2025-02-01");
}

#[test]
fn single_period_is_insufficient_history() {
    let series = monthly(&[saving("2025-03-01", 10), saving("2025-03-30", 20)]);
    let err = project(&series, Horizon::new(3)).unwrap_err();
    assert!(matches!(
        err,
        ReportError::InsufficientHistory {
            needed: 2,
            found: 1
        }
    ));
    assert!(!err.is_fatal());

    let empty = monthly(&[]);
    assert!(matches!(
        predict_next(&empty),
        Err(ReportError::InsufficientHistory { found: 0, .. })
    ));
}

#[test]
fn horizon_is_clamped_to_one_through_twelve() {
    assert_eq!(Horizon::new(0).months(), 1);
    assert_eq!(Horizon::new(-4).months(), 1);
    assert_eq!(Horizon::new(7).months(), 7);
    assert_eq!(Horizon::new(40).months(), 12);
    assert_eq!(Horizon::default().months(), 3);
}

#[test]
fn next_week_prediction_is_the_weekly_mean() {
    let records = [saving("2025-01-10", 100), saving("2025-02-10", 200)];
    let weekly = aggregate(&records, Kind::Savings, Frequency::Week);
    assert_eq!(weekly.len(), 6);
    assert_eq!(predict_next(&weekly).unwrap(), Decimal::from(50));
    assert_eq!(predict_next(&monthly(&records)).unwrap(), Decimal::from(150));
}
