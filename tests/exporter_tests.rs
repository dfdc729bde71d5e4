// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendscope::aggregate::aggregate;
use spendscope::commands::exporter::write_series;
use spendscope::models::{Frequency, Kind, Source, TxRecord};
use tempfile::tempdir;

fn expenses() -> Vec<TxRecord> {
    ["2025-01-20", "2025-03-02"]
        .iter()
        .map(|d| TxRecord {
            date: NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap(),
            amount: Decimal::from(100),
            category: None,
            source: Some(Source::Cash),
            kind: Kind::Expense,
        })
        .collect()
}

#[test]
fn csv_export_writes_zero_filled_buckets() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("monthly.csv");
    let series = aggregate(&expenses(), Kind::Expense, Frequency::Month);

    write_series(&series, "csv", out.to_str().unwrap()).unwrap();

    let text = std::fs::read_to_string(&out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "period_start,period_end,amount",
            "2025-01-01,2025-01-31,100",
            "2025-02-01,2025-02-28,0",
            "2025-03-01,2025-03-31,100",
        ]
    );
}

#[test]
fn json_export_has_one_object_per_bucket() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("weekly.json");
    let series = aggregate(&expenses(), Kind::Expense, Frequency::Week);

    write_series(&series, "json", out.to_str().unwrap()).unwrap();

    let v: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
    let items = v.as_array().unwrap();
    assert_eq!(items.len(), series.len());
    assert_eq!(items[0]["period_start"], "2025-01-20");
    assert_eq!(items[0]["period_end"], "2025-01-26");
}

#[test]
fn unknown_format_is_an_error() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("x.xml");
    let series = aggregate(&expenses(), Kind::Expense, Frequency::Month);
    assert!(write_series(&series, "xml", out.to_str().unwrap()).is_err());
    assert!(!out.exists());
}
