// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use spendscope::budget::suggest_budget;
use spendscope::error::ReportError;
use spendscope::models::{Kind, Source, TxRecord};

fn expense(date: &str, amount: i64, category: Option<&str>) -> TxRecord {
    TxRecord {
        date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
        amount: Decimal::from(amount),
        category: category.map(str::to_string),
        source: Some(Source::Cash),
        kind: Kind::Expense,
    }
}

#[test]
fn average_per_category() {
    let records = vec![
        expense("2025-03-01", 100, Some("Food")),
        expense("2025-03-10", 200, Some("Food")),
        expense("2025-03-20", 300, Some("Food")),
    ];
    let budget = suggest_budget(&records, 3).unwrap();
    assert_eq!(budget.len(), 1);
    assert_eq!(budget["Food"], Decimal::from(200));
}

#[test]
fn window_is_anchored_to_latest_expense() {
    let records = vec![
        expense("2025-03-14", 1000, Some("Rent")),
        expense("2025-03-15", 40, Some("Rent")),
        expense("2025-05-01", 60, Some("Travel")),
        expense("2025-06-15", 20, Some("Travel")),
        expense("2025-06-01", 500, None),
        TxRecord {
            date: NaiveDate::from_ymd_opt(2025, 12, 31).unwrap(),
            amount: Decimal::from(9999),
            category: Some("Savings jar".into()),
            source: None,
            kind: Kind::Savings,
        },
    ];
    let budget = suggest_budget(&records, 3).unwrap();
    let cats: Vec<&str> = budget.keys().map(|k| k.as_str()).collect();
    assert_eq!(cats, vec!["Rent", "Travel"]);
    assert_eq!(budget["Rent"], Decimal::from(40));
    assert_eq!(budget["Travel"], Decimal::from(40));

    let wider = suggest_budget(&records, 4).unwrap();
    assert_eq!(wider["Rent"], Decimal::from(520));
}

#[test]
fn no_categories_is_reported() {
    let records = vec![expense("2025-01-01", 10, None), expense("2025-01-02", 20, None)];
    assert!(matches!(
        suggest_budget(&records, 3),
        Err(ReportError::NoCategoryData)
    ));
    assert!(matches!(suggest_budget(&[], 3), Err(ReportError::NoCategoryData)));
}
