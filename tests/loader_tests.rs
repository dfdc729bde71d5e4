// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{Connection, params};
use rust_decimal::Decimal;
use spendscope::commands::doctor;
use spendscope::db::init_schema;
use spendscope::error::ReportError;
use spendscope::loader::{Collection, MAX_AMOUNT, load_records};
use spendscope::session::Session;
use spendscope::settings::Settings;
use spendscope::models::{Kind, Source};

fn setup() -> Connection {
    let conn = Connection::open_in_memory().unwrap();
    init_schema(&conn).unwrap();
    conn
}

#[test]
fn union_tags_source_and_kind_in_date_order() {
    let conn = setup();
    conn.execute(
        "INSERT INTO upi_transactions(date, amount, category) VALUES ('2025-01-03', '250', 'Food')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO cash_transactions(date, amount) VALUES ('2025-01-01', '40.50')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO daily_savings(date, amount) VALUES ('2025-01-02', '100')",
        [],
    )
    .unwrap();

    let loaded = load_records(&conn).unwrap();
    assert!(loaded.empty_sources.is_empty());
    assert_eq!(loaded.records.len(), 3);

    let first = &loaded.records[0];
    assert_eq!(first.date.to_string(), "2025-01-01");
    assert_eq!(first.source, Some(Source::Cash));
    assert_eq!(first.kind, Kind::Expense);
    assert_eq!(first.amount, Decimal::from_str_exact("40.50").unwrap());

    let second = &loaded.records[1];
    assert_eq!(second.source, None);
    assert_eq!(second.kind, Kind::Savings);

    let third = &loaded.records[2];
    assert_eq!(third.source, Some(Source::Upi));
    assert_eq!(third.category.as_deref(), Some("Food"));
}

#[test]
fn empty_collections_are_reported_and_union_continues() {
    let conn = setup();
    conn.execute(
        "INSERT INTO upi_transactions(date, amount) VALUES ('2025-02-01', '10')",
        [],
    )
    .unwrap();

    let loaded = load_records(&conn).unwrap();
    assert_eq!(loaded.records.len(), 1);
    assert_eq!(
        loaded.empty_sources,
        vec![Collection::CashTransactions, Collection::DailySavings]
    );
}

#[test]
fn missing_amounts_count_as_zero_and_bad_documents_are_rejected() {
    let conn = setup();
    conn.execute(
        "INSERT INTO cash_transactions(date, amount) VALUES ('2025-03-01', NULL)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO cash_transactions(date, amount) VALUES ('not a date', '5')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO cash_transactions(date, amount) VALUES (NULL, '5')",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO cash_transactions(date, amount) VALUES ('2025-03-02', 'lots')",
        [],
    )
    .unwrap();

    let loaded = load_records(&conn).unwrap();
    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.records[0].amount, Decimal::ZERO);
    assert_eq!(loaded.zero_filled_amounts, 1);
    assert_eq!(loaded.rejected, 3);
}

#[test]
fn timestamps_and_numeric_amounts_are_accepted() {
    let conn = setup();
    conn.execute(
        "INSERT INTO daily_savings(date, amount) VALUES (?1, ?2)",
        params!["2025-01-05T10:20:00Z", 12.5_f64],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO daily_savings(date, amount) VALUES (?1, ?2)",
        params!["2025-01-06 08:00:00", 7_i64],
    )
    .unwrap();

    let loaded = load_records(&conn).unwrap();
    assert_eq!(loaded.rejected, 0);
    assert_eq!(loaded.records[0].date.to_string(), "2025-01-05");
    assert_eq!(loaded.records[0].amount, Decimal::from_str_exact("12.5").unwrap());
    assert_eq!(loaded.records[1].amount, Decimal::from(7));
}

#[test]
fn blank_category_is_treated_as_absent() {
    let conn = setup();
    conn.execute(
        "INSERT INTO upi_transactions(date, amount, category) VALUES ('2025-01-01', '1', '  ')",
        [],
    )
    .unwrap();
    let loaded = load_records(&conn).unwrap();
    assert_eq!(loaded.records[0].category, None);
}

#[test]
fn unreachable_store_is_data_unavailable() {
    let conn = Connection::open_in_memory().unwrap();
    let err = load_records(&conn).unwrap_err();
    assert!(matches!(err, ReportError::DataUnavailable(_)));
    assert!(err.is_fatal());
}

#[test]
fn doctor_lists_every_problem() {
    let conn = setup();
    conn.execute(
        "INSERT INTO upi_transactions(date, amount) VALUES ('2025-01-01', NULL)",
        [],
    )
    .unwrap();
    conn.execute(
        "INSERT INTO upi_transactions(date, amount) VALUES ('yesterday', '3')",
        [],
    )
    .unwrap();

    let rows = doctor::find_issues(&conn).unwrap();
    let kinds: Vec<&str> = rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(
        kinds,
        vec!["zero_filled", "rejected", "empty_collection", "empty_collection"]
    );
    assert!(rows[1][1].contains("upi_transactions #2"));
}

#[test]
fn huge_amounts_are_rejected_before_they_reach_the_sums() {
    let conn = setup();
    for amount in ["79228162514264337593543950335", "79228162514264337593543950335", "1e20"] {
        conn.execute(
            "INSERT INTO daily_savings(date, amount) VALUES ('2025-01-01', ?1)",
            params![amount],
        )
        .unwrap();
    }
    conn.execute(
        "INSERT INTO daily_savings(date, amount) VALUES ('2025-01-02', ?1)",
        params![MAX_AMOUNT.to_string()],
    )
    .unwrap();

    let loaded = load_records(&conn).unwrap();
    assert_eq!(loaded.rejected, 3);
    assert_eq!(loaded.records.len(), 1);
    assert_eq!(loaded.records[0].amount, Decimal::from(MAX_AMOUNT));

    let session = Session::new(loaded, Settings::default());
    assert_eq!(session.records().len(), 1);

    let rows = doctor::find_issues(&conn).unwrap();
    let rejected: Vec<&Vec<String>> = rows.iter().filter(|r| r[0] == "rejected").collect();
    assert_eq!(rejected.len(), 3);
    assert!(rejected[0][1].contains("daily_savings #1"));
    assert!(rejected[0][1].contains("exceeds"));
}
