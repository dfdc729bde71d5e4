// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ReportError;
use crate::models::{Kind, Source, TxRecord};
use crate::utils::{parse_decimal, parse_timestamp};
use rusqlite::Connection;
use rusqlite::types::ValueRef;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Collection {
    UpiTransactions,
    CashTransactions,
    DailySavings,
}

impl Collection {
    pub const ALL: [Collection; 3] = [
        Collection::UpiTransactions,
        Collection::CashTransactions,
        Collection::DailySavings,
    ];

    pub fn table(&self) -> &'static str {
        match self {
            Collection::UpiTransactions => "upi_transactions",
            Collection::CashTransactions => "cash_transactions",
            Collection::DailySavings => "daily_savings",
        }
    }

    pub fn parse(s: &str) -> Option<Collection> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "upi" | "upi_transactions" => Some(Collection::UpiTransactions),
            "cash" | "cash_transactions" => Some(Collection::CashTransactions),
            "savings" | "daily_savings" => Some(Collection::DailySavings),
            _ => None,
        }
    }

    pub fn source(&self) -> Option<Source> {
        match self {
            Collection::UpiTransactions => Some(Source::Upi),
            Collection::CashTransactions => Some(Source::Cash),
            Collection::DailySavings => None,
        }
    }

    pub fn kind(&self) -> Kind {
        match self {
            Collection::DailySavings => Kind::Savings,
            _ => Kind::Expense,
        }
    }

    pub fn has_category(&self) -> bool {
        self.kind() == Kind::Expense
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.table())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AmountField {
    Number(Decimal),
    Text(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct RawDocument {
    pub id: i64,
    pub date: Option<String>,
    pub amount: Option<AmountField>,
    pub category: Option<String>,
}

pub trait RecordStore {
    fn fetch(&self, collection: Collection) -> Result<Vec<RawDocument>, ReportError>;
}

impl RecordStore for Connection {
    fn fetch(&self, collection: Collection) -> Result<Vec<RawDocument>, ReportError> {
        let sql = if collection.has_category() {
            format!(
                "SELECT id, date, amount, category FROM {} ORDER BY id",
                collection.table()
            )
        } else {
            format!(
                "SELECT id, date, amount, NULL FROM {} ORDER BY id",
                collection.table()
            )
        };
        let mut stmt = self.prepare(&sql)?;
        let rows = stmt.query_map([], |r| {
            let id: i64 = r.get(0)?;
            let date = text_of(r.get_ref(1)?);
            let amount = amount_of(r.get_ref(2)?);
            let category = text_of(r.get_ref(3)?);
            Ok(RawDocument {
                id,
                date,
                amount,
                category,
            })
        })?;
        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

fn text_of(v: ValueRef<'_>) -> Option<String> {
    match v {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(i.to_string()),
        ValueRef::Real(f) => Some(f.to_string()),
        ValueRef::Text(t) | ValueRef::Blob(t) => Some(String::from_utf8_lossy(t).into_owned()),
    }
}

fn amount_of(v: ValueRef<'_>) -> Option<AmountField> {
    match v {
        ValueRef::Null => None,
        ValueRef::Integer(i) => Some(AmountField::Number(Decimal::from(i))),
        ValueRef::Real(f) => Some(
            Decimal::try_from(f)
                .map(AmountField::Number)
                .unwrap_or_else(|_| AmountField::Text(f.to_string())),
        ),
        ValueRef::Text(t) | ValueRef::Blob(t) => {
            Some(AmountField::Text(String::from_utf8_lossy(t).into_owned()))
        }
    }
}

// Keeps bucket sums far from Decimal's 96-bit limit.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

#[derive(Debug, Clone, Default)]
pub struct LoadedRecords {
    pub records: Vec<TxRecord>,
    pub empty_sources: Vec<Collection>,
    pub zero_filled_amounts: usize,
    pub rejected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentIssue {
    MissingAmount,
    MissingDate,
    BadDate(String),
    BadAmount(String),
    AmountOutOfRange(Decimal),
}

impl fmt::Display for DocumentIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentIssue::MissingAmount => write!(f, "missing amount (treated as 0)"),
            DocumentIssue::MissingDate => write!(f, "missing date"),
            DocumentIssue::BadDate(s) => write!(f, "unparseable date '{}'", s),
            DocumentIssue::BadAmount(s) => write!(f, "non-numeric amount '{}'", s),
            DocumentIssue::AmountOutOfRange(d) => {
                write!(f, "amount {} exceeds ±{}", d, MAX_AMOUNT)
            }
        }
    }
}

/// Normalize one document. `Err` means the document is rejected; a missing
/// amount is reported alongside the record instead.
pub fn normalize(
    collection: Collection,
    doc: &RawDocument,
) -> Result<(TxRecord, Option<DocumentIssue>), DocumentIssue> {
    let date_raw = doc.date.as_deref().ok_or(DocumentIssue::MissingDate)?;
    let date =
        parse_timestamp(date_raw).ok_or_else(|| DocumentIssue::BadDate(date_raw.to_string()))?;
    let (amount, issue) = match &doc.amount {
        None => (Decimal::ZERO, Some(DocumentIssue::MissingAmount)),
        Some(AmountField::Number(d)) => (*d, None),
        Some(AmountField::Text(s)) if s.trim().is_empty() => {
            (Decimal::ZERO, Some(DocumentIssue::MissingAmount))
        }
        Some(AmountField::Text(s)) => (
            parse_decimal(s.trim()).map_err(|_| DocumentIssue::BadAmount(s.clone()))?,
            None,
        ),
    };
    if amount.abs() > Decimal::from(MAX_AMOUNT) {
        return Err(DocumentIssue::AmountOutOfRange(amount));
    }
    let category = doc
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string);
    Ok((
        TxRecord {
            date,
            amount,
            category,
            source: collection.source(),
            kind: collection.kind(),
        },
        issue,
    ))
}

pub fn load_records(store: &impl RecordStore) -> Result<LoadedRecords, ReportError> {
    let mut loaded = LoadedRecords::default();

    for collection in Collection::ALL {
        let docs = store.fetch(collection)?;
        if docs.is_empty() {
            warn!("{}", ReportError::EmptySource(collection));
            loaded.empty_sources.push(collection);
            continue;
        }
        info!(collection = %collection, documents = docs.len(), "fetched collection");
        for doc in &docs {
            match normalize(collection, doc) {
                Ok((rec, issue)) => {
                    if issue.is_some() {
                        debug!(collection = %collection, id = doc.id, "amount missing, using 0");
                        loaded.zero_filled_amounts += 1;
                    }
                    loaded.records.push(rec);
                }
                Err(issue) => {
                    warn!(collection = %collection, id = doc.id, "skipping document: {}", issue);
                    loaded.rejected += 1;
                }
            }
        }
    }

    loaded.records.sort_by_key(|r| r.date);
    if loaded.zero_filled_amounts > 0 {
        warn!(
            count = loaded.zero_filled_amounts,
            "documents without an amount were counted as 0"
        );
    }
    Ok(loaded)
}
