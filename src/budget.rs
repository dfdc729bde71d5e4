// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ReportError;
use crate::models::{Kind, TxRecord};
use chrono::Months;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Average expense per category over the trailing `trailing_months`, counted
/// back from the latest expense date rather than today.
pub fn suggest_budget(
    records: &[TxRecord],
    trailing_months: u32,
) -> Result<BTreeMap<String, Decimal>, ReportError> {
    let expenses: Vec<&TxRecord> = records.iter().filter(|r| r.kind == Kind::Expense).collect();
    if !expenses.iter().any(|r| r.category.is_some()) {
        return Err(ReportError::NoCategoryData);
    }

    let Some(latest) = expenses.iter().map(|r| r.date).max() else {
        return Err(ReportError::NoCategoryData);
    };
    let cutoff = latest
        .checked_sub_months(Months::new(trailing_months))
        .unwrap_or(chrono::NaiveDate::MIN);

    let mut sums: BTreeMap<String, (Decimal, u32)> = BTreeMap::new();
    for rec in expenses.iter().filter(|r| r.date >= cutoff) {
        if let Some(cat) = &rec.category {
            let entry = sums.entry(cat.clone()).or_insert((Decimal::ZERO, 0));
            entry.0 += rec.amount;
            entry.1 += 1;
        }
    }

    Ok(sums
        .into_iter()
        .map(|(cat, (total, n))| (cat, total / Decimal::from(n)))
        .collect())
}
