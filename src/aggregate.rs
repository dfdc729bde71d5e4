// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Frequency, Kind, Point, TxRecord};
use chrono::{Datelike, Days, Months, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    kind: Kind,
    frequency: Frequency,
    points: Vec<Point>,
}

impl Series {
    pub fn empty(kind: Kind, frequency: Frequency) -> Self {
        Series {
            kind,
            frequency,
            points: Vec::new(),
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    pub fn values(&self) -> impl Iterator<Item = Decimal> + '_ {
        self.points.iter().map(|p| p.amount)
    }

    pub fn total(&self) -> Decimal {
        self.values().fold(Decimal::ZERO, Decimal::saturating_add)
    }

    pub fn mean(&self) -> Option<Decimal> {
        if self.points.is_empty() {
            return None;
        }
        Some(self.total() / Decimal::from(self.points.len()))
    }
}

// Weeks start on Monday, months on the 1st.
pub fn bucket_start(frequency: Frequency, date: NaiveDate) -> NaiveDate {
    match frequency {
        Frequency::Day => date,
        Frequency::Week => date - Days::new(u64::from(date.weekday().num_days_from_monday())),
        Frequency::Month => date - Days::new(u64::from(date.day0())),
    }
}

pub fn next_start(frequency: Frequency, start: NaiveDate) -> Option<NaiveDate> {
    match frequency {
        Frequency::Day => start.checked_add_days(Days::new(1)),
        Frequency::Week => start.checked_add_days(Days::new(7)),
        Frequency::Month => start.checked_add_months(Months::new(1)),
    }
}

pub fn bucket_end(frequency: Frequency, start: NaiveDate) -> Option<NaiveDate> {
    next_start(frequency, start)?.checked_sub_days(Days::new(1))
}

fn fill(frequency: Frequency, sums: &BTreeMap<NaiveDate, Decimal>) -> Vec<Point> {
    let (Some(first), Some(last)) = (sums.keys().next(), sums.keys().next_back()) else {
        return Vec::new();
    };
    let mut points = Vec::new();
    let mut cursor = *first;
    while cursor <= *last {
        points.push(Point {
            start: cursor,
            amount: sums.get(&cursor).copied().unwrap_or(Decimal::ZERO),
        });
        match next_start(frequency, cursor) {
            Some(next) => cursor = next,
            None => break,
        }
    }
    points
}

pub fn daily_series(records: &[TxRecord], kind: Kind) -> Series {
    let mut sums: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for rec in records.iter().filter(|r| r.kind == kind) {
        let sum = sums.entry(rec.date).or_insert(Decimal::ZERO);
        *sum = sum.saturating_add(rec.amount);
    }
    let points = fill(Frequency::Day, &sums);
    debug!(kind = %kind, days = points.len(), "built daily series");
    Series {
        kind,
        frequency: Frequency::Day,
        points,
    }
}

pub fn resample(series: &Series, frequency: Frequency) -> Series {
    if series.frequency == frequency {
        return series.clone();
    }
    let mut sums: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
    for p in &series.points {
        let sum = sums
            .entry(bucket_start(frequency, p.start))
            .or_insert(Decimal::ZERO);
        *sum = sum.saturating_add(p.amount);
    }
    Series {
        kind: series.kind,
        frequency,
        points: fill(frequency, &sums),
    }
}

pub fn aggregate(records: &[TxRecord], kind: Kind, frequency: Frequency) -> Series {
    resample(&daily_series(records, kind), frequency)
}
