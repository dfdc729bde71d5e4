// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    #[serde(rename = "UPI")]
    Upi,
    Cash,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Upi => write!(f, "UPI"),
            Source::Cash => write!(f, "Cash"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Kind {
    Expense,
    Savings,
}

impl Kind {
    pub fn parse(s: &str) -> Option<Kind> {
        match s.trim().to_ascii_lowercase().as_str() {
            "expense" | "expenses" => Some(Kind::Expense),
            "saving" | "savings" => Some(Kind::Savings),
            _ => None,
        }
    }

    pub fn plural(&self) -> &'static str {
        match self {
            Kind::Expense => "Expenses",
            Kind::Savings => "Savings",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kind::Expense => write!(f, "Expense"),
            Kind::Savings => write!(f, "Savings"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Frequency {
    Day,
    Week,
    Month,
}

impl Frequency {
    pub fn parse(s: &str) -> Option<Frequency> {
        match s.trim().to_ascii_lowercase().as_str() {
            "d" | "day" | "daily" => Some(Frequency::Day),
            "w" | "week" | "weekly" => Some(Frequency::Week),
            "m" | "month" | "monthly" => Some(Frequency::Month),
            _ => None,
        }
    }

    pub fn adjective(&self) -> &'static str {
        match self {
            Frequency::Day => "Daily",
            Frequency::Week => "Weekly",
            Frequency::Month => "Monthly",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TxRecord {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: Option<String>,
    pub source: Option<Source>,
    pub kind: Kind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub start: NaiveDate,
    pub amount: Decimal,
}
