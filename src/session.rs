// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{Series, daily_series, resample};
use crate::budget::suggest_budget;
use crate::error::ReportError;
use crate::loader::{Collection, LoadedRecords, RecordStore, load_records};
use crate::models::{Frequency, Kind, TxRecord};
use crate::projection::{Horizon, Projection, predict_next, project};
use crate::settings::Settings;
use anyhow::{Context, Result};
use rusqlite::Connection;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::info;

#[derive(Debug, Clone)]
pub struct Session {
    records: Vec<TxRecord>,
    expenses: Series,
    savings: Series,
    settings: Settings,
    empty_sources: Vec<Collection>,
}

impl Session {
    pub fn new(loaded: LoadedRecords, settings: Settings) -> Self {
        let expenses = daily_series(&loaded.records, Kind::Expense);
        let savings = daily_series(&loaded.records, Kind::Savings);
        info!(
            records = loaded.records.len(),
            expense_days = expenses.len(),
            savings_days = savings.len(),
            "session ready"
        );
        Session {
            records: loaded.records,
            expenses,
            savings,
            settings,
            empty_sources: loaded.empty_sources,
        }
    }

    pub fn from_store(store: &impl RecordStore, settings: Settings) -> Result<Self, ReportError> {
        Ok(Session::new(load_records(store)?, settings))
    }

    pub fn open(conn: &Connection) -> Result<Self> {
        let settings = Settings::load(conn)?;
        Session::from_store(conn, settings).context("Could not load records from the data store")
    }

    pub fn records(&self) -> &[TxRecord] {
        &self.records
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn empty_sources(&self) -> &[Collection] {
        &self.empty_sources
    }

    pub fn daily(&self, kind: Kind) -> &Series {
        match kind {
            Kind::Expense => &self.expenses,
            Kind::Savings => &self.savings,
        }
    }

    pub fn series(&self, kind: Kind, frequency: Frequency) -> Series {
        resample(self.daily(kind), frequency)
    }

    pub fn savings_projection(&self, horizon: Horizon) -> Result<(Series, Projection), ReportError> {
        let monthly = self.series(Kind::Savings, Frequency::Month);
        let projection = project(&monthly, horizon)?;
        Ok((monthly, projection))
    }

    pub fn next_savings(&self, frequency: Frequency) -> Result<Decimal, ReportError> {
        predict_next(&self.series(Kind::Savings, frequency))
    }

    pub fn category_budget(&self) -> Result<BTreeMap<String, Decimal>, ReportError> {
        suggest_budget(&self.records, self.settings.trailing_months)
    }
}
