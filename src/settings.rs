// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::projection::Horizon;
use anyhow::{Context, Result, anyhow};
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;

pub const CURRENCY_SYMBOL: &str = "currency_symbol";
pub const DEFAULT_HORIZON: &str = "default_horizon";
pub const TRAILING_MONTHS: &str = "trailing_months";

pub const KEYS: [&str; 3] = [CURRENCY_SYMBOL, DEFAULT_HORIZON, TRAILING_MONTHS];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub currency_symbol: String,
    pub default_horizon: Horizon,
    pub trailing_months: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            currency_symbol: "₹".to_string(),
            default_horizon: Horizon::default(),
            trailing_months: 3,
        }
    }
}

impl Settings {
    pub fn load(conn: &Connection) -> Result<Settings> {
        let mut s = Settings::default();
        if let Some(v) = get_setting(conn, CURRENCY_SYMBOL)? {
            s.currency_symbol = v;
        }
        if let Some(v) = get_setting(conn, DEFAULT_HORIZON)? {
            s.default_horizon = Horizon::new(parse_int(DEFAULT_HORIZON, &v)?);
        }
        if let Some(v) = get_setting(conn, TRAILING_MONTHS)? {
            s.trailing_months = parse_trailing(&v)?;
        }
        Ok(s)
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            (CURRENCY_SYMBOL, self.currency_symbol.clone()),
            (DEFAULT_HORIZON, self.default_horizon.months().to_string()),
            (TRAILING_MONTHS, self.trailing_months.to_string()),
        ]
    }
}

fn parse_int(key: &str, v: &str) -> Result<i64> {
    v.trim()
        .parse::<i64>()
        .with_context(|| format!("Invalid integer '{}' for {}", v, key))
}

fn parse_trailing(v: &str) -> Result<u32> {
    let n = parse_int(TRAILING_MONTHS, v)?;
    if !(1..=120).contains(&n) {
        return Err(anyhow!("{} must be between 1 and 120, got {}", TRAILING_MONTHS, n));
    }
    Ok(n as u32)
}

pub fn get_setting(conn: &Connection, key: &str) -> Result<Option<String>> {
    let v: Option<String> = conn
        .query_row(
            "SELECT value FROM settings WHERE key=?1",
            params![key],
            |r| r.get(0),
        )
        .optional()?;
    Ok(v)
}

pub fn set_setting(conn: &Connection, key: &str, value: &str) -> Result<String> {
    let value = value.trim();
    let normalized = match key {
        CURRENCY_SYMBOL => {
            if value.is_empty() {
                return Err(anyhow!("{} cannot be empty", CURRENCY_SYMBOL));
            }
            value.to_string()
        }
        DEFAULT_HORIZON => Horizon::new(parse_int(DEFAULT_HORIZON, value)?)
            .months()
            .to_string(),
        TRAILING_MONTHS => parse_trailing(value)?.to_string(),
        other => {
            return Err(anyhow!(
                "Unknown setting '{}' (expected one of: {})",
                other,
                KEYS.join(", ")
            ));
        }
    };
    conn.execute(
        "INSERT INTO settings(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, normalized],
    )?;
    Ok(normalized)
}
