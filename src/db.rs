// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::Connection;
use std::fs;
use std::path::{Path, PathBuf};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Spendscope", "spendscope"));

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("spendscope.sqlite"))
}

pub fn open_or_init(path: Option<&Path>) -> Result<Connection> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => db_path()?,
    };
    let conn =
        Connection::open(&path).with_context(|| format!("Open DB at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS settings(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );

    CREATE TABLE IF NOT EXISTS upi_transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT,
        amount TEXT,
        category TEXT,
        note TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_upi_date ON upi_transactions(date);

    CREATE TABLE IF NOT EXISTS cash_transactions(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT,
        amount TEXT,
        category TEXT,
        note TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_cash_date ON cash_transactions(date);

    CREATE TABLE IF NOT EXISTS daily_savings(
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        date TEXT,
        amount TEXT,
        note TEXT
    );
    CREATE INDEX IF NOT EXISTS idx_savings_date ON daily_savings(date);
    "#,
    )?;
    Ok(())
}
