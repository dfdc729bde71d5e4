// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::loader::Collection;
use crate::utils::{parse_decimal, parse_timestamp};
use anyhow::{Context, Result, anyhow};
use csv::ReaderBuilder;
use rusqlite::{Connection, params};
use tracing::info;

pub fn handle(conn: &mut Connection, m: &clap::ArgMatches) -> Result<()> {
    let collection_raw = m.get_one::<String>("collection").unwrap();
    let collection = Collection::parse(collection_raw)
        .ok_or_else(|| anyhow!("Unknown collection '{}' (use upi|cash|savings)", collection_raw))?;
    let path = m.get_one::<String>("path").unwrap().trim();
    let n = import_documents(conn, collection, path)?;
    println!("Imported {} documents into {} from {}", n, collection, path);
    Ok(())
}

pub fn import_documents(
    conn: &mut Connection,
    collection: Collection,
    path: &str,
) -> Result<usize> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let headers = rdr.headers()?.clone();
    let column = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
    let date_col = column("date").context("CSV header has no 'date' column")?;
    let amount_col = column("amount").context("CSV header has no 'amount' column")?;
    let category_col = column("category").filter(|_| collection.has_category());
    let note_col = column("note");

    let tx = conn.transaction()?;
    let mut count = 0usize;
    for (line, result) in rdr.records().enumerate() {
        let rec = result?;
        let field = |idx: Option<usize>| {
            idx.and_then(|i| rec.get(i))
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        let date_raw =
            field(Some(date_col)).with_context(|| format!("row {}: date missing", line + 1))?;
        let date = parse_timestamp(&date_raw)
            .with_context(|| format!("row {}: invalid date '{}'", line + 1, date_raw))?;
        let amount = match field(Some(amount_col)) {
            Some(raw) => Some(
                parse_decimal(&raw).with_context(|| format!("row {}: invalid amount", line + 1))?,
            ),
            None => None,
        };
        let category = field(category_col);
        let note = field(note_col);

        if collection.has_category() {
            tx.execute(
                &format!(
                    "INSERT INTO {}(date, amount, category, note) VALUES (?1,?2,?3,?4)",
                    collection.table()
                ),
                params![
                    date.to_string(),
                    amount.map(|a| a.to_string()),
                    category,
                    note
                ],
            )?;
        } else {
            tx.execute(
                &format!(
                    "INSERT INTO {}(date, amount, note) VALUES (?1,?2,?3)",
                    collection.table()
                ),
                params![date.to_string(), amount.map(|a| a.to_string()), note],
            )?;
        }
        count += 1;
    }
    tx.commit()?;
    info!(collection = %collection, count, "import committed");
    Ok(count)
}
