// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{Series, bucket_end};
use crate::commands::reports::frequency_arg;
use crate::models::Kind;
use crate::session::Session;
use anyhow::{Result, anyhow};
use rusqlite::Connection;
use serde_json::json;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("series", sub)) => export_series(conn, sub),
        _ => Ok(()),
    }
}

fn export_series(conn: &Connection, sub: &clap::ArgMatches) -> Result<()> {
    let kind_raw = sub.get_one::<String>("kind").unwrap();
    let kind = Kind::parse(kind_raw)
        .ok_or_else(|| anyhow!("Invalid kind '{}' (use expense|savings)", kind_raw))?;
    let freq = frequency_arg(sub, "freq")?;
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap().trim();

    let session = Session::open(conn)?;
    let series = session.series(kind, freq);
    write_series(&series, &fmt, out)?;
    println!("Exported {} {} points to {}", series.len(), kind, out);
    Ok(())
}

pub fn write_series(series: &Series, fmt: &str, out: &str) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["period_start", "period_end", "amount"])?;
            for p in series.points() {
                let end = bucket_end(series.frequency(), p.start)
                    .map(|d| d.to_string())
                    .unwrap_or_default();
                wtr.write_record([p.start.to_string(), end, p.amount.to_string()])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = series
                .points()
                .iter()
                .map(|p| {
                    json!({
                        "period_start": p.start,
                        "period_end": bucket_end(series.frequency(), p.start),
                        "amount": p.amount,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => return Err(anyhow!("Unknown format: {} (use csv|json)", fmt)),
    }
    Ok(())
}
