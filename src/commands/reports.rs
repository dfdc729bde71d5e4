// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Frequency, Kind};
use crate::projection::Horizon;
use crate::render::{Chart, Renderer, TerminalRenderer};
use crate::session::Session;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};
use anyhow::{Result, anyhow};
use rusqlite::Connection;
use serde::Serialize;
use std::io;

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    let session = Session::open(conn)?;
    match m.subcommand() {
        Some(("expenses", sub)) => series(&session, sub, Kind::Expense)?,
        Some(("savings", sub)) => series(&session, sub, Kind::Savings)?,
        Some(("projection", sub)) => projection(&session, sub)?,
        Some(("predict", sub)) => predict(&session, sub)?,
        Some(("budget", sub)) => budget(&session, sub)?,
        _ => {}
    }
    Ok(())
}

pub fn frequency_arg(sub: &clap::ArgMatches, name: &str) -> Result<Frequency> {
    let raw = sub.get_one::<String>(name).map(|s| s.as_str()).unwrap_or("week");
    Frequency::parse(raw).ok_or_else(|| anyhow!("Invalid frequency '{}' (use day|week|month)", raw))
}

fn series(session: &Session, sub: &clap::ArgMatches, kind: Kind) -> Result<()> {
    let freq = frequency_arg(sub, "freq")?;
    let series = session.series(kind, freq);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &series.points())? {
        TerminalRenderer::new(io::stdout(), &session.settings().currency_symbol)
            .render(&Chart::from_series(&series))?;
    }
    Ok(())
}

fn projection(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let horizon = sub
        .get_one::<i64>("months")
        .map(|n| Horizon::new(*n))
        .unwrap_or(session.settings().default_horizon);
    let (monthly, projection) = session.savings_projection(horizon)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &projection)? {
        return Ok(());
    }
    let symbol = &session.settings().currency_symbol;
    TerminalRenderer::new(io::stdout(), symbol)
        .render(&Chart::projection(&monthly, &projection, symbol))?;
    println!(
        "Projected {}-Month Saving: {}",
        horizon.months(),
        fmt_money(&projection.projected_saving(), symbol)
    );
    Ok(())
}

#[derive(Serialize)]
struct Prediction {
    period: &'static str,
    amount: rust_decimal::Decimal,
}

fn predict(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let freq = frequency_arg(sub, "period")?;
    let period = match freq {
        Frequency::Week => "week",
        Frequency::Month => "month",
        Frequency::Day => return Err(anyhow!("Predictions are weekly or monthly")),
    };
    let amount = session.next_savings(freq)?;
    if !maybe_print_json(
        sub.get_flag("json"),
        sub.get_flag("jsonl"),
        &Prediction { period, amount },
    )? {
        println!(
            "By the next {}, you can save: {}",
            period,
            fmt_money(&amount, &session.settings().currency_symbol)
        );
    }
    Ok(())
}

fn budget(session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let trailing = sub
        .get_one::<u32>("months")
        .copied()
        .unwrap_or(session.settings().trailing_months);
    let suggested = crate::budget::suggest_budget(session.records(), trailing)?;
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &suggested)? {
        let rows = suggested
            .iter()
            .map(|(cat, amt)| {
                vec![
                    cat.clone(),
                    fmt_money(amt, &session.settings().currency_symbol),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(&["Category", &format!("Avg ({}m)", trailing)], rows)
        );
    }
    Ok(())
}
