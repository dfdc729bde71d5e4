// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Frequency, Kind};
use crate::projection::Horizon;
use crate::render::{Chart, Renderer, TerminalRenderer};
use crate::session::Session;
use crate::utils::fmt_money;
use anyhow::Result;
use rusqlite::Connection;
use std::io::{self, BufRead, Write};
use std::num::IntErrorKind;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Console<'a> {
    pub input: &'a mut dyn BufRead,
    pub out: &'a mut dyn Write,
}

impl Console<'_> {
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }
}

type Action = fn(&Session, &mut Console<'_>) -> Result<Flow>;

pub struct MenuItem {
    pub key: &'static str,
    pub label: &'static str,
    action: Action,
}

pub const MENU: &[MenuItem] = &[
    MenuItem {
        key: "1",
        label: "View Expenses (Weekly)",
        action: |s, c| chart(s, c, Kind::Expense, Frequency::Week),
    },
    MenuItem {
        key: "2",
        label: "View Expenses (Monthly)",
        action: |s, c| chart(s, c, Kind::Expense, Frequency::Month),
    },
    MenuItem {
        key: "3",
        label: "View Savings (Weekly)",
        action: |s, c| chart(s, c, Kind::Savings, Frequency::Week),
    },
    MenuItem {
        key: "4",
        label: "View Savings (Monthly)",
        action: |s, c| chart(s, c, Kind::Savings, Frequency::Month),
    },
    MenuItem {
        key: "5",
        label: "View Savings Projection",
        action: projection_prompt,
    },
    MenuItem {
        key: "6",
        label: "View All Graphs",
        action: all_graphs,
    },
    MenuItem {
        key: "7",
        label: "Predict Next Month Estimated Savings",
        action: |s, c| next_savings(s, c, Frequency::Month),
    },
    MenuItem {
        key: "8",
        label: "Suggest Categorywise Budget",
        action: category_budget,
    },
    MenuItem {
        key: "9",
        label: "Predict Next Week Estimated Savings",
        action: |s, c| next_savings(s, c, Frequency::Week),
    },
    MenuItem {
        key: "10",
        label: "Exit",
        action: |_, c| {
            writeln!(c.out, "Thank you for using Spendscope! Come back again.")?;
            Ok(Flow::Exit)
        },
    },
];

pub fn lookup(key: &str) -> Option<&'static MenuItem> {
    MENU.iter().find(|item| item.key == key)
}

pub fn handle(conn: &Connection) -> Result<()> {
    let session = Session::open(conn)?;
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    run(&session, &mut input, &mut out)
}

pub fn run<'a>(
    session: &Session,
    input: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
) -> Result<()> {
    let mut console = Console { input, out };
    loop {
        writeln!(console.out, "\n=== Financial Analysis Menu ===")?;
        for item in MENU {
            writeln!(console.out, "{}. {}", item.key, item.label)?;
        }
        let Some(choice) = console.prompt(&format!("Choose an option (1-{}): ", MENU.len()))?
        else {
            break;
        };
        let Some(item) = lookup(&choice) else {
            writeln!(console.out, "Invalid choice. Please try again.")?;
            continue;
        };
        debug!(choice = %choice, "menu selection");
        match (item.action)(session, &mut console) {
            Ok(Flow::Exit) => break,
            Ok(Flow::Continue) => {}
            Err(e) if e.is::<io::Error>() => return Err(e),
            Err(e) => writeln!(console.out, "\n{:#}", e)?,
        }
    }
    Ok(())
}

fn chart(session: &Session, c: &mut Console<'_>, kind: Kind, freq: Frequency) -> Result<Flow> {
    let series = session.series(kind, freq);
    let symbol = &session.settings().currency_symbol;
    TerminalRenderer::new(&mut *c.out, symbol).render(&Chart::from_series(&series))?;
    Ok(Flow::Continue)
}

fn projection(session: &Session, c: &mut Console<'_>, horizon: Horizon) -> Result<Flow> {
    let (monthly, projection) = session.savings_projection(horizon)?;
    let symbol = session.settings().currency_symbol.clone();
    TerminalRenderer::new(&mut *c.out, &symbol)
        .render(&Chart::projection(&monthly, &projection, &symbol))?;
    writeln!(c.out, "\nSavings Insights:")?;
    writeln!(
        c.out,
        "Average Monthly Saving: {}",
        fmt_money(&projection.average, &symbol)
    )?;
    writeln!(
        c.out,
        "Projected {}-Month Saving: {}",
        horizon.months(),
        fmt_money(&projection.projected_saving(), &symbol)
    )?;
    Ok(Flow::Continue)
}

fn projection_prompt(session: &Session, c: &mut Console<'_>) -> Result<Flow> {
    let text = format!(
        "Enter number of months for projection ({}-{}): ",
        Horizon::MIN,
        Horizon::MAX
    );
    let Some(raw) = c.prompt(&text)? else {
        return Ok(Flow::Continue);
    };
    let months = match raw.parse::<i64>() {
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(i64::MAX),
        Err(e) if *e.kind() == IntErrorKind::NegOverflow => Ok(i64::MIN),
        other => other,
    };
    match months {
        Ok(n) => projection(session, c, Horizon::new(n)),
        Err(_) => {
            writeln!(c.out, "Invalid number '{}'.", raw)?;
            Ok(Flow::Continue)
        }
    }
}

fn all_graphs(session: &Session, c: &mut Console<'_>) -> Result<Flow> {
    chart(session, c, Kind::Expense, Frequency::Week)?;
    chart(session, c, Kind::Expense, Frequency::Month)?;
    chart(session, c, Kind::Savings, Frequency::Week)?;
    chart(session, c, Kind::Savings, Frequency::Month)?;
    projection(session, c, session.settings().default_horizon)
}

fn next_savings(session: &Session, c: &mut Console<'_>, freq: Frequency) -> Result<Flow> {
    let avg = session.next_savings(freq)?;
    let period = match freq {
        Frequency::Week => "week",
        _ => "month",
    };
    writeln!(
        c.out,
        "\nBy the next {}, you can save: {}",
        period,
        fmt_money(&avg, &session.settings().currency_symbol)
    )?;
    Ok(Flow::Continue)
}

fn category_budget(session: &Session, c: &mut Console<'_>) -> Result<Flow> {
    let budget = session.category_budget()?;
    writeln!(c.out, "\nSuggested Monthly Budget per Category:")?;
    for (category, amount) in &budget {
        writeln!(
            c.out,
            "{}: {}",
            category,
            fmt_money(amount, &session.settings().currency_symbol)
        )?;
    }
    Ok(Flow::Continue)
}
