// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::Series;
use crate::projection::Projection;
use crate::utils::{fmt_money, pretty_table};
use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;
use std::io::Write;

const BAR_WIDTH: u32 = 30;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartLine {
    pub label: String,
    pub points: Vec<(NaiveDate, Decimal)>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub title: String,
    pub lines: Vec<ChartLine>,
    pub notes: Vec<String>,
}

impl Chart {
    pub fn from_series(series: &Series) -> Chart {
        let title = format!(
            "{} {}",
            series.frequency().adjective(),
            series.kind().plural()
        );
        Chart {
            title,
            lines: vec![ChartLine {
                label: series.kind().plural().to_string(),
                points: series.points().iter().map(|p| (p.start, p.amount)).collect(),
            }],
            notes: Vec::new(),
        }
    }

    pub fn projection(history: &Series, projection: &Projection, symbol: &str) -> Chart {
        let mut chart = Chart::from_series(history);
        chart.title = format!(
            "{} Projection (Next {} Months)",
            history.kind().plural(),
            projection.horizon.months()
        );
        chart.lines[0].label = "Historical".to_string();
        chart.lines.push(ChartLine {
            label: "Projection".to_string(),
            points: projection
                .points
                .iter()
                .map(|p| (p.start, p.amount))
                .collect(),
        });
        chart.notes.push(format!(
            "Avg Monthly Saving: {}",
            fmt_money(&projection.average, symbol)
        ));
        chart
    }

    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|l| l.points.is_empty())
    }
}

pub trait Renderer {
    fn render(&mut self, chart: &Chart) -> Result<()>;
}

pub struct TerminalRenderer<W: Write> {
    out: W,
    symbol: String,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, symbol: &str) -> Self {
        TerminalRenderer {
            out,
            symbol: symbol.to_string(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn bar(amount: Decimal, max: Decimal) -> String {
    if max.is_zero() {
        return String::new();
    }
    let len = (amount.abs() / max * Decimal::from(BAR_WIDTH))
        .round()
        .to_usize()
        .unwrap_or(0);
    let glyph = if amount.is_sign_negative() { '░' } else { '█' };
    std::iter::repeat_n(glyph, len).collect()
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, chart: &Chart) -> Result<()> {
        writeln!(self.out, "\n{}", chart.title)?;
        if chart.is_empty() {
            writeln!(self.out, "(no data)")?;
            return Ok(());
        }
        let max = chart
            .lines
            .iter()
            .flat_map(|l| l.points.iter().map(|(_, a)| a.abs()))
            .max()
            .unwrap_or(Decimal::ZERO);
        let mut rows = Vec::new();
        for line in &chart.lines {
            for (date, amount) in &line.points {
                rows.push(vec![
                    date.to_string(),
                    line.label.clone(),
                    fmt_money(amount, &self.symbol),
                    bar(*amount, max),
                ]);
            }
        }
        writeln!(
            self.out,
            "{}",
            pretty_table(&["Period", "Series", "Amount", ""], rows)
        )?;
        for note in &chart.notes {
            writeln!(self.out, "{}", note)?;
        }
        Ok(())
    }
}
