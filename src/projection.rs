// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::aggregate::{Series, next_start};
use crate::error::ReportError;
use crate::models::Point;
use rust_decimal::Decimal;
use serde::Serialize;

pub const MIN_HISTORY: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Horizon(u32);

impl Horizon {
    pub const MIN: u32 = 1;
    pub const MAX: u32 = 12;

    pub fn new(months: i64) -> Self {
        Horizon(months.clamp(i64::from(Self::MIN), i64::from(Self::MAX)) as u32)
    }

    pub fn months(&self) -> u32 {
        self.0
    }
}

impl Default for Horizon {
    fn default() -> Self {
        Horizon(3)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub horizon: Horizon,
    pub average: Decimal,
    pub last_observed: Point,
    pub points: Vec<Point>,
}

impl Projection {
    pub fn projected_saving(&self) -> Decimal {
        self.average
            .saturating_mul(Decimal::from(self.horizon.months()))
    }
}

fn ensure_history(series: &Series) -> Result<(), ReportError> {
    if series.len() < MIN_HISTORY {
        return Err(ReportError::InsufficientHistory {
            needed: MIN_HISTORY,
            found: series.len(),
        });
    }
    Ok(())
}

pub fn project(series: &Series, horizon: Horizon) -> Result<Projection, ReportError> {
    ensure_history(series)?;
    let (Some(average), Some(last)) = (series.mean(), series.last().copied()) else {
        return Err(ReportError::InsufficientHistory {
            needed: MIN_HISTORY,
            found: series.len(),
        });
    };

    let mut points = Vec::with_capacity(horizon.months() as usize);
    let mut start = last.start;
    let mut running = last.amount;
    for _ in 0..horizon.months() {
        let Some(next) = next_start(series.frequency(), start) else {
            break;
        };
        running = running.saturating_add(average);
        points.push(Point {
            start: next,
            amount: running,
        });
        start = next;
    }

    Ok(Projection {
        horizon,
        average,
        last_observed: last,
        points,
    })
}

pub fn predict_next(series: &Series) -> Result<Decimal, ReportError> {
    ensure_history(series)?;
    series.mean().ok_or(ReportError::InsufficientHistory {
        needed: MIN_HISTORY,
        found: 0,
    })
}
