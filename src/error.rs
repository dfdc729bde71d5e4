// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::loader::Collection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("data store unavailable: {0}")]
    DataUnavailable(String),

    #[error("collection '{0}' has no records")]
    EmptySource(Collection),

    #[error("Not enough data for prediction (need at least {needed} periods, found {found}).")]
    InsufficientHistory { needed: usize, found: usize },

    #[error("No category-wise data available.")]
    NoCategoryData,
}

impl ReportError {
    /// Only a store failure ends the session; everything else is scoped to one report.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ReportError::DataUnavailable(_))
    }
}

impl From<rusqlite::Error> for ReportError {
    fn from(err: rusqlite::Error) -> Self {
        ReportError::DataUnavailable(err.to_string())
    }
}
