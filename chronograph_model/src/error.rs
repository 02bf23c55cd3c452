// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use core::fmt;

/// Error returned by [`Position::new`](crate::Position::new) when the interval is inverted.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PositionError {
    /// Requested start.
    pub start: i64,
    /// Requested end, strictly before `start`.
    pub end: i64,
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "interval end {} precedes its start {}",
            self.end, self.start
        )
    }
}

impl core::error::Error for PositionError {}

/// Error returned by [`Storage::restructure`](crate::Storage::restructure).
///
/// A failed restructure still leaves the storage cleared.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RestructureError {
    /// Fewer than the three classifiers needed for section, group and subgroup levels.
    InvalidConfiguration {
        /// Number of classifiers supplied.
        supplied: usize,
    },
}

impl fmt::Display for RestructureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration { supplied } => write!(
                f,
                "restructure needs {} classifiers, got {supplied}",
                crate::LEVELS
            ),
        }
    }
}

impl core::error::Error for RestructureError {}
