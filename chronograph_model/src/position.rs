// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::PositionError;

/// A time interval `[start, end]` attached to a brick.
///
/// Units are whatever the data source uses (days, minutes, ticks); the layout
/// engine only multiplies them by a pixels-per-unit factor.
///
/// Invariant: `end >= start`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    start: i64,
    end: i64,
}

impl Position {
    /// Creates a position, rejecting intervals whose end precedes their start.
    pub const fn new(start: i64, end: i64) -> Result<Self, PositionError> {
        if end < start {
            return Err(PositionError { start, end });
        }
        Ok(Self { start, end })
    }

    /// Start of the interval.
    #[must_use]
    pub const fn start(&self) -> i64 {
        self.start
    }

    /// End of the interval.
    #[must_use]
    pub const fn end(&self) -> i64 {
        self.end
    }

    /// `end - start`, saturating at `i64::MAX`.
    #[must_use]
    pub const fn duration(&self) -> i64 {
        self.end.saturating_sub(self.start)
    }

    /// Whether `instant` falls inside the interval, both ends included.
    #[must_use]
    pub const fn contains(&self, instant: i64) -> bool {
        self.start <= instant && instant <= self.end
    }

    /// Whether the interval ended strictly before `now`.
    #[must_use]
    pub const fn is_expired_at(&self, now: i64) -> bool {
        self.end < now
    }
}
