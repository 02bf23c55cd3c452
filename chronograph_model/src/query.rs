// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brick predicates for [`Storage::query`](crate::Storage::query).

use crate::Brick;

/// A filter over bricks.
///
/// Closures `Fn(&Brick<D>) -> bool` implement this trait, so ad hoc queries
/// need no named type.
pub trait BrickPredicate<D> {
    /// Returns `true` if `brick` should be kept.
    fn matches(&self, brick: &Brick<D>) -> bool;
}

impl<D, F> BrickPredicate<D> for F
where
    F: Fn(&Brick<D>) -> bool,
{
    fn matches(&self, brick: &Brick<D>) -> bool {
        self(brick)
    }
}

/// Keeps every brick.
#[derive(Copy, Clone, Debug, Default)]
pub struct All;

impl<D> BrickPredicate<D> for All {
    fn matches(&self, _brick: &Brick<D>) -> bool {
        true
    }
}

/// Bricks still running or upcoming at `now`: `end >= now`.
///
/// Together with [`Expired`] at the same instant this partitions any brick set.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Actual {
    /// Reference instant, in the same units as brick positions.
    pub now: i64,
}

impl<D> BrickPredicate<D> for Actual {
    fn matches(&self, brick: &Brick<D>) -> bool {
        !brick.position().is_expired_at(self.now)
    }
}

/// Bricks that ended before `now`: `end < now`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Expired {
    /// Reference instant, in the same units as brick positions.
    pub now: i64,
}

impl<D> BrickPredicate<D> for Expired {
    fn matches(&self, brick: &Brick<D>) -> bool {
        brick.position().is_expired_at(self.now)
    }
}
