// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing seam.

use chronograph_index::Area;
use chronograph_model::{Brick, Group, Section};

/// Receives laid-out entities from [`Stage::paint`](crate::Stage::paint).
///
/// The stage never draws anything itself. For every subgroup it hands over
/// the lane's bricks first and then the lane; after all lanes of a group the
/// group; after all groups of a section the section; and finally the status
/// line. Entities without a computed area are skipped.
///
/// Every method but [`brick`](Self::brick) defaults to doing nothing.
pub trait StagePainter<D> {
    /// A section and its area.
    fn section(&mut self, section: &Section, area: Area) {
        let _ = (section, area);
    }

    /// A top-level group and its area.
    fn group(&mut self, group: &Group, area: Area) {
        let _ = (group, area);
    }

    /// A subgroup (lane) and its area.
    fn subgroup(&mut self, subgroup: &Group, area: Area) {
        let _ = (subgroup, area);
    }

    /// A brick, its area, and whether it is selected.
    fn brick(&mut self, brick: &Brick<D>, area: Area, selected: bool);

    /// Status line over the whole viewport with the actual and expired brick counts.
    fn status(&mut self, viewport: Area, actual: usize, expired: usize) {
        let _ = (viewport, actual, expired);
    }
}
