// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for hit-test implementations.

use alloc::vec::Vec;

use crate::Area;

/// Spatial backend used by [`AreaIndex`](crate::AreaIndex).
///
/// Slots are dense indices handed out by the index in insertion order.
/// Backends must visit matching slots in ascending slot order so that
/// "first match" means "first inserted".
pub trait Backend {
    /// Insert a new slot into the spatial structure.
    fn insert(&mut self, slot: usize, area: Area);

    /// Remove all slots.
    fn clear(&mut self);

    /// Visit slots whose area contains the point, in ascending slot order.
    ///
    /// The visitor returns `false` to stop the traversal early.
    fn visit_point<F: FnMut(usize) -> bool>(&self, x: i32, y: i32, f: F);

    /// Visit slots whose area intersects `area`, in ascending slot order.
    fn visit_area<F: FnMut(usize)>(&self, area: Area, f: F);

    /// The lowest slot whose area contains the point. Default: first `visit_point` hit.
    fn first_at(&self, x: i32, y: i32) -> Option<usize> {
        let mut hit = None;
        self.visit_point(x, y, |slot| {
            hit = Some(slot);
            false
        });
        hit
    }

    /// Slots whose area intersects `area`. Default: collects `visit_area`.
    fn query_area(&self, area: Area) -> Vec<usize> {
        let mut out = Vec::new();
        self.visit_area(area, |slot| out.push(slot));
        out
    }
}
