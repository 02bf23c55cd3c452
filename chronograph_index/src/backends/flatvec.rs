// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; good for bounded brick counts.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::Area;
use crate::backend::Backend;

/// Flat vector backend with linear scans.
#[derive(Clone, Default)]
pub struct FlatVec {
    entries: Vec<Area>,
}

impl Debug for FlatVec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatVec")
            .field("slots", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl Backend for FlatVec {
    fn insert(&mut self, slot: usize, area: Area) {
        if self.entries.len() <= slot {
            self.entries.resize(slot + 1, Area::default());
        }
        self.entries[slot] = area;
    }

    fn clear(&mut self) {
        self.entries.clear();
    }

    fn visit_point<F: FnMut(usize) -> bool>(&self, x: i32, y: i32, mut f: F) {
        for (i, a) in self.entries.iter().enumerate() {
            if a.contains_point(x, y) && !f(i) {
                return;
            }
        }
    }

    fn visit_area<F: FnMut(usize)>(&self, area: Area, mut f: F) {
        for (i, a) in self.entries.iter().enumerate() {
            if a.intersects(&area) {
                f(i);
            }
        }
    }
}
