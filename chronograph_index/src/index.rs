// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Insertion-ordered area table with first-hit point queries.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::backends::FlatVec;
use crate::Area;

/// A table of `(Area, payload)` entries answering "what is at this point".
///
/// Entries keep their insertion order. [`AreaIndex::first_at`] returns the
/// payload of the earliest inserted entry whose area contains the point, so
/// callers control overlap resolution by choosing the insertion order.
///
/// The table is rebuilt, not patched: layout passes call [`AreaIndex::clear`]
/// and re-insert everything.
#[derive(Clone)]
pub struct AreaIndex<P, B: Backend = FlatVec> {
    entries: Vec<(Area, P)>,
    backend: B,
}

impl<P> AreaIndex<P, FlatVec> {
    /// Creates an empty index backed by a linear scan.
    #[must_use]
    pub fn new() -> Self {
        Self::with_backend(FlatVec::default())
    }
}

impl<P> Default for AreaIndex<P, FlatVec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P, B: Backend> AreaIndex<P, B> {
    /// Creates an empty index with a specific backend.
    #[must_use]
    pub fn with_backend(backend: B) -> Self {
        Self {
            entries: Vec::new(),
            backend,
        }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the index holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends an entry and returns its slot.
    pub fn insert(&mut self, area: Area, payload: P) -> usize {
        let slot = self.entries.len();
        self.backend.insert(slot, area);
        self.entries.push((area, payload));
        slot
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.backend.clear();
    }

    /// The area and payload stored at `slot`.
    #[must_use]
    pub fn get(&self, slot: usize) -> Option<(Area, &P)> {
        self.entries.get(slot).map(|(a, p)| (*a, p))
    }

    /// Payload of the first inserted entry containing the point, edges inclusive.
    #[must_use]
    pub fn first_at(&self, x: i32, y: i32) -> Option<&P> {
        self.backend
            .first_at(x, y)
            .and_then(|slot| self.entries.get(slot))
            .map(|(_, p)| p)
    }

    /// All entries whose area contains the point, in insertion order.
    pub fn query_point(&self, x: i32, y: i32) -> impl Iterator<Item = (Area, &P)> + '_ {
        let mut slots = Vec::new();
        self.backend.visit_point(x, y, |slot| {
            slots.push(slot);
            true
        });
        slots.into_iter().filter_map(|slot| self.get(slot))
    }

    /// All entries whose area intersects `area`, in insertion order.
    pub fn query_area(&self, area: Area) -> impl Iterator<Item = (Area, &P)> + '_ {
        self.backend
            .query_area(area)
            .into_iter()
            .filter_map(|slot| self.get(slot))
    }
}

impl<P: Debug, B: Backend + Debug> Debug for AreaIndex<P, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("AreaIndex")
            .field("len", &self.entries.len())
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::AreaIndex;
    use crate::Area;

    #[test]
    fn empty_index_finds_nothing() {
        let idx: AreaIndex<u32> = AreaIndex::new();
        assert!(idx.is_empty());
        assert_eq!(idx.first_at(0, 0), None);
        assert_eq!(idx.query_point(0, 0).count(), 0);
    }

    #[test]
    fn first_inserted_wins_on_overlap() {
        let mut idx = AreaIndex::new();
        idx.insert(Area::new(0, 0, 20, 20), 7_u32);
        idx.insert(Area::new(10, 10, 20, 20), 8_u32);

        assert_eq!(idx.first_at(15, 15), Some(&7));
        assert_eq!(idx.first_at(25, 25), Some(&8));

        let all: Vec<_> = idx.query_point(15, 15).map(|(_, p)| *p).collect();
        assert_eq!(all, [7, 8]);
    }

    #[test]
    fn boundary_point_hits() {
        let mut idx = AreaIndex::new();
        let area = Area::new(40, 10, 30, 20);
        idx.insert(area, ());
        assert!(idx.first_at(area.x, area.y).is_some());
        assert!(idx.first_at(area.right(), area.bottom()).is_some());
        assert!(idx.first_at(area.x - 1, area.y).is_none());
    }

    #[test]
    fn clear_then_reinsert_restarts_slots() {
        let mut idx = AreaIndex::new();
        idx.insert(Area::new(0, 0, 1, 1), 'a');
        idx.clear();
        assert_eq!(idx.insert(Area::new(5, 5, 1, 1), 'b'), 0);
        assert_eq!(idx.first_at(0, 0), None);
        assert_eq!(idx.get(0), Some((Area::new(5, 5, 1, 1), &'b')));
    }

    #[test]
    fn query_area_culls() {
        let mut idx = AreaIndex::new();
        idx.insert(Area::new(0, 0, 10, 10), 1);
        idx.insert(Area::new(500, 0, 10, 10), 2);
        let visible: Vec<_> = idx
            .query_area(Area::new(0, 0, 100, 100))
            .map(|(_, p)| *p)
            .collect();
        assert_eq!(visible, [1]);
    }
}
