// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronograph_selection --heading-base-level=0

//! Chronograph Selection: the set of selected bricks on a stage.
//!
//! [`Selection`] is pure bookkeeping. It tracks:
//! - The selected keys, unique by equality, in the order they were selected.
//! - An optional **primary** key: the most recently selected one.
//! - A **revision** counter bumped on every change that alters the contents.
//!
//! Stages key the selection by brick id. Ids are trusted, not checked, for
//! uniqueness, so toggling one brick also deselects every other brick that
//! happens to share its id.
//!
//! ```rust
//! use chronograph_selection::Selection;
//!
//! let mut selection = Selection::new();
//! selection.toggle("b1");
//! selection.toggle("b2");
//! assert_eq!(selection.items(), &["b1", "b2"]);
//! assert_eq!(selection.primary(), Some(&"b2"));
//!
//! // Toggling again deselects.
//! selection.toggle("b1");
//! assert_eq!(selection.items(), &["b2"]);
//! assert_eq!(selection.revision(), 3);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// Selected keys plus a primary and a revision counter.
///
/// Only equality is required of `K`. Lookups scan a `Vec<K>`, which suits the
/// handful of bricks a user selects by hand.
#[derive(Clone, Debug, Default)]
pub struct Selection<K> {
    items: Vec<K>,
    primary: Option<usize>,
    revision: u64,
}

impl<K> Selection<K> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            primary: None,
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Selected keys in selection order.
    #[must_use]
    pub fn items(&self) -> &[K] {
        &self.items
    }

    /// Iterates the selected keys in selection order.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.items.iter()
    }

    /// The most recently selected key still in the selection, if any.
    #[must_use]
    pub fn primary(&self) -> Option<&K> {
        self.primary.and_then(|idx| self.items.get(idx))
    }

    /// Change counter.
    ///
    /// Bumped only by mutations that change the contents or the primary.
    /// No-op calls leave it untouched, so observers can compare revisions
    /// instead of contents.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.primary = None;
        self.bump_revision();
    }

    /// Keeps only the keys for which `keep` returns `true`.
    ///
    /// The primary survives if its key is kept.
    pub fn retain(&mut self, mut keep: impl FnMut(&K) -> bool) {
        let before = self.items.len();
        let mut idx = 0;
        while idx < self.items.len() {
            if keep(&self.items[idx]) {
                idx += 1;
            } else {
                self.remove_at(idx);
            }
        }
        if self.items.len() != before {
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    /// Removes the key at `idx` and shifts the primary accordingly.
    fn remove_at(&mut self, idx: usize) {
        self.items.remove(idx);
        self.primary = match self.primary {
            Some(current) if current == idx => None,
            Some(current) if current > idx => Some(current - 1),
            other => other,
        };
    }
}

impl<K: PartialEq> Selection<K> {
    /// Returns `true` if `key` is selected.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.position_of(key).is_some()
    }

    /// Replaces the selection with `key` alone.
    pub fn select_only(&mut self, key: K) {
        if self.items.len() == 1 && self.items[0] == key && self.primary == Some(0) {
            return;
        }
        self.items.clear();
        self.items.push(key);
        self.primary = Some(0);
        self.bump_revision();
    }

    /// Selects `key` if absent, otherwise deselects it.
    ///
    /// A newly selected key becomes the primary. Returns `true` if `key` is
    /// selected afterwards.
    pub fn toggle(&mut self, key: K) -> bool {
        let selected = if let Some(idx) = self.position_of(&key) {
            self.remove_at(idx);
            false
        } else {
            self.items.push(key);
            self.primary = Some(self.items.len() - 1);
            true
        };
        self.bump_revision();
        selected
    }

    /// Deselects `key` if present.
    pub fn remove(&mut self, key: &K) {
        if let Some(idx) = self.position_of(key) {
            self.remove_at(idx);
            self.bump_revision();
        }
    }

    fn position_of(&self, key: &K) -> Option<usize> {
        self.items.iter().position(|k| k == key)
    }
}
