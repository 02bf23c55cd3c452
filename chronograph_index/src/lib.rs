// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronograph_index --heading-base-level=0

//! Chronograph Index: screen-space areas and first-hit lookup.
//!
//! This crate holds the pixel geometry shared by the Chronograph layout engine
//! and its hosts:
//!
//! - [`Area`]: an integer, axis-aligned screen rectangle (`x`, `y`, `width`, `height`).
//!   Point containment is **inclusive on all edges**, matching how stages answer
//!   "what is under the pointer" queries.
//! - [`AreaIndex`]: an insertion-ordered table from [`Area`] to a caller payload,
//!   answering point queries with the *first* inserted area that contains the point.
//! - [`Backend`]: the spatial strategy behind [`AreaIndex`]. The only backend
//!   shipped today is [`FlatVec`], a linear scan.
//!
//! The linear scan is a known scaling limit: hit-testing is `O(n)` in the number
//! of indexed areas. It is adequate for the brick counts a single stage shows;
//! swapping in a different [`Backend`] does not change the public API.
//!
//! # Example
//!
//! ```rust
//! use chronograph_index::{Area, AreaIndex};
//!
//! let mut index: AreaIndex<&str> = AreaIndex::new();
//! index.insert(Area::new(0, 0, 10, 10), "first");
//! index.insert(Area::new(5, 5, 10, 10), "second");
//!
//! // Overlap resolves to the first inserted area.
//! assert_eq!(index.first_at(6, 6), Some(&"first"));
//! // Edges are inclusive.
//! assert_eq!(index.first_at(15, 15), Some(&"second"));
//! assert_eq!(index.first_at(16, 16), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod area;
mod backend;
pub mod backends;
mod index;

pub use area::Area;
pub use backend::Backend;
pub use backends::FlatVec;
pub use index::AreaIndex;
