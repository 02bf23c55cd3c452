// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronograph_layout --heading-base-level=0

//! Chronograph Layout: screen areas for a timeline hierarchy.
//!
//! Given a [`Storage`](chronograph_model::Storage) and the current view state,
//! [`Calculator`] computes an [`Area`](chronograph_index::Area) for every
//! section, group, subgroup (lane) and brick, and answers "which brick is under
//! this pixel" queries.
//!
//! ## Geometry
//!
//! - The *frame* is the viewport minus the stage header on top, the three
//!   rulers at the bottom and a right margin, shifted up by the vertical scroll.
//! - Sections stack from the frame top. A section is
//!   `(padding + Σ lanes × lane height) × zoom` tall, where a group without
//!   subgroups still counts one lane, and `frame.width × zoom` wide.
//!   Consecutive sections are separated by a fixed gap.
//! - A section's height is split evenly across its groups; a group's across
//!   its subgroups. Each level is inset horizontally by a fixed margin.
//! - A brick spans `start × ppu - scroll_x × ppu` to the right by
//!   `duration × ppu`, and sits centered (or pinned) in its lane.
//!
//! All constants live in [`LayoutConfig`]. Arithmetic saturates instead of
//! overflowing.
//!
//! ## Hit-testing
//!
//! [`Calculator::brick_at`] returns the first laid-out brick whose area
//! contains the point, right and bottom edges included. Bricks are laid out in
//! storage order, so ties resolve to the earlier brick.
//!
//! Every pass is a full rebuild; there is no incremental layout.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use chronograph_index::Area;
//! use chronograph_layout::{Calculator, LayoutConfig, LayoutRequest};
//! use chronograph_model::{Classifier, DataAccess, Storage};
//!
//! struct Rows(Vec<(&'static str, i64, i64)>);
//!
//! impl DataAccess<(&'static str, i64, i64)> for Rows {
//!     fn fetch_all(&self, _: &dyn Fn(&(&'static str, i64, i64)) -> bool) -> Vec<(&'static str, i64, i64)> {
//!         self.0.clone()
//!     }
//!     fn brick_id(&self, r: &(&'static str, i64, i64)) -> String { r.0.into() }
//!     fn start(&self, r: &(&'static str, i64, i64)) -> i64 { r.1 }
//!     fn end(&self, r: &(&'static str, i64, i64)) -> i64 { r.2 }
//! }
//!
//! let one: Arc<dyn Classifier<(&'static str, i64, i64)>> =
//!     Arc::new(|_: &(&'static str, i64, i64)| Some(String::from("all")));
//! let mut storage = Storage::new();
//! storage
//!     .restructure(&Rows(vec![("b1", 0, 10)]), &[one.clone(), one.clone(), one])
//!     .unwrap();
//!
//! let mut calculator = Calculator::new(LayoutConfig::default());
//! let request = LayoutRequest {
//!     pixels_per_unit: 10,
//!     ..LayoutRequest::new(Area::new(0, 0, 800, 600))
//! };
//! calculator.compute_layout(&storage, &request);
//!
//! let brick = storage.all_bricks()[0].key();
//! let area = calculator.brick_area(brick).unwrap();
//! assert_eq!((area.x, area.width), (0, 100));
//! assert_eq!(calculator.brick_at(area.x, area.y), Some(brick));
//! assert_eq!(calculator.brick_at(area.right() + 1, area.y), None);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod calculator;
mod config;
mod place;

pub use calculator::{Calculator, LayoutRequest, Node};
pub use config::{BrickAlign, LayoutConfig, SectionSizing};
pub use place::position_brick;
