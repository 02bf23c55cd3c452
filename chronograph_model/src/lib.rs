// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronograph_model --heading-base-level=0

//! Chronograph Model: the section → group → subgroup → brick hierarchy.
//!
//! A timeline stage shows raw items (tasks, bookings, jobs) as *bricks*: time
//! intervals laid out on horizontal lanes. This crate turns a flat list of raw
//! items into that hierarchy and answers queries over it.
//!
//! - [`Classifier`]: one per hierarchy level. Maps an item to the id of the
//!   section, group or subgroup it falls into, or `None` if it does not adapt.
//! - [`DataAccess`]: supplies the items and reads each item's brick id and
//!   interval.
//! - [`Storage`]: owns the hierarchy. [`Storage::restructure`] rebuilds it from
//!   scratch; the getters and [`Storage::query`] read it.
//! - [`BrickPredicate`] with [`Actual`] and [`Expired`]: filters for queries.
//!
//! Entities are addressed by synthetic handles ([`SectionKey`], [`GroupKey`],
//! [`BrickKey`]) assigned in display order, so layout code can keep dense side
//! tables indexed by [`SectionKey::index`] and friends.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use chronograph_model::{Classifier, DataAccess, Storage};
//!
//! #[derive(Clone)]
//! struct Task { id: &'static str, team: &'static str, stage: &'static str, owner: &'static str, start: i64, end: i64 }
//!
//! struct Tasks(Vec<Task>);
//!
//! impl DataAccess<Task> for Tasks {
//!     fn fetch_all(&self, filter: &dyn Fn(&Task) -> bool) -> Vec<Task> {
//!         self.0.iter().filter(|t| filter(t)).cloned().collect()
//!     }
//!     fn brick_id(&self, t: &Task) -> String { t.id.into() }
//!     fn start(&self, t: &Task) -> i64 { t.start }
//!     fn end(&self, t: &Task) -> i64 { t.end }
//! }
//!
//! let tasks = Tasks(vec![
//!     Task { id: "b1", team: "S1", stage: "G1", owner: "L1", start: 0, end: 5 },
//!     Task { id: "b2", team: "S1", stage: "G1", owner: "L2", start: 3, end: 8 },
//! ]);
//!
//! let structure: Vec<Arc<dyn Classifier<Task>>> = vec![
//!     Arc::new(|t: &Task| Some(String::from(t.team))),
//!     Arc::new(|t: &Task| Some(String::from(t.stage))),
//!     Arc::new(|t: &Task| Some(String::from(t.owner))),
//! ];
//!
//! let mut storage = Storage::new();
//! let report = storage.restructure(&tasks, &structure).unwrap();
//! assert_eq!(report.bricks, 2);
//! assert_eq!(storage.sections().len(), 1);
//! assert_eq!(storage.bricks("L2", "G1", "S1")[0].id(), "b2");
//! ```
//!
//! ## Features
//!
//! - `std` (default): compile against the standard library.
//! - `tracing`: emit `tracing` events for restructure passes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod classify;
mod error;
mod hierarchy;
mod position;
mod query;
mod storage;

pub use classify::{Classifier, DataAccess, KeyedClassifier};
pub use error::{PositionError, RestructureError};
pub use hierarchy::{Brick, BrickKey, Container, Group, GroupKey, GroupPath, Section, SectionKey};
pub use position::Position;
pub use query::{Actual, All, BrickPredicate, Expired};
pub use storage::{RestructureReport, Storage};

/// Number of classifier levels a restructure needs: section, group, subgroup.
pub const LEVELS: usize = 3;
