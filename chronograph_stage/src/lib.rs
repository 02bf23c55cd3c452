// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=chronograph_stage --heading-base-level=0

//! Chronograph Stage: the view-state controller of a timeline widget.
//!
//! A [`Stage`] ties a data source to a hierarchy
//! ([`Storage`](chronograph_model::Storage)), a layout
//! ([`Calculator`](chronograph_layout::Calculator)) and the view state a user
//! manipulates: horizontal pan, vertical scroll, section zoom, [`TimeScale`]
//! and the brick selection.
//!
//! The stage is toolkit-agnostic. Hosts feed it input:
//! - Pointer events: [`Stage::on_pointer_down`], [`Stage::on_pointer_move`],
//!   [`Stage::on_pointer_up`] (drag-to-pan and click-to-select).
//! - Scroll and resize: [`Stage::on_pan`], [`Stage::on_vertical_scroll`],
//!   [`Stage::on_resize`], [`Stage::on_zoom`].
//! - Commands: [`Stage::scale_up`], [`Stage::scale_down`],
//!   [`Stage::navigate_to_unit`], [`Stage::restructure_view`], [`Stage::refresh`].
//!
//! After input, [`Stage::take_redraw`] tells whether to repaint, and
//! [`Stage::paint`] hands every laid-out entity to a [`StagePainter`].
//! Everything runs synchronously on the caller's thread.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use chronograph_index::Area;
//! use chronograph_model::{Brick, Classifier, DataAccess};
//! use chronograph_stage::{Stage, StageConfig, StagePainter};
//! use kurbo::Point;
//!
//! #[derive(Clone)]
//! struct Job { id: &'static str, host: &'static str, start: i64, end: i64 }
//!
//! struct Jobs(Vec<Job>);
//!
//! impl DataAccess<Job> for Jobs {
//!     fn fetch_all(&self, filter: &dyn Fn(&Job) -> bool) -> Vec<Job> {
//!         self.0.iter().filter(|j| filter(j)).cloned().collect()
//!     }
//!     fn brick_id(&self, j: &Job) -> String { j.id.into() }
//!     fn start(&self, j: &Job) -> i64 { j.start }
//!     fn end(&self, j: &Job) -> i64 { j.end }
//! }
//!
//! #[derive(Default)]
//! struct Recorder(Vec<(String, Area, bool)>);
//!
//! impl StagePainter<Job> for Recorder {
//!     fn brick(&mut self, brick: &Brick<Job>, area: Area, selected: bool) {
//!         self.0.push((brick.id().into(), area, selected));
//!     }
//! }
//!
//! let jobs = Jobs(vec![Job { id: "build", host: "ci-1", start: 0, end: 4 }]);
//! let by_host: Arc<dyn Classifier<Job>> = Arc::new(|j: &Job| Some(String::from(j.host)));
//!
//! let mut stage = Stage::new(jobs, StageConfig::default());
//! stage.on_resize(Area::new(0, 0, 800, 600));
//! stage
//!     .restructure_view(&[by_host.clone(), by_host.clone(), by_host])
//!     .unwrap();
//!
//! // Scale 5 with factor 5: 25 pixels per unit.
//! let area = stage.calculator().brick_area(stage.storage().all_bricks()[0].key()).unwrap();
//! assert_eq!(area.width, 100);
//!
//! // Clicking the brick selects it.
//! stage.on_pointer_down(Point::new(f64::from(area.x), f64::from(area.y)));
//! stage.on_pointer_up(Point::new(f64::from(area.x), f64::from(area.y)));
//! assert!(stage.take_redraw());
//!
//! let mut recorder = Recorder::default();
//! stage.paint(&mut recorder, 10);
//! assert_eq!(recorder.0, [(String::from("build"), area, true)]);
//! ```
//!
//! ## Features
//!
//! - `std` (default): compile against the standard library.
//! - `libm`: `no_std` floating point through Kurbo.
//! - `tracing`: emit `tracing` events for restructures, scale changes and layout passes.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
pub mod drag;
mod paint;
mod scale;
mod stage;

pub use config::StageConfig;
pub use drag::DragState;
pub use paint::StagePainter;
pub use scale::TimeScale;
pub use stage::{Cursor, ScrollExtent, Stage, ZoomDirection};
