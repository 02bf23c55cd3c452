// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan bookkeeping.
//!
//! 1) [`DragState::start`] on pointer down, with the pan offset at that moment.
//! 2) [`DragState::offset`] on each move returns the offset from the start point.
//! 3) [`DragState::end`] on pointer up.

use kurbo::{Point, Vec2};

/// Tracks one drag gesture and the pan offset it started from.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DragState {
    start_pos: Option<Point>,
    origin_x: i32,
}

impl DragState {
    /// Starts a drag at `pos`, remembering the pan offset `origin_x`.
    pub fn start(&mut self, pos: Point, origin_x: i32) {
        self.start_pos = Some(pos);
        self.origin_x = origin_x;
    }

    /// Returns the total offset of `pos` from the drag start.
    ///
    /// Returns `None` when no drag is active.
    pub fn offset(&self, pos: Point) -> Option<Vec2> {
        let start = self.start_pos?;
        Some(pos - start)
    }

    /// Pan offset the drag started from.
    #[must_use]
    pub fn origin_x(&self) -> i32 {
        self.origin_x
    }

    /// Ends the drag.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_state_ignores_moves() {
        let drag = DragState::default();
        assert!(!drag.is_dragging());
        assert_eq!(drag.offset(Point::new(5.0, 5.0)), None);
    }

    #[test]
    fn offset_is_measured_from_start() {
        let mut drag = DragState::default();
        drag.start(Point::new(10.0, 20.0), 300);

        assert_eq!(drag.offset(Point::new(15.0, 25.0)), Some(Vec2::new(5.0, 5.0)));
        assert_eq!(drag.offset(Point::new(4.0, 20.0)), Some(Vec2::new(-6.0, 0.0)));
        assert_eq!(drag.origin_x(), 300);
    }

    #[test]
    fn end_resets_everything() {
        let mut drag = DragState::default();
        drag.start(Point::new(1.0, 1.0), 7);
        drag.end();
        assert_eq!(drag, DragState::default());
    }

    #[test]
    fn start_overwrites_previous_drag() {
        let mut drag = DragState::default();
        drag.start(Point::new(0.0, 0.0), 1);
        drag.start(Point::new(50.0, 60.0), 2);
        assert_eq!(drag.offset(Point::new(55.0, 65.0)), Some(Vec2::new(5.0, 5.0)));
        assert_eq!(drag.origin_x(), 2);
    }
}
