// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Integer screen rectangles.

use kurbo::Rect;

/// An axis-aligned screen-space rectangle in device pixels.
///
/// `Area` is a plain value: it is never mutated in place, layout passes
/// produce fresh areas. Edges are computed with saturating arithmetic so that
/// extreme scroll offsets clamp instead of overflowing.
///
/// Point containment and intersection treat the right and bottom edges as part
/// of the area (`x <= px <= x + width`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Area {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Horizontal extent.
    pub width: i32,
    /// Vertical extent.
    pub height: i32,
}

impl Area {
    /// Creates an area from its origin and extent.
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// The right edge, `x + width`.
    #[inline]
    #[must_use]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// The bottom edge, `y + height`.
    #[inline]
    #[must_use]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Returns `true` if the area covers no pixels.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Whether the point lies within the area, edges included.
    #[inline]
    #[must_use]
    pub const fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && y >= self.y && x <= self.right() && y <= self.bottom()
    }

    /// Whether the two areas share at least one point, edges included.
    #[inline]
    #[must_use]
    pub const fn intersects(&self, other: &Self) -> bool {
        self.x <= other.right()
            && other.x <= self.right()
            && self.y <= other.bottom()
            && other.y <= self.bottom()
    }

    /// Returns a copy moved by `(dx, dy)`.
    #[inline]
    #[must_use]
    pub const fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(
            self.x.saturating_add(dx),
            self.y.saturating_add(dy),
            self.width,
            self.height,
        )
    }

    /// Converts to a `kurbo` rectangle for drawing backends.
    #[must_use]
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            f64::from(self.x),
            f64::from(self.y),
            f64::from(self.right()),
            f64::from(self.bottom()),
        )
    }

    /// Converts a `kurbo` rectangle into an area, rounding each edge to the
    /// nearest pixel.
    #[must_use]
    pub fn from_rect(rect: Rect) -> Self {
        let rect = rect.abs().round();
        #[expect(
            clippy::cast_possible_truncation,
            reason = "Host rectangles are window-sized; edges fit in i32 after rounding"
        )]
        let (x0, y0, x1, y1) = (rect.x0 as i32, rect.y0 as i32, rect.x1 as i32, rect.y1 as i32);
        Self::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }
}

impl From<Area> for Rect {
    fn from(area: Area) -> Self {
        area.to_rect()
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::Area;

    #[test]
    fn contains_point_is_inclusive_on_every_edge() {
        let a = Area::new(10, 20, 30, 40);
        assert!(a.contains_point(10, 20));
        assert!(a.contains_point(40, 60));
        assert!(a.contains_point(10, 60));
        assert!(a.contains_point(40, 20));
        assert!(!a.contains_point(9, 20));
        assert!(!a.contains_point(41, 20));
        assert!(!a.contains_point(10, 61));
    }

    #[test]
    fn touching_areas_intersect() {
        let a = Area::new(0, 0, 10, 10);
        let b = Area::new(10, 0, 10, 10);
        let c = Area::new(11, 0, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn edges_saturate_instead_of_overflowing() {
        let a = Area::new(i32::MAX - 1, 0, 10, 10);
        assert_eq!(a.right(), i32::MAX);
        assert_eq!(a.translate(10, 0).x, i32::MAX);
    }

    #[test]
    fn kurbo_conversion_keeps_edges() {
        let a = Area::new(-5, 7, 20, 3);
        let r = a.to_rect();
        assert_eq!(r, Rect::new(-5.0, 7.0, 15.0, 10.0));
        assert_eq!(Area::from_rect(r), a);
        assert_eq!(Area::from_rect(Rect::new(0.4, 0.6, 10.4, 3.2)), Area::new(0, 1, 10, 2));
    }

    #[test]
    fn empty_when_either_extent_is_non_positive() {
        assert!(Area::new(0, 0, 0, 10).is_empty());
        assert!(Area::new(0, 0, 10, -1).is_empty());
        assert!(!Area::new(0, 0, 1, 1).is_empty());
    }
}
