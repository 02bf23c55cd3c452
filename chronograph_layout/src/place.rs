// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Brick placement inside a lane.

use chronograph_index::Area;
use chronograph_model::Position;

use crate::{BrickAlign, LayoutConfig};

/// Narrows `value` to `i32`, saturating at the bounds.
pub(crate) fn saturate(value: i64) -> i32 {
    i32::try_from(value).unwrap_or(if value < 0 { i32::MIN } else { i32::MAX })
}

/// Converts a child count to `i32`, saturating at `i32::MAX`.
pub(crate) fn count(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

/// Screen area of a brick spanning `position` inside `lane`.
///
/// - `scroll_x` is the horizontal offset in time units, so it scales with
///   `pixels_per_unit` exactly like `position` does.
/// - `scroll_y` is in pixels and is subtracted from the lane-relative `y`.
///   Pass `0` when `lane` was itself laid out with the vertical scroll applied.
///
/// Width is `duration * pixels_per_unit`; height is
/// [`LayoutConfig::brick_height`]. All arithmetic saturates.
#[must_use]
pub fn position_brick(
    position: Position,
    lane: Area,
    scroll_x: i32,
    scroll_y: i32,
    pixels_per_unit: i32,
    config: &LayoutConfig,
) -> Area {
    let ppu = i64::from(pixels_per_unit);
    let width = position.duration().saturating_mul(ppu);
    let x = position
        .start()
        .saturating_mul(ppu)
        .saturating_sub(i64::from(scroll_x).saturating_mul(ppu));
    let h = config.brick_height;
    let y = match config.brick_align {
        BrickAlign::Center => lane
            .y
            .saturating_add(lane.height.saturating_sub(h) / 2)
            .saturating_sub(scroll_y),
        BrickAlign::Pinned => lane.y.saturating_add(h).saturating_sub(scroll_y),
    };
    Area::new(saturate(x), y, saturate(width), h)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(start: i64, end: i64) -> Position {
        Position::new(start, end).unwrap()
    }

    #[test]
    fn centered_in_lane() {
        let lane = Area::new(0, 100, 500, 50);
        let area = position_brick(pos(0, 10), lane, 0, 0, 10, &LayoutConfig::default());
        assert_eq!(area, Area::new(0, 115, 100, 20));
    }

    #[test]
    fn horizontal_scroll_is_in_units() {
        let lane = Area::new(0, 0, 500, 50);
        let area = position_brick(pos(20, 25), lane, 5, 0, 4, &LayoutConfig::default());
        assert_eq!(area.x, 60);
        assert_eq!(area.width, 20);
    }

    #[test]
    fn pinned_sits_one_brick_below_lane_top() {
        let config = LayoutConfig {
            brick_align: BrickAlign::Pinned,
            ..LayoutConfig::default()
        };
        let lane = Area::new(0, 100, 500, 50);
        let area = position_brick(pos(0, 1), lane, 0, 7, 1, &config);
        assert_eq!(area.y, 113);
    }

    #[test]
    fn huge_positions_saturate() {
        let lane = Area::new(0, 0, 10, 50);
        let area = position_brick(pos(0, i64::MAX), lane, 0, 0, 12, &LayoutConfig::default());
        assert_eq!(area.width, i32::MAX);
        let area = position_brick(pos(i64::MIN, 0), lane, 0, 0, 12, &LayoutConfig::default());
        assert_eq!(area.x, i32::MIN);
    }
}
