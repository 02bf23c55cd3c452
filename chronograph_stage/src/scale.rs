// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stepped time scale of a stage.

/// Integer time scale plus the pixels-per-unit curve derived from it.
///
/// The scale is clamped to `1..`. Pixels per unit follow a deliberately
/// non-linear curve:
///
/// | scale | pixels per unit     |
/// |-------|---------------------|
/// | 1..=3 | `scale * 2`         |
/// | 4     | `scale * 3`         |
/// | 5..   | `scale * factor`    |
///
/// The horizontal pan offset of a stage is measured in pixels of
/// `pixels_per_unit * scale` per time unit; see [`TimeScale::unit_to_pixels`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct TimeScale {
    scale: i32,
    factor: i32,
}

impl TimeScale {
    /// Creates a scale, clamping `scale` and `factor` to at least 1.
    #[must_use]
    pub const fn new(scale: i32, factor: i32) -> Self {
        Self {
            scale: if scale < 1 { 1 } else { scale },
            factor: if factor < 1 { 1 } else { factor },
        }
    }

    /// Current scale.
    #[must_use]
    pub const fn scale(&self) -> i32 {
        self.scale
    }

    /// Multiplier applied above scale 4.
    #[must_use]
    pub const fn factor(&self) -> i32 {
        self.factor
    }

    /// Sets the scale, clamped to at least 1. Returns `true` if it changed.
    pub fn set_scale(&mut self, scale: i32) -> bool {
        let clamped = scale.max(1);
        if clamped == self.scale {
            return false;
        }
        self.scale = clamped;
        true
    }

    /// Pixels per time unit at the current scale.
    #[must_use]
    pub const fn pixels_per_unit(&self) -> i32 {
        let multiplier = match self.scale {
            ..=3 => 2,
            4 => 3,
            _ => self.factor,
        };
        self.scale.saturating_mul(multiplier)
    }

    /// Pan offset in pixels for a horizontal position in time units.
    #[must_use]
    pub const fn unit_to_pixels(&self, unit: i32) -> i32 {
        unit.saturating_mul(self.stride())
    }

    /// Horizontal position in time units for a pan offset in pixels.
    #[must_use]
    pub const fn pixels_to_unit(&self, pixels: i32) -> i32 {
        pixels / self.stride()
    }

    /// Pixels of pan offset per time unit. Never zero.
    const fn stride(&self) -> i32 {
        let stride = self.pixels_per_unit().saturating_mul(self.scale);
        if stride < 1 { 1 } else { stride }
    }
}

#[cfg(test)]
mod tests {
    use super::TimeScale;

    #[test]
    fn pixels_per_unit_follows_steps() {
        let ppu = |scale| TimeScale::new(scale, 5).pixels_per_unit();
        assert_eq!(ppu(1), 2);
        assert_eq!(ppu(2), 4);
        assert_eq!(ppu(3), 6);
        assert_eq!(ppu(4), 12);
        assert_eq!(ppu(5), 25);
        assert_eq!(ppu(7), 35);
    }

    #[test]
    fn scale_is_clamped_to_one() {
        let mut scale = TimeScale::new(0, 0);
        assert_eq!(scale.scale(), 1);
        assert_eq!(scale.factor(), 1);
        assert!(!scale.set_scale(-3));
        assert!(scale.set_scale(2));
        assert_eq!(scale.scale(), 2);
    }

    #[test]
    fn unit_and_pixel_offsets_round_trip_on_whole_units() {
        let scale = TimeScale::new(4, 5);
        assert_eq!(scale.unit_to_pixels(10), 480);
        assert_eq!(scale.pixels_to_unit(480), 10);
        assert_eq!(scale.pixels_to_unit(479), 9);
    }

    #[test]
    fn large_values_saturate() {
        let scale = TimeScale::new(i32::MAX, i32::MAX);
        assert_eq!(scale.pixels_per_unit(), i32::MAX);
        assert_eq!(scale.unit_to_pixels(i32::MAX), i32::MAX);
        assert_eq!(scale.pixels_to_unit(i32::MAX), 1);
    }
}
