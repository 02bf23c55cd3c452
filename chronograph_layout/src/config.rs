// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pixel constants that drive the layout.

/// Vertical placement of a brick inside its lane.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BrickAlign {
    /// Centered in the lane.
    #[default]
    Center,
    /// One brick height below the lane top.
    Pinned,
}

/// How a section's height is derived.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SectionSizing {
    /// Sum of the lane heights of its groups.
    #[default]
    Lanes,
    /// Like [`Lanes`](Self::Lanes), but never shorter than the section id
    /// measured at `char_width` pixels per character, plus one separator.
    Labelled {
        /// Pixels per character of the section id.
        char_width: i32,
    },
}

/// Layout constants, in pixels.
///
/// The defaults reproduce the classic Chronograph stage.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayoutConfig {
    /// Stage header above the first section.
    pub header_height: i32,
    /// Day ruler below the sections.
    pub ruler_day_height: i32,
    /// Month ruler.
    pub ruler_month_height: i32,
    /// Year ruler.
    pub ruler_year_height: i32,
    /// Horizontal space kept free at the right edge of the viewport.
    pub right_margin: i32,
    /// Vertical gap between consecutive sections.
    pub section_separator: i32,
    /// Extra height added to every section before zoom.
    pub section_padding: i32,
    /// Default height of one lane (subgroup).
    pub lane_height: i32,
    /// Horizontal inset of a group from its container.
    pub group_inset: i32,
    /// Height of every brick.
    pub brick_height: i32,
    /// Vertical placement of bricks inside their lane.
    pub brick_align: BrickAlign,
    /// Section height policy.
    pub section_sizing: SectionSizing,
}

impl LayoutConfig {
    /// Combined height of the three rulers.
    #[must_use]
    pub const fn rulers_height(&self) -> i32 {
        self.ruler_day_height
            .saturating_add(self.ruler_month_height)
            .saturating_add(self.ruler_year_height)
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            header_height: 30,
            ruler_day_height: 15,
            ruler_month_height: 15,
            ruler_year_height: 15,
            right_margin: 10,
            section_separator: 10,
            section_padding: 10,
            lane_height: 50,
            group_inset: 30,
            brick_height: 20,
            brick_align: BrickAlign::Center,
            section_sizing: SectionSizing::Lanes,
        }
    }
}
