// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use chronograph_layout::LayoutConfig;

/// Settings of a [`Stage`](crate::Stage).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct StageConfig {
    /// Time scale a new stage starts at.
    pub initial_scale: i32,
    /// Pixels-per-unit multiplier above scale 4.
    pub scale_factor: i32,
    /// Pixels scrolled by one vertical page step.
    pub vertical_page_increment: i32,
    /// Layout constants.
    pub layout: LayoutConfig,
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            initial_scale: 5,
            scale_factor: 5,
            vertical_page_increment: 15,
            layout: LayoutConfig::default(),
        }
    }
}
