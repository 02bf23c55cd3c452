// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout pass and the area tables it fills.

use alloc::vec::Vec;

use chronograph_index::{Area, AreaIndex};
use chronograph_model::{BrickKey, Group, GroupKey, Section, SectionKey, Storage};

use crate::place::{count, position_brick};
use crate::{LayoutConfig, SectionSizing};

/// View state a layout pass is computed for.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayoutRequest {
    /// Client area of the stage.
    pub viewport: Area,
    /// Horizontal offset, in time units.
    pub scroll_x: i32,
    /// Vertical offset, in pixels.
    pub scroll_y: i32,
    /// Section zoom factor. Values below 1 are treated as 1.
    pub zoom: i32,
    /// Pixels per time unit for brick placement.
    pub pixels_per_unit: i32,
}

impl LayoutRequest {
    /// A request for `viewport` with no scroll, zoom 1 and one pixel per unit.
    #[must_use]
    pub const fn new(viewport: Area) -> Self {
        Self {
            viewport,
            scroll_x: 0,
            scroll_y: 0,
            zoom: 1,
            pixels_per_unit: 1,
        }
    }
}

/// Any laid-out hierarchy entity.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    /// A section.
    Section(SectionKey),
    /// A group or subgroup.
    Group(GroupKey),
    /// A brick.
    Brick(BrickKey),
}

/// Spatial layout engine.
///
/// [`compute_layout`](Self::compute_layout) walks a [`Storage`] and assigns an
/// [`Area`] to every section, group, subgroup and brick. Results are kept in
/// dense tables indexed by entity handle, plus a hit-test index over brick
/// areas in insertion order. Every pass replaces all of them.
///
/// The tables are only meaningful for the storage they were computed from;
/// recompute after every restructure.
#[derive(Debug, Default)]
pub struct Calculator {
    config: LayoutConfig,
    frame: Area,
    content_height: i32,
    sections: Vec<Option<Area>>,
    groups: Vec<Option<Area>>,
    bricks: Vec<Option<Area>>,
    hits: AreaIndex<BrickKey>,
}

impl Calculator {
    /// Creates an empty calculator using `config`.
    #[must_use]
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Layout constants in use.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replaces the layout constants. Takes effect on the next pass.
    pub fn set_config(&mut self, config: LayoutConfig) {
        self.config = config;
    }

    /// Drops every computed area.
    pub fn clear(&mut self) {
        self.frame = Area::default();
        self.content_height = 0;
        self.sections.clear();
        self.groups.clear();
        self.bricks.clear();
        self.hits.clear();
    }

    /// Recomputes every area for `storage` at `request`.
    ///
    /// Sections stack downwards from the frame top; each section's height is
    /// split evenly across its groups and each group's across its subgroups.
    /// Bricks are placed in their subgroup's lane.
    pub fn compute_layout<D>(&mut self, storage: &Storage<D>, request: &LayoutRequest) {
        self.clear();
        self.sections.resize(storage.sections().len(), None);
        self.groups.resize(storage.group_count(), None);
        self.bricks.resize(storage.all_bricks().len(), None);

        let cfg = self.config;
        let viewport = request.viewport;
        let zoom = request.zoom.max(1);
        self.frame = Area::new(
            viewport.x,
            viewport
                .y
                .saturating_add(cfg.header_height)
                .saturating_sub(request.scroll_y),
            viewport.width.saturating_sub(cfg.right_margin),
            viewport
                .height
                .saturating_sub(cfg.header_height)
                .saturating_sub(cfg.rulers_height()),
        );

        let mut y = self.frame.y;
        for section in storage.sections() {
            let height = self.section_height(storage, section).saturating_mul(zoom);
            let area = Area::new(
                self.frame.x,
                y,
                self.frame.width.saturating_mul(zoom),
                height,
            );
            self.sections[section.key().index()] = Some(area);
            self.layout_groups(storage, section, area, request);
            y = y.saturating_add(height).saturating_add(cfg.section_separator);
        }
        self.content_height = y.saturating_sub(self.frame.y);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            sections = self.sections.len(),
            groups = self.groups.len(),
            bricks = self.hits.len(),
            zoom,
            pixels_per_unit = request.pixels_per_unit,
            "computed layout"
        );
    }

    /// Unzoomed height of `section`.
    fn section_height<D>(&self, storage: &Storage<D>, section: &Section) -> i32 {
        let cfg = &self.config;
        let lanes = storage.groups_of(section).fold(0_i32, |sum, group| {
            let lanes = count(group.subgroups().len().max(1));
            sum.saturating_add(lanes.saturating_mul(cfg.lane_height))
        });
        let label = match cfg.section_sizing {
            SectionSizing::Lanes => 0,
            SectionSizing::Labelled { char_width } => count(section.id().chars().count())
                .saturating_mul(char_width)
                .saturating_add(cfg.section_separator),
        };
        cfg.section_padding.saturating_add(lanes.max(label))
    }

    fn layout_groups<D>(
        &mut self,
        storage: &Storage<D>,
        section: &Section,
        area: Area,
        request: &LayoutRequest,
    ) {
        let groups = section.groups();
        if groups.is_empty() {
            return;
        }
        let inset = self.config.group_inset;
        let delta = area.height / count(groups.len());
        for (index, group) in storage.groups_of(section).enumerate() {
            let group_area = Area::new(
                area.x.saturating_add(inset),
                area.y.saturating_add(count(index).saturating_mul(delta)),
                area.width.saturating_add(inset),
                delta,
            );
            self.groups[group.key().index()] = Some(group_area);
            self.layout_subgroups(storage, group, group_area, request);
        }
    }

    fn layout_subgroups<D>(
        &mut self,
        storage: &Storage<D>,
        group: &Group,
        area: Area,
        request: &LayoutRequest,
    ) {
        let n = count(group.subgroups().len());
        if n == 0 {
            return;
        }
        let inset = self.config.group_inset;
        for (index, lane) in storage.subgroups_of(group).enumerate() {
            let offset = count(index).saturating_mul(area.height) / n;
            let lane_area = Area::new(
                area.x.saturating_add(inset),
                area.y.saturating_add(offset),
                area.width.saturating_add(inset),
                area.height / n,
            );
            self.groups[lane.key().index()] = Some(lane_area);
            for brick in storage.bricks_of(lane) {
                // The lane already carries the vertical scroll.
                let brick_area = position_brick(
                    brick.position(),
                    lane_area,
                    request.scroll_x,
                    0,
                    request.pixels_per_unit,
                    &self.config,
                );
                self.bricks[brick.key().index()] = Some(brick_area);
                self.hits.insert(brick_area, brick.key());
            }
        }
    }

    /// Area sections are stacked in: the viewport minus header, rulers and
    /// right margin, shifted by the vertical scroll.
    #[must_use]
    pub fn frame(&self) -> Area {
        self.frame
    }

    /// Height from the frame top to below the last section separator.
    #[must_use]
    pub fn content_height(&self) -> i32 {
        self.content_height
    }

    /// Area of any node, if laid out.
    #[must_use]
    pub fn area_of(&self, node: Node) -> Option<Area> {
        match node {
            Node::Section(key) => self.section_area(key),
            Node::Group(key) => self.group_area(key),
            Node::Brick(key) => self.brick_area(key),
        }
    }

    /// Area of a section.
    #[must_use]
    pub fn section_area(&self, key: SectionKey) -> Option<Area> {
        self.sections.get(key.index()).copied().flatten()
    }

    /// Area of a group or subgroup.
    #[must_use]
    pub fn group_area(&self, key: GroupKey) -> Option<Area> {
        self.groups.get(key.index()).copied().flatten()
    }

    /// Area of a brick.
    #[must_use]
    pub fn brick_area(&self, key: BrickKey) -> Option<Area> {
        self.bricks.get(key.index()).copied().flatten()
    }

    /// Area of the first brick in `storage` whose id is `id`.
    #[must_use]
    pub fn brick_area_by_id<D>(&self, storage: &Storage<D>, id: &str) -> Option<Area> {
        storage
            .all_bricks()
            .iter()
            .find(|brick| brick.id() == id)
            .and_then(|brick| self.brick_area(brick.key()))
    }

    /// First laid-out brick whose area contains `(x, y)`, edges included.
    #[must_use]
    pub fn brick_at(&self, x: i32, y: i32) -> Option<BrickKey> {
        self.hits.first_at(x, y).copied()
    }

    /// Every laid-out brick whose area contains `(x, y)`, in layout order.
    ///
    /// The first entry is [`brick_at`](Self::brick_at)'s answer.
    #[must_use]
    pub fn bricks_at(&self, x: i32, y: i32) -> Vec<BrickKey> {
        self.hits.query_point(x, y).map(|(_, key)| *key).collect()
    }

    /// Bricks whose area intersects `area`, in layout order.
    #[must_use]
    pub fn bricks_in(&self, area: Area) -> Vec<BrickKey> {
        self.hits.query_area(area).map(|(_, key)| *key).collect()
    }
}
