// Copyright 2025 the Chronograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The view-state controller.

use alloc::string::{String, ToString};
use alloc::sync::Arc;
use alloc::vec::Vec;

use chronograph_index::Area;
use chronograph_layout::{Calculator, LayoutRequest};
use chronograph_model::{
    Actual, Brick, BrickKey, Classifier, DataAccess, Expired, RestructureError, RestructureReport,
    Storage,
};
use chronograph_selection::Selection;
use kurbo::Point;

use crate::{DragState, StageConfig, StagePainter, TimeScale};

/// Direction of a zoom step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Enlarge sections by one zoom step.
    In,
    /// Shrink sections by one zoom step, down to zoom 1.
    Out,
}

/// Pointer feedback a host can map to a cursor shape.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Nothing under the pointer.
    #[default]
    Default,
    /// A brick is under the pointer.
    Hand,
    /// The pointer pans the stage.
    Navigation,
}

/// Scroll ranges for the host's scrollbars.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ScrollExtent {
    /// Latest brick end, in time units. Zero without bricks.
    pub horizontal: i64,
    /// Height of all sections, in pixels.
    pub vertical: i32,
}

/// A timeline stage: hierarchy, layout and view state behind one API.
///
/// The stage owns the data source `A`, the [`Storage`] built from it, the
/// [`Calculator`] that lays it out, and the view state: horizontal pan,
/// vertical scroll, zoom, time scale and selection. Every input that changes
/// the view recomputes the layout synchronously and raises the redraw flag
/// returned by [`take_redraw`](Self::take_redraw).
///
/// Horizontal pan is kept twice: as a pixel offset, which drags and pan
/// deltas move, and as the derived offset in time units that brick
/// placement consumes.
pub struct Stage<D, A> {
    access: A,
    config: StageConfig,
    storage: Storage<D>,
    calculator: Calculator,
    viewport: Area,
    time: TimeScale,
    position_x: i32,
    hint_x: i32,
    scroll_y: i32,
    zoom: i32,
    selection: Selection<String>,
    drag: DragState,
    redraw: bool,
}

impl<D, A> core::fmt::Debug for Stage<D, A> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Stage")
            .field("storage", &self.storage)
            .field("viewport", &self.viewport)
            .field("time", &self.time)
            .field("position_x", &self.position_x)
            .field("hint_x", &self.hint_x)
            .field("scroll_y", &self.scroll_y)
            .field("zoom", &self.zoom)
            .field("selection", &self.selection.len())
            .finish_non_exhaustive()
    }
}

impl<D, A: DataAccess<D>> Stage<D, A> {
    /// Creates an empty stage over `access`.
    ///
    /// Nothing is shown until [`restructure_view`](Self::restructure_view) and
    /// [`on_resize`](Self::on_resize) have been called.
    pub fn new(access: A, config: StageConfig) -> Self {
        Self {
            access,
            storage: Storage::new(),
            calculator: Calculator::new(config.layout),
            viewport: Area::default(),
            time: TimeScale::new(config.initial_scale, config.scale_factor),
            position_x: 0,
            hint_x: 0,
            scroll_y: 0,
            zoom: 1,
            selection: Selection::new(),
            drag: DragState::default(),
            redraw: true,
            config,
        }
    }

    /// Settings the stage was created with.
    #[must_use]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// The data source.
    #[must_use]
    pub fn access(&self) -> &A {
        &self.access
    }

    /// The current hierarchy.
    #[must_use]
    pub fn storage(&self) -> &Storage<D> {
        &self.storage
    }

    /// The current layout.
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Ids of the selected bricks.
    #[must_use]
    pub fn selection(&self) -> &Selection<String> {
        &self.selection
    }

    /// Client area the layout is computed for.
    #[must_use]
    pub fn viewport(&self) -> Area {
        self.viewport
    }

    /// Current time scale.
    #[must_use]
    pub fn time_scale(&self) -> TimeScale {
        self.time
    }

    /// Current section zoom, at least 1.
    #[must_use]
    pub fn zoom(&self) -> i32 {
        self.zoom
    }

    /// Horizontal pan offset in pixels.
    #[must_use]
    pub fn position_x(&self) -> i32 {
        self.position_x
    }

    /// Horizontal pan offset in time units.
    #[must_use]
    pub fn scroll_x(&self) -> i32 {
        self.hint_x
    }

    /// Vertical scroll offset in pixels.
    #[must_use]
    pub fn scroll_y(&self) -> i32 {
        self.scroll_y
    }

    /// Rebuilds the hierarchy from the data source using `structure`, then
    /// relayouts.
    ///
    /// Selected ids that no longer name a brick are dropped.
    ///
    /// # Errors
    ///
    /// Forwards [`RestructureError`] from [`Storage::restructure`]; the stage
    /// is then empty.
    pub fn restructure_view(
        &mut self,
        structure: &[Arc<dyn Classifier<D>>],
    ) -> Result<RestructureReport, RestructureError> {
        self.calculator.clear();
        let result = self.storage.restructure(&self.access, structure);
        let storage = &self.storage;
        self.selection
            .retain(|id| storage.all_bricks().iter().any(|b| b.id() == id));
        self.relayout();
        #[cfg(feature = "tracing")]
        match &result {
            Ok(report) => tracing::debug!(
                bricks = report.bricks,
                dropped = report.dropped,
                "stage restructured"
            ),
            Err(err) => tracing::warn!(%err, "stage restructure failed"),
        }
        result
    }

    /// Re-runs [`restructure_view`](Self::restructure_view) with the structure
    /// recorded by the last successful restructure, picking up changes in the
    /// data source.
    ///
    /// # Errors
    ///
    /// [`RestructureError::InvalidConfiguration`] if no structure was recorded.
    pub fn refresh(&mut self) -> Result<RestructureReport, RestructureError> {
        let structure: Vec<Arc<dyn Classifier<D>>> = self.storage.structure().to_vec();
        self.restructure_view(&structure)
    }

    /// Decrements the time scale (finer resolution) and keeps the same time
    /// unit at the left edge.
    pub fn scale_up(&mut self) {
        let scale = self.time.scale().saturating_sub(1);
        self.rescale(scale);
    }

    /// Increments the time scale and keeps the same time unit at the left edge.
    pub fn scale_down(&mut self) {
        let scale = self.time.scale().saturating_add(1);
        self.rescale(scale);
    }

    fn rescale(&mut self, scale: i32) {
        if !self.time.set_scale(scale) {
            return;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(
            scale = self.time.scale(),
            pixels_per_unit = self.time.pixels_per_unit(),
            "stage rescaled"
        );
        self.navigate_to_unit(self.hint_x);
    }

    /// Scrolls so that time unit `hint` sits at the left edge. Negative hints
    /// clamp to 0.
    pub fn navigate_to_unit(&mut self, hint: i32) {
        self.position_x = self.time.unit_to_pixels(hint.max(0));
        self.apply_hint();
    }

    /// Pans by `delta` pixels of pointer movement. Positive deltas move
    /// towards earlier time; the offset never goes below 0.
    pub fn on_pan(&mut self, delta: i32) {
        self.pan_from(self.position_x, delta);
    }

    fn pan_from(&mut self, origin_x: i32, delta: i32) {
        self.position_x = origin_x
            .saturating_sub(delta.saturating_mul(self.time.scale()))
            .max(0);
        self.apply_hint();
    }

    /// Derives the unit offset from the pixel offset and relayouts.
    fn apply_hint(&mut self) {
        self.hint_x = self.time.pixels_to_unit(self.position_x);
        self.relayout();
    }

    /// Steps the section zoom.
    pub fn on_zoom(&mut self, direction: ZoomDirection) {
        let zoom = match direction {
            ZoomDirection::In => self.zoom.saturating_add(1),
            ZoomDirection::Out => self.zoom.saturating_sub(1).max(1),
        };
        if zoom != self.zoom {
            self.zoom = zoom;
            self.relayout();
        }
    }

    /// Replaces the client area.
    pub fn on_resize(&mut self, viewport: Area) {
        self.viewport = viewport;
        self.relayout();
    }

    /// Sets the vertical scroll offset, clamped to at least 0.
    pub fn on_vertical_scroll(&mut self, offset: i32) {
        self.scroll_y = offset.max(0);
        self.relayout();
    }

    /// Scrolls vertically by `pages` page increments; negative pages scroll up.
    pub fn on_vertical_page(&mut self, pages: i32) {
        let delta = pages.saturating_mul(self.config.vertical_page_increment);
        self.on_vertical_scroll(self.scroll_y.saturating_add(delta));
    }

    /// Toggles the brick under `(x, y)`, if any, and returns its key.
    pub fn on_select(&mut self, x: i32, y: i32) -> Option<BrickKey> {
        let key = self.calculator.brick_at(x, y)?;
        let id = self.storage.brick(key)?.id().to_string();
        self.toggle(id);
        Some(key)
    }

    /// Toggles `brick` in the selection.
    ///
    /// Selection is by id: deselecting a brick also deselects any other
    /// brick sharing its id.
    pub fn select(&mut self, brick: &Brick<D>) {
        self.toggle(brick.id().to_string());
    }

    fn toggle(&mut self, id: String) {
        self.selection.toggle(id);
        self.redraw = true;
    }

    /// Returns `true` if `brick`'s id is selected.
    #[must_use]
    pub fn is_selected(&self, brick: &Brick<D>) -> bool {
        self.selection.iter().any(|id| id == brick.id())
    }

    /// Deselects everything.
    pub fn clear_selection(&mut self) {
        let revision = self.selection.revision();
        self.selection.clear();
        if self.selection.revision() != revision {
            self.redraw = true;
        }
    }

    /// Starts a drag-to-pan and toggles the brick under `point`, if any.
    pub fn on_pointer_down(&mut self, point: Point) -> Cursor {
        self.drag.start(point, self.position_x);
        let (x, y) = pixel(point);
        if self.on_select(x, y).is_some() {
            Cursor::Hand
        } else {
            Cursor::Navigation
        }
    }

    /// Pans while dragging; otherwise reports whether a brick is hovered.
    ///
    /// The pan offset becomes the drag origin minus the horizontal drag
    /// distance times the time scale, clamped at 0.
    pub fn on_pointer_move(&mut self, point: Point) -> Cursor {
        if let Some(offset) = self.drag.offset(point) {
            let (dx, _) = pixel(offset.to_point());
            self.pan_from(self.drag.origin_x(), dx);
            return Cursor::Navigation;
        }
        let (x, y) = pixel(point);
        if self.calculator.brick_at(x, y).is_some() {
            Cursor::Hand
        } else {
            Cursor::Default
        }
    }

    /// Ends a drag.
    pub fn on_pointer_up(&mut self, _point: Point) -> Cursor {
        self.drag.end();
        Cursor::Default
    }

    /// Returns `true` while a drag-to-pan is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Brick under `(x, y)`, edges included.
    #[must_use]
    pub fn brick_at(&self, x: i32, y: i32) -> Option<&Brick<D>> {
        self.calculator
            .brick_at(x, y)
            .and_then(|key| self.storage.brick(key))
    }

    /// Every brick under `(x, y)`, topmost first. Hosts use it to list
    /// overlapping bricks in a tooltip.
    #[must_use]
    pub fn bricks_at(&self, x: i32, y: i32) -> Vec<&Brick<D>> {
        self.calculator
            .bricks_at(x, y)
            .into_iter()
            .filter_map(|key| self.storage.brick(key))
            .collect()
    }

    /// Ranges the host's scrollbars should cover.
    ///
    /// The horizontal extent scans every brick.
    #[must_use]
    pub fn scroll_extent(&self) -> ScrollExtent {
        ScrollExtent {
            horizontal: self.storage.max_end().unwrap_or(0).max(0),
            vertical: self.calculator.content_height(),
        }
    }

    /// Returns and resets the redraw flag.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.redraw)
    }

    /// Hands every laid-out entity to `painter`, then the status line with
    /// the actual and expired brick counts at `now`.
    pub fn paint<P>(&self, painter: &mut P, now: i64)
    where
        P: StagePainter<D> + ?Sized,
    {
        let storage = &self.storage;
        let calc = &self.calculator;
        for section in storage.sections() {
            for group in storage.groups_of(section) {
                for lane in storage.subgroups_of(group) {
                    let Some(area) = calc.group_area(lane.key()) else {
                        continue;
                    };
                    for brick in storage.bricks_of(lane) {
                        if let Some(brick_area) = calc.brick_area(brick.key()) {
                            painter.brick(brick, brick_area, self.is_selected(brick));
                        }
                    }
                    painter.subgroup(lane, area);
                }
                if let Some(area) = calc.group_area(group.key()) {
                    painter.group(group, area);
                }
            }
            if let Some(area) = calc.section_area(section.key()) {
                painter.section(section, area);
            }
        }
        painter.status(
            self.viewport,
            storage.count(&Actual { now }),
            storage.count(&Expired { now }),
        );
    }

    fn relayout(&mut self) {
        let request = LayoutRequest {
            viewport: self.viewport,
            scroll_x: self.hint_x,
            scroll_y: self.scroll_y,
            zoom: self.zoom,
            pixels_per_unit: self.time.pixels_per_unit(),
        };
        self.calculator.compute_layout(&self.storage, &request);
        self.redraw = true;
    }
}

/// Rounds a pointer position to whole pixels.
fn pixel(point: Point) -> (i32, i32) {
    let point = point.round();
    #[expect(
        clippy::cast_possible_truncation,
        reason = "Pointer coordinates are rounded and saturate at the i32 bounds"
    )]
    {
        (point.x as i32, point.y as i32)
    }
}
