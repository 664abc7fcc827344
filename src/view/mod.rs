//! Thin adapter between the engine and a concrete rendering surface.
//!
//! `ChartView` owns the open/closed state machine, asks the engine for
//! projected geometry and labels, and materializes full `RenderFrame`s.
//! It never computes chart math itself.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::api::{Axis, ChartEngine, LABEL_ROTATION_DEGREES};
use crate::core::{Point, TickGeometry, line_segments, project_series};
use crate::error::{GraphError, GraphResult};
use crate::export::export_csv;
use crate::render::{MarkerPrimitive, RenderFrame, Renderer, SegmentPrimitive, TickLabelPrimitive};

/// Marker scale factor while hovered.
pub const HOVERED_MARKER_SCALE: f64 = 1.3;
/// Marker scale factor at rest.
pub const DEFAULT_MARKER_SCALE: f64 = 1.0;

/// Supplies current tick distances from live layout state.
///
/// Queried fresh at the top of every redraw: tick distances change whenever
/// the surface is resized, so the view must never hold on to an old value.
pub trait GeometryProvider {
    fn tick_geometry(&self) -> TickGeometry;
}

/// Fixed geometry, for tests and hosts with a static layout.
impl GeometryProvider for TickGeometry {
    fn tick_geometry(&self) -> TickGeometry {
        *self
    }
}

/// Number of tick label slots per axis, fixed by the surface layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSlots {
    pub x: usize,
    pub y: usize,
}

impl TickSlots {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Closed,
    Open,
}

/// Hover inspector panel contents.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct InspectorState {
    pub visible: bool,
    pub text: String,
}

/// Chart view adapter driving a rendering backend.
///
/// State machine: `Closed` -> `open` -> `Open`; `switch_mode` keeps the view
/// `Open`; `close` returns to `Closed` and hides the surface. Every
/// transition while open performs a full deterministic redraw.
pub struct ChartView<R: Renderer, G: GeometryProvider> {
    engine: ChartEngine,
    renderer: R,
    geometry: G,
    slots: TickSlots,
    state: ViewState,
    hovered: Option<Point>,
    inspector: InspectorState,
}

impl<R: Renderer, G: GeometryProvider> ChartView<R, G> {
    #[must_use]
    pub fn new(engine: ChartEngine, renderer: R, geometry: G, slots: TickSlots) -> Self {
        Self {
            engine,
            renderer,
            geometry,
            slots,
            state: ViewState::Closed,
            hovered: None,
            inspector: InspectorState::default(),
        }
    }

    #[must_use]
    pub fn state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn inspector(&self) -> &InspectorState {
        &self.inspector
    }

    #[must_use]
    pub fn engine(&self) -> &ChartEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut ChartEngine {
        &mut self.engine
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    /// Opens the given series: recomputes axes, clears old output, redraws.
    pub fn open(&mut self, series_index: usize) -> GraphResult<()> {
        self.engine.open_graph(series_index)?;
        self.state = ViewState::Open;
        self.hovered = None;
        self.inspector = InspectorState::default();
        debug!(series_index, "open chart view");
        self.redraw()
    }

    /// Hides the rendering surface; series data is kept.
    pub fn close(&mut self) {
        self.state = ViewState::Closed;
        self.hovered = None;
        self.inspector = InspectorState::default();
        self.renderer.hide();
        debug!("close chart view");
    }

    /// Toggles linear/logarithmic projection and redraws.
    pub fn switch_mode(&mut self) -> GraphResult<()> {
        if self.state != ViewState::Open {
            return Err(GraphError::GraphClosed);
        }
        self.engine.switch_mode();
        self.redraw()
    }

    /// Pointer entered a rendered marker.
    ///
    /// Fire-and-forget: replaces inspector state outright and highlights the
    /// hovered marker. Ignored while closed.
    pub fn pointer_enter(&mut self, point: Point) -> GraphResult<()> {
        if self.state != ViewState::Open {
            return Ok(());
        }
        self.hovered = Some(point);
        self.inspector = InspectorState {
            visible: true,
            text: self.engine.inspector_text(point),
        };
        self.redraw()
    }

    /// Pointer left the hovered marker. Ignored while closed.
    pub fn pointer_exit(&mut self) -> GraphResult<()> {
        if self.state != ViewState::Open {
            return Ok(());
        }
        self.hovered = None;
        self.inspector = InspectorState::default();
        self.redraw()
    }

    /// Exports the active series as `<title>.csv` under `dir`.
    pub fn export_active_csv(&self, dir: &Path) -> GraphResult<PathBuf> {
        export_csv(
            dir,
            &self.engine.active_config().title,
            self.engine.active_series().points(),
        )
    }

    /// Builds and submits a complete frame for the active series.
    pub fn redraw(&mut self) -> GraphResult<()> {
        if self.state != ViewState::Open {
            return Err(GraphError::GraphClosed);
        }

        let geometry = self.geometry.tick_geometry();
        let axis_state = self.engine.axis_state();
        let points = self.engine.active_series().points();
        let positions = project_series(
            points,
            axis_state.start_values,
            axis_state.increments,
            geometry,
            axis_state.mode,
        );

        let mut frame = RenderFrame::new(geometry);

        for (&point, &position) in points.iter().zip(&positions) {
            let scale = if self.hovered == Some(point) {
                HOVERED_MARKER_SCALE
            } else {
                DEFAULT_MARKER_SCALE
            };
            frame
                .markers
                .push(MarkerPrimitive::new(position, point, scale));
        }

        if self.engine.active_config().connect_points {
            frame.segments = line_segments(&positions)
                .iter()
                .map(|segment| SegmentPrimitive {
                    x1: segment.x1,
                    y1: segment.y1,
                    x2: segment.x2,
                    y2: segment.y2,
                })
                .collect();
        }

        for (axis, slot_count) in [(Axis::X, self.slots.x), (Axis::Y, self.slots.y)] {
            let labels = axis_state.tick_labels(axis, slot_count);
            let rotation = if labels.rotated {
                LABEL_ROTATION_DEGREES
            } else {
                0.0
            };
            for (tick_index, text) in labels.labels.into_iter().enumerate() {
                frame.tick_labels.push(TickLabelPrimitive {
                    axis,
                    tick_index,
                    text,
                    rotation_degrees: rotation,
                });
            }
        }

        debug!(
            markers = frame.markers.len(),
            segments = frame.segments.len(),
            labels = frame.tick_labels.len(),
            "redraw"
        );
        self.renderer.render(&frame)
    }
}
