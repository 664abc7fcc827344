use tracing::{debug, trace};

use crate::api::labels::{Axis, AxisLabels, axis_label, axis_tick_labels};
use crate::api::setup::ChartSetup;
use crate::core::{
    DecimalPlaces, GraphConfig, Increments, Point, ScaleMode, ScreenPosition, Series, StartValues,
    TickGeometry, compute_increments, project,
};
use crate::error::{GraphError, GraphResult};

/// Derived axis snapshot for the active series, recomputed on open and on
/// every mode switch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisState {
    pub start_values: StartValues,
    pub increments: Increments,
    pub decimal_places: DecimalPlaces,
    pub mode: ScaleMode,
}

impl AxisState {
    #[must_use]
    pub fn label(&self, axis: Axis, tick_index: usize) -> String {
        axis_label(
            axis,
            tick_index,
            self.start_values,
            self.increments,
            self.decimal_places,
            self.mode,
        )
    }

    #[must_use]
    pub fn tick_labels(&self, axis: Axis, tick_count: usize) -> AxisLabels {
        axis_tick_labels(
            axis,
            tick_count,
            self.start_values,
            self.increments,
            self.decimal_places,
            self.mode,
        )
    }
}

/// Rendering-free chart core.
///
/// Owns its series collection outright; nothing is shared across engine
/// instances. Series count is fixed by the setup, points are append-only,
/// and every derived value (increments, labels, projections) is recomputed
/// from current data on demand.
#[derive(Debug, Clone)]
pub struct ChartEngine {
    series: Vec<Series>,
    configs: Vec<GraphConfig>,
    start_values: StartValues,
    decimal_places: DecimalPlaces,
    mode: ScaleMode,
    active: usize,
}

impl ChartEngine {
    pub fn new(setup: ChartSetup) -> GraphResult<Self> {
        setup.validate()?;
        let series = vec![Series::default(); setup.graphs.len()];
        debug!(graph_count = setup.graphs.len(), "chart engine init");

        Ok(Self {
            series,
            configs: setup.graphs,
            start_values: setup.start_values,
            decimal_places: setup.decimal_places,
            mode: ScaleMode::default(),
            active: 0,
        })
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn mode(&self) -> ScaleMode {
        self.mode
    }

    #[must_use]
    pub fn active_index(&self) -> usize {
        self.active
    }

    #[must_use]
    pub fn active_series(&self) -> &Series {
        &self.series[self.active]
    }

    #[must_use]
    pub fn active_config(&self) -> &GraphConfig {
        &self.configs[self.active]
    }

    pub fn series(&self, series_index: usize) -> GraphResult<&Series> {
        self.series
            .get(series_index)
            .ok_or(GraphError::InvalidSeriesIndex {
                index: series_index,
                count: self.series.len(),
            })
    }

    /// Appends a sample to the given series.
    ///
    /// Values are not validated; NaN/Infinity are stored as-is and produce
    /// undefined placement when projected.
    pub fn append_point(&mut self, series_index: usize, x: f64, y: f64) -> GraphResult<()> {
        let count = self.series.len();
        let series = self
            .series
            .get_mut(series_index)
            .ok_or(GraphError::InvalidSeriesIndex {
                index: series_index,
                count,
            })?;
        series.append(Point::new(x, y));
        trace!(series_index, count = series.len(), "append point");
        Ok(())
    }

    /// Activates a series and recomputes its axis state.
    pub fn open_graph(&mut self, series_index: usize) -> GraphResult<AxisState> {
        if series_index >= self.series.len() {
            return Err(GraphError::InvalidSeriesIndex {
                index: series_index,
                count: self.series.len(),
            });
        }
        self.active = series_index;
        let state = self.axis_state();
        debug!(series_index, increments = ?state.increments, "open graph");
        Ok(state)
    }

    /// Toggles linear/logarithmic projection and recomputes axis state.
    pub fn switch_mode(&mut self) -> AxisState {
        self.mode = self.mode.toggled();
        debug!(mode = ?self.mode, "switch graphing mode");
        self.axis_state()
    }

    /// Recomputes the derived axis snapshot for the active series.
    #[must_use]
    pub fn axis_state(&self) -> AxisState {
        AxisState {
            start_values: self.start_values,
            increments: compute_increments(self.active_series().points(), self.start_values),
            decimal_places: self.decimal_places,
            mode: self.mode,
        }
    }

    /// Projects one point with the engine's current axis state.
    ///
    /// Geometry is a parameter, not engine state: the caller must query it
    /// fresh after any layout change.
    #[must_use]
    pub fn project_point(&self, point: Point, geometry: TickGeometry) -> ScreenPosition {
        let state = self.axis_state();
        project(
            point,
            state.start_values,
            state.increments,
            geometry,
            state.mode,
        )
    }

    /// Coordinate text for the hover inspector panel.
    #[must_use]
    pub fn inspector_text(&self, point: Point) -> String {
        let x_precision = self.decimal_places.x as usize;
        let y_precision = self.decimal_places.y as usize;
        format!(
            "({:.x_precision$}, {:.y_precision$})",
            point.x, point.y
        )
    }
}
