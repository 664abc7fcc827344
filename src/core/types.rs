use serde::{Deserialize, Serialize};

/// One data sample on a graph.
///
/// Values are taken as-is; non-finite coordinates are accepted at append time
/// and propagate into projection output (documented limitation).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis origin values subtracted from raw data before scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct StartValues {
    pub x: f64,
    pub y: f64,
}

impl StartValues {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Fixed decimal precision used when formatting tick labels and
/// inspector coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecimalPlaces {
    pub x: u8,
    pub y: u8,
}

impl DecimalPlaces {
    #[must_use]
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

impl Default for DecimalPlaces {
    fn default() -> Self {
        Self { x: 1, y: 1 }
    }
}

/// Pixel distance between two consecutive axis ticks.
///
/// Owned by the view layer and re-queried on every redraw since it depends
/// on live layout state; the engine never caches it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickGeometry {
    pub x_tick_distance: f64,
    pub y_tick_distance: f64,
}

impl TickGeometry {
    #[must_use]
    pub fn new(x_tick_distance: f64, y_tick_distance: f64) -> Self {
        Self {
            x_tick_distance,
            y_tick_distance,
        }
    }
}

/// Projected position in viewport units, relative to the graph origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenPosition {
    pub x: f64,
    pub y: f64,
}

/// Axis mapping mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScaleMode {
    /// Uniform spacing in raw data units.
    #[default]
    Linear,
    /// Both axes treated as log10-scaled.
    Logarithmic,
}

impl ScaleMode {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Linear => Self::Logarithmic,
            Self::Logarithmic => Self::Linear,
        }
    }
}
