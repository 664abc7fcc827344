use serde::{Deserialize, Serialize};

use crate::core::{DecimalPlaces, Increments, ScaleMode, StartValues};

/// Rotation applied to an axis' tick labels when they risk overlapping.
pub const LABEL_ROTATION_DEGREES: f64 = 30.0;
/// Labels rotate when the label at the highest tick index reaches this length.
pub const LABEL_ROTATION_MIN_CHARS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Formatted labels for one axis plus the overlap-avoidance rotation flag.
///
/// Recomputed on every redraw; the flag is derived from the current label
/// strings, never cached across mode switches.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabels {
    pub labels: Vec<String>,
    pub rotated: bool,
}

/// Formats the label for one tick.
///
/// Linear mode labels read `start + increment * index`; logarithmic mode
/// labels read `10^index`. Both use the axis' fixed decimal precision.
#[must_use]
pub fn axis_label(
    axis: Axis,
    tick_index: usize,
    start: StartValues,
    increments: Increments,
    decimal_places: DecimalPlaces,
    mode: ScaleMode,
) -> String {
    let precision = match axis {
        Axis::X => decimal_places.x,
        Axis::Y => decimal_places.y,
    } as usize;

    let value = match mode {
        ScaleMode::Linear => match axis {
            Axis::X => start.x + increments.x * tick_index as f64,
            Axis::Y => start.y + increments.y * tick_index as f64,
        },
        ScaleMode::Logarithmic => 10f64.powi(tick_index as i32),
    };

    format!("{value:.precision$}")
}

/// Formats all labels for one axis and decides whether they must be rotated.
#[must_use]
pub fn axis_tick_labels(
    axis: Axis,
    tick_count: usize,
    start: StartValues,
    increments: Increments,
    decimal_places: DecimalPlaces,
    mode: ScaleMode,
) -> AxisLabels {
    let labels: Vec<String> = (0..tick_count)
        .map(|i| axis_label(axis, i, start, increments, decimal_places, mode))
        .collect();

    let rotated = labels
        .last()
        .is_some_and(|label| label.chars().count() >= LABEL_ROTATION_MIN_CHARS);

    AxisLabels { labels, rotated }
}
