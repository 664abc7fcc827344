use serde::{Deserialize, Serialize};

use crate::core::{Point, StartValues};

/// Fallback x increment when the x range is degenerate (zero, negative,
/// non-finite, or below one data unit).
pub const X_FALLBACK_INCREMENT: f64 = 0.1;
/// Fallback y increment for a degenerate y range.
pub const Y_FALLBACK_INCREMENT: f64 = 1.0;
/// Increment applied to both axes when the series holds no points at all.
pub const EMPTY_SERIES_INCREMENT: f64 = 10.0;

/// Value-space distance between two consecutive axis ticks.
///
/// Always finite and strictly positive; degenerate inputs resolve to the
/// fallback constants instead of propagating NaN/Infinity into labels or
/// screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Increments {
    pub x: f64,
    pub y: f64,
}

/// Computes "nice" tick increments from the series' per-axis maxima.
///
/// Maxima are floored at 0, so all-negative data behaves like an empty range
/// and falls back. An empty series defaults both axes to 10.
#[must_use]
pub fn compute_increments(points: &[Point], start: StartValues) -> Increments {
    if points.is_empty() {
        return Increments {
            x: EMPTY_SERIES_INCREMENT,
            y: EMPTY_SERIES_INCREMENT,
        };
    }

    let mut max_x = 0.0f64;
    let mut max_y = 0.0f64;
    for point in points {
        if point.x > max_x {
            max_x = point.x;
        }
        if point.y > max_y {
            max_y = point.y;
        }
    }

    Increments {
        x: nice_increment(max_x - start.x).unwrap_or(X_FALLBACK_INCREMENT),
        y: nice_increment(max_y - start.y).unwrap_or(Y_FALLBACK_INCREMENT),
    }
}

/// Rounds an axis range up to a power-of-ten-scaled increment so tick labels
/// read as clean numbers.
///
/// Returns `None` for ranges that cannot produce a usable increment: NaN or
/// infinite ranges, empty or inverted ranges, and sub-unit ranges (order of
/// magnitude below zero), which clamp to the axis fallback instead.
fn nice_increment(range: f64) -> Option<f64> {
    if !range.is_finite() || range < 1.0 {
        return None;
    }

    let order_of_magnitude = range.log10().floor();
    // Puts the range in [1, 10), e.g. 1250 -> 1.25.
    let normalized = range / 10f64.powf(order_of_magnitude);
    let rounded = (normalized * 10.0).round() / 10.0;
    let increment_degree = rounded.ceil();

    Some(increment_degree * 10f64.powf(order_of_magnitude - 1.0))
}
