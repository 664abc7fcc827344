use crate::core::{Increments, Point, ScaleMode, ScreenPosition, StartValues, TickGeometry};

/// Projects one data point into viewport units.
///
/// Deterministic and side-effect free so rendering and tests consume the
/// exact same geometry output. Non-finite point values pass straight through.
///
/// Logarithmic mode intentionally ignores start values and increments and
/// maps `v -> (log10(v + 1) + 1) * tick_distance` on each axis; the asymmetry
/// with linear mode is preserved behavior, covered by a dedicated test.
#[must_use]
pub fn project(
    point: Point,
    start: StartValues,
    increments: Increments,
    geometry: TickGeometry,
    mode: ScaleMode,
) -> ScreenPosition {
    match mode {
        ScaleMode::Linear => ScreenPosition {
            x: ((point.x - start.x) / increments.x) * geometry.x_tick_distance,
            y: ((point.y - start.y) / increments.y) * geometry.y_tick_distance,
        },
        ScaleMode::Logarithmic => ScreenPosition {
            x: ((point.x + 1.0).log10() + 1.0) * geometry.x_tick_distance,
            y: ((point.y + 1.0).log10() + 1.0) * geometry.y_tick_distance,
        },
    }
}

/// Projects a whole series, preserving insertion order.
#[must_use]
pub fn project_series(
    points: &[Point],
    start: StartValues,
    increments: Increments,
    geometry: TickGeometry,
    mode: ScaleMode,
) -> Vec<ScreenPosition> {
    points
        .iter()
        .map(|&point| project(point, start, increments, geometry, mode))
        .collect()
}

/// Connecting line segment between two consecutive projected points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Pairs adjacent projected positions into line segments.
///
/// Empty and single-point series produce no segments.
#[must_use]
pub fn line_segments(positions: &[ScreenPosition]) -> Vec<LineSegment> {
    if positions.len() < 2 {
        return Vec::new();
    }

    positions
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        })
        .collect()
}
