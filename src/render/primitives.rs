use crate::api::Axis;
use crate::core::{Point, ScreenPosition};

/// Draw command for one point marker.
///
/// Carries the source data point so the view layer can route hover events
/// back to coordinate text without a reverse lookup. Marker coordinates are
/// deliberately not finiteness-checked: non-finite input points produce
/// undefined placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerPrimitive {
    pub position: ScreenPosition,
    pub point: Point,
    /// Visual scale factor, raised while the marker is hovered.
    pub scale: f64,
}

impl MarkerPrimitive {
    #[must_use]
    pub const fn new(position: ScreenPosition, point: Point, scale: f64) -> Self {
        Self {
            position,
            point,
            scale,
        }
    }
}

/// Draw command for one connecting line segment in viewport units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentPrimitive {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Draw command for one axis tick label.
#[derive(Debug, Clone, PartialEq)]
pub struct TickLabelPrimitive {
    pub axis: Axis,
    pub tick_index: usize,
    pub text: String,
    /// 0 when labels fit upright, otherwise the axis-wide rotation angle.
    pub rotation_degrees: f64,
}
