pub mod increments;
pub mod projection;
pub mod series;
pub mod types;

pub use increments::{
    EMPTY_SERIES_INCREMENT, Increments, X_FALLBACK_INCREMENT, Y_FALLBACK_INCREMENT,
    compute_increments,
};
pub use projection::{LineSegment, line_segments, project, project_series};
pub use series::{GraphConfig, Series};
pub use types::{DecimalPlaces, Point, ScaleMode, ScreenPosition, StartValues, TickGeometry};
