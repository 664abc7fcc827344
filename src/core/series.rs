use serde::{Deserialize, Serialize};

use crate::core::Point;

/// Per-series display metadata, set once at configuration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub connect_points: bool,
}

impl GraphConfig {
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        x_title: impl Into<String>,
        y_title: impl Into<String>,
        connect_points: bool,
    ) -> Self {
        Self {
            title: title.into(),
            x_title: x_title.into(),
            y_title: y_title.into(),
            connect_points,
        }
    }
}

/// One ordered, append-only collection of data points.
///
/// Insertion order is significant: connecting lines are drawn between
/// consecutive points. Points are never removed during a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    pub fn append(&mut self, point: Point) {
        self.points.push(point);
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
