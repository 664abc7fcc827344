//! graph-widget: embeddable 2D scatter/line graph core.
//!
//! The crate splits the widget into a rendering-free [`api::ChartEngine`]
//! (series storage, axis increments, point projection, label layout) and a
//! thin [`view::ChartView`] adapter that drives any [`render::Renderer`]
//! backend supplied by the host application.

pub mod api;
pub mod core;
pub mod error;
pub mod export;
pub mod render;
pub mod telemetry;
pub mod view;

pub use api::{ChartEngine, ChartSetup};
pub use error::{GraphError, GraphResult};
