mod engine;
mod labels;
mod setup;

pub use engine::{AxisState, ChartEngine};
pub use labels::{
    Axis, AxisLabels, LABEL_ROTATION_DEGREES, LABEL_ROTATION_MIN_CHARS, axis_label,
    axis_tick_labels,
};
pub use setup::{ChartSetup, SETUP_JSON_SCHEMA_V1};
