use crate::core::TickGeometry;
use crate::render::{MarkerPrimitive, SegmentPrimitive, TickLabelPrimitive};

/// Backend-agnostic scene for one full chart redraw.
///
/// Every transition (open, mode switch) materializes a complete frame; there
/// is no incremental patching.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub geometry: TickGeometry,
    pub markers: Vec<MarkerPrimitive>,
    pub segments: Vec<SegmentPrimitive>,
    pub tick_labels: Vec<TickLabelPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(geometry: TickGeometry) -> Self {
        Self {
            geometry,
            markers: Vec::new(),
            segments: Vec::new(),
            tick_labels: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty() && self.segments.is_empty() && self.tick_labels.is_empty()
    }
}
