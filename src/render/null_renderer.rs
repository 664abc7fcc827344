use crate::error::GraphResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It records counts from the last frame so tests can assert on redraw
/// output before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_marker_count: usize,
    pub last_segment_count: usize,
    pub last_label_count: usize,
    pub hidden: bool,
    pub render_calls: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        self.last_marker_count = frame.markers.len();
        self.last_segment_count = frame.segments.len();
        self.last_label_count = frame.tick_labels.len();
        self.hidden = false;
        self.render_calls += 1;
        Ok(())
    }

    fn hide(&mut self) {
        self.hidden = true;
    }
}
