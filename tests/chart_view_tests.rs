use graph_widget::api::{ChartEngine, ChartSetup};
use graph_widget::core::{DecimalPlaces, GraphConfig, Point, TickGeometry};
use graph_widget::error::{GraphError, GraphResult};
use graph_widget::render::{NullRenderer, RenderFrame, Renderer};
use graph_widget::view::{
    ChartView, DEFAULT_MARKER_SCALE, HOVERED_MARKER_SCALE, TickSlots, ViewState,
};

/// Keeps the last rendered frame so tests can assert on full redraw output.
#[derive(Debug, Default)]
struct RecordingRenderer {
    last_frame: Option<RenderFrame>,
    hidden: bool,
}

impl Renderer for RecordingRenderer {
    fn render(&mut self, frame: &RenderFrame) -> GraphResult<()> {
        self.last_frame = Some(frame.clone());
        self.hidden = false;
        Ok(())
    }

    fn hide(&mut self) {
        self.hidden = true;
    }
}

fn engine_with_points(connect_points: bool, points: &[(f64, f64)]) -> ChartEngine {
    let setup = ChartSetup::new(vec![GraphConfig::new(
        "Test Graph",
        "x",
        "y",
        connect_points,
    )])
    .with_decimal_places(DecimalPlaces::new(1, 1));
    let mut engine = ChartEngine::new(setup).expect("engine init");
    for &(x, y) in points {
        engine.append_point(0, x, y).expect("append");
    }
    engine
}

fn view(
    connect_points: bool,
    points: &[(f64, f64)],
) -> ChartView<RecordingRenderer, TickGeometry> {
    ChartView::new(
        engine_with_points(connect_points, points),
        RecordingRenderer::default(),
        TickGeometry::new(80.0, 60.0),
        TickSlots::new(5, 5),
    )
}

#[test]
fn open_performs_a_full_redraw() {
    let mut view = view(true, &[(0.0, 0.2), (10.0, 0.4), (25.0, 0.6)]);
    assert_eq!(view.state(), ViewState::Closed);

    view.open(0).expect("open");
    assert_eq!(view.state(), ViewState::Open);

    let frame = view.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame.markers.len(), 3);
    assert_eq!(frame.segments.len(), 2);
    assert_eq!(frame.tick_labels.len(), 10);
}

#[test]
fn empty_series_renders_no_markers_and_no_segments() {
    let mut view = view(true, &[]);
    view.open(0).expect("open");

    let frame = view.renderer().last_frame.as_ref().expect("frame");
    assert!(frame.markers.is_empty());
    assert!(frame.segments.is_empty());
    // Axis labels are still drawn from the empty-series default increments.
    assert_eq!(frame.tick_labels.len(), 10);
}

#[test]
fn unconnected_series_draws_markers_only() {
    let mut view = view(false, &[(0.0, 0.0), (1.0, 1.0)]);
    view.open(0).expect("open");

    let frame = view.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame.markers.len(), 2);
    assert!(frame.segments.is_empty());
}

#[test]
fn close_hides_the_surface_and_blocks_mode_switch() {
    let mut view = view(false, &[(1.0, 1.0)]);
    view.open(0).expect("open");
    view.close();

    assert_eq!(view.state(), ViewState::Closed);
    assert!(view.renderer().hidden);
    assert!(matches!(view.switch_mode(), Err(GraphError::GraphClosed)));
}

#[test]
fn mode_switch_round_trip_restores_marker_positions() {
    let mut view = view(false, &[(0.0, 0.2), (10.0, 0.4), (25.0, 0.6)]);
    view.open(0).expect("open");
    let linear = view.renderer().last_frame.clone().expect("frame");

    view.switch_mode().expect("to log");
    let log = view.renderer().last_frame.clone().expect("frame");
    assert_ne!(linear.markers, log.markers);

    view.switch_mode().expect("back to linear");
    let restored = view.renderer().last_frame.clone().expect("frame");
    assert_eq!(linear.markers, restored.markers);
}

#[test]
fn hover_shows_inspector_text_and_scales_the_marker() {
    let mut view = view(false, &[(10.0, 0.42), (20.0, 0.8)]);
    view.open(0).expect("open");

    view.pointer_enter(Point::new(10.0, 0.42)).expect("enter");
    assert!(view.inspector().visible);
    assert_eq!(view.inspector().text, "(10.0, 0.4)");

    let frame = view.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame.markers[0].scale, HOVERED_MARKER_SCALE);
    assert_eq!(frame.markers[1].scale, DEFAULT_MARKER_SCALE);

    view.pointer_exit().expect("exit");
    assert!(!view.inspector().visible);
    assert!(view.inspector().text.is_empty());
    let frame = view.renderer().last_frame.as_ref().expect("frame");
    assert_eq!(frame.markers[0].scale, DEFAULT_MARKER_SCALE);
}

#[test]
fn hover_while_closed_is_ignored() {
    let mut view = view(false, &[(1.0, 1.0)]);
    view.pointer_enter(Point::new(1.0, 1.0)).expect("no-op");
    assert!(!view.inspector().visible);
}

#[test]
fn null_renderer_counts_redraw_output() {
    let engine = engine_with_points(true, &[(0.0, 0.0), (5.0, 5.0)]);
    let mut view = ChartView::new(
        engine,
        NullRenderer::default(),
        TickGeometry::new(80.0, 60.0),
        TickSlots::new(4, 6),
    );
    view.open(0).expect("open");

    let renderer = view.renderer();
    assert_eq!(renderer.last_marker_count, 2);
    assert_eq!(renderer.last_segment_count, 1);
    assert_eq!(renderer.last_label_count, 10);
    assert_eq!(renderer.render_calls, 1);
}
