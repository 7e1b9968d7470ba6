use super::*;
use crate::dataset::Point;
use crate::server::StepReply;
use crate::view::ViewState;
use plotters::style::RGBColor;

fn state_with(dataset: Vec<Point>, centroids: Vec<Point>, clusters: Vec<i64>) -> ViewState {
    let mut state = ViewState::new();
    state.replace_dataset(dataset);
    if !centroids.is_empty() || !clusters.is_empty() {
        state.apply_step(StepReply {
            centroids,
            clusters,
        });
    }
    state
}

fn point_fills(plot: &Plot) -> Vec<RGBColor> {
    plot.shapes
        .iter()
        .filter(|s| s.kind == ShapeKind::DataPoint)
        .map(|s| s.fill)
        .collect()
}

#[test]
fn test_empty_state_renders_nothing() {
    let plot = render(&ViewState::new(), PlotSize::default());
    assert!(plot.shapes.is_empty());
    let svg = plot.to_svg().unwrap();
    assert!(svg.contains(r#"width="600""#));
    assert!(svg.contains(r#"height="400""#));
    assert_eq!(circle_tags(&svg).len(), 0);
}

#[test]
fn test_coordinate_mapping() {
    let state = state_with(vec![Point::new(0.5, 0.25)], vec![], vec![]);
    let plot = render(&state, PlotSize::default());

    let shape = &plot.shapes[0];
    assert_eq!(shape.cx, 300.0);
    assert_eq!(shape.cy, 100.0);
    assert_eq!(shape.r, 5.0);
}

#[test]
fn test_unclustered_points_use_default_color() {
    let state = state_with(vec![Point::new(0.1, 0.2); 4], vec![], vec![]);
    let plot = render(&state, PlotSize::default());
    assert_eq!(point_fills(&plot), vec![DEFAULT_POINT_COLOR; 4]);
    assert_eq!(plot.count(ShapeKind::Centroid), 0);
}

#[test]
fn test_points_colored_by_assignment() {
    let state = state_with(
        vec![Point::new(0.1, 0.1); 3],
        vec![Point::new(0.2, 0.2), Point::new(0.7, 0.7)],
        vec![1, 0, 1],
    );
    let plot = render(&state, PlotSize::default());
    assert_eq!(
        point_fills(&plot),
        vec![CATEGORY10[1], CATEGORY10[0], CATEGORY10[1]]
    );
}

#[test]
fn test_centroids_drawn_after_points() {
    let state = state_with(
        vec![Point::new(0.1, 0.1); 2],
        vec![Point::new(0.5, 0.5)],
        vec![0, 0],
    );
    let plot = render(&state, PlotSize { width: 100, height: 50 });

    let last = plot.shapes.last().unwrap();
    assert_eq!(last.kind, ShapeKind::Centroid);
    assert_eq!(last.fill, CENTROID_COLOR);
    assert_eq!(last.r, 7.0);
    assert_eq!((last.cx, last.cy), (50.0, 25.0));
}

#[test]
fn test_short_assignment_falls_back() {
    let state = state_with(
        vec![Point::new(0.1, 0.1); 3],
        vec![Point::new(0.5, 0.5)],
        vec![0],
    );
    let plot = render(&state, PlotSize::default());
    assert_eq!(
        point_fills(&plot),
        vec![CATEGORY10[0], DEFAULT_POINT_COLOR, DEFAULT_POINT_COLOR]
    );
}

#[test]
fn test_long_assignment_ignores_surplus() {
    let state = state_with(
        vec![Point::new(0.1, 0.1)],
        vec![Point::new(0.5, 0.5)],
        vec![0, 0, 0, 0],
    );
    let plot = render(&state, PlotSize::default());
    assert_eq!(plot.count(ShapeKind::DataPoint), 1);
    assert_eq!(plot.count(ShapeKind::Centroid), 1);
}

#[test]
fn test_out_of_range_assignments() {
    assert_eq!(cluster_color(Some(-1), 3), DEFAULT_POINT_COLOR);
    assert_eq!(cluster_color(Some(3), 3), DEFAULT_POINT_COLOR);
    assert_eq!(cluster_color(Some(10), 12), DEFAULT_POINT_COLOR);
    assert_eq!(cluster_color(None, 3), DEFAULT_POINT_COLOR);
    assert_eq!(cluster_color(Some(2), 3), CATEGORY10[2]);
}

#[test]
fn test_render_is_idempotent() {
    let state = state_with(
        vec![Point::new(0.3, 0.6); 5],
        vec![Point::new(0.5, 0.5)],
        vec![0; 5],
    );
    let first = render(&state, PlotSize::default());
    let second = render(&state, PlotSize::default());
    assert_eq!(first, second);
    assert_eq!(first.shapes.len(), 6);
}

/// The `<circle .../>` tags of an SVG document, lowercased.
fn circle_tags(svg: &str) -> Vec<String> {
    svg.split("<circle")
        .skip(1)
        .map(|rest| rest.split("/>").next().unwrap_or(rest).to_lowercase())
        .collect()
}

#[test]
fn test_svg_output() {
    let state = state_with(
        vec![Point::new(0.5, 0.5)],
        vec![Point::new(0.25, 0.75)],
        vec![0],
    );
    let svg = render(&state, PlotSize::default()).to_svg().unwrap();

    assert!(svg.contains("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));

    let circles = circle_tags(&svg);
    assert_eq!(circles.len(), 2);

    let point = &circles[0];
    assert!(point.contains(r#"cx="300""#));
    assert!(point.contains(r#"cy="200""#));
    assert!(point.contains(r#"r="5""#));
    assert!(point.contains(r##"fill="#1f77b4""##));

    let centroid = &circles[1];
    assert!(centroid.contains(r#"cx="150""#));
    assert!(centroid.contains(r#"cy="300""#));
    assert!(centroid.contains(r#"r="7""#));
    assert!(centroid.contains(r##"fill="#ff0000""##));
}

#[test]
fn test_svg_rounds_to_whole_pixels() {
    let state = state_with(vec![Point::new(0.1234, 0.5678)], vec![], vec![]);
    let svg = render(&state, PlotSize::default()).to_svg().unwrap();

    let circles = circle_tags(&svg);
    assert_eq!(circles.len(), 1);
    assert!(circles[0].contains(r#"cx="74""#));
    assert!(circles[0].contains(r#"cy="227""#));
    assert!(circles[0].contains(r##"fill="#000000""##));
}

#[test]
fn test_write_svg_to_file() {
    let state = state_with(vec![Point::new(0.5, 0.5)], vec![], vec![]);
    let plot = render(&state, PlotSize::default());
    let path = std::env::temp_dir().join(format!("kmeans-viz-{}.svg", std::process::id()));

    plot.write_svg(&path).unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert_eq!(written, plot.to_svg().unwrap());
}

#[test]
fn test_write_svg_to_missing_dir() {
    let plot = render(&ViewState::new(), PlotSize::default());
    let err = plot
        .write_svg(std::path::Path::new("/nonexistent-dir/plot.svg"))
        .unwrap_err();
    assert!(matches!(err, RenderError::Io(_)));
}
