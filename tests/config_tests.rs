mod support;

use std::time::Duration;

use line_graph::api::{GraphSnapshot, Lifecycle};
use line_graph::core::{DataSeries, GraphSettings, SurfaceSize};
use line_graph::render::{MarkerStyle, RecordingSurface, RevealPhase};
use line_graph::{GraphConfig, GraphError, LineGraph};

use support::initialized;

#[test]
fn partial_json_keeps_remaining_defaults() {
    let config =
        GraphConfig::from_json_str(r#"{"settings":{"circle_size":6}}"#).expect("parse config");

    assert_eq!(config.settings.circle_size, 6.0);
    assert_eq!(config.settings.line_stroke, 3.0);
    assert_eq!(config.settings.circle_stroke, 3.0);
    assert_eq!(config.settings.tooltip_offset, 40.0);
    assert_eq!(config.view_box_width, 100.0);
    assert_eq!(config.marker_style, MarkerStyle::default());
    assert_eq!(config.throttle_window(), Duration::from_millis(50));
}

#[test]
fn config_json_round_trip() {
    let config = GraphConfig::new(GraphSettings::default().with_tooltip_offset(12.0))
        .with_view_box(200.0, 80.0)
        .with_throttle_window_ms(16)
        .with_marker_style(MarkerStyle {
            fill: "black".to_owned(),
            stroke: "#00aaff".to_owned(),
        });

    let json = config.to_json_pretty().expect("serialize config");
    let parsed = GraphConfig::from_json_str(&json).expect("parse config");
    assert_eq!(parsed, config);
}

#[test]
fn malformed_json_is_rejected() {
    let err = GraphConfig::from_json_str("{\"settings\":").expect_err("malformed json");
    assert!(matches!(err, GraphError::InvalidData(_)));
    assert!(format!("{err}").contains("failed to parse graph config json"));
}

#[test]
fn strict_validation_reports_offending_setting() {
    let err = GraphConfig::new(GraphSettings::default().with_circle_stroke(-1.0))
        .validate()
        .expect_err("negative stroke");
    assert!(format!("{err}").contains("circle_stroke"));

    let err = GraphConfig::default()
        .with_view_box(0.0, 100.0)
        .validate()
        .expect_err("empty view box");
    assert!(format!("{err}").contains("view_box_width"));
}

#[test]
fn graph_falls_back_to_defaults_for_invalid_settings() {
    let settings = GraphSettings::default()
        .with_circle_size(f64::NAN)
        .with_line_stroke(-2.0)
        .with_circle_stroke(0.0)
        .with_tooltip_offset(0.0);
    let surface = RecordingSurface::new(SurfaceSize::new(100.0, 100.0));
    let series = DataSeries::new(vec![5.0, 10.0]).expect("series");
    let graph = LineGraph::new(surface, series, GraphConfig::new(settings));

    let sanitized = graph.config().settings;
    assert_eq!(sanitized.circle_size, 10.0);
    assert_eq!(sanitized.line_stroke, 3.0);
    assert_eq!(sanitized.tooltip_offset, 40.0);
    // Zero circle geometry is a legal, if degenerate, layout.
    assert_eq!(sanitized.circle_stroke, 0.0);
}

#[test]
fn zero_line_stroke_falls_back_to_default() {
    let settings = GraphSettings::default().with_line_stroke(0.0);
    let surface = RecordingSurface::new(SurfaceSize::new(100.0, 100.0));
    let series = DataSeries::new(vec![5.0, 10.0]).expect("series");
    let mut graph = LineGraph::new(surface, series, GraphConfig::new(settings));
    graph.initialize().expect("initialize");

    assert_eq!(graph.config().settings.line_stroke, 3.0);
    assert_eq!(graph.layout().expect("layout").line_stroke_width, 3.0);

    let err = GraphConfig::new(settings)
        .validate()
        .expect_err("zero line stroke is rejected by strict validation");
    assert!(format!("{err}").contains("line_stroke"));
}

#[test]
fn snapshot_json_round_trip() {
    let mut graph = initialized(&[5.0, 10.0, 7.5]);
    graph.on_tick().expect("tick");

    let snapshot = graph.snapshot();
    assert_eq!(snapshot.lifecycle, Lifecycle::Active);
    assert!(matches!(snapshot.reveal, RevealPhase::Revealed { .. }));
    assert_eq!(snapshot.markers.len(), 3);

    let json = snapshot.to_json_pretty().expect("serialize snapshot");
    let parsed = GraphSnapshot::from_json_str(&json).expect("parse snapshot");
    assert_eq!(parsed, snapshot);
}
