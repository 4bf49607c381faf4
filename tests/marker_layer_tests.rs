use line_graph::core::{DataSeries, GraphSettings, LayoutState, SurfaceSize, ViewBox};
use line_graph::render::{
    DrawSurface, MarkerLayer, MarkerStyle, RecordingSurface, SurfaceCommand, SurfaceElement, attr,
};

fn layout(values: &DataSeries, width: f64) -> LayoutState {
    LayoutState::compute(
        values,
        GraphSettings::default(),
        ViewBox::sized(100.0, 100.0),
        SurfaceSize::new(width, 100.0),
    )
    .expect("layout")
}

#[test]
fn creates_one_marker_per_point_with_bound_value() {
    let series = DataSeries::new(vec![5.0, 10.0, 7.5]).expect("series");
    let mut surface = RecordingSurface::new(SurfaceSize::new(100.0, 100.0));
    let layer = MarkerLayer::create(
        &mut surface,
        &series,
        &layout(&series, 100.0),
        &MarkerStyle::default(),
    )
    .expect("markers");

    assert_eq!(layer.len(), 3);
    let contents: Vec<&str> = layer.markers().iter().map(|m| m.content()).collect();
    assert_eq!(contents, ["5", "10", "7.5"]);

    let second = layer.markers()[1].element();
    assert_eq!(surface.attribute(second, attr::CX), Some("38.5"));
    assert_eq!(surface.attribute(second, attr::R), Some("10"));
    assert_eq!(surface.attribute(second, attr::STROKE_WIDTH), Some("3"));
    assert_eq!(surface.attribute(second, attr::FILL), Some("white"));
    assert_eq!(surface.attribute(second, attr::STROKE), Some("#ff7714"));
    assert_eq!(surface.attribute(second, attr::DATA_CONTENT), Some("10"));
}

#[test]
fn reposition_and_restyle_update_in_place() {
    let series = DataSeries::new(vec![5.0, 10.0]).expect("series");
    let mut surface = RecordingSurface::new(SurfaceSize::new(100.0, 100.0));
    let mut layer = MarkerLayer::create(
        &mut surface,
        &series,
        &layout(&series, 100.0),
        &MarkerStyle::default(),
    )
    .expect("markers");
    let ids_before: Vec<_> = layer.markers().iter().map(|m| m.id()).collect();
    surface.take_commands();

    let narrow = layout(&series, 50.0);
    layer.restyle(&mut surface, &narrow).expect("restyle");
    layer
        .reposition(&mut surface, &narrow.points)
        .expect("reposition");

    let ids_after: Vec<_> = layer.markers().iter().map(|m| m.id()).collect();
    assert_eq!(ids_before, ids_after);
    assert!(
        !surface
            .commands()
            .iter()
            .any(|c| matches!(c, SurfaceCommand::CreateMarker { .. }))
    );

    let last = layer.markers()[1].element();
    assert_eq!(surface.attribute(last, attr::CX), Some("54"));
    assert_eq!(surface.attribute(last, attr::R), Some("20"));
    assert_eq!(surface.attribute(last, attr::STROKE_WIDTH), Some("6"));
    assert_eq!(surface.attribute(last, attr::DATA_CONTENT), Some("10"));
    assert_eq!(layer.markers()[1].content(), "10");
}

#[test]
fn reposition_rejects_point_count_mismatch() {
    let series = DataSeries::new(vec![5.0, 10.0]).expect("series");
    let mut surface = RecordingSurface::new(SurfaceSize::new(100.0, 100.0));
    let computed = layout(&series, 100.0);
    let mut layer = MarkerLayer::create(&mut surface, &series, &computed, &MarkerStyle::default())
        .expect("markers");

    let err = layer
        .reposition(&mut surface, &computed.points[..1])
        .expect_err("mismatch must fail");
    assert!(format!("{err}").contains("marker count mismatch"));
}

#[test]
fn hit_resolves_only_owned_handles() {
    let series = DataSeries::new(vec![1.0, 2.0]).expect("series");
    let mut surface = RecordingSurface::new(SurfaceSize::new(100.0, 100.0));
    let layer = MarkerLayer::create(
        &mut surface,
        &series,
        &layout(&series, 100.0),
        &MarkerStyle::default(),
    )
    .expect("markers");

    let id = layer.markers()[1].id();
    assert_eq!(layer.hit(id).map(|m| m.index()), Some(1));
    let foreign = line_graph::render::MarkerId(42);
    assert!(layer.hit(foreign).is_none());
    assert!(surface.bounding_box(SurfaceElement::Marker(foreign)).is_err());
}
