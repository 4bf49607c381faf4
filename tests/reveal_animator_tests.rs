mod support;

use line_graph::core::SurfaceSize;
use line_graph::render::{DrawSurface, RevealPhase, SurfaceCommand, SurfaceElement, style};

use support::initialized;

fn line_length(graph: &line_graph::LineGraph<line_graph::render::RecordingSurface>) -> f64 {
    graph
        .surface()
        .path_length(SurfaceElement::Line)
        .expect("line length")
}

#[test]
fn initialize_hides_line_until_next_tick() {
    let graph = initialized(&[5.0, 10.0]);
    let length = line_length(&graph);

    assert_eq!(graph.reveal_phase(), RevealPhase::Hidden { total_length: length });
    assert_eq!(
        graph.surface().style(SurfaceElement::Line, style::STROKE_DASHARRAY),
        Some(format!("0, {length}").as_str())
    );
    assert!(!graph.surface().has_class(SurfaceElement::Line, "transition"));
}

#[test]
fn tick_reveals_once() {
    let mut graph = initialized(&[5.0, 10.0]);
    let length = line_length(&graph);

    assert!(graph.on_tick().expect("tick"));
    assert_eq!(graph.reveal_phase(), RevealPhase::Revealed { total_length: length });
    assert!(graph.surface().has_class(SurfaceElement::Line, "transition"));
    assert_eq!(
        graph.surface().style(SurfaceElement::Line, style::STROKE_DASHARRAY),
        Some(format!("{length}, 0").as_str())
    );

    assert!(!graph.on_tick().expect("second tick"));
}

#[test]
fn tick_before_initialize_does_nothing() {
    let mut graph = support::graph_with(&[5.0, 10.0], 100.0, 100.0);
    assert!(!graph.on_tick().expect("tick"));
    assert_eq!(graph.reveal_phase(), RevealPhase::Pending);
    assert!(graph.surface().commands().is_empty());
}

#[test]
fn resize_after_reveal_does_not_replay_animation() {
    let mut graph = initialized(&[5.0, 10.0]);
    graph.on_tick().expect("tick");
    graph.surface_mut().take_commands();

    graph.surface_mut().resize(SurfaceSize::new(50.0, 100.0));
    graph.on_resize().expect("resize");
    let length = line_length(&graph);

    assert_eq!(graph.reveal_phase(), RevealPhase::Revealed { total_length: length });
    let dash_updates: Vec<String> = graph
        .surface()
        .commands()
        .iter()
        .filter_map(|command| match command {
            SurfaceCommand::SetStyle {
                element: SurfaceElement::Line,
                property,
                value,
            } if property == style::STROKE_DASHARRAY => Some(value.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(dash_updates, vec![format!("{length}, 0")]);
}

#[test]
fn resize_before_tick_keeps_line_hidden_with_new_length() {
    let mut graph = initialized(&[5.0, 10.0]);
    graph.surface_mut().resize(SurfaceSize::new(50.0, 100.0));
    graph.on_resize().expect("resize");
    let length = line_length(&graph);

    assert_eq!(graph.reveal_phase(), RevealPhase::Hidden { total_length: length });
    assert!(graph.on_tick().expect("tick"));
    assert_eq!(
        graph.surface().style(SurfaceElement::Line, style::STROKE_DASHARRAY),
        Some(format!("{length}, 0").as_str())
    );
}
