use line_graph::core::{DataSeries, GraphSettings, LayoutState, SurfaceSize, ViewBox};
use proptest::prelude::*;

fn layout(values: Vec<f64>, width: f64) -> LayoutState {
    let series = DataSeries::new(values).expect("valid series");
    LayoutState::compute(
        &series,
        GraphSettings::default(),
        ViewBox::sized(100.0, 100.0),
        SurfaceSize::new(width, 300.0),
    )
    .expect("layout")
}

proptest! {
    #[test]
    fn x_coordinates_are_evenly_spaced(
        values in prop::collection::vec(0.0f64..1000.0, 2..64),
        width in 50.0f64..2000.0,
    ) {
        let layout = layout(values, width);
        let points = &layout.points;
        let step = points[1].x - points[0].x;

        prop_assert_eq!(points[0].x, 0.0);
        for pair in points.windows(2) {
            prop_assert!(pair[1].x > pair[0].x);
            prop_assert!(((pair[1].x - pair[0].x) - step).abs() <= 2e-4);
        }
    }

    #[test]
    fn largest_value_maps_to_top(
        values in prop::collection::vec(0.0f64..1000.0, 2..64),
        width in 50.0f64..2000.0,
    ) {
        let max = values.iter().copied().fold(0.0f64, f64::max);
        prop_assume!(max > 0.0);
        let layout = layout(values.clone(), width);

        for (value, point) in values.iter().zip(&layout.points) {
            prop_assert!(point.y >= 0.0);
            if *value == max {
                prop_assert_eq!(point.y, 0.0);
            }
        }
    }

    #[test]
    fn higher_values_never_sit_lower(
        values in prop::collection::vec(0.0f64..1000.0, 2..64),
        width in 50.0f64..2000.0,
    ) {
        let layout = layout(values.clone(), width);
        for i in 0..values.len() {
            for j in 0..values.len() {
                if values[i] > values[j] {
                    prop_assert!(layout.points[i].y <= layout.points[j].y);
                }
            }
        }
    }

    #[test]
    fn recomputing_is_deterministic(
        values in prop::collection::vec(0.0f64..1000.0, 1..64),
        width in 50.0f64..2000.0,
    ) {
        prop_assert_eq!(layout(values.clone(), width), layout(values, width));
    }
}
