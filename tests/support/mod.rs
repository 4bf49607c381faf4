#![allow(dead_code)]

use line_graph::core::{BoundingBox, DataSeries, SurfaceSize};
use line_graph::render::{
    DrawSurface, MarkerAttributes, MarkerId, RecordingSurface, SurfaceCommand, SurfaceElement,
};
use line_graph::{GraphConfig, GraphError, GraphResult, LineGraph};

pub fn graph_with(values: &[f64], width: f64, height: f64) -> LineGraph<RecordingSurface> {
    let series = DataSeries::new(values.to_vec()).expect("valid series");
    let surface = RecordingSurface::new(SurfaceSize::new(width, height)).with_origin(10.0, 20.0);
    LineGraph::new(surface, series, GraphConfig::default())
}

pub fn initialized(values: &[f64]) -> LineGraph<RecordingSurface> {
    let mut graph = graph_with(values, 100.0, 100.0);
    graph.initialize().expect("initialize");
    graph
}

pub fn commands_for(commands: &[SurfaceCommand], element: SurfaceElement) -> Vec<SurfaceCommand> {
    commands
        .iter()
        .filter(|command| command.element() == element)
        .cloned()
        .collect()
}

/// Recording surface that rejects marker creation once its budget is spent.
#[derive(Debug)]
pub struct MarkerBudgetSurface {
    pub inner: RecordingSurface,
    pub markers_left: usize,
}

impl MarkerBudgetSurface {
    pub fn new(size: SurfaceSize, markers_left: usize) -> Self {
        Self {
            inner: RecordingSurface::new(size),
            markers_left,
        }
    }
}

impl DrawSurface for MarkerBudgetSurface {
    fn pixel_size(&self) -> SurfaceSize {
        self.inner.pixel_size()
    }

    fn bounding_box(&self, element: SurfaceElement) -> GraphResult<BoundingBox> {
        self.inner.bounding_box(element)
    }

    fn content(&self, element: SurfaceElement) -> Option<String> {
        self.inner.content(element)
    }

    fn path_length(&self, element: SurfaceElement) -> GraphResult<f64> {
        self.inner.path_length(element)
    }

    fn set_attribute(
        &mut self,
        element: SurfaceElement,
        name: &str,
        value: String,
    ) -> GraphResult<()> {
        self.inner.set_attribute(element, name, value)
    }

    fn set_style(
        &mut self,
        element: SurfaceElement,
        property: &str,
        value: String,
    ) -> GraphResult<()> {
        self.inner.set_style(element, property, value)
    }

    fn add_class(&mut self, element: SurfaceElement, class: &str) -> GraphResult<()> {
        self.inner.add_class(element, class)
    }

    fn remove_class(&mut self, element: SurfaceElement, class: &str) -> GraphResult<()> {
        self.inner.remove_class(element, class)
    }

    fn set_content(&mut self, element: SurfaceElement, content: String) -> GraphResult<()> {
        self.inner.set_content(element, content)
    }

    fn create_marker(&mut self, attributes: &MarkerAttributes) -> GraphResult<MarkerId> {
        if self.markers_left == 0 {
            return Err(GraphError::InvalidData("marker budget exhausted".to_owned()));
        }
        self.markers_left -= 1;
        self.inner.create_marker(attributes)
    }

    fn remove_element(&mut self, element: SurfaceElement) -> GraphResult<()> {
        self.inner.remove_element(element)
    }
}
