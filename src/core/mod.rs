pub mod layout;
pub mod mapper;
pub mod path;
pub mod primitives;
pub mod series;
pub mod settings;
pub mod types;

pub use layout::LayoutState;
pub use mapper::{CoordinateLayout, compute_layout};
pub use path::{
    GraphPaths, PathCommand, build_background_mask, build_line_path, build_overlay_path,
};
pub use series::DataSeries;
pub use settings::GraphSettings;
pub use types::{BoundingBox, Point, SurfaceSize, ViewBox};
