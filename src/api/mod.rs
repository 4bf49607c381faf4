mod data_controller;
mod graph_config;
mod graph_init;
mod graph_snapshot;
mod interaction_coordinator;
mod line_graph;
mod resize_coordinator;

pub use graph_config::GraphConfig;
pub use graph_snapshot::GraphSnapshot;
pub use line_graph::{Lifecycle, LineGraph};

pub use crate::core::GraphSettings;
