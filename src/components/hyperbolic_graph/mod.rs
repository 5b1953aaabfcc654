mod component;
mod render;
mod state;
mod types;

pub use component::HyperbolicGraphCanvas;
pub use types::{GraphData, GraphEdge, GraphNode, ViewMode};
