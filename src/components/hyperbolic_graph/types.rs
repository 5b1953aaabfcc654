#[derive(Clone, Debug)]
pub struct GraphNode {
	pub id: String,
	pub label: Option<String>,
	pub color: Option<String>,
	pub group: Option<u32>,
}

#[derive(Clone, Debug)]
pub struct GraphEdge {
	pub source: String,
	pub target: String,
}

#[derive(Clone, Debug, Default)]
pub struct GraphData {
	pub nodes: Vec<GraphNode>,
	pub edges: Vec<GraphEdge>,
}

/// How the force layout is put on screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
	/// Raw layout coordinates with pan and zoom.
	Euclidean,
	/// Layout projected into the Poincaré disk.
	#[default]
	Hyperbolic,
}

impl ViewMode {
	pub fn toggled(self) -> Self {
		match self {
			ViewMode::Euclidean => ViewMode::Hyperbolic,
			ViewMode::Hyperbolic => ViewMode::Euclidean,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			ViewMode::Euclidean => "Euclidean",
			ViewMode::Hyperbolic => "Poincaré disk",
		}
	}
}
