use std::collections::{HashMap, HashSet};
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::{error, info};

use super::types::{GraphData, ViewMode};
use crate::geometry::{
	Disk, GeometryError, HyperbolicConfig, PathPrimitive, Point, ProjectedNode, RenderPass,
	centroid,
};

const COLORS: &[&str] = &[
	"#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
	"#bcbd22", "#17becf",
];

pub const NODE_RADIUS: f64 = 5.0;
pub const HIT_RADIUS: f64 = 12.0;
/// Free space between the disk and the short canvas edge, in pixels.
pub const DISK_MARGIN: f64 = 16.0;
/// Smallest marker that can still be picked in the disk.
const MIN_DISK_HIT_RADIUS: f64 = 4.0;
const PROJECTION_SCALE_RANGE: (f64, f64) = (0.0005, 0.05);

#[derive(Clone, Debug, Default)]
pub struct NodeInfo {
	pub label: Option<String>,
	pub color: String,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

/// Shift of the projection centre away from the layout mean, in layout units.
#[derive(Clone, Debug, Default)]
pub struct FocusState {
	pub offset: Point,
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub offset_start: Point,
}

#[derive(Clone, Debug, Default)]
pub struct HoverState {
	pub node: Option<DefaultNodeIdx>,
	pub neighbors: HashSet<DefaultNodeIdx>,
	pub highlight_t: f64,
	pub prev_node: Option<DefaultNodeIdx>,
	pub prev_neighbors: HashSet<DefaultNodeIdx>,
	delay_t: f64,
}

pub struct GraphState {
	pub graph: ForceGraph<NodeInfo, ()>,
	pub mode: ViewMode,
	pub config: HyperbolicConfig,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub focus: FocusState,
	pub hover: HoverState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	pub flow_time: f64,
	/// Output of the last hyperbolic render pass.
	pub projected: HashMap<DefaultNodeIdx, ProjectedNode>,
	pub edge_paths: Vec<(DefaultNodeIdx, DefaultNodeIdx, PathPrimitive)>,
	/// Why the last render pass was rejected, if it was.
	pub pass_error: Option<GeometryError>,
	disk: Option<Disk>,
	edges: Vec<(DefaultNodeIdx, DefaultNodeIdx)>,
}

impl GraphState {
	pub fn new(data: &GraphData, width: f64, height: f64, mode: ViewMode) -> Self {
		let mut graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});
		let mut id_to_idx = HashMap::new();
		let mut edges = Vec::new();

		for (i, node) in data.nodes.iter().enumerate() {
			let color = node.color.clone().unwrap_or_else(|| {
				node.group
					.map(|g| COLORS[g as usize % COLORS.len()].into())
					.unwrap_or(COLORS[0].into())
			});
			// Seed on a circle around the layout origin; the disk is centred on
			// the layout mean so the canvas size does not matter here.
			let angle = (i as f64) * 2.0 * PI / data.nodes.len() as f64;
			let idx = graph.add_node(NodeData {
				x: (100.0 * angle.cos()) as f32,
				y: (100.0 * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodeInfo {
					label: node.label.clone(),
					color,
				},
			});
			id_to_idx.insert(node.id.clone(), idx);
		}

		for edge in &data.edges {
			if let (Some(&src), Some(&tgt)) =
				(id_to_idx.get(&edge.source), id_to_idx.get(&edge.target))
			{
				graph.add_edge(src, tgt, EdgeData::default());
				edges.push((src, tgt));
			}
		}
		info!(
			"graph loaded: {} nodes, {} edges",
			data.nodes.len(),
			edges.len()
		);

		let mut state = Self {
			graph,
			mode,
			config: HyperbolicConfig::default(),
			edges,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			focus: FocusState::default(),
			hover: HoverState::default(),
			width,
			height,
			animation_running: true,
			flow_time: 0.0,
			projected: HashMap::new(),
			edge_paths: Vec::new(),
			pass_error: None,
			disk: None,
		};
		state.resize(width, height);
		state
	}

	pub fn disk(&self) -> Option<&Disk> {
		self.disk.as_ref()
	}

	pub fn set_mode(&mut self, mode: ViewMode) {
		if self.mode == mode {
			return;
		}
		info!("view mode: {}", mode.label());
		self.mode = mode;
		self.drag = DragState::default();
		self.pan = PanState::default();
		self.focus.active = false;
		self.reproject();
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		if self.mode == ViewMode::Hyperbolic {
			let p = Point::new(sx, sy);
			return self
				.projected
				.iter()
				.filter(|(_, n)| {
					let c = n.circle.canvas_center();
					(p.x - c.x).hypot(p.y - c.y) <= n.circle.r.max(MIN_DISK_HIT_RADIUS)
				})
				// Prefer the largest marker, i.e. the one nearest the focus.
				.max_by(|(_, a), (_, b)| a.circle.r.total_cmp(&b.circle.r))
				.map(|(&idx, _)| idx);
		}

		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	fn layout_points(&self) -> Vec<(DefaultNodeIdx, Point)> {
		let mut points = Vec::new();
		self.graph.visit_nodes(|node| {
			points.push((node.index(), Point::new(node.x() as f64, node.y() as f64)));
		});
		points
	}

	/// Moves the projection centre onto the node `idx`.
	pub fn focus_on(&mut self, idx: DefaultNodeIdx) {
		let points = self.layout_points();
		let Some(&(_, target)) = points.iter().find(|(i, _)| *i == idx) else {
			return;
		};
		let layout: Vec<Point> = points.iter().map(|&(_, p)| p).collect();
		self.focus.offset = target - centroid(&layout);
		self.reproject();
	}

	pub fn begin_focus_drag(&mut self, x: f64, y: f64) {
		self.focus.active = true;
		self.focus.start_x = x;
		self.focus.start_y = y;
		self.focus.offset_start = self.focus.offset;
	}

	/// Drags the plane under the cursor. Near the disk centre a layout
	/// distance `d` lands `radius · k · d / 2` pixels out, which gives the
	/// screen-to-layout factor.
	pub fn update_focus_drag(&mut self, x: f64, y: f64) {
		let Some(disk) = self.disk else {
			return;
		};
		let per_pixel = 2.0 / (disk.radius() * self.config.projection_scale);
		let delta = Point::new(x - self.focus.start_x, y - self.focus.start_y);
		self.focus.offset = self.focus.offset_start - delta * per_pixel;
		self.reproject();
	}

	pub fn zoom_projection(&mut self, factor: f64) {
		let (lo, hi) = PROJECTION_SCALE_RANGE;
		self.config.projection_scale = (self.config.projection_scale * factor).clamp(lo, hi);
		self.reproject();
	}

	pub fn set_hover(&mut self, node: Option<DefaultNodeIdx>) {
		if self.hover.node == node {
			return;
		}
		let was_hovering = self.hover.node.is_some();

		// Keep the old highlight around so it can fade out.
		if was_hovering && node.is_none() {
			self.hover.prev_node = self.hover.node.take();
			self.hover.prev_neighbors = std::mem::take(&mut self.hover.neighbors);
		} else {
			self.hover.prev_node = None;
			self.hover.prev_neighbors.clear();
		}

		self.hover.node = node;
		self.hover.neighbors.clear();

		if let Some(idx) = node {
			if !was_hovering {
				self.hover.delay_t = 0.0;
			}
			for &(src, tgt) in &self.edges {
				if src == idx {
					self.hover.neighbors.insert(tgt);
				} else if tgt == idx {
					self.hover.neighbors.insert(src);
				}
			}
		}
	}

	pub fn is_highlighted(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx)
			|| self.hover.neighbors.contains(&idx)
			|| self.hover.prev_node == Some(idx)
			|| self.hover.prev_neighbors.contains(&idx)
	}

	pub fn is_hovered(&self, idx: DefaultNodeIdx) -> bool {
		self.hover.node == Some(idx) || self.hover.prev_node == Some(idx)
	}

	pub fn has_active_highlight(&self) -> bool {
		self.hover.node.is_some() || self.hover.prev_node.is_some()
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
		self.flow_time += dt as f64;

		let (target, delay, speed) = if self.hover.node.is_some() {
			(1.0, 0.08, 1.8)
		} else {
			(0.0, 0.0, 1.26)
		};

		if self.hover.node.is_some() {
			self.hover.delay_t = (self.hover.delay_t + dt as f64).min(delay);
			if self.hover.delay_t >= delay {
				self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			}
		} else {
			self.hover.highlight_t += (target - self.hover.highlight_t) * speed * dt as f64;
			if self.hover.highlight_t < 0.01 {
				self.hover.highlight_t = 0.0;
				self.hover.prev_node = None;
				self.hover.prev_neighbors.clear();
			}
		}

		self.reproject();
	}

	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width;
		self.height = height;
		self.disk = match Disk::fit(width, height, DISK_MARGIN) {
			Ok(disk) => Some(disk),
			Err(e) => {
				self.reject_pass(e);
				None
			}
		};
		self.reproject();
	}

	/// Runs a hyperbolic render pass over the current layout.
	///
	/// A failed pass leaves nothing to draw and records the error.
	pub fn reproject(&mut self) {
		self.projected.clear();
		self.edge_paths.clear();
		if self.mode != ViewMode::Hyperbolic {
			return;
		}
		let Some(disk) = self.disk else {
			return;
		};
		if let Err(e) = self.run_pass(disk) {
			self.projected.clear();
			self.edge_paths.clear();
			self.reject_pass(e);
		} else {
			self.pass_error = None;
		}
	}

	/// Records a failed pass. Returns whether the error differs from the last
	/// one; only then is it logged, since a failing pass repeats every frame.
	fn reject_pass(&mut self, e: GeometryError) -> bool {
		if self.pass_error.as_ref() == Some(&e) {
			return false;
		}
		error!("hyperbolic render pass rejected: {e}");
		self.pass_error = Some(e);
		true
	}

	/// Text to show instead of the graph when nothing can be drawn.
	pub fn status_message(&self) -> Option<String> {
		match self.mode {
			ViewMode::Hyperbolic => self.pass_error.as_ref().map(ToString::to_string),
			ViewMode::Euclidean => None,
		}
	}

	fn run_pass(&mut self, disk: Disk) -> Result<(), GeometryError> {
		let nodes = self.layout_points();
		let layout: Vec<Point> = nodes.iter().map(|&(_, p)| p).collect();
		let pass = RenderPass::for_layout(disk, &self.config, &layout, self.focus.offset)?;

		for &(idx, p) in &nodes {
			let radius = if self.hover.node == Some(idx) {
				self.config.focus_node_radius
			} else {
				self.config.node_radius
			};
			self.projected.insert(idx, pass.project_with_radius(p, radius)?);
		}
		for &(src, tgt) in &self.edges {
			if let (Some(a), Some(b)) = (self.projected.get(&src), self.projected.get(&tgt)) {
				let edge = pass.edge(a, b)?;
				self.edge_paths.push((src, tgt, edge.path));
			}
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::hyperbolic_graph::types::{GraphEdge, GraphNode};

	fn path_graph(n: usize) -> GraphData {
		GraphData {
			nodes: (0..n)
				.map(|i| GraphNode {
					id: i.to_string(),
					label: None,
					color: None,
					group: None,
				})
				.collect(),
			edges: (1..n)
				.map(|i| GraphEdge {
					source: i.to_string(),
					target: (i - 1).to_string(),
				})
				.collect(),
		}
	}

	#[test]
	fn hyperbolic_pass_projects_every_node_and_edge() {
		let state = GraphState::new(&path_graph(5), 800.0, 600.0, ViewMode::Hyperbolic);
		assert_eq!(state.projected.len(), 5);
		assert_eq!(state.edge_paths.len(), 4);
		assert!(state.status_message().is_none());
	}

	#[test]
	fn euclidean_mode_keeps_no_geodesics() {
		let mut state = GraphState::new(&path_graph(5), 800.0, 600.0, ViewMode::Hyperbolic);
		state.set_mode(ViewMode::Euclidean);
		assert!(state.projected.is_empty());
		assert!(state.edge_paths.is_empty());
	}

	#[test]
	fn repeated_failure_is_recorded_once() {
		let mut state = GraphState::new(&path_graph(3), 800.0, 600.0, ViewMode::Hyperbolic);
		state.config.projection_scale = -1.0;
		state.reproject();
		assert!(matches!(state.pass_error, Some(GeometryError::InvalidConfig(_))));
		assert!(state.projected.is_empty());

		let err = state.pass_error.clone().unwrap();
		assert!(!state.reject_pass(err));
		assert!(state.reject_pass(GeometryError::NonFinite { stage: "projection" }));

		state.config.projection_scale = 0.005;
		state.reproject();
		assert!(state.pass_error.is_none());
		assert_eq!(state.projected.len(), 3);
	}

	#[test]
	fn canvas_too_small_for_a_disk_reports_why() {
		let mut state = GraphState::new(&path_graph(3), 800.0, 600.0, ViewMode::Hyperbolic);
		state.resize(20.0, 20.0);
		assert!(state.disk().is_none());
		let message = state.status_message().unwrap();
		assert!(message.contains("invalid disk"), "{message}");

		state.set_mode(ViewMode::Euclidean);
		assert!(state.status_message().is_none());
	}
}
