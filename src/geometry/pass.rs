//! Per-frame context tying the kernel together.
//!
//! A [`RenderPass`] is built once per frame (or per resize) and hands back
//! fresh records for nodes and edges; nothing owned by the caller is mutated.

use log::debug;

use super::circle::{Circle, hyperbolic_circle};
use super::config::HyperbolicConfig;
use super::disk::Disk;
use super::error::GeometryResult;
use super::geodesic::{Geodesic, geodesic};
use super::path::{PathPrimitive, rasterize};
use super::primitives::Point;
use super::projection::to_poincare;

/// Mean of `points`, or the origin when there are none.
pub fn centroid(points: &[Point]) -> Point {
	if points.is_empty() {
		return Point::ORIGIN;
	}
	let sum = points.iter().fold(Point::ORIGIN, |acc, &p| acc + p);
	sum * (1.0 / points.len() as f64)
}

/// A layout point after projection into the disk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedNode {
	/// Original layout coordinates, kept so the node can be reprojected.
	pub layout: Point,
	/// Canvas-space position.
	pub center: Point,
	/// Disk-relative position (unit disk, y up).
	pub disk_point: Point,
	/// Marker to draw for the node.
	pub circle: Circle,
}

/// Canvas-space edge between two projected nodes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeGeometry {
	/// The geodesic itself.
	pub geodesic: Geodesic,
	/// Drawable form of `geodesic`.
	pub path: PathPrimitive,
}

/// Disk, tunables and projection centre shared by one frame.
#[derive(Clone, Debug)]
pub struct RenderPass<'a> {
	disk: Disk,
	config: &'a HyperbolicConfig,
	layout_center: Point,
}

impl<'a> RenderPass<'a> {
	/// Fails if `config` does not validate.
	pub fn new(disk: Disk, config: &'a HyperbolicConfig, layout_center: Point) -> GeometryResult<Self> {
		config.validate()?;
		Ok(Self {
			disk,
			config,
			layout_center,
		})
	}

	/// Pass centred on the mean of `points`, shifted by `focus_offset`.
	pub fn for_layout(
		disk: Disk,
		config: &'a HyperbolicConfig,
		points: &[Point],
		focus_offset: Point,
	) -> GeometryResult<Self> {
		Self::new(disk, config, centroid(points) + focus_offset)
	}

	/// The disk of this frame.
	pub fn disk(&self) -> &Disk {
		&self.disk
	}

	/// Tunables in use.
	pub fn config(&self) -> &HyperbolicConfig {
		self.config
	}

	/// Layout point that lands on the disk centre.
	pub fn layout_center(&self) -> Point {
		self.layout_center
	}

	/// Projects a layout point with the default marker radius.
	pub fn project(&self, layout: Point) -> GeometryResult<ProjectedNode> {
		self.project_with_radius(layout, self.config.node_radius)
	}

	/// Like [`RenderPass::project`] with an explicit hyperbolic marker radius.
	pub fn project_with_radius(&self, layout: Point, radius: f64) -> GeometryResult<ProjectedNode> {
		let projection = to_poincare(layout, self.layout_center, &self.disk, self.config)?;
		let disk_point = self.disk.canvas_to_disk(projection.canvas);
		let circle = hyperbolic_circle(disk_point, radius, &self.disk, self.config)?;
		Ok(ProjectedNode {
			layout,
			center: projection.canvas,
			disk_point,
			circle,
		})
	}

	/// Projects every point, failing on the first error.
	pub fn project_all(&self, points: &[Point]) -> GeometryResult<Vec<ProjectedNode>> {
		let nodes = points
			.iter()
			.map(|&p| self.project(p))
			.collect::<GeometryResult<Vec<_>>>()?;
		debug!(
			"projected {} nodes around {:?}",
			nodes.len(),
			self.layout_center
		);
		Ok(nodes)
	}

	/// Canvas-space geodesic between two projected nodes and its path.
	pub fn edge(&self, a: &ProjectedNode, b: &ProjectedNode) -> GeometryResult<EdgeGeometry> {
		let geodesic = geodesic(a.center, b.center, &self.disk.boundary(), self.config)?;
		Ok(EdgeGeometry {
			geodesic,
			path: rasterize(&geodesic),
		})
	}
}
