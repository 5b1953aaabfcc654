//! Hyperbolic geodesics between two disk points.
//!
//! A geodesic of the Poincaré disk is the arc of the circle through both
//! points that meets the boundary at right angles. Any circle through a point
//! and its inverse is orthogonal to the boundary, so the centre is where the
//! perpendicular bisectors of `p p'` and `q q'` cross. When `p`, `q` and the
//! boundary centre are collinear the bisectors are parallel and the geodesic
//! is a diameter segment.

use log::trace;

use super::config::HyperbolicConfig;
use super::disk::Boundary;
use super::error::{GeometryError, GeometryResult};
use super::primitives::{
	Point, distance, intersect, line_through, midpoint, perpendicular_through,
};

/// Inverts `p` through the circle `boundary`.
///
/// The image lies on the ray from the centre through `p`, at distance
/// `r² / |p - center|`.
pub fn circle_inversion(p: Point, boundary: &Boundary) -> GeometryResult<Point> {
	let offset = p - boundary.center;
	let d2 = offset.x * offset.x + offset.y * offset.y;
	if d2 == 0.0 {
		return Err(GeometryError::DegenerateGeometry { determinant: 0.0 });
	}
	let k = boundary.radius * boundary.radius / d2;
	Ok(boundary.center + offset * k)
}

/// Arc of an orthogonal circle, running from `p1` to `p2`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircularArc {
	/// First endpoint.
	pub p1: Point,
	/// Second endpoint.
	pub p2: Point,
	/// Centre of the orthogonal circle.
	pub center: Point,
	/// Radius of the orthogonal circle.
	pub radius: f64,
	/// Angle of `p2` about `center`.
	pub start_angle: f64,
	/// Angle of `p1` about `center`.
	pub end_angle: f64,
}

/// Shortest hyperbolic path between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geodesic {
	/// Arc of a circle orthogonal to the boundary.
	Arc(CircularArc),
	/// Straight segment through the boundary centre.
	Diameter {
		/// First endpoint.
		p1: Point,
		/// Second endpoint.
		p2: Point,
	},
}

impl Geodesic {
	/// `(p1, p2)` in construction order.
	pub fn endpoints(&self) -> (Point, Point) {
		match *self {
			Geodesic::Arc(arc) => (arc.p1, arc.p2),
			Geodesic::Diameter { p1, p2 } => (p1, p2),
		}
	}

	/// Radius of the carrying circle; infinite for a diameter.
	pub fn radius(&self) -> f64 {
		match self {
			Geodesic::Arc(arc) => arc.radius,
			Geodesic::Diameter { .. } => f64::INFINITY,
		}
	}

	/// True for the diameter case.
	pub fn is_straight(&self) -> bool {
		matches!(self, Geodesic::Diameter { .. })
	}
}

/// Geodesic from `p` to `q`, both expressed in the frame of `boundary`.
pub fn geodesic(
	p: Point,
	q: Point,
	boundary: &Boundary,
	config: &HyperbolicConfig,
) -> GeometryResult<Geodesic> {
	if !p.is_finite() || !q.is_finite() {
		return Err(GeometryError::NonFinite {
			stage: "geodesic input",
		});
	}

	let (u, v) = (p - boundary.center, q - boundary.center);
	let scale = boundary.radius * boundary.radius;
	if u.cross(v).abs() <= config.collinear_epsilon * scale {
		trace!("geodesic {p:?} -> {q:?} runs through the centre");
		return Ok(Geodesic::Diameter { p1: p, p2: q });
	}

	let eps = config.normalization_threshold;
	let pp = circle_inversion(p, boundary)?;
	let qq = circle_inversion(q, boundary)?;
	let m = perpendicular_through(&line_through(p, pp, eps), midpoint(p, pp), eps);
	let n = perpendicular_through(&line_through(q, qq, eps), midpoint(q, qq), eps);

	let center = match intersect(&m, &n) {
		Ok(c) => c,
		Err(GeometryError::DegenerateGeometry { determinant }) => {
			trace!("parallel bisectors (det {determinant}), using a diameter");
			return Ok(Geodesic::Diameter { p1: p, p2: q });
		}
		Err(e) => return Err(e),
	};

	let arc = CircularArc {
		p1: p,
		p2: q,
		center,
		radius: distance(p, center),
		start_angle: (q.y - center.y).atan2(q.x - center.x),
		end_angle: (p.y - center.y).atan2(p.x - center.x),
	};
	if !(arc.center.is_finite() && arc.radius.is_finite()) {
		return Err(GeometryError::NonFinite { stage: "geodesic" });
	}
	Ok(Geodesic::Arc(arc))
}
