//! Euclidean rendering of hyperbolic circles.

use super::config::HyperbolicConfig;
use super::disk::Disk;
use super::error::{GeometryError, GeometryResult};
use super::primitives::Point;

/// A node marker ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
	/// Canvas-space centre, x.
	pub cx: f64,
	/// Canvas-space centre, y.
	pub cy: f64,
	/// Canvas-space radius.
	pub r: f64,
	/// Euclidean centre of the circle in disk-relative space.
	pub center: Point,
	/// The point the circle was constructed around, disk-relative.
	pub hyperbolic_center: Point,
}

impl Circle {
	/// `(cx, cy)` as a point.
	pub fn canvas_center(&self) -> Point {
		Point::new(self.cx, self.cy)
	}

	/// Whether the canvas point `p` lies on or inside the circle.
	pub fn contains(&self, p: Point) -> bool {
		(p.x - self.cx).hypot(p.y - self.cy) <= self.r
	}
}

/// Euclidean circle that renders the hyperbolic circle of radius `radius`
/// around the disk-relative point `center`.
///
/// The hyperbolic circle is cut along the ray from the origin; the Euclidean
/// circle spans the two cut points. Exact along the radial direction, which is
/// all a small node marker needs.
pub fn hyperbolic_circle(
	center: Point,
	radius: f64,
	disk: &Disk,
	config: &HyperbolicConfig,
) -> GeometryResult<Circle> {
	if !center.is_finite() || !radius.is_finite() || radius < 0.0 {
		return Err(GeometryError::NonFinite {
			stage: "hyperbolic circle input",
		});
	}

	let cr = 2.0 * config.clamp_norm(center.norm()).atanh();
	let near = ((cr - radius) / 2.0).tanh();
	let far = ((cr + radius) / 2.0).tanh();

	let er = (far - near) / 2.0;
	let ecr = (far + near) / 2.0;

	let theta = center.y.atan2(center.x);
	let euclidean_center = Point::ORIGIN.polar_offset(ecr, theta);
	let canvas = disk.disk_to_canvas(euclidean_center);

	let circle = Circle {
		cx: canvas.x,
		cy: canvas.y,
		r: er * disk.radius(),
		center: euclidean_center,
		hyperbolic_center: center,
	};
	if !(circle.canvas_center().is_finite() && circle.r.is_finite()) {
		return Err(GeometryError::NonFinite {
			stage: "hyperbolic circle",
		});
	}
	Ok(circle)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geometry::disk::BoundingBox;
	use crate::geometry::primitives::approx_eq;

	fn disk() -> Disk {
		Disk::new(BoundingBox {
			left: 0.0,
			top: 0.0,
			right: 200.0,
			bottom: 200.0,
		})
		.unwrap()
	}

	#[test]
	fn origin_circle_is_concentric() {
		let config = HyperbolicConfig::default();
		let c = hyperbolic_circle(Point::ORIGIN, 0.2, &disk(), &config).unwrap();
		assert!(approx_eq(c.cx, 100.0, 1e-12));
		assert!(approx_eq(c.cy, 100.0, 1e-12));
		// tanh(0.1) in unit radii, scaled by the disk radius.
		assert!(approx_eq(c.r, 0.1f64.tanh() * 100.0, 1e-12));
	}

	#[test]
	fn centre_sits_inward_along_the_ray() {
		let config = HyperbolicConfig::default();
		let p = Point::new(0.3, 0.4);
		let c = hyperbolic_circle(p, 0.2, &disk(), &config).unwrap();
		assert!(c.center.norm() < p.norm());
		assert!(approx_eq(c.center.y / c.center.x, p.y / p.x, 1e-9));
		assert_eq!(c.hyperbolic_center, p);
		// Disk-relative y up means canvas y above the centre.
		assert!(c.cy < 100.0 && c.cx > 100.0);
	}

	#[test]
	fn circle_shrinks_towards_the_boundary() {
		let config = HyperbolicConfig::default();
		let disk = disk();
		let mut last = f64::INFINITY;
		for i in 0..=19 {
			let d = i as f64 * 0.05;
			let c = hyperbolic_circle(Point::new(d * 0.6, -d * 0.8), 0.05, &disk, &config).unwrap();
			assert!(c.r < last, "radius did not shrink at distance {d}");
			assert!(c.r > 0.0);
			last = c.r;
		}
		let edge = hyperbolic_circle(Point::new(0.999, 0.0), 0.05, &disk, &config).unwrap();
		assert!(edge.r < 0.01 * 100.0);
	}

	#[test]
	fn boundary_points_are_clamped() {
		let config = HyperbolicConfig::default();
		let c = hyperbolic_circle(Point::new(1.5, 0.0), 0.05, &disk(), &config).unwrap();
		assert!(c.r.is_finite() && c.r >= 0.0);
		assert!(c.center.norm() < 1.0);
	}

	#[test]
	fn contains_uses_canvas_coordinates() {
		let config = HyperbolicConfig::default();
		let c = hyperbolic_circle(Point::new(-0.4, 0.0), 0.2, &disk(), &config).unwrap();
		assert!(c.contains(c.canvas_center()));
		assert!(c.contains(Point::new(c.cx + c.r * 0.9, c.cy)));
		assert!(!c.contains(Point::new(c.cx, c.cy + c.r * 1.1)));
		assert!(!c.contains(Point::new(100.0, 100.0)));
	}

	#[test]
	fn rejects_non_finite_input() {
		let config = HyperbolicConfig::default();
		let err = hyperbolic_circle(Point::new(f64::NAN, 0.0), 0.05, &disk(), &config);
		assert!(matches!(err, Err(GeometryError::NonFinite { .. })));
	}
}
