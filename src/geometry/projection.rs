//! Euclidean layout coordinates → Poincaré disk positions.

use super::config::HyperbolicConfig;
use super::disk::Disk;
use super::error::{GeometryError, GeometryResult};
use super::primitives::Point;

/// Where a layout point lands inside the disk.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
	/// Canvas-space position.
	pub canvas: Point,
	/// Distance from the disk centre in unit radii, in `[0, 1)`.
	pub poincare_radius: f64,
	/// Direction as measured by `atan2(x, y)` on the scaled layout offset.
	pub theta: f64,
}

/// Projects `point` relative to `layout_center`.
///
/// The scaled offset is read as a point on the Lambert azimuthal projection
/// of the hyperbolic plane, so its hyperbolic radius grows logarithmically
/// and never reaches the boundary. Reapplying this to an already projected
/// point maps it twice.
pub fn to_poincare(
	point: Point,
	layout_center: Point,
	disk: &Disk,
	config: &HyperbolicConfig,
) -> GeometryResult<Projection> {
	if !point.is_finite() || !layout_center.is_finite() {
		return Err(GeometryError::NonFinite {
			stage: "projection input",
		});
	}

	let k = config.projection_scale;
	let x = k * (point.x - layout_center.x);
	let y = k * (point.y - layout_center.y);

	let circle_r = x.hypot(y);
	let theta = x.atan2(y);

	let hyperbolic_r = (0.5 * circle_r * circle_r + 1.0).acosh();
	let poincare_radius = config.clamp_norm((hyperbolic_r / 2.0).tanh());

	let r = disk.radius();
	let c = disk.center();
	let canvas = Point::new(
		c.x + r * poincare_radius * theta.sin(),
		c.y + r * poincare_radius * theta.cos(),
	);
	if !canvas.is_finite() {
		return Err(GeometryError::NonFinite { stage: "projection" });
	}

	Ok(Projection {
		canvas,
		poincare_radius,
		theta,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geometry::disk::BoundingBox;
	use crate::geometry::primitives::{approx_eq, distance};

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
	fn layout_center_maps_to_disk_center() {
		let config = HyperbolicConfig::default();
		let p = to_poincare(Point::new(7.0, -3.0), Point::new(7.0, -3.0), &disk(), &config).unwrap();
		assert_eq!(p.poincare_radius, 0.0);
		assert_eq!(p.canvas, Point::new(100.0, 100.0));
	}

	#[test]
	fn matches_closed_form_radius() {
		// tanh(acosh(R²/2 + 1) / 2) simplifies to R / sqrt(R² + 4).
		let config = HyperbolicConfig::default();
		let p = to_poincare(Point::new(300.0, 400.0), Point::ORIGIN, &disk(), &config).unwrap();
		let r: f64 = 2.5;
		assert!(approx_eq(p.poincare_radius, r / (r * r + 4.0).sqrt(), 1e-12));
	}

	#[test]
	fn keeps_layout_orientation() {
		let config = HyperbolicConfig::default();
		let disk = disk();
		let right = to_poincare(Point::new(50.0, 0.0), Point::ORIGIN, &disk, &config).unwrap();
		assert!(right.canvas.x > 100.0 && approx_eq(right.canvas.y, 100.0, 1e-12));
		let below = to_poincare(Point::new(0.0, 50.0), Point::ORIGIN, &disk, &config).unwrap();
		assert!(below.canvas.y > 100.0 && approx_eq(below.canvas.x, 100.0, 1e-12));
	}

	#[test]
	fn output_is_bounded() {
		let config = HyperbolicConfig::default();
		let disk = disk();
		let inputs = [
			Point::new(1.0, 1.0),
			Point::new(-1e3, 2e3),
			Point::new(1e9, -1e9),
			Point::new(f64::MAX, f64::MAX),
			Point::new(-f64::MAX, 0.0),
		];
		for p in inputs {
			let proj = to_poincare(p, Point::new(5.0, 5.0), &disk, &config).unwrap();
			assert!(
				(0.0..1.0).contains(&proj.poincare_radius),
				"{p:?} -> {}",
				proj.poincare_radius
			);
			assert!(distance(proj.canvas, disk.center()) < disk.radius());
		}
	}

	#[test]
	fn radius_grows_monotonically_with_distance() {
		let config = HyperbolicConfig::default();
		let disk = disk();
		let mut last = -1.0;
		for i in 0..50 {
			let proj = to_poincare(Point::new(i as f64 * 40.0, 0.0), Point::ORIGIN, &disk, &config)
				.unwrap();
			assert!(proj.poincare_radius > last);
			last = proj.poincare_radius;
		}
	}

	#[test]
	fn rejects_non_finite_input() {
		let config = HyperbolicConfig::default();
		let res = to_poincare(Point::new(f64::INFINITY, 0.0), Point::ORIGIN, &disk(), &config);
		assert!(matches!(res, Err(GeometryError::NonFinite { .. })));
	}
}
