//! The rendering disk and the canvas ↔ disk coordinate mapping.

use serde::{Deserialize, Serialize};

use super::error::{GeometryError, GeometryResult};
use super::primitives::Point;

/// Canvas rectangle in screen coordinates (y grows downward).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
	/// Smallest x.
	pub left: f64,
	/// Smallest y.
	pub top: f64,
	/// Largest x.
	pub right: f64,
	/// Largest y.
	pub bottom: f64,
}

impl BoundingBox {
	/// `right - left`.
	pub fn width(&self) -> f64 {
		self.right - self.left
	}

	/// `bottom - top`.
	pub fn height(&self) -> f64 {
		self.bottom - self.top
	}
}

/// Circle used as the mirror of an inversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Boundary {
	/// Centre of the mirror circle.
	pub center: Point,
	/// Radius of the mirror circle.
	pub radius: f64,
}

impl Boundary {
	/// The unit circle, boundary of disk-relative space.
	pub const UNIT: Boundary = Boundary {
		center: Point::ORIGIN,
		radius: 1.0,
	};
}

/// Canvas region occupied by the Poincaré disk for one render pass.
///
/// The disk is the circle inscribed in `bounding_box`, centred on it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Disk {
	bounding_box: BoundingBox,
	center: Point,
	radius: f64,
}

impl Disk {
	/// Disk inscribed in `bounding_box`.
	///
	/// Fails with [`GeometryError::InvalidDisk`] unless both extents are
	/// finite and positive.
	pub fn new(bounding_box: BoundingBox) -> GeometryResult<Self> {
		let (width, height) = (bounding_box.width(), bounding_box.height());
		// Written so that NaN extents are rejected too.
		if !(width > 0.0 && height > 0.0 && width.is_finite() && height.is_finite()) {
			return Err(GeometryError::InvalidDisk { width, height });
		}
		Ok(Self {
			bounding_box,
			center: Point::new(
				bounding_box.left + width / 2.0,
				bounding_box.top + height / 2.0,
			),
			radius: (width / 2.0).min(height / 2.0),
		})
	}

	/// Disk filling a `width` × `height` canvas, leaving `margin` pixels free
	/// around the short side.
	pub fn fit(width: f64, height: f64, margin: f64) -> GeometryResult<Self> {
		Self::new(BoundingBox {
			left: margin,
			top: margin,
			right: width - margin,
			bottom: height - margin,
		})
	}

	/// Canvas region the disk was built from.
	pub fn bounding_box(&self) -> &BoundingBox {
		&self.bounding_box
	}

	/// Canvas-space centre.
	pub fn center(&self) -> Point {
		self.center
	}

	/// Canvas-space radius, half the short side of the box.
	pub fn radius(&self) -> f64 {
		self.radius
	}

	/// The disk's edge in canvas space.
	pub fn boundary(&self) -> Boundary {
		Boundary {
			center: self.center,
			radius: self.radius,
		}
	}

	/// Canvas point → disk-relative point, with the y axis pointing up.
	///
	/// Points outside the disk are mapped without complaint.
	pub fn canvas_to_disk(&self, p: Point) -> Point {
		Point::new(
			(p.x - self.center.x) / self.radius,
			-(p.y - self.center.y) / self.radius,
		)
	}

	/// Disk-relative point → canvas point.
	pub fn disk_to_canvas(&self, p: Point) -> Point {
		Point::new(
			p.x * self.radius + self.center.x,
			-p.y * self.radius + self.center.y,
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geometry::primitives::approx_eq;

	fn square(size: f64) -> Disk {
		Disk::new(BoundingBox {
			left: 0.0,
			top: 0.0,
			right: size,
			bottom: size,
		})
		.unwrap()
	}

	#[test]
	fn radius_is_half_the_short_side() {
		let disk = Disk::new(BoundingBox {
			left: 10.0,
			top: 20.0,
			right: 410.0,
			bottom: 220.0,
		})
		.unwrap();
		assert_eq!(disk.radius(), 100.0);
		assert_eq!(disk.center(), Point::new(210.0, 120.0));
	}

	#[test]
	fn rejects_empty_box() {
		let flat = BoundingBox {
			left: 0.0,
			top: 5.0,
			right: 100.0,
			bottom: 5.0,
		};
		assert!(matches!(
			Disk::new(flat),
			Err(GeometryError::InvalidDisk { height, .. }) if height == 0.0
		));
		assert!(Disk::fit(10.0, 10.0, 5.0).is_err());
		assert!(Disk::fit(f64::NAN, 10.0, 0.0).is_err());
	}

	#[test]
	fn square_box_matches_normalized_formula() {
		let disk = square(200.0);
		let b = *disk.bounding_box();
		let p = Point::new(37.0, 151.0);
		let expected = Point::new(
			((p.x - b.left) / b.width() - 0.5) * 2.0,
			((p.y - b.top) / b.height() - 0.5) * -2.0,
		);
		let got = disk.canvas_to_disk(p);
		assert!(approx_eq(got.x, expected.x, 1e-12));
		assert!(approx_eq(got.y, expected.y, 1e-12));
	}

	#[test]
	fn y_axis_points_up() {
		let disk = square(200.0);
		assert_eq!(disk.canvas_to_disk(Point::new(100.0, 0.0)), Point::new(0.0, 1.0));
		assert_eq!(disk.disk_to_canvas(Point::new(-1.0, 0.0)), Point::new(0.0, 100.0));
	}

	#[test]
	fn round_trip() {
		let disks = [
			square(200.0),
			Disk::fit(1280.0, 720.0, 16.0).unwrap(),
			Disk::new(BoundingBox {
				left: -50.0,
				top: 3.5,
				right: 10.0,
				bottom: 900.0,
			})
			.unwrap(),
		];
		let points = [
			Point::new(0.0, 0.0),
			Point::new(123.456, -78.9),
			Point::new(1e4, 3e3),
			Point::new(-0.001, 640.0),
		];
		for disk in &disks {
			for &p in &points {
				let back = disk.disk_to_canvas(disk.canvas_to_disk(p));
				assert!((back.x - p.x).abs() < 1e-9, "{p:?} -> {back:?}");
				assert!((back.y - p.y).abs() < 1e-9, "{p:?} -> {back:?}");
			}
		}
	}
}
