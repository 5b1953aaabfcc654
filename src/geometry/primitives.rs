//! Planar value types and the Euclidean constructions the disk model is
//! built from.

use serde::{Deserialize, Serialize};

use super::error::{GeometryError, GeometryResult};

/// Planar coordinate. Whether it is canvas or disk-relative is up to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
	/// Horizontal coordinate.
	pub x: f64,
	/// Vertical coordinate.
	pub y: f64,
}

impl Point {
	/// `(0, 0)`.
	pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

	#[inline]
	/// Point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Point at `angle` radians and distance `r` from `self`.
	#[inline]
	pub fn polar_offset(self, r: f64, angle: f64) -> Point {
		Point::new(self.x + r * angle.cos(), self.y + r * angle.sin())
	}

	#[inline]
	/// Distance from the origin.
	pub fn norm(self) -> f64 {
		self.x.hypot(self.y)
	}

	/// z-component of the cross product of `self` and `other` as vectors.
	#[inline]
	pub fn cross(self, other: Point) -> f64 {
		self.x * other.y - self.y * other.x
	}

	#[inline]
	/// Neither coordinate is NaN or infinite.
	pub fn is_finite(self) -> bool {
		self.x.is_finite() && self.y.is_finite()
	}
}

impl std::ops::Add for Point {
	type Output = Point;

	fn add(self, rhs: Point) -> Point {
		Point::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl std::ops::Sub for Point {
	type Output = Point;

	fn sub(self, rhs: Point) -> Point {
		Point::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl std::ops::Mul<f64> for Point {
	type Output = Point;

	fn mul(self, k: f64) -> Point {
		Point::new(self.x * k, self.y * k)
	}
}

/// Line `a·x + b·y + c = 0`.
///
/// Lines are divided through by `b` when that is safe, which pins `b` to 1;
/// near-vertical lines keep all three coefficients.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Line {
	/// `b` divided out, so `a·x + y + c = 0`.
	Normalized {
		/// x coefficient.
		a: f64,
		/// Constant term.
		c: f64,
	},
	/// Near-vertical line kept as built.
	General {
		/// x coefficient.
		a: f64,
		/// y coefficient, at most the normalization threshold in size.
		b: f64,
		/// Constant term.
		c: f64,
	},
}

impl Line {
	/// Builds a line from raw coefficients, normalizing by `b` when
	/// `|b| > threshold`.
	pub fn from_coefficients(a: f64, b: f64, c: f64, threshold: f64) -> Line {
		if b.abs() > threshold {
			Line::Normalized { a: a / b, c: c / b }
		} else {
			Line::General { a, b, c }
		}
	}

	/// `(a, b, c)` with `b = 1` for normalized lines.
	#[inline]
	pub fn coefficients(&self) -> (f64, f64, f64) {
		match *self {
			Line::Normalized { a, c } => (a, 1.0, c),
			Line::General { a, b, c } => (a, b, c),
		}
	}

	/// Signed residual of `p` in the line equation; zero on the line.
	#[inline]
	pub fn eval(&self, p: Point) -> f64 {
		let (a, b, c) = self.coefficients();
		a * p.x + b * p.y + c
	}
}

/// Euclidean distance between `p` and `q`.
pub fn distance(p: Point, q: Point) -> f64 {
	(q - p).norm()
}

/// Point halfway between `p` and `q`.
pub fn midpoint(p: Point, q: Point) -> Point {
	Point::new((p.x + q.x) / 2.0, (p.y + q.y) / 2.0)
}

/// Line through `p` and `q`.
pub fn line_through(p: Point, q: Point, threshold: f64) -> Line {
	Line::from_coefficients(p.y - q.y, q.x - p.x, p.x * q.y - q.x * p.y, threshold)
}

/// Line perpendicular to `line` passing through `v`.
pub fn perpendicular_through(line: &Line, v: Point, threshold: f64) -> Line {
	let (a, b, _) = line.coefficients();
	Line::from_coefficients(b, -a, -v.x * b + v.y * a, threshold)
}

/// Intersection point of two lines.
///
/// Fails with [`GeometryError::DegenerateGeometry`] when the lines are
/// parallel to working precision.
pub fn intersect(l1: &Line, l2: &Line) -> GeometryResult<Point> {
	let (a1, b1, c1) = l1.coefficients();
	let (a2, b2, c2) = l2.coefficients();

	let det = b1 * a2 - a1 * b2;
	let scale = (a1.abs() + b1.abs()) * (a2.abs() + b2.abs());
	if !det.is_finite() || det.abs() <= f64::EPSILON * scale {
		return Err(GeometryError::DegenerateGeometry { determinant: det });
	}

	Ok(Point::new((c1 * b2 - c2 * b1) / det, (a1 * c2 - a2 * c1) / det))
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
	(a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
}

#[cfg(test)]
mod tests {
	use super::*;

	const T: f64 = 0.001;

	#[test]
	fn distance_and_midpoint() {
		let (p, q) = (Point::new(1.0, 2.0), Point::new(4.0, 6.0));
		assert_eq!(distance(p, q), 5.0);
		assert_eq!(midpoint(p, q), Point::new(2.5, 4.0));
	}

	#[test]
	fn line_through_contains_both_points() {
		let (p, q) = (Point::new(-3.0, 1.5), Point::new(2.0, -4.0));
		let line = line_through(p, q, T);
		assert!(matches!(line, Line::Normalized { .. }));
		assert!(line.eval(p).abs() < 1e-12);
		assert!(line.eval(q).abs() < 1e-12);
	}

	#[test]
	fn vertical_line_stays_general() {
		let (p, q) = (Point::new(2.0, -1.0), Point::new(2.0, 5.0));
		let line = line_through(p, q, T);
		assert!(matches!(line, Line::General { b, .. } if b == 0.0));
		assert!(line.eval(p).abs() < 1e-12);
		assert!(line.eval(q).abs() < 1e-12);
	}

	#[test]
	fn perpendicular_passes_through_point() {
		let line = line_through(Point::new(0.0, 0.0), Point::new(1.0, 1.0), T);
		let v = Point::new(3.0, -2.0);
		let perp = perpendicular_through(&line, v, T);
		assert!(perp.eval(v).abs() < 1e-12);

		let (a1, b1, _) = line.coefficients();
		let (a2, b2, _) = perp.coefficients();
		assert!((a1 * a2 + b1 * b2).abs() < 1e-12);
	}

	#[test]
	fn intersect_crossing_lines() {
		let l1 = line_through(Point::new(0.0, 0.0), Point::new(2.0, 2.0), T);
		let l2 = line_through(Point::new(0.0, 2.0), Point::new(2.0, 0.0), T);
		let p = intersect(&l1, &l2).unwrap();
		assert!(approx_eq(p.x, 1.0, 1e-12) && approx_eq(p.y, 1.0, 1e-12));

		let vertical = line_through(Point::new(3.0, 0.0), Point::new(3.0, 1.0), T);
		let p = intersect(&vertical, &l1).unwrap();
		assert!(approx_eq(p.x, 3.0, 1e-12) && approx_eq(p.y, 3.0, 1e-12));
	}

	#[test]
	fn intersect_parallel_is_degenerate() {
		let l1 = line_through(Point::new(0.0, 0.0), Point::new(1.0, 1.0), T);
		let l2 = line_through(Point::new(0.0, 1.0), Point::new(1.0, 2.0), T);
		assert!(matches!(
			intersect(&l1, &l2),
			Err(GeometryError::DegenerateGeometry { .. })
		));
	}
}
