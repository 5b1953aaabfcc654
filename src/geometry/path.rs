//! Geodesic → drawable path primitive.

use std::f64::consts::PI;
use std::fmt;

use super::geodesic::Geodesic;
use super::primitives::Point;

/// A single drawable segment, printed as SVG path data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathPrimitive {
	/// `M start A radius radius 0 large_arc sweep end`
	Arc {
		/// Pen position before the arc.
		start: Point,
		/// Arc end point.
		end: Point,
		/// Circle radius.
		radius: f64,
		/// SVG large-arc flag.
		large_arc: bool,
		/// SVG sweep flag; true runs toward increasing angle.
		sweep: bool,
	},
	/// `M start L end`
	Line {
		/// Segment start.
		start: Point,
		/// Segment end.
		end: Point,
	},
}

impl PathPrimitive {
	/// Where drawing begins.
	pub fn start(&self) -> Point {
		match *self {
			PathPrimitive::Arc { start, .. } | PathPrimitive::Line { start, .. } => start,
		}
	}

	/// Where drawing ends.
	pub fn end(&self) -> Point {
		match *self {
			PathPrimitive::Arc { end, .. } | PathPrimitive::Line { end, .. } => end,
		}
	}
}

impl fmt::Display for PathPrimitive {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self {
			PathPrimitive::Arc {
				start,
				end,
				radius,
				large_arc,
				sweep,
			} => write!(
				f,
				"M {} {} A {radius} {radius} 0 {} {} {} {}",
				start.x,
				start.y,
				u8::from(large_arc),
				u8::from(sweep),
				end.x,
				end.y
			),
			PathPrimitive::Line { start, end } => {
				write!(f, "M {} {} L {} {}", start.x, start.y, end.x, end.y)
			}
		}
	}
}

/// Turns a geodesic into a path that always takes the minor side of its
/// circle.
///
/// The arc is emitted with a fixed small-arc, positive-sweep flag pair, so the
/// endpoints are ordered such that walking in the direction of increasing
/// angle from `start` reaches `end` in less than half a turn.
pub fn rasterize(geodesic: &Geodesic) -> PathPrimitive {
	let arc = match geodesic {
		Geodesic::Arc(arc) => arc,
		Geodesic::Diameter { p1, p2 } => {
			return PathPrimitive::Line {
				start: *p1,
				end: *p2,
			};
		}
	};

	let lo = arc.start_angle.min(arc.end_angle);
	let hi = arc.start_angle.max(arc.end_angle);
	let mut start = arc.center.polar_offset(arc.radius, lo);
	let mut end = arc.center.polar_offset(arc.radius, hi);
	if hi - lo >= PI {
		std::mem::swap(&mut start, &mut end);
	}

	PathPrimitive::Arc {
		start,
		end,
		radius: arc.radius,
		large_arc: false,
		sweep: true,
	}
}
