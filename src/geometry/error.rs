//! Errors raised by the hyperbolic geometry kernel.

use thiserror::Error;

/// Result alias for kernel operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Failure of a kernel construction or of its inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
	/// Two lines are parallel, or a point coincides with the inversion centre.
	#[error("degenerate geometry (determinant {determinant})")]
	DegenerateGeometry {
		/// Determinant of the failed solve; zero for an inversion.
		determinant: f64,
	},

	/// The disk cannot be built from the given canvas region.
	#[error("invalid disk: bounding box is {width}x{height}")]
	InvalidDisk {
		/// Box width.
		width: f64,
		/// Box height.
		height: f64,
	},

	/// A NaN or infinity was supplied to, or produced by, a construction.
	#[error("non-finite value in {stage}")]
	NonFinite {
		/// Construction step that saw the value.
		stage: &'static str,
	},

	/// A [`HyperbolicConfig`](super::HyperbolicConfig) parameter is out of range.
	#[error("invalid hyperbolic config: {0}")]
	InvalidConfig(String),
}
