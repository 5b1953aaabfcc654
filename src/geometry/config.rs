//! Tunable constants of the hyperbolic projection.

use serde::{Deserialize, Serialize};

use super::error::{GeometryError, GeometryResult};

/// Numeric parameters of the Poincaré disk rendering.
///
/// The defaults were picked empirically for graphs of a few hundred nodes laid
/// out by the force simulation in canvas pixels.
///
/// ```
/// use hyperbolic_graph_canvas::geometry::HyperbolicConfig;
///
/// let config = HyperbolicConfig::default();
/// assert_eq!(config.projection_scale, 0.005);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HyperbolicConfig {
	/// Factor applied to layout coordinates before the Lambert mapping.
	pub projection_scale: f64,
	/// Hyperbolic radius of an ordinary node marker.
	pub node_radius: f64,
	/// Hyperbolic radius of the hovered node marker.
	pub focus_node_radius: f64,
	/// Below this `|b|` a line is kept in general form instead of dividing by `b`.
	pub normalization_threshold: f64,
	/// Relative cross-product magnitude under which a geodesic is treated as a
	/// diameter.
	pub collinear_epsilon: f64,
	/// Largest Euclidean radius allowed inside the unit disk.
	/// Must be in the open interval (0, 1).
	pub max_norm: f64,
}

impl Default for HyperbolicConfig {
	fn default() -> Self {
		Self {
			projection_scale: 0.005,
			node_radius: 0.05,
			focus_node_radius: 0.2,
			normalization_threshold: 0.001,
			collinear_epsilon: 1e-9,
			max_norm: 1.0 - 1e-9,
		}
	}
}

impl HyperbolicConfig {
	/// Same defaults with a different projection scale.
	pub fn with_projection_scale(projection_scale: f64) -> Self {
		Self {
			projection_scale,
			..Default::default()
		}
	}

	/// Checks every parameter, returning the first violation.
	pub fn validate(&self) -> GeometryResult<()> {
		positive("projection_scale", self.projection_scale)?;
		positive("node_radius", self.node_radius)?;
		positive("focus_node_radius", self.focus_node_radius)?;
		positive("normalization_threshold", self.normalization_threshold)?;
		positive("collinear_epsilon", self.collinear_epsilon)?;

		// NaN fails both comparisons, so test for membership.
		if !(self.max_norm > 0.0 && self.max_norm < 1.0) {
			return Err(GeometryError::InvalidConfig(format!(
				"max_norm must be in open interval (0, 1), got {}",
				self.max_norm
			)));
		}
		Ok(())
	}

	/// Clamps a Euclidean radius into `[0, max_norm]`.
	#[inline]
	pub fn clamp_norm(&self, r: f64) -> f64 {
		r.clamp(0.0, self.max_norm)
	}
}

fn positive(name: &str, value: f64) -> GeometryResult<()> {
	if value.is_finite() && value > 0.0 {
		Ok(())
	} else {
		Err(GeometryError::InvalidConfig(format!(
			"{name} must be finite and positive (got {value})"
		)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_is_valid() {
		let config = HyperbolicConfig::default();
		assert!(config.validate().is_ok());
		assert_eq!(config.node_radius, 0.05);
		assert_eq!(config.focus_node_radius, 0.2);
		assert_eq!(config.normalization_threshold, 0.001);
		assert!(config.max_norm < 1.0);
	}

	#[test]
	fn with_projection_scale_keeps_other_defaults() {
		let config = HyperbolicConfig::with_projection_scale(0.01);
		assert_eq!(config.projection_scale, 0.01);
		assert_eq!(config.node_radius, 0.05);
	}

	#[test]
	fn rejects_non_positive_scale() {
		let mut config = HyperbolicConfig::default();
		config.projection_scale = 0.0;
		assert!(matches!(
			config.validate(),
			Err(GeometryError::InvalidConfig(msg)) if msg.contains("projection_scale")
		));
		config.projection_scale = f64::NAN;
		assert!(config.validate().is_err());
	}

	#[test]
	fn rejects_max_norm_outside_unit_interval() {
		for bad in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
			let config = HyperbolicConfig {
				max_norm: bad,
				..Default::default()
			};
			assert!(config.validate().is_err(), "max_norm {bad} accepted");
		}
	}

	#[test]
	fn clamp_norm_stays_inside_disk() {
		let config = HyperbolicConfig::default();
		assert_eq!(config.clamp_norm(-1.0), 0.0);
		assert_eq!(config.clamp_norm(0.5), 0.5);
		assert!(config.clamp_norm(1.0) < 1.0);
	}

	#[test]
	fn serde_round_trip_and_partial_input() {
		let config = HyperbolicConfig::with_projection_scale(0.02);
		let json = serde_json::to_string(&config).unwrap();
		let back: HyperbolicConfig = serde_json::from_str(&json).unwrap();
		assert_eq!(config, back);

		let partial: HyperbolicConfig = serde_json::from_str(r#"{"node_radius":0.1}"#).unwrap();
		assert_eq!(partial.node_radius, 0.1);
		assert_eq!(partial.projection_scale, 0.005);
	}
}
