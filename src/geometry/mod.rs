//! Hyperbolic geometry kernel for rendering graphs in the Poincaré disk.
//!
//! Layout points are projected into the disk ([`projection`]), drawn as
//! hyperbolic circles ([`circle`]), and joined by geodesic arcs
//! ([`geodesic`]) that are turned into path primitives ([`path`]).
//! [`RenderPass`] bundles the steps for one frame. Everything here is pure
//! and free of browser types.

pub mod circle;
pub mod config;
pub mod disk;
pub mod error;
pub mod geodesic;
pub mod pass;
pub mod path;
pub mod primitives;
pub mod projection;

pub use circle::{Circle, hyperbolic_circle};
pub use config::HyperbolicConfig;
pub use disk::{Boundary, BoundingBox, Disk};
pub use error::{GeometryError, GeometryResult};
pub use geodesic::{CircularArc, Geodesic, circle_inversion, geodesic};
pub use pass::{EdgeGeometry, ProjectedNode, RenderPass, centroid};
pub use path::{PathPrimitive, rasterize};
pub use primitives::{
	Line, Point, distance, intersect, line_through, midpoint, perpendicular_through,
};
pub use projection::{Projection, to_poincare};
