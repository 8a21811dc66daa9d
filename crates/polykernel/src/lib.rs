//! 2D polygon geometry kernel.
//!
//! Purpose
//! - Small, pure kernel for arrangement/placement callers (collision avoidance,
//!   nesting): projection, reflection, SAT overlap with MTV, convex hulls, and
//!   Minkowski sums/hulls over polygons stored as ordered point sequences.
//!
//! Conventions
//! - Polygons are implicitly closed; no winding or convexity is enforced.
//! - Every operation returns a new value except `Polygon::mirror`, which
//!   mutates the receiver in place.
//! - Hull backends are selected explicitly via `KernelCfg` or by passing a
//!   `HullStrategy`; nothing is probed at runtime.
//!
//! Code cross-refs: `Polygon`, `HullStrategy`, `Checkpoint`, `KernelCfg`, `PolygonError`

pub mod cfg;
pub mod error;
pub mod hull;
pub mod minkowski;
pub mod polygon;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::{HullBackend, KernelCfg};
pub use error::{Operand, PolygonError, Result};
pub use hull::{HullStrategy, MonotoneChain};
pub use minkowski::{CancelToken, Checkpoint, Progress};
pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
pub use polygon::{Polygon, Projection};

#[cfg(feature = "geo")]
pub use hull::GeoQuickHull;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{HullBackend, KernelCfg};
    pub use crate::error::PolygonError;
    pub use crate::hull::{HullStrategy, MonotoneChain};
    pub use crate::minkowski::{CancelToken, Checkpoint, Progress};
    pub use crate::polygon::{Polygon, Projection};
    pub use nalgebra::{Matrix2 as Mat2, Vector2 as Vec2};
}
