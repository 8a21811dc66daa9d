//! Polygon data model (ordered vertex sequence, implicitly closed).
//!
//! Assumptions and conventions
//! - The edge from the last point back to the first is implied.
//! - No winding, convexity, or duplicate-point invariants are enforced.
//!   Only the hull strategies deduplicate, internally.
//! - `is_valid` only asks for a non-empty sequence. One- and two-point
//!   polygons are valid but degenerate; SAT and hulls give degenerate results
//!   for them and callers should not rely on those.
//!
//! Code cross-refs: `transform::{project, mirror}`, `sat`, `crate::hull`, `crate::minkowski`

mod sat;
mod transform;

pub use transform::Projection;

use nalgebra::Vector2;

use crate::cfg::KernelCfg;
use crate::hull::{HullStrategy, MonotoneChain};

/// Ordered, finite sequence of 2D points with value semantics.
///
/// `points == None` is the unset state that `Polygon::default()` produces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Option<Vec<Vector2<f64>>>,
}

impl Polygon {
    /// Construct from a point sequence (not validated).
    #[inline]
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
        Self {
            points: Some(points),
        }
    }

    /// Polygon with no point sequence.
    #[inline]
    pub fn unset() -> Self {
        Self { points: None }
    }

    /// True iff points are set and non-empty.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.points.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// True iff a sequence is present (possibly empty).
    #[inline]
    pub fn is_set(&self) -> bool {
        self.points.is_some()
    }

    /// Points in order; empty when unset.
    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        self.points.as_deref().unwrap_or(&[])
    }

    /// Full replace, no validation.
    #[inline]
    pub fn set_points(&mut self, points: Vec<Vector2<f64>>) {
        self.points = Some(points);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points().len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points().is_empty()
    }

    /// Consume into the point sequence (empty when unset).
    #[inline]
    pub fn into_points(self) -> Vec<Vector2<f64>> {
        self.points.unwrap_or_default()
    }

    /// Convex hull via the reference monotone chain.
    pub fn convex_hull(&self) -> Polygon {
        self.convex_hull_with(&MonotoneChain)
    }

    /// Convex hull via the backend selected in `cfg`.
    pub fn convex_hull_cfg(&self, cfg: &KernelCfg) -> Polygon {
        self.convex_hull_with(cfg.hull_strategy())
    }

    /// Convex hull via an injected strategy. Unset or empty input yields a set,
    /// zero-point polygon.
    pub fn convex_hull_with(&self, strategy: &dyn HullStrategy) -> Polygon {
        Polygon::new(strategy.hull(self.points()))
    }

    pub(crate) fn points_mut(&mut self) -> Option<&mut Vec<Vector2<f64>>> {
        self.points.as_mut()
    }
}

impl From<Vec<Vector2<f64>>> for Polygon {
    fn from(points: Vec<Vector2<f64>>) -> Self {
        Polygon::new(points)
    }
}

impl FromIterator<Vector2<f64>> for Polygon {
    fn from_iter<I: IntoIterator<Item = Vector2<f64>>>(iter: I) -> Self {
        Polygon::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests;
