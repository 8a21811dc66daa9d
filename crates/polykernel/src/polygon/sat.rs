//! Separating Axis Theorem overlap test with minimum translation vector.
//!
//! Assumptions and conventions
//! - Both polygons are assumed convex with consistent winding. Concave input
//!   gives unspecified results; it is not detected or corrected.
//! - Candidate axes are the edge normals of `self`, then of `other`, with no
//!   dedup of parallel edges (duplicates are tested again).
//! - The MTV is the shallowest overlap over the tested axes. This separates
//!   the pair but is not guaranteed to be the true minimum translation.

use nalgebra::Vector2;

use super::Polygon;
use crate::error::{Operand, PolygonError, Result};

/// Unit normal of edge `i` (from vertex `i-1`, wrapping, to vertex `i`).
///
/// The edge vector `e` is reversed and its new second component negated,
/// giving `(e.y, -e.x)`. This sign convention fixes the MTV direction.
fn edge_axis(points: &[Vector2<f64>], i: usize, operand: Operand) -> Result<Vector2<f64>> {
    let p0 = points[if i == 0 { points.len() - 1 } else { i - 1 }];
    let p1 = points[i];
    let e = p1 - p0;
    let n = Vector2::new(e.y, -e.x);
    let norm = n.norm();
    if !norm.is_finite() || norm <= 0.0 {
        return Err(PolygonError::DegenerateAxis { edge: i, operand });
    }
    Ok(n / norm)
}

impl Polygon {
    /// Test overlap with `other`. Returns `Ok(None)` when a separating axis is
    /// found, otherwise the translation that moves `self` out of `other`
    /// along the shallowest-penetration axis.
    pub fn intersects_polygon(&self, other: &Polygon) -> Result<Option<Vector2<f64>>> {
        if !self.is_valid() || !other.is_valid() {
            return Err(PolygonError::InvalidPolygon {
                op: "intersects_polygon",
            });
        }
        let axes = (0..self.len())
            .map(|i| edge_axis(self.points(), i, Operand::First))
            .chain((0..other.len()).map(|i| edge_axis(other.points(), i, Operand::Second)));

        let mut best_size = f64::INFINITY;
        let mut best: Option<Vector2<f64>> = None;
        for axis in axes {
            let axis = axis?;
            let a = self.project(axis)?;
            let b = other.project(axis)?;
            let Some(size) = a.overlap(&b) else {
                tracing::trace!(x = axis.x, y = axis.y, "separating axis found");
                return Ok(None);
            };
            if size < best_size {
                best = Some(if a.min < b.min { axis * -size } else { axis * size });
                best_size = size;
            }
        }
        Ok(best)
    }
}
