//! Convex hull strategies.
//!
//! Purpose
//! - One injectable capability (`HullStrategy`) with two interchangeable
//!   backends: the manual `MonotoneChain` reference and, with feature `geo`,
//!   `GeoQuickHull`.
//!
//! Conventions
//! - Output is an open ring (no repeated closing vertex) in clockwise order
//!   (y up), starting at the lexicographically smallest point for the
//!   monotone chain. Collinear boundary points are dropped.
//! - Both backends agree on vertex set and winding; the starting index may
//!   differ.

#[cfg(feature = "geo")]
mod accel;

#[cfg(feature = "geo")]
pub use accel::GeoQuickHull;

use nalgebra::Vector2;
use std::cmp::Ordering;

/// Computes the convex hull of a point set.
pub trait HullStrategy: Send + Sync {
    /// Short backend name (used in logs).
    fn name(&self) -> &'static str;
    /// Hull vertices of `points` as an open clockwise ring.
    fn hull(&self, points: &[Vector2<f64>]) -> Vec<Vector2<f64>>;
}

/// Andrew's monotone chain over the deduplicated, lexicographically sorted points.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonotoneChain;

impl HullStrategy for MonotoneChain {
    fn name(&self) -> &'static str {
        "monotone-chain"
    }

    fn hull(&self, points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
        let pts = sorted_unique(points);
        if pts.len() < 2 {
            return pts;
        }
        let mut hull = chain(pts.iter().copied());
        let mut lower = chain(pts.iter().rev().copied());
        // lower's endpoints repeat upper's endpoints
        lower.pop();
        hull.extend(lower.into_iter().skip(1));
        hull
    }
}

/// Exact-equality dedup after lexicographic sort (x, then y).
///
/// NaN coordinates compare as equal to everything; their placement is unspecified.
pub(crate) fn sorted_unique(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts = points.to_vec();
    pts.sort_by(|a, b| match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    });
    pts.dedup();
    pts
}

/// One half of the hull: keep appending, then drop the middle of the last
/// three while they fail to make a right turn. Needs at least two points.
fn chain(mut it: impl Iterator<Item = Vector2<f64>>) -> Vec<Vector2<f64>> {
    let mut out: Vec<Vector2<f64>> = it.by_ref().take(2).collect();
    for p in it {
        out.push(p);
        while out.len() > 2 {
            let n = out.len();
            if is_right_turn(out[n - 3], out[n - 2], out[n - 1]) {
                break;
            }
            out.remove(n - 2);
        }
    }
    out
}

/// Strict right turn of `p → q → r` (collinear is not a right turn).
#[inline]
pub fn is_right_turn(p: Vector2<f64>, q: Vector2<f64>, r: Vector2<f64>) -> bool {
    let sum1 = q.x * r.y + p.x * q.y + r.x * p.y;
    let sum2 = q.x * p.y + r.x * q.y + p.x * r.y;
    sum1 - sum2 < 0.0
}
