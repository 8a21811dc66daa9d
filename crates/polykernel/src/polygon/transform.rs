//! Single-polygon transforms: axis projection and reflection.
//!
//! `project` is pure; `mirror` is the one in-place mutation in the kernel.

use nalgebra::{Matrix2, Vector2};

use super::Polygon;
use crate::error::{PolygonError, Result};

/// Scalar extent of a polygon projected onto a line through the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projection {
    pub min: f64,
    pub max: f64,
}

impl Projection {
    /// Overlap length with `other`, or `None` if the ranges are disjoint.
    /// Touching ranges overlap by `0`.
    #[inline]
    pub fn overlap(&self, other: &Projection) -> Option<f64> {
        if self.min > other.max || other.min > self.max {
            return None;
        }
        Some(self.max.min(other.max) - self.min.max(other.min))
    }
}

impl From<Projection> for (f64, f64) {
    fn from(p: Projection) -> Self {
        (p.min, p.max)
    }
}

/// Householder reflection `R = 2 d dᵀ − I` for unit direction `d`.
#[inline]
fn householder(d: Vector2<f64>) -> Matrix2<f64> {
    2.0 * d * d.transpose() - Matrix2::identity()
}

impl Polygon {
    /// Project every vertex onto the line through the origin with direction
    /// `normal` (dot product; `normal` is not normalized here).
    pub fn project(&self, normal: Vector2<f64>) -> Result<Projection> {
        let (first, rest) = self
            .points()
            .split_first()
            .ok_or(PolygonError::InvalidPolygon { op: "project" })?;
        let p0 = normal.dot(first);
        let init = Projection { min: p0, max: p0 };
        Ok(rest.iter().fold(init, |acc, p| {
            let s = normal.dot(p);
            Projection {
                min: acc.min.min(s),
                max: acc.max.max(s),
            }
        }))
    }

    /// Reflect every vertex across the line through `point_on_axis` with
    /// direction `axis_direction`, in place.
    ///
    /// A zero `axis_direction` has no direction to reflect across; the call is
    /// a no-op. An unset polygon is left unset.
    pub fn mirror(&mut self, point_on_axis: Vector2<f64>, axis_direction: Vector2<f64>) {
        if axis_direction == Vector2::zeros() {
            return;
        }
        let r = householder(axis_direction.normalize());
        if let Some(points) = self.points_mut() {
            for p in points.iter_mut() {
                *p = r * (*p - point_on_axis) + point_on_axis;
            }
        }
    }
}
