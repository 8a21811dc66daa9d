//! QuickHull backend from the `geo` crate.

use geo::{ConvexHull, MultiPoint, Point};
use nalgebra::Vector2;

use super::{sorted_unique, HullStrategy, MonotoneChain};

/// Accelerated hull via `geo::ConvexHull`.
///
/// `geo` returns a closed counter-clockwise ring; the closing vertex is
/// dropped, collinear vertices removed, and the order reversed to match
/// `MonotoneChain`'s clockwise output.
#[derive(Clone, Copy, Debug, Default)]
pub struct GeoQuickHull;

impl HullStrategy for GeoQuickHull {
    fn name(&self) -> &'static str {
        "geo-quickhull"
    }

    fn hull(&self, points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
        let unique = sorted_unique(points);
        // flat input: keep the reference degenerate output
        if unique.len() < 3 || all_collinear(&unique) {
            return MonotoneChain.hull(&unique);
        }
        let cloud: MultiPoint<f64> = unique.iter().map(|p| Point::new(p.x, p.y)).collect();
        let ring = cloud.convex_hull();
        let mut out: Vec<Vector2<f64>> = ring
            .exterior()
            .coords()
            .map(|c| Vector2::new(c.x, c.y))
            .collect();
        if out.len() > 1 && out.first() == out.last() {
            out.pop();
        }
        drop_collinear(&mut out);
        out.reverse();
        out
    }
}

#[inline]
fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    let ab = b - a;
    let ac = c - a;
    ab.x * ac.y - ab.y * ac.x
}

fn all_collinear(points: &[Vector2<f64>]) -> bool {
    points[2..]
        .iter()
        .all(|p| cross(points[0], points[1], *p) == 0.0)
}

/// QuickHull may keep a vertex lying on an edge when furthest points tie.
fn drop_collinear(ring: &mut Vec<Vector2<f64>>) {
    let mut i = 0;
    while ring.len() >= 3 && i < ring.len() {
        let n = ring.len();
        let prev = ring[(i + n - 1) % n];
        let next = ring[(i + 1) % n];
        if cross(prev, ring[i], next) == 0.0 {
            ring.remove(i);
            i = i.saturating_sub(1);
        } else {
            i += 1;
        }
    }
}
