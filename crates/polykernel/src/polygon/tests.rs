use super::*;
use crate::error::{Operand, PolygonError};
use nalgebra::{vector, Vector2};

fn unit_square_at(x: f64, y: f64) -> Polygon {
    Polygon::new(vec![
        vector![x, y],
        vector![x + 1.0, y],
        vector![x + 1.0, y + 1.0],
        vector![x, y + 1.0],
    ])
}

#[test]
fn validity_and_accessors() {
    let unset = Polygon::default();
    assert!(!unset.is_valid());
    assert!(!unset.is_set());
    assert!(unset.points().is_empty());

    let mut empty = Polygon::new(vec![]);
    assert!(empty.is_set());
    assert!(!empty.is_valid());

    // one point is valid (degenerate)
    empty.set_points(vec![vector![1.0, 2.0]]);
    assert!(empty.is_valid());
    assert_eq!(empty.points(), &[vector![1.0, 2.0]]);

    let collected: Polygon = (0..3).map(|i| Vector2::new(i as f64, 0.0)).collect();
    assert_eq!(collected.len(), 3);
}

#[test]
fn project_unit_square_on_x() {
    let p = unit_square_at(0.0, 0.0).project(vector![1.0, 0.0]).unwrap();
    assert_eq!(p, Projection { min: 0.0, max: 1.0 });
    assert_eq!(<(f64, f64)>::from(p), (0.0, 1.0));
}

#[test]
fn project_uses_unnormalized_dot() {
    let p = unit_square_at(0.0, 0.0).project(vector![2.0, 2.0]).unwrap();
    assert_eq!(p, Projection { min: 0.0, max: 4.0 });
}

#[test]
fn project_rejects_empty() {
    let err = Polygon::new(vec![]).project(vector![1.0, 0.0]).unwrap_err();
    assert_eq!(err, PolygonError::InvalidPolygon { op: "project" });
    assert!(Polygon::unset().project(vector![0.0, 1.0]).is_err());
}

#[test]
fn projection_overlap() {
    let a = Projection { min: 0.0, max: 1.0 };
    assert_eq!(a.overlap(&Projection { min: 0.5, max: 3.0 }), Some(0.5));
    assert_eq!(a.overlap(&Projection { min: 1.0, max: 2.0 }), Some(0.0));
    assert_eq!(a.overlap(&Projection { min: 1.5, max: 2.0 }), None);
    assert_eq!(a.overlap(&Projection { min: -0.25, max: 0.25 }), Some(0.25));
}

#[test]
fn mirror_single_point_across_y_axis() {
    let mut p = Polygon::new(vec![vector![1.0, 0.0]]);
    p.mirror(vector![0.0, 0.0], vector![0.0, 1.0]);
    assert!((p.points()[0] - vector![-1.0, 0.0]).norm() < 1e-12);
}

#[test]
fn mirror_zero_axis_is_noop() {
    let mut p = unit_square_at(0.3, -2.0);
    let before = p.clone();
    p.mirror(vector![5.0, 5.0], vector![0.0, 0.0]);
    assert_eq!(p, before);

    let mut unset = Polygon::unset();
    unset.mirror(vector![0.0, 0.0], vector![1.0, 0.0]);
    assert!(!unset.is_set());
}

#[test]
fn mirror_across_offset_diagonal() {
    // line y = x + 1 through (0,1), direction (1,1) (not unit)
    let mut p = Polygon::new(vec![vector![1.0, 0.0], vector![0.0, 1.0]]);
    p.mirror(vector![0.0, 1.0], vector![3.0, 3.0]);
    assert!((p.points()[0] - vector![-1.0, 2.0]).norm() < 1e-12);
    // points on the axis stay put
    assert!((p.points()[1] - vector![0.0, 1.0]).norm() < 1e-12);
}

#[test]
fn mirror_twice_is_identity() {
    let mut p = unit_square_at(0.25, 0.75);
    let before = p.clone();
    let o = vector![-1.0, 2.0];
    let d = vector![0.3, -0.7];
    p.mirror(o, d);
    p.mirror(o, d);
    for (a, b) in p.points().iter().zip(before.points()) {
        assert!((a - b).norm() < 1e-12);
    }
}

#[test]
fn sat_overlap_half_unit_along_x() {
    let a = unit_square_at(0.0, 0.0);
    let b = unit_square_at(0.5, 0.0);
    let mtv = a.intersects_polygon(&b).unwrap().expect("overlap");
    assert!((mtv.norm() - 0.5).abs() < 1e-12);
    assert!(mtv.y.abs() < 1e-12);
    // self is left of other, so the MTV pushes self towards -x
    assert!((mtv - vector![-0.5, 0.0]).norm() < 1e-12);
    // operands untouched
    assert_eq!(a, unit_square_at(0.0, 0.0));
}

#[test]
fn sat_direction_flips_with_operand_order() {
    let a = unit_square_at(0.0, 0.0);
    let b = unit_square_at(0.5, 0.0);
    let mtv = b.intersects_polygon(&a).unwrap().expect("overlap");
    assert!((mtv - vector![0.5, 0.0]).norm() < 1e-12);
}

#[test]
fn sat_separated_squares() {
    let a = unit_square_at(0.0, 0.0);
    let b = unit_square_at(2.0, 0.0);
    assert_eq!(a.intersects_polygon(&b).unwrap(), None);
}

#[test]
fn sat_touching_edges_overlap_by_zero() {
    let a = unit_square_at(0.0, 0.0);
    let b = unit_square_at(1.0, 0.0);
    let mtv = a.intersects_polygon(&b).unwrap().expect("touching counts as overlap");
    assert!(mtv.norm() < 1e-12);
}

#[test]
fn sat_separated_by_other_polygons_axis() {
    // square vs. triangle whose hypotenuse separates them; the square's
    // axis-aligned normals alone would report an overlap.
    let square = unit_square_at(0.0, 0.0);
    let tri = Polygon::new(vec![vector![2.0, 0.9], vector![2.0, 2.0], vector![0.9, 2.0]]);
    assert_eq!(square.intersects_polygon(&tri).unwrap(), None);
}

#[test]
fn sat_rejects_invalid_operands() {
    let a = unit_square_at(0.0, 0.0);
    let err = a.intersects_polygon(&Polygon::unset()).unwrap_err();
    assert!(matches!(err, PolygonError::InvalidPolygon { .. }));
}

#[test]
fn sat_reports_zero_length_edge() {
    let a = Polygon::new(vec![
        vector![0.0, 0.0],
        vector![0.0, 0.0],
        vector![1.0, 0.0],
        vector![0.0, 1.0],
    ]);
    let b = unit_square_at(0.25, 0.25);
    let err = a.intersects_polygon(&b).unwrap_err();
    assert_eq!(
        err,
        PolygonError::DegenerateAxis {
            edge: 1,
            operand: Operand::First,
        }
    );
    let err = b.intersects_polygon(&a).unwrap_err();
    assert!(matches!(
        err,
        PolygonError::DegenerateAxis {
            operand: Operand::Second,
            ..
        }
    ));
}

#[test]
fn convex_hull_cfg_uses_backend() {
    let cfg = KernelCfg::default();
    let p = Polygon::new(vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![1.0, 0.5],
        vector![1.0, 2.0],
    ]);
    assert_eq!(p.convex_hull_cfg(&cfg), p.convex_hull());
    assert_eq!(p.convex_hull().len(), 3);
}
