use super::*;
use nalgebra::{vector, Vector2};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[test]
fn orientation_signs() {
    let o = vector![0.0, 0.0];
    assert!(orientation(o, vector![1.0, 0.0], vector![1.0, 1.0]) > 0.0);
    assert!(orientation(o, vector![1.0, 0.0], vector![1.0, -1.0]) < 0.0);
    assert_eq!(orientation(o, vector![1.0, 1.0], vector![2.0, 2.0]), 0.0);
    // Twice the triangle area.
    assert_eq!(orientation(o, vector![2.0, 0.0], vector![0.0, 3.0]), 6.0);
}

#[test]
fn flatten_keeps_path_then_point_order() {
    let s = Sketch::from_xy(&[&[(0.0, 0.0), (1.0, 0.0)], &[], &[(5.0, 5.0)]]);
    let pts = flatten(&s);
    assert_eq!(
        pts,
        vec![vector![0.0, 0.0], vector![1.0, 0.0], vector![5.0, 5.0]]
    );
    assert_eq!(s.points().count(), 3);
    assert!(flatten(&Sketch::default()).is_empty());
}

#[test]
fn extent_of_points() {
    assert!(Extent2::of(&[]).is_none());
    let pts = [vector![0.2, 0.9], vector![0.6, 0.1], vector![0.4, 0.5]];
    let e = Extent2::of(&pts).unwrap();
    assert_eq!((e.min_x, e.max_x, e.min_y, e.max_y), (0.2, 0.6, 0.1, 0.9));
    assert!((e.width() - 0.4).abs() < 1e-15);
    assert!((e.center_x() - 0.4).abs() < 1e-15);
}

#[test]
fn nested_input_validation() {
    let ok = Sketch::try_from_nested(vec![vec![vec![0.0, 1.0], vec![2.0, 3.0]], vec![]]).unwrap();
    assert_eq!(ok.paths.len(), 2);
    assert_eq!(ok.paths[0].points[1], vector![2.0, 3.0]);

    let bad = Sketch::try_from_nested(vec![vec![vec![0.0, 1.0]], vec![vec![1.0, 2.0, 3.0]]]);
    assert_eq!(
        bad,
        Err(SketchError::MalformedPoint {
            path: 1,
            point: 0,
            coords: 3
        })
    );
    let nan = Sketch::try_from_nested(vec![vec![vec![f64::NAN, 0.0]]]);
    assert_eq!(nan, Err(SketchError::NonFinite { path: 0, point: 0 }));
    assert!(nan.unwrap_err().to_string().contains("not finite"));
}

#[test]
fn unit_square_hull_and_box() {
    let s = Sketch::from_xy(&[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]]);
    let pts = flatten(&s);
    let hull = convex_hull(&pts);
    assert_eq!(hull.len(), 4);
    for p in &pts {
        assert!(hull.contains(p));
    }
    let b = min_area_box(&pts).unwrap();
    assert!((b.width - 1.0).abs() < 1e-12);
    assert!((b.height - 1.0).abs() < 1e-12);
}

#[test]
fn hull_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let n = rng.gen_range(0..40);
        let pts: Vec<Vector2<f64>> = (0..n)
            .map(|_| Vector2::new(rng.gen::<f64>(), rng.gen::<f64>()))
            .collect();
        let hull = convex_hull(&pts);
        // Subset of the input.
        assert!(hull.iter().all(|h| pts.contains(h)));
        // Encloses everything.
        assert!(pts.iter().all(|p| hull_contains(&hull, *p, 1e-12)));
        // Strictly convex, CCW.
        let m = hull.len();
        if m >= 3 {
            for i in 0..m {
                assert!(orientation(hull[i], hull[(i + 1) % m], hull[(i + 2) % m]) > 0.0);
            }
        }
        // Idempotent.
        assert_eq!(convex_hull(&hull), hull);
    }
}

#[test]
fn min_box_never_exceeds_axis_box_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let n = rng.gen_range(2..30);
        let pts: Vec<Vector2<f64>> = (0..n)
            .map(|_| Vector2::new(rng.gen::<f64>(), rng.gen::<f64>()))
            .collect();
        let b = min_area_box(&pts).unwrap();
        let axis = Extent2::of(&pts).unwrap();
        assert!(b.area() <= axis.area() + 1e-12);
        assert!(b.width >= 0.0 && b.height >= 0.0);
    }
}

#[test]
fn min_box_tie_keeps_first_edge() {
    // Axis-aligned rectangle: edge 0 (angle 0) and edge 2 (angle π) have equal
    // area in exact arithmetic; the first one must win.
    let pts = vec![
        vector![0.0, 0.0],
        vector![2.0, 0.0],
        vector![2.0, 1.0],
        vector![0.0, 1.0],
    ];
    let b = min_area_box(&pts).unwrap();
    assert_eq!(b.edge, 0);
    assert_eq!(b.angle, 0.0);
    assert_eq!((b.width, b.height), (2.0, 1.0));
}
