use super::scalar::*;
use super::*;
use crate::geom2::Sketch;
use crate::synth::{draw_sketches, ReplayToken, SketchCfg};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};
use std::io;
use std::sync::{Arc, Mutex};

fn unit_square() -> Sketch {
    Sketch::from_xy(&[&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]])
}

#[test]
fn empty_sketch_fallbacks() {
    let s = Sketch::default();
    assert_eq!(path_count(&s), 0.0);
    assert_eq!(point_count(&s), 0.0);
    assert_eq!(aspect_ratio(&s), 0.0);
    assert_eq!(symmetry(&s), 0.0);
    assert_eq!(symmetry_grid(&s, 1e-3), 0.0);
    assert_eq!(stroke_directionality(&s), 0.0);
    assert_eq!(min_box_width(&s), None);
    assert_eq!(min_box_height(&s), None);
    // Strokes without points count as paths but carry nothing else.
    let hollow = Sketch::from_xy(&[&[], &[]]);
    assert_eq!(path_count(&hollow), 2.0);
    assert_eq!(point_count(&hollow), 0.0);
    assert_eq!(min_box_width(&hollow), None);
}

#[test]
fn unit_square_scenario() {
    let s = unit_square();
    assert_eq!(path_count(&s), 1.0);
    assert_eq!(point_count(&s), 4.0);
    assert_eq!(aspect_ratio(&s), 1.0);
    assert_eq!(symmetry(&s), 1.0);
    let w = min_box_width(&s).unwrap();
    let h = min_box_height(&s).unwrap();
    assert!((w - 1.0).abs() < 1e-12);
    assert!((h - 1.0).abs() < 1e-12);
}

#[test]
fn horizontal_segment_scenario() {
    let s = Sketch::from_xy(&[&[(0.0, 0.0), (2.0, 0.0)]]);
    assert_eq!(aspect_ratio(&s), 0.0);
    assert_eq!(min_box_height(&s), Some(0.0));
    assert_eq!(min_box_width(&s), Some(2.0));
    assert_eq!(stroke_directionality(&s), 0.0);
}

#[test]
fn l_shape_directionality() {
    let s = Sketch::from_xy(&[&[(0.0, 0.0), (1.0, 0.0)], &[(1.0, 0.0), (1.0, 1.0)]]);
    assert!((stroke_directionality(&s) - FRAC_PI_4).abs() < 1e-15);
}

#[test]
fn directionality_uses_absolute_angles() {
    // Straight down and straight left: |−π/2| and |π|.
    let s = Sketch::from_xy(&[&[(0.0, 1.0), (0.0, 0.0), (-1.0, 0.0)]]);
    assert!((stroke_directionality(&s) - (FRAC_PI_2 + PI) / 2.0).abs() < 1e-15);
    // Single-point strokes contribute no segments.
    let dots = Sketch::from_xy(&[&[(0.5, 0.5)], &[(0.2, 0.2)]]);
    assert_eq!(stroke_directionality(&dots), 0.0);
}

#[test]
fn aspect_ratio_axis_extent() {
    let s = Sketch::from_xy(&[&[(0.25, 0.25)], &[(0.75, 0.5)]]);
    assert_eq!(aspect_ratio(&s), 2.0);
    let vertical = Sketch::from_xy(&[&[(0.5, 0.0), (0.5, 1.0)]]);
    assert_eq!(aspect_ratio(&vertical), 0.0 / 1.0);
}

#[test]
fn symmetry_counts_distinct_points() {
    // Duplicated points count once; the score stays within [0, 1].
    let s = Sketch::from_xy(&[&[(0.0, 0.0), (0.0, 0.0)], &[(1.0, 0.0)]]);
    assert_eq!(symmetry(&s), 1.0);
    // -0.0 and 0.0 are the same point.
    let z = Sketch::from_xy(&[&[(-0.0, 0.5), (0.0, 0.5), (1.0, 0.5), (0.5, 0.25)]]);
    assert_eq!(symmetry(&z), 1.0);
}

#[test]
fn symmetry_exact_vs_grid() {
    let s = Sketch::from_xy(&[&[
        (0.25, 0.5),
        (0.75, 0.5),
        (0.375, 0.75),
        (0.6250004, 0.75),
    ]]);
    // The noisy pair misses under exact matching ...
    assert_eq!(symmetry(&s), 0.5);
    // ... and matches once snapped to a 1e-3 grid.
    assert_eq!(symmetry_grid(&s, 1e-3), 1.0);
    // Degenerate cell falls back to exact matching.
    assert_eq!(symmetry_grid(&s, 0.0), 0.5);
}

#[test]
fn asymmetric_point_set() {
    let s = Sketch::from_xy(&[&[(0.0, 0.0), (1.0, 0.5), (0.5, 1.0)]]);
    // Mirror of (0.5, 1.0) is itself; the other two miss.
    assert!((symmetry(&s) - 1.0 / 3.0).abs() < 1e-15);
}

#[test]
fn default_registry_order() {
    let r = Registry::default_active();
    assert_eq!(r.schema().names(), &["Height", "Width"]);
    let v = r.extract(&Sketch::from_xy(&[&[(0.0, 0.0), (2.0, 0.0)]]), FeatureCfg::default());
    assert_eq!(v.values, vec![Some(0.0), Some(2.0)]);
    assert_eq!(
        v.entries().collect::<Vec<_>>(),
        vec![("Height", Some(0.0)), ("Width", Some(2.0))]
    );
}

#[test]
fn catalog_on_empty_sketch() {
    let r = Registry::catalog();
    assert_eq!(r.len(), BUILTINS.len());
    let v = r.extract(&Sketch::default(), FeatureCfg::default());
    assert_eq!(
        v.values,
        vec![
            Some(0.0),
            Some(0.0),
            Some(0.0),
            Some(0.0),
            Some(0.0),
            Some(0.0),
            None,
            None
        ]
    );
    assert!(!v.is_complete());
    assert_eq!(v.get(names::WIDTH), Some(None));
    assert_eq!(v.get("Curvature"), None);
}

#[test]
fn width_and_height_share_one_box() {
    let s = Sketch::from_xy(&[&[(0.1, 0.1), (0.9, 0.3), (0.7, 0.8), (0.2, 0.6)]]);
    let b = min_box(&s).unwrap();
    let v = Registry::select(&["Width", "Height"])
        .unwrap()
        .extract(&s, FeatureCfg::default());
    assert_eq!(v.values, vec![Some(b.width), Some(b.height)]);
}

#[test]
fn select_rejects_unknown_and_duplicates() {
    assert_eq!(
        Registry::select(&["Width", "Curvature"]).unwrap_err(),
        RegistryError::UnknownFeature {
            name: "Curvature".into()
        }
    );
    let dup = Registry::new(vec![
        builtin("Width").unwrap(),
        builtin("Width").unwrap(),
    ]);
    assert!(matches!(dup, Err(RegistryError::DuplicateFeature { .. })));
    let custom = Registry::new(vec![Feature::new("Always One", |_| Some(1.0))]).unwrap();
    let v = custom.extract(&Sketch::default(), FeatureCfg::default());
    assert_eq!(v.values, vec![Some(1.0)]);
}

#[test]
fn schema_compatibility() {
    let a = Registry::default_active();
    let b = Registry::select(&["Height", "Width"]).unwrap();
    let c = Registry::select(&["Width", "Height"]).unwrap();
    assert!(a.schema().ensure_compatible(b.schema()).is_ok());
    assert_eq!(
        a.schema().ensure_compatible(c.schema()),
        Err(SchemaError::NameMismatch {
            index: 0,
            expected: "Height".into(),
            found: "Width".into()
        })
    );
    assert_eq!(
        a.schema().ensure_names(&["Height"]),
        Err(SchemaError::LengthMismatch {
            expected: 2,
            found: 1
        })
    );
    assert!(a.schema().ensure_names(&["Height".to_string(), "Width".to_string()]).is_ok());
}

#[test]
fn batch_matches_sequential_and_keeps_order() {
    let sketches = draw_sketches(SketchCfg::default(), ReplayToken { seed: 11, index: 0 }, 64);
    let r = Registry::catalog();
    let cfg = FeatureCfg::default();
    let par = extract_batch(&r, &sketches, cfg);
    let seq = extract_all(&r, &sketches, cfg);
    assert_eq!(par, seq);
    for (s, v) in sketches.iter().zip(par.iter()) {
        assert_eq!(v.get(names::POINT_COUNT), Some(Some(point_count(s))));
    }
}

#[derive(Clone, Default)]
struct LogBuf(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn empty_min_box_warns() {
    let buf = LogBuf::default();
    let writer = buf.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        assert_eq!(min_box(&Sketch::default()), None);
        assert!(min_box(&unit_square()).is_some());
    });
    let logged = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
    assert_eq!(logged.matches("min_box: no points").count(), 1, "{logged}");
    assert!(logged.contains("WARN"), "{logged}");
}
