use super::*;

fn polyline(points: &[(f64, f64)]) -> BezPath {
    let mut p = BezPath::new();
    p.move_to(points[0]);
    for &pt in &points[1..] {
        p.line_to(pt);
    }
    p
}

#[test]
fn straight_segments_measure_exactly() {
    let m = PathMeasure::new(&polyline(&[(0.0, 0.0), (30.0, 40.0), (30.0, 60.0)]));
    assert!((m.length() - 70.0).abs() < 1e-9);

    let p = m.position_at(25.0).unwrap();
    assert!((p.x - 15.0).abs() < 1e-6 && (p.y - 20.0).abs() < 1e-6);

    let q = m.position_at(60.0).unwrap();
    assert!((q.x - 30.0).abs() < 1e-6 && (q.y - 50.0).abs() < 1e-6);
}

#[test]
fn distances_clamp_to_the_ends() {
    let m = PathMeasure::new(&polyline(&[(0.0, 0.0), (10.0, 0.0)]));
    assert_eq!(m.position_at(-5.0).unwrap(), Point::new(0.0, 0.0));
    let end = m.position_at(1e6).unwrap();
    assert!((end.x - 10.0).abs() < 1e-9);
}

#[test]
fn curved_segment_is_sampled_by_arc_length() {
    let mut p = BezPath::new();
    p.move_to((0.0, 0.0));
    p.curve_to((0.0, 50.0), (100.0, 50.0), (100.0, 0.0));
    let m = PathMeasure::new(&p);
    assert!(m.length() > 100.0);

    let a = m.position_at(m.length() * 0.5).unwrap();
    assert!((a.x - 50.0).abs() < 1e-3, "symmetric curve midpoint: {a:?}");
}

#[test]
fn empty_path_has_no_positions() {
    let m = PathMeasure::new(&BezPath::new());
    assert_eq!(m.length(), 0.0);
    assert!(m.position_at(1.0).is_none());
    assert!(m.start().is_none());
}
