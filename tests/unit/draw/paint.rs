use super::*;

#[test]
fn even_stops_span_unit_interval() {
    let p = Paint::vertical(
        0.0,
        10.0,
        &[Color::BLACK, Color::GRAY, Color::WHITE],
    );
    let offsets: Vec<f64> = p.stops().iter().map(|s| s.offset).collect();
    assert_eq!(offsets, vec![0.0, 0.5, 1.0]);
}

#[test]
fn single_color_gradient_has_one_stop_at_zero() {
    let p = Paint::horizontal(0.0, 1.0, &[Color::WHITE]);
    assert_eq!(p.stops().len(), 1);
    assert_eq!(p.stops()[0].offset, 0.0);
}

#[test]
fn sampling_pads_and_interpolates() {
    let p = Paint::radial(Point::ORIGIN, 1.0, &[Color::BLACK, Color::WHITE]);
    let stops = p.stops();
    assert_eq!(Paint::sample_stops(stops, -1.0), Color::BLACK);
    assert_eq!(Paint::sample_stops(stops, 2.0), Color::WHITE);
    let mid = Paint::sample_stops(stops, 0.25);
    assert!((mid.r - 0.25).abs() < 1e-12);
    assert_eq!(Paint::sample_stops(&[], 0.5), Color::TRANSPARENT);
}

#[test]
fn solid_paint_has_no_stops() {
    let p: Paint = Color::WHITE.into();
    assert!(p.stops().is_empty());
}

#[test]
fn stroke_style_builders() {
    let s = StrokeStyle::round(2.0).with_dash(3.0, 3.0);
    assert_eq!(s.cap, LineCap::Round);
    assert_eq!(s.dash, Some([3.0, 3.0]));
    assert_eq!(StrokeStyle::new(1.0).cap, LineCap::Butt);
}

#[test]
fn color_at_projects_onto_the_gradient_axis() {
    let linear = Paint::linear(
        Point::new(0.0, 0.0),
        Point::new(10.0, 0.0),
        &[Color::BLACK, Color::WHITE],
    );
    // off-axis points project onto x
    let c = linear.color_at(Point::new(5.0, 99.0));
    assert!((c.g - 0.5).abs() < 1e-12);

    let radial = Paint::radial(Point::new(2.0, 2.0), 4.0, &[Color::WHITE, Color::BLACK]);
    assert_eq!(radial.color_at(Point::new(2.0, 2.0)), Color::WHITE);
    assert_eq!(radial.color_at(Point::new(20.0, 2.0)), Color::BLACK);
    assert_eq!(Paint::solid(Color::GRAY).color_at(Point::ORIGIN), Color::GRAY);
}
