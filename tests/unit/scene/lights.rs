use super::*;
use crate::foundation::core::ViewportSize;

fn geo() -> TreeGeometry {
    TreeGeometry::new(ViewportSize::new(1080.0, 1920.0).unwrap())
}

fn bulbs() -> Vec<LightBulbSpec> {
    let g = geo();
    bulb_specs(&g, &PathMeasure::new(&wire_path(&g)))
}

#[test]
fn bulbs_are_spaced_by_arc_length() {
    let g = geo();
    let measure = PathMeasure::new(&wire_path(&g));
    let bulbs = bulb_specs(&g, &measure);
    let step = g.layer_height * 0.45;
    let expected = ((measure.length() / step) - 0.5).floor() as usize + 1;
    assert_eq!(bulbs.len(), expected);
    assert!(bulbs.len() > 10);

    let first = measure.position_at(step * 0.5).unwrap();
    assert_eq!(bulbs[0].position, first);
}

#[test]
fn bulb_attributes_come_from_index_hashes() {
    let base = geo().layer_height * 0.10;
    for b in bulbs() {
        let i = b.index;
        assert_eq!(b.color, PALETTE[i % 6]);
        assert_eq!(b.phase, ((i * 37) % 100) as f64 / 100.0);
        let jitter = ((i * 17 + 7) % 100) as f64 / 100.0;
        assert_eq!(b.radius, base * (0.9 + 0.2 * jitter));
    }
}

#[test]
fn rainbow_cycle_hits_stops_on_sixths() {
    assert_eq!(rainbow_color(0.0), WARM_WHITE);
    for (k, stop) in RAINBOW.iter().enumerate().take(6) {
        let c = rainbow_color(k as f64 / 6.0);
        assert_eq!(c.to_rgba8(), stop.to_rgba8(), "stop {k}");
    }
    let almost_end = rainbow_color(0.999_999);
    assert_eq!(almost_end.to_rgba8(), WARM_WHITE.to_rgba8());
    assert_eq!(rainbow_color(1.25), rainbow_color(0.25));
}

#[test]
fn off_mode_has_no_twinkle_state() {
    let b = bulbs()[0];
    assert!(BulbState::at(&b, LightMode::Off, &TimePhases::at(0)).is_none());
}

#[test]
fn original_mode_keeps_palette_color() {
    for b in bulbs().iter().take(6) {
        let s = BulbState::at(b, LightMode::Original, &TimePhases::at(777)).unwrap();
        assert_eq!(s.color, b.color);
        assert!((0.0..=1.0).contains(&s.intensity));
    }
}

#[test]
fn blink_threshold_dims_intensity() {
    let b = bulbs()[0];
    for ms in (0..2200).step_by(11) {
        let s = BulbState::at(&b, LightMode::Rainbow, &TimePhases::at(ms)).unwrap();
        let expected_on = s.sparkle > 0.15 + 0.15 * b.phase;
        assert_eq!(s.on, expected_on);
        if !s.on {
            assert!(s.intensity <= 0.1 + 1e-12);
        }
    }
}

#[test]
fn draw_emits_five_circles_per_lit_bulb_and_one_when_off() {
    let g = geo();
    let phases = TimePhases::at(0);
    let mut lit = DrawList::new();
    let n = draw(&mut lit, &g, LightMode::Original, &phases);
    assert_eq!(lit.len(), 1 + 5 * n);

    let mut off = DrawList::new();
    let m = draw(&mut off, &g, LightMode::Off, &phases);
    assert_eq!(m, n);
    assert_eq!(off.len(), 1 + n);
}
