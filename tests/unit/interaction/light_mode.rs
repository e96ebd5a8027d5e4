use super::*;

#[test]
fn default_mode_is_rainbow() {
    assert_eq!(LightMode::default(), LightMode::Rainbow);
}

#[test]
fn next_cycles_modulo_three() {
    for m in LightMode::ALL {
        assert_eq!(m.next().index(), (m.index() + 1) % 3);
    }
}

#[test]
fn three_taps_return_to_start() {
    let p = Point::new(12.0, 34.0);
    let mut mode = LightMode::Rainbow;
    mode = on_tap(mode, p);
    assert_eq!(mode, LightMode::Original);
    mode = on_tap(mode, p);
    assert_eq!(mode, LightMode::Off);
    mode = on_tap(mode, p);
    assert_eq!(mode, LightMode::Rainbow);
}

#[test]
fn tap_point_is_ignored() {
    assert_eq!(
        on_tap(LightMode::Off, Point::ORIGIN),
        on_tap(LightMode::Off, Point::new(-5.0, 1e9))
    );
}

#[test]
fn serde_uses_snake_case_names() {
    assert_eq!(
        serde_json::to_string(&LightMode::Original).unwrap(),
        "\"original\""
    );
    let m: LightMode = serde_json::from_str("\"off\"").unwrap();
    assert_eq!(m, LightMode::Off);
}
