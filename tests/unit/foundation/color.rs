use super::*;

#[test]
fn argb_literal_unpacks_channels() {
    let c = Color::from_argb(0xFF0B1026);
    assert_eq!(c.to_rgba8(), [0x0B, 0x10, 0x26, 0xFF]);
    assert_eq!(Color::from_argb(0x00FFC107).to_rgba8(), [0xFF, 0xC1, 0x07, 0]);
}

#[test]
fn with_alpha_clamps() {
    assert_eq!(Color::WHITE.with_alpha(1.7).a, 1.0);
    assert_eq!(Color::WHITE.with_alpha(-0.2).a, 0.0);
    assert_eq!(Color::WHITE.with_alpha(f64::NAN).a, 0.0);
    assert_eq!(Color::WHITE.with_alpha(0.4).fade(0.5).a, 0.2);
}

#[test]
fn lerp_is_per_channel() {
    let a = Color::rgba8(0, 0, 0, 0);
    let b = Color::rgba8(255, 255, 255, 255);
    let mid = a.lerp(b, 0.5);
    assert!((mid.r - 0.5).abs() < 1e-12);
    assert!((mid.a - 0.5).abs() < 1e-12);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 2.0), b);
}

#[test]
fn hex_formatting_drops_alpha() {
    assert_eq!(Color::from_argb(0x80FF6A1A).to_hex_rgb(), "#ff6a1a");
}
