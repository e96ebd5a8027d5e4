use crate::animation::phase::TimePhases;
use crate::draw::list::DrawList;
use crate::draw::paint::Paint;
use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Point, rotate_about_deg, scale_about};
use crate::foundation::math::{unit_sine, wave};
use crate::scene::layout::TreeGeometry;

const INNER_RATIO: f64 = 0.45;

/// Animated pulse values for the topper at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TopperPulse {
    pub star: f64,
    pub glow: f64,
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

impl TopperPulse {
    pub fn at(phases: &TimePhases) -> Self {
        let t = phases.twinkle;
        let star = unit_sine(t * 0.8 + 0.05);
        let glow = unit_sine(t * 1.5 + 0.2);
        Self {
            star,
            glow,
            scale: 0.92 + 0.18 * star,
            rotation: wave(t * 0.4 + 0.15) * 1.5,
        }
    }
}

/// Ten-vertex star alternating outer and inner radius, first tip straight up.
pub fn star_path(center: Point, outer: f64, inner_ratio: f64) -> BezPath {
    let inner = outer * inner_ratio;
    let mut path = BezPath::new();
    for k in 0..10 {
        let r = if k % 2 == 0 { outer } else { inner };
        let a = (-90.0 + f64::from(k) * 36.0_f64).to_radians();
        let p = Point::new(center.x + r * a.cos(), center.y + r * a.sin());
        if k == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

pub(crate) fn draw(list: &mut DrawList, geo: &TreeGeometry, phases: &TimePhases) {
    let c = geo.topper_center();
    let outer = geo.tree_width * 0.10;
    let pulse = TopperPulse::at(phases);
    let (sp, gp) = (pulse.star, pulse.glow);

    let path = star_path(c, outer, INNER_RATIO);
    let body = Paint::radial(
        c,
        outer * 1.25,
        &[
            Color::from_argb(0xFFFFF59D),
            Color::from_argb(0xFFFFD54F),
            Color::from_argb(0xFFFFC107),
            Color::from_argb(0x00FFC107),
        ],
    );

    let transform = rotate_about_deg(pulse.rotation, c) * scale_about(pulse.scale, c);
    list.with_transform(transform, |l| {
        l.circle(
            c,
            outer * (3.0 + 0.8 * gp),
            Color::from_argb(0xFFFFF8E1).with_alpha(0.15 + 0.25 * gp),
        );
        l.circle(
            c,
            outer * (2.0 + 0.6 * sp),
            Color::from_argb(0xFFFFFDE7).with_alpha(0.25 + 0.30 * sp),
        );
        l.circle(
            c,
            outer * (1.2 + 0.4 * sp),
            Color::from_argb(0xFFFFEB3B).with_alpha(0.35 + 0.35 * gp),
        );
        l.circle(
            c,
            outer * (0.8 + 0.2 * sp),
            Color::from_argb(0xFFFFF59D).with_alpha(0.50 + 0.30 * gp),
        );
        l.fill(path.clone(), body);
        l.fill(path, Color::WHITE.with_alpha(0.15 + 0.25 * gp));
    });
}
