//! Sky gradient, star field, crescent moon and drifting clouds.

use crate::config::theme::ThemePalette;
use crate::draw::list::DrawList;
use crate::draw::paint::Paint;
use crate::foundation::color::Color;
use crate::foundation::core::{Point, ViewportSize};
use crate::foundation::math::{fract, hash_fraction, unit_sine};
use crate::scene::FrameContext;

/// Hand-placed stars as fractions of the viewport.
const FIXED_STARS: [(f64, f64); 16] = [
    (0.10, 0.10),
    (0.18, 0.22),
    (0.22, 0.07),
    (0.32, 0.18),
    (0.38, 0.35),
    (0.42, 0.28),
    (0.48, 0.09),
    (0.54, 0.16),
    (0.60, 0.33),
    (0.68, 0.10),
    (0.72, 0.25),
    (0.78, 0.36),
    (0.82, 0.19),
    (0.86, 0.46),
    (0.92, 0.12),
    (0.95, 0.41),
];

pub const GENERATED_STARS: usize = 30;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StarSpec {
    pub position: Point,
    /// Twinkle offset in `[0, 1)`.
    pub phase: f64,
}

/// The full star field: the fixed stars followed by the generated ones.
pub fn star_specs(size: ViewportSize) -> Vec<StarSpec> {
    let fixed = FIXED_STARS
        .iter()
        .map(|&(fx, fy)| Point::new(size.width * fx, size.height * fy));
    let generated = (0..GENERATED_STARS as u64).map(|i| generated_star(size, i));
    fixed
        .chain(generated)
        .enumerate()
        .map(|(idx, position)| StarSpec {
            position,
            phase: hash_fraction(idx as u64, 23, 7),
        })
        .collect()
}

/// Position of generated star `i`.
pub fn generated_star(size: ViewportSize, i: u64) -> Point {
    let x = (0.04 + 0.92 * hash_fraction(i, 37, 0)) * size.width;
    let y = (0.04 + 0.66 * hash_fraction(i, 53, 17)) * size.height;
    Point::new(x, y)
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CloudSpec {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub speed: f64,
    pub offset: f64,
}

pub const CLOUDS: [CloudSpec; 6] = [
    cloud(0.15, 0.12, 1.0, 0.3, 0.0),
    cloud(0.45, 0.08, 0.8, 0.5, 0.3),
    cloud(0.70, 0.15, 1.2, 0.25, 0.6),
    cloud(0.25, 0.25, 0.9, 0.4, 0.8),
    cloud(0.85, 0.22, 0.7, 0.35, 0.4),
    cloud(0.55, 0.30, 1.1, 0.45, 0.2),
];

const fn cloud(x: f64, y: f64, scale: f64, speed: f64, offset: f64) -> CloudSpec {
    CloudSpec {
        x,
        y,
        scale,
        speed,
        offset,
    }
}

impl CloudSpec {
    /// Horizontal drift, a sawtooth over the sky cycle spanning 15% of the width.
    pub fn drift(&self, size: ViewportSize, sky_phase: f64) -> f64 {
        fract(sky_phase * self.speed + self.offset) * size.width * 0.15
    }

    /// Cloud centre after drift.
    pub fn center(&self, size: ViewportSize, sky_phase: f64) -> Point {
        Point::new(
            size.width * self.x + self.drift(size, sky_phase),
            size.height * self.y,
        )
    }

    /// Unscaled cloud radius unit.
    pub fn unit_radius(size: ViewportSize) -> f64 {
        size.width * 0.06
    }
}

/// Body circles as (dx, dy, radius) in units of the cloud's base radius.
const CLOUD_BODY: [(f64, f64, f64); 5] = [
    (-0.6, 0.0, 0.85),
    (-0.2, -0.3, 0.95),
    (0.3, -0.2, 1.0),
    (0.7, 0.1, 0.75),
    (0.0, 0.2, 0.8),
];

const CLOUD_PUFFS: [(f64, f64, f64); 2] = [(-0.4, -0.15, 0.5), (0.5, 0.0, 0.55)];

/// Craters as (dx, dy, radius) in units of the moon radius.
const CRATERS: [(f64, f64, f64); 5] = [
    (-0.25, -0.10, 0.11),
    (-0.12, 0.15, 0.08),
    (-0.35, 0.05, 0.06),
    (-0.18, -0.28, 0.05),
    (-0.05, -0.02, 0.04),
];

pub(crate) fn layer(ctx: &FrameContext<'_>) -> DrawList {
    let palette = ctx.palette();
    let mut list = DrawList::new();
    draw_gradient(&mut list, ctx.size, palette, ctx.phases.sky);
    draw_stars(&mut list, ctx.size, palette, ctx.phases.star_twinkle);
    draw_moon(&mut list, ctx.size, palette);
    draw_clouds(&mut list, ctx.size, palette, ctx.phases.sky);
    list
}

/// Sky stops blended between the base and shifted palettes.
pub fn sky_colors(palette: &ThemePalette, sky_phase: f64) -> [Color; 3] {
    let k = unit_sine(sky_phase);
    std::array::from_fn(|i| palette.sky_base[i].lerp(palette.sky_shifted[i], k))
}

fn draw_gradient(list: &mut DrawList, size: ViewportSize, palette: &ThemePalette, sky: f64) {
    list.fill(
        size.bounds(),
        Paint::vertical(0.0, size.height, &sky_colors(palette, sky)),
    );
}

fn draw_stars(list: &mut DrawList, size: ViewportSize, palette: &ThemePalette, twinkle: f64) {
    let base = size.ref_px(palette.star_radius_ref_px);
    for star in star_specs(size) {
        let b = unit_sine(twinkle + star.phase);
        let brightness = 0.5 + 0.5 * b;
        list.circle(
            star.position,
            base * (3.0 + 0.8 * b),
            palette.star.with_alpha(palette.star_glow_alpha * brightness),
        );
        list.circle(
            star.position,
            base * (0.9 + 0.2 * b),
            palette.star.with_alpha(brightness),
        );
    }
}

fn draw_moon(list: &mut DrawList, size: ViewportSize, palette: &ThemePalette) {
    let c = Point::new(size.width * 0.80, size.height * 0.18);
    let r = size.min_side() * 0.08;

    list.circle(c, r * 2.2, palette.moon.with_alpha(0.18));
    list.circle(c, r * 1.4, palette.moon.with_alpha(0.28));
    list.circle(c, r, palette.moon);
    // Crescent by occlusion.
    list.circle(Point::new(c.x + r * 0.55, c.y), r * 0.98, palette.moon_mask);
    list.circle(c, r * 0.99, Color::WHITE.with_alpha(0.20));

    let dark = Color::from_argb(0xFFE0C9A6).with_alpha(0.65);
    let light = Color::from_argb(0xFFFFF8E1).with_alpha(0.45);
    for (dx, dy, k) in CRATERS {
        let center = Point::new(c.x + r * dx, c.y + r * dy);
        let cr = r * k;
        list.circle(center, cr, dark);
        list.circle(
            Point::new(center.x - cr * 0.20, center.y - cr * 0.20),
            cr * 0.55,
            light,
        );
    }
}

fn draw_clouds(list: &mut DrawList, size: ViewportSize, palette: &ThemePalette, sky: f64) {
    let alpha = palette.cloud_alpha;
    for spec in &CLOUDS {
        let c = spec.center(size, sky);
        let base = CloudSpec::unit_radius(size) * spec.scale;
        for (dx, dy, k) in CLOUD_BODY {
            let center = Point::new(c.x + base * dx, c.y + base * dy);
            let r = base * k;
            list.circle(
                Point::new(center.x, center.y + r * 0.1),
                r * 1.05,
                palette.cloud_shadow.with_alpha(alpha * 0.3),
            );
            list.circle(center, r, palette.cloud_body.with_alpha(alpha));
            list.circle(
                Point::new(center.x - r * 0.2, center.y - r * 0.3),
                r * 0.6,
                palette.cloud_highlight.with_alpha(alpha * 0.4),
            );
        }
        for (dx, dy, k) in CLOUD_PUFFS {
            list.circle(
                Point::new(c.x + base * dx, c.y + base * dy),
                base * k,
                palette.cloud_body.with_alpha(alpha * 0.8),
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/sky.rs"]
mod tests;
