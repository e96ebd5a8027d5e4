//! Fairy-light wire and its twinkling bulbs.

use crate::animation::phase::TimePhases;
use crate::draw::list::DrawList;
use crate::draw::measure::PathMeasure;
use crate::draw::paint::StrokeStyle;
use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Point};
use crate::foundation::math::{fract, hash_fraction, unit_sine};
use crate::interaction::light_mode::LightMode;
use crate::scene::layout::{TreeGeometry, WrapParams};

pub const WARM_WHITE: Color = Color::from_argb(0xFFFFF6E5);
pub const RED: Color = Color::from_argb(0xFFFF5252);
pub const GREEN: Color = Color::from_argb(0xFF69F0AE);
pub const CYAN: Color = Color::from_argb(0xFF40C4FF);
pub const AMBER: Color = Color::from_argb(0xFFFFD740);
pub const VIOLET: Color = Color::from_argb(0xFFEA80FC);

/// Bulb colors, assigned by sample index modulo six.
pub const PALETTE: [Color; 6] = [WARM_WHITE, RED, GREEN, CYAN, AMBER, VIOLET];

/// Hue cycle walked in rainbow mode, one segment per sixth of the cycle.
pub const RAINBOW: [Color; 7] = [WARM_WHITE, RED, AMBER, GREEN, CYAN, VIOLET, WARM_WHITE];

const WIRE: WrapParams = WrapParams {
    anchors: [2, 4, 6, 8],
    wobble: 0.05,
    y: 0.52,
    half_span: 0.50,
    amplitude: 0.18,
    wave_ctrl: 0.20,
    next_y: 0.50,
    next_x: 0.48,
    connector_ctrl: (0.08, 0.16),
    connector_lift: 0.5,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct LightBulbSpec {
    pub index: usize,
    pub position: Point,
    pub color: Color,
    pub radius: f64,
    /// Twinkle offset in `[0, 1)`.
    pub phase: f64,
}

pub fn wire_path(geo: &TreeGeometry) -> BezPath {
    geo.wrap_path(&WIRE)
}

/// Bulbs every `0.45 lh` of arc length along the wire, starting half a step in.
pub fn bulb_specs(geo: &TreeGeometry, wire: &PathMeasure) -> Vec<LightBulbSpec> {
    let step = geo.layer_height * 0.45;
    let base_radius = geo.layer_height * 0.10;
    let length = wire.length();
    let mut bulbs = Vec::new();
    if step <= 0.0 {
        return bulbs;
    }
    let mut idx = 0usize;
    loop {
        let dist = step * (0.5 + idx as f64);
        if dist > length {
            break;
        }
        let Some(position) = wire.position_at(dist) else {
            break;
        };
        let i = idx as u64;
        let jitter = hash_fraction(i, 17, 7);
        bulbs.push(LightBulbSpec {
            index: idx,
            position,
            color: PALETTE[idx % PALETTE.len()],
            radius: base_radius * (0.9 + 0.2 * jitter),
            phase: hash_fraction(i, 37, 0),
        });
        idx += 1;
    }
    bulbs
}

/// Color at `shift` in `[0, 1)` along the rainbow cycle.
pub fn rainbow_color(shift: f64) -> Color {
    let segments = (RAINBOW.len() - 1) as f64;
    let s = fract(shift) * segments;
    let seg = (s.floor() as usize).min(RAINBOW.len() - 2);
    RAINBOW[seg].lerp(RAINBOW[seg + 1], s - seg as f64)
}

/// Per-frame twinkle state of one bulb.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulbState {
    pub sparkle: f64,
    pub on: bool,
    pub intensity: f64,
    pub color: Color,
}

impl BulbState {
    /// `None` when the lights are switched off.
    pub fn at(bulb: &LightBulbSpec, mode: LightMode, phases: &TimePhases) -> Option<Self> {
        let color = match mode {
            LightMode::Off => return None,
            LightMode::Original => bulb.color,
            LightMode::Rainbow => rainbow_color(phases.twinkle * 0.3 + bulb.phase),
        };
        let speed = 1.5 + 0.8 * bulb.phase;
        let sparkle = unit_sine(phases.twinkle * speed + bulb.phase);
        let on = sparkle > 0.15 + 0.15 * bulb.phase;
        let intensity = (0.3 + 0.7 * sparkle) * if on { 1.0 } else { 0.1 };
        Some(Self {
            sparkle,
            on,
            intensity,
            color,
        })
    }

    fn on_factor(&self) -> f64 {
        if self.on { 1.0 } else { 0.1 }
    }
}

pub(crate) fn draw(
    list: &mut DrawList,
    geo: &TreeGeometry,
    mode: LightMode,
    phases: &TimePhases,
) -> usize {
    let wire = wire_path(geo);
    let measure = PathMeasure::new(&wire);
    list.stroke(
        wire,
        StrokeStyle::round(geo.layer_height * 0.06),
        Color::from_argb(0xFF37474F).with_alpha(0.85),
    );

    let bulbs = bulb_specs(geo, &measure);
    for bulb in &bulbs {
        let Some(state) = BulbState::at(bulb, mode, phases) else {
            list.circle(bulb.position, bulb.radius, Color::GRAY.with_alpha(0.15));
            continue;
        };
        draw_bulb(list, bulb, &state);
    }
    bulbs.len()
}

fn draw_bulb(list: &mut DrawList, bulb: &LightBulbSpec, state: &BulbState) {
    let p = bulb.position;
    let r = bulb.radius;
    let glow = r * (1.8 + 1.2 * state.sparkle);
    let c = state.color;
    list.circle(p, glow, c.with_alpha(0.35 * state.intensity));
    list.circle(p, glow * 0.65, c.with_alpha(0.50 * state.intensity));
    list.circle(p, glow * 0.40, c.with_alpha(0.75 * state.intensity));
    list.circle(p, r, c.with_alpha(0.95 * state.intensity));
    list.circle(
        Point::new(p.x - r * 0.22, p.y - r * 0.22),
        r * 0.25,
        Color::WHITE.with_alpha(0.9 * state.sparkle * state.on_factor()),
    );
}

#[cfg(test)]
#[path = "../../tests/unit/scene/lights.rs"]
mod tests;
