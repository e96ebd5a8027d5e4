//! Tinsel garland: sparkle dots with tiny crosses over a faint chorded ribbon.

use crate::draw::list::DrawList;
use crate::draw::measure::PathMeasure;
use crate::draw::paint::StrokeStyle;
use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Point};
use crate::scene::layout::{TreeGeometry, WrapParams};

const SPARKLE: Color = Color::from_argb(0xFFE0F7FA);
const RIBBON: Color = Color::from_argb(0xFFB0BEC5);

const GARLAND: WrapParams = WrapParams {
    anchors: [1, 3, 5, 7],
    wobble: 0.06,
    y: 0.55,
    half_span: 0.48,
    amplitude: 0.30,
    wave_ctrl: 0.18,
    next_y: 0.45,
    next_x: 0.45,
    connector_ctrl: (0.10, 0.20),
    connector_lift: 0.6,
};

/// Size unit for garland elements.
pub fn unit(geo: &TreeGeometry) -> f64 {
    geo.layer_height * 0.14
}

pub fn garland_path(geo: &TreeGeometry) -> BezPath {
    geo.wrap_path(&GARLAND)
}

/// Arc-length positions of the sparkle dots, every `0.8` units from the start.
pub fn dot_positions(geo: &TreeGeometry, measure: &PathMeasure) -> Vec<Point> {
    let step = unit(geo) * 0.80;
    let len = measure.length();
    if step <= 0.0 {
        return Vec::new();
    }
    (0u32..)
        .map(|k| step * f64::from(k))
        .take_while(|&d| d <= len)
        .filter_map(|d| measure.position_at(d))
        .collect()
}

/// Chords `(p0, p1)` of the ribbon underlay, each `0.55` units of arc long.
pub fn ribbon_chords(geo: &TreeGeometry, measure: &PathMeasure) -> Vec<(Point, Point)> {
    let segment = unit(geo) * 0.55;
    let len = measure.length();
    if segment <= 0.0 {
        return Vec::new();
    }
    (0u32..)
        .map(|k| segment * f64::from(k))
        .take_while(|&d| d < len - segment)
        .filter_map(|d| Some((measure.position_at(d)?, measure.position_at(d + segment)?)))
        .collect()
}

/// Returns the number of sparkle dots drawn.
pub(crate) fn draw(list: &mut DrawList, geo: &TreeGeometry, hairline: f64) -> usize {
    let u = unit(geo);
    let path = garland_path(geo);
    let measure = PathMeasure::new(&path);

    let dots = dot_positions(geo, &measure);
    let cross = u * 0.16;
    let cross_style = StrokeStyle::new(hairline);
    for &pos in &dots {
        list.circle(pos, u * 0.10, SPARKLE.with_alpha(0.75));
        list.line(
            Point::new(pos.x - cross, pos.y),
            Point::new(pos.x + cross, pos.y),
            cross_style,
            SPARKLE.with_alpha(0.65),
        );
        list.line(
            Point::new(pos.x, pos.y - cross),
            Point::new(pos.x, pos.y + cross),
            cross_style,
            SPARKLE.with_alpha(0.65),
        );
    }

    let ribbon_style = StrokeStyle::new(u * 0.10);
    for (p0, p1) in ribbon_chords(geo, &measure) {
        list.line(p0, p1, ribbon_style, RIBBON.with_alpha(0.35));
    }
    dots.len()
}

#[cfg(test)]
#[path = "../../tests/unit/scene/garland.rs"]
mod tests;
