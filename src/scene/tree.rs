//! The conifer: topper, contact shadow, trunk, scalloped foliage and candy canes.

use crate::draw::list::DrawList;
use crate::draw::paint::{Paint, StrokeStyle};
use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Point, rotate_about_deg};
use crate::scene::FrameContext;
use crate::scene::layout::TreeGeometry;
use crate::scene::shadow::drop_shadow;
use crate::scene::topper;

const DEEP_GREEN: Color = Color::from_argb(0xFF2E7D32);
const MID_GREEN: Color = Color::from_argb(0xFF2F7E33);
const GRAIN: Color = Color::from_argb(0xFF3E2723);
const STRIPE_RED: Color = Color::from_argb(0xFFD32F2F);

/// A hooked cane placed on the foliage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandyCane {
    pub center: Point,
    pub height: f64,
    pub thickness: f64,
    /// Tilt in degrees about `center`.
    pub rotation: f64,
}

pub(crate) fn layer(ctx: &FrameContext<'_>) -> DrawList {
    let geo = ctx.tree();
    let sway = geo.sway_transform(&ctx.phases);
    let mut list = DrawList::new();

    list.with_transform(sway, |l| topper::draw(l, &geo, &ctx.phases));

    drop_shadow(
        &mut list,
        Point::new(geo.center_x, geo.ground_center + ctx.size.ref_px(5.0)),
        geo.tree_width * 0.8,
        geo.tree_width * 0.25,
        ctx.size.ref_px(36.0),
        0.18,
    );

    list.with_transform(sway, |l| {
        draw_trunk(l, &geo);
        draw_foliage(l, &geo);
        for cane in candy_canes(&geo) {
            draw_candy_cane(l, &cane);
        }
    });
    list
}

fn draw_trunk(list: &mut DrawList, geo: &TreeGeometry) {
    let cx = geo.center_x;
    let top = geo.trunk_top();
    let bottom = geo.trunk_bottom();
    let w_top = geo.trunk_width_top();
    let w_bottom = geo.trunk_width_bottom();

    let mut trunk = BezPath::new();
    trunk.move_to((cx - w_top / 2.0, top));
    trunk.line_to((cx + w_top / 2.0, top));
    trunk.line_to((cx + w_bottom / 2.0, bottom));
    trunk.line_to((cx - w_bottom / 2.0, bottom));
    trunk.close_path();
    list.fill(
        trunk,
        Paint::vertical(
            top,
            bottom,
            &[
                Color::from_argb(0xFF6D4C41),
                Color::from_argb(0xFF5D4037),
                Color::from_argb(0xFF4E342E),
            ],
        ),
    );

    let grain_style = StrokeStyle::round(w_top * 0.03);
    for i in 0..4 {
        let t = f64::from(i + 1) / 5.0;
        let y = top + (bottom - top) * t;
        let w = w_top + (w_bottom - w_top) * t;
        let mut grain = BezPath::new();
        grain.move_to((cx - w * 0.35, y));
        grain.curve_to(
            (cx - w * 0.15, y - geo.layer_height * 0.15),
            (cx + w * 0.15, y + geo.layer_height * 0.15),
            (cx + w * 0.35, y),
        );
        list.stroke(grain, grain_style, GRAIN.with_alpha(0.3));
    }

    list.circle(
        Point::new(cx - w_top * 0.2, top + (bottom - top) * 0.4),
        w_top * 0.08,
        GRAIN.with_alpha(0.4),
    );

    let blend_r = w_bottom * 0.6;
    let blend_c = Point::new(cx, bottom - blend_r * 0.2);
    list.circle(
        blend_c,
        blend_r,
        Paint::radial(
            blend_c,
            blend_r,
            &[
                Color::WHITE.with_alpha(0.55),
                Color::from_argb(0xFFE0F7FA).with_alpha(0.35),
                Color::from_argb(0xFF5D4037).with_alpha(0.0),
            ],
        ),
    );
}

/// Closed outline of foliage layer `i`: scallops down the right flank, a drooping bottom edge,
/// scallops back up the left flank.
pub fn foliage_outline(geo: &TreeGeometry, i: usize) -> BezPath {
    let cx = geo.center_x;
    let lh = geo.layer_height;
    let top = geo.layer_top(i);
    let bottom = geo.layer_bottom(i);
    let w = geo.layer_width(i);
    let (left, right) = (cx - w / 2.0, cx + w / 2.0);
    let per_side = (geo.scallops(i) / 2).max(1);
    let n = per_side as f64;

    let mut path = BezPath::new();
    path.move_to((cx, top));
    for j in 0..per_side {
        let t1 = j as f64 / n;
        let t2 = (j + 1) as f64 / n;
        let y_mid = (top + lh * t1 + top + lh * t2) / 2.0;
        let x2 = cx + (w / 2.0) * t2;
        path.quad_to((x2 + w * 0.08, y_mid), (x2, top + lh * t2));
    }
    path.curve_to(
        (right * 0.8 + cx * 0.2, bottom + lh * 0.1),
        (left * 0.8 + cx * 0.2, bottom + lh * 0.1),
        (left, bottom),
    );
    for j in (0..per_side).rev() {
        let t1 = (j + 1) as f64 / n;
        let t2 = j as f64 / n;
        let y_mid = (top + lh * t1 + top + lh * t2) / 2.0;
        let x1 = cx - (w / 2.0) * t1;
        let x2 = cx - (w / 2.0) * t2;
        path.quad_to((x1 - w * 0.08, y_mid), (x2, top + lh * t2));
    }
    path.close_path();
    path
}

fn draw_foliage(list: &mut DrawList, geo: &TreeGeometry) {
    let cx = geo.center_x;
    let lh = geo.layer_height;
    let fill = Paint::vertical(
        geo.tree_top,
        geo.tree_top + geo.tree_height,
        &[DEEP_GREEN, MID_GREEN],
    );
    let wedge = Color::from_argb(0xFF1B5E20).with_alpha(0.5);
    let streak = Color::from_argb(0xFF4CAF50).with_alpha(0.25);

    for i in 0..geo.num_layers {
        list.fill(foliage_outline(geo, i), fill.clone());

        let top = geo.layer_top(i);
        let bottom = geo.layer_bottom(i);
        let w = geo.layer_width(i);
        let (left, right) = (cx - w / 2.0, cx + w / 2.0);

        let shadow_h = lh * 0.25;
        let mut shadow = BezPath::new();
        shadow.move_to((right, bottom));
        shadow.curve_to(
            (right * 0.8 + cx * 0.2, bottom + lh * 0.1),
            (left * 0.8 + cx * 0.2, bottom + lh * 0.1),
            (left, bottom),
        );
        shadow.line_to((left * 0.9 + cx * 0.1, bottom - shadow_h));
        shadow.curve_to(
            (cx, bottom - shadow_h * 0.5),
            (cx, bottom - shadow_h * 0.5),
            (right * 0.9 + cx * 0.1, bottom - shadow_h),
        );
        shadow.close_path();
        list.fill(shadow, wedge);

        if i % 2 == 0 {
            let y = top + lh * 0.3;
            let hw = w * 0.4;
            let mut highlight = BezPath::new();
            highlight.move_to((cx - hw * 0.5, y));
            highlight.curve_to(
                (cx - hw * 0.2, y - lh * 0.05),
                (cx + hw * 0.2, y - lh * 0.05),
                (cx + hw * 0.5, y),
            );
            list.stroke(highlight, StrokeStyle::round(lh * 0.04), streak);
        }
    }
}

pub fn candy_canes(geo: &TreeGeometry) -> [CandyCane; 2] {
    let lh = geo.layer_height;
    let tw = geo.tree_width;
    [
        CandyCane {
            center: Point::new(geo.center_x - tw * 0.22, geo.tree_top + lh * 5.4),
            height: lh * 1.2,
            thickness: tw * 0.035,
            rotation: -16.0,
        },
        CandyCane {
            center: Point::new(geo.center_x + tw * 0.20, geo.tree_top + lh * 3.6),
            height: lh * 1.2,
            thickness: tw * 0.032,
            rotation: 12.0,
        },
    ]
}

/// Hook curling to the right, then a straight stem down.
pub fn cane_path(cane: &CandyCane) -> BezPath {
    let c = cane.center;
    let hook = cane.thickness * 2.2;
    let top = c.y - cane.height / 2.0;
    let mut path = BezPath::new();
    path.move_to((c.x, top));
    path.quad_to(
        (c.x + hook * 0.9, top + hook * 0.2),
        (c.x + hook * 1.4, top + hook * 0.8),
    );
    path.quad_to(
        (c.x + hook * 1.8, top + hook * 1.6),
        (c.x + hook * 0.9, top + hook * 2.2),
    );
    path.line_to((c.x, c.y + cane.height / 2.0));
    path
}

fn draw_candy_cane(list: &mut DrawList, cane: &CandyCane) {
    let path = cane_path(cane);
    let stripe = cane.thickness * 1.6;
    list.with_transform(rotate_about_deg(cane.rotation, cane.center), |l| {
        l.stroke(path.clone(), StrokeStyle::round(cane.thickness), Color::WHITE);
        l.stroke(
            path,
            StrokeStyle::round(cane.thickness).with_dash(stripe, stripe),
            STRIPE_RED,
        );
    });
}

#[cfg(test)]
#[path = "../../tests/unit/scene/tree.rs"]
mod tests;
