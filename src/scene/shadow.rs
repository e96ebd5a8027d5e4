use crate::draw::list::{DrawList, Shape};
use crate::foundation::color::Color;
use crate::foundation::core::Point;

/// Soft oval contact shadow built from four stacked ovals.
///
/// Each ring grows by half the blur horizontally and 0.3 of it vertically while its alpha drops
/// by a fifth of `alpha`.
pub fn drop_shadow(
    list: &mut DrawList,
    center: Point,
    width: f64,
    height: f64,
    blur: f64,
    alpha: f64,
) {
    for i in 0..4 {
        let k = f64::from(i);
        let ring_alpha = alpha * (1.0 - k * 0.2);
        let w = width + k * blur * 0.5;
        let h = height + k * blur * 0.3;
        list.fill(
            Shape::ellipse(center, w, h),
            Color::BLACK.with_alpha(ring_alpha),
        );
    }
}
