use crate::draw::list::DrawList;
use crate::draw::paint::Paint;
use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, ViewportSize};
use crate::foundation::math::cubic_bezier;
use crate::scene::FrameContext;

const HILL_EDGE: f64 = 0.85;
const HILL_CREST: f64 = 0.80;

/// Closed snow hill: a cubic from the left edge to the right edge, down to the bottom.
pub fn hill_path(size: ViewportSize) -> BezPath {
    let (w, h) = (size.width, size.height);
    let mut path = BezPath::new();
    path.move_to((0.0, h));
    path.line_to((0.0, h * HILL_EDGE));
    path.curve_to(
        (w * 0.3, h * HILL_CREST),
        (w * 0.7, h * HILL_CREST),
        (w, h * HILL_EDGE),
    );
    path.line_to((w, h));
    path.close_path();
    path
}

/// Height of the hill surface at `x`, found by evaluating the hill cubic at `t = x / W`.
///
/// `t` is clamped, so points off-canvas read the edge height. The result always lies in
/// `[0.80H, 0.85H]`.
pub fn ground_y_at(size: ViewportSize, x: f64) -> f64 {
    let t = (x / size.width).clamp(0.0, 1.0);
    let h = size.height;
    cubic_bezier(h * HILL_EDGE, h * HILL_CREST, h * HILL_CREST, h * HILL_EDGE, t)
}

pub(crate) fn layer(ctx: &FrameContext<'_>) -> DrawList {
    let size = ctx.size;
    let mut list = DrawList::new();
    list.fill(
        hill_path(size),
        Paint::vertical(
            size.height * HILL_CREST,
            size.height,
            &[Color::WHITE, Color::from_argb(0xFFE0F7FA)],
        ),
    );
    list
}
