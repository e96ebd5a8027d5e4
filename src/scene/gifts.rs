//! Three wrapped gift boxes seated on the snow hill.
//!
//! Each box is a front rectangle with a top and a right face skewed by its depth, crossed by two
//! ribbon bands and finished with a bow. Per-gift differences live entirely in [`GiftPalette`].

use kurbo::Shape as _;

use crate::draw::list::DrawList;
use crate::draw::paint::Paint;
use crate::foundation::color::Color;
use crate::foundation::core::{BezPath, Point, Rect, Vec2, ViewportSize};
use crate::scene::ground::ground_y_at;
use crate::scene::layout::TreeGeometry;
use crate::scene::shadow::drop_shadow;

/// Box depth as a fraction of its width.
pub const DEPTH: f64 = 0.35;
/// Ribbon band width as a fraction of the box width.
pub const RIBBON: f64 = 0.18;
/// Skew of the box faces, as multiples of depth along x and up along y.
const FACE_SKEW: (f64, f64) = (0.7, 0.5);

/// Solid color or an evenly spaced linear ramp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tint {
    Solid(Color),
    Ramp(&'static [Color]),
}

impl Tint {
    fn linear(self, from: Point, to: Point) -> Paint {
        match self {
            Tint::Solid(c) => Paint::solid(c),
            Tint::Ramp(colors) => Paint::linear(from, to, colors),
        }
    }

    fn radial(self, center: Point, radius: f64) -> Paint {
        match self {
            Tint::Solid(c) => Paint::solid(c),
            Tint::Ramp(colors) => Paint::radial(center, radius, colors),
        }
    }

    /// Diagonal ramp over the bounding box of `path`.
    fn over(self, path: &BezPath) -> Paint {
        let b = path.bounding_box();
        self.linear(Point::new(b.x0, b.y0), Point::new(b.x1, b.y1))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RibbonPalette {
    /// Vertical band on the front, ramped left to right.
    pub front: Tint,
    /// Horizontal band on the front, ramped top to bottom.
    pub cross: Tint,
    pub top: Tint,
    pub side: Tint,
    pub tail: Color,
    /// Bow loops; a ramp is drawn as a radial highlight.
    pub bow: Tint,
    pub knot: Color,
    /// Skew of the ribbon pieces on the top and side faces.
    pub skew: (f64, f64),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GiftPalette {
    pub front: [Color; 3],
    pub top: [Color; 3],
    pub side: [Color; 3],
    pub ribbon: RibbonPalette,
}

const GOLD_BAND: &[Color] = &[
    Color::from_argb(0xFFFFB300),
    Color::from_argb(0xFFFFC107),
    Color::from_argb(0xFFFFD54F),
    Color::from_argb(0xFFFFC107),
    Color::from_argb(0xFFFFB300),
];

pub const RED_GOLD: GiftPalette = GiftPalette {
    front: [
        Color::from_argb(0xFFE53935),
        Color::from_argb(0xFFD32F2F),
        Color::from_argb(0xFFC62828),
    ],
    top: [
        Color::from_argb(0xFFEF5350),
        Color::from_argb(0xFFE57373),
        Color::from_argb(0xFFEF5350),
    ],
    side: [
        Color::from_argb(0xFF9A0007),
        Color::from_argb(0xFF7F0000),
        Color::from_argb(0xFF6A0000),
    ],
    ribbon: RibbonPalette {
        front: Tint::Ramp(GOLD_BAND),
        cross: Tint::Ramp(GOLD_BAND),
        top: Tint::Ramp(&[Color::from_argb(0xFFFFD54F), Color::from_argb(0xFFFFC107)]),
        side: Tint::Ramp(&[Color::from_argb(0xFFFFB300), Color::from_argb(0xFFFF8F00)]),
        tail: Color::from_argb(0xFFFFD54F),
        bow: Tint::Ramp(&[
            Color::from_argb(0xFFFFD54F),
            Color::from_argb(0xFFFFC107),
            Color::from_argb(0xFFFFB300),
        ]),
        knot: Color::from_argb(0xFFFFA000),
        skew: FACE_SKEW,
    },
};

pub const GREEN_SILVER: GiftPalette = GiftPalette {
    front: [
        Color::from_argb(0xFF43A047),
        Color::from_argb(0xFF388E3C),
        Color::from_argb(0xFF2E7D32),
    ],
    top: [
        Color::from_argb(0xFF4CAF50),
        Color::from_argb(0xFF66BB6A),
        Color::from_argb(0xFF4CAF50),
    ],
    side: [
        Color::from_argb(0xFF003300),
        Color::from_argb(0xFF1B5E20),
        Color::from_argb(0xFF003300),
    ],
    ribbon: RibbonPalette {
        front: Tint::Ramp(&[
            Color::from_argb(0xFFBDBDBD),
            Color::from_argb(0xFFE0E0E0),
            Color::from_argb(0xFFF5F5F5),
            Color::from_argb(0xFFE0E0E0),
            Color::from_argb(0xFFBDBDBD),
        ]),
        cross: Tint::Solid(Color::from_argb(0xFFE0E0E0)),
        top: Tint::Solid(Color::from_argb(0xFFF5F5F5)),
        side: Tint::Solid(Color::from_argb(0xFFBDBDBD)),
        tail: Color::from_argb(0xFFF5F5F5),
        bow: Tint::Solid(Color::from_argb(0xFFE0E0E0)),
        knot: Color::from_argb(0xFFBDBDBD),
        skew: (0.6, 0.4),
    },
};

pub const BLUE_WHITE: GiftPalette = GiftPalette {
    front: [
        Color::from_argb(0xFF1E88E5),
        Color::from_argb(0xFF1976D2),
        Color::from_argb(0xFF1565C0),
    ],
    top: [
        Color::from_argb(0xFF2196F3),
        Color::from_argb(0xFF42A5F5),
        Color::from_argb(0xFF2196F3),
    ],
    side: [
        Color::from_argb(0xFF01579B),
        Color::from_argb(0xFF0D47A1),
        Color::from_argb(0xFF01579B),
    ],
    ribbon: RibbonPalette {
        front: Tint::Ramp(&[
            Color::from_argb(0xFFBDBDBD),
            Color::from_argb(0xFFE0E0E0),
            Color::WHITE,
            Color::from_argb(0xFFE0E0E0),
            Color::from_argb(0xFFBDBDBD),
        ]),
        cross: Tint::Solid(Color::WHITE),
        top: Tint::Solid(Color::from_argb(0xFFF5F5F5)),
        side: Tint::Solid(Color::from_argb(0xFFBDBDBD)),
        tail: Color::from_argb(0xFFF5F5F5),
        bow: Tint::Solid(Color::WHITE),
        knot: Color::from_argb(0xFFE0E0E0),
        skew: (0.6, 0.4),
    },
};

/// Placement of one gift relative to the tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GiftBoxSpec {
    /// Left edge, in tree widths from the canvas centre.
    pub x: f64,
    /// Width in tree widths.
    pub width: f64,
    /// Height as a multiple of the width.
    pub height: f64,
    pub palette: &'static GiftPalette,
}

pub const GIFTS: [GiftBoxSpec; 3] = [
    GiftBoxSpec {
        x: -0.32,
        width: 0.22,
        height: 1.05,
        palette: &RED_GOLD,
    },
    GiftBoxSpec {
        x: -0.13,
        width: 0.25,
        height: 1.18,
        palette: &GREEN_SILVER,
    },
    GiftBoxSpec {
        x: 0.17,
        width: 0.28,
        height: 0.80,
        palette: &BLUE_WHITE,
    },
];

/// A gift resolved to canvas coordinates; the front face spans `left..left+width`, `top..bottom`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GiftBox {
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub bottom: f64,
    pub palette: &'static GiftPalette,
}

impl GiftBoxSpec {
    pub fn resolve(&self, size: ViewportSize, geo: &TreeGeometry) -> GiftBox {
        let left = geo.center_x + geo.tree_width * self.x;
        let width = geo.tree_width * self.width;
        GiftBox {
            left,
            width,
            height: width * self.height,
            bottom: ground_y_at(size, left + width / 2.0),
            palette: self.palette,
        }
    }
}

impl GiftBox {
    pub fn top(&self) -> f64 {
        self.bottom - self.height
    }

    pub fn center_x(&self) -> f64 {
        self.left + self.width / 2.0
    }

    pub fn depth(&self) -> f64 {
        self.width * DEPTH
    }

    pub fn ribbon_width(&self) -> f64 {
        self.width * RIBBON
    }

    fn depth_vec(&self, skew: (f64, f64)) -> Vec2 {
        Vec2::new(skew.0 * self.depth(), -skew.1 * self.depth())
    }

    pub fn front(&self) -> Rect {
        Rect::new(self.left, self.top(), self.left + self.width, self.bottom)
    }

    pub fn top_face(&self) -> BezPath {
        let top = self.top();
        let d = self.depth_vec(FACE_SKEW);
        let a = Point::new(self.left, top);
        let b = Point::new(self.left + self.width, top);
        quad(a, a + d, b + d, b)
    }

    pub fn side_face(&self) -> BezPath {
        let d = self.depth_vec(FACE_SKEW);
        let right = self.left + self.width;
        let a = Point::new(right, self.top());
        let b = Point::new(right, self.bottom);
        quad(a, a + d, b + d, b)
    }

    /// Depth fractions `(u0, u1)` of a band of ribbon width centred on the middle of the depth.
    fn mid_depth(&self, d: Vec2) -> (f64, f64) {
        let len = d.hypot();
        if len <= 0.0 {
            return (0.0, 1.0);
        }
        let half = self.ribbon_width() / (2.0 * len);
        ((0.5 - half).clamp(0.0, 1.0), (0.5 + half).clamp(0.0, 1.0))
    }
}

fn quad(a: Point, b: Point, c: Point, d: Point) -> BezPath {
    let mut path = BezPath::new();
    path.move_to(a);
    path.line_to(b);
    path.line_to(c);
    path.line_to(d);
    path.close_path();
    path
}

pub(crate) fn draw(list: &mut DrawList, size: ViewportSize, geo: &TreeGeometry) {
    for spec in &GIFTS {
        draw_gift(list, size, &spec.resolve(size, geo));
    }
}

pub(crate) fn draw_gift(list: &mut DrawList, size: ViewportSize, gift: &GiftBox) {
    let pal = gift.palette;
    let rib = &pal.ribbon;
    let (left, w, top, bottom) = (gift.left, gift.width, gift.top(), gift.bottom);
    let right = left + w;
    let rw = gift.ribbon_width();

    drop_shadow(
        list,
        Point::new(gift.center_x(), bottom + size.ref_px(3.0)),
        w * 1.1,
        w * 0.3,
        size.ref_px(28.0),
        0.15,
    );

    // box faces
    list.fill(gift.front(), Paint::vertical(top, bottom, &pal.front));
    let top_face = gift.top_face();
    let tb = top_face.bounding_box();
    list.fill(top_face, Paint::horizontal(tb.x0, tb.x1, &pal.top));
    let side_face = gift.side_face();
    let side_box = side_face.bounding_box();
    list.fill(side_face, Paint::vertical(side_box.y0, side_box.y1, &pal.side));

    // vertical band: front, over the top face, down the side at mid depth
    let d = gift.depth_vec(rib.skew);
    let rx = gift.center_x() - rw / 2.0;
    list.fill(
        Rect::new(rx, top, rx + rw, bottom),
        rib.front.linear(Point::new(rx, top), Point::new(rx + rw, top)),
    );
    let a = Point::new(rx, top);
    let b = Point::new(rx + rw, top);
    let band_top = quad(a, a + d, b + d, b);
    list.fill(band_top.clone(), rib.top.over(&band_top));

    let (u0, u1) = gift.mid_depth(d);
    let hi = Point::new(right, top);
    let lo = Point::new(right, bottom);
    let band_side = quad(hi + d * u0, hi + d * u1, lo + d * u1, lo + d * u0);
    list.fill(band_side.clone(), rib.side.over(&band_side));

    // horizontal band: front, across the top face at mid depth, around the side
    let ry = top + gift.height / 2.0 - rw / 2.0;
    list.fill(
        Rect::new(left, ry, right, ry + rw),
        rib.cross.linear(Point::new(left, ry), Point::new(left, ry + rw)),
    );
    let tl = Point::new(left, top);
    let tr = Point::new(right, top);
    let cross_top = quad(tl + d * u0, tr + d * u0, tr + d * u1, tl + d * u1);
    list.fill(cross_top.clone(), rib.top.over(&cross_top));

    let a = Point::new(right, ry);
    let b = Point::new(right, ry + rw);
    let cross_side = quad(a, a + d, b + d, b);
    list.fill(cross_side.clone(), rib.side.over(&cross_side));

    draw_bow(
        list,
        Point::new(gift.center_x(), top - gift.height * 0.05),
        w * 0.45,
        rib,
    );
}

/// Tails, mirrored loops and the knot, with `c` at the bow's centre line.
fn draw_bow(list: &mut DrawList, c: Point, s: f64, rib: &RibbonPalette) {
    for side in [-1.0, 1.0] {
        let mut tail = BezPath::new();
        tail.move_to((c.x + side * s * 0.08, c.y + s * 0.15));
        tail.line_to((c.x + side * s * 0.15, c.y + s * 0.35));
        tail.line_to((c.x + side * s * 0.05, c.y + s * 0.32));
        tail.line_to((c.x, c.y + s * 0.15));
        tail.close_path();
        list.fill(tail, rib.tail);
    }
    for side in [-1.0, 1.0] {
        let mut lobe = BezPath::new();
        lobe.move_to((c.x + side * s * 0.15, c.y));
        lobe.quad_to(
            (c.x + side * s * 0.5, c.y - s * 0.3),
            (c.x + side * s * 0.42, c.y + s * 0.05),
        );
        lobe.quad_to(
            (c.x + side * s * 0.35, c.y + s * 0.15),
            (c.x + side * s * 0.15, c.y + s * 0.08),
        );
        lobe.close_path();
        let shine = Point::new(c.x + side * s * 0.35, c.y - s * 0.1);
        list.fill(lobe, rib.bow.radial(shine, s * 0.14));
    }
    list.circle(Point::new(c.x, c.y + s * 0.04), s * 0.12, rib.knot);
}

#[cfg(test)]
#[path = "../../tests/unit/scene/gifts.rs"]
mod tests;
