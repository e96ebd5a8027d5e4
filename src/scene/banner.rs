//! Greeting text with a Santa hat perched on one of its letters.

use crate::draw::list::{DrawList, Shape};
use crate::draw::text::{TextMetrics, TextRun, TextShadow};
use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Point, Vec2, ViewportSize};

const HAT_RED: Color = Color::rgb8(220, 38, 38);
const HAT_HIGHLIGHT: Color = Color::rgba8(240, 80, 80, 120);
const HAT_SHADOW: Color = Color::rgba8(0, 0, 0, 100);
const FUR_SHADOW: Color = Color::rgba8(0, 0, 0, 60);

/// Resolved banner placement for one viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct BannerLayout {
    /// Centre of the text line, on its baseline.
    pub anchor: Point,
    pub font_size: f64,
    pub hat: Option<HatPlacement>,
}

/// Where the hat goes: horizontally centred on the anchor glyph, its brim line at `base_y`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HatPlacement {
    pub center_x: f64,
    pub base_y: f64,
    pub width: f64,
    pub height: f64,
}

impl BannerLayout {
    pub fn new(
        size: ViewportSize,
        greeting: &str,
        anchor_char: char,
        metrics: &dyn TextMetrics,
    ) -> Self {
        let font_size = size.width * 0.08;
        let anchor = Point::new(size.width / 2.0, size.height * 0.10);
        let hat = greeting.find(anchor_char).map(|byte_idx| {
            let before = metrics.advance(&greeting[..byte_idx], font_size);
            let glyph = metrics.advance(anchor_char.encode_utf8(&mut [0; 4]), font_size);
            let total = metrics.advance(greeting, font_size);
            let height = font_size;
            let text_top = anchor.y - font_size * 0.75;
            HatPlacement {
                center_x: anchor.x - total / 2.0 + before + glyph / 2.0,
                base_y: text_top - height * 0.05,
                width: height * 0.95,
                height,
            }
        });
        Self {
            anchor,
            font_size,
            hat,
        }
    }
}

impl HatPlacement {
    /// Floppy cone leaning right: up the left flank, over the tip, down the right flank.
    pub fn body(&self) -> BezPath {
        let (x, y, w, h) = (self.center_x, self.base_y, self.width, self.height);
        let mut path = BezPath::new();
        path.move_to((x - w * 0.45, y));
        path.quad_to((x - w * 0.35, y - h * 0.5), (x - w * 0.15, y - h * 0.75));
        path.quad_to((x + w * 0.05, y - h * 0.95), (x + w * 0.35, y - h * 0.65));
        path.quad_to((x + w * 0.45, y - h * 0.5), (x + w * 0.45, y));
        path.close_path();
        path
    }

    pub fn highlight(&self) -> BezPath {
        let (x, y, w, h) = (self.center_x, self.base_y, self.width, self.height);
        let mut path = BezPath::new();
        path.move_to((x - w * 0.40, y - h * 0.05));
        path.quad_to((x - w * 0.30, y - h * 0.45), (x - w * 0.15, y - h * 0.70));
        path.line_to((x - w * 0.20, y - h * 0.65));
        path.quad_to((x - w * 0.32, y - h * 0.40), (x - w * 0.42, y - h * 0.02));
        path.close_path();
        path
    }

    pub fn brim(&self) -> Shape {
        Shape::ellipse(
            Point::new(self.center_x, self.base_y),
            self.width * 1.1,
            self.height * 0.28,
        )
    }

    pub fn pom_center(&self) -> Point {
        Point::new(
            self.center_x + self.width * 0.32,
            self.base_y - self.height * 0.68,
        )
    }

    pub fn pom_radius(&self) -> f64 {
        self.height * 0.22
    }
}

pub(crate) fn draw(
    list: &mut DrawList,
    size: ViewportSize,
    greeting: &str,
    anchor_char: char,
    metrics: &dyn TextMetrics,
) {
    let layout = BannerLayout::new(size, greeting, anchor_char, metrics);
    if let Some(hat) = &layout.hat {
        draw_hat(list, size, hat);
    }
    list.text(TextRun {
        text: greeting.to_owned(),
        anchor: layout.anchor,
        size: layout.font_size,
        color: Color::WHITE,
        shadow: Some(TextShadow {
            offset: Vec2::new(0.0, size.ref_px(4.0)),
            blur: size.ref_px(8.0),
            color: Color::rgba8(0, 0, 0, 120),
        }),
    });
}

fn draw_hat(list: &mut DrawList, size: ViewportSize, hat: &HatPlacement) {
    let body = hat.body();
    let fur_drop = Affine::translate((0.0, size.ref_px(2.0)));

    list.with_transform(
        Affine::translate((size.ref_px(2.0), size.ref_px(3.0))),
        |l| l.fill(body.clone(), HAT_SHADOW),
    );
    list.fill(body, HAT_RED);
    list.fill(hat.highlight(), HAT_HIGHLIGHT);

    list.with_transform(fur_drop, |l| l.fill(hat.brim(), FUR_SHADOW));
    list.fill(hat.brim(), Color::WHITE);
    list.with_transform(fur_drop, |l| {
        l.circle(hat.pom_center(), hat.pom_radius(), FUR_SHADOW)
    });
    list.circle(hat.pom_center(), hat.pom_radius(), Color::WHITE);
}

#[cfg(test)]
#[path = "../../tests/unit/scene/banner.rs"]
mod tests;
