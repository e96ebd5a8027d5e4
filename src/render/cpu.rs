use std::collections::HashMap;
use std::sync::Arc;

use kurbo::Shape as _;

use crate::draw::list::{DrawCmd, DrawList};
use crate::draw::paint::{LineCap, Paint, StrokeStyle};
use crate::draw::text::TextRun;
use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, Point, Rect, ViewportSize};
use crate::foundation::error::{SceneError, SceneResult};
use crate::foundation::math::Fnv1a64;
use crate::render::{FrameRGBA, RenderBackend, RenderSettings};
use crate::text::shaper::{TextBrush, TextShaper};

/// Curve flattening tolerance in output pixels.
const FLATTEN_TOLERANCE_PX: f64 = 0.1;
/// Longest side of a rasterized gradient image.
const MAX_GRADIENT_PX: f64 = 2048.0;
const GRADIENT_CACHE_CAPACITY: usize = 256;

struct CpuFont {
    shaper: TextShaper,
    data: vello_cpu::peniko::FontData,
}

/// Rasterizes draw lists with `vello_cpu`.
///
/// Gradients are baked into premultiplied images over each shape's local bounds and used as
/// image paints. Text needs a font; without one, text commands are skipped with a warning.
pub struct CpuBackend {
    settings: RenderSettings,
    font: Option<CpuFont>,
    gradient_cache: HashMap<u64, vello_cpu::Image>,
}

impl std::fmt::Debug for CpuBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CpuBackend")
            .field("settings", &self.settings)
            .field("font", &self.font.as_ref().map(|f| f.shaper.family()))
            .finish_non_exhaustive()
    }
}

impl CpuBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            font: None,
            gradient_cache: HashMap::new(),
        }
    }

    /// Draw text runs with the font registered in `shaper`.
    pub fn with_font(mut self, shaper: TextShaper) -> Self {
        let bytes = shaper.font_bytes().as_ref().clone();
        let data = vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        self.font = Some(CpuFont { shaper, data });
        self
    }

    /// Like [`CpuBackend::with_font`], starting from raw TTF/OTF bytes.
    pub fn with_font_bytes(self, font_bytes: Vec<u8>) -> SceneResult<Self> {
        Ok(self.with_font(TextShaper::from_font_bytes(font_bytes)?))
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    pub fn has_font(&self) -> bool {
        self.font.is_some()
    }

    fn fill(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        path: &BezPath,
        paint: &Paint,
        transform: Affine,
    ) -> SceneResult<()> {
        ctx.set_transform(affine_to_cpu(transform));
        match paint {
            Paint::Solid { color } => {
                ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
                ctx.set_paint(color_to_cpu(*color));
            }
            Paint::Linear { .. } | Paint::Radial { .. } => {
                let bounds = path.bounding_box();
                let scale = device_scale(transform);
                let (image, paint_transform) = self.gradient_paint(paint, bounds, scale)?;
                ctx.set_paint_transform(affine_to_cpu(paint_transform));
                ctx.set_paint(image);
            }
        }
        ctx.fill_path(&bezpath_to_cpu(path));
        Ok(())
    }

    /// Bake `paint` into an image covering `bounds`, plus the transform placing it there.
    fn gradient_paint(
        &mut self,
        paint: &Paint,
        bounds: Rect,
        scale: f64,
    ) -> SceneResult<(vello_cpu::Image, Affine)> {
        let (w, h) = gradient_extent(paint, bounds, scale);
        let bw = bounds.width().max(f64::EPSILON);
        let bh = bounds.height().max(f64::EPSILON);
        let (sx, sy) = (bw / f64::from(w), bh / f64::from(h));
        let placement =
            Affine::translate(bounds.origin().to_vec2()) * Affine::scale_non_uniform(sx, sy);

        let key = gradient_key(paint, bounds, w, h);
        if let Some(image) = self.gradient_cache.get(&key) {
            return Ok((image.clone(), placement));
        }

        let mut bytes = Vec::with_capacity(w as usize * h as usize * 4);
        for j in 0..h {
            let y = bounds.y0 + (f64::from(j) + 0.5) * sy;
            for i in 0..w {
                let x = bounds.x0 + (f64::from(i) + 0.5) * sx;
                let c = paint.color_at(Point::new(x, y));
                bytes.extend_from_slice(&premul_rgba8(c.to_rgba8()));
            }
        }
        let pixmap = pixmap_from_premul_bytes(&bytes, w, h)?;
        let image = vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        };

        if self.gradient_cache.len() >= GRADIENT_CACHE_CAPACITY {
            self.gradient_cache.clear();
        }
        self.gradient_cache.insert(key, image.clone());
        Ok((image, placement))
    }
}

impl RenderBackend for CpuBackend {
    #[tracing::instrument(skip(self, list), fields(commands = list.len()))]
    fn render(&mut self, list: &DrawList, size: ViewportSize) -> SceneResult<FrameRGBA> {
        let scale = self.settings.scale;
        let (width, height) = size.raster_dims(scale)?;
        let w: u16 = width
            .try_into()
            .map_err(|_| SceneError::render("frame width exceeds u16"))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| SceneError::render("frame height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(w, h);
        if let Some([r, g, b, a]) = self.settings.clear_rgba {
            ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(r, g, b, a));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(w),
                f64::from(h),
            ));
        }

        let base = Affine::scale(scale);
        let mut skipped_text = 0usize;
        for cmd in list {
            match cmd {
                DrawCmd::Fill {
                    shape,
                    paint,
                    transform,
                } => {
                    let t = base * *transform;
                    let path = shape.to_path(flatten_tolerance(t));
                    self.fill(&mut ctx, &path, paint, t)?;
                }
                DrawCmd::Stroke {
                    path,
                    style,
                    paint,
                    transform,
                } => {
                    let t = base * *transform;
                    let outline = stroke_outline(path, style, flatten_tolerance(t));
                    self.fill(&mut ctx, &outline, paint, t)?;
                }
                DrawCmd::Text { run, transform } => match self.font.as_mut() {
                    Some(font) => draw_text(&mut ctx, font, run, base * *transform)?,
                    None => skipped_text += 1,
                },
            }
        }
        if skipped_text > 0 {
            tracing::warn!(skipped_text, "no font configured, text commands not drawn");
        }

        ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width,
            height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }
}

fn draw_text(
    ctx: &mut vello_cpu::RenderContext,
    font: &mut CpuFont,
    run: &TextRun,
    transform: Affine,
) -> SceneResult<()> {
    let layout = font
        .shaper
        .layout(&run.text, run.size as f32, TextBrush::from(run.color))?;
    let baseline = layout
        .lines()
        .next()
        .map_or(0.0, |line| f64::from(line.metrics().baseline));
    let origin = Affine::translate((
        run.anchor.x - f64::from(layout.width()) * 0.5,
        run.anchor.y - baseline,
    ));

    if let Some(shadow) = &run.shadow {
        let t = transform * Affine::translate(shadow.offset) * origin;
        draw_glyphs(ctx, &font.data, &layout, t, shadow.color);
    }
    draw_glyphs(ctx, &font.data, &layout, transform * origin, run.color);
    Ok(())
}

fn draw_glyphs(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    layout: &parley::Layout<TextBrush>,
    transform: Affine,
    color: Color,
) {
    ctx.set_transform(affine_to_cpu(transform));
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_paint(color_to_cpu(color));
    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(glyph_run) = item else {
                continue;
            };
            let glyphs = glyph_run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(glyph_run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

fn stroke_outline(path: &BezPath, style: &StrokeStyle, tolerance: f64) -> BezPath {
    let (cap, join) = match style.cap {
        LineCap::Butt => (kurbo::Cap::Butt, kurbo::Join::Miter),
        LineCap::Round => (kurbo::Cap::Round, kurbo::Join::Round),
    };
    let mut stroke = kurbo::Stroke::new(style.width)
        .with_caps(cap)
        .with_join(join);
    if let Some([on, off]) = style.dash {
        stroke = stroke.with_dashes(0.0, [on, off]);
    }
    kurbo::stroke(
        path.iter(),
        &stroke,
        &kurbo::StrokeOpts::default(),
        tolerance,
    )
}

/// Output pixels per local unit under `t`.
fn device_scale(t: Affine) -> f64 {
    t.determinant().abs().sqrt()
}

fn flatten_tolerance(t: Affine) -> f64 {
    let s = device_scale(t);
    if s > f64::EPSILON {
        FLATTEN_TOLERANCE_PX / s
    } else {
        FLATTEN_TOLERANCE_PX
    }
}

/// Image size for a gradient over `bounds`. Axis-aligned linear gradients collapse to one
/// pixel across the axis.
fn gradient_extent(paint: &Paint, bounds: Rect, scale: f64) -> (u32, u32) {
    let px = |len: f64| (len * scale).ceil().clamp(1.0, MAX_GRADIENT_PX) as u32;
    let (mut w, mut h) = (px(bounds.width()), px(bounds.height()));
    if let Paint::Linear { start, end, .. } = paint {
        if start.x == end.x {
            w = 1;
        } else if start.y == end.y {
            h = 1;
        }
    }
    (w, h)
}

fn gradient_key(paint: &Paint, bounds: Rect, w: u32, h: u32) -> u64 {
    let mut hasher = Fnv1a64::new_default();
    if let Ok(bytes) = serde_json::to_vec(paint) {
        hasher.write_bytes(&bytes);
    }
    for v in [bounds.x0, bounds.y0, bounds.x1, bounds.y1] {
        hasher.write_bytes(&v.to_bits().to_le_bytes());
    }
    hasher.write_bytes(&w.to_le_bytes());
    hasher.write_bytes(&h.to_le_bytes());
    hasher.finish()
}

fn premul_rgba8(rgba: [u8; 4]) -> [u8; 4] {
    let [r, g, b, a] = rgba;
    let a16 = u16::from(a);
    let premul = |c: u8| -> u8 { ((u16::from(c) * a16 + 127) / 255) as u8 };
    [premul(r), premul(g), premul(b), a]
}

fn pixmap_from_premul_bytes(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> SceneResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| SceneError::render("gradient width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| SceneError::render("gradient height exceeds u16"))?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(SceneError::render("gradient byte length mismatch"));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        may_have_opacities |= px[3] != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        });
    }
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

fn color_to_cpu(c: Color) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let pt = |p: Point| vello_cpu::kurbo::Point::new(p.x, p.y);
    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(pt(p)),
            PathEl::LineTo(p) => out.line_to(pt(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(pt(p1), pt(p2)),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(pt(p1), pt(p2), pt(p3)),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
