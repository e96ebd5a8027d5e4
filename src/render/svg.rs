use std::fmt::Write as _;

use crate::draw::list::{DrawCmd, DrawList, Shape};
use crate::draw::paint::{LineCap, Paint, StrokeStyle};
use crate::draw::text::TextRun;
use crate::foundation::color::Color;
use crate::foundation::core::{Affine, BezPath, ViewportSize};
use crate::foundation::error::{SceneError, SceneResult};
use crate::render::RenderSettings;

const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Serializes draw lists as standalone SVG 1.1 documents.
///
/// Shapes map to native elements, gradients to `userSpaceOnUse` definitions in each element's
/// local space, and text shadows to a Gaussian blur filter. `viewBox` is the viewport; the
/// `width`/`height` attributes apply the output scale.
#[derive(Clone, Debug)]
pub struct SvgBackend {
    settings: RenderSettings,
    font_family: String,
}

impl SvgBackend {
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            font_family: DEFAULT_FONT_FAMILY.to_owned(),
        }
    }

    /// CSS font family written on every `<text>` element.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    #[tracing::instrument(skip(self, list), fields(commands = list.len()))]
    pub fn document(&self, list: &DrawList, size: ViewportSize) -> SceneResult<String> {
        let (width, height) = size.raster_dims(self.settings.scale)?;
        let mut writer = SvgWriter::new(&self.font_family);
        for cmd in list {
            writer
                .command(cmd)
                .map_err(|_| SceneError::render("failed to format svg element"))?;
        }

        let mut out = String::new();
        writer
            .finish(&mut out, size, width, height, self.settings.clear_rgba)
            .map_err(|_| SceneError::render("failed to format svg document"))?;
        tracing::debug!(
            bytes = out.len(),
            gradients = writer.gradients,
            "svg document written"
        );
        Ok(out)
    }
}

struct SvgWriter<'a> {
    font_family: &'a str,
    defs: String,
    body: String,
    gradients: usize,
    filters: usize,
}

impl<'a> SvgWriter<'a> {
    fn new(font_family: &'a str) -> Self {
        Self {
            font_family,
            defs: String::new(),
            body: String::new(),
            gradients: 0,
            filters: 0,
        }
    }

    fn command(&mut self, cmd: &DrawCmd) -> std::fmt::Result {
        match cmd {
            DrawCmd::Fill {
                shape,
                paint,
                transform,
            } => {
                let fill = self.paint_attrs("fill", paint)?;
                self.shape(shape, &fill, *transform)
            }
            DrawCmd::Stroke {
                path,
                style,
                paint,
                transform,
            } => {
                let stroke = self.paint_attrs("stroke", paint)?;
                self.stroke(path, style, &stroke, *transform)
            }
            DrawCmd::Text { run, transform } => self.text(run, *transform),
        }
    }

    fn shape(&mut self, shape: &Shape, fill: &str, transform: Affine) -> std::fmt::Result {
        let t = transform_attr(transform);
        match shape {
            Shape::Path { path } => writeln!(
                self.body,
                r#"<path d="{}"{fill}{t}/>"#,
                path_data(path)
            ),
            Shape::Circle { center, radius } => writeln!(
                self.body,
                r#"<circle cx="{}" cy="{}" r="{}"{fill}{t}/>"#,
                num(center.x),
                num(center.y),
                num(radius.max(0.0))
            ),
            Shape::Ellipse { bounds } => {
                let c = bounds.center();
                writeln!(
                    self.body,
                    r#"<ellipse cx="{}" cy="{}" rx="{}" ry="{}"{fill}{t}/>"#,
                    num(c.x),
                    num(c.y),
                    num(bounds.width() * 0.5),
                    num(bounds.height() * 0.5)
                )
            }
            Shape::Rect { rect } => writeln!(
                self.body,
                r#"<rect x="{}" y="{}" width="{}" height="{}"{fill}{t}/>"#,
                num(rect.x0),
                num(rect.y0),
                num(rect.width()),
                num(rect.height())
            ),
        }
    }

    fn stroke(
        &mut self,
        path: &BezPath,
        style: &StrokeStyle,
        stroke: &str,
        transform: Affine,
    ) -> std::fmt::Result {
        let (cap, join) = match style.cap {
            LineCap::Butt => ("butt", "miter"),
            LineCap::Round => ("round", "round"),
        };
        write!(
            self.body,
            r#"<path d="{}" fill="none"{stroke} stroke-width="{}" stroke-linecap="{cap}" stroke-linejoin="{join}""#,
            path_data(path),
            num(style.width)
        )?;
        if let Some([on, off]) = style.dash {
            write!(self.body, r#" stroke-dasharray="{} {}""#, num(on), num(off))?;
        }
        writeln!(self.body, "{}/>", transform_attr(transform))
    }

    fn text(&mut self, run: &TextRun, transform: Affine) -> std::fmt::Result {
        if let Some(shadow) = &run.shadow {
            let filter = if shadow.blur > 0.0 {
                let id = format!("b{}", self.filters);
                self.filters += 1;
                writeln!(
                    self.defs,
                    r#"<filter id="{id}" x="-20%" y="-50%" width="140%" height="200%"><feGaussianBlur stdDeviation="{}"/></filter>"#,
                    num(shadow.blur * 0.5)
                )?;
                format!(r#" filter="url(#{id})""#)
            } else {
                String::new()
            };
            let shifted = transform * Affine::translate(shadow.offset);
            self.text_element(run, shadow.color, shifted, &filter)?;
        }
        self.text_element(run, run.color, transform, "")
    }

    fn text_element(
        &mut self,
        run: &TextRun,
        color: Color,
        transform: Affine,
        extra: &str,
    ) -> std::fmt::Result {
        writeln!(
            self.body,
            r#"<text x="{}" y="{}" font-family="{}" font-size="{}" font-weight="bold" text-anchor="middle"{}{extra}{}>{}</text>"#,
            num(run.anchor.x),
            num(run.anchor.y),
            escape(self.font_family),
            num(run.size),
            solid_attrs("fill", color),
            transform_attr(transform),
            escape(&run.text)
        )
    }

    /// `fill`/`stroke` attributes for `paint`, registering a gradient definition if needed.
    fn paint_attrs(&mut self, attr: &str, paint: &Paint) -> Result<String, std::fmt::Error> {
        let id = format!("g{}", self.gradients);
        match paint {
            Paint::Solid { color } => return Ok(solid_attrs(attr, *color)),
            Paint::Linear { start, end, .. } => write!(
                self.defs,
                r#"<linearGradient id="{id}" gradientUnits="userSpaceOnUse" x1="{}" y1="{}" x2="{}" y2="{}">"#,
                num(start.x),
                num(start.y),
                num(end.x),
                num(end.y)
            )?,
            Paint::Radial { center, radius, .. } => write!(
                self.defs,
                r#"<radialGradient id="{id}" gradientUnits="userSpaceOnUse" cx="{}" cy="{}" r="{}">"#,
                num(center.x),
                num(center.y),
                num(radius.max(0.0))
            )?,
        }
        for stop in paint.stops() {
            write!(
                self.defs,
                r#"<stop offset="{}" stop-color="{}""#,
                num(stop.offset.clamp(0.0, 1.0)),
                stop.color.to_hex_rgb()
            )?;
            if stop.color.a < 1.0 {
                write!(self.defs, r#" stop-opacity="{}""#, num(stop.color.a))?;
            }
            self.defs.push_str("/>");
        }
        let close = if matches!(paint, Paint::Linear { .. }) {
            "</linearGradient>"
        } else {
            "</radialGradient>"
        };
        writeln!(self.defs, "{close}")?;
        self.gradients += 1;
        Ok(format!(r#" {attr}="url(#{id})""#))
    }

    fn finish(
        &self,
        out: &mut String,
        size: ViewportSize,
        width: u32,
        height: u32,
        clear_rgba: Option<[u8; 4]>,
    ) -> std::fmt::Result {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" version="1.1" width="{width}" height="{height}" viewBox="0 0 {} {}">"#,
            num(size.width),
            num(size.height)
        )?;
        if !self.defs.is_empty() {
            writeln!(out, "<defs>")?;
            out.push_str(&self.defs);
            writeln!(out, "</defs>")?;
        }
        if let Some([r, g, b, a]) = clear_rgba {
            writeln!(
                out,
                r#"<rect x="0" y="0" width="{}" height="{}"{}/>"#,
                num(size.width),
                num(size.height),
                solid_attrs("fill", Color::rgba8(r, g, b, a))
            )?;
        }
        out.push_str(&self.body);
        writeln!(out, "</svg>")
    }
}

fn solid_attrs(attr: &str, color: Color) -> String {
    let mut s = format!(r#" {attr}="{}""#, color.to_hex_rgb());
    if color.a < 1.0 {
        let _ = write!(s, r#" {attr}-opacity="{}""#, num(color.a));
    }
    s
}

fn transform_attr(t: Affine) -> String {
    if t == Affine::IDENTITY {
        return String::new();
    }
    let [a, b, c, d, e, f] = t.as_coeffs();
    format!(
        r#" transform="matrix({} {} {} {} {} {})""#,
        num(a),
        num(b),
        num(c),
        num(d),
        num(e),
        num(f)
    )
}

fn path_data(path: &BezPath) -> String {
    use kurbo::PathEl;

    let mut d = String::new();
    for el in path.elements() {
        if !d.is_empty() {
            d.push(' ');
        }
        let _ = match *el {
            PathEl::MoveTo(p) => write!(d, "M{} {}", num(p.x), num(p.y)),
            PathEl::LineTo(p) => write!(d, "L{} {}", num(p.x), num(p.y)),
            PathEl::QuadTo(p1, p2) => write!(
                d,
                "Q{} {} {} {}",
                num(p1.x),
                num(p1.y),
                num(p2.x),
                num(p2.y)
            ),
            PathEl::CurveTo(p1, p2, p3) => write!(
                d,
                "C{} {} {} {} {} {}",
                num(p1.x),
                num(p1.y),
                num(p2.x),
                num(p2.y),
                num(p3.x),
                num(p3.y)
            ),
            PathEl::ClosePath => write!(d, "Z"),
        };
    }
    d
}

/// Fixed-precision number without trailing zeros.
fn num(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_owned();
    }
    let s = format!("{v:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" || s.is_empty() {
        "0".to_owned()
    } else {
        s.to_owned()
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
