use crate::foundation::color::Color;
use crate::foundation::core::Point;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct GradientStop {
    /// Position along the gradient in `[0, 1]`.
    pub offset: f64,
    pub color: Color,
}

/// How a filled or stroked region is colored.
///
/// Gradient geometry is in the same local coordinates as the shape it paints. Positions before
/// the first stop and after the last one pad with the end colors.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    Solid { color: Color },
    Linear {
        start: Point,
        end: Point,
        stops: Vec<GradientStop>,
    },
    Radial {
        center: Point,
        radius: f64,
        stops: Vec<GradientStop>,
    },
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self::Solid { color }
    }

    /// Linear gradient with evenly spaced stops.
    pub fn linear(start: Point, end: Point, colors: &[Color]) -> Self {
        Self::Linear {
            start,
            end,
            stops: even_stops(colors),
        }
    }

    /// Top-to-bottom gradient between `y0` and `y1`.
    pub fn vertical(y0: f64, y1: f64, colors: &[Color]) -> Self {
        Self::linear(Point::new(0.0, y0), Point::new(0.0, y1), colors)
    }

    /// Left-to-right gradient between `x0` and `x1`.
    pub fn horizontal(x0: f64, x1: f64, colors: &[Color]) -> Self {
        Self::linear(Point::new(x0, 0.0), Point::new(x1, 0.0), colors)
    }

    /// Radial gradient with evenly spaced stops.
    pub fn radial(center: Point, radius: f64, colors: &[Color]) -> Self {
        Self::Radial {
            center,
            radius,
            stops: even_stops(colors),
        }
    }

    pub fn stops(&self) -> &[GradientStop] {
        match self {
            Self::Solid { .. } => &[],
            Self::Linear { stops, .. } | Self::Radial { stops, .. } => stops,
        }
    }

    /// Color at gradient parameter `t`, padded outside `[0, 1]`.
    pub fn sample_stops(stops: &[GradientStop], t: f64) -> Color {
        let Some(first) = stops.first() else {
            return Color::TRANSPARENT;
        };
        if t <= first.offset {
            return first.color;
        }
        for pair in stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.offset {
                let span = b.offset - a.offset;
                if span <= f64::EPSILON {
                    return b.color;
                }
                return a.color.lerp(b.color, (t - a.offset) / span);
            }
        }
        stops.last().map_or(first.color, |s| s.color)
    }

    /// Color this paint assigns to `p`, in the paint's local coordinates.
    pub fn color_at(&self, p: Point) -> Color {
        match self {
            Self::Solid { color } => *color,
            Self::Linear { start, end, stops } => {
                let axis = *end - *start;
                let len2 = axis.hypot2();
                let t = if len2 > 0.0 {
                    (p - *start).dot(axis) / len2
                } else {
                    0.0
                };
                Self::sample_stops(stops, t)
            }
            Self::Radial {
                center,
                radius,
                stops,
            } => {
                let t = if *radius > 0.0 {
                    (p - *center).hypot() / radius
                } else {
                    0.0
                };
                Self::sample_stops(stops, t)
            }
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Self::solid(color)
    }
}

fn even_stops(colors: &[Color]) -> Vec<GradientStop> {
    let last = colors.len().saturating_sub(1).max(1) as f64;
    colors
        .iter()
        .enumerate()
        .map(|(i, &color)| GradientStop {
            offset: if colors.len() == 1 { 0.0 } else { i as f64 / last },
            color,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

/// Stroke parameters. `dash` holds `[on, off]` lengths when present.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct StrokeStyle {
    pub width: f64,
    pub cap: LineCap,
    pub dash: Option<[f64; 2]>,
}

impl StrokeStyle {
    pub fn new(width: f64) -> Self {
        Self {
            width,
            cap: LineCap::Butt,
            dash: None,
        }
    }

    pub fn round(width: f64) -> Self {
        Self {
            cap: LineCap::Round,
            ..Self::new(width)
        }
    }

    pub fn with_dash(mut self, on: f64, off: f64) -> Self {
        self.dash = Some([on, off]);
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/paint.rs"]
mod tests;
