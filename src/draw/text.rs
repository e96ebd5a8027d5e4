use crate::foundation::color::Color;
use crate::foundation::core::{Point, Vec2};

/// Soft drop shadow behind a text run.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TextShadow {
    pub offset: Vec2,
    pub blur: f64,
    pub color: Color,
}

/// A single line of text, horizontally centred on `anchor.x` with its baseline at `anchor.y`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct TextRun {
    pub text: String,
    pub anchor: Point,
    /// Font size in pixels.
    pub size: f64,
    pub color: Color,
    pub shadow: Option<TextShadow>,
}

/// Text measurement collaborator used to place decorations relative to glyphs.
///
/// Advances must scale linearly with `size` so layouts stay resolution independent.
pub trait TextMetrics {
    /// Horizontal advance of `text` set at `size` pixels.
    fn advance(&self, text: &str, size: f64) -> f64;
}

/// Font-free metrics from a fixed per-character advance table (bold sans proportions).
///
/// Deterministic on every platform, which makes it the default for scene generation.
#[derive(Clone, Copy, Debug, Default)]
pub struct EstimatedMetrics;

impl EstimatedMetrics {
    /// Advance of one character in ems.
    pub fn char_em(c: char) -> f64 {
        match c {
            ' ' => 0.28,
            '!' | '\'' | '.' | ',' | ':' | ';' | '|' => 0.30,
            'i' | 'j' | 'l' => 0.28,
            'I' => 0.30,
            'f' | 't' | 'r' => 0.36,
            'm' => 0.89,
            'w' => 0.78,
            'M' => 0.87,
            'W' => 0.94,
            'C' | 'D' | 'G' | 'H' | 'N' | 'O' | 'Q' | 'U' => 0.74,
            c if c.is_ascii_digit() => 0.56,
            c if c.is_ascii_uppercase() => 0.68,
            c if c.is_ascii_lowercase() => 0.58,
            _ => 0.62,
        }
    }
}

impl TextMetrics for EstimatedMetrics {
    fn advance(&self, text: &str, size: f64) -> f64 {
        text.chars().map(Self::char_em).sum::<f64>() * size
    }
}
