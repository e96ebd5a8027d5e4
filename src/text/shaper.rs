//! Real-font text shaping on top of `parley`.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::draw::text::{EstimatedMetrics, TextMetrics};
use crate::foundation::color::Color;
use crate::foundation::error::{SceneError, SceneResult};

/// RGBA8 brush color carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrush {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl From<Color> for TextBrush {
    fn from(c: Color) -> Self {
        let [r, g, b, a] = c.to_rgba8();
        Self { r, g, b, a }
    }
}

/// Shapes single lines of text with one registered font.
pub struct TextShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrush>,
    family: String,
    font_bytes: Arc<Vec<u8>>,
}

impl std::fmt::Debug for TextShaper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextShaper")
            .field("family", &self.family)
            .field("font_bytes_len", &self.font_bytes.len())
            .finish()
    }
}

impl TextShaper {
    /// Register `font_bytes` (TTF/OTF) and use its first family for every layout.
    pub fn from_font_bytes(font_bytes: Vec<u8>) -> SceneResult<Self> {
        let font_bytes = Arc::new(font_bytes);
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| SceneError::text("no font families registered from font bytes"))?;
        let family = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| SceneError::text("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family,
            font_bytes,
        })
    }

    #[tracing::instrument]
    pub fn from_path(path: &Path) -> SceneResult<Self> {
        let bytes = std::fs::read(path)?;
        let shaper = Self::from_font_bytes(bytes)?;
        tracing::debug!(family = %shaper.family, "font loaded");
        Ok(shaper)
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    /// Raw font data, shared with renderers that draw the shaped glyphs.
    pub fn font_bytes(&self) -> Arc<Vec<u8>> {
        Arc::clone(&self.font_bytes)
    }

    /// Lay out `text` on a single unbroken line.
    pub fn layout(
        &mut self,
        text: &str,
        size_px: f32,
        brush: TextBrush,
    ) -> SceneResult<parley::Layout<TextBrush>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(SceneError::validation("text size must be finite and > 0"));
        }
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrush> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Advance width of `text` laid out at `size_px`, trailing whitespace included.
    pub fn measure(&mut self, text: &str, size_px: f32) -> SceneResult<f32> {
        Ok(self.layout(text, size_px, TextBrush::default())?.full_width())
    }
}

/// [`TextMetrics`] backed by a real font.
///
/// Falls back to [`EstimatedMetrics`] when shaping fails, so banner placement never errors.
#[derive(Debug)]
pub struct ParleyMetrics {
    shaper: Mutex<TextShaper>,
}

impl ParleyMetrics {
    pub fn new(shaper: TextShaper) -> Self {
        Self {
            shaper: Mutex::new(shaper),
        }
    }
}

impl TextMetrics for ParleyMetrics {
    fn advance(&self, text: &str, size: f64) -> f64 {
        if text.is_empty() {
            return 0.0;
        }
        let mut shaper = self
            .shaper
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        match shaper.measure(text, size as f32) {
            Ok(w) => f64::from(w),
            Err(err) => {
                tracing::warn!(%err, "text measurement failed, using estimate");
                EstimatedMetrics.advance(text, size)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/shaper.rs"]
mod tests;
