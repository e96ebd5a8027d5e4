//! Backends turning a [`DrawList`] into pixels or markup.

pub(crate) mod cpu;
pub(crate) mod pipeline;
pub(crate) mod svg;

use crate::draw::list::DrawList;
use crate::foundation::core::ViewportSize;
use crate::foundation::error::SceneResult;

/// One rendered frame as tightly packed RGBA8 rows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Raster width in pixels.
    pub width: u32,
    /// Raster height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes, row-major, RGBA order.
    pub data: Vec<u8>,
    /// Whether `data` carries premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Output options shared by every backend.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderSettings {
    /// Output pixels per viewport unit.
    pub scale: f64,
    /// Straight-alpha background painted before the first command.
    pub clear_rgba: Option<[u8; 4]>,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            clear_rgba: None,
        }
    }
}

/// A rasterizer for draw lists.
pub trait RenderBackend {
    /// Render `list` composed for `size` into a fresh frame.
    fn render(&mut self, list: &DrawList, size: ViewportSize) -> SceneResult<FrameRGBA>;
}
