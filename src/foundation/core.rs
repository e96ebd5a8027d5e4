use crate::foundation::error::{SceneError, SceneResult};

pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Length of the shorter viewport side that reference-pixel constants are authored against.
pub const REFERENCE_EXTENT: f64 = 1080.0;

/// Viewport in device-independent pixels.
///
/// Every scene measurement is a fraction of `width` / `height`. Fixed pixel constants are
/// expressed in reference pixels and resolved through [`ViewportSize::ref_px`], so doubling
/// the viewport doubles every size exactly.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ViewportSize {
    /// Horizontal extent; finite and > 0.
    pub width: f64,
    /// Vertical extent; finite and > 0.
    pub height: f64,
}

impl ViewportSize {
    /// Validated viewport. Rejects non-finite and non-positive dimensions.
    pub fn new(width: f64, height: f64) -> SceneResult<Self> {
        if !width.is_finite() || !height.is_finite() {
            return Err(SceneError::validation("viewport dimensions must be finite"));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(SceneError::validation("viewport dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Length of the shorter side.
    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }

    /// Convert reference pixels into viewport pixels.
    pub fn ref_px(self, v: f64) -> f64 {
        v * self.min_side() / REFERENCE_EXTENT
    }

    /// Horizontal centre line, where the tree stands.
    pub fn center_x(self) -> f64 {
        self.width * 0.5
    }

    /// The whole viewport as a rectangle at the origin.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Whole-pixel raster dimensions for a given output scale.
    pub fn raster_dims(self, scale: f64) -> SceneResult<(u32, u32)> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(SceneError::validation("raster scale must be finite and > 0"));
        }
        let w = (self.width * scale).round();
        let h = (self.height * scale).round();
        if w < 1.0 || h < 1.0 || w > f64::from(u16::MAX) || h > f64::from(u16::MAX) {
            return Err(SceneError::validation(format!(
                "raster size {w}x{h} is outside 1..={}",
                u16::MAX
            )));
        }
        Ok((w as u32, h as u32))
    }
}

/// Rotation in degrees about a pivot, in screen coordinates (positive is clockwise on a y-down
/// canvas).
pub fn rotate_about_deg(degrees: f64, pivot: Point) -> Affine {
    Affine::rotate_about(degrees.to_radians(), pivot)
}

/// Uniform scale about a pivot.
pub fn scale_about(factor: f64, pivot: Point) -> Affine {
    Affine::translate(pivot.to_vec2()) * Affine::scale(factor) * Affine::translate(-pivot.to_vec2())
}
