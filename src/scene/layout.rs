//! Derived tree geometry shared by the tree, ornament and prop layers.

use crate::animation::phase::TimePhases;
use crate::foundation::core::{Affine, BezPath, Point, ViewportSize, rotate_about_deg};
use crate::foundation::math::wave;

pub const NUM_LAYERS: usize = 10;

/// Peak sway rotation in degrees.
pub const SWAY_AMPLITUDE_DEG: f64 = 1.1;

/// Trunk foot extends this many reference pixels below the ground centre line.
const TRUNK_FOOT_REF_PX: f64 = 25.0;

/// Tree dimensions for one viewport. Everything is a closed-form function of the viewport and
/// the layer count.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct TreeGeometry {
    pub num_layers: usize,
    pub center_x: f64,
    pub tree_width: f64,
    pub tree_height: f64,
    pub ground_center: f64,
    pub layer_height: f64,
    pub overlap: f64,
    pub tree_top: f64,
    pub trunk_foot: f64,
}

impl TreeGeometry {
    pub fn new(size: ViewportSize) -> Self {
        Self::with_layers(size, NUM_LAYERS)
    }

    /// Geometry for a custom layer count; counts below one are raised to one.
    pub fn with_layers(size: ViewportSize, num_layers: usize) -> Self {
        let n = num_layers.max(1);
        let tree_width = size.width * 0.42;
        let tree_height = size.height * 0.62;
        let ground_center = size.height * 0.81;
        let layer_height = tree_height / (n as f64 + 1.0);
        let overlap = layer_height * 0.35;
        let stack = (n as f64 - 1.0) * (layer_height - overlap) + layer_height;
        let tree_top = ground_center - layer_height * 1.75 - stack;
        Self {
            num_layers: n,
            center_x: size.center_x(),
            tree_width,
            tree_height,
            ground_center,
            layer_height,
            overlap,
            tree_top,
            trunk_foot: size.ref_px(TRUNK_FOOT_REF_PX),
        }
    }

    /// Position of layer `i` from top (0) to bottom (1). A single-layer tree is all bottom.
    pub fn progress(&self, i: usize) -> f64 {
        if self.num_layers <= 1 {
            return 1.0;
        }
        i as f64 / (self.num_layers as f64 - 1.0)
    }

    pub fn layer_top(&self, i: usize) -> f64 {
        self.tree_top + i as f64 * (self.layer_height - self.overlap)
    }

    pub fn layer_bottom(&self, i: usize) -> f64 {
        self.layer_top(i) + self.layer_height
    }

    pub fn layer_width(&self, i: usize) -> f64 {
        self.tree_width * (0.25 + 0.75 * self.progress(i))
    }

    pub fn scallops(&self, i: usize) -> usize {
        5 + i
    }

    pub fn last_layer_bottom(&self) -> f64 {
        self.layer_bottom(self.num_layers - 1)
    }

    pub fn trunk_top(&self) -> f64 {
        self.last_layer_bottom() - self.layer_height * 1.75
    }

    pub fn trunk_bottom(&self) -> f64 {
        self.ground_center + self.trunk_foot
    }

    pub fn trunk_width_top(&self) -> f64 {
        self.tree_width * 0.24
    }

    pub fn trunk_width_bottom(&self) -> f64 {
        self.tree_width * 0.32
    }

    /// Sway pivot on the ground centre line.
    pub fn pivot(&self) -> Point {
        Point::new(self.center_x, self.ground_center)
    }

    pub fn sway_degrees(phases: &TimePhases) -> f64 {
        wave(phases.sway + 0.10) * SWAY_AMPLITUDE_DEG
    }

    /// Rigid rotation applied to everything attached to the tree.
    pub fn sway_transform(&self, phases: &TimePhases) -> Affine {
        rotate_about_deg(Self::sway_degrees(phases), self.pivot())
    }

    pub fn topper_center(&self) -> Point {
        Point::new(self.center_x, self.tree_top - self.layer_height * 0.25)
    }
}

/// Shape parameters for a path that zig-zags across several foliage layers.
///
/// Fractions of `w` refer to the wobbled layer width, fractions of `lh` to the layer height.
#[derive(Clone, Copy, Debug)]
pub struct WrapParams {
    pub anchors: [usize; 4],
    /// Alternating width wobble; even layers widen, odd layers narrow.
    pub wobble: f64,
    /// Anchor y below the layer top, in `lh`.
    pub y: f64,
    /// Half-span of each wave, in `w`.
    pub half_span: f64,
    /// Wave amplitude, in `lh`.
    pub amplitude: f64,
    /// Horizontal offset of the wave control points, in `w`.
    pub wave_ctrl: f64,
    /// Connector end y below the next layer top, in `lh`.
    pub next_y: f64,
    /// Connector end x left of centre on the next layer, in that layer's `w`.
    pub next_x: f64,
    /// Connector control x offsets (this layer, next layer), in `w`.
    pub connector_ctrl: (f64, f64),
    /// Connector control point amplitude factor.
    pub connector_lift: f64,
}

impl TreeGeometry {
    fn wobbled_width(&self, layer: usize, wobble: f64) -> f64 {
        let base = self.layer_width(layer);
        let sign = if layer % 2 == 0 { 1.0 } else { -1.0 };
        base + sign * base * wobble
    }

    /// Build a left-to-right wave on each anchor layer joined by descending connectors.
    pub fn wrap_path(&self, p: &WrapParams) -> BezPath {
        let cx = self.center_x;
        let lh = self.layer_height;
        let amplitude = lh * p.amplitude;
        let mut path = BezPath::new();
        for (k, &layer) in p.anchors.iter().enumerate() {
            let w = self.wobbled_width(layer, p.wobble);
            let y = self.layer_top(layer) + lh * p.y;
            if k == 0 {
                path.move_to((cx - w * p.half_span, y));
            }
            path.curve_to(
                (cx - w * p.wave_ctrl, y - amplitude * 0.8),
                (cx + w * p.wave_ctrl, y + amplitude * 0.8),
                (cx + w * p.half_span, y),
            );
            if let Some(&next) = p.anchors.get(k + 1) {
                let nw = self.wobbled_width(next, p.wobble);
                let ny = self.layer_top(next) + lh * p.next_y;
                path.curve_to(
                    (cx + w * p.connector_ctrl.0, y + amplitude * p.connector_lift),
                    (cx - nw * p.connector_ctrl.1, ny - amplitude * p.connector_lift),
                    (cx - nw * p.next_x, ny),
                );
            }
        }
        path
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/layout.rs"]
mod tests;
