use kurbo::Shape as _;

use crate::draw::paint::{Paint, StrokeStyle};
use crate::draw::text::TextRun;
use crate::foundation::core::{Affine, BezPath, Point, Rect};
use crate::foundation::math::Fnv1a64;

/// Geometry of a filled draw command, in local coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    Path { path: BezPath },
    Circle { center: Point, radius: f64 },
    /// Ellipse inscribed in `bounds`.
    Ellipse { bounds: Rect },
    Rect { rect: Rect },
}

impl Shape {
    pub fn circle(center: Point, radius: f64) -> Self {
        Self::Circle { center, radius }
    }

    pub fn ellipse(center: Point, width: f64, height: f64) -> Self {
        Self::Ellipse {
            bounds: Rect::from_center_size(center, (width, height)),
        }
    }

    pub fn rect(rect: Rect) -> Self {
        Self::Rect { rect }
    }

    /// Flattened outline for backends without native primitives.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        match self {
            Self::Path { path } => path.clone(),
            Self::Circle { center, radius } => {
                kurbo::Circle::new(*center, radius.max(0.0)).to_path(tolerance)
            }
            Self::Ellipse { bounds } => kurbo::Ellipse::from_rect(*bounds).to_path(tolerance),
            Self::Rect { rect } => rect.to_path(tolerance),
        }
    }

    pub fn bounding_box(&self) -> Rect {
        match self {
            Self::Path { path } => path.bounding_box(),
            Self::Circle { center, radius } => {
                Rect::from_center_size(*center, (2.0 * radius, 2.0 * radius))
            }
            Self::Ellipse { bounds } => *bounds,
            Self::Rect { rect } => *rect,
        }
    }
}

impl From<BezPath> for Shape {
    fn from(path: BezPath) -> Self {
        Self::Path { path }
    }
}

impl From<Rect> for Shape {
    fn from(rect: Rect) -> Self {
        Self::Rect { rect }
    }
}

/// One primitive drawing operation. `transform` maps local coordinates to viewport pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCmd {
    Fill {
        shape: Shape,
        paint: Paint,
        transform: Affine,
    },
    Stroke {
        path: BezPath,
        style: StrokeStyle,
        paint: Paint,
        transform: Affine,
    },
    Text {
        run: TextRun,
        transform: Affine,
    },
}

impl DrawCmd {
    pub fn transform(&self) -> Affine {
        match self {
            Self::Fill { transform, .. }
            | Self::Stroke { transform, .. }
            | Self::Text { transform, .. } => *transform,
        }
    }
}

/// Ordered draw commands in painter's order, plus the current transform used while recording.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct DrawList {
    commands: Vec<DrawCmd>,
    #[serde(skip)]
    current: Affine,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCmd> {
        self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCmd> {
        self.commands.iter()
    }

    /// Transform applied to commands recorded right now.
    pub fn current_transform(&self) -> Affine {
        self.current
    }

    pub fn fill(&mut self, shape: impl Into<Shape>, paint: impl Into<Paint>) {
        self.commands.push(DrawCmd::Fill {
            shape: shape.into(),
            paint: paint.into(),
            transform: self.current,
        });
    }

    pub fn circle(&mut self, center: Point, radius: f64, paint: impl Into<Paint>) {
        self.fill(Shape::circle(center, radius), paint);
    }

    pub fn stroke(&mut self, path: BezPath, style: StrokeStyle, paint: impl Into<Paint>) {
        self.commands.push(DrawCmd::Stroke {
            path,
            style,
            paint: paint.into(),
            transform: self.current,
        });
    }

    pub fn line(&mut self, from: Point, to: Point, style: StrokeStyle, paint: impl Into<Paint>) {
        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        self.stroke(path, style, paint);
    }

    pub fn text(&mut self, run: TextRun) {
        self.commands.push(DrawCmd::Text {
            run,
            transform: self.current,
        });
    }

    /// Record `f` with `transform` composed onto the current transform.
    pub fn with_transform<R>(&mut self, transform: Affine, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = self.current;
        self.current = saved * transform;
        let out = f(self);
        self.current = saved;
        out
    }

    /// Append another list's commands after this list's, keeping their transforms.
    pub fn extend(&mut self, other: DrawList) {
        self.commands.extend(other.commands);
    }

    /// Stable 64-bit digest of the serialized commands.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1a64::new_default();
        // Serializing plain data into a Vec cannot fail.
        if let Ok(bytes) = serde_json::to_vec(&self.commands) {
            h.write_bytes(&bytes);
        }
        h.finish()
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCmd;
    type IntoIter = std::slice::Iter<'a, DrawCmd>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/list.rs"]
mod tests;
