use kurbo::{ParamCurve, ParamCurveArclen, PathSeg};

use crate::foundation::core::{BezPath, Point};

/// Accuracy passed to the arc-length solvers.
const ARCLEN_ACCURACY: f64 = 1e-6;

/// Arc-length sampling over a path, the `measure(path).position_at(distance)` primitive.
///
/// Segment lengths are computed once; lookups walk the cumulative table and invert the
/// arc length within the hit segment.
#[derive(Clone, Debug)]
pub struct PathMeasure {
    segments: Vec<PathSeg>,
    /// Cumulative length at the end of each segment.
    cumulative: Vec<f64>,
    start: Option<Point>,
}

impl PathMeasure {
    pub fn new(path: &BezPath) -> Self {
        let mut segments = Vec::new();
        let mut cumulative = Vec::new();
        let mut total = 0.0;
        for seg in path.segments() {
            total += seg.arclen(ARCLEN_ACCURACY);
            segments.push(seg);
            cumulative.push(total);
        }
        let start = path.elements().first().and_then(|el| el.end_point());
        Self {
            segments,
            cumulative,
            start,
        }
    }

    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Point at `distance` along the path, clamped to `[0, length]`.
    ///
    /// Returns `None` for an empty path.
    pub fn position_at(&self, distance: f64) -> Option<Point> {
        let first = self.segments.first()?;
        if distance <= 0.0 {
            return Some(first.eval(0.0));
        }
        let idx = self
            .cumulative
            .partition_point(|&end| end < distance)
            .min(self.segments.len() - 1);
        let seg = self.segments[idx];
        let seg_start = if idx == 0 { 0.0 } else { self.cumulative[idx - 1] };
        let seg_len = self.cumulative[idx] - seg_start;
        let local = (distance - seg_start).clamp(0.0, seg_len);
        if seg_len <= f64::EPSILON {
            return Some(seg.eval(0.0));
        }
        let t = seg.inv_arclen(local, ARCLEN_ACCURACY);
        Some(seg.eval(t))
    }

    /// First point of the path, even if it has no segments.
    pub fn start(&self) -> Option<Point> {
        self.start
    }
}

#[cfg(test)]
#[path = "../../tests/unit/draw/measure.rs"]
mod tests;
