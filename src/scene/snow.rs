//! Falling snowflakes shed by the drifting clouds.

use crate::animation::phase::TimePhases;
use crate::draw::list::DrawList;
use crate::draw::paint::StrokeStyle;
use crate::foundation::color::Color;
use crate::foundation::core::{Point, ViewportSize, rotate_about_deg};
use crate::foundation::math::{fract, hash_fraction, lerp, wave};
use crate::scene::FrameContext;
use crate::scene::sky::{CLOUDS, CloudSpec};

pub const SNOWFLAKE_COUNT: usize = 45;

const BRANCH_CHOICES: [u32; 3] = [6, 8, 12];

/// Time-independent seeds of one flake, all derived from its index.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SnowflakeSpec {
    pub index: usize,
    /// Horizontal spread seed in `[0, 1)`.
    pub x: f64,
    /// Fall offset in `[0, 1)`.
    pub y: f64,
    /// Size seed in `[0, 1)`.
    pub size: f64,
    /// Base rotation in degrees.
    pub rotation: f64,
    pub alpha: f64,
    pub branches: u32,
    /// Side-branch levels per spoke, 1 to 3.
    pub complexity: u32,
    pub color: Color,
    /// Index into the cloud table.
    pub cloud: usize,
}

impl SnowflakeSpec {
    pub fn new(index: usize) -> Self {
        let i = index as u64;
        let color = if index % 5 == 0 {
            Color::from_argb(0xFFE3F2FD)
        } else if index % 7 == 0 {
            Color::from_argb(0xFFF0F8FF)
        } else {
            Color::WHITE
        };
        Self {
            index,
            x: hash_fraction(i, 37, 13),
            y: hash_fraction(i, 53, 29),
            size: hash_fraction(i, 17, 7),
            rotation: ((i * 41 + 19) % 360) as f64,
            alpha: hash_fraction(i, 31, 11),
            branches: BRANCH_CHOICES[((i * 23 + 5) % 3) as usize],
            complexity: 1 + ((i * 19 + 3) % 3) as u32,
            color,
            cloud: index % CLOUDS.len(),
        }
    }

    /// Where and how this flake is drawn at the given instant.
    pub fn state(&self, size: ViewportSize, phases: &TimePhases) -> FlakeState {
        let unit = CloudSpec::unit_radius(size);
        let cloud = CLOUDS[self.cloud].center(size, phases.sky);
        let spread = self.x - 0.5;

        let fall = fract(phases.sky + self.y);
        let y = lerp(cloud.y + unit * 0.5, size.height * 0.85, fall);

        let sway_phase = fract(phases.twinkle * (0.4 + 0.3 * self.x) + 0.1 * self.index as f64);
        let x = cloud.x + unit * 2.5 * spread + size.width * 0.06 * spread * wave(sway_phase);

        let fade = (fall * 5.0).min(1.0) * ((1.0 - fall) * 5.0).min(1.0);
        FlakeState {
            center: Point::new(x, y),
            size: size.width * 0.025 * (0.6 + self.size),
            rotation: self.rotation + 30.0 * spread * phases.twinkle,
            alpha: (0.5 + 0.35 * self.alpha) * fade,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlakeState {
    pub center: Point,
    /// Spoke length.
    pub size: f64,
    /// Degrees.
    pub rotation: f64,
    pub alpha: f64,
}

impl FlakeState {
    /// Flakes more than two sizes beyond the top or bottom edge are skipped.
    pub fn visible(&self, viewport: ViewportSize) -> bool {
        self.center.y > -self.size * 2.0 && self.center.y < viewport.height + self.size * 2.0
    }
}

pub fn snowflake_specs() -> Vec<SnowflakeSpec> {
    (0..SNOWFLAKE_COUNT).map(SnowflakeSpec::new).collect()
}

pub(crate) fn layer(ctx: &FrameContext<'_>) -> DrawList {
    let mut list = DrawList::new();
    let mut drawn = 0usize;
    for spec in snowflake_specs() {
        let state = spec.state(ctx.size, &ctx.phases);
        if !state.visible(ctx.size) {
            continue;
        }
        draw_snowflake(&mut list, &spec, &state);
        drawn += 1;
    }
    tracing::debug!(drawn, total = SNOWFLAKE_COUNT, "snowfall");
    list
}

/// Radial spokes with paired side branches, tip dots on detailed flakes, and a core dot.
pub fn draw_snowflake(list: &mut DrawList, spec: &SnowflakeSpec, state: &FlakeState) {
    let c = state.center;
    let s = state.size;
    let stroke = s * 0.08;
    let color = spec.color.with_alpha(state.alpha);
    let spoke = StrokeStyle::round(stroke);
    let twig = StrokeStyle::round(stroke * 0.75);
    let levels = spec.complexity;

    list.with_transform(rotate_about_deg(state.rotation, c), |l| {
        for b in 0..spec.branches {
            let angle = (f64::from(b) * 360.0 / f64::from(spec.branches)).to_radians();
            let dir = (angle.cos(), angle.sin());
            let tip = Point::new(c.x + s * dir.0, c.y + s * dir.1);
            l.line(c, tip, spoke, color);

            for level in 1..=levels {
                let along = s * f64::from(level) / f64::from(levels + 1);
                let len = s * (0.35 - 0.08 * f64::from(level));
                let root = Point::new(c.x + along * dir.0, c.y + along * dir.1);
                for side in [-1.0, 1.0] {
                    let a = angle + side * std::f64::consts::PI / 5.0;
                    let end = Point::new(root.x + len * a.cos(), root.y + len * a.sin());
                    l.line(root, end, twig, color);
                }
            }

            if levels > 1 {
                l.circle(tip, s * 0.036, color.fade(0.7));
            }
        }
        l.circle(c, stroke * 1.2, color);
    });
}

#[cfg(test)]
#[path = "../../tests/unit/scene/snow.rs"]
mod tests;
