//! Yulescape is a deterministic procedural generator for an animated winter-holiday scene.
//!
//! A frame is a pure function of `(viewport size, elapsed milliseconds, light mode)` plus an
//! optional [`SceneConfig`]. The generator emits an ordered [`DrawList`] of fills, strokes and
//! text runs; backends turn it into pixels or markup:
//!
//! - [`Scene::render`] / [`render`] compose the sky, ground, tree, ornaments, props and snow
//! - [`CpuBackend`] rasterizes with `vello_cpu`, [`SvgBackend`] writes SVG 1.1
//! - [`render_sequence`] renders PNG series, optionally across rayon workers
#![forbid(unsafe_code)]

mod animation;
mod config;
mod draw;
mod foundation;
mod interaction;
mod render;
mod scene;
mod text;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{
    Affine, BezPath, Point, REFERENCE_EXTENT, Rect, Vec2, ViewportSize, rotate_about_deg,
    scale_about,
};
pub use crate::foundation::error::{SceneError, SceneResult};
pub use crate::foundation::math::{cubic_bezier, fract, hash_fraction, lerp, unit_sine, wave};

pub use crate::animation::phase::{
    SKY_PERIOD_MS, STAR_TWINKLE_PERIOD_MS, SWAY_PERIOD_MS, TWINKLE_PERIOD_MS, TimePhases, phase,
};
pub use crate::config::scene_config::{
    DEFAULT_GREETING, DEFAULT_HAT_ANCHOR, MAX_GREETING_CHARS, SceneConfig,
};
pub use crate::config::theme::{SkyTheme, ThemePalette};
pub use crate::interaction::light_mode::{LightMode, on_tap};

pub use crate::draw::list::{DrawCmd, DrawList, Shape};
pub use crate::draw::measure::PathMeasure;
pub use crate::draw::paint::{GradientStop, LineCap, Paint, StrokeStyle};
pub use crate::draw::text::{EstimatedMetrics, TextMetrics, TextRun, TextShadow};

pub use crate::scene::banner::{BannerLayout, HatPlacement};
pub use crate::scene::gifts::{GIFTS, GiftBox, GiftBoxSpec, GiftPalette, RibbonPalette, Tint};
pub use crate::scene::ground::{ground_y_at, hill_path};
pub use crate::scene::layout::{NUM_LAYERS, SWAY_AMPLITUDE_DEG, TreeGeometry, WrapParams};
pub use crate::scene::lights::{BulbState, LightBulbSpec, bulb_specs, rainbow_color};
pub use crate::scene::sky::{
    CLOUDS, CloudSpec, GENERATED_STARS, StarSpec, generated_star, sky_colors, star_specs,
};
pub use crate::scene::snow::{
    FlakeState, SNOWFLAKE_COUNT, SnowflakeSpec, draw_snowflake, snowflake_specs,
};
pub use crate::scene::topper::{TopperPulse, star_path};
pub use crate::scene::tree::{CandyCane, candy_canes};
pub use crate::scene::{FrameContext, Layer, Scene, render, render_layer};

pub use crate::text::shaper::{ParleyMetrics, TextBrush, TextShaper};

pub use crate::render::cpu::CpuBackend;
pub use crate::render::pipeline::{
    RenderStats, RenderThreading, SequenceOutput, SequenceSpec, frame_elapsed_ms,
    frame_file_name, render_frame_rgba, render_frames, render_sequence, unpremultiply_rgba8,
    write_png,
};
pub use crate::render::svg::SvgBackend;
pub use crate::render::{FrameRGBA, RenderBackend, RenderSettings};
