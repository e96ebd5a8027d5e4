//! Scene generation: one pure function per layer, concatenated in painter's order.

pub(crate) mod banner;
pub(crate) mod garland;
pub(crate) mod gifts;
pub(crate) mod ground;
pub(crate) mod layout;
pub(crate) mod lights;
pub(crate) mod ornaments;
pub(crate) mod shadow;
pub(crate) mod sky;
pub(crate) mod snow;
pub(crate) mod topper;
pub(crate) mod tree;

use crate::animation::phase::TimePhases;
use crate::config::scene_config::SceneConfig;
use crate::config::theme::ThemePalette;
use crate::draw::list::DrawList;
use crate::draw::text::{EstimatedMetrics, TextMetrics};
use crate::foundation::core::ViewportSize;
use crate::foundation::error::SceneResult;
use crate::interaction::light_mode::LightMode;
use layout::TreeGeometry;

/// Everything a layer needs to draw one frame.
#[derive(Clone, Copy)]
pub struct FrameContext<'a> {
    pub size: ViewportSize,
    pub phases: TimePhases,
    pub mode: LightMode,
    pub config: &'a SceneConfig,
    pub metrics: &'a dyn TextMetrics,
}

impl FrameContext<'_> {
    pub fn palette(&self) -> &'static ThemePalette {
        self.config.theme.palette()
    }

    pub fn tree(&self) -> TreeGeometry {
        TreeGeometry::new(self.size)
    }
}

/// Scene layers in painter's order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Layer {
    Sky,
    Ground,
    Tree,
    Ornaments,
    Props,
    Snow,
}

impl Layer {
    pub const ALL: [Self; 6] = [
        Self::Sky,
        Self::Ground,
        Self::Tree,
        Self::Ornaments,
        Self::Props,
        Self::Snow,
    ];
}

pub fn render_layer(layer: Layer, ctx: &FrameContext<'_>) -> DrawList {
    match layer {
        Layer::Sky => sky::layer(ctx),
        Layer::Ground => ground::layer(ctx),
        Layer::Tree => tree::layer(ctx),
        Layer::Ornaments => ornaments::layer(ctx),
        Layer::Props => props(ctx),
        Layer::Snow => snow::layer(ctx),
    }
}

/// The greeting banner, then the gift boxes.
fn props(ctx: &FrameContext<'_>) -> DrawList {
    let mut list = DrawList::new();
    banner::draw(
        &mut list,
        ctx.size,
        &ctx.config.greeting,
        ctx.config.hat_anchor,
        ctx.metrics,
    );
    gifts::draw(&mut list, ctx.size, &ctx.tree());
    list
}

/// A configured scene generator.
///
/// Holds no per-frame state: rendering the same `(size, elapsed_ms, mode)` always yields the
/// same command list.
pub struct Scene {
    config: SceneConfig,
    metrics: Box<dyn TextMetrics + Send + Sync>,
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            config: SceneConfig::default(),
            metrics: Box::new(EstimatedMetrics),
        }
    }
}

impl Scene {
    /// Validates `config` and uses estimated text metrics.
    pub fn new(config: SceneConfig) -> SceneResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            metrics: Box::new(EstimatedMetrics),
        })
    }

    /// Replace the text metrics used to place the banner hat.
    pub fn with_metrics(mut self, metrics: impl TextMetrics + Send + Sync + 'static) -> Self {
        self.metrics = Box::new(metrics);
        self
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    fn context(&self, size: ViewportSize, elapsed_ms: u64, mode: LightMode) -> FrameContext<'_> {
        FrameContext {
            size,
            phases: TimePhases::at(elapsed_ms),
            mode,
            config: &self.config,
            metrics: self.metrics.as_ref(),
        }
    }

    /// Draw commands for the whole frame.
    #[tracing::instrument(skip(self), fields(theme = ?self.config.theme))]
    pub fn render(&self, size: ViewportSize, elapsed_ms: u64, mode: LightMode) -> DrawList {
        let ctx = self.context(size, elapsed_ms, mode);
        let mut list = DrawList::new();
        for layer in Layer::ALL {
            list.extend(render_layer(layer, &ctx));
        }
        tracing::debug!(commands = list.len(), "frame composed");
        list
    }

    /// Draw commands of a single layer.
    pub fn render_layer(
        &self,
        layer: Layer,
        size: ViewportSize,
        elapsed_ms: u64,
        mode: LightMode,
    ) -> DrawList {
        render_layer(layer, &self.context(size, elapsed_ms, mode))
    }
}

/// Render one frame with the default configuration and estimated text metrics.
pub fn render(size: ViewportSize, elapsed_ms: u64, mode: LightMode) -> DrawList {
    Scene::default().render(size, elapsed_ms, mode)
}

#[cfg(test)]
#[path = "../../tests/unit/scene/compose.rs"]
mod tests;
