use std::path::Path;

use crate::config::theme::SkyTheme;
use crate::foundation::error::{SceneError, SceneResult};

/// Longest greeting accepted by [`SceneConfig::validate`], in characters.
pub const MAX_GREETING_CHARS: usize = 64;

pub const DEFAULT_GREETING: &str = "Merry Christmas!";
pub const DEFAULT_HAT_ANCHOR: char = 'C';

/// User-facing scene configuration.
///
/// Loaded from JSON; missing fields take their defaults, unknown fields are rejected.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub theme: SkyTheme,
    /// Banner text.
    pub greeting: String,
    /// The Santa hat sits on the first occurrence of this character in the greeting.
    pub hat_anchor: char,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            theme: SkyTheme::default(),
            greeting: DEFAULT_GREETING.to_owned(),
            hat_anchor: DEFAULT_HAT_ANCHOR,
        }
    }
}

impl SceneConfig {
    pub fn from_json_str(s: &str) -> SceneResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| SceneError::config(format!("invalid scene config json: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    #[tracing::instrument]
    pub fn from_path(path: &Path) -> SceneResult<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> SceneResult<()> {
        if self.greeting.trim().is_empty() {
            return Err(SceneError::config("greeting must be non-empty"));
        }
        let n = self.greeting.chars().count();
        if n > MAX_GREETING_CHARS {
            return Err(SceneError::config(format!(
                "greeting is {n} chars, at most {MAX_GREETING_CHARS} allowed"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/scene_config.rs"]
mod tests;
