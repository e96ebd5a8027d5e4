/// Convenience result type used across yulescape.
pub type SceneResult<T> = Result<T, SceneError>;

/// Top-level error taxonomy for the fallible edges of the crate.
///
/// Scene generation itself is infallible; these errors come from configuration parsing, font
/// loading, rasterization and file output.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// Invalid user-provided viewport or scene data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed or out-of-range scene configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Font loading or text shaping failures.
    #[error("text error: {0}")]
    Text(String),

    /// Errors while rasterizing or encoding a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Filesystem failures.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SceneError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`SceneError::Text`] value.
    pub fn text(msg: impl Into<String>) -> Self {
        Self::Text(msg.into())
    }

    /// Build a [`SceneError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
