/// Result alias used across the fallible edges of the crate.
pub type BackdropResult<T> = Result<T, BackdropError>;

/// Errors raised while loading inputs or exporting a rendered backdrop.
///
/// The render core itself never fails: malformed labels and numbers are normalized or clamped.
#[derive(thiserror::Error, Debug)]
pub enum BackdropError {
    /// Input document could not be understood.
    #[error("config error: {0}")]
    Config(String),

    /// Export (SVG parse, raster allocation) failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, typically I/O with context attached.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BackdropError {
    /// Build a [`BackdropError::Config`].
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`BackdropError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BackdropError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for BackdropError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
