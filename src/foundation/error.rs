/// Convenience result type used across charade.
pub type CharadeResult<T> = Result<T, CharadeError>;

/// Top-level error taxonomy.
///
/// Parse misses are not errors: unrecognized instruction lines are dropped, never surfaced.
#[derive(thiserror::Error, Debug)]
pub enum CharadeError {
    /// Invalid user-provided data (options, guesses, canvas sizes).
    #[error("validation error: {0}")]
    Validation(String),

    /// The instruction source failed to produce lines for a category.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Errors while rasterizing or exporting a drawing surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when loading or decoding configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Filesystem errors.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CharadeError {
    /// Build a [`CharadeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CharadeError::Fetch`] value.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Build a [`CharadeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CharadeError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
