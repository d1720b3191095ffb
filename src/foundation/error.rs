/// Convenience result type used across the crate.
pub type WallpaperResult<T> = Result<T, WallpaperError>;

/// Top-level error taxonomy used by the rendering APIs.
#[derive(thiserror::Error, Debug)]
pub enum WallpaperError {
    /// Caller-supplied dimensions, color stops or segment weights are unusable.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A requested font could not be resolved or parsed.
    ///
    /// The text overlay absorbs this and substitutes the built-in bitmap font.
    #[error("font error: {0}")]
    Font(String),

    /// Malformed configuration input (JSON, hex colors, orientation names).
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WallpaperError {
    /// Build a [`WallpaperError::InvalidArgument`] value.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Build a [`WallpaperError::Font`] value.
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`WallpaperError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
