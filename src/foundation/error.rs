/// Convenience result type used across imgrom.
pub type ImgRomResult<T> = Result<T, ImgRomError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum ImgRomError {
    /// Invalid configuration, geometry or frame sequence.
    #[error("validation error: {0}")]
    Validation(String),

    /// An input image could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Video probing or decoding through ffmpeg failed.
    #[error("media error: {0}")]
    Media(String),

    /// Output could not be written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImgRomError {
    /// Build an [`ImgRomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ImgRomError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build an [`ImgRomError::Media`] value.
    pub fn media(msg: impl Into<String>) -> Self {
        Self::Media(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
