/// Convenience result type used across loopsmith.
pub type LoopResult<T> = Result<T, LoopError>;

/// Top-level error taxonomy used by the editing APIs.
///
/// Every variant aborts the whole edit; there is no partial output.
#[derive(thiserror::Error, Debug)]
pub enum LoopError {
    /// Invalid editing parameters, detected before any frame is touched.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The input is too short for the requested trims or window.
    #[error("insufficient frames: {0}")]
    InsufficientFrames(String),

    /// The container codec rejected the input or failed to write output.
    #[error("codec error: {0}")]
    Codec(String),

    /// The color quantizer could not produce a palette.
    #[error("quantization error: {0}")]
    Quantization(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LoopError {
    /// Build a [`LoopError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`LoopError::InsufficientFrames`] value.
    pub fn insufficient_frames(msg: impl Into<String>) -> Self {
        Self::InsufficientFrames(msg.into())
    }

    /// Build a [`LoopError::Codec`] value.
    pub fn codec(msg: impl Into<String>) -> Self {
        Self::Codec(msg.into())
    }

    /// Build a [`LoopError::Quantization`] value.
    pub fn quantization(msg: impl Into<String>) -> Self {
        Self::Quantization(msg.into())
    }
}

impl From<gif::DecodingError> for LoopError {
    fn from(err: gif::DecodingError) -> Self {
        Self::codec(err.to_string())
    }
}

impl From<gif::EncodingError> for LoopError {
    fn from(err: gif::EncodingError) -> Self {
        Self::codec(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
