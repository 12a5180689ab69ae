//! Error types for the img2color pipeline

use thiserror::Error;

/// Result type alias for img2color operations
pub type Result<T> = std::result::Result<T, Img2ColorError>;

/// Everything that can stop a color detection run.
///
/// Missing or malformed generation metadata is not an error: the seed
/// extractor absorbs it and clustering runs unseeded.
#[derive(Error, Debug)]
pub enum Img2ColorError {
    /// Tensor shape does not describe a `[batch, height, width, 3]` buffer
    #[error("Invalid image tensor: {reason}")]
    InvalidTensor { reason: String },

    /// A configuration value lies outside its documented range
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// The selected batch element has no pixels
    #[error("Image has no pixels to cluster")]
    EmptyImage,

    /// kmeans_colors stores cluster indices as `u8`
    #[error("Cannot cluster into {requested} colors (maximum {maximum})")]
    TooManyClusters { requested: usize, maximum: usize },

    /// No seed could be drawn from the operating system
    #[error("Failed to draw a random seed: {0}")]
    Entropy(#[from] getrandom::Error),

    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {0}")]
    ImageLoad(#[from] image::ImageError),

    /// Configuration or metadata JSON could not be parsed
    #[error("Invalid JSON: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Img2ColorError {
    pub(crate) fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    pub(crate) fn invalid_tensor(reason: impl Into<String>) -> Self {
        Self::InvalidTensor {
            reason: reason.into(),
        }
    }
}
