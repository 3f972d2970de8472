use thiserror::Error;

/// Result alias for palette operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors when quantizing or searching for text contrast
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    /// The quantizer was asked for zero colors
    #[error("maximum color count must be at least 1")]
    ZeroColorCount,

    /// Contrast can only be measured against an opaque background
    #[error("background can not be translucent")]
    TranslucentBackground,

    /// Neither a white nor a black overlay reaches the requested contrast
    #[error("no overlay reaches a contrast ratio of {ratio}")]
    InsufficientContrast {
        /// The requested minimum contrast ratio
        ratio: f64,
    },
}
