use thiserror::Error;

/// Input-validation failures for a significance evaluation.
///
/// The display text is the message shown to whoever entered the counts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignificanceError {
    #[error("Visitors must be greater than zero")]
    ZeroVisitors,

    #[error("Conversions cannot exceed visitors")]
    ConversionsExceedVisitors,
}

pub type Result<T> = std::result::Result<T, SignificanceError>;

impl SignificanceError {
    /// Stable machine-readable code for the failure.
    pub fn kind(&self) -> &'static str {
        match self {
            SignificanceError::ZeroVisitors => "zero_visitors",
            SignificanceError::ConversionsExceedVisitors => "conversions_exceed_visitors",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Confidence threshold must be in (0, 100], got {0}")]
    InvalidThreshold(f64),
}
