use thiserror::Error;

/// Errors raised when constructing model values directly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid set label {0:?}: expected a single letter")]
    InvalidSetLabel(String),
    #[error("invalid date suffix {0:?}: expected four digits (MMDD)")]
    InvalidDateSuffix(String),
    #[error("identifier path must contain at least one segment")]
    EmptyPath,
    #[error("identifier path segment {index} is zero")]
    ZeroSegment { index: usize },
}

pub type Result<T> = std::result::Result<T, ModelError>;
