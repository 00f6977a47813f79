#![deny(unsafe_code)]

use brood_model::{CanonicalIdentifier, ModelError};
use thiserror::Error;

/// Why an identifier could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    #[error("identifier is empty")]
    Empty,
    #[error("nothing precedes the date suffix")]
    MissingCore,
    #[error("date suffix {0:?} must be exactly four digits after '_'")]
    BadDateSuffix(String),
    #[error("missing set letter")]
    MissingSetLetter,
    #[error("set label {0:?} must be a single letter")]
    MultiLetterSet(String),
    #[error("missing numeric path segment")]
    MissingPath,
    #[error("unexpected character {0:?}")]
    UnexpectedChar(char),
    #[error("empty path segment")]
    EmptySegment,
    #[error("path segment {0:?} is zero")]
    ZeroSegment(String),
    #[error("path segment {0:?} is too large")]
    SegmentOverflow(String),
    #[error(
        "digits {0:?} are ambiguous without separators; use the dotted form (e.g. E.10)"
    )]
    AmbiguousConcatenation(String),
}

#[derive(Debug, Error)]
pub enum CoreError {
    /// The input cannot be parsed. Shown to the user as a validation error.
    #[error("malformed identifier {input:?}: {reason}")]
    MalformedIdentifier {
        input: String,
        reason: MalformedReason,
    },
    /// No lineage record matches the input.
    #[error("no such mother: {input}")]
    NotFound { input: String },
    /// Invariant violation on an already-normalized parent.
    #[error("invalid parent identifier {parent}: {message}")]
    InvalidParent {
        parent: CanonicalIdentifier,
        message: String,
    },
    #[error(transparent)]
    Model(#[from] ModelError),
}

impl CoreError {
    pub(crate) fn malformed(input: &str, reason: MalformedReason) -> Self {
        Self::MalformedIdentifier {
            input: input.to_string(),
            reason,
        }
    }

    /// True for errors caused by user input rather than program bugs.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::InvalidParent { .. })
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
