#![deny(unsafe_code)]

//! Specimen identifiers.
//!
//! A specimen is named by its set letter and its generation path, e.g.
//! `E.1.3`. A brood event additionally carries a `_MMDD` date suffix
//! (`E.1.3_0912`), which is the "full ID" stored by the lab.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::ModelError;

/// Top-level population group (`E`, `A`, `B`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SetLabel(pub(crate) char);

impl SetLabel {
    /// Build a label from a single ASCII letter, uppercasing it.
    pub fn new(letter: char) -> Result<Self, ModelError> {
        if letter.is_ascii_alphabetic() {
            Ok(Self(letter.to_ascii_uppercase()))
        } else {
            Err(ModelError::InvalidSetLabel(letter.to_string()))
        }
    }

    /// Parse a label from text such as `"e"` or `" E "`.
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        let trimmed = value.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => Self::new(letter),
            _ => Err(ModelError::InvalidSetLabel(value.to_string())),
        }
    }

    pub fn as_char(&self) -> char {
        self.0
    }

    /// Returns true if this label is one of `known`.
    pub fn is_known(&self, known: &[SetLabel]) -> bool {
        known.contains(self)
    }
}

impl fmt::Display for SetLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for SetLabel {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SetLabel> for String {
    fn from(value: SetLabel) -> Self {
        value.0.to_string()
    }
}

/// Four-digit month/day suffix of a full ID.
///
/// Only the shape is checked. Legacy records carry suffixes that are not
/// real calendar days, and those must still resolve.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DateSuffix(String);

impl DateSuffix {
    /// Parse `MMDD` or `_MMDD`.
    pub fn parse(value: &str) -> Result<Self, ModelError> {
        let trimmed = value.trim();
        let digits = trimmed.strip_prefix('_').unwrap_or(trimmed);
        if digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(digits.to_string()))
        } else {
            Err(ModelError::InvalidDateSuffix(value.to_string()))
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.format("%m%d").to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric rank used to pick the latest brood event of a core.
    pub fn ordinal(&self) -> u32 {
        self.0.parse().unwrap_or(0)
    }
}

impl fmt::Display for DateSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for DateSuffix {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DateSuffix> for String {
    fn from(value: DateSuffix) -> Self {
        value.0
    }
}

/// Canonical specimen identifier: set letter, generation path, and an
/// optional date suffix.
///
/// `Display` renders the core form (`E.1.3`); [`CanonicalIdentifier::full_id`]
/// appends the date suffix when present (`E.1.3_0912`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CanonicalIdentifier {
    set_label: SetLabel,
    path: Vec<u32>,
    date_suffix: Option<DateSuffix>,
}

impl CanonicalIdentifier {
    /// Build an identifier, rejecting an empty path or a zero segment.
    pub fn new(
        set_label: SetLabel,
        path: Vec<u32>,
        date_suffix: Option<DateSuffix>,
    ) -> Result<Self, ModelError> {
        if path.is_empty() {
            return Err(ModelError::EmptyPath);
        }
        if let Some(index) = path.iter().position(|segment| *segment == 0) {
            return Err(ModelError::ZeroSegment { index });
        }
        Ok(Self {
            set_label,
            path,
            date_suffix,
        })
    }

    pub fn set_label(&self) -> SetLabel {
        self.set_label
    }

    pub fn path(&self) -> &[u32] {
        &self.path
    }

    pub fn date_suffix(&self) -> Option<&DateSuffix> {
        self.date_suffix.as_ref()
    }

    /// Generation depth, i.e. the number of path segments.
    pub fn generation(&self) -> usize {
        self.path.len()
    }

    /// Last path segment: the brood index within the parent.
    pub fn last_segment(&self) -> u32 {
        self.path.last().copied().unwrap_or_default()
    }

    /// Same identifier with the date suffix removed.
    pub fn core(&self) -> Self {
        Self {
            set_label: self.set_label,
            path: self.path.clone(),
            date_suffix: None,
        }
    }

    #[must_use]
    pub fn with_date_suffix(mut self, date_suffix: Option<DateSuffix>) -> Self {
        self.date_suffix = date_suffix;
        self
    }

    /// Returns true if `self` is a direct child of `parent` (same set, path
    /// extended by exactly one segment). Date suffixes are ignored.
    pub fn is_child_of(&self, parent: &CanonicalIdentifier) -> bool {
        self.set_label == parent.set_label
            && self.path.len() == parent.path.len() + 1
            && self.path.starts_with(&parent.path)
    }

    /// Core form with the `_MMDD` suffix appended when present.
    pub fn full_id(&self) -> String {
        match &self.date_suffix {
            Some(suffix) => format!("{self}_{suffix}"),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for CanonicalIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.set_label)?;
        for segment in &self.path {
            write!(f, ".{segment}")?;
        }
        Ok(())
    }
}
