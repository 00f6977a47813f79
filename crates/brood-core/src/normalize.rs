//! Identifier normalization.
//!
//! Turns free-form specimen-ID text into a [`CanonicalIdentifier`].
//!
//! # Accepted forms
//!
//! - Dotted: `E.1.3`, `e.01.3`, `B3.1` (the token attached to the letter is
//!   the first segment). Segments may have several digits.
//! - Legacy concatenated: `E12` means `E.1.2`. Without separators every digit
//!   is one segment, so a `0` digit (`E10`) is ambiguous and rejected.
//! - Either form may end in a `_MMDD` date suffix: `B3.1_0912`. A four-digit
//!   tail is only a date when it follows `_`.

use std::sync::LazyLock;

use regex::Regex;

use brood_model::{CanonicalIdentifier, DateSuffix, SetLabel};

use crate::error::{CoreError, MalformedReason, Result};

/// Core text followed by a `_MMDD` tail.
static DATE_SUFFIX_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)_([0-9]{4})$").expect("Invalid date suffix regex"));

/// Parse `raw` into a canonical identifier.
///
/// Returns the identifier and whether the input carried a date suffix.
///
/// # Errors
///
/// [`CoreError::MalformedIdentifier`] when the input has no set letter, no
/// numeric path, a bad date suffix, or an ambiguous concatenated path.
pub fn normalize(raw: &str) -> Result<(CanonicalIdentifier, bool)> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::malformed(raw, MalformedReason::Empty));
    }

    let (body, date_suffix) = split_date_suffix(raw, trimmed)?;
    let (set_label, rest) = split_set_label(raw, body)?;
    let path = parse_path(raw, rest)?;

    let has_date = date_suffix.is_some();
    let identifier = CanonicalIdentifier::new(set_label, path, date_suffix)?;
    Ok((identifier, has_date))
}

/// Canonical core text (`E.1.3`) of `raw`, dropping any date suffix.
pub fn normalize_core(raw: &str) -> Result<String> {
    normalize(raw).map(|(identifier, _)| identifier.to_string())
}

fn split_date_suffix<'a>(raw: &str, trimmed: &'a str) -> Result<(&'a str, Option<DateSuffix>)> {
    if let Some(captures) = DATE_SUFFIX_REGEX.captures(trimmed) {
        let body = captures.get(1).map_or("", |m| m.as_str()).trim_end();
        let digits = captures.get(2).map_or("", |m| m.as_str());
        if body.is_empty() {
            return Err(CoreError::malformed(raw, MalformedReason::MissingCore));
        }
        let suffix = DateSuffix::parse(digits).map_err(|_| {
            CoreError::malformed(raw, MalformedReason::BadDateSuffix(digits.to_string()))
        })?;
        return Ok((body, Some(suffix)));
    }
    if let Some((_, tail)) = trimmed.rsplit_once('_') {
        return Err(CoreError::malformed(
            raw,
            MalformedReason::BadDateSuffix(tail.to_string()),
        ));
    }
    Ok((trimmed, None))
}

fn split_set_label<'a>(raw: &str, body: &'a str) -> Result<(SetLabel, &'a str)> {
    let run_end = body
        .char_indices()
        .find(|(_, c)| !c.is_alphabetic())
        .map_or(body.len(), |(index, _)| index);
    let run = &body[..run_end];

    let mut letters = run.chars();
    let letter = match (letters.next(), letters.next()) {
        (None, _) => return Err(CoreError::malformed(raw, MalformedReason::MissingSetLetter)),
        (Some(letter), None) => letter,
        (Some(_), Some(_)) => {
            return Err(CoreError::malformed(
                raw,
                MalformedReason::MultiLetterSet(run.to_string()),
            ));
        }
    };
    let set_label = SetLabel::new(letter)
        .map_err(|_| CoreError::malformed(raw, MalformedReason::MultiLetterSet(run.to_string())))?;
    Ok((set_label, &body[run_end..]))
}

fn parse_path(raw: &str, rest: &str) -> Result<Vec<u32>> {
    let dotted_after_letter = rest.starts_with('.');
    let rest = rest.strip_prefix('.').unwrap_or(rest);
    if rest.is_empty() {
        return Err(CoreError::malformed(raw, MalformedReason::MissingPath));
    }
    if let Some(bad) = rest.chars().find(|c| !c.is_ascii_digit() && *c != '.') {
        return Err(CoreError::malformed(raw, MalformedReason::UnexpectedChar(bad)));
    }

    if !dotted_after_letter && !rest.contains('.') {
        return parse_concatenated(raw, rest);
    }

    rest.split('.')
        .map(|token| parse_segment(raw, token))
        .collect()
}

/// Legacy form: one digit per segment.
fn parse_concatenated(raw: &str, digits: &str) -> Result<Vec<u32>> {
    if digits.contains('0') {
        return Err(CoreError::malformed(
            raw,
            MalformedReason::AmbiguousConcatenation(digits.to_string()),
        ));
    }
    Ok(digits.chars().filter_map(|c| c.to_digit(10)).collect())
}

fn parse_segment(raw: &str, token: &str) -> Result<u32> {
    if token.is_empty() {
        return Err(CoreError::malformed(raw, MalformedReason::EmptySegment));
    }
    let significant = token.trim_start_matches('0');
    if significant.is_empty() {
        return Err(CoreError::malformed(
            raw,
            MalformedReason::ZeroSegment(token.to_string()),
        ));
    }
    significant
        .parse::<u32>()
        .map_err(|_| CoreError::malformed(raw, MalformedReason::SegmentOverflow(token.to_string())))
}
