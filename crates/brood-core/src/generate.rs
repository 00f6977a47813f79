//! Child identifier generation.

use chrono::NaiveDate;
use tracing::{debug, error};

use brood_model::{CanonicalIdentifier, DateSuffix};

use crate::error::{CoreError, Result};

/// Produce the next child identifier of `parent`.
///
/// The child index is one more than the largest index already used by a
/// direct child of `parent`, so a removed middle child's slot is never
/// reused. Identifiers in `existing_children` that are not direct children
/// (other sets, grandchildren) are ignored.
///
/// The explicit `date_suffix` wins; otherwise `today` is formatted as `MMDD`.
///
/// # Errors
///
/// [`CoreError::InvalidParent`] if the parent path is empty or the next index
/// would overflow.
pub fn next_child_id<'a, I>(
    parent: &CanonicalIdentifier,
    existing_children: I,
    date_suffix: Option<DateSuffix>,
    today: NaiveDate,
) -> Result<CanonicalIdentifier>
where
    I: IntoIterator<Item = &'a CanonicalIdentifier>,
{
    if parent.path().is_empty() {
        error!(parent = %parent, "parent identifier has an empty path");
        return Err(invalid_parent(parent, "empty path"));
    }

    let highest = existing_children
        .into_iter()
        .filter(|child| child.is_child_of(parent))
        .map(CanonicalIdentifier::last_segment)
        .max()
        .unwrap_or(0);
    let Some(next_index) = highest.checked_add(1) else {
        error!(parent = %parent, highest, "child index overflow");
        return Err(invalid_parent(parent, "child index overflow"));
    };

    let mut path = parent.path().to_vec();
    path.push(next_index);
    let suffix = date_suffix.unwrap_or_else(|| DateSuffix::from_date(today));
    let child = CanonicalIdentifier::new(parent.set_label(), path, Some(suffix))
        .map_err(|err| invalid_parent(parent, &err.to_string()))?;

    debug!(parent = %parent, child = %child.full_id(), next_index, "generated child id");
    Ok(child)
}

fn invalid_parent(parent: &CanonicalIdentifier, message: &str) -> CoreError {
    CoreError::InvalidParent {
        parent: parent.clone(),
        message: message.to_string(),
    }
}
