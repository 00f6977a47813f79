//! Resolve technician input to a mother record.

use tracing::debug;

use brood_model::{CanonicalIdentifier, LineageRecord};

use crate::error::{CoreError, Result};
use crate::normalize::normalize;
use crate::source::LineageSource;

/// A mother record matched from user input.
#[derive(Debug, Clone)]
pub struct ResolvedMother<'a> {
    pub record: &'a LineageRecord,
    /// Canonical identifier of the record, date suffix included.
    pub identifier: CanonicalIdentifier,
}

impl ResolvedMother<'_> {
    /// The record's full ID as stored.
    pub fn full_id(&self) -> &str {
        &self.record.mother_id
    }
}

/// Find the mother named by `raw`.
///
/// A core-only input (`E.1`) resolves to the most recent brood event of that
/// core. A full input (`E.1_0804`) resolves to that event, falling back to an
/// exact match on the stored ID.
///
/// # Errors
///
/// [`CoreError::MalformedIdentifier`] if `raw` does not parse and
/// [`CoreError::NotFound`] if no record matches.
pub fn resolve_mother<'a, S>(source: &'a S, raw: &str) -> Result<ResolvedMother<'a>>
where
    S: LineageSource + ?Sized,
{
    let (identifier, has_date) = normalize(raw)?;

    let record = match identifier.date_suffix() {
        Some(suffix) if has_date => source
            .lookup_by_full_id(&identifier, suffix)
            .or_else(|| source.lookup_exact(raw)),
        _ => source.lookup_latest_by_core(identifier.set_label(), identifier.path()),
    };
    let Some(record) = record else {
        debug!(input = raw, core = %identifier, "mother not found");
        return Err(CoreError::NotFound {
            input: raw.trim().to_string(),
        });
    };

    let (identifier, _) = normalize(&record.mother_id)?;
    debug!(input = raw, mother_id = %record.mother_id, "resolved mother");
    Ok(ResolvedMother { record, identifier })
}
