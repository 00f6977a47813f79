//! In-memory lineage index over a snapshot of brood records.
//!
//! The index is built once from the full record list and then answers the
//! [`LineageSource`] lookups without touching the underlying data again.

use std::collections::{BTreeSet, HashMap};

use tracing::{debug, warn};

use brood_model::{CanonicalIdentifier, DateSuffix, LineageRecord, SetLabel};

use crate::normalize::normalize;
use crate::source::LineageSource;

/// Read-only lineage index.
#[derive(Debug, Default)]
pub struct LineageIndex {
    records: Vec<LineageRecord>,
    /// Parsed identifier of each record, `None` when `mother_id` is malformed.
    identifiers: Vec<Option<CanonicalIdentifier>>,
    /// Exact `mother_id` text to record position.
    by_full: HashMap<String, usize>,
    /// Core identifier to its brood events keyed by date suffix.
    by_core_suffix: HashMap<CanonicalIdentifier, HashMap<DateSuffix, usize>>,
    /// Core identifier to its most recent brood event.
    core_latest: HashMap<CanonicalIdentifier, usize>,
    /// Canonical full ID of the origin mother to child positions.
    children_by_origin: HashMap<String, Vec<usize>>,
    skipped: usize,
}

impl LineageIndex {
    /// Build the index. Records whose `mother_id` cannot be normalized stay
    /// reachable by exact ID but are left out of core lookups.
    pub fn new(records: Vec<LineageRecord>) -> Self {
        let mut index = Self {
            identifiers: Vec::with_capacity(records.len()),
            ..Self::default()
        };

        for (position, record) in records.iter().enumerate() {
            index
                .by_full
                .entry(record.mother_id.trim().to_string())
                .or_insert(position);

            if let Some(origin) = record.origin_mother_id.as_deref() {
                let origin = origin.trim();
                if !origin.is_empty() {
                    index
                        .children_by_origin
                        .entry(origin_key(origin))
                        .or_default()
                        .push(position);
                }
            }

            let identifier = match normalize(&record.mother_id) {
                Ok((identifier, _)) => identifier,
                Err(error) => {
                    warn!(mother_id = %record.mother_id, %error, "skipping malformed mother id");
                    index.skipped += 1;
                    index.identifiers.push(None);
                    continue;
                }
            };
            index.insert_core(&identifier, position);
            index.identifiers.push(Some(identifier));
        }

        index.records = records;
        debug!(
            records = index.records.len(),
            cores = index.core_latest.len(),
            skipped = index.skipped,
            "lineage index built"
        );
        index
    }

    fn insert_core(&mut self, identifier: &CanonicalIdentifier, position: usize) {
        let core = identifier.core();
        let suffix = identifier.date_suffix().cloned();
        if let Some(suffix) = &suffix {
            self.by_core_suffix
                .entry(core.clone())
                .or_default()
                .entry(suffix.clone())
                .or_insert(position);
        }

        let rank = suffix.as_ref().map(DateSuffix::ordinal);
        match self.core_latest.get(&core) {
            Some(&best) if self.rank_of(best) >= rank => {}
            _ => {
                self.core_latest.insert(core, position);
            }
        }
    }

    /// Records without a suffix rank below every dated record.
    fn rank_of(&self, position: usize) -> Option<u32> {
        self.identifiers
            .get(position)
            .and_then(Option::as_ref)
            .and_then(CanonicalIdentifier::date_suffix)
            .map(DateSuffix::ordinal)
    }

    /// Record with exactly this `mother_id` text.
    pub fn get(&self, mother_id: &str) -> Option<&LineageRecord> {
        self.by_full
            .get(mother_id.trim())
            .and_then(|position| self.records.get(*position))
    }

    pub fn records(&self) -> &[LineageRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose `mother_id` could not be normalized.
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Set of a record: the explicit column when present, otherwise the
    /// letter of its identifier.
    fn set_label_at(&self, position: usize) -> Option<SetLabel> {
        let record = self.records.get(position)?;
        record.set_label.or_else(|| {
            self.identifiers
                .get(position)
                .and_then(Option::as_ref)
                .map(CanonicalIdentifier::set_label)
        })
    }
}

impl LineageSource for LineageIndex {
    fn lookup_latest_by_core(&self, set_label: SetLabel, path: &[u32]) -> Option<&LineageRecord> {
        let core = CanonicalIdentifier::new(set_label, path.to_vec(), None).ok()?;
        self.core_latest
            .get(&core)
            .and_then(|position| self.records.get(*position))
    }

    fn lookup_by_full_id(
        &self,
        identifier: &CanonicalIdentifier,
        date_suffix: &DateSuffix,
    ) -> Option<&LineageRecord> {
        self.by_core_suffix
            .get(&identifier.core())
            .and_then(|events| events.get(date_suffix))
            .and_then(|position| self.records.get(*position))
    }

    fn lookup_exact(&self, mother_id: &str) -> Option<&LineageRecord> {
        self.get(mother_id)
    }

    fn list_children(&self, parent_full_id: &str) -> Vec<CanonicalIdentifier> {
        let Some(positions) = self.children_by_origin.get(&origin_key(parent_full_id)) else {
            return Vec::new();
        };
        positions
            .iter()
            .filter_map(|position| self.identifiers.get(*position).cloned().flatten())
            .collect()
    }

    fn alive_count_by_set(&self, set_label: SetLabel) -> usize {
        (0..self.records.len())
            .filter(|position| self.set_label_at(*position) == Some(set_label))
            .filter(|position| self.records[*position].is_alive())
            .count()
    }

    fn set_labels(&self) -> Vec<SetLabel> {
        let labels: BTreeSet<SetLabel> = (0..self.records.len())
            .filter_map(|position| self.set_label_at(position))
            .collect();
        labels.into_iter().collect()
    }
}

/// Origins are matched on their canonical full ID so that `E1_0801` and
/// `E.1_0801` refer to the same mother. Unparseable origins match verbatim.
fn origin_key(origin: &str) -> String {
    match normalize(origin) {
        Ok((identifier, _)) => identifier.full_id(),
        Err(_) => origin.trim().to_string(),
    }
}
