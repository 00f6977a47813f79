//! The read-only lineage collaborator interface.

use brood_model::{CanonicalIdentifier, DateSuffix, LineageRecord, PopulationSnapshot, SetLabel};

/// Lookups the core makes against the lineage data. Implementations never
/// write and must present an immutable snapshot for the duration of a call.
pub trait LineageSource {
    /// Most recent record of a core identifier, by numeric date suffix.
    fn lookup_latest_by_core(&self, set_label: SetLabel, path: &[u32]) -> Option<&LineageRecord>;

    /// Record for one brood event of a core identifier.
    fn lookup_by_full_id(
        &self,
        identifier: &CanonicalIdentifier,
        date_suffix: &DateSuffix,
    ) -> Option<&LineageRecord>;

    /// Record whose stored ID is exactly `mother_id`.
    fn lookup_exact(&self, _mother_id: &str) -> Option<&LineageRecord> {
        None
    }

    /// Identifiers of records whose origin is `parent_full_id`.
    fn list_children(&self, parent_full_id: &str) -> Vec<CanonicalIdentifier>;

    /// Alive specimens in a set: no death date and status not dead.
    fn alive_count_by_set(&self, set_label: SetLabel) -> usize;

    /// Sets present in the data.
    fn set_labels(&self) -> Vec<SetLabel>;

    /// Alive counts for every set present in the data.
    fn population(&self) -> PopulationSnapshot {
        self.set_labels()
            .into_iter()
            .map(|label| (label, self.alive_count_by_set(label)))
            .collect()
    }
}
