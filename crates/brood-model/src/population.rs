use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::SetLabel;

/// Alive specimen counts per set at decision time.
///
/// The counts are materialized by the collaborator; a set with no entry
/// counts as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    counts: BTreeMap<SetLabel, usize>,
}

impl PopulationSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_count(mut self, set_label: SetLabel, alive: usize) -> Self {
        self.counts.insert(set_label, alive);
        self
    }

    pub fn insert(&mut self, set_label: SetLabel, alive: usize) {
        self.counts.insert(set_label, alive);
    }

    pub fn count_for(&self, set_label: SetLabel) -> usize {
        self.counts.get(&set_label).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SetLabel, usize)> + '_ {
        self.counts.iter().map(|(label, count)| (*label, *count))
    }
}

impl FromIterator<(SetLabel, usize)> for PopulationSnapshot {
    fn from_iter<I: IntoIterator<Item = (SetLabel, usize)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
