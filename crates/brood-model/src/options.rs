//! Configuration options for the discard decision.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::SetLabel;

/// Thresholds used by the discard rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionPolicy {
    /// A mother at this generation depth or deeper is discarded.
    pub generation_limit: usize,
    /// Population limit for sets without an explicit entry.
    pub default_population_limit: usize,
    /// Per-set population limits. A set is over threshold when its alive
    /// count is strictly greater than its limit.
    pub population_limits: BTreeMap<SetLabel, usize>,
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        let mut population_limits = BTreeMap::new();
        population_limits.insert(SetLabel('E'), 100);
        Self {
            generation_limit: 3,
            default_population_limit: 50,
            population_limits,
        }
    }
}

impl DecisionPolicy {
    pub fn population_limit(&self, set_label: SetLabel) -> usize {
        self.population_limits
            .get(&set_label)
            .copied()
            .unwrap_or(self.default_population_limit)
    }

    #[must_use]
    pub fn with_population_limit(mut self, set_label: SetLabel, limit: usize) -> Self {
        self.population_limits.insert(set_label, limit);
        self
    }

    #[must_use]
    pub fn with_generation_limit(mut self, generation_limit: usize) -> Self {
        self.generation_limit = generation_limit;
        self
    }
}

/// Sets the lab actually keeps. Other letters parse but are flagged.
pub fn default_known_sets() -> Vec<SetLabel> {
    vec![SetLabel('E'), SetLabel('A'), SetLabel('B')]
}
