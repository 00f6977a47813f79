//! Rule engine for discard decisions.
//!
//! The engine holds an ordered rule list and a [`DecisionPolicy`]. Every rule
//! is evaluated on every call; a decision is only returned once all of them
//! have run.

use tracing::debug;

use brood_core::{Result, normalize};
use brood_model::{Decision, DecisionPolicy, LineageRecord, PopulationSnapshot};

use crate::rules::{DiscardRule, RULE_ORDER, RuleInput};

/// Evaluates the discard rules against one mother.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    policy: DecisionPolicy,
    rules: Vec<DiscardRule>,
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new(DecisionPolicy::default())
    }
}

impl RuleEngine {
    /// Create an engine with the standard rule order.
    pub fn new(policy: DecisionPolicy) -> Self {
        Self {
            policy,
            rules: RULE_ORDER.to_vec(),
        }
    }

    pub fn policy(&self) -> &DecisionPolicy {
        &self.policy
    }

    pub fn rules(&self) -> &[DiscardRule] {
        &self.rules
    }

    /// Decide whether the line continuing from `parent` should be discarded.
    ///
    /// The set used for the population rule is the record's set column, or the
    /// identifier's letter when the column is blank.
    ///
    /// # Errors
    ///
    /// Returns a malformed-identifier error if `parent.mother_id` does not
    /// parse. No rule runs in that case.
    pub fn decide(
        &self,
        parent: &LineageRecord,
        population: &PopulationSnapshot,
        brood_ordinal: Option<u32>,
    ) -> Result<Decision> {
        let (identifier, _) = normalize(&parent.mother_id)?;
        let set_label = parent.set_label.unwrap_or(identifier.set_label());
        let input = RuleInput {
            mother_id: &parent.mother_id,
            set_label,
            generation: identifier.generation(),
            alive_in_set: population.count_for(set_label),
            mother_dead: !parent.is_alive(),
            brood_ordinal,
        };

        let mut decision = Decision::default();
        for rule in &self.rules {
            if rule.apply(&input, &self.policy, &mut decision) {
                debug!(
                    rule = rule.name(),
                    mother_id = %parent.mother_id,
                    "rule triggered"
                );
            }
        }
        debug!(
            mother_id = %parent.mother_id,
            discard = decision.discard,
            reasons = decision.reasons.len(),
            "decision complete"
        );
        Ok(decision)
    }
}

/// Decide with the default policy.
///
/// # Errors
///
/// See [`RuleEngine::decide`].
pub fn decide(
    parent: &LineageRecord,
    population: &PopulationSnapshot,
    brood_ordinal: Option<u32>,
) -> Result<Decision> {
    RuleEngine::default().decide(parent, population, brood_ordinal)
}
