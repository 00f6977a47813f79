//! The fixed discard rule set.
//!
//! Rules are evaluated independently and in order. Discard rules contribute
//! a reason; the advisory rule only adds a note.

use brood_model::{Decision, DecisionPolicy, DiscardReason, Note, SetLabel, Warning};

/// Facts about the mother that the rules inspect.
#[derive(Debug, Clone)]
pub struct RuleInput<'a> {
    pub mother_id: &'a str,
    pub set_label: SetLabel,
    /// Generation depth of the mother (path length).
    pub generation: usize,
    pub alive_in_set: usize,
    pub mother_dead: bool,
    /// Brood ordinal of the prospective child.
    pub brood_ordinal: Option<u32>,
}

/// One rule of the decision set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardRule {
    /// Discard once the mother reaches the generation limit.
    GenerationLimit,
    /// Discard when the set holds more alive specimens than its limit.
    PopulationThreshold,
    /// Discard when the mother is dead; always surfaces a warning.
    MotherDeceased,
    /// Note that third broods suit experiments. Never discards.
    ExperimentalOptimum,
}

/// Evaluation order.
pub const RULE_ORDER: [DiscardRule; 4] = [
    DiscardRule::GenerationLimit,
    DiscardRule::PopulationThreshold,
    DiscardRule::MotherDeceased,
    DiscardRule::ExperimentalOptimum,
];

/// Brood ordinal that earns the experimental note.
const OPTIMAL_BROOD: u32 = 3;

impl DiscardRule {
    pub fn name(&self) -> &'static str {
        match self {
            Self::GenerationLimit => "generation_limit",
            Self::PopulationThreshold => "population_threshold",
            Self::MotherDeceased => "mother_deceased",
            Self::ExperimentalOptimum => "experimental_optimum",
        }
    }

    /// Apply the rule to `decision`. Returns true if the rule fired.
    pub fn apply(
        &self,
        input: &RuleInput<'_>,
        policy: &DecisionPolicy,
        decision: &mut Decision,
    ) -> bool {
        match self {
            Self::GenerationLimit => {
                if input.generation < policy.generation_limit {
                    return false;
                }
                decision.push_reason(DiscardReason::GenerationLimit {
                    generation: input.generation,
                });
            }
            Self::PopulationThreshold => {
                let limit = policy.population_limit(input.set_label);
                if input.alive_in_set <= limit {
                    return false;
                }
                decision.push_reason(DiscardReason::PopulationThreshold {
                    set_label: input.set_label,
                    alive: input.alive_in_set,
                    limit,
                });
            }
            Self::MotherDeceased => {
                if !input.mother_dead {
                    return false;
                }
                decision.push_reason(DiscardReason::MotherDeceased);
                decision.push_warning(Warning::MotherDeceased {
                    mother_id: input.mother_id.to_string(),
                });
            }
            Self::ExperimentalOptimum => {
                if input.brood_ordinal != Some(OPTIMAL_BROOD) {
                    return false;
                }
                decision.push_note(Note::ThirdBroodOptimal);
            }
        }
        true
    }
}
