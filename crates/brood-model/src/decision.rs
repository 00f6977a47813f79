//! Discard decision outputs.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{CanonicalIdentifier, SetLabel};

/// Why a line should be discarded. Each variant carries only its needed data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum DiscardReason {
    /// The mother is already at or past the generation limit.
    GenerationLimit { generation: usize },
    /// The mother's set holds more alive specimens than its threshold.
    PopulationThreshold {
        set_label: SetLabel,
        alive: usize,
        limit: usize,
    },
    /// The mother has a death date or a dead status.
    MotherDeceased,
}

impl fmt::Display for DiscardReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GenerationLimit { generation } => {
                write!(f, "generation limit reached (Gen {generation})")
            }
            Self::PopulationThreshold {
                set_label, alive, ..
            } => write!(
                f,
                "set {set_label} population exceeds threshold ({alive} alive)"
            ),
            Self::MotherDeceased => f.write_str("mother is no longer alive"),
        }
    }
}

/// Advisory notes that never affect the discard flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Note {
    ThirdBroodOptimal,
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThirdBroodOptimal => f.write_str("third broods are optimal for experimental use."),
        }
    }
}

/// Structural warnings surfaced to the technician.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Warning {
    /// The selected mother is dead; the technician should double-check the ID.
    MotherDeceased { mother_id: String },
    /// The set letter parsed fine but is not one the lab uses.
    UnknownSet { set_label: SetLabel },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MotherDeceased { mother_id } => write!(
                f,
                "mother {mother_id} is dead; verify the mother identifier"
            ),
            Self::UnknownSet { set_label } => {
                write!(f, "set {set_label} is not one of the lab's known sets")
            }
        }
    }
}

/// Output of the discard decision engine.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    pub discard: bool,
    /// Triggered rules, in rule order.
    pub reasons: Vec<DiscardReason>,
    pub notes: Vec<Note>,
    pub warnings: Vec<Warning>,
}

impl Decision {
    /// Record a triggered rule. Any reason marks the line for discard.
    pub fn push_reason(&mut self, reason: DiscardReason) {
        self.discard = true;
        self.reasons.push(reason);
    }

    pub fn push_note(&mut self, note: Note) {
        self.notes.push(note);
    }

    pub fn push_warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn has_warning(&self, predicate: impl Fn(&Warning) -> bool) -> bool {
        self.warnings.iter().any(predicate)
    }

    /// Human-readable reason strings, in rule order.
    pub fn reason_messages(&self) -> Vec<String> {
        self.reasons.iter().map(ToString::to_string).collect()
    }
}

/// Result bundle returned to the UI layer for one coding request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionResult {
    /// Full ID of the resolved mother record.
    pub mother_id: String,
    pub mother: CanonicalIdentifier,
    /// Suggested child identifier, date suffix resolved.
    pub suggested_child_id: CanonicalIdentifier,
    /// Existing direct children of the mother.
    pub existing_children: Vec<CanonicalIdentifier>,
    #[serde(flatten)]
    pub decision: Decision,
}

impl DecisionResult {
    pub fn discard(&self) -> bool {
        self.decision.discard
    }

    pub fn suggested_full_id(&self) -> String {
        self.suggested_child_id.full_id()
    }
}
