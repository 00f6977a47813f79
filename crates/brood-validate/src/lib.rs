//! Discard decision engine.
//!
//! Given a mother record, the alive population of its set, and the brood
//! ordinal of the prospective child, the engine reports whether the line
//! should be discarded and why.

mod engine;
pub mod rules;

pub use engine::{RuleEngine, decide};
pub use rules::{DiscardRule, RULE_ORDER, RuleInput};
