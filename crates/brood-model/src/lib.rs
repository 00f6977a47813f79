//! Value types shared by the brood coding crates.
//!
//! Everything here is an immutable value: identifiers, lineage records as
//! supplied by the data collaborator, population counts, and the decision
//! bundle returned to the UI layer.

pub mod decision;
pub mod error;
pub mod ids;
pub mod lineage;
pub mod options;
pub mod population;

pub use decision::{Decision, DecisionResult, DiscardReason, Note, Warning};
pub use error::{ModelError, Result};
pub use ids::{CanonicalIdentifier, DateSuffix, SetLabel};
pub use lineage::{LifeStatus, LineageRecord};
pub use options::{DecisionPolicy, default_known_sets};
pub use population::PopulationSnapshot;
