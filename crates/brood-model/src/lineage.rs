//! Lineage records as supplied by the data collaborator.

use serde::{Deserialize, Serialize};

use crate::SetLabel;

/// Status text values that mark a specimen as dead.
const DEAD_STATUSES: &[&str] = &["dead", "deceased", "died"];

/// Alive/dead status derived from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LifeStatus {
    Alive,
    Dead,
}

impl LifeStatus {
    /// Derive the status from the free-text status column and the death date.
    ///
    /// Dead wins if either field signals death.
    pub fn derive(status: Option<&str>, death_date: Option<&str>) -> Self {
        let has_death_date = death_date.is_some_and(|value| !value.trim().is_empty());
        let status_dead = status.is_some_and(|value| {
            let normalized = value.trim().to_lowercase();
            DEAD_STATUSES.contains(&normalized.as_str())
        });
        if has_death_date || status_dead {
            Self::Dead
        } else {
            Self::Alive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Alive => "alive",
            Self::Dead => "dead",
        }
    }
}

/// One row of the broods table: a mother specimen at one brood event.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineageRecord {
    /// Full ID as stored, e.g. `E.1.3_0912`. Not necessarily canonical.
    pub mother_id: String,
    /// Full ID of the mother this specimen was born from.
    pub origin_mother_id: Option<String>,
    pub set_label: Option<SetLabel>,
    /// Free-text status column (`alive`, `dead`, `deceased`, ...).
    pub status: Option<String>,
    pub birth_date: Option<String>,
    pub death_date: Option<String>,
    /// Which brood of its mother this specimen came from (1st, 2nd, ...).
    pub brood_ordinal: Option<u32>,
    pub assigned_person: Option<String>,
    pub notes: Option<String>,
}

impl LineageRecord {
    pub fn new(mother_id: impl Into<String>) -> Self {
        Self {
            mother_id: mother_id.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_set_label(mut self, set_label: SetLabel) -> Self {
        self.set_label = Some(set_label);
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    #[must_use]
    pub fn with_death_date(mut self, death_date: impl Into<String>) -> Self {
        self.death_date = Some(death_date.into());
        self
    }

    #[must_use]
    pub fn with_origin(mut self, origin_mother_id: impl Into<String>) -> Self {
        self.origin_mother_id = Some(origin_mother_id.into());
        self
    }

    #[must_use]
    pub fn with_brood_ordinal(mut self, brood_ordinal: u32) -> Self {
        self.brood_ordinal = Some(brood_ordinal);
        self
    }

    #[must_use]
    pub fn with_assigned_person(mut self, assigned_person: impl Into<String>) -> Self {
        self.assigned_person = Some(assigned_person.into());
        self
    }

    pub fn life_status(&self) -> LifeStatus {
        LifeStatus::derive(self.status.as_deref(), self.death_date.as_deref())
    }

    /// The predicate population counts rely on: no death date and a status
    /// that does not mark the specimen dead.
    pub fn is_alive(&self) -> bool {
        self.life_status() == LifeStatus::Alive
    }

    pub fn has_death_date(&self) -> bool {
        self.death_date
            .as_deref()
            .is_some_and(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_wins_over_alive_status() {
        assert_eq!(
            LifeStatus::derive(Some("alive"), Some("2025-08-01")),
            LifeStatus::Dead
        );
        assert_eq!(LifeStatus::derive(Some(" Deceased "), None), LifeStatus::Dead);
        assert_eq!(LifeStatus::derive(Some(""), Some("  ")), LifeStatus::Alive);
        assert_eq!(LifeStatus::derive(None, None), LifeStatus::Alive);
    }
}
