//! Request pipeline: raw input → mother → child ID + decision.

use chrono::NaiveDate;
use tracing::{debug, error, info, info_span};

use brood_core::{
    CoreError, LineageSource, Result, next_child_id, resolve_date_suffix, resolve_mother,
};
use brood_model::{DecisionResult, SetLabel, Warning};
use brood_validate::RuleEngine;

/// One coding request from the technician.
#[derive(Debug, Clone)]
pub struct CodingRequest<'a> {
    /// Mother ID as typed, core (`E.1`) or full (`E.1_0804`).
    pub mother_input: &'a str,
    /// Explicit `MMDD` / `_MMDD` suffix for the child. Blank means today.
    pub date_suffix: Option<&'a str>,
    /// Lab-local date used when no suffix is given.
    pub today: NaiveDate,
}

/// Resolve the mother, suggest the next child ID, and decide whether the
/// line should be discarded.
///
/// The brood ordinal handed to the engine is the suggested child's index:
/// the child is that numbered brood of its mother.
///
/// # Errors
///
/// Malformed input, an unknown mother, or an invalid date suffix abort the
/// request before any decision is made.
pub fn plan_child<S>(
    source: &S,
    request: &CodingRequest<'_>,
    engine: &RuleEngine,
    known_sets: &[SetLabel],
) -> Result<DecisionResult>
where
    S: LineageSource + ?Sized,
{
    let span = info_span!("plan_child", input = request.mother_input);
    let _guard = span.enter();

    let mother = resolve_mother(source, request.mother_input)?;
    let existing_children = source.list_children(mother.full_id());
    let suffix = resolve_date_suffix(request.date_suffix, request.today)?;
    let child = next_child_id(&mother.identifier, &existing_children, Some(suffix), request.today)?;
    debug!(
        mother_id = mother.full_id(),
        children = existing_children.len(),
        "mother resolved"
    );

    let population = source.population();
    let mut decision = engine.decide(mother.record, &population, Some(child.last_segment()))?;

    let set_label = mother.identifier.set_label();
    if !set_label.is_known(known_sets) {
        decision.push_warning(Warning::UnknownSet { set_label });
    }

    info!(
        mother_id = mother.full_id(),
        child = %child.full_id(),
        discard = decision.discard,
        "coding request complete"
    );
    Ok(DecisionResult {
        mother_id: mother.full_id().to_string(),
        mother: mother.identifier.core(),
        suggested_child_id: child,
        existing_children,
        decision,
    })
}

/// Turn a failed request into a message for the technician.
///
/// Input problems name the mother as typed. An invariant violation is logged
/// at `error` and reported as an internal error.
pub fn request_error(error: CoreError, mother_input: &str) -> anyhow::Error {
    if error.is_user_facing() {
        let context = format!("code mother {}", mother_input.trim());
        return anyhow::Error::new(error).context(context);
    }
    error!(input = mother_input, %error, "invariant violation while coding");
    anyhow::Error::new(error).context("internal error, please report this")
}
