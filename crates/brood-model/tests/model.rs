//! Tests for brood-model types.

use brood_model::{
    CanonicalIdentifier, DateSuffix, Decision, DecisionPolicy, DecisionResult, DiscardReason,
    LineageRecord, Note, PopulationSnapshot, SetLabel, Warning, default_known_sets,
};

fn label(letter: char) -> SetLabel {
    SetLabel::new(letter).unwrap()
}

#[test]
fn set_label_parse_uppercases() {
    assert_eq!(SetLabel::parse(" e ").unwrap(), label('E'));
    assert!(SetLabel::parse("EA").is_err());
    assert!(SetLabel::parse("").is_err());
    assert!(SetLabel::parse("1").is_err());
}

#[test]
fn known_sets_default_to_lab_sets() {
    let known = default_known_sets();
    assert!(label('E').is_known(&known));
    assert!(label('b').is_known(&known));
    assert!(!label('Z').is_known(&known));
}

#[test]
fn default_policy_thresholds() {
    let policy = DecisionPolicy::default();
    assert_eq!(policy.generation_limit, 3);
    assert_eq!(policy.population_limit(label('E')), 100);
    assert_eq!(policy.population_limit(label('A')), 50);
    assert_eq!(policy.population_limit(label('Q')), 50);
}

#[test]
fn population_snapshot_defaults_to_zero() {
    let snapshot = PopulationSnapshot::new().with_count(label('E'), 7);
    assert_eq!(snapshot.count_for(label('E')), 7);
    assert_eq!(snapshot.count_for(label('A')), 0);
}

#[test]
fn lineage_record_alive_predicate() {
    let alive = LineageRecord::new("E.1_0801").with_status("alive");
    let dead_by_status = LineageRecord::new("E.1_0801").with_status("Died");
    let dead_by_date = LineageRecord::new("E.1_0801").with_death_date("2025-08-02");
    assert!(alive.is_alive());
    assert!(!dead_by_status.is_alive());
    assert!(!dead_by_date.is_alive());
    assert!(dead_by_date.has_death_date());
}

#[test]
fn reason_messages_follow_rule_order() {
    let mut decision = Decision::default();
    assert!(!decision.discard);
    decision.push_reason(DiscardReason::GenerationLimit { generation: 3 });
    decision.push_reason(DiscardReason::PopulationThreshold {
        set_label: label('E'),
        alive: 101,
        limit: 100,
    });
    decision.push_reason(DiscardReason::MotherDeceased);
    decision.push_note(Note::ThirdBroodOptimal);
    assert!(decision.discard);
    assert_eq!(
        decision.reason_messages(),
        vec![
            "generation limit reached (Gen 3)".to_string(),
            "set E population exceeds threshold (101 alive)".to_string(),
            "mother is no longer alive".to_string(),
        ]
    );
    assert_eq!(
        Note::ThirdBroodOptimal.to_string(),
        "third broods are optimal for experimental use."
    );
}

#[test]
fn decision_result_serializes_flattened() {
    let mother = CanonicalIdentifier::new(label('A'), vec![2], None).unwrap();
    let child = CanonicalIdentifier::new(
        label('A'),
        vec![2, 1],
        Some(DateSuffix::parse("0912").unwrap()),
    )
    .unwrap();
    let mut decision = Decision::default();
    decision.push_warning(Warning::UnknownSet {
        set_label: label('A'),
    });
    let result = DecisionResult {
        mother_id: "A.2_0801".to_string(),
        mother,
        suggested_child_id: child,
        existing_children: vec![],
        decision,
    };
    assert_eq!(result.suggested_full_id(), "A.2.1_0912");

    let json = serde_json::to_value(&result).expect("serialize result");
    assert_eq!(json["discard"], false);
    assert_eq!(json["warnings"][0]["kind"], "unknown_set");
    assert_eq!(json["suggested_child_id"]["set_label"], "A");
    assert_eq!(json["suggested_child_id"]["date_suffix"], "0912");

    let round: DecisionResult = serde_json::from_value(json).expect("deserialize result");
    assert_eq!(round, result);
}
