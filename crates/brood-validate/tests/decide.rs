//! Tests for the discard decision engine.

use brood_core::CoreError;
use brood_model::{
    DecisionPolicy, DiscardReason, LineageRecord, Note, PopulationSnapshot, SetLabel, Warning,
};
use brood_validate::{DiscardRule, RuleEngine, decide};

fn label(letter: char) -> SetLabel {
    SetLabel::new(letter).unwrap()
}

fn alive(mother_id: &str) -> LineageRecord {
    LineageRecord::new(mother_id).with_status("alive")
}

fn population(letter: char, alive: usize) -> PopulationSnapshot {
    PopulationSnapshot::new().with_count(label(letter), alive)
}

#[test]
fn healthy_mother_is_kept() {
    let decision = decide(&alive("E.1.2_0801"), &population('E', 40), Some(1)).unwrap();
    assert!(!decision.discard);
    assert!(decision.reasons.is_empty());
    assert!(decision.notes.is_empty());
    assert!(decision.warnings.is_empty());
}

#[test]
fn generation_three_reaches_the_limit() {
    let decision = decide(&alive("E.1.2.3_0801"), &population('E', 10), None).unwrap();
    assert!(decision.discard);
    assert_eq!(
        decision.reasons,
        vec![DiscardReason::GenerationLimit { generation: 3 }]
    );
    assert!(decision.reason_messages()[0].contains("Gen 3"));
}

#[test]
fn generation_two_is_below_the_limit() {
    let decision = decide(&alive("E.1.2_0801"), &population('E', 10), None).unwrap();
    assert!(!decision.discard);
}

#[test]
fn population_threshold_is_strict() {
    let over = decide(&alive("E.1_0801"), &population('E', 101), None).unwrap();
    assert!(over.discard);
    assert_eq!(
        over.reason_messages(),
        vec!["set E population exceeds threshold (101 alive)".to_string()]
    );

    let at_limit = decide(&alive("E.1_0801"), &population('E', 100), None).unwrap();
    assert!(!at_limit.discard);
}

#[test]
fn other_sets_use_the_default_limit() {
    let over = decide(&alive("A.1_0801"), &population('A', 51), None).unwrap();
    assert!(over.discard);
    let at_limit = decide(&alive("A.1_0801"), &population('A', 50), None).unwrap();
    assert!(!at_limit.discard);
}

#[test]
fn record_set_column_drives_the_threshold() {
    let record = alive("E.1_0801").with_set_label(label('A'));
    let decision = decide(&record, &population('A', 60), None).unwrap();
    assert!(matches!(
        decision.reasons.as_slice(),
        [DiscardReason::PopulationThreshold { limit: 50, .. }]
    ));
}

#[test]
fn dead_mother_always_warns_and_discards() {
    for record in [
        LineageRecord::new("E.1_0801").with_status("dead"),
        LineageRecord::new("E.1_0801").with_death_date("2025-08-20"),
        LineageRecord::new("E.1_0801")
            .with_status("alive")
            .with_death_date("2025-08-20"),
    ] {
        let decision = decide(&record, &population('E', 5), None).unwrap();
        assert!(decision.discard);
        assert_eq!(decision.reasons, vec![DiscardReason::MotherDeceased]);
        assert_eq!(
            decision.warnings,
            vec![Warning::MotherDeceased {
                mother_id: "E.1_0801".to_string()
            }]
        );
    }
}

#[test]
fn all_triggered_rules_are_reported_in_order() {
    let record = LineageRecord::new("E.1.1.1_0801").with_status("deceased");
    let decision = decide(&record, &population('E', 150), Some(3)).unwrap();
    assert!(decision.discard);
    assert_eq!(
        decision.reason_messages(),
        vec![
            "generation limit reached (Gen 3)".to_string(),
            "set E population exceeds threshold (150 alive)".to_string(),
            "mother is no longer alive".to_string(),
        ]
    );
    assert_eq!(decision.warnings.len(), 1);
    assert_eq!(decision.notes, vec![Note::ThirdBroodOptimal]);
}

#[test]
fn third_brood_note_does_not_discard() {
    let decision = decide(&alive("B.3_0801"), &population('B', 1), Some(3)).unwrap();
    assert!(!decision.discard);
    assert_eq!(decision.notes, vec![Note::ThirdBroodOptimal]);

    let second = decide(&alive("B.3_0801"), &population('B', 1), Some(2)).unwrap();
    assert!(second.notes.is_empty());
}

#[test]
fn malformed_mother_aborts_before_rules() {
    let error = decide(&alive("???"), &population('E', 500), None).unwrap_err();
    assert!(matches!(error, CoreError::MalformedIdentifier { .. }));
}

#[test]
fn custom_policy_changes_thresholds() {
    let policy = DecisionPolicy::default()
        .with_generation_limit(4)
        .with_population_limit(label('B'), 10);
    let engine = RuleEngine::new(policy);
    assert_eq!(engine.rules().first(), Some(&DiscardRule::GenerationLimit));

    let decision = engine
        .decide(&alive("B.1.1.1_0801"), &population('B', 11), None)
        .unwrap();
    assert_eq!(
        decision.reasons,
        vec![DiscardReason::PopulationThreshold {
            set_label: label('B'),
            alive: 11,
            limit: 10,
        }]
    );
}

#[test]
fn decision_serializes_reasons_by_rule() {
    let decision = decide(&alive("E.1.2.3_0801"), &population('E', 0), None).unwrap();
    let json = serde_json::to_value(&decision).unwrap();
    assert_eq!(json["discard"], true);
    assert_eq!(json["reasons"][0]["rule"], "generation_limit");
    assert_eq!(json["reasons"][0]["generation"], 3);
}
