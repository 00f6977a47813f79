//! Tests for identifier normalization.

use brood_core::{CoreError, MalformedReason, normalize, normalize_core};
use proptest::prelude::*;

#[test]
fn legacy_lowercase_and_dotted_forms_agree() {
    let (upper, _) = normalize("E1").unwrap();
    let (lower, _) = normalize("e1").unwrap();
    let (dotted, _) = normalize("E.01").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(upper, dotted);
    assert_eq!(upper.to_string(), "E.1");
}

#[test]
fn concatenated_digits_split_one_per_segment() {
    let (concatenated, has_date) = normalize("E12").unwrap();
    let (dotted, _) = normalize("E.1.2").unwrap();
    assert!(!has_date);
    assert_eq!(concatenated, dotted);
    assert_eq!(concatenated.path(), &[1, 2]);
}

#[test]
fn date_suffix_is_split_off() {
    let (identifier, has_date) = normalize("B3.1_0912").unwrap();
    assert!(has_date);
    assert_eq!(identifier.to_string(), "B.3.1");
    assert_eq!(identifier.date_suffix().map(|s| s.as_str()), Some("0912"));
    assert_eq!(identifier.full_id(), "B.3.1_0912");
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(normalize_core("  a.2.10  ").unwrap(), "A.2.10");
}

#[test]
fn empty_input_is_malformed() {
    let error = normalize("").unwrap_err();
    assert!(matches!(
        error,
        CoreError::MalformedIdentifier {
            reason: MalformedReason::Empty,
            ..
        }
    ));
    assert!(error.is_user_facing());
}

#[test]
fn missing_letter_or_path_is_malformed() {
    assert!(matches!(
        normalize("1.2"),
        Err(CoreError::MalformedIdentifier {
            reason: MalformedReason::MissingSetLetter,
            ..
        })
    ));
    assert!(matches!(
        normalize("E_0912"),
        Err(CoreError::MalformedIdentifier {
            reason: MalformedReason::MissingPath,
            ..
        })
    ));
}

#[test]
fn unknown_letters_parse_structurally() {
    assert_eq!(normalize_core("Z.4").unwrap(), "Z.4");
}

fn identifier_text() -> impl Strategy<Value = String> {
    (
        proptest::char::range('a', 'z'),
        proptest::bool::ANY,
        proptest::collection::vec(1u32..200, 1..5),
        proptest::option::of(0u32..10_000),
    )
        .prop_map(|(letter, upper, path, suffix)| {
            let letter = if upper {
                letter.to_ascii_uppercase()
            } else {
                letter
            };
            let segments: Vec<String> = path.iter().map(|n| format!("{n:02}")).collect();
            let mut text = format!("{letter}.{}", segments.join("."));
            if let Some(suffix) = suffix {
                text.push_str(&format!("_{suffix:04}"));
            }
            text
        })
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in identifier_text()) {
        let (first, has_date) = normalize(&raw).unwrap();
        let (second, has_date_again) = normalize(&first.full_id()).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(has_date, has_date_again);

        let (core_only, _) = normalize(&first.to_string()).unwrap();
        prop_assert_eq!(core_only, first.core());
    }

    #[test]
    fn legacy_concatenation_matches_dotted(path in proptest::collection::vec(1u32..10, 1..6)) {
        let concatenated: String = path.iter().map(ToString::to_string).collect();
        let dotted: Vec<String> = path.iter().map(ToString::to_string).collect();
        let (legacy, _) = normalize(&format!("E{concatenated}")).unwrap();
        let (canonical, _) = normalize(&format!("E.{}", dotted.join("."))).unwrap();
        prop_assert_eq!(legacy.path(), path.as_slice());
        prop_assert_eq!(legacy, canonical);
    }
}
