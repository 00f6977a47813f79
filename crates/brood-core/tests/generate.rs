//! Tests for child identifier generation.

use brood_core::{next_child_id, normalize};
use brood_model::{CanonicalIdentifier, DateSuffix};
use chrono::NaiveDate;

fn id(raw: &str) -> CanonicalIdentifier {
    normalize(raw).unwrap().0
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 9, 12).unwrap()
}

#[test]
fn next_child_follows_existing_siblings() {
    let parent = id("E.1");
    let children = [id("E.1.1_0801"), id("E.1.2_0815")];
    let child = next_child_id(&parent, &children, None, today()).unwrap();
    assert_eq!(child.to_string(), "E.1.3");
    assert_eq!(child.full_id(), "E.1.3_0912");
}

#[test]
fn first_child_gets_index_one() {
    let parent = id("A.2");
    let child = next_child_id(&parent, std::iter::empty(), None, today()).unwrap();
    assert_eq!(child.to_string(), "A.2.1");
}

#[test]
fn removed_middle_child_is_not_reused() {
    let parent = id("E.1");
    let children = [id("E.1.1"), id("E.1.3")];
    let child = next_child_id(&parent, &children, None, today()).unwrap();
    assert_eq!(child.to_string(), "E.1.4");
}

#[test]
fn only_direct_children_count() {
    let parent = id("E.1");
    let children = [
        id("E.1.2"),
        id("E.1.2.7"),
        id("A.1.9"),
        id("E.2.5"),
        id("E.15"),
    ];
    let child = next_child_id(&parent, &children, None, today()).unwrap();
    assert_eq!(child.to_string(), "E.1.3");
}

#[test]
fn explicit_date_suffix_wins() {
    let parent = id("B.3.1_0701");
    let suffix = DateSuffix::parse("_0804").unwrap();
    let child = next_child_id(&parent, std::iter::empty(), Some(suffix), today()).unwrap();
    assert_eq!(child.full_id(), "B.3.1.1_0804");
}
