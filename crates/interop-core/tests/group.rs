use std::collections::HashMap;

use interop_core::models::group::{SelectionState, SingleSelectGroup};
use interop_core::models::option::{OptionId, SelectOption};
use interop_core::models::rule::RecommendationRule;
use interop_core::models::selections::{display_or_placeholder, PLACEHOLDER};

fn abc() -> SingleSelectGroup {
    SingleSelectGroup::new(
        "letters",
        ["a", "b", "c"].map(|id| SelectOption::new(id).field("Label", id.to_uppercase())),
    )
}

fn six() -> SingleSelectGroup {
    SingleSelectGroup::new("six", (0..6).map(|i| SelectOption::new(format!("opt{i}"))))
}

fn gap_rule() -> RecommendationRule {
    RecommendationRule::new().with("gap1", "c")
}

#[test]
fn starts_empty() {
    let group = abc();
    assert_eq!(group.current_selection(), None);
    assert_eq!(group.state(), SelectionState::Empty);
}

#[test]
fn toggle_selects_switches_and_deselects() {
    let mut group = abc();

    assert_eq!(group.toggle("a").map(OptionId::as_str), Some("a"));
    assert_eq!(group.toggle("c").map(OptionId::as_str), Some("c"));
    assert!(!group.is_selected("a"));
    assert_eq!(group.toggle("c"), None);
    assert_eq!(group.state(), SelectionState::Empty);
}

#[test]
fn toggle_twice_clears_then_reselects() {
    let mut group = abc();
    group.toggle("b");

    group.toggle("b");
    assert_eq!(group.current_selection(), None);
    group.toggle("b");
    assert_eq!(group.state(), SelectionState::Selected(OptionId::new("b")));
}

#[test]
fn unknown_toggle_is_a_no_op() {
    let mut group = abc();
    group.toggle("b");

    assert_eq!(group.toggle("nonexistent-id").map(OptionId::as_str), Some("b"));
    assert_eq!(group.current_selection().map(OptionId::as_str), Some("b"));
}

#[test]
fn clear_from_any_state() {
    let mut group = abc();
    group.clear();
    assert_eq!(group.current_selection(), None);

    group.toggle("a");
    group.clear();
    assert_eq!(group.current_selection(), None);
}

#[test]
fn set_recommended_selects_directly() {
    let mut group = abc();
    group.toggle("a");

    assert_eq!(group.set_recommended("c").map(OptionId::as_str), Some("c"));
    // Selecting the current option again keeps it selected.
    assert_eq!(group.set_recommended("c").map(OptionId::as_str), Some("c"));
    assert_eq!(group.set_recommended("zzz").map(OptionId::as_str), Some("c"));
}

#[test]
fn observed_batch_keeps_first_in_display_order() {
    let mut group = abc();
    let resolution = group.apply_observed_state([("a", true), ("b", false), ("c", true)]);

    assert_eq!(resolution.selection, Some(OptionId::new("a")));
    assert!(resolution.conflict);
    assert_eq!(resolution.unchecked, vec![OptionId::new("c")]);
}

#[test]
fn observed_batch_order_does_not_matter() {
    let mut group = abc();
    let resolution = group.apply_observed_state([("c", true), ("a", true)]);

    assert_eq!(resolution.selection, Some(OptionId::new("a")));
    assert!(resolution.conflict);
}

#[test]
fn conflict_at_positions_two_and_five() {
    let mut group = six();
    let batch: HashMap<String, bool> = (0..6)
        .map(|i| (format!("opt{i}"), i == 2 || i == 5))
        .collect();

    let resolution = group.apply_observed_state(batch);

    assert_eq!(resolution.selection, Some(OptionId::new("opt2")));
    assert!(resolution.conflict);
    assert_eq!(resolution.unchecked, vec![OptionId::new("opt5")]);
    let states: Vec<bool> = group.checkbox_states().into_iter().map(|(_, on)| on).collect();
    assert_eq!(states, vec![false, false, true, false, false, false]);
}

#[test]
fn single_checked_row_is_not_a_conflict() {
    let mut group = abc();
    let resolution = group.apply_observed_state([("a", false), ("b", true), ("c", false)]);

    assert_eq!(resolution.selection, Some(OptionId::new("b")));
    assert!(!resolution.conflict);
    assert!(resolution.unchecked.is_empty());
}

#[test]
fn all_unchecked_batch_deselects() {
    let mut group = abc();
    group.toggle("b");

    let resolution = group.apply_observed_state([("a", false), ("b", false), ("c", false)]);
    assert_eq!(resolution.selection, None);
    assert!(!resolution.conflict);
}

#[test]
fn unknown_ids_in_batch_are_ignored() {
    let mut group = abc();
    let resolution = group.apply_observed_state([("zzz", true), ("b", true)]);

    assert_eq!(resolution.selection, Some(OptionId::new("b")));
    assert!(!resolution.conflict);
}

#[test]
fn recommendation_applies_only_when_empty() {
    let mut group = abc();
    let rule = gap_rule();
    let gap1 = OptionId::new("gap1");

    assert_eq!(
        group.effective_selection(&rule, Some(&gap1)).map(OptionId::as_str),
        Some("c")
    );

    group.toggle("a");
    assert_eq!(
        group.effective_selection(&rule, Some(&gap1)).map(OptionId::as_str),
        Some("a")
    );
    // The recommendation itself is still computed, just not used.
    assert_eq!(
        group.recommended_selection(&rule, Some(&gap1)).map(OptionId::as_str),
        Some("c")
    );
}

#[test]
fn recommendation_outside_group_is_empty() {
    let group = abc();
    let rule = RecommendationRule::new().with("gap1", "not-in-group");

    assert_eq!(group.recommended_selection(&rule, Some(&OptionId::new("gap1"))), None);
    assert_eq!(group.recommended_selection(&gap_rule(), Some(&OptionId::new("gap9"))), None);
    assert_eq!(group.recommended_selection(&gap_rule(), None), None);
}

#[test]
fn spec_walkthrough() {
    let mut group = abc();
    let rule = gap_rule();
    let gap1 = OptionId::new("gap1");

    let resolution = group.apply_observed_state([("a", true), ("b", false), ("c", true)]);
    assert_eq!(resolution.selection, Some(OptionId::new("a")));
    assert!(resolution.conflict);

    assert_eq!(group.toggle("c").map(OptionId::as_str), Some("c"));
    assert_eq!(group.toggle("c"), None);
    assert_eq!(
        group.effective_selection(&rule, Some(&gap1)).map(OptionId::as_str),
        Some("c")
    );
}

#[test]
fn clear_falls_back_to_recommendation_or_placeholder() {
    let mut group = abc();
    group.toggle("b");
    group.clear();

    let gap1 = OptionId::new("gap1");
    let recommended = group.effective_option(&gap_rule(), Some(&gap1));
    assert_eq!(recommended.and_then(|o| o.value("Label")), Some("C"));

    let none = group.effective_selection(&RecommendationRule::new(), Some(&gap1));
    assert_eq!(display_or_placeholder(none.map(OptionId::as_str)), PLACEHOLDER);
}

#[test]
fn empty_group_degrades_to_empty() {
    let mut group = SingleSelectGroup::new("empty", Vec::new());
    assert!(group.is_empty());
    assert_eq!(group.toggle("a"), None);
    let resolution = group.apply_observed_state([("a", true), ("b", true)]);
    assert_eq!(resolution.selection, None);
    assert!(!resolution.conflict);
}

#[test]
fn duplicate_ids_keep_first_occurrence() {
    let group = SingleSelectGroup::new(
        "dupes",
        vec![
            SelectOption::new("a").field("Label", "first"),
            SelectOption::new("b"),
            SelectOption::new("a").field("Label", "second"),
        ],
    );

    assert_eq!(group.len(), 2);
    assert_eq!(group.option("a").and_then(|o| o.value("Label")), Some("first"));
    assert_eq!(group.position_of("b"), Some(1));
}

#[test]
fn decodes_options_and_rules_from_json() {
    let group = SingleSelectGroup::from_json(
        "json",
        r#"[{"id": "x", "fields": [{"label": "Area", "value": "X area"}]}, {"id": "y", "fields": []}]"#,
    )
    .unwrap();
    assert_eq!(group.position_of("y"), Some(1));
    assert_eq!(group.option("x").and_then(|o| o.value("Area")), Some("X area"));

    let rule = RecommendationRule::from_json(r#"{"gap1": "y"}"#).unwrap();
    assert_eq!(rule.lookup("gap1"), Some(&OptionId::new("y")));

    assert!(RecommendationRule::from_json("[1, 2]").is_err());
}

#[test]
fn placeholder_for_blank_values() {
    assert_eq!(display_or_placeholder(None), "\u{2014}");
    assert_eq!(display_or_placeholder(Some("  ")), "\u{2014}");
    assert_eq!(display_or_placeholder(Some("FHIR API")), "FHIR API");
}
