use std::collections::HashSet;

use interop_content::integrity::{self, get_integrity_row, integrity_group, integrity_rows, recommended_integrity};
use interop_content::planning::{self, get_plan_row, plan_group, plan_rows};
use interop_content::SelectableRow;

#[test]
fn plan_ids_are_unique_and_grouped_in_order() {
    let ids: HashSet<_> = plan_rows().iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), plan_rows().len());

    let group = plan_group();
    assert_eq!(group.len(), 5);
    assert_eq!(group.position_of("data_silos"), Some(0));
    assert_eq!(group.position_of("data_integrity_security"), Some(4));
    assert_eq!(group.current_selection(), None);
}

#[test]
fn plan_option_carries_display_columns() {
    let group = plan_group();
    let option = group.option("no_fhir_connection").unwrap();

    assert_eq!(option.value(planning::GAP), Some("No FHIR Connection"));
    assert_eq!(option.value(planning::INTERFACE_TYPE), Some("FHIR API"));
    assert_eq!(option.fields.len(), 5);
}

#[test]
fn integrity_rows_back_their_group() {
    let group = integrity_group();
    assert_eq!(group.len(), integrity_rows().len());
    for row in integrity_rows() {
        let option = group.option(row.id()).unwrap();
        assert_eq!(option.value(integrity::AREA), Some(row.area));
    }
}

#[test]
fn every_gap_has_a_valid_recommendation() {
    let rule = recommended_integrity();
    let group = integrity_group();
    assert_eq!(rule.len(), plan_rows().len());

    for row in plan_rows() {
        let target = rule.lookup(row.id).unwrap();
        assert!(group.option(target.as_str()).is_some(), "{} has no target", row.id);
    }
}

#[test]
fn recommendation_examples() {
    let plan = plan_group().options()[1].id.clone();
    let group = integrity_group();
    let rule = recommended_integrity();

    let recommended = group.effective_option(&rule, Some(&plan)).unwrap();
    assert_eq!(recommended.value(integrity::AREA), Some("Patient Identity Management (MPI)"));
}

#[test]
fn lookups_by_id() {
    assert_eq!(get_plan_row("data_silos").map(|r| r.fix), Some("Add/Optimize Interface Engine"));
    assert!(get_plan_row("Data Silos").is_none());
    assert_eq!(get_integrity_row("error_detection").map(|r| r.area), Some("Error Detection & Alerts"));
}
