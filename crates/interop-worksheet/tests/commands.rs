use interop_core::models::selections::PLACEHOLDER;
use interop_export::styles::DocumentStyles;
use interop_export::worksheet::{render_worksheet, WorksheetContext};
use interop_worksheet::commands::{
    self, INTEGRITY_CONFLICT_WARNING, PLAN_CONFLICT_WARNING, PLAN_PROMPT,
};
use interop_worksheet::state::WorksheetState;

#[test]
fn fresh_session_prompts_for_a_plan() {
    let state = WorksheetState::default();
    let view = commands::get_state(&state);

    assert_eq!(view.plan_banner, PLAN_PROMPT);
    assert_eq!(view.plan.rows.len(), 5);
    assert_eq!(view.integrity.rows.len(), 4);
    assert!(view.recommended_integrity.is_none());
    assert!(!view.can_use_recommended);
    assert!(view.integrity.rows.iter().all(|r| !r.selected && !r.recommended));
}

#[test]
fn plan_selection_drives_banner_and_recommendation() {
    let mut state = WorksheetState::default();
    let outcome = commands::toggle_plan(&mut state, "inconsistent_patient_ids");

    assert!(outcome.warning.is_none());
    assert!(outcome.view.plan_banner.starts_with("Selected: Inconsistent Patient IDs"));
    assert!(outcome.view.plan_banner.contains("Implement MPI"));
    assert_eq!(
        outcome.view.recommended_integrity.as_deref(),
        Some("Patient Identity Management (MPI)")
    );

    let badged: Vec<_> = outcome.view.integrity.rows.iter().filter(|r| r.recommended).collect();
    assert_eq!(badged.len(), 1);
    assert_eq!(badged[0].id, "patient_identity");
}

#[test]
fn recommended_badge_hides_once_something_is_selected() {
    let mut state = WorksheetState::default();
    commands::toggle_plan(&mut state, "data_silos");
    let outcome = commands::toggle_integrity(&mut state, "error_detection");

    assert!(outcome.view.integrity.rows.iter().all(|r| !r.recommended));
    assert_eq!(outcome.view.integrity.selection.as_deref(), Some("error_detection"));
    // Still reported so the UI can keep the "use recommended" button enabled.
    assert!(outcome.view.can_use_recommended);
}

#[test]
fn conflicting_plan_batch_warns_and_keeps_first() {
    let mut state = WorksheetState::default();
    let outcome = commands::observe_plan(
        &mut state,
        [("no_fhir_connection", true), ("missing_clinical_context", true)],
    );

    assert_eq!(outcome.warning.as_deref(), Some(PLAN_CONFLICT_WARNING));
    assert_eq!(outcome.view.plan.selection.as_deref(), Some("missing_clinical_context"));
    assert_eq!(outcome.view.plan.rows.iter().filter(|r| r.selected).count(), 1);
}

#[test]
fn conflicting_integrity_batch_uses_its_own_warning() {
    let mut state = WorksheetState::default();
    let outcome = commands::observe_integrity(
        &mut state,
        [("data_accuracy", true), ("patient_identity", true)],
    );

    assert_eq!(outcome.warning.as_deref(), Some(INTEGRITY_CONFLICT_WARNING));
    assert_eq!(outcome.view.integrity.selection.as_deref(), Some("data_accuracy"));
}

#[test]
fn use_recommended_and_clear() {
    let mut state = WorksheetState::default();

    // Nothing to recommend yet.
    let outcome = commands::use_recommended_integrity(&mut state);
    assert!(outcome.view.integrity.selection.is_none());

    commands::toggle_plan(&mut state, "no_fhir_connection");
    let outcome = commands::use_recommended_integrity(&mut state);
    assert_eq!(outcome.view.integrity.selection.as_deref(), Some("error_detection"));

    let outcome = commands::clear_integrity(&mut state);
    assert!(outcome.view.integrity.selection.is_none());
    assert!(outcome.view.integrity.rows.iter().any(|r| r.recommended));

    let outcome = commands::clear_plan(&mut state);
    assert_eq!(outcome.view.plan_banner, PLAN_PROMPT);
    assert!(outcome.view.integrity.rows.iter().all(|r| !r.recommended));
}

#[test]
fn export_selections_use_effective_integrity() {
    let mut state = WorksheetState::default();
    commands::toggle_plan(&mut state, "data_silos");

    let selections = commands::export_selections(&state);
    assert_eq!(selections.plan_id.as_deref(), Some("data_silos"));
    assert_eq!(selections.plan_gap.as_deref(), Some("Data Silos"));
    assert_eq!(selections.plan_interface.as_deref(), Some("Interface Engine (Middleware)"));
    assert_eq!(selections.integrity_focus.as_deref(), Some("Access Tracking (Audit Logs)"));

    commands::toggle_integrity(&mut state, "data_accuracy");
    let selections = commands::export_selections(&state);
    assert_eq!(selections.integrity_focus.as_deref(), Some("Data Accuracy (Integrity)"));
}

#[test]
fn empty_session_exports_nothing_selected() {
    let mut state = WorksheetState::default();
    commands::set_include_appendix(&mut state, true);

    let selections = commands::export_selections(&state);
    assert!(selections.plan_gap.is_none());
    assert!(selections.integrity_focus.is_none());
    assert!(selections.include_all_options);

    let context = WorksheetContext::new(&selections, "2026-01-01 09:00");
    let markup = render_worksheet(&context).unwrap();
    assert!(markup.contains(&format!("| Gap | {PLACEHOLDER} |")));
}

#[test]
fn batch_with_two_plans_keeps_first_in_display_order() {
    let mut state = WorksheetState::default();
    let plan = ["no_fhir_connection", "missing_clinical_context"];

    let outcome = commands::apply_batch(&mut state, &plan, &[], false);

    assert_eq!(outcome.view.plan.selection.as_deref(), Some("missing_clinical_context"));
    assert_eq!(outcome.warnings, vec![PLAN_CONFLICT_WARNING.to_string()]);
    assert_eq!(outcome.view.recommended_integrity.as_deref(), Some("data_accuracy"));
}

#[test]
fn batch_with_unknown_integrity_id_warns_and_selects_nothing() {
    let mut state = WorksheetState::default();

    let outcome = commands::apply_batch(&mut state, &[], &["zz"], false);

    assert_eq!(outcome.warnings, vec!["unknown integrity id 'zz' ignored".to_string()]);
    assert!(outcome.view.integrity.selection.is_none());
    assert!(outcome.view.plan.selection.is_none());
}

#[test]
fn batch_use_recommended_replaces_explicit_integrity() {
    let mut state = WorksheetState::default();

    let outcome = commands::apply_batch(&mut state, &["data_silos"], &["data_accuracy"], true);

    assert!(outcome.warnings.is_empty());
    assert_eq!(outcome.view.integrity.selection.as_deref(), Some("access_tracking"));
}

#[test]
fn batch_reports_each_problem_separately() {
    let mut state = WorksheetState::default();
    let plan = ["bogus", "data_silos", "no_fhir_connection"];

    let outcome = commands::apply_batch(&mut state, &plan, &[], false);

    assert_eq!(
        outcome.warnings,
        vec![
            "unknown plan id 'bogus' ignored".to_string(),
            PLAN_CONFLICT_WARNING.to_string(),
        ]
    );
    assert_eq!(outcome.view.plan.selection.as_deref(), Some("data_silos"));
}

#[test]
fn export_docx_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("worksheet.docx");

    let mut state = WorksheetState::new(true);
    commands::toggle_plan(&mut state, "data_integrity_security");
    commands::export_docx(&state, &DocumentStyles::default(), &path).unwrap();

    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
