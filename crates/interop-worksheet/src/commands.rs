use std::path::Path;

use serde::Serialize;
use ts_rs::TS;

use interop_content::integrity::AREA;
use interop_content::planning::{FIX, GAP, INTERFACE_TYPE, REFERENCE};
use interop_core::models::group::{Resolution, SingleSelectGroup};
use interop_core::models::option::{DisplayField, OptionId, SelectOption};
use interop_core::models::selections::ExportSelections;
use interop_export::export_worksheet_docx;
use interop_export::styles::DocumentStyles;

use crate::state::WorksheetState;

pub const PLAN_CONFLICT_WARNING: &str =
    "Please select only one option. Keeping the first checked and unchecking the rest.";
pub const INTEGRITY_CONFLICT_WARNING: &str = "Please select only one Integrity/Security focus. \
     Keeping the first checked and unchecking the rest.";
pub const PLAN_PROMPT: &str =
    "Select exactly one row above to drive the evaluation sections in Part 2.";

/// One table row as the presentation layer draws it.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RowView {
    pub id: String,
    pub columns: Vec<DisplayField>,
    pub selected: bool,
    /// Show the "Recommended" badge (only while nothing is selected).
    pub recommended: bool,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct GroupView {
    pub name: String,
    pub rows: Vec<RowView>,
    pub selection: Option<String>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct WorksheetView {
    pub plan: GroupView,
    /// Confirmation banner under the planning table, or a prompt to choose.
    pub plan_banner: String,
    pub integrity: GroupView,
    /// Area suggested by the selected gap, if any.
    pub recommended_integrity: Option<String>,
    /// Whether "use recommended" would do anything.
    pub can_use_recommended: bool,
    pub include_appendix: bool,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct CommandOutcome {
    pub view: WorksheetView,
    /// One-line warning when a multi-select batch was corrected.
    pub warning: Option<String>,
}

/// Result of applying a whole batch of choices in one step.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct BatchOutcome {
    pub view: WorksheetView,
    /// One entry per problem: unknown ids and corrected conflicts.
    pub warnings: Vec<String>,
}

pub fn get_state(state: &WorksheetState) -> WorksheetView {
    let recommended = state.recommended_integrity();
    let integrity_empty = state.integrity.current_selection().is_none();

    WorksheetView {
        plan: group_view(&state.plan, None),
        plan_banner: plan_banner(state.plan.current_option()),
        integrity: group_view(&state.integrity, recommended.filter(|_| integrity_empty)),
        recommended_integrity: recommended
            .and_then(|id| state.integrity.option(id.as_str()))
            .and_then(|o| o.value(AREA))
            .map(str::to_string),
        can_use_recommended: recommended.is_some(),
        include_appendix: state.include_appendix,
    }
}

pub fn toggle_plan(state: &mut WorksheetState, id: &str) -> CommandOutcome {
    state.plan.toggle(id);
    outcome(state, None)
}

/// Apply one observed batch of planning checkbox values.
pub fn observe_plan<I, K>(state: &mut WorksheetState, observed: I) -> CommandOutcome
where
    I: IntoIterator<Item = (K, bool)>,
    K: AsRef<str>,
{
    let resolution = state.plan.apply_observed_state(observed);
    outcome(state, conflict_warning(&resolution, PLAN_CONFLICT_WARNING))
}

pub fn clear_plan(state: &mut WorksheetState) -> CommandOutcome {
    state.plan.clear();
    outcome(state, None)
}

pub fn toggle_integrity(state: &mut WorksheetState, id: &str) -> CommandOutcome {
    state.integrity.toggle(id);
    outcome(state, None)
}

/// Apply one observed batch of integrity checkbox values.
pub fn observe_integrity<I, K>(state: &mut WorksheetState, observed: I) -> CommandOutcome
where
    I: IntoIterator<Item = (K, bool)>,
    K: AsRef<str>,
{
    let resolution = state.integrity.apply_observed_state(observed);
    outcome(state, conflict_warning(&resolution, INTEGRITY_CONFLICT_WARNING))
}

/// Select the recommended integrity area. No-op when the current plan
/// selection has no recommendation.
pub fn use_recommended_integrity(state: &mut WorksheetState) -> CommandOutcome {
    match state.recommended_integrity().cloned() {
        Some(id) => {
            state.integrity.set_recommended(id.as_str());
        }
        None => tracing::debug!("no recommendation for the current plan selection"),
    }
    outcome(state, None)
}

pub fn clear_integrity(state: &mut WorksheetState) -> CommandOutcome {
    state.integrity.clear();
    outcome(state, None)
}

/// Apply one round of choices: every id in `plan` and `integrity` is
/// reported checked in a single observed batch per group. The integrity
/// batch is skipped when empty so a recommendation can still apply, and
/// `use_recommended` runs last, replacing any explicit integrity choice.
pub fn apply_batch<S: AsRef<str>>(
    state: &mut WorksheetState,
    plan: &[S],
    integrity: &[S],
    use_recommended: bool,
) -> BatchOutcome {
    let mut warnings = Vec::new();

    for id in plan.iter().map(AsRef::as_ref) {
        if state.plan.option(id).is_none() {
            warnings.push(format!("unknown plan id '{id}' ignored"));
        }
    }
    for id in integrity.iter().map(AsRef::as_ref) {
        if state.integrity.option(id).is_none() {
            warnings.push(format!("unknown integrity id '{id}' ignored"));
        }
    }

    let outcome = observe_plan(state, plan.iter().map(|id| (id, true)));
    warnings.extend(outcome.warning);

    if !integrity.is_empty() {
        let outcome = observe_integrity(state, integrity.iter().map(|id| (id, true)));
        warnings.extend(outcome.warning);
    }
    if use_recommended {
        use_recommended_integrity(state);
    }

    BatchOutcome {
        view: get_state(state),
        warnings,
    }
}

pub fn set_include_appendix(state: &mut WorksheetState, include: bool) -> WorksheetView {
    state.include_appendix = include;
    get_state(state)
}

/// The effective choices handed to the document layer.
pub fn export_selections(state: &WorksheetState) -> ExportSelections {
    let plan = state.plan.current_option();
    let plan_value = |label: &str| plan.and_then(|o| o.value(label)).map(str::to_string);

    ExportSelections {
        plan_id: state.plan_selection().map(|id| id.as_str().to_string()),
        plan_gap: plan_value(GAP),
        plan_interface: plan_value(INTERFACE_TYPE),
        plan_fix: plan_value(FIX),
        plan_reference: plan_value(REFERENCE),
        integrity_focus: state
            .effective_integrity()
            .and_then(|o| o.value(AREA))
            .map(str::to_string),
        include_all_options: state.include_appendix,
    }
}

/// Render the worksheet with the current selections and write it to `path`.
pub fn export_docx(
    state: &WorksheetState,
    styles: &DocumentStyles,
    path: &Path,
) -> eyre::Result<()> {
    let selections = export_selections(state);
    let bytes = export_worksheet_docx(&selections, styles, &generated_at_now())?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }
    std::fs::write(path, &bytes)
        .map_err(|e| eyre::eyre!("failed to write {}: {e}", path.display()))?;

    tracing::info!(path = %path.display(), bytes = bytes.len(), "worksheet written");
    Ok(())
}

/// Local time stamp printed under the document title.
pub fn generated_at_now() -> String {
    jiff::Zoned::now().strftime("%Y-%m-%d %H:%M").to_string()
}

fn outcome(state: &WorksheetState, warning: Option<&str>) -> CommandOutcome {
    CommandOutcome {
        view: get_state(state),
        warning: warning.map(str::to_string),
    }
}

fn conflict_warning(resolution: &Resolution, message: &'static str) -> Option<&'static str> {
    resolution.conflict.then_some(message)
}

fn group_view(group: &SingleSelectGroup, recommended: Option<&OptionId>) -> GroupView {
    let rows = group
        .options()
        .iter()
        .map(|option| RowView {
            id: option.id.as_str().to_string(),
            columns: option.fields.clone(),
            selected: group.is_selected(option.id.as_str()),
            recommended: recommended == Some(&option.id),
        })
        .collect();

    GroupView {
        name: group.name().to_string(),
        rows,
        selection: group.current_selection().map(|id| id.as_str().to_string()),
    }
}

fn plan_banner(selected: Option<&SelectOption>) -> String {
    let Some(option) = selected else {
        return PLAN_PROMPT.to_string();
    };
    let value = |label: &str| option.value(label).unwrap_or_default();
    format!(
        "Selected: {} \u{2192} {} \u{2192} {} ({})",
        value(GAP),
        value(INTERFACE_TYPE),
        value(FIX),
        value(REFERENCE),
    )
}
