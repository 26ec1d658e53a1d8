use interop_content::integrity::{integrity_group, recommended_integrity};
use interop_content::planning::plan_group;
use interop_core::models::group::SingleSelectGroup;
use interop_core::models::option::{OptionId, SelectOption};
use interop_core::models::rule::RecommendationRule;

/// One user's worksheet session.
///
/// Owns both selection groups. The integrity group reads the planning
/// group's selection through `rule` but never writes to it. A session is
/// not shared between users or threads.
#[derive(Debug, Clone)]
pub struct WorksheetState {
    pub plan: SingleSelectGroup,
    pub integrity: SingleSelectGroup,
    pub rule: RecommendationRule,
    pub include_appendix: bool,
}

impl Default for WorksheetState {
    fn default() -> Self {
        Self {
            plan: plan_group(),
            integrity: integrity_group(),
            rule: recommended_integrity(),
            include_appendix: false,
        }
    }
}

impl WorksheetState {
    pub fn new(include_appendix: bool) -> Self {
        Self {
            include_appendix,
            ..Self::default()
        }
    }

    pub fn plan_selection(&self) -> Option<&OptionId> {
        self.plan.current_selection()
    }

    /// Integrity area suggested by the current plan selection.
    pub fn recommended_integrity(&self) -> Option<&OptionId> {
        self.integrity
            .recommended_selection(&self.rule, self.plan.current_selection())
    }

    /// Explicit integrity selection, else the recommendation.
    pub fn effective_integrity(&self) -> Option<&SelectOption> {
        self.integrity
            .effective_option(&self.rule, self.plan.current_selection())
    }
}
