use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use super::option::{OptionId, SelectOption};
use super::rule::RecommendationRule;

/// Observable state of a [`SingleSelectGroup`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
#[ts(export)]
pub enum SelectionState {
    Empty,
    Selected(OptionId),
}

/// Outcome of applying one observed batch of checkbox values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[must_use]
#[ts(export)]
pub struct Resolution {
    /// The single option left selected, if any.
    pub selection: Option<OptionId>,
    /// More than one option was reported checked and the batch was corrected.
    pub conflict: bool,
    /// Options that were reported checked but forced back to unchecked.
    pub unchecked: Vec<OptionId>,
}

/// Radio-button semantics over a fixed, ordered list of checkbox rows.
///
/// At most one option is selected at any time. Every operation is
/// infallible: identifiers outside the option list are ignored and leave
/// the group unchanged.
#[derive(Debug, Clone)]
pub struct SingleSelectGroup {
    name: String,
    options: Vec<SelectOption>,
    selected: Option<usize>,
}

impl SingleSelectGroup {
    /// Build a group over `options` in display order. The group starts empty.
    ///
    /// Options repeating an earlier id are dropped so that every id maps to
    /// exactly one position.
    pub fn new(name: impl Into<String>, options: impl IntoIterator<Item = SelectOption>) -> Self {
        let name = name.into();
        let mut unique: Vec<SelectOption> = Vec::new();
        for option in options {
            if unique.iter().any(|o| o.id == option.id) {
                tracing::warn!(group = %name, id = %option.id, "duplicate option id dropped");
                continue;
            }
            unique.push(option);
        }

        Self {
            name,
            options: unique,
            selected: None,
        }
    }

    /// Build a group from a JSON array of [`SelectOption`]s.
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self, CoreError> {
        let options: Vec<SelectOption> = serde_json::from_str(json)?;
        Ok(Self::new(name, options))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Zero-based position of `id` in the display order.
    pub fn position_of(&self, id: &str) -> Option<usize> {
        self.options.iter().position(|o| o.id.as_str() == id)
    }

    pub fn option(&self, id: &str) -> Option<&SelectOption> {
        self.options.iter().find(|o| o.id.as_str() == id)
    }

    pub fn current_selection(&self) -> Option<&OptionId> {
        self.current_option().map(|o| &o.id)
    }

    pub fn current_option(&self) -> Option<&SelectOption> {
        self.selected.and_then(|pos| self.options.get(pos))
    }

    pub fn state(&self) -> SelectionState {
        match self.current_selection() {
            Some(id) => SelectionState::Selected(id.clone()),
            None => SelectionState::Empty,
        }
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.current_selection().is_some_and(|s| s.as_str() == id)
    }

    /// Click on one row: selects it, switches to it from another row, or
    /// deselects it if it was already the selection.
    pub fn toggle(&mut self, id: &str) -> Option<&OptionId> {
        let Some(pos) = self.position_of(id) else {
            tracing::debug!(group = %self.name, id, "toggle ignored: unknown option");
            return self.current_selection();
        };

        self.selected = if self.selected == Some(pos) {
            None
        } else {
            Some(pos)
        };
        self.current_selection()
    }

    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// Select `id` directly, bypassing the toggle protocol. Used by the
    /// "use recommended" action; never deselects.
    pub fn set_recommended(&mut self, id: &str) -> Option<&OptionId> {
        match self.position_of(id) {
            Some(pos) => self.selected = Some(pos),
            None => {
                tracing::debug!(group = %self.name, id, "set_recommended ignored: unknown option");
            }
        }
        self.current_selection()
    }

    /// Apply one batch of observed checkbox values.
    ///
    /// Ids missing from the batch count as unchecked, unknown ids are
    /// ignored. When several rows are checked the first one in display order
    /// wins (independent of the order of the batch) and the rest are
    /// reported in [`Resolution::unchecked`].
    pub fn apply_observed_state<I, K>(&mut self, observed: I) -> Resolution
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        let mut checked = vec![false; self.options.len()];
        for (id, on) in observed {
            let id = id.as_ref();
            match self.position_of(id) {
                Some(pos) => checked[pos] |= on,
                None => tracing::debug!(group = %self.name, id, "observed state for unknown option ignored"),
            }
        }

        let mut positions = checked
            .iter()
            .enumerate()
            .filter_map(|(pos, on)| on.then_some(pos));
        self.selected = positions.next();
        let unchecked: Vec<OptionId> = positions
            .filter_map(|pos| self.options.get(pos).map(|o| o.id.clone()))
            .collect();

        let selection = self.current_selection().cloned();
        let conflict = !unchecked.is_empty();
        if conflict {
            tracing::warn!(
                group = %self.name,
                kept = ?selection,
                unchecked = ?unchecked,
                "multiple options checked; kept the first in display order"
            );
        }

        Resolution {
            selection,
            conflict,
            unchecked,
        }
    }

    /// Option suggested by `rule` for the other group's selection, if the
    /// rule maps it to an option of this group. Never mutates.
    pub fn recommended_selection(
        &self,
        rule: &RecommendationRule,
        other_selection: Option<&OptionId>,
    ) -> Option<&OptionId> {
        let target = rule.lookup(other_selection?.as_str())?;
        self.option(target.as_str()).map(|o| &o.id)
    }

    /// The explicit selection, falling back to the recommendation. This is
    /// the value downstream display and export treat as the user's choice.
    pub fn effective_selection(
        &self,
        rule: &RecommendationRule,
        other_selection: Option<&OptionId>,
    ) -> Option<&OptionId> {
        self.current_selection()
            .or_else(|| self.recommended_selection(rule, other_selection))
    }

    pub fn effective_option(
        &self,
        rule: &RecommendationRule,
        other_selection: Option<&OptionId>,
    ) -> Option<&SelectOption> {
        let id = self.effective_selection(rule, other_selection)?;
        self.option(id.as_str())
    }

    /// Per-row checkbox values to render after any correction.
    pub fn checkbox_states(&self) -> Vec<(&OptionId, bool)> {
        self.options
            .iter()
            .enumerate()
            .map(|(pos, o)| (&o.id, self.selected == Some(pos)))
            .collect()
    }
}
