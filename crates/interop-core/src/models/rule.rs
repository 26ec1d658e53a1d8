use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use super::option::OptionId;

/// Maps a selection in one group to a suggested option in another.
///
/// Pure data supplied by the surrounding application. The target group
/// only reads it; it never writes back to the source group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RecommendationRule(BTreeMap<OptionId, OptionId>);

impl RecommendationRule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, from: impl Into<OptionId>, to: impl Into<OptionId>) -> Self {
        self.0.insert(from.into(), to.into());
        self
    }

    /// Decode a rule from a JSON object of `{ "source_id": "target_id" }`.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn lookup(&self, source: &str) -> Option<&OptionId> {
        self.0.get(source)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&OptionId, &OptionId)> {
        self.0.iter()
    }
}

impl<F, T> FromIterator<(F, T)> for RecommendationRule
where
    F: Into<OptionId>,
    T: Into<OptionId>,
{
    fn from_iter<I: IntoIterator<Item = (F, T)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(from, to)| (from.into(), to.into()))
                .collect(),
        )
    }
}
