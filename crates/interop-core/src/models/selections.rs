use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Printed in place of any selection the user has not made.
pub const PLACEHOLDER: &str = "\u{2014}";

/// Resolve an optional selection value to display text.
pub fn display_or_placeholder(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => PLACEHOLDER,
    }
}

/// The user's effective choices at export time.
///
/// Every field is optional; the document layer prints [`PLACEHOLDER`] for
/// anything missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExportSelections {
    /// Identifier of the selected interface-planning row.
    pub plan_id: Option<String>,
    pub plan_gap: Option<String>,
    pub plan_interface: Option<String>,
    pub plan_fix: Option<String>,
    pub plan_reference: Option<String>,
    /// Integrity/security focus area (explicit or recommended).
    pub integrity_focus: Option<String>,
    /// Append a table of every planning option to the document.
    #[serde(default)]
    pub include_all_options: bool,
}
