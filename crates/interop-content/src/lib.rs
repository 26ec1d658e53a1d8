//! interop-content
//!
//! Static worksheet content for the Riverbend interoperability exercise.
//! Pure data: the selectable planning and integrity tables, the rule that
//! links them, and the reference tables and reading lists printed in the
//! exported document.

pub mod integrity;
pub mod links;
pub mod planning;
pub mod reference;

use interop_core::models::group::SingleSelectGroup;
use interop_core::models::option::SelectOption;

/// A row of a static table that can back a [`SingleSelectGroup`].
pub trait SelectableRow {
    /// Stable identifier used by selection state and recommendation rules.
    fn id(&self) -> &str;

    /// Display columns in presentation order, as `(label, value)`.
    fn columns(&self) -> Vec<(&'static str, &str)>;

    fn to_option(&self) -> SelectOption {
        self.columns()
            .into_iter()
            .fold(SelectOption::new(self.id()), |option, (label, value)| {
                option.field(label, value)
            })
    }
}

/// Build a fresh (empty) selection group over `rows` in table order.
pub fn group_of<R: SelectableRow>(name: &str, rows: &[R]) -> SingleSelectGroup {
    SingleSelectGroup::new(name, rows.iter().map(SelectableRow::to_option))
}
