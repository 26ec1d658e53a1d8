//! interop-export
//!
//! Worksheet document generation: Tera template → lightweight markup → DOCX.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;
pub mod worksheet;

use interop_core::models::selections::ExportSelections;

use crate::error::ExportError;
use crate::styles::DocumentStyles;
use crate::worksheet::{render_worksheet, WorksheetContext};

/// Render the full worksheet with `selections` and pack it as DOCX bytes.
///
/// `generated_at` is printed verbatim under the title.
pub fn export_worksheet_docx(
    selections: &ExportSelections,
    styles: &DocumentStyles,
    generated_at: &str,
) -> Result<Vec<u8>, ExportError> {
    let context = WorksheetContext::new(selections, generated_at);
    let rendered = render_worksheet(&context)?;
    let bytes = docx::generate_docx(&rendered, styles)?;
    tracing::info!(
        bytes = bytes.len(),
        appendix = selections.include_all_options,
        "worksheet exported"
    );
    Ok(bytes)
}
