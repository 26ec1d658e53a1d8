use std::io::Cursor;
use std::iter::Peekable;
use std::str::Lines;

use docx_rs::{
    AlignmentType, BreakType, Docx, PageMargin, Paragraph, Run, RunFonts, Shading, ShdType, Style,
    StyleType, Table, TableCell, TableRow, WidthType,
};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// US Letter in twentieths of a point.
const PAGE_WIDTH: u32 = 12240;
const PAGE_HEIGHT: u32 = 15840;

/// Generate a DOCX document from rendered Markdown-ish template output.
///
/// The `rendered` content uses a simple subset:
/// - `# Heading` → document title
/// - `## Heading` → part heading
/// - `### Heading` → section heading
/// - `- item` → bullet list item (prefixed with bullet character)
/// - `> text` → small grey caption
/// - `**bold**` → bold run
/// - `---` or `***` → page break
/// - `| a | b |` rows → table, first row is the header; `\|` escapes a pipe
/// - `{: accent=secondary widths=120,140 }` → settings for the next table
///   (accent name or hex color, column widths in points)
/// - Everything else → normal paragraph
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let margin = styles.margin_twips();
    let mut docx = Docx::new()
        .page_size(PAGE_WIDTH, PAGE_HEIGHT)
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size, &styles.accent_color))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size, &styles.accent_color))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size, &styles.secondary_color));

    let mut pending_table: Option<TableSpec> = None;
    let mut lines = rendered.lines().peekable();

    while let Some(line) = lines.next() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            docx = docx.add_paragraph(Paragraph::new());
            continue;
        }

        if let Some(spec) = TableSpec::parse(trimmed) {
            pending_table = Some(spec);
        } else if trimmed.starts_with('|') {
            let rows = collect_table_rows(trimmed, &mut lines);
            let spec = pending_table.take().unwrap_or_default();
            docx = docx.add_table(build_table(&rows, &spec, styles));
        } else if let Some(text) = trimmed.strip_prefix("### ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading3", styles));
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading2", styles));
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            docx = docx.add_paragraph(heading_paragraph(text, "Heading1", styles));
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            docx = docx.add_paragraph(bullet_paragraph(text, styles));
        } else if let Some(text) = trimmed.strip_prefix("> ") {
            docx = docx.add_paragraph(caption_paragraph(text, styles));
        } else if trimmed == "---" || trimmed == "***" {
            docx = docx.add_paragraph(
                Paragraph::new().add_run(Run::new().add_break(BreakType::Page)),
            );
        } else {
            docx = docx.add_paragraph(body_paragraph(trimmed, styles));
        }
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

/// Settings carried by a `{: ... }` line to the table that follows it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableSpec {
    pub accent: Option<String>,
    /// Column widths in points.
    pub widths: Vec<usize>,
}

impl TableSpec {
    /// Parse a `{: key=value ... }` directive line. Unknown keys are ignored.
    pub fn parse(line: &str) -> Option<Self> {
        let body = line.strip_prefix("{:")?.strip_suffix('}')?;
        let mut spec = TableSpec::default();
        for pair in body.split_whitespace() {
            match pair.split_once('=') {
                Some(("accent", value)) => spec.accent = Some(value.to_string()),
                Some(("widths", value)) => {
                    spec.widths = value
                        .split(',')
                        .filter_map(|w| w.trim().parse().ok())
                        .collect();
                }
                _ => tracing::debug!(pair, "ignoring unknown table setting"),
            }
        }
        Some(spec)
    }
}

/// Split one `| a | b |` line into trimmed cells, honoring `\|` escapes.
pub fn split_row(line: &str) -> Vec<String> {
    let inner = line.trim();
    let inner = inner.strip_prefix('|').unwrap_or(inner);
    let inner = match inner.strip_suffix('|') {
        Some(rest) if !rest.ends_with('\\') => rest,
        _ => inner,
    };

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut chars = inner.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'|') => {
                current.push('|');
                chars.next();
            }
            '|' => cells.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(c),
        }
    }
    cells.push(current.trim().to_string());
    cells
}

fn collect_table_rows(first: &str, lines: &mut Peekable<Lines<'_>>) -> Vec<Vec<String>> {
    let mut rows = vec![split_row(first)];
    while let Some(next) = lines.peek() {
        let next = next.trim();
        if !next.starts_with('|') {
            break;
        }
        rows.push(split_row(next));
        lines.next();
    }
    rows
}

fn build_table(rows: &[Vec<String>], spec: &TableSpec, styles: &DocumentStyles) -> Table {
    let accent = styles.accent(spec.accent.as_deref().unwrap_or("primary"));
    let widths: Vec<usize> = spec.widths.iter().map(|w| w * 20).collect();

    let table_rows = rows
        .iter()
        .enumerate()
        .map(|(row_index, cells)| {
            let header = row_index == 0;
            let cells = cells
                .iter()
                .enumerate()
                .map(|(col, text)| {
                    let mut cell = TableCell::new().add_paragraph(cell_paragraph(text, header, styles));
                    if header {
                        cell = cell.shading(
                            Shading::new()
                                .shd_type(ShdType::Clear)
                                .color("auto")
                                .fill(accent.clone()),
                        );
                    }
                    if let Some(width) = widths.get(col) {
                        cell = cell.width(*width, WidthType::Dxa);
                    }
                    cell
                })
                .collect();
            TableRow::new(cells)
        })
        .collect();

    let table = Table::new(table_rows);
    if widths.is_empty() {
        table
    } else {
        table.set_grid(widths)
    }
}

fn heading_style(style_id: &str, name: &str, size_pt: usize, color: &str) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .color(color)
        .bold()
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let bullet_run = Run::new()
        .add_text("\u{2022} ")
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font));

    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(bullet_run);

    for run in parse_inline(text, &styles.body_font, styles.body_size) {
        para = para.add_run(run);
    }

    para
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, &styles.body_font, styles.body_size) {
        para = para.add_run(run);
    }
    para
}

fn caption_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, &styles.body_font, styles.caption_size) {
        para = para.add_run(run.color(styles.caption_color.clone()));
    }
    para
}

fn cell_paragraph(text: &str, header: bool, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, &styles.body_font, styles.table_size) {
        let run = if header { run.bold().color("FFFFFF") } else { run };
        para = para.add_run(run);
    }
    para
}

fn text_run(text: &str, font: &str, size_pt: usize) -> Run {
    Run::new()
        .add_text(text)
        .size(size_pt * 2)
        .fonts(RunFonts::new().ascii(font))
}

/// Parse simple inline formatting: **bold** segments.
fn parse_inline(text: &str, font: &str, size_pt: usize) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let before = &remaining[..start];
        if !before.is_empty() {
            runs.push(text_run(before, font, size_pt));
        }

        let after_start = &remaining[start + 2..];
        if let Some(end) = after_start.find("**") {
            runs.push(text_run(&after_start[..end], font, size_pt).bold());
            remaining = &after_start[end + 2..];
        } else {
            // No closing **, treat rest as normal text
            runs.push(text_run(remaining, font, size_pt));
            return runs;
        }
    }

    if !remaining.is_empty() {
        runs.push(text_run(remaining, font, size_pt));
    }

    runs
}
