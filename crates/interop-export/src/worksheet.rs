use serde::Serialize;

use interop_content::links::{self, Link};
use interop_content::planning::plan_rows;
use interop_content::reference::{
    AnalysisStep, CommonGap, EvaluationElement, Standard, ANALYSIS_STEPS, COMMON_GAPS,
    EVALUATION_PLAN, STANDARDS,
};
use interop_core::models::selections::{display_or_placeholder, ExportSelections};

use crate::error::ExportError;
use crate::render::render_template;

pub const TITLE: &str = "Interoperability Needs Analysis & System Evaluation";

const TEMPLATE_NAME: &str = "worksheet.md";
const TEMPLATE: &str = include_str!("../templates/worksheet.md.tera");

/// One `Item | Selection` row of a summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub item: &'static str,
    pub selection: String,
}

/// One row of the optional appendix listing every planning option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppendixRow {
    pub gap: &'static str,
    pub interface_type: &'static str,
    pub fix: &'static str,
    pub reference: &'static str,
    pub selected: &'static str,
}

/// Everything the worksheet template reads.
#[derive(Debug, Clone, Serialize)]
pub struct WorksheetContext {
    pub title: &'static str,
    pub generated_at: String,
    pub introductory_reading: &'static [Link],
    pub helpful_reading: &'static [Link],
    pub cms_framework: Link,
    pub onc_criteria: Link,
    pub onc_test_methods: Link,
    pub standards: &'static [Standard],
    pub analysis_steps: &'static [AnalysisStep],
    pub plan_summary: Vec<SummaryRow>,
    pub common_gaps: &'static [CommonGap],
    pub integrity_summary: Vec<SummaryRow>,
    pub evaluation_plan: &'static [EvaluationElement],
    pub key_resources: &'static [Link],
    pub include_appendix: bool,
    pub appendix: Vec<AppendixRow>,
}

impl WorksheetContext {
    pub fn new(selections: &ExportSelections, generated_at: &str) -> Self {
        let show = |value: &Option<String>| display_or_placeholder(value.as_deref()).to_string();

        let plan_summary = vec![
            SummaryRow { item: "Gap", selection: show(&selections.plan_gap) },
            SummaryRow { item: "Suggested Interface Type", selection: show(&selections.plan_interface) },
            SummaryRow { item: "Suggested Fix", selection: show(&selections.plan_fix) },
            SummaryRow { item: "Standard Reference", selection: show(&selections.plan_reference) },
        ];
        let integrity_summary = vec![SummaryRow {
            item: "Integrity/Security Focus",
            selection: show(&selections.integrity_focus),
        }];

        let appendix = if selections.include_all_options {
            plan_rows()
                .iter()
                .map(|row| AppendixRow {
                    gap: row.gap,
                    interface_type: row.interface_type,
                    fix: row.fix,
                    reference: row.reference,
                    selected: if selections.plan_id.as_deref() == Some(row.id) {
                        "\u{2713}"
                    } else {
                        ""
                    },
                })
                .collect()
        } else {
            Vec::new()
        };

        Self {
            title: TITLE,
            generated_at: generated_at.to_string(),
            introductory_reading: &links::INTRODUCTORY_READING,
            helpful_reading: &links::HELPFUL_READING,
            cms_framework: links::CMS_FRAMEWORK,
            onc_criteria: links::ONC_CRITERIA,
            onc_test_methods: links::ONC_TEST_METHODS,
            standards: &STANDARDS,
            analysis_steps: &ANALYSIS_STEPS,
            plan_summary,
            common_gaps: &COMMON_GAPS,
            integrity_summary,
            evaluation_plan: &EVALUATION_PLAN,
            key_resources: &links::KEY_RESOURCES,
            include_appendix: selections.include_all_options,
            appendix,
        }
    }
}

/// Render the built-in worksheet template to markup.
pub fn render_worksheet(context: &WorksheetContext) -> Result<String, ExportError> {
    render_template(TEMPLATE_NAME, TEMPLATE, context)
}
