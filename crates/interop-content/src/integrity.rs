use serde::Serialize;

use interop_core::models::group::SingleSelectGroup;
use interop_core::models::rule::RecommendationRule;

use crate::SelectableRow;

pub const GROUP_NAME: &str = "integrity_focus";

pub const AREA: &str = "Area";
pub const PLAIN_MEANING: &str = "Plain Meaning";
pub const LIKELY_GAP: &str = "Likely Gap";
pub const IMPROVEMENT: &str = "Improvement";
pub const STANDARDS: &str = "Standards";

/// One row of the 2.3 integrity/security focus table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntegrityRow {
    pub id: &'static str,
    pub area: &'static str,
    pub plain_meaning: &'static str,
    pub likely_gap: &'static str,
    pub improvement: &'static str,
    pub standards: &'static str,
}

impl SelectableRow for IntegrityRow {
    fn id(&self) -> &str {
        self.id
    }

    fn columns(&self) -> Vec<(&'static str, &str)> {
        vec![
            (AREA, self.area),
            (PLAIN_MEANING, self.plain_meaning),
            (LIKELY_GAP, self.likely_gap),
            (IMPROVEMENT, self.improvement),
            (STANDARDS, self.standards),
        ]
    }
}

static INTEGRITY_ROWS: [IntegrityRow; 4] = [
    IntegrityRow {
        id: "data_accuracy",
        area: "Data Accuracy (Integrity)",
        plain_meaning: "Ensure information stays correct and unchanged during transfer/storage.",
        likely_gap: "EHR/PACS show mismatched IDs/dates; altered payloads not detected.",
        improvement: "Enable message checksums/hashes; verify accession/MRN on receipt.",
        standards: "ONC \u{a7}170.315(d)(9); HIPAA 164.312(c)(1)",
    },
    IntegrityRow {
        id: "access_tracking",
        area: "Access Tracking (Audit Logs)",
        plain_meaning: "Record who viewed/edited data to support privacy & accountability.",
        likely_gap: "Separate, incomplete audit trails; clocks not synchronized.",
        improvement: "Unified audit (engine/SIEM), unique IDs, NTP time sync, regular review.",
        standards: "ONC \u{a7}170.315(d); HIPAA 164.312(b); CMS Identity/Security/Trust",
    },
    IntegrityRow {
        id: "error_detection",
        area: "Error Detection & Alerts",
        plain_meaning: "Detect and surface failed transfers quickly.",
        likely_gap: "Orders/results fail silently; no retry queues or alerts.",
        improvement: "ACK/NACK monitoring, retries, routed alerts to on-call IT/imaging.",
        standards: "AHRQ Evaluation (data quality); supports CMS Data Availability",
    },
    IntegrityRow {
        id: "patient_identity",
        area: "Patient Identity Management (MPI)",
        plain_meaning: "One accurate identity across systems.",
        likely_gap: "Duplicate/mismatched MRNs; weak demographic matching.",
        improvement: "Implement/strengthen MPI; matching thresholds; periodic deduping.",
        standards: "CMS Identity & Trust",
    },
];

/// All integrity/security rows in display order.
pub fn integrity_rows() -> &'static [IntegrityRow] {
    &INTEGRITY_ROWS
}

pub fn get_integrity_row(id: &str) -> Option<&'static IntegrityRow> {
    INTEGRITY_ROWS.iter().find(|r| r.id == id)
}

/// A new, empty integrity-focus group.
pub fn integrity_group() -> SingleSelectGroup {
    crate::group_of(GROUP_NAME, &INTEGRITY_ROWS)
}

/// Planning gap id → integrity area id suggested for it.
pub fn recommended_integrity() -> RecommendationRule {
    RecommendationRule::from_iter([
        ("data_silos", "access_tracking"),
        ("inconsistent_patient_ids", "patient_identity"),
        ("missing_clinical_context", "data_accuracy"),
        ("no_fhir_connection", "error_detection"),
        ("data_integrity_security", "data_accuracy"),
    ])
}
