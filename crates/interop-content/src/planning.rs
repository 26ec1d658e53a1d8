use serde::Serialize;

use interop_core::models::group::SingleSelectGroup;

use crate::SelectableRow;

pub const GROUP_NAME: &str = "interface_planning";

pub const GAP: &str = "Gap";
pub const DESCRIPTION: &str = "Description";
pub const INTERFACE_TYPE: &str = "Suggested Interface Type";
pub const FIX: &str = "Suggested Fix";
pub const REFERENCE: &str = "Standard Reference";

/// One row of the 1.7 interface-planning table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlanRow {
    pub id: &'static str,
    pub gap: &'static str,
    pub description: &'static str,
    pub interface_type: &'static str,
    pub fix: &'static str,
    pub reference: &'static str,
}

impl SelectableRow for PlanRow {
    fn id(&self) -> &str {
        self.id
    }

    fn columns(&self) -> Vec<(&'static str, &str)> {
        vec![
            (GAP, self.gap),
            (DESCRIPTION, self.description),
            (INTERFACE_TYPE, self.interface_type),
            (FIX, self.fix),
            (REFERENCE, self.reference),
        ]
    }
}

static PLAN_ROWS: [PlanRow; 5] = [
    PlanRow {
        id: "data_silos",
        gap: "Data Silos",
        description: "EHR and PACS store data separately; clinicians must open two systems.",
        interface_type: "Interface Engine (Middleware)",
        fix: "Add/Optimize Interface Engine",
        reference: "CMS Criterion 3 \u{2013} Data Availability",
    },
    PlanRow {
        id: "inconsistent_patient_ids",
        gap: "Inconsistent Patient IDs",
        description: "IDs differ in format/structure (e.g., \u{201c}12345\u{201d} vs \u{201c}0012345\u{201d}).",
        interface_type: "Interface Engine (Middleware)",
        fix: "Implement MPI",
        reference: "CMS Criterion 5 \u{2013} Identity & Trust",
    },
    PlanRow {
        id: "missing_clinical_context",
        gap: "Missing Clinical Context",
        description: "Imaging data lacks clinical notes or order linkage.",
        interface_type: "Interface Engine (Middleware)",
        fix: "Map HL7\u{2192}DICOM Metadata",
        reference: "ONC \u{a7}170.315(b) \u{2013} Transitions of Care",
    },
    PlanRow {
        id: "no_fhir_connection",
        gap: "No FHIR Connection",
        description: "Legacy EHR cannot use FHIR APIs for modern data exchange.",
        interface_type: "FHIR API",
        fix: "Enable/Upgrade EHR FHIR",
        reference: "ONC \u{a7}170.315(g)(10) \u{2013} API Exchange",
    },
    PlanRow {
        id: "data_integrity_security",
        gap: "Data Integrity & Security",
        description: "Lack of audit trails or accuracy checks between systems.",
        interface_type: "Interface Engine (Middleware)",
        fix: "Enable audit logs & integrity checks; shared audit trail",
        reference: "ONC \u{a7}170.315(d)(9); CMS Criterion 5 \u{2013} Identity & Trust",
    },
];

/// All planning rows in display order.
pub fn plan_rows() -> &'static [PlanRow] {
    &PLAN_ROWS
}

pub fn get_plan_row(id: &str) -> Option<&'static PlanRow> {
    PLAN_ROWS.iter().find(|r| r.id == id)
}

/// A new, empty interface-planning group.
pub fn plan_group() -> SingleSelectGroup {
    crate::group_of(GROUP_NAME, &PLAN_ROWS)
}
