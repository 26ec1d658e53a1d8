//! Read-only reference tables printed in the worksheet document.

use serde::Serialize;

/// 1.3: what each interchange standard does.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Standard {
    pub name: &'static str,
    pub used_by: &'static str,
    pub what_it_does: &'static str,
    pub limitations: &'static str,
}

/// 1.5: one step of the gap-analysis template.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnalysisStep {
    pub step: &'static str,
    pub what_to_do: &'static str,
    pub guiding_question: &'static str,
    pub example: &'static str,
}

/// 2.2: a common interface gap with its fix and regulatory anchor.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CommonGap {
    pub gap_type: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub possible_fix: &'static str,
    pub why_it_matters: &'static str,
}

/// 2.4: one element of the evaluation plan.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EvaluationElement {
    pub element: &'static str,
    pub explanation: &'static str,
    pub example: &'static str,
}

pub static STANDARDS: [Standard; 3] = [
    Standard {
        name: "HL7 v2",
        used_by: "Meditech EHR (legacy)",
        what_it_does: "Sends patient data, orders, and results through text-based messages separated by pipes |.",
        limitations: "Fast but unstructured; no API; doesn\u{2019}t handle images.",
    },
    Standard {
        name: "DICOM",
        used_by: "Agfa PACS (imaging system)",
        what_it_does: "Stores and transmits images (X-rays, MRIs) with metadata (patient ID, modality, body part, date).",
        limitations: "Great for images, but doesn\u{2019}t include full clinical notes or orders from EHRs.",
    },
    Standard {
        name: "FHIR",
        used_by: "Modern systems and apps",
        what_it_does: "Web-based framework that represents data (patients, labs, imaging) as structured \u{201c}resources.\u{201d}",
        limitations: "Legacy systems often can\u{2019}t use it without new modules or middleware.",
    },
];

pub static ANALYSIS_STEPS: [AnalysisStep; 5] = [
    AnalysisStep {
        step: "1. Select Two Standards to Compare",
        what_to_do: "Choose HL7 v2 vs. DICOM, or HL7 v2 vs. FHIR.",
        guiding_question: "Which standard does each system rely on?",
        example: "Meditech uses HL7 v2; Agfa uses DICOM and FHIR.",
    },
    AnalysisStep {
        step: "2. Describe How They Interact",
        what_to_do: "Explain how the systems communicate.",
        guiding_question: "What is sent? How is it received?",
        example: "EHR sends an HL7 order; PACS returns DICOM images and a report.",
    },
    AnalysisStep {
        step: "3. Identify a Gap",
        what_to_do: "Point out where exchange fails or data is lost.",
        guiding_question: "Is any key information missing or mismatched?",
        example: "EHR can\u{2019}t show images or metadata from PACS.",
    },
    AnalysisStep {
        step: "4. Propose a Fix",
        what_to_do: "Suggest one realistic improvement.",
        guiding_question: "Would an interface engine or API help?",
        example: "Add middleware that converts HL7 v2 messages into FHIR/DICOM.",
    },
    AnalysisStep {
        step: "5. Explain the Impact",
        what_to_do: "Connect your fix to CMS/ONC standards.",
        guiding_question: "What criterion would this satisfy?",
        example: "Meets CMS \u{201c}Data Availability\u{201d} and ONC API criteria.",
    },
];

pub static COMMON_GAPS: [CommonGap; 5] = [
    CommonGap {
        gap_type: "Data Silos",
        description: "EHR and PACS store data separately.",
        example: "Clinicians open two systems to view reports and images.",
        possible_fix: "Add an interface engine linking HL7 v2 and DICOM.",
        why_it_matters: "CMS Criterion 3 \u{2013} Data Availability.",
    },
    CommonGap {
        gap_type: "Inconsistent Patient IDs",
        description: "IDs formatted differently in each system.",
        example: "\u{201c}12345\u{201d} in EHR vs. \u{201c}0012345\u{201d} in PACS.",
        possible_fix: "Implement a Master Patient Index (MPI).",
        why_it_matters: "CMS Criterion 5 \u{2013} Identity & Trust.",
    },
    CommonGap {
        gap_type: "Missing Clinical Context",
        description: "Imaging data lacks notes or order details.",
        example: "PACS shows image only.",
        possible_fix: "Map HL7 order fields into DICOM metadata.",
        why_it_matters: "ONC \u{a7}170.315(b) \u{2013} Transitions of Care.",
    },
    CommonGap {
        gap_type: "No FHIR Connection",
        description: "Legacy EHR cannot use FHIR APIs.",
        example: "Agfa exposes FHIR but EHR can\u{2019}t read it.",
        possible_fix: "Enable Meditech\u{2019}s FHIR module or use translator middleware.",
        why_it_matters: "ONC \u{a7}170.315(g)(10) \u{2013} API Exchange.",
    },
    CommonGap {
        gap_type: "Data Integrity & Security",
        description: "Lack of accuracy checks or audit trails.",
        example: "EHR/PACS mismatch IDs, limited tracking.",
        possible_fix: "Enable audit logs & integrity checks; shared audit trail.",
        why_it_matters: "ONC \u{a7}170.315(d)(9); CMS Criterion 5 \u{2013} Identity & Trust.",
    },
];

pub static EVALUATION_PLAN: [EvaluationElement; 7] = [
    EvaluationElement {
        element: "Goal / Outcome",
        explanation: "What improvement do you want to see?",
        example: "\u{201c}Reduce failed interface messages by 50%.\u{201d}",
    },
    EvaluationElement {
        element: "Metric to Measure",
        explanation: "A quantitative or qualitative measure.",
        example: "% of successful message transfers; time to access image report.",
    },
    EvaluationElement {
        element: "Data Source / Method",
        explanation: "How you\u{2019}ll collect data.",
        example: "System logs, user survey, chart audit.",
    },
    EvaluationElement {
        element: "Who Collects Data",
        explanation: "Roles responsible.",
        example: "IT analyst, imaging supervisor.",
    },
    EvaluationElement {
        element: "Timeline / Feasibility",
        explanation: "When and how long to track.",
        example: "Weekly over 3 months.",
    },
    EvaluationElement {
        element: "Barriers",
        explanation: "Challenges or limitations.",
        example: "Staff time, cost, training needs.",
    },
    EvaluationElement {
        element: "Using Results",
        explanation: "How findings will guide improvement.",
        example: "Present at quality meeting to plan upgrades.",
    },
];
