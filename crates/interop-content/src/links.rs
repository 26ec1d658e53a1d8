//! Reading lists. Titles and URLs are printed verbatim.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Link {
    pub title: &'static str,
    pub url: &'static str,
}

const fn link(title: &'static str, url: &'static str) -> Link {
    Link { title, url }
}

pub const CMS_FRAMEWORK: Link = link(
    "CMS Interoperability Framework",
    "https://www.cms.gov/health-technology-ecosystem/interoperability-framework",
);
pub const ONC_CRITERIA: Link = link(
    "ONC \u{a7}170.315 Certification Criteria",
    "https://www.ecfr.gov/current/title-45/subtitle-A/subchapter-D/part-170/subpart-C/section-170.315",
);
pub const ONC_ISA: Link = link(
    "ONC Interoperability Standards Advisory (ISA)",
    "https://www.healthit.gov/isa",
);
pub const AHRQ_TOOLKIT: Link = link(
    "AHRQ Health IT Evaluation Toolkit",
    "https://digital.ahrq.gov/sites/default/files/docs/page/health-information-technology-evaluation-toolkit-2009-update.pdf",
);
pub const HIMSS: Link = link(
    "HIMSS Interoperability in Healthcare",
    "https://gkc.himss.org/resources/interoperability-healthcare",
);
pub const ONC_TEST_METHODS: Link = link(
    "ONC Health IT Certification Test Methods",
    "https://www.healthit.gov/topic/certification-ehrs/onc-health-it-certification-program-test-method",
);

/// 1.2 Introductory Reading.
pub static INTRODUCTORY_READING: [Link; 6] = [
    link("Integrating DICOM with HL7", "https://radsource.us/dicom-vs-hl7/"),
    link(
        "HL7 v2 Integration Challenges in Hospitals",
        "https://huspi.com/blog-open/hl7-v2-integration-challenges-in-hospitals/",
    ),
    link("What is HL7 V2? A Guide in 2025", "https://flatirons.com/blog/what-is-hl7-v2/"),
    link(
        "What is DICOM & why it matters",
        "https://www.intelerad.com/en/2023/02/23/handling-dicom-medical-imaging-data/",
    ),
    link("What is HL7 FHIR?", "https://www.particlehealth.com/blog/what-is-fhir"),
    link("FHIR vs HL7", "https://binariks.com/blog/fhir-vs-hl7/"),
];

/// 1.3 Helpful Reading.
pub static HELPFUL_READING: [Link; 3] = [CMS_FRAMEWORK, ONC_CRITERIA, HIMSS];

/// 2.6 Key Resources.
pub static KEY_RESOURCES: [Link; 7] = [
    CMS_FRAMEWORK,
    ONC_CRITERIA,
    ONC_ISA,
    AHRQ_TOOLKIT,
    HIMSS,
    link(
        "Meditech Expanse Overview",
        "https://ehr.meditech.com/ehr-solutions/meditech-expanse",
    ),
    link(
        "Agfa Enterprise Imaging Platform",
        "https://www.agfahealthcare.com/enterprise-imaging-platform/",
    ),
];
