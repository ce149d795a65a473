//! # insight-templates
//!
//! Narrative enrichment for computed reports.
//!
//! The merger only derives lookup keys; template text lives in an external
//! [`TemplateStore`] that callers construct and pass in. A missing key is a
//! soft failure: it is logged, the slot is `None`, and the merge continues.
//!
//! ## Key format
//!
//! - personality: `{PREFIX}_{variant}_{word}`, e.g. `MIND_A_Reflective`,
//!   `HABITS_C_Novelty`, `STRESS_B_Balanced`
//! - constitution: `{SECTION}_{code}`, e.g. `BODY_VP`, `VIKRITI_VPK`

#![deny(unsafe_code)]

pub mod error;
pub mod keys;
pub mod merge;
pub mod store;

pub use error::TemplateError;
pub use keys::{dimension_template_key, first_word, section_template_key};
pub use merge::{
    merge_constitution_report_with_templates, merge_personality_report_with_templates,
    Merged, MergedConstitutionReport, MergedDimension, MergedPersonalityReport,
};
pub use store::{FileTemplateStore, InMemoryTemplateStore, Template, TemplateFormat, TemplateStore};
