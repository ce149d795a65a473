//! # insight-constitution
//!
//! Classification of the 35-item constitutional questionnaire into three
//! independent dosha profiles.
//!
//! ## Pipeline
//!
//! ```text
//! AnswerVector ─▶ layout (section slices) ─▶ CategoryCounts
//!                   ├─ body / prakriti ─▶ primary + modifier ─▶ 3×3 code table
//!                   └─ vikriti ─────────▶ ordered rule chain on raw counts
//! ```
//!
//! ## Tie-breaking
//!
//! Count ties are resolved by scanning the section's answers from first to
//! last and picking whichever tied category reaches the tied count first.
//! If nothing separates them (all counts zero) the fixed order
//! Vata > Pitta > Kapha decides.
//!
//! All functions are pure: the same answers always produce the same report.

#![deny(unsafe_code)]

pub mod codes;
pub mod counter;
pub mod error;
pub mod layout;
pub mod report;
pub mod resolver;
pub mod vikriti;

pub use codes::{map_primary_modifier, DoshaCode, CODE_TABLE};
pub use counter::CategoryCounts;
pub use error::LayoutError;
pub use layout::{ConstitutionLayout, Section};
pub use report::{generate_report, ConstitutionReport, ConstitutionScorer, SectionResult, VikritiResult};
pub use resolver::{earliest_to_reach, resolve_primary_modifier, Resolution};
pub use vikriti::{classify_vikriti, VikritiOutcome, VikritiRule, VIKRITI_RULES};
