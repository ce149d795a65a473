//! # insight-personality
//!
//! Scoring for the 48-item personality questionnaire.
//!
//! Each of six bipolar dimensions owns eight questions, four per pole. Pole
//! sums are compared with a fixed 5-point gap:
//!
//! - `left ≥ right + 5` → variant **A** (left pole dominant)
//! - `right ≥ left + 5` → variant **C** (right pole dominant)
//! - otherwise → variant **B** (balanced)
//!
//! The six variants then feed three independent consumers:
//!
//! - the hyphen-joined **code** (`R-C-F-I-A-B`), exact-matched against an
//!   18-entry catalog of named types
//! - the **core group**, from Mind / Stress / Energy
//! - the **functional role**, from Social / Discipline / Habits via an ordered
//!   rule chain, plus a **mind word** from Mind alone

#![deny(unsafe_code)]

pub mod catalog;
pub mod dimensions;
pub mod error;
pub mod naming;
pub mod report;
pub mod scorer;

pub use catalog::{match_personality_type, normalize_code, personality_code, PersonalityType, CATALOG};
pub use dimensions::{Dimension, DimensionLayout, PersonalityLayout};
pub use error::LayoutError;
pub use naming::{
    core_group, functional_role, mind_word, personality_name, CoreGroup, CoreGroupRule,
    FunctionalRole, RoleInputs, RoleRule, CORE_GROUP_RULES, ROLE_RULES, UNKNOWN_PERSONALITY,
};
pub use report::{score_personality, PersonalityReport, PersonalityScorer};
pub use scorer::{classify_variant, code_letter, DimensionResult, VARIANT_GAP};
