//! # insight-types
//!
//! Shared vocabulary for the Insight classification engine.
//!
//! Two instruments consume fixed-length answer vectors:
//!
//! - **Constitution**: 35 items answered 1–4, split into body, prakriti and
//!   vikriti sections and classified into dosha codes
//! - **Personality**: 48 items answered 1–7, scored on six bipolar dimensions
//!
//! Every scoring path starts with [`AnswerVector::validate`]. It is the only
//! place malformed input is rejected; downstream code takes an
//! [`AnswerVector`] and can assume length and value range hold.

#![deny(unsafe_code)]

pub mod answers;
pub mod dosha;
pub mod error;
pub mod variant;

pub use answers::{AnswerVector, Instrument};
pub use dosha::Dosha;
pub use error::InvalidInputError;
pub use variant::Variant;
