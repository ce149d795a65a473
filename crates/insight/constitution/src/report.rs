use insight_types::{AnswerVector, Dosha, Instrument, InvalidInputError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::codes::{map_primary_modifier, DoshaCode};
use crate::counter::CategoryCounts;
use crate::error::LayoutError;
use crate::layout::{ConstitutionLayout, Section};
use crate::resolver::resolve_primary_modifier;
use crate::vikriti::classify_vikriti;

/// Body type or prakriti classification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionResult {
    pub section: Section,
    pub code: DoshaCode,
    pub label: String,
    pub primary: Dosha,
    pub modifier: Option<Dosha>,
    pub counts: CategoryCounts,
}

/// Vikriti classification. Carries no primary/modifier, only the rule that fired.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VikritiResult {
    pub code: DoshaCode,
    pub label: String,
    pub rule: String,
    pub counts: CategoryCounts,
}

/// Full constitutional report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstitutionReport {
    pub body: SectionResult,
    pub prakriti: SectionResult,
    pub vikriti: VikritiResult,
}

/// Scores constitutional answer vectors against a validated layout.
#[derive(Clone, Debug)]
pub struct ConstitutionScorer {
    layout: ConstitutionLayout,
}

impl ConstitutionScorer {
    /// Build a scorer for a custom layout, rejecting it if it does not fit
    /// the 35-item instrument.
    pub fn new(layout: ConstitutionLayout) -> Result<Self, LayoutError> {
        layout.validate()?;
        Ok(Self { layout })
    }

    pub fn layout(&self) -> &ConstitutionLayout {
        &self.layout
    }

    /// Validate raw answers, then classify all three sections.
    pub fn generate_report(&self, raw: &[i64]) -> Result<ConstitutionReport, InvalidInputError> {
        let answers = AnswerVector::validate(Instrument::Constitution, raw)?;
        Ok(self.classify(&answers))
    }

    /// Classify an already validated vector.
    pub fn classify(&self, answers: &AnswerVector) -> ConstitutionReport {
        let body = self.classify_section(answers, Section::Body);
        let prakriti = self.classify_section(answers, Section::Prakriti);

        let section = self.layout.slice(answers, Section::Vikriti);
        let counts = CategoryCounts::tally(section);
        let outcome = classify_vikriti(&counts, section);
        let vikriti = VikritiResult {
            code: outcome.code,
            label: outcome.code.label(Section::Vikriti),
            rule: outcome.rule.to_string(),
            counts,
        };

        debug!(
            body = %body.code,
            prakriti = %prakriti.code,
            vikriti = %vikriti.code,
            "constitution report generated"
        );

        ConstitutionReport {
            body,
            prakriti,
            vikriti,
        }
    }

    fn classify_section(&self, answers: &AnswerVector, section: Section) -> SectionResult {
        let slice = self.layout.slice(answers, section);
        let counts = CategoryCounts::tally(slice);
        let resolution = resolve_primary_modifier(slice, &counts);
        let code = map_primary_modifier(resolution.primary, resolution.modifier);

        SectionResult {
            section,
            code,
            label: code.label(section),
            primary: resolution.primary,
            modifier: resolution.modifier,
            counts,
        }
    }
}

impl Default for ConstitutionScorer {
    fn default() -> Self {
        Self {
            layout: ConstitutionLayout::STANDARD,
        }
    }
}

/// Score a 35-answer vector with the standard layout.
pub fn generate_report(raw: &[i64]) -> Result<ConstitutionReport, InvalidInputError> {
    ConstitutionScorer::default().generate_report(raw)
}
