use insight_types::{AnswerVector, Instrument, InvalidInputError};
use serde::Serialize;
use tracing::debug;

use crate::catalog::{match_personality_type, personality_code, PersonalityType};
use crate::dimensions::PersonalityLayout;
use crate::error::LayoutError;
use crate::naming::personality_name;
use crate::scorer::{score_dimensions, DimensionResult};

/// Output of one personality scoring run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PersonalityReport {
    pub code: String,
    pub dimensions: Vec<DimensionResult>,
    pub personality_type: Option<PersonalityType>,
    pub personality_name: String,
    /// `100 × mean / 7`, rounded to two decimals
    pub score: f64,
}

#[derive(Clone, Debug)]
pub struct PersonalityScorer {
    layout: PersonalityLayout,
}

impl PersonalityScorer {
    pub fn new(layout: PersonalityLayout) -> Result<Self, LayoutError> {
        layout.validate()?;
        Ok(Self { layout })
    }

    pub fn layout(&self) -> &PersonalityLayout {
        &self.layout
    }

    pub fn score(&self, raw: &[i64]) -> Result<PersonalityReport, InvalidInputError> {
        let answers = AnswerVector::validate(Instrument::Personality, raw)?;
        Ok(self.score_validated(&answers))
    }

    pub fn score_validated(&self, answers: &AnswerVector) -> PersonalityReport {
        let dimensions = score_dimensions(answers, &self.layout);
        let code = personality_code(&dimensions);
        let personality_type = match_personality_type(&code).copied();
        let personality_name = personality_name(&dimensions);
        let score = round2(100.0 * answers.mean() / 7.0);

        debug!(
            code = code.as_str(),
            matched = personality_type.map(|t| t.id),
            name = personality_name.as_str(),
            "personality scored"
        );

        PersonalityReport {
            code,
            dimensions,
            personality_type,
            personality_name,
            score,
        }
    }
}

impl Default for PersonalityScorer {
    fn default() -> Self {
        Self {
            layout: PersonalityLayout::standard(),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score a 48-answer vector with the standard layout.
pub fn score_personality(raw: &[i64]) -> Result<PersonalityReport, InvalidInputError> {
    PersonalityScorer::default().score(raw)
}
