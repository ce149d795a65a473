use insight_types::{AnswerVector, Instrument};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

use crate::error::LayoutError;

/// The three independently classified parts of the constitutional test.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Baseline body type
    Body,
    /// Innate constitution
    Prakriti,
    /// Current imbalance
    Vikriti,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Body, Section::Prakriti, Section::Vikriti];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Body => "body",
            Section::Prakriti => "prakriti",
            Section::Vikriti => "vikriti",
        }
    }

    /// Prefix used when deriving narrative template keys.
    pub fn key_prefix(self) -> &'static str {
        match self {
            Section::Body => "BODY",
            Section::Prakriti => "PRAKRITI",
            Section::Vikriti => "VIKRITI",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section name → contiguous question range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstitutionLayout {
    pub body: Range<usize>,
    pub prakriti: Range<usize>,
    pub vikriti: Range<usize>,
}

impl ConstitutionLayout {
    /// 6 body questions, 12 prakriti questions, 17 vikriti questions.
    pub const STANDARD: ConstitutionLayout = ConstitutionLayout {
        body: 0..6,
        prakriti: 6..18,
        vikriti: 18..35,
    };

    pub fn range(&self, section: Section) -> Range<usize> {
        match section {
            Section::Body => self.body.clone(),
            Section::Prakriti => self.prakriti.clone(),
            Section::Vikriti => self.vikriti.clone(),
        }
    }

    /// Check every range is non-empty, in bounds, and disjoint from the others.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let max = Instrument::Constitution.expected_len();

        for section in Section::ALL {
            let range = self.range(section);
            if range.is_empty() {
                return Err(LayoutError::EmptySection { section });
            }
            if range.end > max {
                return Err(LayoutError::OutOfBounds {
                    section,
                    end: range.end,
                    max,
                });
            }
        }

        for (i, &first) in Section::ALL.iter().enumerate() {
            for &second in &Section::ALL[i + 1..] {
                let a = self.range(first);
                let b = self.range(second);
                if a.start < b.end && b.start < a.end {
                    return Err(LayoutError::Overlap { first, second });
                }
            }
        }

        Ok(())
    }

    /// Slice one section out of a validated vector. A range past the end of
    /// the vector yields an empty slice.
    pub(crate) fn slice<'a>(&self, answers: &'a AnswerVector, section: Section) -> &'a [u8] {
        answers.values().get(self.range(section)).unwrap_or(&[])
    }
}

impl Default for ConstitutionLayout {
    fn default() -> Self {
        Self::STANDARD
    }
}
