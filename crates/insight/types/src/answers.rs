use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

use crate::error::InvalidInputError;

/// The two questionnaires the engine understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Instrument {
    /// 35-item body type / prakriti / vikriti test
    Constitution,
    /// 48-item six-dimension personality test
    Personality,
}

impl Instrument {
    /// Number of answers a complete submission carries.
    pub const fn expected_len(self) -> usize {
        match self {
            Instrument::Constitution => 35,
            Instrument::Personality => 48,
        }
    }

    /// Closed range of legal answer values.
    pub const fn value_range(self) -> RangeInclusive<u8> {
        match self {
            Instrument::Constitution => 1..=4,
            Instrument::Personality => 1..=7,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Instrument::Constitution => "constitution",
            Instrument::Personality => "personality",
        }
    }
}

impl fmt::Display for Instrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated answer vector.
///
/// The only constructor is [`AnswerVector::validate`], so holding one proves
/// the length and every value are legal for its instrument.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerVector {
    instrument: Instrument,
    values: Vec<u8>,
}

impl AnswerVector {
    /// Check length first, then each value in order.
    pub fn validate(instrument: Instrument, raw: &[i64]) -> Result<Self, InvalidInputError> {
        let expected = instrument.expected_len();
        if raw.len() != expected {
            return Err(InvalidInputError::WrongLength {
                instrument,
                expected,
                actual: raw.len(),
            });
        }

        let range = instrument.value_range();
        let mut values = Vec::with_capacity(expected);
        for (index, &value) in raw.iter().enumerate() {
            match u8::try_from(value) {
                Ok(v) if range.contains(&v) => values.push(v),
                _ => {
                    return Err(InvalidInputError::OutOfRange {
                        instrument,
                        index,
                        value,
                        min: *range.start(),
                        max: *range.end(),
                    })
                }
            }
        }

        Ok(Self { instrument, values })
    }

    pub fn instrument(&self) -> Instrument {
        self.instrument
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Answers at the given indices, in the order the indices are listed.
    /// An index past the end yields `None`.
    pub fn pick<'a>(&'a self, indices: &'a [usize]) -> impl Iterator<Item = Option<u8>> + 'a {
        indices.iter().map(move |&i| self.values.get(i).copied())
    }

    /// Arithmetic mean of all answers.
    pub fn mean(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.values.iter().map(|&v| u32::from(v)).sum();
        f64::from(sum) / self.values.len() as f64
    }
}
