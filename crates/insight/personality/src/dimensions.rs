use insight_types::{Instrument, Variant};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::LayoutError;

/// Questions per pole.
pub const POLE_QUESTIONS: usize = 4;

/// The six personality dimensions, in code order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Mind,
    Stress,
    Energy,
    Social,
    Discipline,
    Habits,
}

impl Dimension {
    pub const ALL: [Dimension; 6] = [
        Dimension::Mind,
        Dimension::Stress,
        Dimension::Energy,
        Dimension::Social,
        Dimension::Discipline,
        Dimension::Habits,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Dimension::Mind => "Mind",
            Dimension::Stress => "Stress",
            Dimension::Energy => "Energy",
            Dimension::Social => "Social",
            Dimension::Discipline => "Discipline",
            Dimension::Habits => "Habits",
        }
    }

    /// Pole scored by variant A.
    pub fn left_pole(self) -> &'static str {
        match self {
            Dimension::Mind => "Reflective",
            Dimension::Stress => "Calm",
            Dimension::Energy => "Focused",
            Dimension::Social => "Independent",
            Dimension::Discipline => "Methodical",
            Dimension::Habits => "Routine-Oriented",
        }
    }

    /// Pole scored by variant C.
    pub fn right_pole(self) -> &'static str {
        match self {
            Dimension::Mind => "Expressive",
            Dimension::Stress => "Reactive",
            Dimension::Energy => "Dynamic",
            Dimension::Social => "Collaborative",
            Dimension::Discipline => "Adaptive",
            Dimension::Habits => "Novelty-Seeking",
        }
    }

    /// Narrative template key prefix.
    pub fn template_prefix(self) -> &'static str {
        match self {
            Dimension::Mind => "MIND",
            Dimension::Stress => "STRESS",
            Dimension::Energy => "ENERGY",
            Dimension::Social => "SOCIAL",
            Dimension::Discipline => "DISCIPLINE",
            Dimension::Habits => "HABITS",
        }
    }

    /// Recover the variant a code letter stands for in this dimension.
    pub fn variant_for_letter(self, letter: char) -> Option<Variant> {
        let letter = letter.to_ascii_uppercase();
        if letter == 'B' {
            Some(Variant::B)
        } else if Some(letter) == initial(self.left_pole()) {
            Some(Variant::A)
        } else if Some(letter) == initial(self.right_pole()) {
            Some(Variant::C)
        } else {
            None
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub(crate) fn initial(pole: &str) -> Option<char> {
    pole.chars().next().map(|c| c.to_ascii_uppercase())
}

/// Which questions feed each pole of one dimension.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionLayout {
    pub dimension: Dimension,
    pub left: [usize; POLE_QUESTIONS],
    pub right: [usize; POLE_QUESTIONS],
}

/// Dimension → {left indices, right indices}, in code order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityLayout {
    pub dimensions: Vec<DimensionLayout>,
}

impl PersonalityLayout {
    /// Dimension `d` owns questions `8d..8d+8`: even offsets score the left
    /// pole, odd offsets the right pole.
    pub fn standard() -> Self {
        let dimensions = Dimension::ALL
            .iter()
            .enumerate()
            .map(|(d, &dimension)| {
                let base = d * 2 * POLE_QUESTIONS;
                DimensionLayout {
                    dimension,
                    left: [base, base + 2, base + 4, base + 6],
                    right: [base + 1, base + 3, base + 5, base + 7],
                }
            })
            .collect();
        Self { dimensions }
    }

    /// Every dimension once and in order, indices in bounds, no index reused.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.dimensions.len() != Dimension::ALL.len() {
            return Err(LayoutError::DimensionCount {
                found: self.dimensions.len(),
            });
        }

        let max = Instrument::Personality.expected_len();
        let mut seen = vec![false; max];

        for (position, (entry, expected)) in self.dimensions.iter().zip(Dimension::ALL).enumerate() {
            if entry.dimension != expected {
                return Err(LayoutError::DimensionOrder {
                    dimension: entry.dimension,
                    position,
                    expected,
                });
            }

            for &index in entry.left.iter().chain(entry.right.iter()) {
                if index >= max {
                    return Err(LayoutError::OutOfBounds {
                        dimension: entry.dimension,
                        index,
                        max: max - 1,
                    });
                }
                if seen[index] {
                    return Err(LayoutError::DuplicateIndex {
                        dimension: entry.dimension,
                        index,
                    });
                }
                seen[index] = true;
            }
        }

        Ok(())
    }
}

impl Default for PersonalityLayout {
    fn default() -> Self {
        Self::standard()
    }
}
