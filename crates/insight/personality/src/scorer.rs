use insight_types::{AnswerVector, Variant};
use serde::{Deserialize, Serialize};

use crate::dimensions::{initial, Dimension, PersonalityLayout};

/// Minimum pole-sum gap for a dimension to lean one way.
pub const VARIANT_GAP: u32 = 5;

/// Scored outcome of one dimension.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DimensionResult {
    /// 1-based position in the code
    pub index: usize,
    pub dimension: Dimension,
    pub name: String,
    pub left_pole: String,
    pub right_pole: String,
    pub left_score: u32,
    pub right_score: u32,
    pub variant: Variant,
    pub code_letter: char,
}

pub fn classify_variant(left: u32, right: u32) -> Variant {
    if left.abs_diff(right) < VARIANT_GAP {
        Variant::B
    } else if left >= right + VARIANT_GAP {
        Variant::A
    } else {
        Variant::C
    }
}

/// `B` for balanced, otherwise the dominant pole's initial.
pub fn code_letter(dimension: Dimension, variant: Variant) -> char {
    let pole = match variant {
        Variant::A => dimension.left_pole(),
        Variant::B => return 'B',
        Variant::C => dimension.right_pole(),
    };
    initial(pole).unwrap_or('B')
}

/// Score every dimension of the layout, in layout order. Indices past the end
/// of `answers` contribute nothing; callers validate the layout first.
pub(crate) fn score_dimensions(answers: &AnswerVector, layout: &PersonalityLayout) -> Vec<DimensionResult> {
    layout
        .dimensions
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let dimension = entry.dimension;
            let left_score = answers.pick(&entry.left).flatten().map(u32::from).sum();
            let right_score = answers.pick(&entry.right).flatten().map(u32::from).sum();
            let variant = classify_variant(left_score, right_score);

            DimensionResult {
                index: i + 1,
                dimension,
                name: dimension.name().to_string(),
                left_pole: dimension.left_pole().to_string(),
                right_pole: dimension.right_pole().to_string(),
                left_score,
                right_score,
                variant,
                code_letter: code_letter(dimension, variant),
            }
        })
        .collect()
}
