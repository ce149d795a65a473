use thiserror::Error;

use crate::dimensions::Dimension;

/// A dimension layout that cannot be applied to a 48-item vector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("layout must list each of the six dimensions once, found {found} entries")]
    DimensionCount { found: usize },

    #[error("dimension {dimension} is listed at position {position}, expected {expected}")]
    DimensionOrder {
        dimension: Dimension,
        position: usize,
        expected: Dimension,
    },

    #[error("question index {index} in {dimension} is past the last question {max}")]
    OutOfBounds {
        dimension: Dimension,
        index: usize,
        max: usize,
    },

    #[error("question index {index} is assigned more than once (second use in {dimension})")]
    DuplicateIndex { dimension: Dimension, index: usize },
}
