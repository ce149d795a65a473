use thiserror::Error;

use crate::layout::Section;

/// A section layout that cannot be applied to a 35-item vector.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    #[error("section {section} is empty")]
    EmptySection { section: Section },

    #[error("section {section} ends at {end}, past the last question index {max}")]
    OutOfBounds {
        section: Section,
        end: usize,
        max: usize,
    },

    #[error("sections {first} and {second} overlap")]
    Overlap { first: Section, second: Section },
}
