use thiserror::Error;

use crate::answers::Instrument;

/// Fatal input errors. Scoring aborts on the first one found.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputError {
    #[error("{instrument} expects {expected} answers, got {actual}")]
    WrongLength {
        instrument: Instrument,
        expected: usize,
        actual: usize,
    },

    #[error("{instrument} answer #{index} is {value}, allowed range is {min}..={max}")]
    OutOfRange {
        instrument: Instrument,
        index: usize,
        value: i64,
        min: u8,
        max: u8,
    },
}
