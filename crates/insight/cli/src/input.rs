//! Answer vector input

use crate::error::{CliError, CliResult};
use clap::Args;
use std::path::PathBuf;

/// Where a command reads its answers from
#[derive(Args, Debug, Clone)]
pub struct AnswerInput {
    /// Comma-separated answers, e.g. `1,2,3,...`
    #[arg(
        short,
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        conflicts_with = "file",
        required_unless_present = "file"
    )]
    pub answers: Vec<i64>,

    /// JSON file holding an array of answers
    #[arg(short, long)]
    pub file: Option<PathBuf>,
}

impl AnswerInput {
    pub fn load(&self) -> CliResult<Vec<i64>> {
        match &self.file {
            Some(path) => {
                let contents = std::fs::read_to_string(path)?;
                Ok(serde_json::from_str(&contents)?)
            }
            None if self.answers.is_empty() => {
                Err(CliError::InvalidArgument("no answers given".into()))
            }
            None => Ok(self.answers.clone()),
        }
    }
}
