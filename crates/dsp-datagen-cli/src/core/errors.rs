//! CLI error type, reported through miette with a code and a hint per failure kind.

use dsp_datagen::{DatagenError, MarkerProblem};
use dsp_datagen_toml::DatagenConfigError;
use miette::Diagnostic;
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] DatagenConfigError),

    #[error(transparent)]
    Generate(#[from] DatagenError),

    #[error("{count} generated file(s) are out of date")]
    Stale { count: usize },
}

impl CliError {
    fn code_str(&self) -> &'static str {
        match self {
            CliError::Config(DatagenConfigError::NotFound(_)) => "dsp_datagen::config::not_found",
            CliError::Config(_) => "dsp_datagen::config::invalid",
            CliError::Generate(err) => match err {
                DatagenError::MalformedLine { .. } => "dsp_datagen::data::malformed_line",
                DatagenError::DataMismatch { .. } => "dsp_datagen::data::mismatch",
                DatagenError::MarkerNotFound { .. } => "dsp_datagen::enums::marker_not_found",
                DatagenError::FileNotFound { .. } => "dsp_datagen::io::file_not_found",
                DatagenError::InvalidIdentifier { .. } => "dsp_datagen::data::invalid_identifier",
                DatagenError::IdentifierCollision { .. } => "dsp_datagen::data::collision",
                DatagenError::DuplicateNumber { .. } => "dsp_datagen::data::duplicate_number",
                DatagenError::Io { .. } => "dsp_datagen::io",
            },
            CliError::Stale { .. } => "dsp_datagen::check::stale",
        }
    }

    fn help_text(&self) -> Option<String> {
        let help = match self {
            CliError::Config(DatagenConfigError::NotFound(_)) => {
                "Omit --config to use the default layout, or create the file".to_string()
            },
            CliError::Config(_) => return None,
            CliError::Generate(err) => match err {
                DatagenError::MalformedLine { .. } => {
                    "Every line must look like '<number> <name>', e.g. '1101 Iron Ingot'".to_string()
                },
                DatagenError::DataMismatch { .. } => {
                    "Both languages must list the same entities in the same order".to_string()
                },
                DatagenError::MarkerNotFound {
                    marker, problem, ..
                } => match problem {
                    MarkerProblem::Missing => {
                        format!("Add a line containing '{marker}' to the enumeration file")
                    },
                    MarkerProblem::Duplicated => {
                        format!("Keep exactly one line containing '{marker}'")
                    },
                    MarkerProblem::OutOfOrder => {
                        "The start marker must come before the end marker".to_string()
                    },
                },
                DatagenError::InvalidIdentifier { .. } => {
                    "Rename the entity: the name must not start with a digit and may only \
                     contain letters, digits, whitespace and ( ) . -"
                        .to_string()
                },
                DatagenError::IdentifierCollision { .. } => {
                    "Rename one of the entities so their identifiers differ".to_string()
                },
                DatagenError::DuplicateNumber { .. } => {
                    "Each number may appear once per category".to_string()
                },
                DatagenError::FileNotFound { .. } | DatagenError::Io { .. } => return None,
            },
            CliError::Stale { .. } => "Run `dsp-datagen generate` and commit the result".to_string(),
        };
        Some(help)
    }
}

impl Diagnostic for CliError {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        Some(Box::new(self.code_str()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        self.help_text()
            .map(|help| Box::new(help) as Box<dyn Display + 'a>)
    }
}
