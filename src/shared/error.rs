use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the requested table was produced
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (validation, network, dataset, file I/O, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while validating queries and fetching interaction data.
///
/// Every variant is raised synchronously to the immediate caller and wrapped
/// into `anyhow::Error`; use `downcast_ref::<ProtlinksError>()` to match on it.
#[derive(Debug, Error)]
pub enum ProtlinksError {
    #[error("'{option}' is not a valid {service} argument\n\n💡 Hint: Check {docs_url} for valid keywords")]
    InvalidOption {
        option: String,
        service: &'static str,
        docs_url: &'static str,
    },

    #[error("'geneList' was given without a search mode\n\n💡 Hint: Set one of {companions} to true so the service knows how to match the genes")]
    MissingSearchMode { companions: String },

    #[error("Failed to fetch interactions: {details}\n\n💡 Hint: Retry later or change your query")]
    FetchFailed { details: String },

    #[error("Couldn't find any interactions for the requested genes\n\n💡 Hint: Are the genes in the right format? Genes should look like {example}")]
    NoInteractionsFound { example: String },

    #[error("Couldn't find any interactions with a combined score of at least {min_score}\n\n💡 Hint: Lower the minimum score (STRING scores range from 0 to 1000)")]
    ScoreThresholdTooHigh { min_score: u32 },

    #[error("Couldn't find the STRING database: {url}\nStatus: {status}\n\n💡 Hint: Did you give the right NCBI taxonomy id?")]
    DatabaseNotFound { url: String, status: u16 },

    #[error("Failed to look up the current STRING version: {details}\n\n💡 Hint: Retry later")]
    VersionLookupFailed { details: String },

    #[error("Failed to parse {file}: {details}")]
    DatasetParseError { file: String, details: String },

    #[error("Invalid species identifier: '{value}'\nReason: {reason}\n\n💡 Hint: Use an NCBI taxonomy id such as 9606 (human)")]
    InvalidSpecies { value: String, reason: String },

    /// Validation error for builders and request DTOs
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
