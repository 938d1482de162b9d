use miette::Diagnostic;
use thiserror::Error;

use crate::db::DbError;

#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DbError),

    #[error("{entity} not found: {id}")]
    #[diagnostic(
        code(todolists::cli::not_found),
        help("Run `todolists lists --user <name>` to see the available IDs.")
    )]
    NotFound { entity: &'static str, id: String },

    #[error("Invalid credentials for {username}")]
    #[diagnostic(code(todolists::cli::credentials))]
    InvalidCredentials { username: String },

    #[error("Unsupported output format: {format}")]
    #[diagnostic(code(todolists::cli::format), help("Use `table` or `json`."))]
    UnsupportedFormat { format: String },

    #[error("Failed to serialize output: {message}")]
    #[diagnostic(code(todolists::cli::serialize))]
    Serialize { message: String },

    #[error("Failed to create data directory: {0}")]
    #[diagnostic(code(todolists::cli::io))]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialize {
            message: e.to_string(),
        }
    }
}

pub type CliResult<T> = Result<T, CliError>;
