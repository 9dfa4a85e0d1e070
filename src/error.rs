//! Errors raised at the boundary between text input and the flight core.
//!
//! A record failing validation is not an error: see [`crate::validation::Rejection`].

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid timestamp '{input}', expected MM/dd/yyyy HH:mm")]
    InvalidTimestamp { input: String },

    #[error("invalid date '{input}', expected MM/dd/yyyy")]
    InvalidDate { input: String },

    #[error("invalid number '{input}' for {field}")]
    InvalidNumber { field: &'static str, input: String },

    #[error("unknown flight status '{0}'")]
    UnknownStatus(String),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line editor error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_number(field: &'static str, input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            field,
            input: input.into(),
        }
    }

    /// Input errors are recoverable by re-entering the value.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidTimestamp { .. }
                | Self::InvalidDate { .. }
                | Self::InvalidNumber { .. }
                | Self::UnknownStatus(_)
        )
    }
}
