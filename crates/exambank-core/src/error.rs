//! Question bank load errors.
//!
//! Every failure to obtain a usable bank is a single `LoadError` signal as far
//! as callers are concerned. The variants exist so that logs can say what went
//! wrong; the user only ever sees [`LoadError::USER_MESSAGE`].

use thiserror::Error;

/// Errors that can occur while fetching or parsing a question bank.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The fetch itself failed (connection refused, missing file, ...).
    #[error("failed to fetch question bank: {0}")]
    Fetch(String),

    /// The remote answered with a non-success HTTP status.
    #[error("question bank request to {source_name} failed with HTTP {status}")]
    Status { status: u16, source_name: String },

    /// The body was not JSON, or a record did not match the question shape.
    #[error("invalid question bank: {0}")]
    InvalidBody(String),

    /// The body was JSON but had no `questions` array.
    #[error("question bank has no `questions` array")]
    MissingQuestions,
}

impl LoadError {
    /// Generic text shown to the user for any load failure.
    pub const USER_MESSAGE: &'static str =
        "Could not load the questions. Please try again later.";
}
