//! Core trait definitions for question bank sources.
//!
//! Implemented by the `exambank-loader` crate for HTTP and file targets.

use async_trait::async_trait;

use crate::error::LoadError;
use crate::model::ExamData;

/// Somewhere a question bank can be fetched from.
///
/// A fetch either yields a fully parsed bank or a `LoadError`. There is no
/// retry, caching, or partial result; a failed fetch is final until the
/// caller asks again.
#[async_trait]
pub trait BankSource: Send + Sync {
    /// Human-readable description of the target (URL or path).
    fn describe(&self) -> &str;

    /// Fetch and parse the bank.
    async fn fetch(&self) -> Result<ExamData, LoadError>;
}
