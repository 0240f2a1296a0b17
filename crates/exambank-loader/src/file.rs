//! Local file question bank source.

use async_trait::async_trait;
use tracing::instrument;

use exambank_core::model::ExamData;
use exambank_core::parser::parse_exam_data;
use exambank_core::traits::BankSource;
use exambank_core::LoadError;

/// Reads a question bank from the local filesystem.
pub struct FileSource {
    path: String,
}

impl FileSource {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BankSource for FileSource {
    fn describe(&self) -> &str {
        &self.path
    }

    #[instrument(skip(self), fields(path = %self.path))]
    async fn fetch(&self) -> Result<ExamData, LoadError> {
        let body = tokio::fs::read(&self.path)
            .await
            .map_err(|e| LoadError::Fetch(format!("{}: {e}", self.path)))?;

        let exam = parse_exam_data(&body)?;
        tracing::debug!(questions = exam.questions.len(), "read question bank");
        Ok(exam)
    }
}
