//! Mock bank source for testing.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;

use exambank_core::model::ExamData;
use exambank_core::traits::BankSource;
use exambank_core::LoadError;

/// A bank source that returns a fixed result without any I/O.
pub struct MockSource {
    result: Result<ExamData, LoadError>,
    call_count: AtomicU32,
}

impl MockSource {
    /// A source that always yields `exam`.
    pub fn with_exam(exam: ExamData) -> Self {
        Self {
            result: Ok(exam),
            call_count: AtomicU32::new(0),
        }
    }

    /// A source that always fails with `error`.
    pub fn failing(error: LoadError) -> Self {
        Self {
            result: Err(error),
            call_count: AtomicU32::new(0),
        }
    }

    /// Get the number of fetches made against this source.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl BankSource for MockSource {
    fn describe(&self) -> &str {
        "mock"
    }

    async fn fetch(&self) -> Result<ExamData, LoadError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.result.clone()
    }
}
