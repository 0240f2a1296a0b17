//! exambank-loader — Question bank sources and configuration.
//!
//! Implements the `BankSource` trait for HTTP and local-file targets and
//! reads the exam variant configuration file.

pub mod config;
pub mod file;
pub mod http;
pub mod mock;

use exambank_core::model::ExamData;
use exambank_core::session::ExamVariant;
use exambank_core::traits::BankSource;
use exambank_core::LoadError;

pub use config::{load_config, load_config_from, ExambankConfig};
pub use file::FileSource;
pub use http::HttpSource;
pub use mock::MockSource;

/// Pick a source for a target: HTTP for `http://` and `https://` URLs,
/// the local filesystem for everything else.
pub fn source_for(target: &str) -> Box<dyn BankSource> {
    if target.starts_with("http://") || target.starts_with("https://") {
        Box::new(HttpSource::new(target))
    } else {
        Box::new(FileSource::new(target))
    }
}

/// Fetch and parse the bank at `target`.
pub async fn load(target: &str) -> Result<ExamData, LoadError> {
    source_for(target).fetch().await
}

/// Fetch the banks of several variants concurrently.
///
/// Results come back in the same order as `variants`.
pub async fn load_all(variants: &[ExamVariant]) -> Vec<Result<ExamData, LoadError>> {
    let fetches = variants.iter().map(|v| async move { load(&v.source).await });
    futures::future::join_all(fetches).await
}
