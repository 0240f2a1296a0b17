pub mod draw;
pub mod fairness;
pub mod init;
pub mod list_exams;
pub mod practice;
pub mod validate;

use std::path::PathBuf;

use anyhow::Result;

use exambank_core::session::ExamVariant;
use exambank_loader::config::load_config_from;

/// Resolve the exam variant for a command.
///
/// `--bank` builds an ad-hoc variant and skips the config file entirely;
/// otherwise the variant comes from the config (named or default).
pub fn resolve_variant(
    exam: Option<String>,
    bank: Option<String>,
    count: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<ExamVariant> {
    let mut variant = match bank {
        Some(bank) => ExamVariant::new("bank", bank),
        None => load_config_from(config_path.as_deref())?.variant(exam.as_deref())?,
    };

    if let Some(count) = count {
        variant.sample_size = count;
    }

    Ok(variant)
}
