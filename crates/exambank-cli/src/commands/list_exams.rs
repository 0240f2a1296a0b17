//! The `exambank list-exams` command.

use std::path::PathBuf;

use anyhow::Result;

use exambank_loader::config::load_config_from;

pub async fn execute(check: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let variants = config.variants();

    if variants.is_empty() {
        println!("No exams configured. Run `exambank init` to create a config file.");
        return Ok(());
    }

    let results = if check {
        Some(exambank_loader::load_all(&variants).await)
    } else {
        None
    };

    for (i, variant) in variants.iter().enumerate() {
        let marker = if config.default_exam.as_deref() == Some(variant.name.as_str()) {
            " (default)"
        } else {
            ""
        };
        println!(
            "{}{}: {} questions per draw from {}",
            variant.name, marker, variant.sample_size, variant.source
        );

        if let Some(results) = &results {
            match &results[i] {
                Ok(exam) => println!("  OK ({} questions)", exam.questions.len()),
                Err(e) => {
                    tracing::warn!(exam = %variant.name, "bank check failed: {e}");
                    println!("  FAILED: {e}");
                }
            }
        }
    }

    Ok(())
}
