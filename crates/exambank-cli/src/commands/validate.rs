//! The `exambank validate` command.

use anyhow::{Context, Result};

use exambank_core::parser::validate_exam_data;

pub async fn execute(bank: String) -> Result<()> {
    let exam = exambank_loader::load(&bank)
        .await
        .with_context(|| format!("could not load question bank {bank}"))?;

    let title = if exam.metadata.title.is_empty() {
        bank.as_str()
    } else {
        exam.metadata.title.as_str()
    };
    println!("Exam: {} ({} questions)", title, exam.questions.len());

    let warnings = validate_exam_data(&exam);
    for w in &warnings {
        let prefix = w
            .question_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Question bank is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
