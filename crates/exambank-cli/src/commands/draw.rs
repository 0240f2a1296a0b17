//! The `exambank draw` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::{Cell, Table};

use exambank_core::session::{ExamSession, LoadState};

use super::resolve_variant;

pub async fn execute(
    exam: Option<String>,
    bank: Option<String>,
    count: Option<usize>,
    show_answers: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let variant = resolve_variant(exam, bank, count, config_path)?;
    let source = exambank_loader::source_for(&variant.source);

    let mut session = ExamSession::new(variant);
    session.load(source.as_ref()).await;
    if let LoadState::Failed(e) = session.state() {
        anyhow::bail!("{}: {e}", session.variant().labels.error);
    }

    let total = session.exam().map(|e| e.questions.len()).unwrap_or(0);
    let drawn = session.sample();
    println!(
        "{}: {} of {} questions",
        session.title(),
        drawn.len(),
        total
    );

    let mut table = Table::new();
    let mut header = vec!["#", "ID", "Question", "Points", "Syllabus"];
    if show_answers {
        header.push("Answer");
    }
    table.set_header(header);

    for (i, q) in drawn.iter().enumerate() {
        let mut row = vec![
            Cell::new(i + 1),
            Cell::new(&q.id),
            Cell::new(&q.question),
            Cell::new(q.points),
            Cell::new(&q.syllabus_reference),
        ];
        if show_answers {
            row.push(Cell::new(format!(
                "{}) {}",
                q.correct_answer,
                q.correct_text().unwrap_or("?")
            )));
        }
        table.add_row(row);
    }

    println!("{table}");
    Ok(())
}
