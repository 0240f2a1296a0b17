//! The `exambank fairness` command.

use anyhow::{Context, Result};
use comfy_table::{Cell, Table};

use exambank_core::statistics::{expected_frequency, max_deviation, selection_frequencies};

pub async fn execute(bank: String, count: usize, trials: u32) -> Result<()> {
    anyhow::ensure!(trials >= 1, "trials must be at least 1");

    let exam = exambank_loader::load(&bank)
        .await
        .with_context(|| format!("could not load question bank {bank}"))?;

    let frequencies = selection_frequencies(&exam.questions, count, trials);
    let expected = expected_frequency(exam.questions.len(), count);

    let mut table = Table::new();
    table.set_header(vec!["ID", "Observed", "Expected"]);
    for q in &exam.questions {
        let observed = frequencies.get(&q.id).copied().unwrap_or(0.0);
        table.add_row(vec![
            Cell::new(&q.id),
            Cell::new(format!("{:.3}", observed)),
            Cell::new(format!("{:.3}", expected)),
        ]);
    }

    println!("{table}");
    println!(
        "{} draws of {} from {} questions, max deviation {:.4}",
        trials,
        count,
        exam.questions.len(),
        max_deviation(&frequencies, expected)
    );

    Ok(())
}
