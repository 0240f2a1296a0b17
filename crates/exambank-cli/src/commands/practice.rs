//! The `exambank practice` command.
//!
//! A line-oriented practice session on stdin. This is the terminal rendering
//! layer: it shows the current draw and turns commands into reveal toggles.

use std::path::PathBuf;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

use exambank_core::model::Question;
use exambank_core::reveal::RevealFlag;
use exambank_core::session::{ExamSession, LoadState};

use super::resolve_variant;

pub async fn execute(
    exam: Option<String>,
    bank: Option<String>,
    count: Option<usize>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let variant = resolve_variant(exam, bank, count, config_path)?;
    let source = exambank_loader::source_for(&variant.source);

    let mut session = ExamSession::new(variant);
    println!("{}", session.variant().labels.loading);
    session.load(source.as_ref()).await;
    if let LoadState::Failed(e) = session.state() {
        println!("{}", session.variant().labels.error);
        anyhow::bail!("{e}");
    }

    print_header(&session);
    print_sample(&session);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            continue;
        };

        match cmd {
            "q" | "quit" => break,
            "l" | "list" => print_sample(&session),
            "n" | "new" => {
                session.load_new_questions();
                println!("Drew {} new questions.", session.sample().len());
                print_sample(&session);
            }
            "h" | "help" => print_help(&session),
            other => match other.parse::<RevealFlag>() {
                Ok(flag) => match parts.next() {
                    Some(id) => reveal(&mut session, flag, id),
                    None => println!("Usage: {other} <question id>"),
                },
                Err(_) => println!("Unknown command '{other}'. Type h for help."),
            },
        }
    }

    Ok(())
}

fn reveal(session: &mut ExamSession, flag: RevealFlag, id: &str) {
    if !session.in_sample(id) {
        println!("No question {id} in the current draw.");
        return;
    }

    // Tips and examples are only offered once the answer is on screen.
    // Hiding one is always allowed.
    let state = session.reveal();
    if flag != RevealFlag::Answer
        && !state.is_shown(flag, id)
        && !state.is_shown(RevealFlag::Answer, id)
    {
        println!("Reveal the answer to {id} first.");
        return;
    }
    if flag == RevealFlag::Example && !session.variant().show_examples {
        println!("This exam has no real-life examples.");
        return;
    }

    let shown = session.toggle(flag, id);
    println!("{id} {flag}: {}", if shown { "shown" } else { "hidden" });

    if let Some(q) = session.sample().into_iter().find(|q| q.id == id) {
        print_question(session, q);
    }
}

fn print_header(session: &ExamSession) {
    println!("== {} ==", session.title());
    let drawn_at = session
        .drawn_at()
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_default();
    println!(
        "session {} | {} questions drawn at {}",
        session.id(),
        session.sample().len(),
        drawn_at
    );
    print_help(session);
}

fn print_help(session: &ExamSession) {
    let labels = &session.variant().labels;
    let mut help = format!(
        "Commands: a <id> ({}), t <id> ({})",
        labels.show_answer, labels.show_tip
    );
    if session.variant().show_examples {
        help.push_str(&format!(", e <id> ({})", labels.show_example));
    }
    help.push_str(&format!(", n ({}), l (list), q (quit)", labels.load_new));
    println!("{help}");
}

fn print_sample(session: &ExamSession) {
    for q in session.sample() {
        print_question(session, q);
    }
}

fn print_question(session: &ExamSession, q: &Question) {
    let state = session.reveal();
    println!();
    println!(
        "[{}] ({} pt, {}) {}",
        q.id, q.points, q.syllabus_reference, q.question
    );
    for (key, text) in &q.answers {
        println!("    {key}) {text}");
    }

    if state.is_shown(RevealFlag::Answer, &q.id) {
        println!(
            "    Answer: {}) {}",
            q.correct_answer,
            q.correct_text().unwrap_or("?")
        );
    }
    if state.is_shown(RevealFlag::Tip, &q.id) {
        println!("    Tip: {}", q.tip);
    }
    if session.variant().show_examples && state.is_shown(RevealFlag::Example, &q.id) {
        match &q.real_life_example {
            Some(example) => println!("    Example: {example}"),
            None => println!("    Example: (none for this question)"),
        }
    }
}
