//! The `exambank init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("exambank.toml").exists() {
        println!("exambank.toml already exists, skipping.");
    } else {
        std::fs::write("exambank.toml", SAMPLE_CONFIG)?;
        println!("Created exambank.toml");
    }

    std::fs::create_dir_all("banks")?;
    let example_path = std::path::Path::new("banks/example.json");
    if example_path.exists() {
        println!("banks/example.json already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BANK)?;
        println!("Created banks/example.json");
    }

    println!("\nNext steps:");
    println!("  1. Point exambank.toml at your own question banks");
    println!("  2. Run: exambank validate --bank banks/example.json");
    println!("  3. Run: exambank practice --exam example");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# exambank configuration

default_exam = "example"

[exams.example]
source = "banks/example.json"
sample_size = 3
show_examples = true

# A bank served over HTTP; ${VAR} is read from the environment.
# [exams.remote]
# source = "${EXAMBANK_HOST}/data/foundation.json"
# sample_size = 10
#
# [exams.remote.labels]
# title = "Foundation Level Practice"
# show_answer = "Show answer"
"#;

const EXAMPLE_BANK: &str = r#"{
  "metadata": {
    "title": "Example Practice Exam",
    "sources": ["Hand-written example questions"],
    "counts": { "questions": 4, "points": 4 }
  },
  "questions": [
    {
      "id": "EX-1",
      "question": "What is the main purpose of a <b>code review</b>?",
      "answers": {
        "a": "To find defects early",
        "b": "To measure developer speed",
        "c": "To replace testing",
        "d": "To write documentation"
      },
      "correct_answer": "a",
      "points": 1,
      "syllabus_reference": "1.1",
      "tip": "Reviews are a static technique.",
      "real_life_example": "A teammate spots an off-by-one error in a pull request."
    },
    {
      "id": "EX-2",
      "question": "Which test level checks interactions between components?",
      "answers": {
        "a": "Unit testing",
        "b": "Integration testing",
        "c": "Acceptance testing",
        "d": "Smoke testing"
      },
      "correct_answer": "b",
      "points": 1,
      "syllabus_reference": "2.2",
      "tip": "Look for the word that means combining parts.",
      "real_life_example": "Checking that the checkout service talks to the payment API."
    },
    {
      "id": "EX-3",
      "question": "What does a regression test verify?",
      "answers": {
        "a": "That new features are fast",
        "b": "That the UI looks right",
        "c": "That existing behaviour still works after a change",
        "d": "That requirements are complete"
      },
      "correct_answer": "c",
      "points": 1,
      "syllabus_reference": "2.3",
      "tip": "Regress means to go back."
    },
    {
      "id": "EX-4",
      "question": "Which technique divides inputs into groups expected to behave the same?",
      "answers": {
        "a": "Decision table testing",
        "b": "State transition testing",
        "c": "Error guessing",
        "d": "Equivalence partitioning"
      },
      "correct_answer": "d",
      "points": 1,
      "syllabus_reference": "4.2.1",
      "tip": "Partitions of equal value.",
      "real_life_example": "Testing one age from each band: child, adult, senior."
    }
  ]
}
"#;
