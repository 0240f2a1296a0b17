//! Question bank parser and validator.
//!
//! Turns a raw JSON body into `ExamData` and checks it for common authoring
//! mistakes that don't stop the bank from being usable.

use std::collections::HashSet;

use serde_json::Value;

use crate::error::LoadError;
use crate::model::{ExamData, OptionKey};

/// Parse a raw response body into an `ExamData`.
pub fn parse_exam_data(body: &[u8]) -> Result<ExamData, LoadError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| LoadError::InvalidBody(e.to_string()))?;

    match value.get("questions") {
        Some(Value::Array(_)) => {}
        _ => return Err(LoadError::MissingQuestions),
    }

    serde_json::from_value(value).map_err(|e| LoadError::InvalidBody(e.to_string()))
}

/// Parse a JSON string into an `ExamData` (useful for testing).
pub fn parse_exam_data_str(content: &str) -> Result<ExamData, LoadError> {
    parse_exam_data(content.as_bytes())
}

/// A warning from question bank validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a question bank for common issues.
pub fn validate_exam_data(exam: &ExamData) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    if exam.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "question bank is empty".into(),
        });
    }

    let mut seen_ids = HashSet::new();
    for q in &exam.questions {
        if !seen_ids.insert(q.id.as_str()) {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("duplicate question ID: {}", q.id),
            });
        }
    }

    for q in &exam.questions {
        if q.question.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: "question text is empty".into(),
            });
        }

        if q.correct_text().is_none() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!(
                    "correct_answer '{}' is not among the answers",
                    q.correct_answer
                ),
            });
        }

        let missing: Vec<String> = OptionKey::ALL
            .iter()
            .filter(|k| !q.answers.contains_key(*k))
            .map(|k| k.to_string())
            .collect();
        if !missing.is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(q.id.clone()),
                message: format!("missing answer options: {}", missing.join(", ")),
            });
        }
    }

    warnings
}
