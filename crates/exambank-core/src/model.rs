//! Core data model types for exambank.
//!
//! A question bank is loaded once and never modified afterwards; everything
//! downstream (sampling, reveal state, rendering) only borrows from it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the fixed multiple-choice option keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OptionKey {
    A,
    B,
    C,
    D,
}

impl OptionKey {
    /// All option keys in display order.
    pub const ALL: [OptionKey; 4] = [OptionKey::A, OptionKey::B, OptionKey::C, OptionKey::D];
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionKey::A => write!(f, "a"),
            OptionKey::B => write!(f, "b"),
            OptionKey::C => write!(f, "c"),
            OptionKey::D => write!(f, "d"),
        }
    }
}

impl FromStr for OptionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "a" => Ok(OptionKey::A),
            "b" => Ok(OptionKey::B),
            "c" => Ok(OptionKey::C),
            "d" => Ok(OptionKey::D),
            other => Err(format!("unknown option key: {other}")),
        }
    }
}

/// A single multiple-choice question from a bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within its bank.
    pub id: String,
    /// Question text. May contain inline markup, which is passed through as-is.
    pub question: String,
    /// Option key → answer text.
    pub answers: BTreeMap<OptionKey, String>,
    /// The key of the correct option.
    pub correct_answer: OptionKey,
    /// Points awarded for this question.
    #[serde(default)]
    pub points: u32,
    /// Where in the syllabus this question comes from.
    #[serde(default)]
    pub syllabus_reference: String,
    /// Hint shown after the answer has been revealed.
    #[serde(default)]
    pub tip: String,
    /// Optional real-world illustration. Only some bank variants carry it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub real_life_example: Option<String>,
}

impl Question {
    /// Text of the correct option, if the bank actually lists it.
    pub fn correct_text(&self) -> Option<&str> {
        self.answers.get(&self.correct_answer).map(String::as_str)
    }
}

/// Descriptive metadata carried alongside the questions.
///
/// Passed through for display only; nothing in the engine interprets it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExamMetadata {
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<String>>,
    #[serde(default)]
    pub counts: BTreeMap<String, f64>,
}

/// A fully parsed question bank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExamData {
    #[serde(default)]
    pub metadata: ExamMetadata,
    pub questions: Vec<Question>,
}

impl ExamData {
    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}
