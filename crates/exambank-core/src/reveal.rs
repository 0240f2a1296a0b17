//! Per-question reveal state.
//!
//! Tracks, for each question id, whether its answer, tip, and real-life
//! example are currently shown. The three flags are independent; toggling
//! one never touches the others.
//!
//! Callers are expected to expose the tip and example toggles only after the
//! answer has been revealed at least once. This is a contract on the caller
//! and is not checked here.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Which piece of a question is being revealed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RevealFlag {
    Answer,
    Tip,
    Example,
}

impl fmt::Display for RevealFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RevealFlag::Answer => write!(f, "answer"),
            RevealFlag::Tip => write!(f, "tip"),
            RevealFlag::Example => write!(f, "example"),
        }
    }
}

impl FromStr for RevealFlag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "answer" | "a" => Ok(RevealFlag::Answer),
            "tip" | "t" => Ok(RevealFlag::Tip),
            "example" | "e" => Ok(RevealFlag::Example),
            other => Err(format!("unknown reveal flag: {other}")),
        }
    }
}

/// Reveal flags for every question in the current sample.
///
/// Absent entries read as `false`. [`RevealState::reset`] drops every entry
/// rather than setting it to `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState {
    answer_shown: HashMap<String, bool>,
    tip_shown: HashMap<String, bool>,
    example_shown: HashMap<String, bool>,
}

impl RevealState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the answer flag for `id` and return its new value.
    pub fn toggle_answer(&mut self, id: &str) -> bool {
        Self::flip(&mut self.answer_shown, id)
    }

    /// Flip the tip flag for `id` and return its new value.
    pub fn toggle_tip(&mut self, id: &str) -> bool {
        Self::flip(&mut self.tip_shown, id)
    }

    /// Flip the example flag for `id` and return its new value.
    pub fn toggle_example(&mut self, id: &str) -> bool {
        Self::flip(&mut self.example_shown, id)
    }

    pub fn toggle(&mut self, flag: RevealFlag, id: &str) -> bool {
        match flag {
            RevealFlag::Answer => self.toggle_answer(id),
            RevealFlag::Tip => self.toggle_tip(id),
            RevealFlag::Example => self.toggle_example(id),
        }
    }

    pub fn is_shown(&self, flag: RevealFlag, id: &str) -> bool {
        self.map(flag).get(id).copied().unwrap_or(false)
    }

    pub fn answer_shown(&self) -> &HashMap<String, bool> {
        &self.answer_shown
    }

    pub fn tip_shown(&self) -> &HashMap<String, bool> {
        &self.tip_shown
    }

    pub fn example_shown(&self) -> &HashMap<String, bool> {
        &self.example_shown
    }

    /// Discard every flag for every id.
    pub fn reset(&mut self) {
        self.answer_shown.clear();
        self.tip_shown.clear();
        self.example_shown.clear();
    }

    /// True when no id has ever been toggled since the last reset.
    pub fn is_empty(&self) -> bool {
        self.answer_shown.is_empty() && self.tip_shown.is_empty() && self.example_shown.is_empty()
    }

    fn map(&self, flag: RevealFlag) -> &HashMap<String, bool> {
        match flag {
            RevealFlag::Answer => &self.answer_shown,
            RevealFlag::Tip => &self.tip_shown,
            RevealFlag::Example => &self.example_shown,
        }
    }

    fn flip(map: &mut HashMap<String, bool>, id: &str) -> bool {
        let entry = map.entry(id.to_string()).or_insert(false);
        *entry = !*entry;
        *entry
    }
}
