//! Practice exam sessions.
//!
//! One `ExamSession` drives a single exam variant: it waits for the bank to
//! load, draws a sample, and owns the reveal state for that sample. Different
//! exams are the same session type with a different [`ExamVariant`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::LoadError;
use crate::model::{ExamData, Question};
use crate::reveal::{RevealFlag, RevealState};
use crate::sampler::sample_indices;
use crate::traits::BankSource;

/// Texts a rendering layer shows for one exam variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayLabels {
    /// Overrides the bank's own title when set.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default = "default_show_answer")]
    pub show_answer: String,
    #[serde(default = "default_show_tip")]
    pub show_tip: String,
    #[serde(default = "default_show_example")]
    pub show_example: String,
    #[serde(default = "default_load_new")]
    pub load_new: String,
    #[serde(default = "default_loading")]
    pub loading: String,
    #[serde(default = "default_error")]
    pub error: String,
}

fn default_show_answer() -> String {
    "Show answer".to_string()
}
fn default_show_tip() -> String {
    "Show tip".to_string()
}
fn default_show_example() -> String {
    "Show real-life example".to_string()
}
fn default_load_new() -> String {
    "Load new questions".to_string()
}
fn default_loading() -> String {
    "Loading questions...".to_string()
}
fn default_error() -> String {
    LoadError::USER_MESSAGE.to_string()
}

impl Default for DisplayLabels {
    fn default() -> Self {
        Self {
            title: None,
            show_answer: default_show_answer(),
            show_tip: default_show_tip(),
            show_example: default_show_example(),
            load_new: default_load_new(),
            loading: default_loading(),
            error: default_error(),
        }
    }
}

/// Configuration for one exam variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamVariant {
    /// Variant name (filled from the config key when loaded from a file).
    #[serde(default)]
    pub name: String,
    /// Bank location: an `http(s)://` URL or a file path.
    pub source: String,
    /// How many questions each draw contains.
    #[serde(default = "default_sample_size")]
    pub sample_size: usize,
    /// Whether this variant offers real-life examples.
    #[serde(default = "default_true")]
    pub show_examples: bool,
    #[serde(default)]
    pub labels: DisplayLabels,
}

fn default_sample_size() -> usize {
    10
}

fn default_true() -> bool {
    true
}

impl ExamVariant {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
            sample_size: default_sample_size(),
            show_examples: true,
            labels: DisplayLabels::default(),
        }
    }

    pub fn with_sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = sample_size;
        self
    }
}

/// Where a session is in its load lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState {
    /// The bank fetch has not resolved yet.
    Loading,
    /// The bank is loaded and a sample has been drawn.
    Ready(ExamData),
    /// The bank could not be loaded. Final for this session.
    Failed(LoadError),
}

/// A single practice session over one exam variant.
#[derive(Debug)]
pub struct ExamSession {
    id: Uuid,
    variant: ExamVariant,
    state: LoadState,
    sample: Vec<usize>,
    reveal: RevealState,
    drawn_at: Option<DateTime<Utc>>,
}

impl ExamSession {
    pub fn new(variant: ExamVariant) -> Self {
        Self {
            id: Uuid::new_v4(),
            variant,
            state: LoadState::Loading,
            sample: Vec::new(),
            reveal: RevealState::new(),
            drawn_at: None,
        }
    }

    /// Fetch the bank and draw the first sample.
    #[instrument(skip(self, source), fields(session = %self.id, source = source.describe()))]
    pub async fn load(&mut self, source: &dyn BankSource) -> &LoadState {
        let result = source.fetch().await;
        self.finish_load(result)
    }

    /// Apply the outcome of a bank fetch.
    ///
    /// On success the first sample is drawn; on failure the sample and reveal
    /// state stay empty.
    pub fn finish_load(&mut self, result: Result<ExamData, LoadError>) -> &LoadState {
        match result {
            Ok(exam) => {
                tracing::info!(
                    variant = %self.variant.name,
                    questions = exam.questions.len(),
                    "question bank loaded"
                );
                self.state = LoadState::Ready(exam);
                self.draw();
            }
            Err(e) => {
                tracing::warn!(variant = %self.variant.name, "question bank failed to load: {e}");
                self.sample.clear();
                self.reveal.reset();
                self.state = LoadState::Failed(e);
            }
        }
        &self.state
    }

    /// Draw a fresh sample and discard all reveal state.
    ///
    /// Returns `false` without doing anything if the bank isn't loaded.
    pub fn load_new_questions(&mut self) -> bool {
        if !self.is_ready() {
            tracing::debug!(session = %self.id, "ignoring redraw before bank is loaded");
            return false;
        }
        self.draw();
        true
    }

    fn draw(&mut self) {
        let LoadState::Ready(exam) = &self.state else {
            return;
        };
        self.sample = sample_indices(exam.questions.len(), self.variant.sample_size);
        self.reveal.reset();
        self.drawn_at = Some(Utc::now());
        tracing::debug!(
            session = %self.id,
            drawn = self.sample.len(),
            requested = self.variant.sample_size,
            "drew new sample"
        );
    }

    pub fn toggle_answer(&mut self, id: &str) -> bool {
        self.reveal.toggle_answer(id)
    }

    pub fn toggle_tip(&mut self, id: &str) -> bool {
        self.reveal.toggle_tip(id)
    }

    pub fn toggle_example(&mut self, id: &str) -> bool {
        self.reveal.toggle_example(id)
    }

    pub fn toggle(&mut self, flag: RevealFlag, id: &str) -> bool {
        self.reveal.toggle(flag, id)
    }

    /// The current sample, in draw order. Empty unless the bank is loaded.
    pub fn sample(&self) -> Vec<&Question> {
        match &self.state {
            LoadState::Ready(exam) => self.sample.iter().map(|&i| &exam.questions[i]).collect(),
            _ => Vec::new(),
        }
    }

    /// Whether `id` is part of the current sample.
    pub fn in_sample(&self, id: &str) -> bool {
        self.sample().iter().any(|q| q.id == id)
    }

    pub fn reveal(&self) -> &RevealState {
        &self.reveal
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, LoadState::Ready(_))
    }

    pub fn exam(&self) -> Option<&ExamData> {
        match &self.state {
            LoadState::Ready(exam) => Some(exam),
            _ => None,
        }
    }

    pub fn variant(&self) -> &ExamVariant {
        &self.variant
    }

    /// Title to display: the variant's override, else the bank's own title.
    pub fn title(&self) -> &str {
        if let Some(title) = &self.variant.labels.title {
            return title.as_str();
        }
        match &self.state {
            LoadState::Ready(exam) if !exam.metadata.title.is_empty() => {
                exam.metadata.title.as_str()
            }
            _ => self.variant.name.as_str(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn drawn_at(&self) -> Option<DateTime<Utc>> {
        self.drawn_at
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashSet};

    use async_trait::async_trait;

    use super::*;
    use crate::model::OptionKey;

    fn make_exam(n: usize) -> ExamData {
        let questions = (1..=n)
            .map(|i| Question {
                id: format!("Q{i}"),
                question: format!("Question {i}?"),
                answers: OptionKey::ALL
                    .iter()
                    .map(|k| (*k, format!("option {k}")))
                    .collect::<BTreeMap<_, _>>(),
                correct_answer: OptionKey::A,
                points: 1,
                syllabus_reference: String::new(),
                tip: String::new(),
                real_life_example: None,
            })
            .collect();
        ExamData {
            questions,
            ..Default::default()
        }
    }

    struct FixedSource(Result<ExamData, LoadError>);

    #[async_trait]
    impl BankSource for FixedSource {
        fn describe(&self) -> &str {
            "fixed"
        }

        async fn fetch(&self) -> Result<ExamData, LoadError> {
            self.0.clone()
        }
    }

    #[test]
    fn new_session_is_loading() {
        let session = ExamSession::new(ExamVariant::new("istqb", "bank.json"));
        assert_eq!(session.state(), &LoadState::Loading);
        assert!(session.sample().is_empty());
        assert!(session.reveal().is_empty());
        assert!(session.drawn_at().is_none());
    }

    #[tokio::test]
    async fn load_draws_sample() {
        let mut session = ExamSession::new(ExamVariant::new("istqb", "bank.json"));
        session.load(&FixedSource(Ok(make_exam(15)))).await;

        assert!(session.is_ready());
        let drawn = session.sample();
        assert_eq!(drawn.len(), 10);
        let ids: HashSet<&str> = drawn.iter().map(|q| q.id.as_str()).collect();
        assert_eq!(ids.len(), 10);
        assert!(session.drawn_at().is_some());
    }

    #[tokio::test]
    async fn failed_load_leaves_session_empty() {
        let mut session = ExamSession::new(ExamVariant::new("istqb", "bank.json"));
        let state = session
            .load(&FixedSource(Err(LoadError::Fetch("refused".into()))))
            .await;
        assert!(matches!(state, LoadState::Failed(LoadError::Fetch(_))));
        assert!(session.sample().is_empty());
        assert!(session.reveal().is_empty());
        assert!(!session.load_new_questions());
        assert!(session.exam().is_none());
    }

    #[test]
    fn redraw_resets_reveal_state() {
        let mut session = ExamSession::new(ExamVariant::new("v", "bank.json").with_sample_size(3));
        session.finish_load(Ok(make_exam(8)));
        let first = session.sample()[0].id.clone();
        session.toggle_answer(&first);
        session.toggle_tip(&first);
        assert!(!session.reveal().is_empty());

        assert!(session.load_new_questions());
        assert!(session.reveal().is_empty());
        assert_eq!(session.sample().len(), 3);
        assert!(session.toggle_tip(&first));
    }

    #[test]
    fn title_prefers_override() {
        let mut variant = ExamVariant::new("acceptance", "bank.json");
        let mut session = ExamSession::new(variant.clone());
        assert_eq!(session.title(), "acceptance");

        let mut exam = make_exam(2);
        exam.metadata.title = "Acceptance Testing".into();
        session.finish_load(Ok(exam.clone()));
        assert_eq!(session.title(), "Acceptance Testing");

        variant.labels.title = Some("AT Practice".into());
        let mut session = ExamSession::new(variant);
        session.finish_load(Ok(exam));
        assert_eq!(session.title(), "AT Practice");
    }

    #[test]
    fn in_sample_checks_current_draw() {
        let mut session = ExamSession::new(ExamVariant::new("v", "bank.json").with_sample_size(20));
        session.finish_load(Ok(make_exam(4)));
        assert!(session.in_sample("Q4"));
        assert!(!session.in_sample("Q5"));
    }

    #[test]
    fn variant_deserializes_with_defaults() {
        let variant: ExamVariant =
            serde_json::from_str(r#"{"source": "banks/istqb.json"}"#).unwrap();
        assert_eq!(variant.sample_size, 10);
        assert!(variant.show_examples);
        assert_eq!(variant.labels, DisplayLabels::default());
        assert_eq!(variant.labels.error, LoadError::USER_MESSAGE);
    }
}
