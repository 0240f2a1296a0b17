//! HTTP question bank source.

use async_trait::async_trait;
use tracing::instrument;

use exambank_core::model::ExamData;
use exambank_core::parser::parse_exam_data;
use exambank_core::traits::BankSource;
use exambank_core::LoadError;

/// Fetches a question bank with a single `GET`.
pub struct HttpSource {
    url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(url: &str) -> Self {
        Self::with_client(url, reqwest::Client::new())
    }

    /// Use a caller-provided client (shared connection pool, custom TLS, ...).
    pub fn with_client(url: &str, client: reqwest::Client) -> Self {
        Self {
            url: url.to_string(),
            client,
        }
    }
}

#[async_trait]
impl BankSource for HttpSource {
    fn describe(&self) -> &str {
        &self.url
    }

    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<ExamData, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                status: status.as_u16(),
                source_name: self.url.clone(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Fetch(e.to_string()))?;

        let exam = parse_exam_data(&body)?;
        tracing::debug!(questions = exam.questions.len(), "fetched question bank");
        Ok(exam)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn bank_json() -> serde_json::Value {
        serde_json::json!({
            "metadata": {"title": "Acceptance Testing", "counts": {"questions": 2}},
            "questions": [
                {
                    "id": "AT-1",
                    "question": "Who writes acceptance criteria?",
                    "answers": {"a": "PO", "b": "Dev", "c": "Ops", "d": "Legal"},
                    "correct_answer": "a",
                    "points": 1,
                    "syllabus_reference": "AT-2.1",
                    "tip": "Think ownership.",
                    "real_life_example": "A product owner grooming the backlog."
                },
                {
                    "id": "AT-2",
                    "question": "What is BDD?",
                    "answers": {"a": "A DB", "b": "Behaviour-driven development", "c": "A bug", "d": "A build"},
                    "correct_answer": "b",
                    "points": 1,
                    "syllabus_reference": "AT-3.2",
                    "tip": "Given/When/Then."
                }
            ]
        })
    }

    #[tokio::test]
    async fn successful_fetch() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/acceptance.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(bank_json()))
            .mount(&server)
            .await;

        let source = HttpSource::new(&format!("{}/data/acceptance.json", server.uri()));
        let exam = source.fetch().await.unwrap();
        assert_eq!(exam.metadata.title, "Acceptance Testing");
        assert_eq!(exam.questions.len(), 2);
        assert_eq!(
            exam.question("AT-1").unwrap().real_life_example.as_deref(),
            Some("A product owner grooming the backlog.")
        );
    }

    #[tokio::test]
    async fn server_error_status() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bank.json"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let source = HttpSource::new(&format!("{}/bank.json", server.uri()));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 500, .. }));
    }

    #[tokio::test]
    async fn non_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bank.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let source = HttpSource::new(&format!("{}/bank.json", server.uri()));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, LoadError::InvalidBody(_)));
    }

    #[tokio::test]
    async fn body_missing_questions() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/bank.json"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"metadata": {}})),
            )
            .mount(&server)
            .await;

        let source = HttpSource::new(&format!("{}/bank.json", server.uri()));
        assert_eq!(source.fetch().await.unwrap_err(), LoadError::MissingQuestions);
    }

    #[tokio::test]
    async fn unreachable_host() {
        // Nothing listens on port 1.
        let err = HttpSource::new("http://127.0.0.1:1/bank.json")
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, LoadError::Fetch(_)));
    }
}
