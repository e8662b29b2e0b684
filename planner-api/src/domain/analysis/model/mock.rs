//! Scripted language model for testing.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::domain::analysis::error::{AnalysisError, Result};

use super::LanguageModel;

#[derive(Clone)]
enum Script {
    Reply(String),
    Fail(String),
}

/// Mock model that replies with fixed text or fails.
///
/// ```ignore
/// let model = MockModel::replying(r#"{"summary":"ok","suggestions":[]}"#);
/// let model = MockModel::failing("connection refused");
/// ```
#[derive(Clone)]
pub struct MockModel {
    script: Script,
    call_count: Arc<AtomicUsize>,
    last_prompt: Arc<Mutex<Option<String>>>,
}

impl MockModel {
    pub fn replying(reply: impl Into<String>) -> Self {
        Self::with_script(Script::Reply(reply.into()))
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_script(Script::Fail(message.into()))
    }

    fn with_script(script: Script) -> Self {
        Self {
            script,
            call_count: Arc::new(AtomicUsize::new(0)),
            last_prompt: Arc::new(Mutex::new(None)),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().unwrap().clone()
    }
}

#[async_trait]
impl LanguageModel for MockModel {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        *self.last_prompt.lock().unwrap() = Some(prompt.to_string());

        match &self.script {
            Script::Reply(reply) => Ok(reply.clone()),
            Script::Fail(message) => Err(AnalysisError::Status {
                status: reqwest::StatusCode::SERVICE_UNAVAILABLE,
                body: message.clone(),
            }),
        }
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_records_calls_and_prompt() {
        let model = MockModel::replying("{}");

        assert_eq!(model.call_count(), 0);
        assert_eq!(model.complete("hello").await.unwrap(), "{}");
        assert_eq!(model.call_count(), 1);
        assert_eq!(model.last_prompt().as_deref(), Some("hello"));
    }

    #[tokio::test]
    async fn failing_mock_returns_error() {
        let model = MockModel::failing("boom");
        assert!(model.complete("hello").await.is_err());
        assert_eq!(model.call_count(), 1);
    }
}
