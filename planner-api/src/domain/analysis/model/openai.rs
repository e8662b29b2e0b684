//! OpenAI-compatible chat completions backend.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::config::ModelSettings;
use crate::domain::analysis::error::{AnalysisError, Result};

use super::LanguageModel;

const SYSTEM_MESSAGE: &str =
    "You are a daily planning assistant. Reply ONLY with a single JSON object, with no markdown and no extra text.";

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
    response_format: ResponseFormat,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

/// Chat-completions client for OpenAI or any API-compatible server.
#[derive(Clone)]
pub struct OpenAiModel {
    client: Client,
    endpoint: Url,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiModel {
    pub fn new(api_key: impl Into<String>, settings: &ModelSettings) -> Result<Self> {
        let base_url = format!("{}/", settings.base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&base_url)
            .and_then(|url| url.join("chat/completions"))
            .map_err(|e| AnalysisError::Config(format!("invalid base URL {base_url}: {e}")))?;

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            endpoint,
            api_key: api_key.into(),
            model: settings.name.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        })
    }

    /// Build from settings, returning `None` when no credential is configured.
    pub fn try_from_settings(settings: &ModelSettings) -> Option<Result<Self>> {
        let api_key = settings.credential()?;
        Some(Self::new(api_key, settings))
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl LanguageModel for OpenAiModel {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Status { status, body });
        }

        let parsed: ChatResponse = response.json().await?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(AnalysisError::EmptyReply)
    }

    fn name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(base_url: &str, api_key: Option<&str>) -> ModelSettings {
        ModelSettings {
            api_key: api_key.map(str::to_string),
            base_url: base_url.to_string(),
            name: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            timeout_secs: 30,
        }
    }

    #[test]
    fn endpoint_keeps_base_path() {
        for base in ["https://api.openai.com/v1", "https://api.openai.com/v1/"] {
            let model = OpenAiModel::new("sk-test", &settings(base, None)).unwrap();
            assert_eq!(
                model.endpoint().as_str(),
                "https://api.openai.com/v1/chat/completions"
            );
        }
    }

    #[test]
    fn invalid_base_url_is_a_config_error() {
        let result = OpenAiModel::new("sk-test", &settings("not a url", None));
        assert!(matches!(result, Err(AnalysisError::Config(_))));
    }

    #[test]
    fn no_credential_means_no_model() {
        assert!(OpenAiModel::try_from_settings(&settings("https://api.openai.com/v1", None)).is_none());
        assert!(
            OpenAiModel::try_from_settings(&settings("https://api.openai.com/v1", Some("sk")))
                .is_some()
        );
    }

    #[test]
    fn request_asks_for_json_object() {
        let request = ChatRequest {
            model: "gpt-3.5-turbo",
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_MESSAGE,
                },
                ChatMessage {
                    role: "user",
                    content: "hi",
                },
            ],
            temperature: 0.7,
            max_tokens: 500,
            response_format: ResponseFormat {
                kind: "json_object",
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["response_format"]["type"], "json_object");
        assert_eq!(json["messages"][1]["content"], "hi");
    }

    #[test]
    fn reply_content_may_be_null() {
        let parsed: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#)
                .unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
