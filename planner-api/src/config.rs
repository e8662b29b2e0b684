use std::str::FromStr;

use serde::Deserialize;
use serde_with::serde_as;
use strum::{Display, EnumString};

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub model: ModelSettings,
}

#[serde_as]
#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub port: u16,
    pub host: String,
    /// Origins allowed by CORS. Empty means any origin.
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

#[serde_as]
#[derive(Deserialize, Clone)]
pub struct ModelSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub name: String,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub temperature: f32,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub max_tokens: u32,
    #[serde_as(as = "serde_with::DisplayFromStr")]
    pub timeout_secs: u64,
}

impl ModelSettings {
    /// The model credential, if one is configured and non-blank.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

// Keeps the credential out of logs.
impl std::fmt::Debug for ModelSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelSettings")
            .field("api_key", &self.credential().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("name", &self.name)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Read settings from built-in defaults, `config/base.yaml`,
/// `config/{APP_ENVIRONMENT}.yaml` and `PLANNER_*` variables, in that order.
///
/// The plain `PORT` and `OPENAI_API_KEY` variables win over everything else.
pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let config_directory = base_path.join("config");

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|_| config::ConfigError::Message("Failed to parse APP_ENVIRONMENT".into()))?;
    let environment_filename = format!("{}.yaml", environment);

    let settings = config::Config::builder()
        .set_default("application.host", "0.0.0.0")?
        .set_default("application.port", 3001)?
        .set_default("model.base_url", "https://api.openai.com/v1")?
        .set_default("model.name", "gpt-3.5-turbo")?
        .set_default("model.temperature", 0.7)?
        .set_default("model.max_tokens", 500)?
        .set_default("model.timeout_secs", 30)?
        .add_source(config::File::from(config_directory.join("base.yaml")).required(false))
        .add_source(
            config::File::from(config_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("PLANNER")
                .prefix_separator("_")
                .separator("__"),
        )
        .set_override_option("application.port", std::env::var("PORT").ok())?
        .set_override_option("model.api_key", std::env::var("OPENAI_API_KEY").ok())?
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString, PartialEq)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_settings(api_key: Option<&str>) -> ModelSettings {
        ModelSettings {
            api_key: api_key.map(str::to_string),
            base_url: "https://api.openai.com/v1".to_string(),
            name: "gpt-3.5-turbo".to_string(),
            temperature: 0.7,
            max_tokens: 500,
            timeout_secs: 30,
        }
    }

    #[test]
    fn blank_credential_counts_as_missing() {
        assert_eq!(model_settings(None).credential(), None);
        assert_eq!(model_settings(Some("   ")).credential(), None);
        assert_eq!(model_settings(Some(" sk-test ")).credential(), Some("sk-test"));
    }

    #[test]
    fn debug_output_redacts_credential() {
        let output = format!("{:?}", model_settings(Some("sk-secret")));
        assert!(!output.contains("sk-secret"));
        assert!(output.contains("<redacted>"));
    }

    #[test]
    fn environment_parses_case_insensitively() {
        assert_eq!(Environment::from_str("Production").unwrap(), Environment::Production);
        assert_eq!(Environment::Local.to_string(), "local");
        assert!(Environment::from_str("staging").is_err());
    }
}
