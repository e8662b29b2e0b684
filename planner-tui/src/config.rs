use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const API_URL_ENV: &str = "PLANNER_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Base URL of the planner-api server, e.g. "http://localhost:3001"
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    "http://localhost:3001".to_string()
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
        }
    }
}

impl PlannerConfig {
    fn root_path() -> Result<PathBuf> {
        Ok(dirs::config_dir()
            .context("Cannot determine config directory")?
            .join("daily-planner"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::root_path()?.join("config.toml"))
    }

    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::root_path()?.join("planner-tui.log"))
    }

    /// Load config from disk. Returns default config if file doesn't exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Failed to parse config at {}", path.display()))
    }

    fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = toml::to_string_pretty(self)?;
        std::fs::write(&path, raw)?;
        Ok(())
    }

    /// Apply `PLANNER_API_URL` and then the `--api-url` flag.
    pub fn with_overrides(
        mut self,
        env_api_url: Option<String>,
        cli_api_url: Option<String>,
    ) -> Self {
        if let Some(url) = env_api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        if let Some(url) = cli_api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }

    pub fn env_api_url() -> Option<String> {
        std::env::var(API_URL_ENV).ok()
    }
}
