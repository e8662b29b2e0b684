//! Language model backends.

mod openai;
#[cfg(test)]
mod mock;

use async_trait::async_trait;

use super::error::Result;

#[cfg(test)]
pub use mock::MockModel;
pub use openai::OpenAiModel;

/// A text-completion model.
///
/// Abstracts the provider so the analysis fallback can be tested without
/// network access.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Send `prompt` and return the raw text of the reply.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Model identifier, for logging.
    fn name(&self) -> &str;
}
