use std::sync::Arc;

use planner_core::{heuristic_analysis, Analysis, TaskSnapshot};

use crate::config::ModelSettings;

use super::error::Result;
use super::model::{LanguageModel, OpenAiModel};
use super::prompt::{build_prompt, parse_reply};

/// How the service produces analyses, fixed for the process lifetime.
#[derive(Clone)]
pub enum AnalysisProvider {
    /// Ask the model first, fall back to the heuristic on any failure.
    ModelBacked(Arc<dyn LanguageModel>),
    HeuristicOnly,
}

impl AnalysisProvider {
    /// Pick the variant from configuration.
    ///
    /// A configured model that cannot be constructed is logged and the
    /// service runs heuristic-only.
    pub fn from_settings(settings: &ModelSettings) -> Self {
        match OpenAiModel::try_from_settings(settings) {
            None => {
                tracing::warn!(
                    "No model credential configured (OPENAI_API_KEY), using heuristic analysis only"
                );
                Self::HeuristicOnly
            }
            Some(Ok(model)) => {
                tracing::info!(
                    model = model.name(),
                    endpoint = %model.endpoint(),
                    "Model-backed analysis enabled"
                );
                Self::model_backed(model)
            }
            Some(Err(err)) => {
                tracing::error!(error = %err, "Failed to set up model, using heuristic analysis only");
                Self::HeuristicOnly
            }
        }
    }

    pub fn model_backed(model: impl LanguageModel + 'static) -> Self {
        Self::ModelBacked(Arc::new(model))
    }

    pub fn mode(&self) -> &'static str {
        match self {
            Self::ModelBacked(_) => "model",
            Self::HeuristicOnly => "heuristic",
        }
    }

    /// Analyze `tasks`. Never fails.
    ///
    /// An empty list always gets the heuristic's empty-state analysis.
    pub async fn analyze(&self, tasks: &[TaskSnapshot]) -> Analysis {
        let model = match self {
            Self::ModelBacked(model) if !tasks.is_empty() => model,
            _ => return heuristic_analysis(tasks),
        };

        match model_analysis(model.as_ref(), tasks).await {
            Ok(analysis) => analysis,
            Err(err) => {
                tracing::warn!(
                    error = %err,
                    model = model.name(),
                    "Model analysis failed, falling back to heuristic"
                );
                heuristic_analysis(tasks)
            }
        }
    }
}

async fn model_analysis(model: &dyn LanguageModel, tasks: &[TaskSnapshot]) -> Result<Analysis> {
    let prompt = build_prompt(tasks);
    let reply = model.complete(&prompt).await?;
    parse_reply(&reply)
}
