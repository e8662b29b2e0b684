//! Day analysis: summary and suggestions for a list of tasks.
//!
//! [`AnalysisProvider`] is chosen once at startup:
//!
//! - **ModelBacked** delegates to a [`LanguageModel`](model::LanguageModel) (OpenAI-compatible chat
//!   completions in production, [`MockModel`](model::MockModel) in tests) and
//!   falls back to the heuristic whenever the model call or reply parsing fails
//! - **HeuristicOnly** always uses
//!   [`heuristic_analysis`](planner_core::heuristic_analysis)
//!
//! Callers of [`AnalysisProvider::analyze`] never see an error.

mod error;
pub mod model;
mod prompt;
mod provider;

pub use provider::AnalysisProvider;
