use thiserror::Error;

/// Why a model-backed analysis could not be produced.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("model request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("model returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("model returned no content")]
    EmptyReply,

    #[error("unparseable model reply: {0}")]
    Parse(String),

    #[error("invalid model configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
