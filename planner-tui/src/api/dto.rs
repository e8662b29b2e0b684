use planner_core::TaskSnapshot;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub tasks: &'a [TaskSnapshot],
}

#[derive(Debug, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
