use axum::{extract::rejection::JsonRejection, extract::State, Json};
use planner_core::{Analysis, Priority, TaskSnapshot};
use serde_json::Value;
use tracing::instrument;

use crate::{app_state::AppState, routes::ApiError};

const INVALID_TASKS: &str = "Invalid task data: expected a `tasks` array";

#[instrument(name = "POST /analyze", skip(app_state, payload))]
pub async fn analyze(
    State(app_state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Analysis>, ApiError> {
    let Json(body) = payload?;
    let tasks = parse_tasks(body)?;

    tracing::debug!(
        task_count = tasks.len(),
        mode = app_state.analysis.mode(),
        "Analyzing tasks"
    );

    Ok(Json(app_state.analysis.analyze(&tasks).await))
}

/// Extract `tasks`, which must be present and an array.
///
/// Items are read leniently and never rejected: missing or mistyped fields
/// fall back to their defaults, an unknown priority counts as medium and a
/// non-string time as no time.
fn parse_tasks(mut body: Value) -> Result<Vec<TaskSnapshot>, ApiError> {
    match body.get_mut("tasks").map(Value::take) {
        Some(Value::Array(items)) => Ok(items.iter().map(snapshot_from_value).collect()),
        _ => Err(ApiError::bad_request(INVALID_TASKS)),
    }
}

fn snapshot_from_value(item: &Value) -> TaskSnapshot {
    let title = item.get("title").and_then(Value::as_str).unwrap_or_default();
    let priority = item
        .get("priority")
        .and_then(Value::as_str)
        .and_then(|p| p.parse::<Priority>().ok())
        .unwrap_or_default();

    let mut task = TaskSnapshot::new(title, priority);
    task.completed = item
        .get("completed")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    task.time = item
        .get("time")
        .and_then(Value::as_str)
        .map(str::to_string);
    task
}
