use crate::api::ApiClient;
use crate::app::App;
use planner_core::{Analysis, TaskSnapshot};

use super::action_queue::{Action, ActionTx};

pub(super) fn run_action(action: Action, app: &mut App, client: &ApiClient, action_tx: &ActionTx) {
    match action {
        Action::RequestAnalysis => {
            let Some(tasks) = app.begin_analysis() else {
                return;
            };
            let client = client.clone();
            let action_tx = action_tx.clone();
            tokio::spawn(async move {
                let analysis = request_analysis(&client, &tasks).await;
                // Receiver only goes away when the UI has quit.
                let _ = action_tx.send(Action::ApplyAnalysis(analysis));
            });
        }
        Action::ApplyAnalysis(analysis) => app.finish_analysis(analysis),
    }
}

/// Analyze `tasks` through the service. Never fails: any error is logged
/// and replaced by [`Analysis::offline_fallback`].
pub(super) async fn request_analysis(client: &ApiClient, tasks: &[TaskSnapshot]) -> Analysis {
    match client.analyze(tasks).await {
        Ok(analysis) => {
            tracing::debug!(task_count = tasks.len(), "Received analysis");
            analysis
        }
        Err(err) => {
            tracing::warn!(error = ?err, "Analysis request failed, using offline fallback");
            Analysis::offline_fallback()
        }
    }
}
