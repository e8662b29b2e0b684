use planner_core::Analysis;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

#[derive(Debug, Clone)]
pub(super) enum Action {
    /// Send the selected day's tasks for analysis.
    RequestAnalysis,
    /// A finished analysis, already collapsed to the offline fallback on failure.
    ApplyAnalysis(Analysis),
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}
