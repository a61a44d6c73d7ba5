//! Report-run bookkeeping.
//!
//! Tracks which reports are currently being generated and the handle of the
//! most recently completed one. Independent of the filter state.

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Opaque reference to a generated report, as returned by the report runner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportHandle {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A report submission that has not completed yet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunningReport {
    /// Caller-assigned submission number.
    pub order: u64,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRunState {
    /// In submission order.
    pub running: Vec<RunningReport>,
    pub latest: Option<ReportHandle>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RunAction {
    StartRunningReport { order: u64, name: String },
    RemoveRunningReport { order: u64 },
    NewReport { report: ReportHandle },
}

pub fn reduce_run(state: &ReportRunState, action: &RunAction) -> ReportRunState {
    let mut next = state.clone();

    match action {
        RunAction::StartRunningReport { order, name } => {
            if !next.running.iter().any(|r| r.order == *order) {
                debug!(order, name = %name, "report started");
                next.running.push(RunningReport {
                    order: *order,
                    name: name.clone(),
                });
            }
        }
        RunAction::RemoveRunningReport { order } => {
            next.running.retain(|r| r.order != *order);
        }
        RunAction::NewReport { report } => {
            debug!(id = %report.id, "report available");
            next.latest = Some(report.clone());
        }
    }

    next
}
