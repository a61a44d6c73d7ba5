//! Loading filter interface definitions, state documents and recorded
//! action streams from JSON.

use tracing::warn;

use crate::action::Action;
use crate::error::CoreError;
use crate::types::{FilterInterfaceDescriptor, ReportFilterState};

/// Tags `parse_actions` hands to the reducer. Anything else is skipped.
const FILTER_ACTION_KINDS: &[&str] = &[
    "START_NEW_REPORT",
    "SET_SIMPLE_FILTER",
    "ADD_TO_OR_FILTER",
    "REMOVE_FROM_OR_FILTER",
    "ADD_TO_AND_OR_FILTER",
    "REMOVE_FROM_AND_OR_FILTER",
    "SET_REPORT_NAME",
];

pub fn parse_filter_interface(
    value: &serde_json::Value,
) -> Result<Vec<FilterInterfaceDescriptor>, CoreError> {
    serde_json::from_value(value.clone()).map_err(|e| CoreError::InvalidJson {
        what: "filter interface",
        message: e.to_string(),
    })
}

pub fn parse_state(value: &serde_json::Value) -> Result<ReportFilterState, CoreError> {
    serde_json::from_value(value.clone()).map_err(|e| CoreError::InvalidJson {
        what: "report filter state",
        message: e.to_string(),
    })
}

/// Parse a JSON array of actions.
///
/// Entries whose `type` is not a filter action (spinner toggles, run
/// bookkeeping and the like share the same dispatch stream) are skipped
/// with a warning. A known tag with a malformed payload is an error.
pub fn parse_actions(value: &serde_json::Value) -> Result<Vec<Action>, CoreError> {
    let entries = value.as_array().ok_or_else(|| CoreError::InvalidJson {
        what: "action list",
        message: "expected a JSON array".to_string(),
    })?;

    let mut actions = Vec::with_capacity(entries.len());
    for (position, entry) in entries.iter().enumerate() {
        let kind = entry.get("type").and_then(|t| t.as_str()).unwrap_or("");
        if !FILTER_ACTION_KINDS.contains(&kind) {
            warn!(position, kind, "skipping non-filter action");
            continue;
        }

        let action: Action =
            serde_json::from_value(entry.clone()).map_err(|e| CoreError::InvalidAction {
                position,
                kind: kind.to_string(),
                message: e.to_string(),
            })?;
        actions.push(action);
    }

    Ok(actions)
}
