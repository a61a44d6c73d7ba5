//! Actions accepted by the report filter reducer.
//!
//! The serialized form uses the same `type` tags the report wizard has
//! always dispatched, so recorded action streams replay unchanged.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{CurrentFilter, FilterInterfaceDescriptor, FilterItem, FilterValue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    /// Replace the whole filter configuration. Clears errors.
    StartNewReport {
        #[serde(rename = "defaultFilter", default)]
        default_filter: CurrentFilter,
        #[serde(default)]
        help: BTreeMap<String, serde_json::Value>,
        #[serde(default)]
        filters: Vec<FilterInterfaceDescriptor>,
    },
    /// Overwrite one field with a single item or scalar.
    SetSimpleFilter { field: String, item: FilterValue },
    AddToOrFilter { field: String, item: FilterItem },
    RemoveFromOrFilter { field: String, item: FilterItem },
    /// Add to row `index`. Without an index the item starts a new row.
    AddToAndOrFilter {
        field: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<i64>,
        item: FilterItem,
    },
    /// Remove from row `index`. Without an index nothing changes.
    RemoveFromAndOrFilter {
        field: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        index: Option<i64>,
        item: FilterItem,
    },
    SetReportName { name: String },
}

impl Action {
    /// The field key this action touches, if any.
    pub fn field(&self) -> Option<&str> {
        match self {
            Action::SetSimpleFilter { field, .. }
            | Action::AddToOrFilter { field, .. }
            | Action::RemoveFromOrFilter { field, .. }
            | Action::AddToAndOrFilter { field, .. }
            | Action::RemoveFromAndOrFilter { field, .. } => Some(field),
            Action::StartNewReport { .. } | Action::SetReportName { .. } => None,
        }
    }

    /// The wire tag of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::StartNewReport { .. } => "START_NEW_REPORT",
            Action::SetSimpleFilter { .. } => "SET_SIMPLE_FILTER",
            Action::AddToOrFilter { .. } => "ADD_TO_OR_FILTER",
            Action::RemoveFromOrFilter { .. } => "REMOVE_FROM_OR_FILTER",
            Action::AddToAndOrFilter { .. } => "ADD_TO_AND_OR_FILTER",
            Action::RemoveFromAndOrFilter { .. } => "REMOVE_FROM_AND_OR_FILTER",
            Action::SetReportName { .. } => "SET_REPORT_NAME",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deserializes_legacy_tags() {
        let action: Action = serde_json::from_value(json!({
            "type": "ADD_TO_AND_OR_FILTER",
            "field": "tags",
            "index": 1,
            "item": {"value": 3, "display": "Veteran", "hexColor": "00ff00"}
        }))
        .unwrap();
        assert_eq!(
            action,
            Action::AddToAndOrFilter {
                field: "tags".to_string(),
                index: Some(1),
                item: FilterItem::new(3, "Veteran").with_color("00ff00"),
            }
        );
        assert_eq!(action.kind(), "ADD_TO_AND_OR_FILTER");
        assert_eq!(action.field(), Some("tags"));
    }

    #[test]
    fn start_new_report_payload_defaults() {
        let action: Action = serde_json::from_value(json!({"type": "START_NEW_REPORT"})).unwrap();
        assert_eq!(
            action,
            Action::StartNewReport {
                default_filter: CurrentFilter::new(),
                help: BTreeMap::new(),
                filters: vec![],
            }
        );
    }

    #[test]
    fn and_or_index_is_optional() {
        let action: Action = serde_json::from_value(json!({
            "type": "REMOVE_FROM_AND_OR_FILTER",
            "field": "tags",
            "item": {"value": 3, "display": "Veteran"}
        }))
        .unwrap();
        assert_eq!(
            action,
            Action::RemoveFromAndOrFilter {
                field: "tags".to_string(),
                index: None,
                item: FilterItem::new(3, "Veteran"),
            }
        );
        assert!(serde_json::to_value(&action).unwrap().get("index").is_none());
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let result: Result<Action, _> =
            serde_json::from_value(json!({"type": "SHOW_SPINNER", "field": "x"}));
        assert!(result.is_err());
    }
}
