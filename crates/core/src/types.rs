//! Data model shared by the filter reducer, the control blender and the
//! remote collaborators.
//!
//! Field names follow the wire shape the reporting endpoints exchange
//! (`interfaceType`, `hexColor`, `currentFilter`, ...), so state documents
//! and filter interface definitions can be loaded straight from JSON.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ──────────────────────────────────────────────
// Filter interface descriptors
// ──────────────────────────────────────────────

/// The kind of UI control a filter field is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterfaceType {
    DateRange,
    CityState,
    SearchMultiselect,
    Tags,
    SearchSelect,
    /// Produced by control blending; stands in for several descriptors
    /// sharing one display label.
    Composite,
}

impl InterfaceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceType::DateRange => "date_range",
            InterfaceType::CityState => "city_state",
            InterfaceType::SearchMultiselect => "search_multiselect",
            InterfaceType::Tags => "tags",
            InterfaceType::SearchSelect => "search_select",
            InterfaceType::Composite => "composite",
        }
    }
}

/// One control in a report type's filter interface.
///
/// Before blending, `filter` is a single field key. A composite produced by
/// [`blend_controls`](crate::blend_controls) carries the `+`-joined keys of
/// its members and maps each member's interface type to the member itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterInterfaceDescriptor {
    pub filter: String,
    #[serde(rename = "interfaceType")]
    pub interface_type: InterfaceType,
    pub display: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interfaces: Option<BTreeMap<InterfaceType, FilterInterfaceDescriptor>>,
}

impl FilterInterfaceDescriptor {
    pub fn new(filter: &str, interface_type: InterfaceType, display: &str) -> Self {
        FilterInterfaceDescriptor {
            filter: filter.to_string(),
            interface_type,
            display: display.to_string(),
            interfaces: None,
        }
    }

    pub fn is_composite(&self) -> bool {
        self.interface_type == InterfaceType::Composite
    }
}

// ──────────────────────────────────────────────
// Filter items and values
// ──────────────────────────────────────────────

/// A selectable value with its display label. Tag items carry a color.
///
/// Group operations compare items by `value` only; see [`FilterItem::same_value`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterItem {
    pub value: serde_json::Value,
    #[serde(default)]
    pub display: String,
    #[serde(rename = "hexColor", default, skip_serializing_if = "Option::is_none")]
    pub hex_color: Option<String>,
}

impl FilterItem {
    pub fn new(value: impl Into<serde_json::Value>, display: &str) -> Self {
        FilterItem {
            value: value.into(),
            display: display.to_string(),
            hex_color: None,
        }
    }

    pub fn with_color(mut self, hex_color: &str) -> Self {
        self.hex_color = Some(hex_color.to_string());
        self
    }

    /// Identity used for dedup and removal inside groups.
    ///
    /// Numbers compare by numeric value, so `1` and `1.0` are the same item.
    pub fn same_value(&self, other: &FilterItem) -> bool {
        match (&self.value, &other.value) {
            (serde_json::Value::Number(a), serde_json::Value::Number(b)) => {
                a == b || a.as_f64() == b.as_f64()
            }
            (a, b) => a == b,
        }
    }
}

/// The value stored under one field key of a [`CurrentFilter`].
///
/// Variant order matters for untagged deserialization: a list of lists is an
/// AND-OR matrix, a flat list of items is an OR-group, an object with a
/// `value` is a single item, and anything else (date range objects, strings,
/// numbers) is kept as a raw scalar. `Matrix` is tried first because an item
/// with a defaulted `display` would otherwise also accept a one-element row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Matrix(Vec<Vec<FilterItem>>),
    Group(Vec<FilterItem>),
    Item(FilterItem),
    Scalar(serde_json::Value),
}

impl FilterValue {
    /// Items of an OR-group. An empty matrix reads as an empty group since
    /// both deserialize from `[]`.
    pub fn as_group(&self) -> Option<&[FilterItem]> {
        match self {
            FilterValue::Group(items) => Some(items),
            FilterValue::Matrix(rows) if rows.is_empty() => Some(&[]),
            _ => None,
        }
    }

    /// Rows of an AND-OR matrix. An empty group reads as an empty matrix.
    pub fn as_matrix(&self) -> Option<&[Vec<FilterItem>]> {
        match self {
            FilterValue::Matrix(rows) => Some(rows),
            FilterValue::Group(items) if items.is_empty() => Some(&[]),
            _ => None,
        }
    }
}

/// Field key → selected filter value. A key mapped to an empty group or an
/// empty matrix never appears; emptiness means the key is absent.
pub type CurrentFilter = BTreeMap<String, FilterValue>;

// ──────────────────────────────────────────────
// Report filter state
// ──────────────────────────────────────────────

/// Everything the report wizard knows about the filter being built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportFilterState {
    #[serde(default)]
    pub current_filter: CurrentFilter,
    /// Per-field help text, passed through from the report type definition.
    #[serde(default)]
    pub help: BTreeMap<String, serde_json::Value>,
    #[serde(default)]
    pub filter_interface: Vec<FilterInterfaceDescriptor>,
    /// Validation messages per field, as reported by the server.
    #[serde(default)]
    pub errors: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn descriptor_uses_wire_field_names() {
        let descriptor = FilterInterfaceDescriptor::new("tags", InterfaceType::Tags, "Tags");
        let value = serde_json::to_value(&descriptor).unwrap();
        assert_eq!(
            value,
            json!({"filter": "tags", "interfaceType": "tags", "display": "Tags"})
        );
    }

    #[test]
    fn filter_value_untagged_shapes() {
        let group: FilterValue =
            serde_json::from_value(json!([{"value": 1, "display": "A"}])).unwrap();
        assert!(matches!(group, FilterValue::Group(ref items) if items.len() == 1));

        let matrix: FilterValue = serde_json::from_value(json!([
            [{"value": 1, "display": "A"}, {"value": 2, "display": "B"}],
            [{"value": 3, "display": "C"}]
        ]))
        .unwrap();
        assert!(matches!(matrix, FilterValue::Matrix(ref rows) if rows.len() == 2));

        let item: FilterValue =
            serde_json::from_value(json!({"value": "IL", "display": "Illinois"})).unwrap();
        assert!(matches!(item, FilterValue::Item(_)));

        let range: FilterValue =
            serde_json::from_value(json!({"start": "2024-01-01", "end": "2024-02-01"})).unwrap();
        assert!(matches!(range, FilterValue::Scalar(_)));
    }

    #[test]
    fn single_row_matrix_is_not_mistaken_for_group() {
        let matrix: FilterValue =
            serde_json::from_value(json!([[{"value": 1, "display": "A"}]])).unwrap();
        assert_eq!(
            matrix,
            FilterValue::Matrix(vec![vec![FilterItem::new(1, "A")]])
        );
    }

    #[test]
    fn tag_item_keeps_hex_color() {
        let item: FilterItem =
            serde_json::from_value(json!({"value": 7, "display": "West", "hexColor": "ff0000"}))
                .unwrap();
        assert_eq!(item.hex_color.as_deref(), Some("ff0000"));
        assert!(item.same_value(&FilterItem::new(7, "renamed")));
    }

    #[test]
    fn value_only_items_still_parse_as_a_group() {
        let group: FilterValue = serde_json::from_value(json!([{"value": 1}])).unwrap();
        assert_eq!(group, FilterValue::Group(vec![FilterItem::new(1, "")]));

        let item: FilterValue = serde_json::from_value(json!({"value": "IL"})).unwrap();
        assert!(matches!(item, FilterValue::Item(ref i) if i.display.is_empty()));
    }

    #[test]
    fn integer_and_float_values_are_the_same_item() {
        let int = FilterItem::new(1, "A");
        let float = FilterItem::new(json!(1.0), "A-renamed");
        assert!(int.same_value(&float));
        assert!(float.same_value(&int));
        assert!(!int.same_value(&FilterItem::new(json!(1.5), "B")));
        assert!(!int.same_value(&FilterItem::new("1", "C")));
    }

    #[test]
    fn state_defaults_missing_sections() {
        let state: ReportFilterState = serde_json::from_value(json!({})).unwrap();
        assert_eq!(state, ReportFilterState::default());
    }
}
