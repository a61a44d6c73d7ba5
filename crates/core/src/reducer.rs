//! The report filter reducer.
//!
//! `reduce` never mutates its input and never fails. Each transition first
//! normalizes what it reads from the current filter: a missing key, or a key
//! holding a value of another shape, is read as an empty group or matrix.
//! A missing AND-OR `index` means "new row" on add and nothing on remove.

use tracing::debug;

use crate::action::Action;
use crate::group::{add_or_replace_by_value, remove_by_value, replace_item_at_index, valid_index};
use crate::types::{CurrentFilter, FilterItem, FilterValue, ReportFilterState};

/// Apply one action and return the next state.
pub fn reduce(state: &ReportFilterState, action: &Action) -> ReportFilterState {
    let mut next = state.clone();
    debug!(action = action.kind(), field = action.field(), "reduce");

    match action {
        Action::StartNewReport {
            default_filter,
            help,
            filters,
        } => {
            next.current_filter = default_filter.clone();
            next.help = help.clone();
            next.filter_interface = filters.clone();
            next.errors.clear();
        }
        Action::SetSimpleFilter { field, item } => {
            next.current_filter.insert(field.clone(), item.clone());
        }
        Action::AddToOrFilter { field, item } => {
            add_to_or(&mut next.current_filter, field, item);
        }
        Action::RemoveFromOrFilter { field, item } => {
            remove_from_or(&mut next.current_filter, field, item);
        }
        Action::AddToAndOrFilter { field, index, item } => {
            add_to_and_or(&mut next.current_filter, field, *index, item);
        }
        Action::RemoveFromAndOrFilter { field, index, item } => {
            remove_from_and_or(&mut next.current_filter, field, *index, item);
        }
        Action::SetReportName { name } => {
            next.report_name = Some(name.clone());
        }
    }

    next
}

fn group_of<'a>(filter: &'a CurrentFilter, field: &str) -> Option<&'a [FilterItem]> {
    filter.get(field).and_then(FilterValue::as_group)
}

fn matrix_of<'a>(filter: &'a CurrentFilter, field: &str) -> Option<&'a [Vec<FilterItem>]> {
    filter.get(field).and_then(FilterValue::as_matrix)
}

fn add_to_or(filter: &mut CurrentFilter, field: &str, item: &FilterItem) {
    let group = add_or_replace_by_value(group_of(filter, field), item);
    filter.insert(field.to_string(), FilterValue::Group(group));
}

fn remove_from_or(filter: &mut CurrentFilter, field: &str, item: &FilterItem) {
    let Some(group) = group_of(filter, field) else {
        return;
    };

    let remaining = remove_by_value(group, item);
    if remaining.is_empty() {
        filter.remove(field);
    } else {
        filter.insert(field.to_string(), FilterValue::Group(remaining));
    }
}

fn add_to_and_or(filter: &mut CurrentFilter, field: &str, index: Option<i64>, item: &FilterItem) {
    let rows = matrix_of(filter, field);
    let existing_row = rows.zip(index).and_then(|(rows, index)| {
        valid_index(rows.len(), index).map(|i| rows[i].as_slice())
    });

    let row = add_or_replace_by_value(existing_row, item);
    let rows = match index {
        Some(index) => replace_item_at_index(rows, index, row),
        None => {
            let mut rows = rows.unwrap_or_default().to_vec();
            rows.push(row);
            rows
        }
    };
    filter.insert(field.to_string(), FilterValue::Matrix(rows));
}

fn remove_from_and_or(
    filter: &mut CurrentFilter,
    field: &str,
    index: Option<i64>,
    item: &FilterItem,
) {
    let Some(rows) = matrix_of(filter, field) else {
        return;
    };
    let Some(at) = index.and_then(|index| valid_index(rows.len(), index)) else {
        return;
    };

    let mut rows = rows.to_vec();
    let row = remove_by_value(&rows[at], item);
    if row.is_empty() {
        rows.remove(at);
    } else {
        rows[at] = row;
    }

    if rows.is_empty() {
        filter.remove(field);
    } else {
        filter.insert(field.to_string(), FilterValue::Matrix(rows));
    }
}
