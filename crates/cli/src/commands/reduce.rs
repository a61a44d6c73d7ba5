use std::path::Path;
use std::process;

use reporting_core::{parse_actions, parse_state, reduce, FilterItem, FilterValue, ReportFilterState};
use tracing::debug;

use super::read_json_file;
use crate::{print_json, report_error, OutputFormat};

pub(crate) fn cmd_reduce(
    actions_path: &Path,
    state_path: Option<&Path>,
    output: OutputFormat,
    quiet: bool,
) {
    let initial = match state_path {
        Some(path) => match parse_state(&read_json_file(path, output, quiet)) {
            Ok(s) => s,
            Err(e) => {
                report_error(&format!("error: {}", e), output, quiet);
                process::exit(1);
            }
        },
        None => ReportFilterState::default(),
    };

    let actions = match parse_actions(&read_json_file(actions_path, output, quiet)) {
        Ok(a) => a,
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    };

    debug!(count = actions.len(), "replaying actions");
    let state = actions.iter().fold(initial, |s, a| reduce(&s, a));
    if quiet {
        return;
    }

    match output {
        OutputFormat::Json => print_json(&state),
        OutputFormat::Text => {
            if let Some(name) = &state.report_name {
                println!("report: {}", name);
            }
            if state.current_filter.is_empty() {
                println!("(no filters)");
            }
            for (field, value) in &state.current_filter {
                println!("{}: {}", field, describe(value));
            }
        }
    }
}

fn or_group(items: &[FilterItem]) -> String {
    items
        .iter()
        .map(|i| i.display.as_str())
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// One-line rendering: `a OR b` for groups, `(a OR b) AND (c)` for matrices.
fn describe(value: &FilterValue) -> String {
    match value {
        FilterValue::Group(items) => or_group(items),
        FilterValue::Matrix(rows) => rows
            .iter()
            .map(|row| format!("({})", or_group(row)))
            .collect::<Vec<_>>()
            .join(" AND "),
        FilterValue::Item(item) => item.display.clone(),
        FilterValue::Scalar(raw) => raw.to_string(),
    }
}
