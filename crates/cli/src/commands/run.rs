use std::path::Path;
use std::process;

use reporting_core::parse_state;
use reporting_remote::{HttpReportRunner, ReportConfig, ReportRunner};

use super::{read_json_file, runtime};
use crate::config::{read_config, AUTH_TOKEN_ENV};
use crate::{print_json, report_error, OutputFormat};

pub(crate) fn cmd_run(config_path: &Path, state_path: &Path, output: OutputFormat, quiet: bool) {
    let endpoint = match read_config(config_path)
        .and_then(|c| c.endpoint(std::env::var(AUTH_TOKEN_ENV).ok()).map_err(|e| e.to_string()))
    {
        Ok(e) => e,
        Err(msg) => {
            report_error(&format!("error: {}", msg), output, quiet);
            process::exit(1);
        }
    };

    let state = match parse_state(&read_json_file(state_path, output, quiet)) {
        Ok(s) => s,
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    };

    let runner = HttpReportRunner::new(endpoint);
    let config = ReportConfig::from_state(&state);
    let handle = match runtime(output, quiet).block_on(runner.run_report(&config)) {
        Ok(h) => h,
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    };

    if quiet {
        return;
    }
    match output {
        OutputFormat::Json => print_json(&handle),
        OutputFormat::Text => match &handle.name {
            Some(name) => println!("report {} submitted ({})", handle.id, name),
            None => println!("report {} submitted", handle.id),
        },
    }
}
