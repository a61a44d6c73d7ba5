use std::path::Path;
use std::process;

use reporting_remote::{HintSource, HttpHintSource};

use super::runtime;
use crate::config::{read_config, AUTH_TOKEN_ENV};
use crate::{print_json, report_error, OutputFormat};

pub(crate) fn cmd_hints(
    config_path: &Path,
    field: &str,
    partial: &str,
    output: OutputFormat,
    quiet: bool,
) {
    let endpoint = match read_config(config_path)
        .and_then(|c| c.endpoint(std::env::var(AUTH_TOKEN_ENV).ok()).map_err(|e| e.to_string()))
    {
        Ok(e) => e,
        Err(msg) => {
            report_error(&format!("error: {}", msg), output, quiet);
            process::exit(1);
        }
    };

    let source = HttpHintSource::new(endpoint);
    let hints = match runtime(output, quiet).block_on(source.get_hints(field, partial)) {
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
        OutputFormat::Json => print_json(&hints),
        OutputFormat::Text => {
            for hint in &hints {
                println!("{}\t{}", hint.key, hint.display);
            }
        }
    }
}
