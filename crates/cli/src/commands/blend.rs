use std::path::Path;
use std::process;

use reporting_core::{blend_controls, parse_filter_interface};

use super::read_json_file;
use crate::{print_json, report_error, OutputFormat};

pub(crate) fn cmd_blend(interface_path: &Path, output: OutputFormat, quiet: bool) {
    let doc = read_json_file(interface_path, output, quiet);

    let controls = match parse_filter_interface(&doc) {
        Ok(c) => c,
        Err(e) => {
            report_error(&format!("error: {}", e), output, quiet);
            process::exit(1);
        }
    };

    let blended = blend_controls(&controls);
    if quiet {
        return;
    }

    match output {
        OutputFormat::Json => print_json(&blended),
        OutputFormat::Text => {
            for control in &blended {
                println!(
                    "{}: {} ({})",
                    control.display,
                    control.interface_type.as_str(),
                    control.filter
                );
                // Members in input order, not interface type order.
                if control.is_composite() {
                    for key in control.filter.split('+') {
                        if let Some(member) = control
                            .interfaces
                            .iter()
                            .flat_map(|m| m.values())
                            .find(|m| m.filter == key)
                        {
                            println!("  - {} ({})", member.interface_type.as_str(), member.filter);
                        }
                    }
                }
            }
        }
    }
}
