mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use commands::{cmd_blend, cmd_hints, cmd_reduce, cmd_run};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Report wizard filter engine.
#[derive(Parser)]
#[command(name = "reporting", version, about = "Report wizard filter engine")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge filter controls sharing a display label into composite controls
    Blend {
        /// Path to a JSON array of filter interface descriptors
        interface: PathBuf,
    },

    /// Replay a recorded action stream onto a report filter state
    Reduce {
        /// Path to a JSON array of actions
        actions: PathBuf,
        /// Starting state (defaults to an empty filter)
        #[arg(long)]
        state: Option<PathBuf>,
    },

    /// Look up autocomplete hints for a filter field
    Hints {
        /// Path to the connection config TOML file
        #[arg(long)]
        config: PathBuf,
        /// Filter field key (e.g. "partner")
        field: String,
        /// Partially typed search text
        partial: String,
    },

    /// Submit a report built from a saved filter state
    Run {
        /// Path to the connection config TOML file
        #[arg(long)]
        config: PathBuf,
        /// Path to the report filter state JSON file
        #[arg(long)]
        state: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Blend { interface } => {
            cmd_blend(&interface, cli.output, cli.quiet);
        }
        Commands::Reduce { actions, state } => {
            cmd_reduce(&actions, state.as_deref(), cli.output, cli.quiet);
        }
        Commands::Hints {
            config,
            field,
            partial,
        } => {
            cmd_hints(&config, &field, &partial, cli.output, cli.quiet);
        }
        Commands::Run { config, state } => {
            cmd_run(&config, &state, cli.output, cli.quiet);
        }
    }
}

pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("{}", msg),
        OutputFormat::Json => {
            eprintln!("{}", serde_json::json!({ "error": msg }));
        }
    }
}

pub(crate) fn print_json(value: &impl serde::Serialize) {
    println!(
        "{}",
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|e| format!("serialization error: {}", e))
    );
}
