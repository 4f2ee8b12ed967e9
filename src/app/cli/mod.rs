//! CLI Adapter.

mod create;
mod libraries;
mod list;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::domain::AppError;

/// Environment variable holding the log filter (e.g. `componentry=debug`).
const LOG_ENV: &str = "COMPONENTRY_LOG";

#[derive(Parser)]
#[command(name = "componentry")]
#[command(version)]
#[command(
    about = "Author component definitions and write them as .component.yml files",
    long_about = None
)]
struct Cli {
    /// Path to componentry.toml (defaults to ./componentry.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new component definition
    #[clap(visible_alias = "c")]
    Create(create::CreateArgs),
    /// List known components grouped by provider
    #[clap(visible_alias = "ls")]
    List {
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List library components that provide JS or CSS assets
    #[clap(visible_alias = "lib")]
    Libraries {
        /// Only list libraries for this asset kind (js, css)
        #[arg(long)]
        kind: Option<String>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the machine name suggested for a label
    MachineName {
        /// Human-readable label
        label: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Entry point for the CLI.
pub fn run() {
    init_tracing();
    let cli = Cli::parse();
    let config = cli.config.as_deref();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Create(args) => create::run_create(config, args),
        Commands::List { format } => list::run_list(config, format).map(|_| 0),
        Commands::Libraries { kind, format } => {
            libraries::run_libraries(config, kind.as_deref(), format).map(|_| 0)
        }
        Commands::MachineName { label } => {
            println!("{}", crate::app::api::suggest_machine_name(&label));
            Ok(0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(|e| AppError::ParseError {
        what: "JSON output".to_string(),
        details: e.to_string(),
    })?;
    println!("{}", json);
    Ok(())
}
