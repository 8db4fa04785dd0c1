//! Ledger Suggest - Main entrypoint.
//!
//! Loads entry pages saved from the entry-listing API, records their
//! descriptions and prints the suggestions a description field would show.

use clap::{Parser, Subcommand};
use ledger_suggest_lib::config::{
    ConfigLoader, ConfigResult, LogConfig, SuggestConfig, Validate, ENV_PREFIX,
};
use ledger_suggest_lib::error::{
    ErrorContext, ErrorReporter, SuggestError, SuggestResult, TracingErrorReporter,
};
use ledger_suggest_lib::ledger::{DescriptionSuggester, EntryPage};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command line arguments for Ledger Suggest.
#[derive(Parser, Debug)]
#[clap(name = "Ledger Suggest", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print suggestions for each prefix
    Suggest {
        /// Entry page JSON files, recorded in the given order
        #[clap(short, long, value_parser, required = true)]
        entries: Vec<PathBuf>,

        /// Override the configured suggestion limit
        #[clap(short, long)]
        limit: Option<usize>,

        /// Prefixes to query
        #[clap(required = true)]
        prefixes: Vec<String>,
    },

    /// Read prefixes from stdin, one per line, and print suggestions
    Interactive {
        /// Entry page JSON files, recorded in the given order
        #[clap(short, long, value_parser, required = true)]
        entries: Vec<PathBuf>,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

impl Command {
    /// Subcommand name as typed on the command line.
    fn name(&self) -> &'static str {
        match self {
            Command::Suggest { .. } => "suggest",
            Command::Interactive { .. } => "interactive",
            Command::Validate => "validate",
            Command::GenConfig { .. } => "gen-config",
        }
    }
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// suggestions on stdout stay machine-readable.
fn init_logging(log: &LogConfig) -> SuggestResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(log.source_location)
        .with_line_number(log.source_location)
        .with_writer(io::stderr);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.pretty().finish())
    };

    result.map_err(|e| SuggestError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

/// Builds a suggester from entry page files.
fn load_pages(config: &SuggestConfig, paths: &[PathBuf]) -> SuggestResult<DescriptionSuggester> {
    let mut suggester = DescriptionSuggester::new(&config.suggestion);
    for path in paths {
        let body = std::fs::read_to_string(path)?;
        let page = EntryPage::from_json(&body)?;
        let recorded = suggester.ingest(&page);
        info!("Recorded {} descriptions from {:?}", recorded, path);
    }
    info!("{} distinct descriptions known", suggester.index().len());
    Ok(suggester)
}

fn run(command: Command, loaded: ConfigResult<SuggestConfig>) -> SuggestResult<()> {
    match command {
        Command::Suggest {
            entries,
            limit,
            prefixes,
        } => {
            let mut config = loaded?;
            if let Some(limit) = limit {
                config.suggestion.limit = limit;
                config.suggestion.validate()?;
            }

            let suggester = load_pages(&config, &entries)?;
            let mut out = io::stdout().lock();
            for prefix in &prefixes {
                writeln!(out, "{prefix}:")?;
                for suggestion in suggester.suggestions(prefix) {
                    writeln!(out, "  {suggestion}")?;
                }
            }
            Ok(())
        }
        Command::Interactive { entries } => {
            let config = loaded?;
            let suggester = load_pages(&config, &entries)?;

            let stdin = io::stdin();
            let mut out = io::stdout().lock();
            for line in stdin.lock().lines() {
                let prefix = line?;
                for suggestion in suggester.suggestions(&prefix) {
                    writeln!(out, "{suggestion}")?;
                }
                writeln!(out)?;
                out.flush()?;
            }
            Ok(())
        }
        Command::Validate => {
            info!("Validating configuration");
            loaded?;
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => write_default_config(&output),
    }
}

fn write_default_config(output: &Path) -> SuggestResult<()> {
    info!("Generating default configuration");

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let toml = toml::to_string_pretty(&SuggestConfig::default())
        .map_err(|e| SuggestError::Custom(format!("Failed to serialize config: {e}")))?;
    std::fs::write(output, toml)?;

    info!("Default configuration written to {:?}", output);
    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();

    // Logging comes up even when the configuration is broken so the error can be reported
    let log_config = loaded.as_ref().map(|c| c.log.clone()).unwrap_or_default();
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
        process::exit(1);
    }

    let command_name = args.command.name();
    if let Err(error) = run(args.command, loaded) {
        let context = ErrorContext::new(error, "cli")
            .with_details(format!("while running `{command_name}`"));
        TracingErrorReporter.report(&context);
        process::exit(1);
    }
}
