//! Kinship CLI - Command-line interface for the genealogy graph engine.

use clap::Parser;
use kinship_cli::commands;
use kinship_cli::{load_dataset, Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> kinship_cli::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // An explicit config file must load; the default one falls back to defaults
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "ignoring unreadable config");
            Config::default()
        }),
    };

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    // Create formatter
    let formatter = Formatter::new(format, color_enabled);

    let dataset = load_dataset(&config.dataset_path(cli.dataset)?)?;
    let engine = &config.engine;

    match cli.command {
        Command::Scope(args) => commands::execute_scope(args, &dataset, engine, &formatter)?,
        Command::Fragments(args) => {
            commands::execute_fragments(args, &dataset, engine, &formatter)?
        }
        Command::Gaps(args) => commands::execute_gaps(args, &dataset, engine, &formatter)?,
        Command::Root(args) => commands::execute_root(args, &dataset, engine, &formatter)?,
        Command::View(args) => commands::execute_view(args, &dataset, engine, &formatter)?,
        Command::Check => commands::execute_check(&dataset, engine, &formatter)?,
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` overrides the verbosity flags.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
