//! CLI command definitions and argument parsing.

use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Kinship CLI - Scope, partition and anchor genealogy graphs.
#[derive(Debug, Parser)]
#[command(name = "kinship")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset file (JSON)
    #[arg(short, long, global = true, env = "KINSHIP_DATASET")]
    pub dataset: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the people visible in a house view
    Scope(ScopeArgs),

    /// Partition people into connected fragments
    Fragments(FilterArgs),

    /// List lineage-gap bridges between fragments
    Gaps(FilterArgs),

    /// Select the anchor person
    Root(RootArgs),

    /// Build the full view of a house
    View(ViewArgs),

    /// Report data-quality issues
    Check,
}

/// Cadet inclusion flags shared by house-scoped commands.
#[derive(Debug, Clone, Copy, Default, Args)]
pub struct CadetArgs {
    /// Include members of direct cadet houses
    #[arg(long, conflicts_with = "no_cadets")]
    pub cadets: bool,

    /// Exclude cadet houses even if the config includes them
    #[arg(long)]
    pub no_cadets: bool,
}

impl CadetArgs {
    /// Resolve the flags against the configured default.
    pub fn resolve(&self, default: bool) -> bool {
        if self.cadets {
            true
        } else if self.no_cadets {
            false
        } else {
            default
        }
    }
}

/// Arguments for the scope command.
#[derive(Debug, Parser)]
pub struct ScopeArgs {
    /// House identifier
    pub house: String,

    #[command(flatten)]
    pub cadets: CadetArgs,
}

/// Arguments for commands that run over the whole dataset or one house.
#[derive(Debug, Parser)]
pub struct FilterArgs {
    /// Restrict to the scope of this house
    #[arg(long)]
    pub house: Option<String>,

    #[command(flatten)]
    pub cadets: CadetArgs,
}

/// Arguments for the root command.
#[derive(Debug, Parser)]
pub struct RootArgs {
    /// Restrict to the scope of this house
    #[arg(long)]
    pub house: Option<String>,

    #[command(flatten)]
    pub cadets: CadetArgs,

    /// Preferred root; used only when visible
    #[arg(long)]
    pub center: Option<String>,
}

/// Arguments for the view command.
#[derive(Debug, Parser)]
pub struct ViewArgs {
    /// House identifier
    pub house: String,

    #[command(flatten)]
    pub cadets: CadetArgs,

    /// Preferred root; used only when visible
    #[arg(long)]
    pub center: Option<String>,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_command() {
        let cli = Cli::parse_from(["kinship", "--dataset", "w.json", "scope", "stark", "--cadets"]);
        assert_eq!(cli.dataset, Some(PathBuf::from("w.json")));
        match cli.command {
            Command::Scope(args) => {
                assert_eq!(args.house, "stark");
                assert!(args.cadets.resolve(false));
            }
            _ => panic!("Expected Scope command"),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["kinship", "check", "-vv", "--format", "json", "--no-color"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        assert!(matches!(cli.command, Command::Check));
    }

    #[test]
    fn test_view_with_center() {
        let cli = Cli::parse_from(["kinship", "view", "stark", "--center", "eddard"]);
        match cli.command {
            Command::View(args) => {
                assert_eq!(args.center.as_deref(), Some("eddard"));
                assert!(!args.cadets.resolve(false));
            }
            _ => panic!("Expected View command"),
        }
    }

    #[test]
    fn test_conflicting_cadet_flags() {
        let result = Cli::try_parse_from(["kinship", "scope", "stark", "--cadets", "--no-cadets"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cadet_resolution() {
        let neither = CadetArgs::default();
        assert!(neither.resolve(true));
        assert!(!neither.resolve(false));

        let off = CadetArgs {
            cadets: false,
            no_cadets: true,
        };
        assert!(!off.resolve(true));
    }

    #[test]
    fn test_format_conversion() {
        let format: crate::config::OutputFormat = CliFormat::Quiet.into();
        assert_eq!(format, crate::config::OutputFormat::Quiet);
    }
}
