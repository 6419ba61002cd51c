//! Command-line argument definitions for the holiday importer
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::models::Scope;
use crate::config::{ImportConfig, RowPolicy};
use crate::constants::DEFAULT_COUNTRY_CODE;
use crate::{Error, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the Brazilian holiday importer
///
/// Lists the holidays of the bundled national, state and municipal datasets
/// for a given year.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "brazilian-holidays",
    version,
    about = "List Brazilian national, state and municipal holidays from the bundled datasets"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// List the holidays of one or all scopes for a year
    List(ListArgs),
    /// Show the available datasets and their row counts
    Datasets(DatasetsArgs),
}

/// Arguments for the list command
#[derive(Debug, Clone, Parser)]
pub struct ListArgs {
    /// Year of the holidays; values below 1900 mean the current year
    #[arg(short = 'y', long = "year", default_value_t = 0)]
    pub year: i32,

    /// Scope of the holidays to list: national, state, municipal or all
    #[arg(
        short = 's',
        long = "scope",
        value_parser = parse_scope_selection,
        default_value = "all"
    )]
    pub scope: ScopeSelection,

    /// Only display holidays of this state (UF), national holidays included.
    /// Applied to the output after every selected dataset is imported.
    #[arg(long = "state", value_name = "UF")]
    pub state: Option<String>,

    /// Country code written into the records
    #[arg(long = "country", default_value = DEFAULT_COUNTRY_CODE)]
    pub country_code: String,

    /// Coverage label override for every record
    #[arg(long = "label", value_name = "TEXT")]
    pub coverage_label: Option<String>,

    /// Read datasets from this directory instead of the bundled ones
    #[arg(long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Fail on the first malformed row or invalid date
    #[arg(long = "strict")]
    pub strict: bool,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short = 'q', long = "quiet", conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Arguments for the datasets command
#[derive(Debug, Clone, Parser)]
pub struct DatasetsArgs {
    /// Read datasets from this directory instead of the bundled ones
    #[arg(long = "data-dir", value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Scope selection for the list command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeSelection {
    One(Scope),
    All,
}

impl ScopeSelection {
    /// Scopes covered by this selection, in import order
    pub fn scopes(self) -> Vec<Scope> {
        match self {
            ScopeSelection::One(scope) => vec![scope],
            ScopeSelection::All => Scope::ALL.to_vec(),
        }
    }
}

/// Parse `all` or any scope name accepted by [`Scope`]'s `FromStr`
fn parse_scope_selection(value: &str) -> Result<ScopeSelection> {
    if value.trim().eq_ignore_ascii_case("all") {
        Ok(ScopeSelection::All)
    } else {
        value.parse::<Scope>().map(ScopeSelection::One)
    }
}

/// Output formats for holiday listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for data analysis
    Csv,
}

impl ListArgs {
    /// Validate argument combinations
    pub fn validate(&self) -> Result<()> {
        if let Some(state) = &self.state {
            let state = state.trim();
            if state.len() != 2 || !state.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(Error::configuration(format!(
                    "Invalid state '{}': expected a two-letter UF code",
                    state
                )));
            }
        }

        if let Some(dir) = &self.data_dir {
            if !dir.is_dir() {
                return Err(Error::configuration(format!(
                    "Data directory does not exist: {}",
                    dir.display()
                )));
            }
        }

        self.import_config().validate()
    }

    /// Import configuration derived from the arguments
    pub fn import_config(&self) -> ImportConfig {
        let mut config = ImportConfig::default()
            .with_country_code(self.country_code.clone())
            .with_row_policy(if self.strict {
                RowPolicy::Fail
            } else {
                RowPolicy::Skip
            });
        if let Some(label) = &self.coverage_label {
            config = config.with_coverage_label(label.clone());
        }
        config
    }

    /// State filter, upper-cased
    pub fn state_filter(&self) -> Option<String> {
        self.state.as_ref().map(|s| s.trim().to_uppercase())
    }

    /// Get log level based on verbosity
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

impl DatasetsArgs {
    /// Get log level based on verbosity
    pub fn get_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(args).unwrap()
    }

    fn list_args(args: &[&str]) -> ListArgs {
        match parse(args).command {
            Some(Commands::List(list)) => list,
            other => panic!("expected list command, got {:?}", other),
        }
    }

    #[test]
    fn test_list_defaults() {
        let args = list_args(&["brazilian-holidays", "list"]);
        assert_eq!(args.year, 0);
        assert_eq!(args.scope, ScopeSelection::All);
        assert_eq!(args.country_code, "BR");
        assert_eq!(args.format, OutputFormat::Human);
        assert!(!args.strict);
        assert_eq!(args.get_log_level(), "warn");
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_list_options() {
        let args = list_args(&[
            "brazilian-holidays",
            "list",
            "--year",
            "2024",
            "--scope",
            "municipal",
            "--state",
            "sp",
            "--strict",
            "--format",
            "json",
            "-vv",
        ]);
        assert_eq!(args.year, 2024);
        assert_eq!(args.scope.scopes(), vec![Scope::Municipal]);
        assert_eq!(args.state_filter().as_deref(), Some("SP"));
        assert_eq!(args.import_config().row_policy, RowPolicy::Fail);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.get_log_level(), "debug");
    }

    #[test]
    fn test_invalid_state_rejected() {
        let args = list_args(&["brazilian-holidays", "list", "--state", "SAO"]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_missing_data_dir_rejected() {
        let args = list_args(&["brazilian-holidays", "list", "--data-dir", "/nonexistent/dir"]);
        assert!(matches!(args.validate(), Err(Error::Configuration { .. })));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["brazilian-holidays", "list", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_scope_names_parsed_as_scopes() {
        let args = list_args(&["brazilian-holidays", "list", "--scope", "Estadual"]);
        assert_eq!(args.scope, ScopeSelection::One(Scope::State));

        let args = list_args(&["brazilian-holidays", "list", "-s", "nacional"]);
        assert_eq!(args.scope.scopes(), vec![Scope::National]);

        let args = list_args(&["brazilian-holidays", "list", "--scope", "ALL"]);
        assert_eq!(args.scope, ScopeSelection::All);
    }

    #[test]
    fn test_unknown_scope_rejected() {
        assert!(Args::try_parse_from(["brazilian-holidays", "list", "--scope", "federal"]).is_err());
        assert!(matches!(
            parse_scope_selection("federal"),
            Err(Error::UnknownScope { .. })
        ));
    }

    #[test]
    fn test_all_scopes_in_order() {
        assert_eq!(
            ScopeSelection::All.scopes(),
            vec![Scope::National, Scope::State, Scope::Municipal]
        );
    }
}
