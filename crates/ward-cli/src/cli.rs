//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ward",
    version,
    about = "Clean hospital operations data and build service reports",
    long_about = "Clean hospital operations CSV exports and build service reports.\n\n\
                  Trims service names, fills missing weekly events, removes stays that\n\
                  end before they start, and computes stay durations before reporting."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a data folder and write cleaned tables and reports.
    Clean(CleanArgs),

    /// List the cleaning stages in the order they run.
    Stages,
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Folder containing the CSV exports.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Output directory for generated files (default: <DATA_DIR>/output).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Patient admissions file (default: <DATA_DIR>/patients.csv).
    #[arg(long = "patients", value_name = "FILE")]
    pub patients: Option<PathBuf>,

    /// Weekly service statistics file (default: <DATA_DIR>/services_weekly.csv).
    #[arg(long = "services-weekly", value_name = "FILE")]
    pub services_weekly: Option<PathBuf>,

    /// Staff roster file (default: <DATA_DIR>/staff.csv).
    #[arg(long = "staff", value_name = "FILE")]
    pub staff: Option<PathBuf>,

    /// Staff attendance file (default: <DATA_DIR>/staff_schedule.csv).
    #[arg(long = "staff-schedule", value_name = "FILE")]
    pub staff_schedule: Option<PathBuf>,

    /// Clean and report without writing output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Discard removed patient rows instead of writing removed_patients.csv.
    #[arg(long = "no-audit")]
    pub no_audit: bool,

    /// Number of rows in the recent patients report.
    #[arg(long = "preview-limit", value_name = "N", default_value_t = 10)]
    pub preview_limit: usize,

    /// Minimum age for the geriatric outcomes report.
    #[arg(long = "min-age", value_name = "N", default_value_t = 60)]
    pub min_age: i64,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clean_with_overrides() {
        let cli = Cli::try_parse_from([
            "ward",
            "clean",
            "data",
            "--patients",
            "other/p.csv",
            "--preview-limit",
            "5",
            "--no-audit",
        ])
        .unwrap();
        let Command::Clean(args) = cli.command else {
            panic!("expected clean command");
        };
        assert_eq!(args.data_dir, PathBuf::from("data"));
        assert_eq!(args.patients, Some(PathBuf::from("other/p.csv")));
        assert_eq!(args.preview_limit, 5);
        assert_eq!(args.min_age, 60);
        assert!(args.no_audit);
        assert!(!args.dry_run);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["ward", "stages", "--log-format", "json"]).unwrap();
        assert!(matches!(cli.command, Command::Stages));
        assert!(matches!(cli.log_format, LogFormatArg::Json));
    }

    #[test]
    fn clean_requires_data_dir() {
        assert!(Cli::try_parse_from(["ward", "clean"]).is_err());
    }
}
