//! CLI argument definitions for the jump database builder.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "jumpdb",
    version,
    about = "Build normalized JSON databases from folders of spreadsheet exports",
    long_about = "Build normalized JSON databases from folders of spreadsheet exports.\n\n\
                  Every subfolder of the input root becomes one JSON document of\n\
                  records; configured chapters are split into documents of their own.\n\
                  Without a subcommand, `build` runs with its defaults."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for warnings only).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

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

impl Cli {
    /// The requested subcommand, or `build` with default arguments.
    pub fn command_or_default(&mut self) -> Command {
        self.command
            .take()
            .unwrap_or_else(|| Command::Build(BuildArgs::default()))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse every dataset folder and write the JSON documents.
    Build(BuildArgs),

    /// Show the effective header mapping table.
    Headers(HeadersArgs),
}

#[derive(Debug, PartialEq, Eq, Parser)]
pub struct BuildArgs {
    /// Root folder holding one subfolder per dataset.
    #[arg(value_name = "INPUT_ROOT", default_value = "input")]
    pub input_root: PathBuf,

    /// Output directory for generated documents.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "output")]
    pub output_dir: PathBuf,

    /// TOML file extending the built-in mapping tables.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Parse and report without writing documents.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            input_root: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
            config: None,
            dry_run: false,
        }
    }
}

#[derive(Debug, Parser)]
pub struct HeadersArgs {
    /// TOML file extending the built-in mapping tables.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
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
