//! CLI argument definitions for the column config inspector.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use regime_cli::commands::ShowFormat;
use regime_cli::logging::{LogConfig, LogFormat};
use tracing::level_filters::LevelFilter;

#[derive(Parser)]
#[command(
    name = "regime-columns",
    version,
    about = "Inspect the column roles of the regime survival dataset",
    long_about = "Inspect the column roles of the regime survival dataset.\n\n\
                  Lists identifier, drop, categorical, numeric and target columns,\n\
                  checks a config for role conflicts, and looks up column roles."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// JSON column config to use instead of the built-in regime columns.
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

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
}

impl Cli {
    /// Logging settings from the global flags.
    ///
    /// An explicit `--log-level` or `-v`/`-q` pins the level; otherwise
    /// `RUST_LOG` may override the default.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        LogConfig {
            level_filter,
            use_env_filter: self.log_level.is_none() && !self.verbosity.is_present(),
            with_ansi: match self.color.color {
                ColorChoice::Always => true,
                ColorChoice::Never => false,
                ColorChoice::Auto => io::stderr().is_terminal(),
            },
            format: self.log_format.into(),
            ..LogConfig::default()
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Print every configured column and its role.
    Show(ShowArgs),

    /// Check the config for empty names, duplicates and role conflicts.
    Check,

    /// Print the role of one or more columns.
    Role(RoleArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: ShowFormat,
}

#[derive(Parser)]
pub struct RoleArgs {
    /// Column names to look up (exact, case-sensitive).
    #[arg(value_name = "COLUMN", required = true)]
    pub columns: Vec<String>,
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

impl From<LogLevelArg> for LevelFilter {
    fn from(level: LogLevelArg) -> Self {
        match level {
            LogLevelArg::Error => LevelFilter::ERROR,
            LogLevelArg::Warn => LevelFilter::WARN,
            LogLevelArg::Info => LevelFilter::INFO,
            LogLevelArg::Debug => LevelFilter::DEBUG,
            LogLevelArg::Trace => LevelFilter::TRACE,
        }
    }
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}
