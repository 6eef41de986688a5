//! CLI argument definitions for the colic encoder.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Args, ColorChoice, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use tracing::level_filters::LevelFilter;

use crate::help::INPUT_HELP;
use crate::logging::{LogConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "colic",
    version,
    about = "Equine colic outcome feature encoder",
    long_about = "Encode horse colic clinical records into the fixed-width feature vector\n\
                  of the outcome model, decode lesion codes, and run predictions with a\n\
                  linear model file."
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

    /// Allow raw clinical values in trace logs (redacted otherwise).
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Describe the accepted fields and their values.
    Features(FeaturesArgs),

    /// Decode lesion codes into site, type, subtype and specific code.
    Decode(DecodeArgs),

    /// Encode records into feature vectors.
    Encode(EncodeArgs),

    /// Predict the outcome of records with a linear model.
    Predict(PredictArgs),
}

#[derive(Parser)]
pub struct FeaturesArgs {
    /// List the possible lesion labels instead.
    #[arg(long = "lesion")]
    pub lesion: bool,
}

#[derive(Parser)]
pub struct DecodeArgs {
    /// Lesion codes such as 2209 or 11300.
    #[arg(value_name = "CODE", required = true)]
    pub codes: Vec<String>,
}

/// Where records come from and how absent fields are filled.
#[derive(Args)]
pub struct InputArgs {
    /// Read one `key: value, ...` record from a file (default: stdin).
    #[arg(long = "input", value_name = "FILE", conflicts_with = "json")]
    pub input: Option<PathBuf>,

    /// Read a JSON record or array of records from a file.
    #[arg(long = "json", value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Encode absent fields as zeros instead of clinical baselines.
    #[arg(long = "zero-missing")]
    pub zero_missing: bool,
}

#[derive(Parser)]
#[command(after_help = INPUT_HELP)]
pub struct EncodeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
#[command(after_help = INPUT_HELP)]
pub struct PredictArgs {
    /// Linear model file (`{"intercepts": [...], "coefficients": [[...]]}`).
    #[arg(long = "model", value_name = "FILE")]
    pub model: PathBuf,

    #[command(flatten)]
    pub input: InputArgs,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
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

impl From<LogFormatArg> for LogFormat {
    fn from(format: LogFormatArg) -> Self {
        match format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        }
    }
}

impl Cli {
    /// Logging configuration from the global flags.
    ///
    /// `--log-level` wins over `-v/-q`; `RUST_LOG` is honoured only when
    /// neither is given.
    pub fn log_config(&self) -> LogConfig {
        let explicit = self.verbosity.is_present() || self.log_level.is_some();
        let level = self
            .log_level
            .map_or_else(|| self.verbosity.tracing_level_filter(), LevelFilter::from);
        let with_ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        LogConfig::default()
            .with_level(level)
            .with_env_filter(!explicit)
            .with_format(self.log_format.into())
            .with_log_file(self.log_file.clone())
            .with_ansi(with_ansi)
            .with_log_data(self.log_data)
    }
}
