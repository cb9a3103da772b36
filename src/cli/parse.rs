//! CLI parse: clap types for hb. No behavior; definitions only.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// hb - rename a file or directory to embed a fingerprint of its content
#[derive(Parser, Debug)]
#[command(name = "hb")]
#[command(about = "Rename a file or directory to embed a short hash of its content")]
#[command(disable_help_flag = true)]
pub struct Cli {
    /// File or directory to fingerprint
    pub path: PathBuf,

    /// Print the fingerprint instead of renaming (files only)
    #[arg(short = 'h', long = "hash")]
    pub hash: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    /// Configuration file path (logging settings only)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Result rendering on stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
