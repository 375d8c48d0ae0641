//! Command-line argument definitions using clap.

use clap::{Args, Parser, Subcommand};

use crate::input::InputFormat;
use crate::output::OutputFormat;

/// DNSSEC key-lifecycle analysis
///
/// Classify key transitions by overlap pattern and rebuild continuous
/// key lifetimes from timestamped DNSKEY observations.
/// Use --explain on any command to learn what it computes.
#[derive(Parser, Debug)]
#[command(name = "keylife")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, global = true, value_enum)]
    pub output: Option<OutputFormat>,

    /// Explain what this command does (educational mode)
    #[arg(long, global = true)]
    pub explain: bool,

    /// Increase verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify key-transition records by overlap pattern
    Classify(ClassifyArgs),

    /// Build continuous key lifetimes from DNSKEY observations
    Lifetimes(LifetimesArgs),

    /// Manage CLI configuration
    Config(ConfigArgs),
}

// ============================================================================
// Classify command
// ============================================================================

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Transition records file (`-` for stdin)
    ///
    /// Records carry `key`, `overlap_count` and optional `cutover`.
    pub input: String,

    /// Input format (default: from file extension, JSON for stdin)
    #[arg(short = 'f', long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Append per-classification counts
    #[arg(long)]
    pub summary: bool,
}

// ============================================================================
// Lifetimes command
// ============================================================================

#[derive(Args, Debug)]
pub struct LifetimesArgs {
    /// Observations file (`-` for stdin)
    ///
    /// Records carry `key` and `timestamp` (RFC 3339 or YYYY-MM-DD).
    pub input: String,

    /// Input format (default: from file extension, JSON for stdin)
    #[arg(short = 'f', long, value_enum)]
    pub input_format: Option<InputFormat>,

    /// Append interval and key statistics
    #[arg(long)]
    pub summary: bool,
}

// ============================================================================
// Config command
// ============================================================================

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Key to set (e.g., output_format, timestamp_format)
        key: String,

        /// Value to set
        value: String,
    },

    /// Show config file path
    Path,
}
