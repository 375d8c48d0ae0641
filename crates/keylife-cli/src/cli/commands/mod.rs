//! Command implementations.

pub mod classify;
pub mod config;
pub mod lifetimes;

use crate::output::OutputFormat;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Output format
    pub output_format: OutputFormat,

    /// Whether to show educational explanations
    pub explain: bool,

    /// Verbose output
    pub verbose: bool,

    /// Whether to print tips after pretty output
    pub show_tips: bool,

    /// strftime pattern for timestamps in pretty output
    pub timestamp_format: String,
}
