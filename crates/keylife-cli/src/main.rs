//! keylife - DNSSEC key-lifecycle analysis
//!
//! Classifies key transitions and reconstructs key lifetimes from
//! observation logs.

use anyhow::Result;

fn main() -> Result<()> {
    keylife_cli::run()
}
