//! # keylife-cli
//!
//! Command-line interface for DNSSEC key-lifecycle analysis.
//!
//! ## Features
//!
//! - **Transition classification**: label rollovers as multi-signature,
//!   co-present, cutover or unknown
//! - **Key lifetimes**: merge DNSKEY sightings into per-session intervals
//! - **Educational mode**: `--explain` describes what each command computes
//! - **Multiple formats**: JSON, CSV and YAML in; pretty tables, JSON, CSV
//!   and YAML out

pub mod cli;
pub mod config;
pub mod education;
pub mod input;
pub mod output;

pub use cli::run;
