//! Loading record files in JSON, CSV or YAML.

use anyhow::{Context as _, Result};
use clap::ValueEnum;
use serde::de::DeserializeOwned;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Supported input file formats.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON array of record objects
    Json,
    /// CSV with a header row naming the fields
    Csv,
    /// YAML sequence of record mappings
    Yaml,
}

impl InputFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Resolve the format for `source`, falling back to JSON.
    pub fn resolve(explicit: Option<Self>, source: &str) -> Self {
        explicit
            .or_else(|| (source != "-").then(|| Self::from_path(Path::new(source))).flatten())
            .unwrap_or(Self::Json)
    }
}

/// Read every record from `source` (a path, or `-` for stdin).
pub fn read_records<T: DeserializeOwned>(source: &str, format: Option<InputFormat>) -> Result<Vec<T>> {
    let format = InputFormat::resolve(format, source);

    let content = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read stdin")?;
        buf
    } else {
        std::fs::read_to_string(source).with_context(|| format!("failed to read {source}"))?
    };

    let records = parse_records(&content, format).with_context(|| format!("failed to parse {source}"))?;
    debug!(source, ?format, records = records.len(), "loaded input records");
    Ok(records)
}

/// Parse records from in-memory text.
///
/// Blank input is an empty sequence in every format.
pub fn parse_records<T: DeserializeOwned>(content: &str, format: InputFormat) -> Result<Vec<T>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let records = match format {
        InputFormat::Json => serde_json::from_str(content)?,
        InputFormat::Yaml => serde_yaml::from_str(content)?,
        InputFormat::Csv => csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(content.as_bytes())
            .deserialize()
            .collect::<Result<Vec<T>, _>>()?,
    };

    Ok(records)
}
