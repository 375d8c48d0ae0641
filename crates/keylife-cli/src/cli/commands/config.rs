//! `keylife config` - CLI configuration management.

use anyhow::Result;
use colored::Colorize;

use super::Context;
use crate::cli::args::{ConfigArgs, ConfigCommands};
use crate::config::{self, Config};
use crate::output::{self, OutputFormat};

pub fn execute(ctx: Context, args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(&ctx),
        ConfigCommands::Set { key, value } => set_config(&key, &value),
        ConfigCommands::Path => show_path(),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    let config = Config::load()?;

    match ctx.output_format {
        OutputFormat::Json | OutputFormat::Yaml => {
            output::print_structured(ctx.output_format, &config)?;
        }
        _ => {
            println!("{}", "Current Configuration:".bold());
            println!();

            println!(
                "  {} {}",
                "output_format:".bold(),
                config.output_format.unwrap_or_default()
            );
            println!("  {} {}", "show_tips:".bold(), config.show_tips);
            println!(
                "  {} {}",
                "explain_by_default:".bold(),
                config.explain_by_default
            );

            let ts_display = config
                .timestamp_format
                .clone()
                .unwrap_or_else(|| format!("{} (default)", config::DEFAULT_TIMESTAMP_FORMAT).dimmed().to_string());
            println!("  {} {}", "timestamp_format:".bold(), ts_display);
        }
    }

    Ok(())
}

fn set_config(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load()?;
    apply_setting(&mut config, key, value)?;
    config.save()?;

    println!("{} {} set to {}.", "Success:".green().bold(), key, value.cyan());
    Ok(())
}

/// Update one key in `config`, validating the value.
fn apply_setting(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "output_format" | "output" => {
            config.output_format = Some(value.parse()?);
        }
        "show_tips" => {
            config.show_tips = value.parse()?;
        }
        "explain_by_default" | "explain" => {
            config.explain_by_default = value.parse()?;
        }
        "timestamp_format" => {
            if !config::is_valid_timestamp_format(value) {
                anyhow::bail!("Invalid strftime pattern: {}", value);
            }
            config.timestamp_format = Some(value.to_string());
        }
        _ => {
            anyhow::bail!(
                "Unknown config key: {}\n\n\
                 Available keys:\n  \
                 output_format      - Default output format (pretty/json/csv/yaml)\n  \
                 show_tips          - Show helpful tips (true/false)\n  \
                 explain_by_default - Always explain commands (true/false)\n  \
                 timestamp_format   - strftime pattern for pretty output",
                key
            );
        }
    }

    Ok(())
}

fn show_path() -> Result<()> {
    let path = Config::path()?;
    println!("{}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_setting_updates_fields() {
        let mut config = Config::default();
        apply_setting(&mut config, "output", "yml").unwrap();
        apply_setting(&mut config, "show_tips", "false").unwrap();
        apply_setting(&mut config, "timestamp_format", "%Y-%m-%d").unwrap();

        assert_eq!(config.output_format, Some(OutputFormat::Yaml));
        assert!(!config.show_tips);
        assert_eq!(config.timestamp_format(), "%Y-%m-%d");
    }

    #[test]
    fn test_apply_setting_rejects_bad_values() {
        let mut config = Config::default();
        assert!(apply_setting(&mut config, "show_tips", "sometimes").is_err());
        assert!(apply_setting(&mut config, "timestamp_format", "%Q%!").is_err());
        assert!(apply_setting(&mut config, "api_key", "x").is_err());
        assert_eq!(config, Config::default());
    }
}
