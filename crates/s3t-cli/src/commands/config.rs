//! Config command - Inspect s3t configuration
//!
//! Provides the `s3t config` CLI command which:
//! 1. Shows the effective configuration (YAML or JSON)
//! 2. Prints the configuration file path
//! 3. Validates the configuration and reports every problem

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use tracing::info;

use crate::context::AppContext;
use crate::output::get_formatter;

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Display the effective configuration (file values plus flag overrides)
    Show,
    /// Print the configuration file path
    Path,
    /// Validate the configuration
    Validate,
}

impl ConfigCommand {
    pub async fn execute(&self, ctx: &AppContext) -> Result<()> {
        match self {
            ConfigCommand::Show => execute_show(ctx),
            ConfigCommand::Path => execute_path(ctx),
            ConfigCommand::Validate => execute_validate(ctx),
        }
    }
}

fn execute_show(ctx: &AppContext) -> Result<()> {
    let formatter = get_formatter(ctx.format);
    info!(config_path = %ctx.config_path.display(), "Showing configuration");

    if ctx.format.is_json() {
        let json = serde_json::to_value(&ctx.config)
            .context("Failed to serialize configuration to JSON")?;
        formatter.print_json(&json);
        return Ok(());
    }

    formatter.success(&format!("Configuration ({})", ctx.config_path.display()));
    formatter.info("");
    let yaml =
        serde_yaml::to_string(&ctx.config).context("Failed to serialize configuration to YAML")?;
    for line in yaml.lines() {
        formatter.info(line);
    }
    Ok(())
}

fn execute_path(ctx: &AppContext) -> Result<()> {
    if ctx.format.is_json() {
        let formatter = get_formatter(ctx.format);
        formatter.print_json(&serde_json::json!({
            "config_path": ctx.config_path.display().to_string(),
            "exists": ctx.config_path.exists(),
        }));
    } else {
        println!("{}", ctx.config_path.display());
    }
    Ok(())
}

fn execute_validate(ctx: &AppContext) -> Result<()> {
    let formatter = get_formatter(ctx.format);
    let errors = ctx.config.validate();

    if ctx.format.is_json() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        formatter.print_json(&serde_json::json!({
            "valid": errors.is_empty(),
            "config_path": ctx.config_path.display().to_string(),
            "errors": messages,
        }));
    } else if errors.is_empty() {
        formatter.success(&format!(
            "Configuration is valid ({})",
            ctx.config_path.display()
        ));
    } else {
        for error in &errors {
            formatter.error(&error.to_string());
        }
    }

    if !errors.is_empty() {
        bail!("configuration has {} error(s)", errors.len());
    }
    Ok(())
}
