//! s3t CLI - Command-line interface for Amazon S3 Tables
//!
//! Provides commands for:
//! - Creating a table bucket, namespace and table in one idempotent step
//! - Interactively browsing buckets, namespaces and tables
//! - Inspecting configuration
//! - Generating shell completions

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use s3t_core::config::{AwsConfig, Config};
use tracing::warn;
use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod output;
mod selector;

use commands::{
    completions::CompletionsCommand, config::ConfigCommand, create::CreateCommand,
    list::ListCommand,
};
use context::AppContext;
use output::OutputFormat;

#[derive(Debug, Parser)]
#[command(
    name = "s3t",
    version,
    about = "Create and browse Amazon S3 Tables resources",
    long_about = "Create and browse Amazon S3 Tables resources (table bucket, namespace, table).\n\n\
                  Credentials come from the default AWS chain: environment variables, \
                  shared config files (aws configure) or instance roles."
)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Use alternate config file
    #[arg(long, global = true)]
    config: Option<String>,

    /// AWS profile from the shared config files
    #[arg(long, global = true, env = "AWS_PROFILE")]
    profile: Option<String>,

    /// AWS region override
    #[arg(long, global = true)]
    region: Option<String>,

    /// Custom S3 Tables endpoint
    #[arg(long, global = true)]
    endpoint_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a table bucket, namespace and table (existing ones are kept)
    Create(CreateCommand),
    /// Browse table buckets, namespaces and tables
    List(ListCommand),
    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
    /// Generate shell completions
    Completions(CompletionsCommand),
}

impl Cli {
    fn overrides(&self) -> AwsConfig {
        AwsConfig {
            profile: self.profile.clone(),
            region: self.region.clone(),
            endpoint_url: self.endpoint_url.clone(),
        }
    }

    /// Loads the config file; only an explicit `--config` path must exist
    fn load_config(&self) -> Result<LoadedConfig> {
        let mut loaded = match &self.config {
            Some(path) => {
                let path = PathBuf::from(path);
                let config = Config::load(&path).with_context(|| {
                    format!("Failed to load configuration from {}", path.display())
                })?;
                LoadedConfig {
                    config,
                    path,
                    ignored: None,
                }
            }
            None => load_default(Config::default_path()),
        };
        loaded.config = loaded.config.with_overrides(self.overrides());
        Ok(loaded)
    }
}

/// Effective config plus the file-level problem that was skipped, if any
struct LoadedConfig {
    config: Config,
    path: PathBuf,
    ignored: Option<anyhow::Error>,
}

/// A broken file at the default path falls back to defaults; the error is kept for logging
fn load_default(path: PathBuf) -> LoadedConfig {
    let (config, ignored) = match Config::load_if_present(&path) {
        Ok(found) => (found.unwrap_or_default(), None),
        Err(err) => (Config::default(), Some(err)),
    };
    LoadedConfig {
        config,
        path,
        ignored,
    }
}

/// `-v` count beats the config file; `RUST_LOG` beats both
fn log_directive(verbose: u8, configured: &str) -> String {
    match verbose {
        0 => configured.to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let LoadedConfig {
        config,
        path: config_path,
        ignored,
    } = cli.load_config()?;

    // Setup tracing
    let filter = log_directive(cli.verbose, &config.logging.level);
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Some(err) = ignored {
        warn!(
            path = %config_path.display(),
            "Ignoring unreadable configuration file, using defaults: {err:#}"
        );
    }
    for error in config.validate() {
        warn!(field = %error.field, "Invalid configuration: {}", error.message);
    }

    let ctx = AppContext {
        format: if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        },
        config,
        config_path,
    };

    match cli.command {
        Commands::Create(cmd) => cmd.execute(&ctx).await,
        Commands::List(cmd) => cmd.execute(&ctx).await,
        Commands::Config(cmd) => cmd.execute(&ctx).await,
        Commands::Completions(cmd) => cmd.execute(&ctx).await,
    }
}
