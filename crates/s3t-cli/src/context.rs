//! Per-invocation context shared by all commands

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Result};
use s3t_aws::{load_client, S3TablesProvider};
use s3t_core::config::Config;
use s3t_core::ports::ITablesService;

use crate::output::OutputFormat;

/// Output format plus the effective configuration (file values with flag overrides)
#[derive(Debug, Clone)]
pub struct AppContext {
    pub format: OutputFormat,
    pub config: Config,
    pub config_path: PathBuf,
}

impl AppContext {
    /// Refuse to talk to AWS with a configuration that failed validation
    pub fn ensure_valid(&self) -> Result<()> {
        let errors = self.config.validate();
        if errors.is_empty() {
            return Ok(());
        }

        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        bail!(
            "invalid configuration ({}): {}",
            self.config_path.display(),
            details.join("; ")
        )
    }

    /// Build the S3 Tables service from the effective AWS settings
    pub async fn tables_service(&self) -> Result<Arc<dyn ITablesService>> {
        self.ensure_valid()?;
        let client = load_client(&self.config.aws).await;
        Ok(Arc::new(S3TablesProvider::new(client)))
    }
}
