//! Create command - Provision a table bucket, namespace and table
//!
//! Provides the `s3t create` CLI command which:
//! 1. Validates the three names locally
//! 2. Creates each level that does not exist yet, parent first
//! 3. Prints what was created and what already existed

use anyhow::{anyhow, Context, Result};
use clap::Args;
use s3t_core::domain::validate_all;
use s3t_core::usecases::ProvisionTablesUseCase;
use tracing::info;

use crate::context::AppContext;
use crate::output::{get_formatter, provision_summary_lines};

#[derive(Debug, Args)]
pub struct CreateCommand {
    /// Table bucket name (3-63 chars: lowercase letters, numbers, hyphens)
    pub table_bucket: String,
    /// Namespace name (1-255 chars: lowercase letters, numbers, underscores)
    pub namespace: String,
    /// Table name (1-255 chars: lowercase letters, numbers, underscores)
    pub table: String,
}

impl CreateCommand {
    pub async fn execute(&self, ctx: &AppContext) -> Result<()> {
        validate_all(&self.table_bucket, &self.namespace, &self.table)
            .map_err(|err| anyhow!("validation error: {err}"))?;

        let service = ctx.tables_service().await?;
        let provisioner = ProvisionTablesUseCase::new(service);

        info!(
            table_bucket = %self.table_bucket,
            namespace = %self.namespace,
            table = %self.table,
            "Provisioning S3 Tables resources"
        );
        let result = provisioner
            .execute(&self.table_bucket, &self.namespace, &self.table)
            .await?;

        let formatter = get_formatter(ctx.format);
        if ctx.format.is_json() {
            let json = serde_json::to_value(&result)
                .context("Failed to serialize provisioning result")?;
            formatter.print_json(&json);
            return Ok(());
        }

        let mut lines = provision_summary_lines(&result).into_iter();
        if let Some(title) = lines.next() {
            formatter.success(&title);
        }
        for line in lines {
            formatter.info(&line);
        }
        Ok(())
    }
}
