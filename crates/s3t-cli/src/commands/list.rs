//! List command - Browse table buckets, namespaces and tables
//!
//! Provides the `s3t list` CLI command. With no arguments it starts an
//! interactive browser at the table bucket level; a bucket (and namespace)
//! argument starts the browser further down. With all three names it prints
//! the table's details without prompting.

use anyhow::Result;
use clap::Args;
use s3t_core::domain::NavigationLevel;
use s3t_core::usecases::{BrowseTablesUseCase, ExistenceChecker, NavigationOutcome, TablesLister};
use tracing::info;

use crate::context::AppContext;
use crate::output::print_table_details;
use crate::selector::DialoguerSelector;

#[derive(Debug, Args)]
pub struct ListCommand {
    /// Start inside this table bucket
    pub table_bucket: Option<String>,
    /// Start inside this namespace (requires a table bucket)
    pub namespace: Option<String>,
    /// Show this table's details (requires a table bucket and namespace)
    pub table: Option<String>,
}

impl ListCommand {
    /// Level the browser opens at for the given arguments
    fn start_level(&self) -> NavigationLevel {
        match (&self.table_bucket, &self.namespace) {
            (None, _) => NavigationLevel::TableBucket,
            (Some(_), None) => NavigationLevel::Namespace,
            (Some(_), Some(_)) => NavigationLevel::Table,
        }
    }

    pub async fn execute(&self, ctx: &AppContext) -> Result<()> {
        let service = ctx.tables_service().await?;

        let bucket_arn = match &self.table_bucket {
            Some(bucket) => Some(
                ExistenceChecker::new(service.clone())
                    .require_table_bucket(bucket)
                    .await?,
            ),
            None => None,
        };

        if let (Some(bucket_arn), Some(namespace), Some(table)) =
            (&bucket_arn, &self.namespace, &self.table)
        {
            let details = TablesLister::new(service)
                .get_table_details(bucket_arn, namespace, table)
                .await?;
            return print_table_details(ctx.format, &details);
        }

        let mut browser = BrowseTablesUseCase::new(service, DialoguerSelector::new());
        if let (Some(bucket), Some(bucket_arn)) = (&self.table_bucket, bucket_arn) {
            browser.seed(bucket, bucket_arn, self.namespace.as_deref());
        }

        let start = self.start_level();
        info!(level = %start, "Starting interactive browser");
        match browser.run(start).await? {
            NavigationOutcome::TableSelected(table) => print_table_details(ctx.format, &table),
            NavigationOutcome::Exited => Ok(()),
        }
    }
}
