//! Provisioning use case
//!
//! Ensures a Table Bucket → Namespace → Table chain exists, creating only the
//! levels that are missing. Levels are handled strictly in parent-before-child
//! order and the first failure aborts the run.
//!
//! There is no rollback: if the namespace step fails after the bucket was
//! created, the bucket stays. Running the same request again is safe because
//! every level is checked before it is created.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    domain::{RemoteResult, ResourceArn, TableFormat},
    ports::ITablesService,
    usecases::existence::ExistenceChecker,
};

/// Outcome of a successful provisioning run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionResult {
    pub table_bucket_arn: ResourceArn,
    pub table_arn: ResourceArn,
    /// True iff the bucket was absent and this run created it
    pub table_bucket_created: bool,
    /// True iff the namespace was absent and this run created it
    pub namespace_created: bool,
    /// True iff the table was absent and this run created it
    pub table_created: bool,
    /// One line per level, in the order the levels were handled
    pub messages: Vec<String>,
}

impl ProvisionResult {
    /// Number of levels this run created
    pub fn created_count(&self) -> usize {
        [
            self.table_bucket_created,
            self.namespace_created,
            self.table_created,
        ]
        .into_iter()
        .filter(|created| *created)
        .count()
    }

    /// Number of levels that were already present
    pub fn existing_count(&self) -> usize {
        3 - self.created_count()
    }
}

/// Use case for idempotent three-level provisioning
pub struct ProvisionTablesUseCase {
    service: Arc<dyn ITablesService>,
    existence: ExistenceChecker,
    format: TableFormat,
}

impl ProvisionTablesUseCase {
    /// Creates a new ProvisionTablesUseCase
    ///
    /// # Arguments
    ///
    /// * `service` - Remote tables service used for checks and creation
    pub fn new(service: Arc<dyn ITablesService>) -> Self {
        let existence = ExistenceChecker::new(Arc::clone(&service));
        Self {
            service,
            existence,
            format: TableFormat::Iceberg,
        }
    }

    /// Ensures `table_bucket` / `namespace` / `table` all exist
    ///
    /// This method:
    /// 1. Checks the table bucket by name, creating it if absent
    /// 2. Checks the namespace under that bucket's ARN, creating it if absent
    /// 3. Checks the table under that bucket and namespace, creating it if absent
    ///
    /// # Errors
    ///
    /// Returns the first [`RemoteError`](crate::domain::RemoteError) encountered.
    /// No later step runs after a failure, and nothing created by earlier
    /// steps is removed.
    pub async fn execute(
        &self,
        table_bucket: &str,
        namespace: &str,
        table: &str,
    ) -> RemoteResult<ProvisionResult> {
        let mut messages = Vec::with_capacity(3);

        let (table_bucket_arn, table_bucket_created) =
            self.ensure_table_bucket(table_bucket, &mut messages).await?;

        let namespace_created = self
            .ensure_namespace(&table_bucket_arn, namespace, &mut messages)
            .await?;

        let (table_arn, table_created) = self
            .ensure_table(&table_bucket_arn, namespace, table, &mut messages)
            .await?;

        Ok(ProvisionResult {
            table_bucket_arn,
            table_arn,
            table_bucket_created,
            namespace_created,
            table_created,
            messages,
        })
    }

    async fn ensure_table_bucket(
        &self,
        name: &str,
        messages: &mut Vec<String>,
    ) -> RemoteResult<(ResourceArn, bool)> {
        if let Some(arn) = self.existence.table_bucket_arn(name).await? {
            debug!(table_bucket = name, arn = %arn, "Table bucket already exists");
            messages.push(format!("Table Bucket '{name}' already exists"));
            return Ok((arn, false));
        }

        let arn = self.service.create_table_bucket(name).await?;
        info!(table_bucket = name, arn = %arn, "Created table bucket");
        messages.push(format!("Table Bucket '{name}' created"));
        Ok((arn, true))
    }

    async fn ensure_namespace(
        &self,
        bucket_arn: &ResourceArn,
        name: &str,
        messages: &mut Vec<String>,
    ) -> RemoteResult<bool> {
        if self.existence.namespace_exists(bucket_arn, name).await? {
            debug!(namespace = name, "Namespace already exists");
            messages.push(format!("Namespace '{name}' already exists"));
            return Ok(false);
        }

        self.service.create_namespace(bucket_arn, name).await?;
        info!(namespace = name, "Created namespace");
        messages.push(format!("Namespace '{name}' created"));
        Ok(true)
    }

    async fn ensure_table(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        name: &str,
        messages: &mut Vec<String>,
    ) -> RemoteResult<(ResourceArn, bool)> {
        if let Some(arn) = self.existence.table_arn(bucket_arn, namespace, name).await? {
            debug!(namespace, table = name, arn = %arn, "Table already exists");
            messages.push(format!("Table '{name}' already exists"));
            return Ok((arn, false));
        }

        let arn = self
            .service
            .create_table(bucket_arn, namespace, name, self.format)
            .await?;
        info!(namespace, table = name, arn = %arn, format = %self.format, "Created table");
        messages.push(format!("Table '{name}' created"));
        Ok((arn, true))
    }
}
