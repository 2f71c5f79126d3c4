//! Existence checks
//!
//! Answers "does this resource already exist, and what is its ARN" for each
//! level. Two strategies are used because the service offers two shapes:
//!
//! - **Table buckets** have no name-based getter, so the check lists buckets
//!   with the name as prefix and scans for an exact match.
//! - **Namespaces and tables** have a direct getter; a `NotFound` answer is
//!   translated to "absent" instead of being returned as an error.

use std::sync::Arc;

use tracing::debug;

use crate::{
    domain::{RemoteError, RemoteResult, ResourceArn},
    ports::ITablesService,
    usecases::lister::TablesLister,
};

/// Per-level existence checks against the tables service
#[derive(Clone)]
pub struct ExistenceChecker {
    service: Arc<dyn ITablesService>,
    lister: TablesLister,
}

impl ExistenceChecker {
    pub fn new(service: Arc<dyn ITablesService>) -> Self {
        let lister = TablesLister::new(Arc::clone(&service));
        Self { service, lister }
    }

    /// Returns the ARN of the table bucket named exactly `name`, if any
    ///
    /// Buckets whose names merely start with `name` do not count.
    pub async fn table_bucket_arn(&self, name: &str) -> RemoteResult<Option<ResourceArn>> {
        let candidates = self.lister.list_table_buckets_all(Some(name)).await?;
        let arn = candidates
            .into_iter()
            .find(|bucket| bucket.name == name)
            .map(|bucket| bucket.arn);

        debug!(table_bucket = name, exists = arn.is_some(), "Checked table bucket");
        Ok(arn)
    }

    /// Like [`table_bucket_arn`](Self::table_bucket_arn) but absence is an error
    ///
    /// # Errors
    ///
    /// A `NotFound` [`RemoteError`] naming the bucket when it does not exist.
    pub async fn require_table_bucket(&self, name: &str) -> RemoteResult<ResourceArn> {
        self.table_bucket_arn(name).await?.ok_or_else(|| {
            RemoteError::not_found(
                "ResolveTableBucket",
                format!("table bucket '{name}' not found"),
            )
            .with_suggestion("verify the table bucket name and try again")
        })
    }

    /// Whether `namespace` exists inside the bucket
    pub async fn namespace_exists(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
    ) -> RemoteResult<bool> {
        let exists = match self.service.get_namespace(bucket_arn, namespace).await {
            Ok(()) => true,
            Err(err) if err.is_not_found() => false,
            Err(err) => return Err(err),
        };

        debug!(namespace, exists, "Checked namespace");
        Ok(exists)
    }

    /// Returns the ARN of the table if it exists in the namespace
    pub async fn table_arn(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        table: &str,
    ) -> RemoteResult<Option<ResourceArn>> {
        let arn = match self.service.get_table(bucket_arn, namespace, table).await {
            Ok(arn) => Some(arn),
            Err(err) if err.is_not_found() => None,
            Err(err) => return Err(err),
        };

        debug!(namespace, table, exists = arn.is_some(), "Checked table");
        Ok(arn)
    }
}
