//! Listing use case
//!
//! Thin wrapper over [`ITablesService`] that returns complete listings
//! (every page drained) for each level of the hierarchy.

use std::sync::Arc;

use tracing::debug;

use crate::{
    domain::{Namespace, RemoteResult, ResourceArn, Table, TableBucket},
    ports::ITablesService,
    usecases::pagination::collect_all_pages,
};

/// Complete listings of table buckets, namespaces and tables
#[derive(Clone)]
pub struct TablesLister {
    service: Arc<dyn ITablesService>,
}

impl TablesLister {
    /// Creates a new TablesLister over the given service
    pub fn new(service: Arc<dyn ITablesService>) -> Self {
        Self { service }
    }

    /// Lists every table bucket, optionally restricted to a name prefix
    pub async fn list_table_buckets_all(&self, prefix: Option<&str>) -> RemoteResult<Vec<TableBucket>> {
        let service = self.service.as_ref();
        let buckets = collect_all_pages("ListTableBuckets", |token| async move {
            service.list_table_buckets(prefix, token.as_deref()).await
        })
        .await?;

        debug!(count = buckets.len(), prefix = ?prefix, "Listed table buckets");
        Ok(buckets)
    }

    /// Lists every namespace in a table bucket
    pub async fn list_namespaces_all(
        &self,
        bucket_arn: &ResourceArn,
        prefix: Option<&str>,
    ) -> RemoteResult<Vec<Namespace>> {
        let service = self.service.as_ref();
        let namespaces = collect_all_pages("ListNamespaces", |token| async move {
            service
                .list_namespaces(bucket_arn, prefix, token.as_deref())
                .await
        })
        .await?;

        debug!(count = namespaces.len(), bucket_arn = %bucket_arn, "Listed namespaces");
        Ok(namespaces)
    }

    /// Lists every table in a namespace
    pub async fn list_tables_all(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        prefix: Option<&str>,
    ) -> RemoteResult<Vec<Table>> {
        let service = self.service.as_ref();
        let tables = collect_all_pages("ListTables", |token| async move {
            service
                .list_tables(bucket_arn, namespace, prefix, token.as_deref())
                .await
        })
        .await?;

        debug!(count = tables.len(), namespace, "Listed tables");
        Ok(tables)
    }

    /// Fetches the full record of a single table
    pub async fn get_table_details(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        name: &str,
    ) -> RemoteResult<Table> {
        self.service
            .get_table_details(bucket_arn, namespace, name)
            .await
    }
}
