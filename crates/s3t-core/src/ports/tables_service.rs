//! Tables service port (driven/secondary port)
//!
//! This module defines the interface for the remote metadata service that
//! owns table buckets, namespaces and tables. The production implementation
//! targets Amazon S3 Tables through the AWS SDK, but any transport that
//! satisfies the trait is substitutable (tests use an in-memory fake).
//!
//! ## Design Notes
//!
//! - Uses [`RemoteError`](crate::domain::RemoteError) rather than
//!   `anyhow::Error` because callers branch on the error kind: a `NotFound`
//!   from `get_namespace`/`get_table` is an ordinary "absent" answer.
//! - Uses `#[async_trait]` for async trait methods.
//! - There is deliberately no name-based bucket getter: the service only
//!   looks buckets up by ARN, so bucket existence goes through
//!   `list_table_buckets` with a prefix.
//! - Implementations own retries and timeouts; the core never retries.

use crate::domain::{Namespace, RemoteResult, ResourceArn, Table, TableBucket, TableFormat};

/// One page of a cursor-paginated listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    /// Items in service order
    pub items: Vec<T>,
    /// Token for the next page; `None` or empty means this was the last page
    pub continuation_token: Option<String>,
}

impl<T> Page<T> {
    /// A single, final page
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            continuation_token: None,
        }
    }

    /// Whether the service reported more pages after this one
    pub fn has_more(&self) -> bool {
        self.continuation_token
            .as_deref()
            .is_some_and(|token| !token.is_empty())
    }
}

/// Port trait for the remote tables metadata service
///
/// Every method is a single remote round trip. `prefix` filters by name
/// prefix on the service side; `continuation_token` is the opaque cursor
/// returned by the previous page of the same listing.
#[async_trait::async_trait]
pub trait ITablesService: Send + Sync {
    /// Lists one page of table buckets
    async fn list_table_buckets(
        &self,
        prefix: Option<&str>,
        continuation_token: Option<&str>,
    ) -> RemoteResult<Page<TableBucket>>;

    /// Creates a table bucket and returns its ARN
    async fn create_table_bucket(&self, name: &str) -> RemoteResult<ResourceArn>;

    /// Looks a namespace up by name; fails with `NotFound` when absent
    async fn get_namespace(&self, bucket_arn: &ResourceArn, namespace: &str) -> RemoteResult<()>;

    /// Creates a namespace inside a bucket
    async fn create_namespace(&self, bucket_arn: &ResourceArn, namespace: &str)
        -> RemoteResult<()>;

    /// Looks a table up by name and returns its ARN; fails with `NotFound` when absent
    async fn get_table(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        name: &str,
    ) -> RemoteResult<ResourceArn>;

    /// Creates a table in the given format and returns its ARN
    async fn create_table(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        name: &str,
        format: TableFormat,
    ) -> RemoteResult<ResourceArn>;

    /// Lists one page of namespaces in a bucket
    async fn list_namespaces(
        &self,
        bucket_arn: &ResourceArn,
        prefix: Option<&str>,
        continuation_token: Option<&str>,
    ) -> RemoteResult<Page<Namespace>>;

    /// Lists one page of tables in a namespace
    async fn list_tables(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        prefix: Option<&str>,
        continuation_token: Option<&str>,
    ) -> RemoteResult<Page<Table>>;

    /// Fetches the full record of one table
    async fn get_table_details(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        name: &str,
    ) -> RemoteResult<Table>;
}
