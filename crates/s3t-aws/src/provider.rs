//! `ITablesService` backed by the AWS SDK

use async_trait::async_trait;
use aws_sdk_s3tables::primitives::DateTime as AwsDateTime;
use aws_sdk_s3tables::types::OpenTableFormat;
use aws_sdk_s3tables::Client;
use chrono::{DateTime, Utc};
use tracing::debug;

use s3t_core::domain::{
    ErrorKind, Namespace, RemoteError, RemoteResult, ResourceArn, Table, TableBucket, TableFormat,
};
use s3t_core::ports::{ITablesService, Page};

use crate::error::from_sdk;

/// Amazon S3 Tables implementation of [`ITablesService`]
///
/// Retries and timeouts are left to the SDK's defaults.
#[derive(Clone)]
pub struct S3TablesProvider {
    client: Client,
}

impl S3TablesProvider {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

fn to_utc(timestamp: &AwsDateTime) -> DateTime<Utc> {
    DateTime::from_timestamp(timestamp.secs(), timestamp.subsec_nanos()).unwrap_or_default()
}

fn to_arn(operation: &str, arn: &str) -> RemoteResult<ResourceArn> {
    ResourceArn::new(arn.to_string()).map_err(|_| {
        RemoteError::new(operation, ErrorKind::Unknown)
            .with_message("service returned an empty ARN")
    })
}

/// Namespaces are single-level; the first path element is the name
fn namespace_name(path: &[String]) -> String {
    path.first().cloned().unwrap_or_default()
}

fn to_format(format: TableFormat) -> OpenTableFormat {
    match format {
        TableFormat::Iceberg => OpenTableFormat::Iceberg,
    }
}

#[async_trait]
impl ITablesService for S3TablesProvider {
    async fn list_table_buckets(
        &self,
        prefix: Option<&str>,
        continuation_token: Option<&str>,
    ) -> RemoteResult<Page<TableBucket>> {
        const OP: &str = "ListTableBuckets";
        let output = self
            .client
            .list_table_buckets()
            .set_prefix(prefix.map(str::to_string))
            .set_continuation_token(continuation_token.map(str::to_string))
            .send()
            .await
            .map_err(|e| from_sdk(OP, e))?;

        let items = output
            .table_buckets()
            .iter()
            .map(|summary| {
                Ok(TableBucket {
                    name: summary.name().to_string(),
                    arn: to_arn(OP, summary.arn())?,
                    created_at: to_utc(summary.created_at()),
                })
            })
            .collect::<RemoteResult<Vec<_>>>()?;

        Ok(Page {
            items,
            continuation_token: output.continuation_token().map(str::to_string),
        })
    }

    async fn create_table_bucket(&self, name: &str) -> RemoteResult<ResourceArn> {
        const OP: &str = "CreateTableBucket";
        let output = self
            .client
            .create_table_bucket()
            .name(name)
            .send()
            .await
            .map_err(|e| from_sdk(OP, e))?;

        debug!(table_bucket = name, arn = output.arn(), "CreateTableBucket returned");
        to_arn(OP, output.arn())
    }

    async fn get_namespace(&self, bucket_arn: &ResourceArn, namespace: &str) -> RemoteResult<()> {
        self.client
            .get_namespace()
            .table_bucket_arn(bucket_arn.as_str())
            .namespace(namespace)
            .send()
            .await
            .map_err(|e| from_sdk("GetNamespace", e))?;
        Ok(())
    }

    async fn create_namespace(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
    ) -> RemoteResult<()> {
        self.client
            .create_namespace()
            .table_bucket_arn(bucket_arn.as_str())
            .namespace(namespace)
            .send()
            .await
            .map_err(|e| from_sdk("CreateNamespace", e))?;
        Ok(())
    }

    async fn get_table(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        name: &str,
    ) -> RemoteResult<ResourceArn> {
        const OP: &str = "GetTable";
        let output = self
            .client
            .get_table()
            .table_bucket_arn(bucket_arn.as_str())
            .namespace(namespace)
            .name(name)
            .send()
            .await
            .map_err(|e| from_sdk(OP, e))?;

        to_arn(OP, output.table_arn())
    }

    async fn create_table(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        name: &str,
        format: TableFormat,
    ) -> RemoteResult<ResourceArn> {
        const OP: &str = "CreateTable";
        let output = self
            .client
            .create_table()
            .table_bucket_arn(bucket_arn.as_str())
            .namespace(namespace)
            .name(name)
            .format(to_format(format))
            .send()
            .await
            .map_err(|e| from_sdk(OP, e))?;

        to_arn(OP, output.table_arn())
    }

    async fn list_namespaces(
        &self,
        bucket_arn: &ResourceArn,
        prefix: Option<&str>,
        continuation_token: Option<&str>,
    ) -> RemoteResult<Page<Namespace>> {
        let output = self
            .client
            .list_namespaces()
            .table_bucket_arn(bucket_arn.as_str())
            .set_prefix(prefix.map(str::to_string))
            .set_continuation_token(continuation_token.map(str::to_string))
            .send()
            .await
            .map_err(|e| from_sdk("ListNamespaces", e))?;

        let items = output
            .namespaces()
            .iter()
            .map(|summary| Namespace {
                name: namespace_name(summary.namespace()),
                created_at: to_utc(summary.created_at()),
            })
            .collect();

        Ok(Page {
            items,
            continuation_token: output.continuation_token().map(str::to_string),
        })
    }

    async fn list_tables(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        prefix: Option<&str>,
        continuation_token: Option<&str>,
    ) -> RemoteResult<Page<Table>> {
        const OP: &str = "ListTables";
        let output = self
            .client
            .list_tables()
            .table_bucket_arn(bucket_arn.as_str())
            .namespace(namespace)
            .set_prefix(prefix.map(str::to_string))
            .set_continuation_token(continuation_token.map(str::to_string))
            .send()
            .await
            .map_err(|e| from_sdk(OP, e))?;

        let items = output
            .tables()
            .iter()
            .map(|summary| {
                Ok(Table {
                    name: summary.name().to_string(),
                    arn: to_arn(OP, summary.table_arn())?,
                    namespace: namespace_name(summary.namespace()),
                    created_at: to_utc(summary.created_at()),
                    kind: summary.r#type().as_str().to_string(),
                })
            })
            .collect::<RemoteResult<Vec<_>>>()?;

        Ok(Page {
            items,
            continuation_token: output.continuation_token().map(str::to_string),
        })
    }

    async fn get_table_details(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        name: &str,
    ) -> RemoteResult<Table> {
        const OP: &str = "GetTable";
        let output = self
            .client
            .get_table()
            .table_bucket_arn(bucket_arn.as_str())
            .namespace(namespace)
            .name(name)
            .send()
            .await
            .map_err(|e| from_sdk(OP, e))?;

        let reported_namespace = namespace_name(output.namespace());
        Ok(Table {
            name: output.name().to_string(),
            arn: to_arn(OP, output.table_arn())?,
            namespace: if reported_namespace.is_empty() {
                namespace.to_string()
            } else {
                reported_namespace
            },
            created_at: to_utc(output.created_at()),
            kind: output.r#type().as_str().to_string(),
        })
    }
}
