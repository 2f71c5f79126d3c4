//! Shared test doubles for s3t-core integration tests
//!
//! `FakeTablesService` is an in-memory tables service that pages its listings,
//! records every call in order and can be told to fail a given operation.
//! `ScriptedSelector` replays a fixed list of picker answers and records what
//! it was shown.

#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use s3t_core::domain::{
    ErrorKind, Namespace, RemoteError, RemoteResult, ResourceArn, Table, TableBucket, TableFormat,
};
use s3t_core::ports::{ISelector, ITablesService, Page, SelectionError, SelectionOutcome};

/// Which service operation a call went to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    ListTableBuckets,
    CreateTableBucket,
    GetNamespace,
    CreateNamespace,
    GetTable,
    CreateTable,
    ListNamespaces,
    ListTables,
    GetTableDetails,
}

impl Op {
    pub fn is_listing(self) -> bool {
        matches!(
            self,
            Op::ListTableBuckets | Op::ListNamespaces | Op::ListTables
        )
    }

    pub fn is_create(self) -> bool {
        matches!(
            self,
            Op::CreateTableBucket | Op::CreateNamespace | Op::CreateTable
        )
    }
}

/// One recorded call with its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ListTableBuckets {
        prefix: Option<String>,
        token: Option<String>,
    },
    CreateTableBucket(String),
    GetNamespace {
        bucket_arn: String,
        namespace: String,
    },
    CreateNamespace {
        bucket_arn: String,
        namespace: String,
    },
    GetTable {
        bucket_arn: String,
        namespace: String,
        table: String,
    },
    CreateTable {
        bucket_arn: String,
        namespace: String,
        table: String,
    },
    ListNamespaces {
        bucket_arn: String,
        token: Option<String>,
    },
    ListTables {
        bucket_arn: String,
        namespace: String,
        token: Option<String>,
    },
    GetTableDetails {
        bucket_arn: String,
        namespace: String,
        table: String,
    },
}

impl Call {
    pub fn op(&self) -> Op {
        match self {
            Call::ListTableBuckets { .. } => Op::ListTableBuckets,
            Call::CreateTableBucket(_) => Op::CreateTableBucket,
            Call::GetNamespace { .. } => Op::GetNamespace,
            Call::CreateNamespace { .. } => Op::CreateNamespace,
            Call::GetTable { .. } => Op::GetTable,
            Call::CreateTable { .. } => Op::CreateTable,
            Call::ListNamespaces { .. } => Op::ListNamespaces,
            Call::ListTables { .. } => Op::ListTables,
            Call::GetTableDetails { .. } => Op::GetTableDetails,
        }
    }
}

/// ARN the fake assigns to a bucket
pub fn bucket_arn(name: &str) -> String {
    format!("arn:aws:s3tables:us-east-1:111122223333:bucket/{name}")
}

/// ARN the fake assigns to a table
pub fn table_arn(bucket: &str, namespace: &str, table: &str) -> String {
    format!("{}/table/{namespace}.{table}", bucket_arn(bucket))
}

pub fn arn(value: &str) -> ResourceArn {
    ResourceArn::new(value.to_string()).expect("non-empty arn")
}

fn created_at() -> DateTime<Utc> {
    Utc.timestamp_opt(1_700_000_000, 0).unwrap()
}

fn page<T: Clone>(items: &[T], token: Option<&str>, page_size: usize) -> Page<T> {
    let start: usize = token.map(|t| t.parse().expect("numeric token")).unwrap_or(0);
    let end = (start + page_size).min(items.len());
    let continuation_token = (end < items.len()).then(|| end.to_string());
    Page {
        items: items[start.min(end)..end].to_vec(),
        continuation_token,
    }
}

#[derive(Default)]
struct Inner {
    buckets: Vec<TableBucket>,
    namespaces: BTreeMap<String, Vec<Namespace>>,
    tables: BTreeMap<(String, String), Vec<Table>>,
    calls: Vec<Call>,
    failures: HashMap<Op, RemoteError>,
}

/// In-memory tables service
pub struct FakeTablesService {
    inner: Mutex<Inner>,
    page_size: usize,
}

impl FakeTablesService {
    pub fn new() -> Self {
        Self::with_page_size(100)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        assert!(page_size > 0);
        Self {
            inner: Mutex::new(Inner::default()),
            page_size,
        }
    }

    pub fn with_bucket(self, name: &str) -> Self {
        self.add_bucket(name);
        self
    }

    pub fn with_namespace(self, bucket: &str, namespace: &str) -> Self {
        self.add_namespace(bucket, namespace);
        self
    }

    pub fn with_table(self, bucket: &str, namespace: &str, table: &str) -> Self {
        self.add_table(bucket, namespace, table);
        self
    }

    /// Make every future call to `op` fail with `kind`
    pub fn failing(self, op: Op, kind: ErrorKind) -> Self {
        self.fail(op, kind);
        self
    }

    pub fn fail(&self, op: Op, kind: ErrorKind) {
        let error = RemoteError::new(format!("{op:?}"), kind);
        self.inner.lock().unwrap().failures.insert(op, error);
    }

    pub fn clear_failures(&self) {
        self.inner.lock().unwrap().failures.clear();
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> Vec<Call> {
        self.inner.lock().unwrap().calls.clone()
    }

    pub fn ops(&self) -> Vec<Op> {
        self.calls().iter().map(Call::op).collect()
    }

    pub fn count(&self, op: Op) -> usize {
        self.ops().into_iter().filter(|o| *o == op).count()
    }

    pub fn listing_calls(&self) -> usize {
        self.ops().into_iter().filter(|o| o.is_listing()).count()
    }

    pub fn create_calls(&self) -> usize {
        self.ops().into_iter().filter(|o| o.is_create()).count()
    }

    pub fn clear_calls(&self) {
        self.inner.lock().unwrap().calls.clear();
    }

    pub fn has_bucket(&self, name: &str) -> bool {
        self.inner
            .lock()
            .unwrap()
            .buckets
            .iter()
            .any(|b| b.name == name)
    }

    fn add_bucket(&self, name: &str) -> ResourceArn {
        let arn = arn(&bucket_arn(name));
        self.inner.lock().unwrap().buckets.push(TableBucket {
            name: name.to_string(),
            arn: arn.clone(),
            created_at: created_at(),
        });
        arn
    }

    fn add_namespace(&self, bucket: &str, namespace: &str) {
        self.inner
            .lock()
            .unwrap()
            .namespaces
            .entry(bucket_arn(bucket))
            .or_default()
            .push(Namespace {
                name: namespace.to_string(),
                created_at: created_at(),
            });
    }

    fn add_table(&self, bucket: &str, namespace: &str, table: &str) -> ResourceArn {
        let arn = arn(&table_arn(bucket, namespace, table));
        self.inner
            .lock()
            .unwrap()
            .tables
            .entry((bucket_arn(bucket), namespace.to_string()))
            .or_default()
            .push(Table {
                name: table.to_string(),
                arn: arn.clone(),
                namespace: namespace.to_string(),
                created_at: created_at(),
                kind: "customer".to_string(),
            });
        arn
    }

    /// Records the call, then returns the injected failure for its op if any
    fn record(&self, call: Call) -> RemoteResult<()> {
        let mut inner = self.inner.lock().unwrap();
        let op = call.op();
        inner.calls.push(call);
        match inner.failures.get(&op) {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }

    fn bucket_name(&self, bucket_arn: &ResourceArn) -> RemoteResult<String> {
        self.inner
            .lock()
            .unwrap()
            .buckets
            .iter()
            .find(|b| &b.arn == bucket_arn)
            .map(|b| b.name.clone())
            .ok_or_else(|| RemoteError::not_found("ResolveBucket", "bucket not found"))
    }

    fn find_table(&self, bucket_arn: &ResourceArn, namespace: &str, name: &str) -> Option<Table> {
        self.inner
            .lock()
            .unwrap()
            .tables
            .get(&(bucket_arn.to_string(), namespace.to_string()))
            .and_then(|tables| tables.iter().find(|t| t.name == name).cloned())
    }
}

fn matches_prefix(name: &str, prefix: Option<&str>) -> bool {
    prefix.map_or(true, |p| name.starts_with(p))
}

#[async_trait]
impl ITablesService for FakeTablesService {
    async fn list_table_buckets(
        &self,
        prefix: Option<&str>,
        continuation_token: Option<&str>,
    ) -> RemoteResult<Page<TableBucket>> {
        self.record(Call::ListTableBuckets {
            prefix: prefix.map(str::to_string),
            token: continuation_token.map(str::to_string),
        })?;

        let inner = self.inner.lock().unwrap();
        let matching: Vec<_> = inner
            .buckets
            .iter()
            .filter(|b| matches_prefix(&b.name, prefix))
            .cloned()
            .collect();
        Ok(page(&matching, continuation_token, self.page_size))
    }

    async fn create_table_bucket(&self, name: &str) -> RemoteResult<ResourceArn> {
        self.record(Call::CreateTableBucket(name.to_string()))?;
        if self.has_bucket(name) {
            return Err(RemoteError::new("CreateTableBucket", ErrorKind::Conflict));
        }
        Ok(self.add_bucket(name))
    }

    async fn get_namespace(&self, bucket_arn: &ResourceArn, namespace: &str) -> RemoteResult<()> {
        self.record(Call::GetNamespace {
            bucket_arn: bucket_arn.to_string(),
            namespace: namespace.to_string(),
        })?;

        let inner = self.inner.lock().unwrap();
        let exists = inner
            .namespaces
            .get(bucket_arn.as_str())
            .is_some_and(|nss| nss.iter().any(|ns| ns.name == namespace));
        if exists {
            Ok(())
        } else {
            Err(RemoteError::new("GetNamespace", ErrorKind::NotFound))
        }
    }

    async fn create_namespace(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
    ) -> RemoteResult<()> {
        self.record(Call::CreateNamespace {
            bucket_arn: bucket_arn.to_string(),
            namespace: namespace.to_string(),
        })?;
        let bucket = self.bucket_name(bucket_arn)?;
        self.add_namespace(&bucket, namespace);
        Ok(())
    }

    async fn get_table(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        name: &str,
    ) -> RemoteResult<ResourceArn> {
        self.record(Call::GetTable {
            bucket_arn: bucket_arn.to_string(),
            namespace: namespace.to_string(),
            table: name.to_string(),
        })?;
        self.find_table(bucket_arn, namespace, name)
            .map(|t| t.arn)
            .ok_or_else(|| RemoteError::new("GetTable", ErrorKind::NotFound))
    }

    async fn create_table(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        name: &str,
        format: TableFormat,
    ) -> RemoteResult<ResourceArn> {
        self.record(Call::CreateTable {
            bucket_arn: bucket_arn.to_string(),
            namespace: namespace.to_string(),
            table: name.to_string(),
        })?;
        assert_eq!(format, TableFormat::Iceberg);
        let bucket = self.bucket_name(bucket_arn)?;
        Ok(self.add_table(&bucket, namespace, name))
    }

    async fn list_namespaces(
        &self,
        bucket_arn: &ResourceArn,
        prefix: Option<&str>,
        continuation_token: Option<&str>,
    ) -> RemoteResult<Page<Namespace>> {
        self.record(Call::ListNamespaces {
            bucket_arn: bucket_arn.to_string(),
            token: continuation_token.map(str::to_string),
        })?;

        let inner = self.inner.lock().unwrap();
        let matching: Vec<_> = inner
            .namespaces
            .get(bucket_arn.as_str())
            .map(|nss| {
                nss.iter()
                    .filter(|ns| matches_prefix(&ns.name, prefix))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(page(&matching, continuation_token, self.page_size))
    }

    async fn list_tables(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        prefix: Option<&str>,
        continuation_token: Option<&str>,
    ) -> RemoteResult<Page<Table>> {
        self.record(Call::ListTables {
            bucket_arn: bucket_arn.to_string(),
            namespace: namespace.to_string(),
            token: continuation_token.map(str::to_string),
        })?;

        let inner = self.inner.lock().unwrap();
        let matching: Vec<_> = inner
            .tables
            .get(&(bucket_arn.to_string(), namespace.to_string()))
            .map(|tables| {
                tables
                    .iter()
                    .filter(|t| matches_prefix(&t.name, prefix))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        Ok(page(&matching, continuation_token, self.page_size))
    }

    async fn get_table_details(
        &self,
        bucket_arn: &ResourceArn,
        namespace: &str,
        name: &str,
    ) -> RemoteResult<Table> {
        self.record(Call::GetTableDetails {
            bucket_arn: bucket_arn.to_string(),
            namespace: namespace.to_string(),
            table: name.to_string(),
        })?;
        self.find_table(bucket_arn, namespace, name)
            .ok_or_else(|| RemoteError::new("GetTable", ErrorKind::NotFound))
    }
}

/// What the picker was asked to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub label: String,
    pub items: Vec<String>,
    pub show_back: bool,
}

/// Picker that answers from a fixed script
pub struct ScriptedSelector {
    script: VecDeque<SelectionOutcome>,
    pub prompts: Vec<Prompt>,
    pub notices: Vec<String>,
}

impl ScriptedSelector {
    pub fn new(script: impl IntoIterator<Item = SelectionOutcome>) -> Self {
        Self {
            script: script.into_iter().collect(),
            prompts: Vec::new(),
            notices: Vec::new(),
        }
    }

    /// Picker that must never be prompted
    pub fn empty() -> Self {
        Self::new(VecDeque::<SelectionOutcome>::new())
    }

    /// Answers left unused when the session ended
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl ISelector for ScriptedSelector {
    fn select(
        &mut self,
        label: &str,
        items: &[String],
        show_back: bool,
    ) -> Result<SelectionOutcome, SelectionError> {
        if items.is_empty() {
            return Err(SelectionError::NoItems);
        }
        self.prompts.push(Prompt {
            label: label.to_string(),
            items: items.to_vec(),
            show_back,
        });
        self.script
            .pop_front()
            .ok_or_else(|| SelectionError::Prompt("script exhausted".to_string()))
    }

    fn notice(&mut self, message: &str) {
        self.notices.push(message.to_string());
    }
}

pub fn pick(name: &str) -> SelectionOutcome {
    SelectionOutcome::Selected(name.to_string())
}

pub fn back() -> SelectionOutcome {
    SelectionOutcome::Back
}

pub fn exit() -> SelectionOutcome {
    SelectionOutcome::Exit
}
