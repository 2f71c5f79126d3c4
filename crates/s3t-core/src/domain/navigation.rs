//! Navigation state machine types
//!
//! A browse session moves between three levels:
//!
//! ```text
//! Bucket ──Select──▶ Namespace ──Select──▶ Table ──Select──▶ (done)
//!   ▲                   │  ▲                 │
//!   └───────Back────────┘  └──────Back───────┘
//! ```
//!
//! [`NavigationState`] holds the current level, the selected path and one
//! cache per level. A cache is only valid for the parent it was fetched
//! under, so selecting a new parent clears every cache below it.

use std::fmt;

use serde::Serialize;

use super::newtypes::ResourceArn;
use super::resources::{Namespace, Table, TableBucket};

/// The level a browse session is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum NavigationLevel {
    #[default]
    TableBucket,
    Namespace,
    Table,
}

impl NavigationLevel {
    /// The level a Back action returns to, if any
    pub fn parent(self) -> Option<Self> {
        match self {
            Self::TableBucket => None,
            Self::Namespace => Some(Self::TableBucket),
            Self::Table => Some(Self::Namespace),
        }
    }

    /// The level a Select action descends to, if any
    pub fn child(self) -> Option<Self> {
        match self {
            Self::TableBucket => Some(Self::Namespace),
            Self::Namespace => Some(Self::Table),
            Self::Table => None,
        }
    }
}

impl fmt::Display for NavigationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TableBucket => "TableBucket",
            Self::Namespace => "Namespace",
            Self::Table => "Table",
        };
        f.write_str(name)
    }
}

/// What the user did at a prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationAction {
    /// An item was chosen
    Select,
    /// Return to the parent level
    Back,
    /// Leave the session
    Exit,
}

impl fmt::Display for NavigationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Select => "Select",
            Self::Back => "Back",
            Self::Exit => "Exit",
        };
        f.write_str(name)
    }
}

/// Mutable state of one browse session
///
/// `None` in a cache means "not fetched yet for the current parent"; an empty
/// `Vec` means "fetched, and the service returned nothing".
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    level: NavigationLevel,
    buckets: Option<Vec<TableBucket>>,
    namespaces: Option<Vec<Namespace>>,
    tables: Option<Vec<Table>>,
    selected_bucket: Option<String>,
    selected_bucket_arn: Option<ResourceArn>,
    selected_namespace: Option<String>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn level(&self) -> NavigationLevel {
        self.level
    }

    pub fn set_level(&mut self, level: NavigationLevel) {
        self.level = level;
    }

    pub fn buckets(&self) -> Option<&[TableBucket]> {
        self.buckets.as_deref()
    }

    pub fn namespaces(&self) -> Option<&[Namespace]> {
        self.namespaces.as_deref()
    }

    pub fn tables(&self) -> Option<&[Table]> {
        self.tables.as_deref()
    }

    pub fn selected_bucket(&self) -> Option<&str> {
        self.selected_bucket.as_deref()
    }

    pub fn selected_bucket_arn(&self) -> Option<&ResourceArn> {
        self.selected_bucket_arn.as_ref()
    }

    pub fn selected_namespace(&self) -> Option<&str> {
        self.selected_namespace.as_deref()
    }

    pub fn cache_buckets(&mut self, buckets: Vec<TableBucket>) {
        self.buckets = Some(buckets);
    }

    pub fn cache_namespaces(&mut self, namespaces: Vec<Namespace>) {
        self.namespaces = Some(namespaces);
    }

    pub fn cache_tables(&mut self, tables: Vec<Table>) {
        self.tables = Some(tables);
    }

    /// Pre-select a bucket (and optionally a namespace) before a session starts
    ///
    /// Used when the caller already resolved the parent context, e.g. from
    /// command-line arguments. Deeper caches are cleared.
    pub fn seed(&mut self, bucket: &str, bucket_arn: ResourceArn, namespace: Option<&str>) {
        self.selected_bucket = Some(bucket.to_string());
        self.selected_bucket_arn = Some(bucket_arn);
        self.selected_namespace = namespace.map(str::to_string);
        self.namespaces = None;
        self.tables = None;
    }

    /// Record a bucket choice and invalidate everything below it
    pub fn select_bucket(&mut self, bucket: &TableBucket) {
        self.selected_bucket = Some(bucket.name.clone());
        self.selected_bucket_arn = Some(bucket.arn.clone());
        self.selected_namespace = None;
        self.namespaces = None;
        self.tables = None;
    }

    /// Record a namespace choice and invalidate the table cache
    pub fn select_namespace(&mut self, namespace: &str) {
        self.selected_namespace = Some(namespace.to_string());
        self.tables = None;
    }
}
