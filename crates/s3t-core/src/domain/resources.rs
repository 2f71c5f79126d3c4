//! Table Bucket, Namespace and Table value records
//!
//! These are immutable snapshots of what the service reported at the time of
//! the call. They carry no behaviour beyond accessors used for display.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::newtypes::ResourceArn;

/// A table bucket, the top-level container
///
/// Identity is the name, unique within the account and region.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBucket {
    pub name: String,
    pub arn: ResourceArn,
    pub created_at: DateTime<Utc>,
}

/// A namespace inside a table bucket
///
/// Identity is (bucket ARN, name); names are only unique within their bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Namespace {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A table inside a namespace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub arn: ResourceArn,
    /// Name of the parent namespace
    pub namespace: String,
    pub created_at: DateTime<Utc>,
    /// Service-reported table type (e.g. `customer`, `aws`)
    pub kind: String,
}

/// Open table format used when creating tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TableFormat {
    /// Apache Iceberg
    #[default]
    Iceberg,
}

impl TableFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Iceberg => "ICEBERG",
        }
    }
}

impl fmt::Display for TableFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything with a display name that can be offered in a picker
pub trait Named {
    fn name(&self) -> &str;
}

impl Named for TableBucket {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Namespace {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Table {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Collect the display names of a slice of resources, preserving order
pub fn names_of<T: Named>(items: &[T]) -> Vec<String> {
    items.iter().map(|item| item.name().to_string()).collect()
}
