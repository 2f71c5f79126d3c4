//! Input name validation
//!
//! Stateless syntax checks for resource names, applied before any remote call
//! is made. The service enforces the same rules; checking locally gives a
//! clearer message and avoids a half-provisioned chain when only the table
//! name is wrong.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// A name that failed validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid {field}: {message}")]
pub struct ValidationError {
    /// CLI-facing field name (`table-bucket`, `namespace`, `table`)
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

const TABLE_BUCKET_MIN: usize = 3;
const TABLE_BUCKET_MAX: usize = 63;
const NAME_MIN: usize = 1;
const NAME_MAX: usize = 255;

static TABLE_BUCKET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-z-]+$").expect("valid regex"));

/// Shared by namespaces and tables
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-z_]+$").expect("valid regex"));

fn check_length(
    field: &'static str,
    name: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = name.len();
    if len < min {
        let unit = if min == 1 { "character" } else { "characters" };
        return Err(ValidationError::new(
            field,
            format!("must be at least {min} {unit}"),
        ));
    }
    if len > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {max} characters"),
        ));
    }
    Ok(())
}

/// Validate a table bucket name: 3-63 characters of `[0-9a-z-]`
pub fn validate_table_bucket(name: &str) -> Result<(), ValidationError> {
    const FIELD: &str = "table-bucket";
    check_length(FIELD, name, TABLE_BUCKET_MIN, TABLE_BUCKET_MAX)?;
    if !TABLE_BUCKET_PATTERN.is_match(name) {
        return Err(ValidationError::new(
            FIELD,
            "must contain only lowercase letters, numbers, and hyphens",
        ));
    }
    Ok(())
}

/// Validate a namespace name: 1-255 characters of `[0-9a-z_]`
pub fn validate_namespace(name: &str) -> Result<(), ValidationError> {
    const FIELD: &str = "namespace";
    check_length(FIELD, name, NAME_MIN, NAME_MAX)?;
    if !NAME_PATTERN.is_match(name) {
        return Err(ValidationError::new(
            FIELD,
            "must contain only lowercase letters, numbers, and underscores",
        ));
    }
    Ok(())
}

/// Validate a table name: 1-255 characters of `[0-9a-z_]`
pub fn validate_table(name: &str) -> Result<(), ValidationError> {
    const FIELD: &str = "table";
    check_length(FIELD, name, NAME_MIN, NAME_MAX)?;
    if !NAME_PATTERN.is_match(name) {
        return Err(ValidationError::new(
            FIELD,
            "must contain only lowercase letters, numbers, and underscores",
        ));
    }
    Ok(())
}

/// Validate the full bucket / namespace / table triple, stopping at the first failure
pub fn validate_all(table_bucket: &str, namespace: &str, table: &str) -> Result<(), ValidationError> {
    validate_table_bucket(table_bucket)?;
    validate_namespace(namespace)?;
    validate_table(table)
}
