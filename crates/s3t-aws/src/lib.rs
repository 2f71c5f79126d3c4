//! s3t AWS - Amazon S3 Tables adapter
//!
//! Implements [`s3t_core::ports::ITablesService`] on top of
//! `aws-sdk-s3tables`. Errors from the SDK are classified into
//! [`s3t_core::domain::ErrorKind`] so the core can tell "absent" from
//! "failed".

pub mod client;
pub mod error;
pub mod provider;

pub use client::load_client;
pub use provider::S3TablesProvider;
