//! Use cases (interactors) for s3t
//!
//! This module contains the application use cases that orchestrate
//! domain entities and port interfaces. Use cases are thin coordinators
//! that delegate I/O to ports.
//!
//! ## Use Cases
//!
//! - [`ProvisionTablesUseCase`] - Idempotent bucket → namespace → table creation
//! - [`BrowseTablesUseCase`] - Cached, interactive hierarchical browsing
//! - [`TablesLister`] - Fully paginated listings per level
//! - [`ExistenceChecker`] - Per-level "does it exist" lookups

pub mod browse;
pub mod existence;
pub mod lister;
pub mod pagination;
pub mod provision;

pub use browse::{BrowseTablesUseCase, NavigationError, NavigationOutcome};
pub use existence::ExistenceChecker;
pub use lister::TablesLister;
pub use pagination::collect_all_pages;
pub use provision::{ProvisionResult, ProvisionTablesUseCase};
