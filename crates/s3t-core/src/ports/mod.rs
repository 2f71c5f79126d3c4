//! Port definitions (hexagonal architecture interfaces)
//!
//! This module defines the port traits that form the boundaries of the
//! hexagonal architecture. Ports are interfaces that the domain core
//! depends on, but whose implementations live in adapter crates.
//!
//! ## Ports Overview
//!
//! - [`ITablesService`] - Remote table bucket / namespace / table metadata API
//! - [`ISelector`] - Interactive terminal picker used while browsing

pub mod selector;
pub mod tables_service;

pub use selector::{filter_items, ISelector, SelectionError, SelectionOutcome, BACK_OPTION};
pub use tables_service::{ITablesService, Page};
