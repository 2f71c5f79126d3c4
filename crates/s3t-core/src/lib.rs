//! s3t Core - Domain logic for S3 Tables provisioning and browsing
//!
//! This crate contains the hexagonal architecture core with:
//! - **Domain entities** - `TableBucket`, `Namespace`, `Table`, `NavigationState`
//! - **Use cases** - `ProvisionTablesUseCase`, `BrowseTablesUseCase`, `TablesLister`
//! - **Port definitions** - Traits for adapters: `ITablesService`, `ISelector`
//! - **State machine** - Bucket → Namespace → Table navigation with per-level caches
//!
//! # Architecture
//!
//! This crate follows the hexagonal (ports & adapters) architecture pattern.
//! The domain module contains pure value types and validation rules.
//! Ports define trait interfaces that adapter crates implement.
//! Use cases orchestrate domain entities through port interfaces.

pub mod config;
pub mod domain;
pub mod ports;
pub mod usecases;
