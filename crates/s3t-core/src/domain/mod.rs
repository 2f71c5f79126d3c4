//! Domain layer
//!
//! Pure value types for the Table Bucket → Namespace → Table hierarchy,
//! the navigation state machine types, and input validation rules.
//! Nothing in here performs I/O.

pub mod errors;
pub mod navigation;
pub mod newtypes;
pub mod resources;
pub mod validation;

pub use errors::{DomainError, ErrorKind, RemoteError, RemoteResult};
pub use navigation::{NavigationAction, NavigationLevel, NavigationState};
pub use newtypes::ResourceArn;
pub use resources::{names_of, Named, Namespace, Table, TableBucket, TableFormat};
pub use validation::{
    validate_all, validate_namespace, validate_table, validate_table_bucket, ValidationError,
};
