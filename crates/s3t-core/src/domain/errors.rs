//! Domain error types
//!
//! This module defines the error taxonomy shared by every remote call
//! ([`RemoteError`] classified by [`ErrorKind`]) and the errors raised by
//! domain value construction ([`DomainError`]).

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Result alias for calls crossing the remote-service port
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Errors that can occur in domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid resource ARN (empty or malformed)
    #[error("Invalid ARN: {0}")]
    InvalidArn(String),

    /// A browse session was started below the bucket level without its parent context
    #[error("Cannot start at {level} level without a selected {missing}")]
    MissingContext {
        /// The requested start level
        level: String,
        /// The parent that was not seeded
        missing: String,
    },
}

/// Classification of a failed remote call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The resource does not exist (404)
    NotFound,
    /// The resource already exists or is being modified concurrently (409)
    Conflict,
    /// Authentication succeeded but the caller lacks permission (403)
    Forbidden,
    /// The request was rejected as invalid (400)
    BadRequest,
    /// The service failed while processing the request (500)
    InternalServiceError,
    /// No usable credentials were found, or they were rejected
    CredentialsMissing,
    /// Anything the adapter could not classify
    Unknown,
}

impl ErrorKind {
    /// Default user-facing message for this kind
    pub fn default_message(self) -> &'static str {
        match self {
            Self::NotFound => "resource not found",
            Self::Conflict => "resource already exists",
            Self::Forbidden => "access denied",
            Self::BadRequest => "invalid request",
            Self::InternalServiceError => "AWS service error",
            Self::CredentialsMissing => "AWS credentials not configured",
            Self::Unknown => "unknown error",
        }
    }

    /// Default remediation hint for this kind, if there is one
    pub fn default_suggestion(self) -> Option<&'static str> {
        match self {
            Self::NotFound => Some("verify the resource name and try again"),
            Self::Conflict => Some("use a different name or check existing resources"),
            Self::Forbidden => Some("check your AWS credentials and permissions"),
            Self::BadRequest => Some("check your input parameters"),
            Self::InternalServiceError => Some("please retry the operation"),
            Self::CredentialsMissing => Some(
                "configure AWS credentials using 'aws configure' or environment variables",
            ),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NotFound => "NotFound",
            Self::Conflict => "Conflict",
            Self::Forbidden => "Forbidden",
            Self::BadRequest => "BadRequest",
            Self::InternalServiceError => "InternalServiceError",
            Self::CredentialsMissing => "CredentialsMissing",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// A failed call against the remote tables service
///
/// Carries the operation name (e.g. `CreateNamespace`), the classified kind,
/// a short message and an optional suggestion for the user.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{operation}: {message}{}", suggestion_suffix(.suggestion))]
pub struct RemoteError {
    pub operation: String,
    pub kind: ErrorKind,
    pub message: String,
    pub suggestion: Option<String>,
}

impl RemoteError {
    /// Create an error with the kind's default message and suggestion
    pub fn new(operation: impl Into<String>, kind: ErrorKind) -> Self {
        Self {
            operation: operation.into(),
            kind,
            message: kind.default_message().to_string(),
            suggestion: kind.default_suggestion().map(str::to_string),
        }
    }

    /// Shortcut for a NotFound error with a specific message
    pub fn not_found(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(operation, ErrorKind::NotFound).with_message(message)
    }

    /// Replace the message
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Replace the suggestion
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    pub fn is_not_found(&self) -> bool {
        self.kind == ErrorKind::NotFound
    }

    pub fn is_conflict(&self) -> bool {
        self.kind == ErrorKind::Conflict
    }

    pub fn is_credentials(&self) -> bool {
        self.kind == ErrorKind::CredentialsMissing
    }
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    suggestion
        .as_deref()
        .map(|s| format!(" - {s}"))
        .unwrap_or_default()
}
