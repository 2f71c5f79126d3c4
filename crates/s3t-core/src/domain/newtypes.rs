//! Domain newtypes with validation
//!
//! Strongly-typed wrappers for the opaque identifiers returned by the
//! remote service. Each newtype ensures validity at construction time.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// Opaque resource reference returned by the service (an ARN for AWS)
///
/// Bucket ARNs are required by every namespace and table operation. They are
/// only ever obtained from a listing, lookup or create call; they are never
/// derived from a resource name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceArn(String);

impl ResourceArn {
    /// Create a new ResourceArn
    ///
    /// # Errors
    /// Returns error if the ARN is empty or contains whitespace
    pub fn new(arn: String) -> Result<Self, DomainError> {
        if arn.is_empty() {
            return Err(DomainError::InvalidArn(
                "ARN cannot be empty".to_string(),
            ));
        }

        if arn.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidArn(format!(
                "ARN contains whitespace: {arn:?}"
            )));
        }

        Ok(Self(arn))
    }

    /// Get the inner string reference
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ResourceArn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ResourceArn {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.to_string())
    }
}

impl TryFrom<String> for ResourceArn {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<ResourceArn> for String {
    fn from(arn: ResourceArn) -> Self {
        arn.0
    }
}

impl AsRef<str> for ResourceArn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
