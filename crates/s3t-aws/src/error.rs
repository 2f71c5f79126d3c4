//! Classification of AWS SDK failures
//!
//! Every SDK error is turned into a [`RemoteError`] carrying an [`ErrorKind`]
//! the use cases can branch on. Classification looks at the service error
//! code first; errors without a code (dispatch or credential-chain failures)
//! are inspected by their rendered text.

use aws_sdk_s3tables::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use s3t_core::domain::{ErrorKind, RemoteError};

/// Substrings (matched case-insensitively) that mark a credential-chain failure
const CREDENTIAL_MARKERS: &[&str] = &[
    "no credentials",
    "credential",
    "nocredentialproviders",
    "sharedconfigprofilenotexist",
    "failed to refresh cached credentials",
];

/// Converts an SDK error from `operation` into a classified [`RemoteError`]
pub fn from_sdk<E, R>(operation: &str, err: SdkError<E, R>) -> RemoteError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug,
{
    let rendered = DisplayErrorContext(&err).to_string();
    tracing::debug!(operation, error = %rendered, "AWS call failed");
    classify(operation, err.code(), err.message(), &rendered)
}

/// Classifies a failure from its service error code and message
///
/// `rendered` is the full error chain as text, used only when there is no
/// code.
pub fn classify(
    operation: &str,
    code: Option<&str>,
    message: Option<&str>,
    rendered: &str,
) -> RemoteError {
    let message = message.filter(|m| !m.is_empty());

    let Some(code) = code.filter(|c| !c.is_empty()) else {
        if is_credential_error(rendered) {
            return RemoteError::new(operation, ErrorKind::CredentialsMissing);
        }
        return RemoteError::new(operation, ErrorKind::Unknown)
            .with_message(message.unwrap_or(rendered));
    };

    match code {
        "NotFoundException" => RemoteError::new(operation, ErrorKind::NotFound),
        "ConflictException" => RemoteError::new(operation, ErrorKind::Conflict),
        "ForbiddenException" | "AccessDeniedException" | "AccessDenied" => {
            RemoteError::new(operation, ErrorKind::Forbidden)
        }
        "BadRequestException" | "ValidationException" => {
            let error = RemoteError::new(operation, ErrorKind::BadRequest);
            match message {
                Some(message) => error.with_message(message),
                None => error,
            }
        }
        "InternalServerErrorException" | "InternalServerError" | "ServiceException" => {
            RemoteError::new(operation, ErrorKind::InternalServiceError)
        }
        "UnrecognizedClientException" | "InvalidSignatureException" => {
            RemoteError::new(operation, ErrorKind::CredentialsMissing)
                .with_message("invalid AWS credentials")
                .with_suggestion("check your AWS credentials configuration")
        }
        _ => RemoteError::new(operation, ErrorKind::Unknown).with_message(message.unwrap_or(code)),
    }
}

fn is_credential_error(rendered: &str) -> bool {
    let lowered = rendered.to_lowercase();
    CREDENTIAL_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
}
