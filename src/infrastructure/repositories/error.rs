use crate::{application::ports::content::ContentClientError, domain::errors::DomainError};

/// Every content store failure is a persistence failure from the domain's
/// point of view; a missing article is signalled by an empty result instead.
pub fn map_client_error(err: ContentClientError) -> DomainError {
    match err {
        ContentClientError::Status { status, message } => {
            DomainError::Persistence(format!("content store responded {status}: {message}"))
        }
        other => DomainError::Persistence(other.to_string()),
    }
}
