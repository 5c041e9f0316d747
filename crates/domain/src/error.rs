//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`JobTrackError`] via `From`, so callers can match on the kind of failure
//! instead of inspecting messages.

use std::error::Error as StdError;

/// Top-level error returned by services and repositories.
#[derive(Debug, thiserror::Error)]
pub enum JobTrackError {
    /// Input rejected before reaching storage.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The requested record does not exist.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    /// Any failure originating in the persistence layer.
    #[error("storage error")]
    Storage(#[source] Box<dyn StdError + Send + Sync>),
}

/// Reasons an input can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),

    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("invalid application id `{0}`")]
    InvalidId(String),

    #[error("malformed request body: {0}")]
    MalformedBody(String),
}

/// A lookup or delete targeted a record that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_the_field_when_missing() {
        let err = JobTrackError::from(ValidationError::MissingField("status"));
        assert_eq!(err.to_string(), "missing required field `status`");
    }

    #[test]
    fn should_describe_not_found_with_entity_and_id() {
        let err = JobTrackError::from(NotFoundError {
            entity: "Application",
            id: "42".to_string(),
        });
        assert_eq!(err.to_string(), "Application 42 not found");
    }

    #[test]
    fn should_keep_storage_source_when_boxed() {
        let io = std::io::Error::other("disk full");
        let err = JobTrackError::Storage(Box::new(io));
        assert_eq!(err.to_string(), "storage error");
        assert_eq!(err.source().unwrap().to_string(), "disk full");
    }
}
