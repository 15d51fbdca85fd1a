// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("upstream error{}: {message}", status.map(|s| format!(" (status {s})")).unwrap_or_default())]
    Upstream {
        status: Option<u16>,
        message: String,
    },

    #[error("{0}")]
    GenerationFailed(String),

    #[error("{0}")]
    PersistenceFailed(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self::Unauthorized(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn upstream(status: Option<u16>, msg: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: msg.into(),
        }
    }

    pub fn generation_failed(msg: impl Into<String>) -> Self {
        Self::GenerationFailed(msg.into())
    }

    pub fn persistence_failed(msg: impl Into<String>) -> Self {
        Self::PersistenceFailed(msg.into())
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Stable machine-readable code surfaced to the admin UI.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Domain(DomainError::Validation(_)) | Self::Validation(_) => "validation_failed",
            Self::Domain(DomainError::DuplicateSlug(_)) => "slug_exists",
            Self::Domain(DomainError::Conflict(_)) => "conflict",
            Self::Domain(DomainError::NotFound(_)) | Self::NotFound(_) => "not_found",
            Self::Domain(DomainError::Persistence(_)) => "persistence_error",
            Self::Unauthorized(_) => "unauthorized",
            Self::Configuration(_) => "config_error",
            Self::Upstream { .. } => "upstream_error",
            Self::GenerationFailed(_) => "generation_failed",
            Self::PersistenceFailed(_) => "persistence_failed",
            Self::Infrastructure(_) => "internal_error",
        }
    }

    /// Validation and auth failures are the caller's to fix and are never
    /// folded into a generic generation failure.
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::Unauthorized(_)
                | Self::NotFound(_)
                | Self::Domain(DomainError::Validation(_) | DomainError::NotFound(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_slug_has_its_own_code() {
        let err = ApplicationError::from(DomainError::DuplicateSlug("hello".into()));
        assert_eq!(err.code(), "slug_exists");
    }

    #[test]
    fn upstream_message_includes_status_when_known() {
        let err = ApplicationError::upstream(Some(502), "bad gateway");
        assert_eq!(err.to_string(), "upstream error (status 502): bad gateway");
        let err = ApplicationError::upstream(None, "connection reset");
        assert_eq!(err.to_string(), "upstream error: connection reset");
    }

    #[test]
    fn caller_errors_are_classified() {
        assert!(ApplicationError::unauthorized("no session").is_caller_error());
        assert!(!ApplicationError::upstream(None, "x").is_caller_error());
    }
}
