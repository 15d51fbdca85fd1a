use crate::application::{ApplicationResult, error::ApplicationError};
use crate::domain::errors::DomainError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    code: &'static str,
    message: String,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        let code = err.code();
        let status = status_for(&err);
        let message = if status.is_server_error() {
            tracing::error!(error = %err, code, "request failed");
            public_message(err)
        } else {
            err.to_string()
        };
        Self {
            status,
            code,
            message,
        }
    }

    pub const fn status(&self) -> StatusCode {
        self.status
    }

    pub const fn code(&self) -> &'static str {
        self.code
    }
}

const fn status_for(err: &ApplicationError) -> StatusCode {
    match err {
        ApplicationError::Validation(_) | ApplicationError::Domain(DomainError::Validation(_)) => {
            StatusCode::BAD_REQUEST
        }
        ApplicationError::Domain(DomainError::DuplicateSlug(_) | DomainError::Conflict(_)) => {
            StatusCode::CONFLICT
        }
        ApplicationError::NotFound(_) | ApplicationError::Domain(DomainError::NotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        ApplicationError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        ApplicationError::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
        ApplicationError::Upstream { .. } | ApplicationError::GenerationFailed(_) => {
            StatusCode::BAD_GATEWAY
        }
        ApplicationError::PersistenceFailed(_)
        | ApplicationError::Domain(DomainError::Persistence(_))
        | ApplicationError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Server-side failures expose only their human-readable summary; raw
/// transport and database detail stays in the log.
fn public_message(err: ApplicationError) -> String {
    match err {
        ApplicationError::GenerationFailed(msg) | ApplicationError::PersistenceFailed(msg) => msg,
        ApplicationError::Configuration(_) => "Server configuration error".into(),
        ApplicationError::Upstream { .. } => "Upstream service failed".into(),
        _ => "Internal server error".into(),
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let payload = ErrorBody {
            error: self
                .status
                .canonical_reason()
                .unwrap_or("error")
                .to_string(),
            code: self.code.to_string(),
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}

impl From<ApplicationError> for HttpError {
    fn from(err: ApplicationError) -> Self {
        Self::from_error(err)
    }
}
