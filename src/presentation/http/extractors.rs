// src/presentation/http/extractors.rs
use std::convert::Infallible;

use axum::{extract::FromRequestParts, http::request::Parts};

use super::session::session_from_headers;
use crate::application::dto::SessionState;

/// The caller's session as read from the `admin-auth` cookie. Never rejects;
/// services decide whether an anonymous caller may proceed.
#[derive(Debug, Clone, Copy)]
pub struct Session(pub SessionState);

impl<S> FromRequestParts<S> for Session
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(session_from_headers(&parts.headers)))
    }
}
