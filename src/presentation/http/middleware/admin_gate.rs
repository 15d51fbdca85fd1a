use axum::{
    extract::Request,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};

use crate::presentation::http::session::{is_gated_path, login_url, session_from_headers};

/// Send anonymous visitors of gated admin paths to the login page, keeping
/// the requested path as the post-login target.
pub async fn admin_gate(request: Request, next: Next) -> Response {
    let path = request.uri().path();
    if is_gated_path(path) && !session_from_headers(request.headers()).is_authenticated() {
        tracing::debug!(%path, "anonymous admin request redirected to login");
        return Redirect::to(&login_url(Some(path), None)).into_response();
    }
    next.run(request).await
}
