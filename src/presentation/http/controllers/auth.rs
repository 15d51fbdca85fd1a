use crate::application::{commands::session::LoginCommand, error::ApplicationError};
use crate::presentation::http::session::{
    LOGIN_PATH, issue_cookie, login_url, revoke_cookie, safe_redirect_target,
};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Form, Json,
    extract::Query,
    http::header::SET_COOKIE,
    response::{IntoResponse, Redirect, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Deserialize, IntoParams)]
pub struct LoginPageParams {
    pub redirect: Option<String>,
    pub error: Option<String>,
}

/// What the login form needs to render.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginPage {
    pub redirect: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginForm {
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub redirect: Option<String>,
}

fn error_message(code: &str) -> Option<&'static str> {
    match code {
        "password_required" => Some("Password is required"),
        "invalid_password" => Some("Invalid password"),
        "config_error" => Some("Server configuration error"),
        _ => None,
    }
}

const fn login_error_code(err: &ApplicationError) -> &'static str {
    match err {
        ApplicationError::Validation(_) => "password_required",
        ApplicationError::Configuration(_) => "config_error",
        _ => "invalid_password",
    }
}

#[utoipa::path(
    get,
    path = "/admin/login",
    params(LoginPageParams),
    responses((status = 200, description = "Login form state.", body = LoginPage)),
    tag = "Session"
)]
pub async fn login_page(Query(params): Query<LoginPageParams>) -> Json<LoginPage> {
    let message = params
        .error
        .as_deref()
        .and_then(error_message)
        .map(str::to_owned);
    Json(LoginPage {
        redirect: safe_redirect_target(params.redirect.as_deref()),
        error: params.error,
        message,
    })
}

#[utoipa::path(
    post,
    path = "/admin/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Session issued, or back to the login page with an `error` code.")
    ),
    tag = "Session"
)]
pub async fn login(Extension(state): Extension<HttpState>, Form(form): Form<LoginForm>) -> Response {
    let target = safe_redirect_target(form.redirect.as_deref());
    let command = LoginCommand {
        password: form.password,
    };

    match state.services.session_commands.login(&command) {
        Ok(_) => (
            [(SET_COOKIE, issue_cookie(state.secure_cookies))],
            Redirect::to(&target),
        )
            .into_response(),
        Err(err) => {
            if matches!(err, ApplicationError::Configuration(_)) {
                tracing::error!(error = %err, "admin login unavailable");
            }
            let code = login_error_code(&err);
            Redirect::to(&login_url(Some(&target), Some(code))).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/admin/logout",
    responses((status = 303, description = "Session cleared; redirected to the login page.")),
    tag = "Session"
)]
pub async fn logout() -> Response {
    (
        [(SET_COOKIE, revoke_cookie())],
        Redirect::to(LOGIN_PATH),
    )
        .into_response()
}
