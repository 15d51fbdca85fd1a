use axum::http::HeaderMap;
use headers::{Cookie, HeaderMapExt};

use crate::application::dto::{SESSION_SENTINEL, SessionState};

pub const SESSION_COOKIE: &str = "admin-auth";
pub const SESSION_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 7;
pub const LOGIN_PATH: &str = "/admin/login";
pub const ADMIN_HOME: &str = "/admin";

/// `Set-Cookie` value that starts an admin session.
pub fn issue_cookie(secure: bool) -> String {
    let mut cookie = format!(
        "{SESSION_COOKIE}={SESSION_SENTINEL}; Path=/; HttpOnly; SameSite=Lax; Max-Age={SESSION_MAX_AGE_SECS}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// `Set-Cookie` value that drops the session immediately.
pub fn revoke_cookie() -> String {
    format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0")
}

pub fn session_from_headers(headers: &HeaderMap) -> SessionState {
    let cookie = headers.typed_get::<Cookie>();
    SessionState::from_marker(cookie.as_ref().and_then(|c| c.get(SESSION_COOKIE)))
}

/// Paths the admin gate protects: `/admin` and everything below it except
/// the login page.
pub fn is_gated_path(path: &str) -> bool {
    if path == LOGIN_PATH {
        return false;
    }
    path == ADMIN_HOME || path.starts_with("/admin/")
}

/// Accept only site-relative redirect targets; anything else goes to the
/// admin home.
pub fn safe_redirect_target(target: Option<&str>) -> String {
    match target.map(str::trim) {
        Some(path) if path.starts_with('/') && !path.starts_with("//") && !path.contains('\\') => {
            path.to_owned()
        }
        _ => ADMIN_HOME.to_owned(),
    }
}

/// Login page URL carrying the original target and an optional error code.
pub fn login_url(redirect: Option<&str>, error: Option<&str>) -> String {
    let mut params: Vec<(&str, &str)> = Vec::new();
    if let Some(target) = redirect {
        params.push(("redirect", target));
    }
    if let Some(code) = error {
        params.push(("error", code));
    }
    match serde_urlencoded::to_string(&params) {
        Ok(query) if !query.is_empty() => format!("{LOGIN_PATH}?{query}"),
        _ => LOGIN_PATH.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn issued_cookie_has_required_attributes() {
        let cookie = issue_cookie(false);
        assert!(cookie.starts_with("admin-auth=authenticated;"));
        for attr in ["Path=/", "HttpOnly", "SameSite=Lax", "Max-Age=604800"] {
            assert!(cookie.contains(attr), "missing {attr}");
        }
        assert!(!cookie.contains("Secure"));
        assert!(issue_cookie(true).ends_with("; Secure"));
        assert!(revoke_cookie().contains("Max-Age=0"));
    }

    #[test]
    fn session_requires_exact_marker() {
        let mut headers = HeaderMap::new();
        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("theme=dark; admin-auth=authenticated"),
        );
        assert!(session_from_headers(&headers).is_authenticated());

        headers.insert(
            axum::http::header::COOKIE,
            HeaderValue::from_static("admin-auth=yes"),
        );
        assert!(!session_from_headers(&headers).is_authenticated());
        assert!(!session_from_headers(&HeaderMap::new()).is_authenticated());
    }

    #[test]
    fn gate_covers_admin_tree_except_login() {
        assert!(is_gated_path("/admin"));
        assert!(is_gated_path("/admin/posts/1/edit"));
        assert!(is_gated_path("/admin/api/posts"));
        assert!(!is_gated_path("/admin/login"));
        assert!(!is_gated_path("/administrator"));
        assert!(!is_gated_path("/blog"));
    }

    #[test]
    fn redirect_targets_stay_on_site() {
        assert_eq!(safe_redirect_target(Some("/admin/posts")), "/admin/posts");
        assert_eq!(safe_redirect_target(Some("https://evil.example")), "/admin");
        assert_eq!(safe_redirect_target(Some("//evil.example")), "/admin");
        assert_eq!(safe_redirect_target(None), "/admin");
    }

    #[test]
    fn login_url_encodes_parameters() {
        assert_eq!(
            login_url(Some("/admin/posts"), Some("invalid_password")),
            "/admin/login?redirect=%2Fadmin%2Fposts&error=invalid_password"
        );
        assert_eq!(login_url(None, None), "/admin/login");
    }
}
