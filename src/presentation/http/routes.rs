// src/presentation/http/routes.rs
use crate::presentation::http::state::HttpState;
use crate::presentation::http::{
    controllers::{ai, auth, posts, public},
    middleware::admin_gate,
    openapi::{self, StatusResponse},
};
use axum::{
    Extension, Router,
    http::{HeaderValue, Method},
    middleware::from_fn,
    routing::{get, post},
};
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

pub fn build_router(state: HttpState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/openapi.json", get(openapi::serve_openapi))
        .merge(public_routes())
        .merge(session_routes())
        .merge(admin_routes())
        .merge(ai_routes())
        .layer(from_fn(admin_gate))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(allowed_origins))
        .layer(Extension(state))
}

fn public_routes() -> Router {
    Router::new()
        .route("/api/posts", get(public::list_published))
        .route("/api/posts/{slug}", get(public::get_published_post))
        .route(
            "/api/posts/{slug}/translations/{locale}",
            get(public::get_localized_post),
        )
}

fn session_routes() -> Router {
    Router::new()
        .route("/admin/login", get(auth::login_page).post(auth::login))
        .route("/admin/logout", post(auth::logout))
}

fn admin_routes() -> Router {
    Router::new()
        .route("/admin", get(posts::dashboard))
        .route("/admin/api/stats", get(posts::stats))
        .route(
            "/admin/api/posts",
            get(posts::list_posts).post(posts::create_post),
        )
        .route(
            "/admin/api/posts/{id}",
            get(posts::get_post)
                .patch(posts::update_post)
                .delete(posts::delete_post),
        )
        .route(
            "/admin/api/posts/{id}/publish",
            post(posts::set_publish_state),
        )
}

fn ai_routes() -> Router {
    Router::new()
        .route("/admin/api/ai/excerpt", post(ai::excerpt))
        .route("/admin/api/ai/seo-title", post(ai::seo_title))
        .route("/admin/api/ai/seo", post(ai::seo))
        .route("/admin/api/ai/rewrite", post(ai::rewrite))
        .route("/admin/api/ai/draft", post(ai::draft))
        .route("/admin/api/posts/{id}/excerpt", post(ai::post_excerpt))
        .route("/admin/api/posts/{id}/seo-title", post(ai::post_seo_title))
        .route("/admin/api/posts/{id}/seo", post(ai::post_seo))
        .route("/admin/api/posts/{id}/rewrite", post(ai::post_rewrite))
        .route("/admin/api/posts/{id}/content", post(ai::post_content))
        .route(
            "/admin/api/posts/{id}/translations/{locale}/content",
            post(ai::translate_content),
        )
        .route(
            "/admin/api/posts/{id}/translations/{locale}/excerpt",
            post(ai::translate_excerpt),
        )
        .route("/admin/api/posts/{id}/seo/{locale}", post(ai::localized_seo))
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health check.", body = crate::presentation::http::openapi::StatusResponse)
    ),
    tag = "System"
)]
pub async fn health() -> axum::Json<StatusResponse> {
    axum::Json(StatusResponse {
        status: "ok".into(),
    })
}
