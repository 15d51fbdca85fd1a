use crate::application::{
    dto::{LocalizedPostDto, PublicPostDto},
    queries::posts::{GetLocalizedPostQuery, GetPublishedPostQuery},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};

use super::parse_locale;

#[utoipa::path(
    get,
    path = "/api/posts",
    responses(
        (status = 200, description = "Published posts, newest first.", body = [PublicPostDto])
    ),
    tag = "Blog"
)]
pub async fn list_published(Extension(state): Extension<HttpState>) -> Json<Vec<PublicPostDto>> {
    Json(state.services.post_queries.list_published().await)
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug; normalized before lookup")),
    responses(
        (status = 200, description = "Published post.", body = PublicPostDto),
        (status = 404, description = "Unknown or unpublished.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Blog"
)]
pub async fn get_published_post(
    Extension(state): Extension<HttpState>,
    Path(slug): Path<String>,
) -> HttpResult<Json<PublicPostDto>> {
    state
        .services
        .post_queries
        .get_published_post(GetPublishedPostQuery { slug })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}/translations/{locale}",
    params(
        ("slug" = String, Path, description = "Post slug"),
        ("locale" = String, Path, description = "`en` or `ru`")
    ),
    responses(
        (status = 200, description = "Cached locale view; absent fields were never generated.", body = LocalizedPostDto),
        (status = 404, description = "Unknown or unpublished.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Blog"
)]
pub async fn get_localized_post(
    Extension(state): Extension<HttpState>,
    Path((slug, locale)): Path<(String, String)>,
) -> HttpResult<Json<LocalizedPostDto>> {
    let locale = parse_locale(&locale).into_http()?;
    state
        .services
        .post_queries
        .get_localized_post(GetLocalizedPostQuery { slug, locale })
        .await
        .into_http()
        .map(Json)
}
