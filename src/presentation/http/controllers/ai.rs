//! JSON endpoints over the content generation services. Every route sits
//! under `/admin/api` and needs an admin session.

use crate::application::dto::SeoMetadataDto;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Session;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{parse_locale, parse_post_id};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GeneratedText {
    pub text: String,
}

impl From<String> for GeneratedText {
    fn from(text: String) -> Self {
        Self { text }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ContentRequest {
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TitleRequest {
    pub title: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TitleContentRequest {
    pub title: String,
    #[serde(default)]
    pub content: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct RewriteRequest {
    pub content: String,
    #[serde(default)]
    pub instruction: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ExcerptRequest {
    #[serde(default)]
    pub excerpt: String,
}

#[utoipa::path(
    post,
    path = "/admin/api/ai/excerpt",
    request_body = ContentRequest,
    responses((status = 200, description = "Generated excerpt (max 300 chars).", body = GeneratedText)),
    tag = "AI"
)]
pub async fn excerpt(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Json(payload): Json<ContentRequest>,
) -> HttpResult<Json<GeneratedText>> {
    state
        .services
        .generation
        .generate_excerpt(&session, &payload.content)
        .await
        .into_http()
        .map(|text| Json(text.into()))
}

#[utoipa::path(
    post,
    path = "/admin/api/ai/seo-title",
    request_body = TitleContentRequest,
    responses((status = 200, description = "SEO title suggestion.", body = GeneratedText)),
    tag = "AI"
)]
pub async fn seo_title(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Json(payload): Json<TitleContentRequest>,
) -> HttpResult<Json<GeneratedText>> {
    state
        .services
        .generation
        .generate_seo_title(&session, &payload.title, &payload.content)
        .await
        .into_http()
        .map(|text| Json(text.into()))
}

#[utoipa::path(
    post,
    path = "/admin/api/ai/seo",
    request_body = TitleContentRequest,
    responses((status = 200, description = "SEO title and description.", body = SeoMetadataDto)),
    tag = "AI"
)]
pub async fn seo(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Json(payload): Json<TitleContentRequest>,
) -> HttpResult<Json<SeoMetadataDto>> {
    state
        .services
        .generation
        .generate_seo(&session, &payload.title, &payload.content)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/api/ai/rewrite",
    request_body = RewriteRequest,
    responses((status = 200, description = "Rewritten content.", body = GeneratedText)),
    tag = "AI"
)]
pub async fn rewrite(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Json(payload): Json<RewriteRequest>,
) -> HttpResult<Json<GeneratedText>> {
    let instruction = payload.instruction.unwrap_or_default();
    state
        .services
        .generation
        .rewrite_content(&session, &payload.content, &instruction)
        .await
        .into_http()
        .map(|text| Json(text.into()))
}

#[utoipa::path(
    post,
    path = "/admin/api/ai/draft",
    request_body = TitleRequest,
    responses((status = 200, description = "Full post draft, not stored.", body = GeneratedText)),
    tag = "AI"
)]
pub async fn draft(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Json(payload): Json<TitleRequest>,
) -> HttpResult<Json<GeneratedText>> {
    state
        .services
        .generation
        .draft_post(&session, &payload.title)
        .await
        .into_http()
        .map(|text| Json(text.into()))
}

#[utoipa::path(
    post,
    path = "/admin/api/posts/{id}/excerpt",
    params(("id" = String, Path, description = "Post id")),
    request_body = ContentRequest,
    responses((status = 200, description = "Excerpt generated and stored.", body = GeneratedText)),
    tag = "AI"
)]
pub async fn post_excerpt(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Path(id): Path<String>,
    Json(payload): Json<ContentRequest>,
) -> HttpResult<Json<GeneratedText>> {
    let id = parse_post_id(&id).into_http()?;
    state
        .services
        .generation
        .generate_excerpt_for_post(&session, id, &payload.content)
        .await
        .into_http()
        .map(|text| Json(text.into()))
}

#[utoipa::path(
    post,
    path = "/admin/api/posts/{id}/seo-title",
    params(("id" = String, Path, description = "Post id")),
    request_body = TitleContentRequest,
    responses((status = 200, description = "SEO title generated and stored.", body = GeneratedText)),
    tag = "AI"
)]
pub async fn post_seo_title(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Path(id): Path<String>,
    Json(payload): Json<TitleContentRequest>,
) -> HttpResult<Json<GeneratedText>> {
    let id = parse_post_id(&id).into_http()?;
    state
        .services
        .generation
        .generate_seo_title_for_post(&session, id, &payload.title, &payload.content)
        .await
        .into_http()
        .map(|text| Json(text.into()))
}

#[utoipa::path(
    post,
    path = "/admin/api/posts/{id}/seo",
    params(("id" = String, Path, description = "Post id")),
    request_body = TitleContentRequest,
    responses((status = 200, description = "Default SEO pair generated and stored.", body = SeoMetadataDto)),
    tag = "AI"
)]
pub async fn post_seo(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Path(id): Path<String>,
    Json(payload): Json<TitleContentRequest>,
) -> HttpResult<Json<SeoMetadataDto>> {
    let id = parse_post_id(&id).into_http()?;
    state
        .services
        .generation
        .generate_seo_for_post(&session, id, &payload.title, &payload.content)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/api/posts/{id}/rewrite",
    params(("id" = String, Path, description = "Post id")),
    request_body = RewriteRequest,
    responses((status = 200, description = "Content rewritten and stored.", body = GeneratedText)),
    tag = "AI"
)]
pub async fn post_rewrite(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Path(id): Path<String>,
    Json(payload): Json<RewriteRequest>,
) -> HttpResult<Json<GeneratedText>> {
    let id = parse_post_id(&id).into_http()?;
    state
        .services
        .generation
        .rewrite_post(&session, id, &payload.content, payload.instruction.as_deref())
        .await
        .into_http()
        .map(|text| Json(text.into()))
}

#[utoipa::path(
    post,
    path = "/admin/api/posts/{id}/content",
    params(("id" = String, Path, description = "Post id")),
    request_body = TitleRequest,
    responses(
        (status = 200, description = "Draft generated and stored as content.", body = GeneratedText),
        (status = 502, description = "Model returned nothing.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "AI"
)]
pub async fn post_content(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Path(id): Path<String>,
    Json(payload): Json<TitleRequest>,
) -> HttpResult<Json<GeneratedText>> {
    let id = parse_post_id(&id).into_http()?;
    state
        .services
        .generation
        .generate_post_content(&session, id, &payload.title)
        .await
        .into_http()
        .map(|text| Json(text.into()))
}

#[utoipa::path(
    post,
    path = "/admin/api/posts/{id}/translations/{locale}/content",
    params(
        ("id" = String, Path, description = "Post id"),
        ("locale" = String, Path, description = "`en` or `ru`")
    ),
    request_body = ContentRequest,
    responses((status = 200, description = "Translated content, cached per locale.", body = GeneratedText)),
    tag = "AI"
)]
pub async fn translate_content(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Path((id, locale)): Path<(String, String)>,
    Json(payload): Json<ContentRequest>,
) -> HttpResult<Json<GeneratedText>> {
    let id = parse_post_id(&id).into_http()?;
    let locale = parse_locale(&locale).into_http()?;
    state
        .services
        .generation
        .translate_content(&session, id, &payload.content, locale)
        .await
        .into_http()
        .map(|text| Json(text.into()))
}

#[utoipa::path(
    post,
    path = "/admin/api/posts/{id}/translations/{locale}/excerpt",
    params(
        ("id" = String, Path, description = "Post id"),
        ("locale" = String, Path, description = "`en` or `ru`")
    ),
    request_body = ExcerptRequest,
    responses((status = 200, description = "Translated excerpt, cached per locale.", body = GeneratedText)),
    tag = "AI"
)]
pub async fn translate_excerpt(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Path((id, locale)): Path<(String, String)>,
    Json(payload): Json<ExcerptRequest>,
) -> HttpResult<Json<GeneratedText>> {
    let id = parse_post_id(&id).into_http()?;
    let locale = parse_locale(&locale).into_http()?;
    state
        .services
        .generation
        .translate_excerpt(&session, id, &payload.excerpt, locale)
        .await
        .into_http()
        .map(|text| Json(text.into()))
}

#[utoipa::path(
    post,
    path = "/admin/api/posts/{id}/seo/{locale}",
    params(
        ("id" = String, Path, description = "Post id"),
        ("locale" = String, Path, description = "`en` or `ru`")
    ),
    request_body = TitleContentRequest,
    responses((status = 200, description = "Locale SEO pair, cached per locale.", body = SeoMetadataDto)),
    tag = "AI"
)]
pub async fn localized_seo(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Path((id, locale)): Path<(String, String)>,
    Json(payload): Json<TitleContentRequest>,
) -> HttpResult<Json<SeoMetadataDto>> {
    let id = parse_post_id(&id).into_http()?;
    let locale = parse_locale(&locale).into_http()?;
    state
        .services
        .generation
        .localized_seo(&session, id, &payload.title, &payload.content, locale)
        .await
        .into_http()
        .map(Json)
}
