use crate::application::{
    commands::posts::{
        CreatePostCommand, DeletePostCommand, SetPublishStateCommand, UpdatePostCommand,
    },
    dto::{PostDto, PostStatsDto},
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::Session;
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, extract::Path, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

use super::parse_post_id;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePostRequest {
    pub title: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub seo_title: Option<String>,
    #[serde(default)]
    pub seo_description: Option<String>,
    #[serde(default)]
    pub published: bool,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub published: Option<bool>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct PublishRequest {
    pub publish: bool,
}

#[utoipa::path(
    get,
    path = "/admin",
    description = "Admin dashboard and the default redirect target after login. \
                   Returns the same counts as `/admin/api/stats`.",
    responses((status = 200, description = "Dashboard post counts.", body = PostStatsDto)),
    tag = "Admin"
)]
pub async fn dashboard(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
) -> HttpResult<Json<PostStatsDto>> {
    stats(Extension(state), Session(session)).await
}

#[utoipa::path(
    get,
    path = "/admin/api/stats",
    responses((status = 200, description = "Post counts.", body = PostStatsDto)),
    tag = "Admin"
)]
pub async fn stats(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
) -> HttpResult<Json<PostStatsDto>> {
    state
        .services
        .post_queries
        .post_stats(&session)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/admin/api/posts",
    responses((status = 200, description = "All posts, drafts included, newest first.", body = [PostDto])),
    tag = "Admin"
)]
pub async fn list_posts(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
) -> HttpResult<Json<Vec<PostDto>>> {
    state
        .services
        .post_queries
        .list_posts(&session)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/admin/api/posts/{id}",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 200, description = "Post with cached locale columns.", body = PostDto),
        (status = 404, description = "No such post.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Admin"
)]
pub async fn get_post(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Path(id): Path<String>,
) -> HttpResult<Json<PostDto>> {
    let id = parse_post_id(&id).into_http()?;
    state
        .services
        .post_queries
        .get_post_by_id(&session, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    post,
    path = "/admin/api/posts",
    request_body = CreatePostRequest,
    responses(
        (status = 201, description = "Post created.", body = PostDto),
        (status = 409, description = "Slug already taken.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Admin"
)]
pub async fn create_post(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Json(payload): Json<CreatePostRequest>,
) -> HttpResult<(StatusCode, Json<PostDto>)> {
    let command = CreatePostCommand {
        title: payload.title,
        slug: payload.slug,
        content: payload.content,
        excerpt: payload.excerpt,
        seo_title: payload.seo_title,
        seo_description: payload.seo_description,
        published: payload.published,
    };
    let post = state
        .services
        .post_commands
        .create_post(&session, command)
        .await
        .into_http()?;
    Ok((StatusCode::CREATED, Json(post)))
}

#[utoipa::path(
    patch,
    path = "/admin/api/posts/{id}",
    params(("id" = String, Path, description = "Post id")),
    request_body = UpdatePostRequest,
    responses((status = 200, description = "Post updated.", body = PostDto)),
    tag = "Admin"
)]
pub async fn update_post(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Path(id): Path<String>,
    Json(payload): Json<UpdatePostRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = UpdatePostCommand {
        id: parse_post_id(&id).into_http()?,
        title: payload.title,
        slug: payload.slug,
        content: payload.content,
        excerpt: payload.excerpt,
        seo_title: payload.seo_title,
        seo_description: payload.seo_description,
        published: payload.published,
    };
    state
        .services
        .post_commands
        .update_post(&session, command)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/admin/api/posts/{id}",
    params(("id" = String, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted."),
        (status = 404, description = "No such post.", body = crate::presentation::http::error::ErrorBody)
    ),
    tag = "Admin"
)]
pub async fn delete_post(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Path(id): Path<String>,
) -> HttpResult<StatusCode> {
    let id = parse_post_id(&id).into_http()?;
    state
        .services
        .post_commands
        .delete_post(&session, DeletePostCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/admin/api/posts/{id}/publish",
    params(("id" = String, Path, description = "Post id")),
    request_body = PublishRequest,
    responses((status = 200, description = "Publish state set.", body = PostDto)),
    tag = "Admin"
)]
pub async fn set_publish_state(
    Extension(state): Extension<HttpState>,
    Session(session): Session,
    Path(id): Path<String>,
    Json(payload): Json<PublishRequest>,
) -> HttpResult<Json<PostDto>> {
    let command = SetPublishStateCommand {
        id: parse_post_id(&id).into_http()?,
        publish: payload.publish,
    };
    state
        .services
        .post_commands
        .set_publish_state(&session, command)
        .await
        .into_http()
        .map(Json)
}
