// src/presentation/http/openapi.rs
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::public::list_published,
        crate::presentation::http::controllers::public::get_published_post,
        crate::presentation::http::controllers::public::get_localized_post,
        crate::presentation::http::controllers::posts::dashboard,
        crate::presentation::http::controllers::posts::stats,
        crate::presentation::http::controllers::posts::list_posts,
        crate::presentation::http::controllers::posts::get_post,
        crate::presentation::http::controllers::posts::create_post,
        crate::presentation::http::controllers::posts::update_post,
        crate::presentation::http::controllers::posts::delete_post,
        crate::presentation::http::controllers::posts::set_publish_state,
        crate::presentation::http::controllers::ai::excerpt,
        crate::presentation::http::controllers::ai::seo_title,
        crate::presentation::http::controllers::ai::seo,
        crate::presentation::http::controllers::ai::rewrite,
        crate::presentation::http::controllers::ai::draft,
        crate::presentation::http::controllers::ai::post_excerpt,
        crate::presentation::http::controllers::ai::post_seo_title,
        crate::presentation::http::controllers::ai::post_seo,
        crate::presentation::http::controllers::ai::post_rewrite,
        crate::presentation::http::controllers::ai::post_content,
        crate::presentation::http::controllers::ai::translate_content,
        crate::presentation::http::controllers::ai::translate_excerpt,
        crate::presentation::http::controllers::ai::localized_seo,
        crate::presentation::http::controllers::auth::login_page,
        crate::presentation::http::controllers::auth::login,
        crate::presentation::http::controllers::auth::logout,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            crate::presentation::http::error::ErrorBody,
            crate::presentation::http::controllers::posts::CreatePostRequest,
            crate::presentation::http::controllers::posts::UpdatePostRequest,
            crate::presentation::http::controllers::posts::PublishRequest,
            crate::presentation::http::controllers::ai::GeneratedText,
            crate::presentation::http::controllers::ai::ContentRequest,
            crate::presentation::http::controllers::ai::TitleRequest,
            crate::presentation::http::controllers::ai::TitleContentRequest,
            crate::presentation::http::controllers::ai::RewriteRequest,
            crate::presentation::http::controllers::ai::ExcerptRequest,
            crate::presentation::http::controllers::auth::LoginPage,
            crate::presentation::http::controllers::auth::LoginForm,
            crate::application::dto::PostDto,
            crate::application::dto::PublicPostDto,
            crate::application::dto::LocalizedPostDto,
            crate::application::dto::LocaleVariantDto,
            crate::application::dto::PostStatsDto,
            crate::application::dto::SeoMetadataDto
        )
    ),
    tags(
        (name = "Blog", description = "Public read endpoints"),
        (name = "Admin", description = "Post management behind the admin session"),
        (name = "AI", description = "Completion-backed content generation"),
        (name = "Session", description = "Admin login and logout"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Inkpress API",
        description = "Blog CMS with AI-assisted authoring",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub async fn serve_openapi() -> axum::Json<utoipa::openapi::OpenApi> {
    axum::Json(ApiDoc::openapi())
}
