use std::sync::Arc;

use crate::{
    application::error::{ApplicationError, ApplicationResult},
    domain::{
        errors::DomainError,
        post::{Post, PostReadRepository, services::PostSlugService},
    },
};

pub struct PostQueryService {
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
}

impl PostQueryService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, slug_service: Arc<PostSlugService>) -> Self {
        Self {
            read_repo,
            slug_service,
        }
    }

    /// Resolve a public slug to a published post. Drafts, unknown slugs and
    /// input that normalizes to nothing all read as "not found".
    pub(super) async fn find_published(&self, raw_slug: &str) -> ApplicationResult<Post> {
        let slug = match self.slug_service.normalize(raw_slug) {
            Ok(slug) => slug,
            Err(DomainError::Validation(_)) => {
                return Err(ApplicationError::not_found("post not found"));
            }
            Err(other) => return Err(other.into()),
        };

        self.read_repo
            .find_by_slug(&slug)
            .await?
            .filter(|post| post.published)
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }
}
