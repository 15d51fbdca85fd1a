// src/domain/post/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{PostId, PostSlug, PostTitle};

/// Domain service responsible for deriving slugs and guarding their uniqueness.
pub struct PostSlugService {
    read_repo: Arc<dyn PostReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl PostSlugService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Normalize arbitrary input into a slug.
    pub fn normalize(&self, input: &str) -> DomainResult<PostSlug> {
        let slug = self.generator.slugify(input);
        if slug.is_empty() {
            return Err(DomainError::Validation(format!(
                "`{}` does not produce a usable slug",
                input.trim()
            )));
        }
        PostSlug::new(slug)
    }

    /// Explicit slug input wins over the title when it is non-blank.
    pub fn derive(&self, explicit: Option<&str>, title: &PostTitle) -> DomainResult<PostSlug> {
        match explicit.map(str::trim).filter(|value| !value.is_empty()) {
            Some(value) => self.normalize(value),
            None => self.normalize(title.as_str()),
        }
    }

    /// Fail with `DuplicateSlug` when another post already owns `slug`.
    pub async fn ensure_available(
        &self,
        slug: &PostSlug,
        ignore_id: Option<PostId>,
    ) -> DomainResult<()> {
        match self.read_repo.find_by_slug(slug).await? {
            Some(existing) if Some(existing.id) == ignore_id => Ok(()),
            Some(_) => Err(DomainError::DuplicateSlug(slug.to_string())),
            None => Ok(()),
        }
    }
}
