use super::PostCommandService;
use crate::{
    application::{
        dto::{PostDto, SessionState},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostContent, PostExcerpt, PostId, PostTitle, PostUpdate},
};

/// Partial update. `None` fields are left as they are; for the SEO pair a
/// blank string clears the column.
#[derive(Debug)]
pub struct UpdatePostCommand {
    pub id: PostId,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub published: Option<bool>,
}

fn clearable(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        session: &SessionState,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        session.ensure_authenticated()?;

        let existing = self
            .read_repo
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let UpdatePostCommand {
            id,
            title,
            slug,
            content,
            excerpt,
            seo_title,
            seo_description,
            published,
        } = command;

        let mut update = PostUpdate::new(id, self.clock.now());

        if let Some(title) = title {
            update = update.with_title(PostTitle::new(title)?);
        }
        if let Some(slug) = slug {
            if slug.trim().is_empty() {
                return Err(ApplicationError::validation("slug cannot be blank"));
            }
            let slug = self.slug_service.normalize(&slug)?;
            if slug != existing.slug {
                self.slug_service.ensure_available(&slug, Some(id)).await?;
                update = update.with_slug(slug);
            }
        }
        if let Some(content) = content {
            update = update.with_content(PostContent::required(content)?);
        }
        if let Some(excerpt) = excerpt {
            update = update.with_excerpt(PostExcerpt::new(excerpt));
        }
        if let Some(seo_title) = seo_title {
            update = update.with_seo_title(clearable(seo_title));
        }
        if let Some(seo_description) = seo_description {
            update = update.with_seo_description(clearable(seo_description));
        }
        if let Some(published) = published {
            update = update.with_published(published);
        }

        if update.is_empty() {
            return Ok(existing.into());
        }

        let updated = self.write_repo.update_fields(update).await?;
        if updated.slug != existing.slug {
            self.invalidate(&existing).await;
        }
        self.invalidate(&updated).await;
        Ok(updated.into())
    }
}
