use super::{ContentGenerationService, prompts::Prompt};
use crate::{
    application::{
        dto::SessionState,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostContent, PostId, PostTitle},
};

const FAILED: &str = "Failed to generate post content";

impl ContentGenerationService {
    /// Draft a full 4-6 paragraph post for `title` without storing it.
    pub async fn draft_post(&self, session: &SessionState, title: &str) -> ApplicationResult<String> {
        session.ensure_authenticated()?;
        let title = PostTitle::new(title)?;
        self.draft_for(&title).await
    }

    /// Draft a post body and store it as the post's content. Only `content`
    /// is written; an empty answer fails without touching the post.
    pub async fn generate_post_content(
        &self,
        session: &SessionState,
        post_id: PostId,
        title: &str,
    ) -> ApplicationResult<String> {
        session.ensure_authenticated()?;
        let title = PostTitle::new(title)?;
        let draft = self.draft_for(&title).await?;

        let update = self
            .update(post_id)
            .with_content(PostContent::new(draft.clone()));
        self.persist(update, "Failed to update content").await?;
        Ok(draft)
    }

    async fn draft_for(&self, title: &PostTitle) -> ApplicationResult<String> {
        let text = self
            .complete(Prompt::full_post(title.as_str()))
            .await
            .map_err(|err| self.generation_failed(err, FAILED))?;
        if text.is_empty() {
            if self.settings.diagnostics {
                tracing::warn!(title = %title, "model returned an empty draft");
            }
            return Err(ApplicationError::generation_failed(FAILED));
        }
        Ok(text)
    }
}
