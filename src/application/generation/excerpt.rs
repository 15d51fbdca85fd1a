use super::{ContentGenerationService, prompts::Prompt};
use crate::{
    application::{dto::SessionState, error::ApplicationResult},
    domain::post::{PostContent, PostExcerpt, PostId},
};

impl ContentGenerationService {
    /// Two or three plain-text sentences, capped at 300 characters.
    pub async fn generate_excerpt(
        &self,
        session: &SessionState,
        content: &str,
    ) -> ApplicationResult<String> {
        session.ensure_authenticated()?;
        let content = PostContent::required(content)?;
        self.excerpt_for(&content).await
    }

    pub async fn generate_excerpt_for_post(
        &self,
        session: &SessionState,
        post_id: PostId,
        content: &str,
    ) -> ApplicationResult<String> {
        session.ensure_authenticated()?;
        let content = PostContent::required(content)?;
        let excerpt = self.excerpt_for(&content).await?;

        let update = self
            .update(post_id)
            .with_excerpt(PostExcerpt::new(excerpt.clone()));
        self.persist(update, "Failed to update excerpt").await?;
        Ok(excerpt)
    }

    async fn excerpt_for(&self, content: &PostContent) -> ApplicationResult<String> {
        let raw = self
            .complete(Prompt::excerpt(content.as_str()))
            .await
            .map_err(|err| self.generation_failed(err, "Failed to generate excerpt"))?;
        Ok(PostExcerpt::new(raw).into_inner())
    }
}
