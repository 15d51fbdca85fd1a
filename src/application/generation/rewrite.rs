use super::{ContentGenerationService, prompts::Prompt};
use crate::{
    application::{
        dto::SessionState,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostContent, PostId},
};

impl ContentGenerationService {
    /// Rewrite `content` following `instruction`. An empty answer returns the
    /// content unchanged.
    pub async fn rewrite_content(
        &self,
        session: &SessionState,
        content: &str,
        instruction: &str,
    ) -> ApplicationResult<String> {
        session.ensure_authenticated()?;
        let content = PostContent::required(content)?;
        let instruction = instruction.trim();
        if instruction.is_empty() {
            return Err(ApplicationError::validation("instruction is required"));
        }

        let prompt = Prompt::rewrite(content.as_str(), instruction);
        self.rewrite_with(prompt, content, "Failed to rewrite content")
            .await
    }

    /// Rewrite and store the post body. Without an instruction the text is
    /// made clearer and more professional with its structure kept.
    pub async fn rewrite_post(
        &self,
        session: &SessionState,
        post_id: PostId,
        content: &str,
        instruction: Option<&str>,
    ) -> ApplicationResult<String> {
        session.ensure_authenticated()?;
        let content = PostContent::required(content)?;
        let prompt = match instruction.map(str::trim).filter(|value| !value.is_empty()) {
            Some(instruction) => Prompt::rewrite(content.as_str(), instruction),
            None => Prompt::polish(content.as_str()),
        };

        let rewritten = self
            .rewrite_with(prompt, content, "Failed to rewrite post content")
            .await?;
        let update = self
            .update(post_id)
            .with_content(PostContent::new(rewritten.clone()));
        self.persist(update, "Failed to update content").await?;
        Ok(rewritten)
    }

    async fn rewrite_with(
        &self,
        prompt: Prompt,
        original: PostContent,
        message: &str,
    ) -> ApplicationResult<String> {
        let text = self
            .complete(prompt)
            .await
            .map_err(|err| self.generation_failed(err, message))?;
        if text.is_empty() {
            Ok(original.into_inner())
        } else {
            Ok(text)
        }
    }
}
