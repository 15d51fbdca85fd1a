use super::{ContentGenerationService, prompts::Prompt};
use crate::{
    application::{dto::SessionState, error::ApplicationResult},
    domain::post::{Locale, LocalizedField, PostContent, PostId},
};

impl ContentGenerationService {
    /// Translate post content into `locale`, reusing the cached translation
    /// when the column is already populated.
    pub async fn translate_content(
        &self,
        session: &SessionState,
        post_id: PostId,
        content: &str,
        locale: Locale,
    ) -> ApplicationResult<String> {
        session.ensure_authenticated()?;
        let content = PostContent::required(content)?;
        self.translate_field(
            post_id,
            locale,
            LocalizedField::TranslatedContent,
            Prompt::translate_content(content.as_str(), locale),
            content.into_inner(),
        )
        .await
    }

    /// Translate an excerpt. A blank excerpt is returned as given.
    pub async fn translate_excerpt(
        &self,
        session: &SessionState,
        post_id: PostId,
        excerpt: &str,
        locale: Locale,
    ) -> ApplicationResult<String> {
        session.ensure_authenticated()?;
        if excerpt.trim().is_empty() {
            return Ok(excerpt.to_owned());
        }
        let excerpt = excerpt.trim();
        self.translate_field(
            post_id,
            locale,
            LocalizedField::TranslatedExcerpt,
            Prompt::translate_excerpt(excerpt, locale),
            excerpt.to_owned(),
        )
        .await
    }

    async fn translate_field(
        &self,
        post_id: PostId,
        locale: Locale,
        field: LocalizedField,
        prompt: Prompt,
        source: String,
    ) -> ApplicationResult<String> {
        let cached = self
            .cache
            .get(post_id, locale, field)
            .await
            .map_err(|err| self.persistence_failed(err, "Failed to load translation"))?;
        if let Some(cached) = cached {
            tracing::debug!(post_id = %post_id, %locale, column = field.column(locale), "translation cache hit");
            return Ok(cached);
        }

        let text = self
            .complete(prompt)
            .await
            .map_err(|err| self.generation_failed(err, "Failed to translate post"))?;
        let translated = if text.is_empty() { source } else { text };

        let populated = self
            .cache
            .populate(post_id, locale, vec![(field, translated)])
            .await
            .map_err(|err| self.persistence_failed(err, "Failed to save translation"))?;
        if let Some(post) = &populated.written {
            self.invalidate(post).await;
        }
        Ok(populated.values.into_iter().next().unwrap_or_default())
    }
}
