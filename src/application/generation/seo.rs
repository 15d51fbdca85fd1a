use super::{ContentGenerationService, parse::parse_seo, prompts::Prompt};
use crate::{
    application::{
        dto::{SeoMetadataDto, SessionState},
        error::ApplicationResult,
    },
    domain::post::{PostContent, PostId, PostTitle},
};

impl ContentGenerationService {
    /// A single 50-60 character title. An empty answer yields the original title.
    pub async fn generate_seo_title(
        &self,
        session: &SessionState,
        title: &str,
        content: &str,
    ) -> ApplicationResult<String> {
        session.ensure_authenticated()?;
        let title = PostTitle::new(title)?;
        self.seo_title_for(title, content).await
    }

    pub async fn generate_seo_title_for_post(
        &self,
        session: &SessionState,
        post_id: PostId,
        title: &str,
        content: &str,
    ) -> ApplicationResult<String> {
        session.ensure_authenticated()?;
        let title = PostTitle::new(title)?;
        let seo_title = self.seo_title_for(title, content).await?;

        let update = self
            .update(post_id)
            .with_seo_title(Some(seo_title.clone()));
        self.persist(update, "Failed to update SEO title").await?;
        Ok(seo_title)
    }

    pub async fn generate_seo(
        &self,
        session: &SessionState,
        title: &str,
        content: &str,
    ) -> ApplicationResult<SeoMetadataDto> {
        session.ensure_authenticated()?;
        let title = PostTitle::new(title)?;
        let content = PostContent::required(content)?;
        self.seo_for(&title, &content).await
    }

    /// Generate the default SEO pair and store it on the post.
    pub async fn generate_seo_for_post(
        &self,
        session: &SessionState,
        post_id: PostId,
        title: &str,
        content: &str,
    ) -> ApplicationResult<SeoMetadataDto> {
        session.ensure_authenticated()?;
        let title = PostTitle::new(title)?;
        let content = PostContent::required(content)?;
        let seo = self.seo_for(&title, &content).await?;

        let update = self.update(post_id).with_seo(
            Some(seo.seo_title.clone()),
            Some(seo.seo_description.clone()),
        );
        self.persist(update, "Failed to update SEO fields").await?;
        Ok(seo)
    }

    async fn seo_for(
        &self,
        title: &PostTitle,
        content: &PostContent,
    ) -> ApplicationResult<SeoMetadataDto> {
        let text = self
            .complete(Prompt::seo_metadata(title.as_str(), content.as_str()))
            .await
            .map_err(|err| self.generation_failed(err, "Failed to generate SEO"))?;
        let parsed = parse_seo(&text);
        tracing::debug!(stage = parsed.stage(), "seo output parsed");
        Ok(parsed.finalize(title.as_str()))
    }

    async fn seo_title_for(&self, title: PostTitle, content: &str) -> ApplicationResult<String> {
        let text = self
            .complete(Prompt::seo_title(title.as_str(), content))
            .await
            .map_err(|err| self.generation_failed(err, "Failed to generate SEO title"))?;
        if text.is_empty() {
            Ok(title.into_inner())
        } else {
            Ok(text)
        }
    }
}
