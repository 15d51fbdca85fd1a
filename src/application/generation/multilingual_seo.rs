use super::{ContentGenerationService, parse::parse_seo, prompts::Prompt};
use crate::{
    application::{
        dto::{SeoMetadataDto, SessionState},
        error::ApplicationResult,
    },
    domain::post::{Locale, LocalizedField, PostContent, PostId, PostTitle},
};

const SEO_FIELDS: [LocalizedField; 2] = [LocalizedField::SeoTitle, LocalizedField::SeoDescription];

impl ContentGenerationService {
    /// Locale-specific SEO pair. Served from the locale columns when both are
    /// populated; otherwise generated, parsed and cached. Unparseable model
    /// output still yields capped metadata.
    pub async fn localized_seo(
        &self,
        session: &SessionState,
        post_id: PostId,
        title: &str,
        content: &str,
        locale: Locale,
    ) -> ApplicationResult<SeoMetadataDto> {
        session.ensure_authenticated()?;
        let title = PostTitle::new(title)?;
        let content = PostContent::required(content)?;

        let cached = self
            .cache
            .get_all(post_id, locale, &SEO_FIELDS)
            .await
            .map_err(|err| self.persistence_failed(err, "Failed to load multilingual SEO"))?;
        if let Some(cached) = cached {
            let mut cached = cached.into_iter();
            return Ok(SeoMetadataDto {
                seo_title: cached.next().unwrap_or_default(),
                seo_description: cached.next().unwrap_or_default(),
            });
        }

        let text = self
            .complete(Prompt::localized_seo(title.as_str(), content.as_str(), locale))
            .await
            .map_err(|err| self.generation_failed(err, "Failed to generate multilingual SEO"))?;
        let seo = parse_seo(&text).finalize(title.as_str());

        let populated = self
            .cache
            .populate(
                post_id,
                locale,
                vec![
                    (LocalizedField::SeoTitle, seo.seo_title),
                    (LocalizedField::SeoDescription, seo.seo_description),
                ],
            )
            .await
            .map_err(|err| self.persistence_failed(err, "Failed to save multilingual SEO"))?;
        if let Some(post) = &populated.written {
            self.invalidate(post).await;
        }

        let mut values = populated.values.into_iter();
        Ok(SeoMetadataDto {
            seo_title: values.next().unwrap_or_default(),
            seo_description: values.next().unwrap_or_default(),
        })
    }
}
