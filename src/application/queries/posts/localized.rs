use super::PostQueryService;
use crate::{
    application::{dto::LocalizedPostDto, error::ApplicationResult},
    domain::post::Locale,
};

pub struct GetLocalizedPostQuery {
    pub slug: String,
    pub locale: Locale,
}

impl PostQueryService {
    /// Cached locale columns of a published post. Never triggers generation.
    pub async fn get_localized_post(
        &self,
        query: GetLocalizedPostQuery,
    ) -> ApplicationResult<LocalizedPostDto> {
        let post = self.find_published(&query.slug).await?;
        Ok(LocalizedPostDto::from_post(&post, query.locale))
    }
}
