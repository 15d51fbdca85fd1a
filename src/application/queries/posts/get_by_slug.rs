use super::PostQueryService;
use crate::application::{dto::PublicPostDto, error::ApplicationResult};

pub struct GetPublishedPostQuery {
    pub slug: String,
}

impl PostQueryService {
    pub async fn get_published_post(
        &self,
        query: GetPublishedPostQuery,
    ) -> ApplicationResult<PublicPostDto> {
        let post = self.find_published(&query.slug).await?;
        Ok(post.into())
    }
}
