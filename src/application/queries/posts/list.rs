use super::PostQueryService;
use crate::application::{
    dto::{PostDto, PublicPostDto, SessionState},
    error::ApplicationResult,
};

impl PostQueryService {
    /// Every post, drafts included, newest first.
    pub async fn list_posts(&self, session: &SessionState) -> ApplicationResult<Vec<PostDto>> {
        session.ensure_authenticated()?;
        let posts = self.read_repo.list(true).await?;
        Ok(posts.into_iter().map(Into::into).collect())
    }

    /// Published posts, newest first. A failing store yields an empty list.
    pub async fn list_published(&self) -> Vec<PublicPostDto> {
        match self.read_repo.list(false).await {
            Ok(posts) => posts.into_iter().map(Into::into).collect(),
            Err(err) => {
                tracing::warn!(error = %err, "listing published posts failed");
                Vec::new()
            }
        }
    }
}
