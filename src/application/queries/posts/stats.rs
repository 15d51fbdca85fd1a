use super::PostQueryService;
use crate::application::{
    dto::{PostStatsDto, SessionState},
    error::ApplicationResult,
};

impl PostQueryService {
    pub async fn post_stats(&self, session: &SessionState) -> ApplicationResult<PostStatsDto> {
        session.ensure_authenticated()?;
        let counts = self.read_repo.counts().await?;
        Ok(PostStatsDto {
            total: counts.total,
            published: counts.published,
            drafts: counts.total.saturating_sub(counts.published),
        })
    }
}
