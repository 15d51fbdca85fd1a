use super::PostQueryService;
use crate::{
    application::{
        dto::{PostDto, SessionState},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

impl PostQueryService {
    pub async fn get_post_by_id(
        &self,
        session: &SessionState,
        id: PostId,
    ) -> ApplicationResult<PostDto> {
        session.ensure_authenticated()?;
        self.read_repo
            .find_by_id(id)
            .await?
            .map(Into::into)
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }
}
