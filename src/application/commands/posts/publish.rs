use super::PostCommandService;
use crate::{
    application::{
        dto::{PostDto, SessionState},
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::{PostId, PostUpdate},
};

pub struct SetPublishStateCommand {
    pub id: PostId,
    pub publish: bool,
}

impl PostCommandService {
    pub async fn set_publish_state(
        &self,
        session: &SessionState,
        command: SetPublishStateCommand,
    ) -> ApplicationResult<PostDto> {
        session.ensure_authenticated()?;

        let post = self
            .read_repo
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        if post.published == command.publish {
            return Ok(post.into());
        }

        let update = PostUpdate::new(command.id, self.clock.now()).with_published(command.publish);
        let updated = self.write_repo.update_fields(update).await?;
        self.invalidate(&updated).await;
        Ok(updated.into())
    }
}
