use super::PostCommandService;
use crate::{
    application::{
        dto::SessionState,
        error::{ApplicationError, ApplicationResult},
    },
    domain::post::PostId,
};

pub struct DeletePostCommand {
    pub id: PostId,
}

impl PostCommandService {
    pub async fn delete_post(
        &self,
        session: &SessionState,
        command: DeletePostCommand,
    ) -> ApplicationResult<()> {
        session.ensure_authenticated()?;

        let post = self
            .read_repo
            .find_by_id(command.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        self.write_repo.delete(command.id).await?;
        tracing::info!(post_id = %post.id, "post deleted");
        self.invalidate(&post).await;
        Ok(())
    }
}
