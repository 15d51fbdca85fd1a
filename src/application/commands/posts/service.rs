use std::sync::Arc;

use crate::{
    application::ports::{
        time::Clock,
        views::{ViewInvalidator, post_view_paths},
    },
    domain::post::{Post, PostReadRepository, PostWriteRepository, services::PostSlugService},
};

pub struct PostCommandService {
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) read_repo: Arc<dyn PostReadRepository>,
    pub(super) slug_service: Arc<PostSlugService>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) views: Arc<dyn ViewInvalidator>,
}

impl PostCommandService {
    pub fn new(
        write_repo: Arc<dyn PostWriteRepository>,
        read_repo: Arc<dyn PostReadRepository>,
        slug_service: Arc<PostSlugService>,
        clock: Arc<dyn Clock>,
        views: Arc<dyn ViewInvalidator>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_service,
            clock,
            views,
        }
    }

    pub(super) async fn invalidate(&self, post: &Post) {
        self.views
            .invalidate(&post_view_paths(post.id, &post.slug))
            .await;
    }
}
