use crate::domain::errors::DomainResult;
use crate::domain::post::entity::{NewPost, Post, PostUpdate};
use crate::domain::post::value_objects::{PostId, PostSlug};
use async_trait::async_trait;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PostCounts {
    pub total: u64,
    pub published: u64,
}

#[async_trait]
pub trait PostWriteRepository: Send + Sync {
    async fn insert(&self, post: NewPost) -> DomainResult<Post>;
    /// Last write wins. Fails with `NotFound` when no row has the id.
    async fn update_fields(&self, update: PostUpdate) -> DomainResult<Post>;
    async fn delete(&self, id: PostId) -> DomainResult<()>;
}

#[async_trait]
pub trait PostReadRepository: Send + Sync {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>>;
    /// Looks up regardless of publication state; visibility is decided by callers.
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>>;
    /// Newest first.
    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Post>>;
    async fn counts(&self) -> DomainResult<PostCounts>;
}
