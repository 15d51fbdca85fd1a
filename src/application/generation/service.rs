use std::sync::Arc;

use super::{cache::LocalizedFieldCache, prompts::Prompt};
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::{
            completion::CompletionClient,
            time::Clock,
            views::{ViewInvalidator, post_view_paths},
        },
    },
    domain::post::{Post, PostId, PostReadRepository, PostUpdate, PostWriteRepository},
};

#[derive(Debug, Clone)]
pub struct GenerationSettings {
    pub model: String,
    /// Log the underlying cause of generation failures.
    pub diagnostics: bool,
}

impl GenerationSettings {
    pub fn new(model: impl Into<String>, diagnostics: bool) -> Self {
        Self {
            model: model.into(),
            diagnostics,
        }
    }
}

pub struct ContentGenerationService {
    pub(super) completion: Arc<dyn CompletionClient>,
    pub(super) write_repo: Arc<dyn PostWriteRepository>,
    pub(super) cache: LocalizedFieldCache,
    pub(super) views: Arc<dyn ViewInvalidator>,
    pub(super) clock: Arc<dyn Clock>,
    pub(super) settings: GenerationSettings,
}

impl ContentGenerationService {
    pub fn new(
        completion: Arc<dyn CompletionClient>,
        read_repo: Arc<dyn PostReadRepository>,
        write_repo: Arc<dyn PostWriteRepository>,
        views: Arc<dyn ViewInvalidator>,
        clock: Arc<dyn Clock>,
        settings: GenerationSettings,
    ) -> Self {
        let cache = LocalizedFieldCache::new(read_repo, Arc::clone(&write_repo), Arc::clone(&clock));
        Self {
            completion,
            write_repo,
            cache,
            views,
            clock,
            settings,
        }
    }

    /// Send a prompt and return the trimmed answer.
    pub(super) async fn complete(&self, prompt: Prompt) -> ApplicationResult<String> {
        let request = prompt.into_request(&self.settings.model);
        let text = self.completion.complete(request).await?;
        Ok(text.trim().to_owned())
    }

    /// Fold a lower-level failure into `GenerationFailed`. Caller errors and
    /// configuration errors pass through untouched.
    pub(super) fn generation_failed(&self, err: ApplicationError, message: &str) -> ApplicationError {
        if err.is_caller_error() || matches!(err, ApplicationError::Configuration(_)) {
            return err;
        }
        if self.settings.diagnostics {
            tracing::warn!(error = %err, "{message}");
        }
        ApplicationError::generation_failed(message)
    }

    pub(super) fn persistence_failed(&self, err: ApplicationError, message: &str) -> ApplicationError {
        if err.is_caller_error() {
            return err;
        }
        if self.settings.diagnostics {
            tracing::warn!(error = %err, "{message}");
        }
        ApplicationError::persistence_failed(message)
    }

    pub(super) fn update(&self, post_id: PostId) -> PostUpdate {
        PostUpdate::new(post_id, self.clock.now())
    }

    /// Write a field map and signal the views rendered from the post.
    pub(super) async fn persist(&self, update: PostUpdate, message: &str) -> ApplicationResult<Post> {
        let post = self
            .write_repo
            .update_fields(update)
            .await
            .map_err(|err| self.persistence_failed(err.into(), message))?;
        self.invalidate(&post).await;
        Ok(post)
    }

    pub(super) async fn invalidate(&self, post: &Post) {
        self.views
            .invalidate(&post_view_paths(post.id, &post.slug))
            .await;
    }
}
