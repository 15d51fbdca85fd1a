use async_trait::async_trait;

use crate::application::ports::views::ViewInvalidator;

/// Records stale paths in the log. Rendering lives outside this service, so
/// there is no page cache to purge here.
#[derive(Default, Clone)]
pub struct LoggingViewInvalidator;

#[async_trait]
impl ViewInvalidator for LoggingViewInvalidator {
    async fn invalidate(&self, paths: &[String]) {
        tracing::debug!(?paths, "views invalidated");
    }
}
