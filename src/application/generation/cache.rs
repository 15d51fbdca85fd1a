use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::post::{
        Locale, LocalizedField, Post, PostId, PostReadRepository, PostUpdate, PostWriteRepository,
    },
};

/// Outcome of writing generated values into the locale columns.
#[derive(Debug, Clone)]
pub struct Populated {
    /// Effective values in request order. A column that was filled in the
    /// meantime keeps its existing value.
    pub values: Vec<String>,
    /// The post after the write, `None` when every column was already set.
    pub written: Option<Post>,
}

/// Memoizes generated locale content in the post's own columns, keyed by
/// `(post id, locale, field)`. Columns are populate-once: a non-empty value
/// is always returned as-is and never replaced.
pub struct LocalizedFieldCache {
    read_repo: Arc<dyn PostReadRepository>,
    write_repo: Arc<dyn PostWriteRepository>,
    clock: Arc<dyn Clock>,
}

impl LocalizedFieldCache {
    pub fn new(
        read_repo: Arc<dyn PostReadRepository>,
        write_repo: Arc<dyn PostWriteRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            read_repo,
            write_repo,
            clock,
        }
    }

    async fn load(&self, id: PostId) -> ApplicationResult<Post> {
        self.read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))
    }

    pub async fn get(
        &self,
        id: PostId,
        locale: Locale,
        field: LocalizedField,
    ) -> ApplicationResult<Option<String>> {
        let post = self.load(id).await?;
        Ok(post.localized_value(locale, field).map(str::to_owned))
    }

    /// All requested fields, or `None` unless every one of them is populated.
    pub async fn get_all(
        &self,
        id: PostId,
        locale: Locale,
        fields: &[LocalizedField],
    ) -> ApplicationResult<Option<Vec<String>>> {
        let post = self.load(id).await?;
        Ok(fields
            .iter()
            .map(|field| post.localized_value(locale, *field).map(str::to_owned))
            .collect())
    }

    pub async fn populate(
        &self,
        id: PostId,
        locale: Locale,
        entries: Vec<(LocalizedField, String)>,
    ) -> ApplicationResult<Populated> {
        let current = self.load(id).await?;
        let mut update = PostUpdate::new(id, self.clock.now());
        let mut values = Vec::with_capacity(entries.len());

        for (field, generated) in entries {
            if let Some(existing) = current.localized_value(locale, field) {
                values.push(existing.to_owned());
            } else {
                update = update.with_localized(locale, field, generated.clone());
                values.push(generated);
            }
        }

        if update.is_empty() {
            return Ok(Populated {
                values,
                written: None,
            });
        }

        let written = self.write_repo.update_fields(update).await?;
        tracing::debug!(post_id = %id, %locale, "localized columns populated");
        Ok(Populated {
            values,
            written: Some(written),
        })
    }
}
