use super::map_sqlx;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::post::{
    LocaleVariant, LocalizedColumns, NewPost, Post, PostContent, PostCounts, PostExcerpt, PostId,
    PostReadRepository, PostSlug, PostTitle, PostUpdate, PostWriteRepository,
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

const POST_COLUMNS: &str = "id, title, slug, content, excerpt, seo_title, seo_description, \
     seo_title_en, seo_description_en, seo_title_ru, seo_description_ru, \
     translated_content_en, translated_content_ru, translated_excerpt_en, translated_excerpt_ru, \
     published, created_at, updated_at";

#[derive(Clone)]
pub struct PostgresPostWriteRepository {
    pool: PgPool,
}

impl PostgresPostWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresPostReadRepository {
    pool: PgPool,
}

impl PostgresPostReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct PostRow {
    id: Uuid,
    title: String,
    slug: String,
    content: String,
    excerpt: String,
    seo_title: Option<String>,
    seo_description: Option<String>,
    seo_title_en: Option<String>,
    seo_description_en: Option<String>,
    seo_title_ru: Option<String>,
    seo_description_ru: Option<String>,
    translated_content_en: Option<String>,
    translated_content_ru: Option<String>,
    translated_excerpt_en: Option<String>,
    translated_excerpt_ru: Option<String>,
    published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<PostRow> for Post {
    type Error = DomainError;

    fn try_from(row: PostRow) -> Result<Self, Self::Error> {
        Ok(Self {
            id: PostId::from_uuid(row.id),
            title: PostTitle::new(row.title)?,
            slug: PostSlug::new(row.slug)?,
            content: PostContent::new(row.content),
            excerpt: PostExcerpt::new(row.excerpt),
            seo_title: row.seo_title,
            seo_description: row.seo_description,
            localized: LocalizedColumns {
                en: LocaleVariant {
                    seo_title: row.seo_title_en,
                    seo_description: row.seo_description_en,
                    translated_content: row.translated_content_en,
                    translated_excerpt: row.translated_excerpt_en,
                },
                ru: LocaleVariant {
                    seo_title: row.seo_title_ru,
                    seo_description: row.seo_description_ru,
                    translated_content: row.translated_content_ru,
                    translated_excerpt: row.translated_excerpt_ru,
                },
            },
            published: row.published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl PostWriteRepository for PostgresPostWriteRepository {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let NewPost {
            id,
            title,
            slug,
            content,
            excerpt,
            seo_title,
            seo_description,
            published,
            created_at,
            updated_at,
        } = post;

        let row = sqlx::query_as::<_, PostRow>(&format!(
            "INSERT INTO posts (id, title, slug, content, excerpt, seo_title, seo_description, published, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {POST_COLUMNS}"
        ))
        .bind(id.as_uuid())
        .bind(title.as_str())
        .bind(slug.as_str())
        .bind(content.as_str())
        .bind(excerpt.as_str())
        .bind(seo_title)
        .bind(seo_description)
        .bind(published)
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match map_sqlx(err) {
            DomainError::DuplicateSlug(_) => DomainError::DuplicateSlug(slug.to_string()),
            other => other,
        })?;

        Post::try_from(row)
    }

    async fn update_fields(&self, update: PostUpdate) -> DomainResult<Post> {
        let PostUpdate {
            id,
            title,
            slug,
            content,
            excerpt,
            seo_title,
            seo_description,
            published,
            localized,
            updated_at,
        } = update;

        let requested_slug = slug.as_ref().map(ToString::to_string);

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new("UPDATE posts SET updated_at = ");
        builder.push_bind(updated_at);

        if let Some(title) = title {
            builder.push(", title = ");
            builder.push_bind(title.into_inner());
        }

        if let Some(slug) = slug {
            builder.push(", slug = ");
            builder.push_bind(slug.into_inner());
        }

        if let Some(content) = content {
            builder.push(", content = ");
            builder.push_bind(content.into_inner());
        }

        if let Some(excerpt) = excerpt {
            builder.push(", excerpt = ");
            builder.push_bind(excerpt.into_inner());
        }

        if let Some(seo_title) = seo_title {
            builder.push(", seo_title = ");
            builder.push_bind(seo_title);
        }

        if let Some(seo_description) = seo_description {
            builder.push(", seo_description = ");
            builder.push_bind(seo_description);
        }

        if let Some(published) = published {
            builder.push(", published = ");
            builder.push_bind(published);
        }

        // Column names come from a closed enum, never from input.
        for value in localized {
            builder.push(", ");
            builder.push(value.field.column(value.locale));
            builder.push(" = ");
            builder.push_bind(value.value);
        }

        builder.push(" WHERE id = ");
        builder.push_bind(id.as_uuid());
        builder.push(" RETURNING ");
        builder.push(POST_COLUMNS);

        let row = builder
            .build_query_as::<PostRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| match (map_sqlx(err), &requested_slug) {
                (DomainError::DuplicateSlug(_), Some(slug)) => {
                    DomainError::DuplicateSlug(slug.clone())
                }
                (other, _) => other,
            })?
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        Post::try_from(row)
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[derive(Debug, FromRow)]
struct CountsRow {
    total: i64,
    published: i64,
}

#[async_trait]
impl PostReadRepository for PostgresPostReadRepository {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE id = $1"
        ))
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        let row = sqlx::query_as::<_, PostRow>(&format!(
            "SELECT {POST_COLUMNS} FROM posts WHERE slug = $1"
        ))
        .bind(slug.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Post::try_from).transpose()
    }

    async fn list(&self, include_drafts: bool) -> DomainResult<Vec<Post>> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new("SELECT ");
        builder.push(POST_COLUMNS);
        builder.push(" FROM posts");
        if !include_drafts {
            builder.push(" WHERE published = TRUE");
        }
        builder.push(" ORDER BY created_at DESC, id DESC");

        let rows = builder
            .build_query_as::<PostRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Post::try_from).collect()
    }

    async fn counts(&self) -> DomainResult<PostCounts> {
        let row = sqlx::query_as::<_, CountsRow>(
            "SELECT COUNT(*) AS total, COUNT(*) FILTER (WHERE published) AS published FROM posts",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(PostCounts {
            total: row.total.unsigned_abs(),
            published: row.published.unsigned_abs(),
        })
    }
}
