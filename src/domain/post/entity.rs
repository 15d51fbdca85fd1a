// src/domain/post/entity.rs
use crate::domain::post::locale::{Locale, LocalizedColumns, LocalizedField};
use crate::domain::post::value_objects::{PostContent, PostExcerpt, PostId, PostSlug, PostTitle};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Post {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub excerpt: PostExcerpt,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub localized: LocalizedColumns,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Post {
    /// Cached value for a locale-scoped column, treating blank strings as absent.
    pub fn localized_value(&self, locale: Locale, field: LocalizedField) -> Option<&str> {
        self.localized
            .variant(locale)
            .field(field)
            .filter(|value| !value.trim().is_empty())
    }

    /// Apply an update in memory the same way the store applies it.
    pub fn apply(&mut self, update: &PostUpdate) {
        if let Some(title) = &update.title {
            self.title = title.clone();
        }
        if let Some(slug) = &update.slug {
            self.slug = slug.clone();
        }
        if let Some(content) = &update.content {
            self.content = content.clone();
        }
        if let Some(excerpt) = &update.excerpt {
            self.excerpt = excerpt.clone();
        }
        if let Some(seo_title) = &update.seo_title {
            self.seo_title = seo_title.clone();
        }
        if let Some(seo_description) = &update.seo_description {
            self.seo_description = seo_description.clone();
        }
        if let Some(published) = update.published {
            self.published = published;
        }
        for value in &update.localized {
            self.localized
                .variant_mut(value.locale)
                .set(value.field, Some(value.value.clone()));
        }
        self.updated_at = update.updated_at;
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub id: PostId,
    pub title: PostTitle,
    pub slug: PostSlug,
    pub content: PostContent,
    pub excerpt: PostExcerpt,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl NewPost {
    pub fn into_post(self) -> Post {
        Post {
            id: self.id,
            title: self.title,
            slug: self.slug,
            content: self.content,
            excerpt: self.excerpt,
            seo_title: self.seo_title,
            seo_description: self.seo_description,
            localized: LocalizedColumns::default(),
            published: self.published,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizedValue {
    pub locale: Locale,
    pub field: LocalizedField,
    pub value: String,
}

/// Field map for a single-row update. `None` leaves a column untouched.
#[derive(Debug, Clone)]
pub struct PostUpdate {
    pub id: PostId,
    pub title: Option<PostTitle>,
    pub slug: Option<PostSlug>,
    pub content: Option<PostContent>,
    pub excerpt: Option<PostExcerpt>,
    pub seo_title: Option<Option<String>>,
    pub seo_description: Option<Option<String>>,
    pub published: Option<bool>,
    pub localized: Vec<LocalizedValue>,
    pub updated_at: DateTime<Utc>,
}

impl PostUpdate {
    pub const fn new(id: PostId, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: None,
            slug: None,
            content: None,
            excerpt: None,
            seo_title: None,
            seo_description: None,
            published: None,
            localized: Vec::new(),
            updated_at,
        }
    }

    pub fn with_title(mut self, title: PostTitle) -> Self {
        self.title = Some(title);
        self
    }

    pub fn with_slug(mut self, slug: PostSlug) -> Self {
        self.slug = Some(slug);
        self
    }

    pub fn with_content(mut self, content: PostContent) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_excerpt(mut self, excerpt: PostExcerpt) -> Self {
        self.excerpt = Some(excerpt);
        self
    }

    pub fn with_seo(mut self, title: Option<String>, description: Option<String>) -> Self {
        self.seo_title = Some(title);
        self.seo_description = Some(description);
        self
    }

    pub fn with_seo_title(mut self, title: Option<String>) -> Self {
        self.seo_title = Some(title);
        self
    }

    pub fn with_seo_description(mut self, description: Option<String>) -> Self {
        self.seo_description = Some(description);
        self
    }

    pub const fn with_published(mut self, published: bool) -> Self {
        self.published = Some(published);
        self
    }

    pub fn with_localized(
        mut self,
        locale: Locale,
        field: LocalizedField,
        value: impl Into<String>,
    ) -> Self {
        self.localized.push(LocalizedValue {
            locale,
            field,
            value: value.into(),
        });
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.content.is_none()
            && self.excerpt.is_none()
            && self.seo_title.is_none()
            && self.seo_description.is_none()
            && self.published.is_none()
            && self.localized.is_empty()
    }
}
