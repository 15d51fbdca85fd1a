use crate::domain::post::{Locale, LocalizedField, Post};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocaleVariantDto {
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub translated_content: Option<String>,
    pub translated_excerpt: Option<String>,
}

impl LocaleVariantDto {
    fn from_post(post: &Post, locale: Locale) -> Self {
        let read = |field| post.localized_value(locale, field).map(str::to_owned);
        Self {
            seo_title: read(LocalizedField::SeoTitle),
            seo_description: read(LocalizedField::SeoDescription),
            translated_content: read(LocalizedField::TranslatedContent),
            translated_excerpt: read(LocalizedField::TranslatedExcerpt),
        }
    }
}

/// Full admin view of a post, including every cached locale column.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub en: LocaleVariantDto,
    pub ru: LocaleVariantDto,
    pub published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        let en = LocaleVariantDto::from_post(&post, Locale::En);
        let ru = LocaleVariantDto::from_post(&post, Locale::Ru);
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            content: post.content.into_inner(),
            excerpt: post.excerpt.into_inner(),
            seo_title: post.seo_title,
            seo_description: post.seo_description,
            en,
            ru,
            published: post.published,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// What a public reader sees: no drafts, no cached locale columns.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PublicPostDto {
    pub id: Uuid,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub excerpt: String,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PublicPostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id.into(),
            title: post.title.into_inner(),
            slug: post.slug.into_inner(),
            content: post.content.into_inner(),
            excerpt: post.excerpt.into_inner(),
            seo_title: post.seo_title,
            seo_description: post.seo_description,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// Cached locale view of a published post. Missing entries were never generated.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LocalizedPostDto {
    pub slug: String,
    pub locale: Locale,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
}

impl LocalizedPostDto {
    pub fn from_post(post: &Post, locale: Locale) -> Self {
        let read = |field| post.localized_value(locale, field).map(str::to_owned);
        Self {
            slug: post.slug.to_string(),
            locale,
            content: read(LocalizedField::TranslatedContent),
            excerpt: read(LocalizedField::TranslatedExcerpt),
            seo_title: read(LocalizedField::SeoTitle),
            seo_description: read(LocalizedField::SeoDescription),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct PostStatsDto {
    pub total: u64,
    pub published: u64,
    pub drafts: u64,
}
