// tests/support/builders.rs
use chrono::{DateTime, Duration, TimeZone, Utc};
use inkpress::domain::post::{
    Locale, LocalizedField, NewPost, Post, PostContent, PostExcerpt, PostId, PostSlug, PostTitle,
};

/// Stored-post fixture. Defaults to an unpublished post with a body.
pub struct PostBuilder {
    title: String,
    slug: String,
    content: String,
    excerpt: String,
    seo: Option<(String, String)>,
    published: bool,
    created_at: DateTime<Utc>,
    localized: Vec<(Locale, LocalizedField, String)>,
}

impl PostBuilder {
    pub fn new(title: &str, slug: &str) -> Self {
        Self {
            title: title.to_owned(),
            slug: slug.to_owned(),
            content: format!("Body of {title}."),
            excerpt: String::new(),
            seo: None,
            published: false,
            created_at: Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap(),
            localized: Vec::new(),
        }
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_owned();
        self
    }

    pub fn excerpt(mut self, excerpt: &str) -> Self {
        self.excerpt = excerpt.to_owned();
        self
    }

    pub fn seo(mut self, title: &str, description: &str) -> Self {
        self.seo = Some((title.to_owned(), description.to_owned()));
        self
    }

    pub const fn published(mut self) -> Self {
        self.published = true;
        self
    }

    pub fn created_days_ago(mut self, days: i64) -> Self {
        self.created_at = Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap() - Duration::days(days);
        self
    }

    pub fn localized(mut self, locale: Locale, field: LocalizedField, value: &str) -> Self {
        self.localized.push((locale, field, value.to_owned()));
        self
    }

    pub fn build(self) -> Post {
        let (seo_title, seo_description) = match self.seo {
            Some((t, d)) => (Some(t), Some(d)),
            None => (None, None),
        };
        let mut post = NewPost {
            id: PostId::generate(),
            title: PostTitle::new(self.title).unwrap(),
            slug: PostSlug::new(self.slug).unwrap(),
            content: PostContent::new(self.content),
            excerpt: PostExcerpt::new(self.excerpt),
            seo_title,
            seo_description,
            published: self.published,
            created_at: self.created_at,
            updated_at: self.created_at,
        }
        .into_post();
        for (locale, field, value) in self.localized {
            post.localized.variant_mut(locale).set(field, Some(value));
        }
        post
    }
}
