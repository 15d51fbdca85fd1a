use crate::domain::errors::{DomainError, DomainResult};
use std::{fmt, str::FromStr};
use uuid::Uuid;

pub const EXCERPT_MAX_CHARS: usize = 300;
pub const SEO_TITLE_MAX_CHARS: usize = 60;
pub const SEO_DESCRIPTION_MAX_CHARS: usize = 160;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(Uuid);

impl PostId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl FromStr for PostId {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(value.trim())
            .map(Self)
            .map_err(|_| DomainError::Validation("post id must be a uuid".into()))
    }
}

impl From<PostId> for Uuid {
    fn from(value: PostId) -> Self {
        value.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostTitle(String);

impl PostTitle {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("title is required".into()));
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PostTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A normalized slug: lowercase ASCII alphanumerics separated by single dashes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PostSlug(String);

impl PostSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::Validation("slug is required".into()));
        }
        if !is_normalized_slug(&value) {
            return Err(DomainError::Validation(format!(
                "slug `{value}` must contain only lowercase letters, digits and single dashes"
            )));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_normalized_slug(value: &str) -> bool {
    !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--")
        && value
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

impl fmt::Display for PostSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Post body. Unlike the title it may be empty until a draft is written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostContent(String);

impl PostContent {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into().trim().to_owned())
    }

    /// Content supplied to an operation that cannot work on an empty body.
    pub fn required(value: impl Into<String>) -> DomainResult<Self> {
        let content = Self::new(value);
        if content.is_empty() {
            return Err(DomainError::Validation("content is required".into()));
        }
        Ok(content)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostExcerpt(String);

impl PostExcerpt {
    /// Build an excerpt, hard-truncating anything past the cap to
    /// `cap - 3` characters plus an ellipsis.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self(truncate_with_ellipsis(value.trim(), EXCERPT_MAX_CHARS))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Truncate to at most `max` characters, counting Unicode scalar values.
pub fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

pub fn truncate_with_ellipsis(value: &str, max: usize) -> String {
    if value.chars().count() <= max {
        return value.to_owned();
    }
    let mut out = truncate_chars(value, max.saturating_sub(3));
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_trimmed_and_required() {
        assert_eq!(PostTitle::new("  Hello  ").unwrap().as_str(), "Hello");
        assert!(matches!(
            PostTitle::new("   "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn slug_rejects_unnormalized_values() {
        assert!(PostSlug::new("hello-world").is_ok());
        assert!(PostSlug::new("Hello").is_err());
        assert!(PostSlug::new("-hello").is_err());
        assert!(PostSlug::new("hello--world").is_err());
        assert!(PostSlug::new("hello_world").is_err());
        assert!(PostSlug::new("").is_err());
    }

    #[test]
    fn excerpt_over_cap_is_exactly_300_chars_with_ellipsis() {
        let raw = "a".repeat(450);
        let excerpt = PostExcerpt::new(raw);
        assert_eq!(excerpt.as_str().chars().count(), EXCERPT_MAX_CHARS);
        assert!(excerpt.as_str().ends_with("..."));
    }

    #[test]
    fn excerpt_at_cap_is_untouched() {
        let raw = "b".repeat(EXCERPT_MAX_CHARS);
        assert_eq!(PostExcerpt::new(raw.clone()).as_str(), raw);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let russian = "Привет мир";
        assert_eq!(truncate_chars(russian, 6), "Привет");
    }

    #[test]
    fn required_content_rejects_whitespace() {
        assert!(PostContent::required(" \n ").is_err());
        assert!(PostContent::new("").is_empty());
    }

    #[test]
    fn post_id_parses_uuid_strings() {
        let id = PostId::generate();
        let parsed: PostId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("not-a-uuid".parse::<PostId>().is_err());
    }
}
