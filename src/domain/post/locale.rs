use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Target languages with their own SEO and translation columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Ru,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::En, Self::Ru];

    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }

    /// Language name as used inside model instructions.
    pub const fn language_name(self) -> &'static str {
        match self {
            Self::En => "English",
            Self::Ru => "Russian",
        }
    }
}

impl FromStr for Locale {
    type Err = DomainError;

    fn from_str(value: &str) -> DomainResult<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Self::En),
            "ru" => Ok(Self::Ru),
            other => Err(DomainError::Validation(format!(
                "unsupported locale `{other}`"
            ))),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A column family that exists once per [`Locale`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocalizedField {
    SeoTitle,
    SeoDescription,
    TranslatedContent,
    TranslatedExcerpt,
}

impl LocalizedField {
    pub const fn column(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::SeoTitle, Locale::En) => "seo_title_en",
            (Self::SeoTitle, Locale::Ru) => "seo_title_ru",
            (Self::SeoDescription, Locale::En) => "seo_description_en",
            (Self::SeoDescription, Locale::Ru) => "seo_description_ru",
            (Self::TranslatedContent, Locale::En) => "translated_content_en",
            (Self::TranslatedContent, Locale::Ru) => "translated_content_ru",
            (Self::TranslatedExcerpt, Locale::En) => "translated_excerpt_en",
            (Self::TranslatedExcerpt, Locale::Ru) => "translated_excerpt_ru",
        }
    }
}

/// The four locale-scoped columns for one language.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleVariant {
    pub seo_title: Option<String>,
    pub seo_description: Option<String>,
    pub translated_content: Option<String>,
    pub translated_excerpt: Option<String>,
}

impl LocaleVariant {
    pub fn field(&self, field: LocalizedField) -> Option<&str> {
        let value = match field {
            LocalizedField::SeoTitle => &self.seo_title,
            LocalizedField::SeoDescription => &self.seo_description,
            LocalizedField::TranslatedContent => &self.translated_content,
            LocalizedField::TranslatedExcerpt => &self.translated_excerpt,
        };
        value.as_deref()
    }

    pub fn set(&mut self, field: LocalizedField, value: Option<String>) {
        match field {
            LocalizedField::SeoTitle => self.seo_title = value,
            LocalizedField::SeoDescription => self.seo_description = value,
            LocalizedField::TranslatedContent => self.translated_content = value,
            LocalizedField::TranslatedExcerpt => self.translated_excerpt = value,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocalizedColumns {
    pub en: LocaleVariant,
    pub ru: LocaleVariant,
}

impl LocalizedColumns {
    pub const fn variant(&self, locale: Locale) -> &LocaleVariant {
        match locale {
            Locale::En => &self.en,
            Locale::Ru => &self.ru,
        }
    }

    pub const fn variant_mut(&mut self, locale: Locale) -> &mut LocaleVariant {
        match locale {
            Locale::En => &mut self.en,
            Locale::Ru => &mut self.ru,
        }
    }
}
