pub mod entity;
pub mod locale;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{LocalizedValue, NewPost, Post, PostUpdate};
pub use locale::{Locale, LocaleVariant, LocalizedColumns, LocalizedField};
pub use repository::{PostCounts, PostReadRepository, PostWriteRepository};
pub use value_objects::{
    EXCERPT_MAX_CHARS, PostContent, PostExcerpt, PostId, PostSlug, PostTitle,
    SEO_DESCRIPTION_MAX_CHARS, SEO_TITLE_MAX_CHARS,
};
