pub mod posts;
pub mod seo;
pub mod session;

pub use posts::{LocaleVariantDto, LocalizedPostDto, PostDto, PostStatsDto, PublicPostDto};
pub use seo::SeoMetadataDto;
pub use session::{SESSION_SENTINEL, SessionState};
