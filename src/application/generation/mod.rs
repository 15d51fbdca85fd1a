//! Model-backed content helpers: excerpts, SEO metadata, rewrites, drafts
//! and translations. Locale-scoped results are memoized per post column.

pub mod cache;
mod draft;
mod excerpt;
mod multilingual_seo;
pub mod parse;
pub mod prompts;
mod rewrite;
mod seo;
mod service;
mod translate;

pub use cache::{LocalizedFieldCache, Populated};
pub use parse::{RawSeo, SeoParse, parse_seo};
pub use prompts::Prompt;
pub use service::{ContentGenerationService, GenerationSettings};
