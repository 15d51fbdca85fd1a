mod get_by_id;
mod get_by_slug;
mod list;
mod localized;
mod service;
mod stats;

pub use get_by_slug::GetPublishedPostQuery;
pub use localized::GetLocalizedPostQuery;
pub use service::PostQueryService;
