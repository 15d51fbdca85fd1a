pub mod ai;
pub mod auth;
pub mod posts;
pub mod public;

use crate::{
    application::error::ApplicationError,
    domain::post::{Locale, PostId},
};

pub(crate) fn parse_post_id(raw: &str) -> Result<PostId, ApplicationError> {
    raw.parse::<PostId>().map_err(ApplicationError::from)
}

pub(crate) fn parse_locale(raw: &str) -> Result<Locale, ApplicationError> {
    raw.parse::<Locale>().map_err(ApplicationError::from)
}
