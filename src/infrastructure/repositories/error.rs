use crate::domain::errors::DomainError;
use sqlx::error::DatabaseError;

const POSTS_SLUG_KEY: &str = "posts_slug_key";
const POSTS_TITLE_CHECK: &str = "posts_title_not_blank_chk";

const UNIQUE_VIOLATION: &str = "23505";
const CHECK_VIOLATION: &str = "23514";

/// Translate driver errors into domain errors. Named constraints win over
/// bare SQLSTATE codes.
pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::Database(db_err) => from_database(db_err.as_ref()),
        sqlx::Error::RowNotFound => DomainError::NotFound("post not found".into()),
        other => DomainError::Persistence(other.to_string()),
    }
}

fn from_database(db_err: &dyn DatabaseError) -> DomainError {
    match db_err.constraint() {
        Some(POSTS_SLUG_KEY) => return DomainError::DuplicateSlug("slug is taken".into()),
        Some(POSTS_TITLE_CHECK) => return DomainError::Validation("title is required".into()),
        _ => {}
    }

    match db_err.code().as_deref() {
        Some(UNIQUE_VIOLATION) => DomainError::Conflict("unique constraint violated".into()),
        Some(CHECK_VIOLATION) => DomainError::Validation("check constraint violated".into()),
        _ => DomainError::Persistence(db_err.message().to_owned()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_database_errors_become_persistence_failures() {
        assert!(matches!(
            map_sqlx(sqlx::Error::PoolTimedOut),
            DomainError::Persistence(_)
        ));
        assert!(matches!(
            map_sqlx(sqlx::Error::RowNotFound),
            DomainError::NotFound(_)
        ));
    }
}
