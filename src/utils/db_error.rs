//! Helpers for classifying database errors.

/// Name of the primary-key constraint on `short_urls.slug`.
pub const SLUG_CONSTRAINT: &str = "short_urls_pkey";

/// Returns true if `e` is a uniqueness violation of the slug constraint.
pub fn is_unique_violation_on_slug(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(SLUG_CONSTRAINT))
}
