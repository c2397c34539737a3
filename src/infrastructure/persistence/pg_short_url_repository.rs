//! PostgreSQL implementation of the short URL repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewShortUrl, ShortUrl};
use crate::domain::repositories::{RepositoryError, ShortUrlRepository};
use crate::utils::db_error::is_unique_violation_on_slug;

/// PostgreSQL repository for short URL storage and lookup.
///
/// Each call checks a connection out of the shared pool and returns it when the
/// call completes, on both success and error paths.
pub struct PgShortUrlRepository {
    pool: Arc<PgPool>,
}

impl PgShortUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShortUrlRepository for PgShortUrlRepository {
    async fn insert(&self, new_short_url: NewShortUrl) -> Result<ShortUrl, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query_as::<_, ShortUrl>(
            r#"
            INSERT INTO short_urls (slug, long_url)
            VALUES ($1, $2)
            RETURNING slug, long_url, created_at
            "#,
        )
        .bind(&new_short_url.slug)
        .bind(&new_short_url.long_url)
        .fetch_one(&mut *tx)
        .await;

        match inserted {
            Ok(short_url) => {
                tx.commit().await?;
                Ok(short_url)
            }
            Err(e) => {
                if let Err(rollback_err) = tx.rollback().await {
                    tracing::warn!(error = %rollback_err, "Rollback of failed insert failed");
                }

                if is_unique_violation_on_slug(&e) {
                    Err(RepositoryError::DuplicateSlug(new_short_url.slug))
                } else {
                    Err(RepositoryError::Database(e))
                }
            }
        }
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<ShortUrl>, RepositoryError> {
        let row = sqlx::query_as::<_, ShortUrl>(
            r#"
            SELECT slug, long_url, created_at
            FROM short_urls
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
