//! Catalog-store queries for the `movies` table and its join rows.

use sqlx::SqlitePool;
use vidstore_core::types::DbId;

use crate::models::movie::{Movie, PersonName};

use super::search_repo::like_pattern;

/// Point lookups and dependent-join queries against the catalog store.
pub struct MovieRepo;

impl MovieRepo {
    /// Whether exactly one movie row exists with this id.
    pub async fn is_valid(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies WHERE id = ?")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count == 1)
    }

    /// Movies whose title contains `title` (case-insensitive), ascending id.
    pub async fn search_by_title(
        pool: &SqlitePool,
        title: &str,
    ) -> Result<Vec<Movie>, sqlx::Error> {
        sqlx::query_as::<_, Movie>(
            "SELECT id, title, year FROM movies
             WHERE lower(title) LIKE ?
             ORDER BY id",
        )
        .bind(like_pattern(title))
        .fetch_all(pool)
        .await
    }

    /// Directors of one movie (dependent join, used by the browse variant).
    pub async fn directors_of(
        pool: &SqlitePool,
        movie_id: DbId,
    ) -> Result<Vec<PersonName>, sqlx::Error> {
        sqlx::query_as::<_, PersonName>(
            "SELECT d.first_name, d.last_name
             FROM movie_directors md
             INNER JOIN directors d ON d.id = md.director_id
             WHERE md.movie_id = ?
             ORDER BY d.id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// Actors of one movie, de-duplicated (an actor may hold several roles).
    pub async fn actors_of(
        pool: &SqlitePool,
        movie_id: DbId,
    ) -> Result<Vec<PersonName>, sqlx::Error> {
        sqlx::query_as::<_, PersonName>(
            "SELECT a.first_name, a.last_name
             FROM casts c
             INNER JOIN actors a ON a.id = c.actor_id
             WHERE c.movie_id = ?
             GROUP BY a.id, a.first_name, a.last_name
             ORDER BY a.id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }
}
