//! The three ordered result streams consumed by the sort-merge search.
//!
//! Each query orders its rows by movie id, and the credit streams use a
//! LEFT-preserving join so every movie matching the title filter appears
//! at least once, null-padded when it has no directors or actors. The
//! engine groups the streams by adjacency instead of asking the store for
//! one big pre-joined result.

use sqlx::SqlitePool;

use crate::models::movie::Movie;
use crate::models::search::CreditRow;

/// Case-insensitive containment pattern for title filters.
pub(crate) fn like_pattern(title: &str) -> String {
    format!("%{}%", title.to_lowercase())
}

/// Ordered stream queries for the fast search.
pub struct SearchRepo;

impl SearchRepo {
    /// Stream A: matching movies, ascending id.
    pub async fn matching_movies(
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

    /// Stream B: movie x director pairs for matching movies, ascending
    /// movie id, null-padded for director-less movies.
    pub async fn directors_by_title(
        pool: &SqlitePool,
        title: &str,
    ) -> Result<Vec<CreditRow>, sqlx::Error> {
        sqlx::query_as::<_, CreditRow>(
            "SELECT m.id AS movie_id, d.first_name, d.last_name
             FROM movies m
             LEFT JOIN movie_directors md ON md.movie_id = m.id
             LEFT JOIN directors d ON d.id = md.director_id
             WHERE lower(m.title) LIKE ?
             ORDER BY m.id",
        )
        .bind(like_pattern(title))
        .fetch_all(pool)
        .await
    }

    /// Stream C: movie x actor pairs, de-duplicated per actor, ascending
    /// movie id, null-padded for movies with no recorded cast.
    pub async fn actors_by_title(
        pool: &SqlitePool,
        title: &str,
    ) -> Result<Vec<CreditRow>, sqlx::Error> {
        sqlx::query_as::<_, CreditRow>(
            "SELECT m.id AS movie_id, a.first_name, a.last_name
             FROM movies m
             LEFT JOIN casts c ON c.movie_id = m.id
             LEFT JOIN actors a ON a.id = c.actor_id
             WHERE lower(m.title) LIKE ?
             GROUP BY m.id, a.id
             ORDER BY m.id",
        )
        .bind(like_pattern(title))
        .fetch_all(pool)
        .await
    }
}
