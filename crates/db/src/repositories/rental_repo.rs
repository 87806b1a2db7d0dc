//! Customer-store queries for the `rentals` table.
//!
//! Every method takes an executor because the transaction engine runs
//! these against an open transaction; the counters read mid-transaction
//! must see that transaction's own writes.

use chrono::Utc;
use sqlx::SqliteExecutor;
use vidstore_core::rental::{RENTAL_STATUS_CLOSED, RENTAL_STATUS_OPEN};
use vidstore_core::types::DbId;

use crate::models::rental::Rental;

/// Rental event reads and state transitions.
pub struct RentalRepo;

impl RentalRepo {
    /// Plan cap minus the customer's current OPEN-rental count.
    ///
    /// `None` when the customer does not exist (the cap subquery yields
    /// null). Computed in one statement so both halves come from the same
    /// snapshot.
    pub async fn remaining_rentals(
        exec: impl SqliteExecutor<'_>,
        customer_id: DbId,
    ) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<i64>>(
            "SELECT
                (SELECT p.max_rentals
                 FROM customers c
                 INNER JOIN plans p ON p.id = c.plan_id
                 WHERE c.id = ?)
                -
                (SELECT COUNT(*)
                 FROM rentals r
                 WHERE r.customer_id = ? AND r.status = ?)",
        )
        .bind(customer_id)
        .bind(customer_id)
        .bind(RENTAL_STATUS_OPEN)
        .fetch_one(exec)
        .await
    }

    /// Record a new OPEN rental event, stamped now.
    pub async fn insert_open(
        exec: impl SqliteExecutor<'_>,
        customer_id: DbId,
        movie_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO rentals (customer_id, movie_id, status, rented_at)
             VALUES (?, ?, ?, ?)",
        )
        .bind(customer_id)
        .bind(movie_id)
        .bind(RENTAL_STATUS_OPEN)
        .bind(Utc::now())
        .execute(exec)
        .await?;
        Ok(())
    }

    /// Close the rental rows for (customer, movie). A state transition,
    /// not a delete: already-closed rows keep their value.
    pub async fn close(
        exec: impl SqliteExecutor<'_>,
        customer_id: DbId,
        movie_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE rentals SET status = ? WHERE customer_id = ? AND movie_id = ?")
            .bind(RENTAL_STATUS_CLOSED)
            .bind(customer_id)
            .bind(movie_id)
            .execute(exec)
            .await?;
        Ok(())
    }

    /// How many OPEN rental rows exist for a movie.
    ///
    /// Summing the status column over the movie's whole history counts
    /// exactly the OPEN rows, since CLOSED is zero.
    pub async fn open_count_for_movie(
        exec: impl SqliteExecutor<'_>,
        movie_id: DbId,
    ) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COALESCE(SUM(status), 0) FROM rentals WHERE movie_id = ?")
            .bind(movie_id)
            .fetch_one(exec)
            .await
    }

    /// A customer's full rental history, newest first, OPEN and CLOSED.
    pub async fn history_for_customer(
        exec: impl SqliteExecutor<'_>,
        customer_id: DbId,
    ) -> Result<Vec<Rental>, sqlx::Error> {
        sqlx::query_as::<_, Rental>(
            "SELECT customer_id, movie_id, status, rented_at
             FROM rentals
             WHERE customer_id = ?
             ORDER BY rented_at DESC",
        )
        .bind(customer_id)
        .fetch_all(exec)
        .await
    }

    /// The customer holding the OPEN rental on a movie, if any.
    ///
    /// At most one exists, per the single-renter invariant.
    pub async fn current_renter(
        exec: impl SqliteExecutor<'_>,
        movie_id: DbId,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT customer_id FROM rentals WHERE movie_id = ? AND status = ?")
            .bind(movie_id)
            .bind(RENTAL_STATUS_OPEN)
            .fetch_optional(exec)
            .await
    }
}
