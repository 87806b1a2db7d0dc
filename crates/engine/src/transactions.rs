//! The four customer-store transactions plus the single-read lookups.
//!
//! rent, return and change-plan all follow the write-then-verify shape:
//! read the counters the invariant needs, issue the write unconditionally,
//! re-read, and let a pure decision rule from `vidstore_core` pick commit
//! or rollback. Any store error propagates immediately; the transaction
//! scope drops and rolls back on its way out.

use serde::Serialize;
use vidstore_core::rental::{
    decide_plan_change, decide_rent, decide_return, Outcome, PlanChangeCheck, RentCheck,
    ReturnCheck,
};
use vidstore_core::types::DbId;
use vidstore_db::models::plan::Plan;
use vidstore_db::models::rental::Rental;
use vidstore_db::repositories::{CustomerRepo, MovieRepo, PlanRepo, RentalRepo};

use crate::{EngineError, RentalEngine};

/// Result of a rent attempt: the outcome plus the values the decision saw.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RentReceipt {
    pub outcome: Outcome,
    #[serde(flatten)]
    pub check: RentCheck,
}

/// Result of a return attempt.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ReturnReceipt {
    pub outcome: Outcome,
    #[serde(flatten)]
    pub check: ReturnCheck,
}

/// Result of a plan-change attempt.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PlanChangeReceipt {
    pub outcome: Outcome,
    #[serde(flatten)]
    pub check: PlanChangeCheck,
}

/// Greeting data for a logged-in customer.
#[derive(Debug, Clone, Serialize)]
pub struct PersonalData {
    pub customer_id: DbId,
    pub name: String,
    pub remaining_rentals: i64,
}

impl RentalEngine {
    /// Authenticate a customer by exact credential match.
    ///
    /// `None` is the expected-miss outcome, not an error.
    pub async fn login(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Option<DbId>, EngineError> {
        let customer_id = CustomerRepo::authenticate(&self.customers, login, password).await?;
        tracing::debug!(login, found = customer_id.is_some(), "login attempt");
        Ok(customer_id)
    }

    /// Name and remaining rentals for a customer, read from one snapshot.
    pub async fn personal_data(&self, customer_id: DbId) -> Result<PersonalData, EngineError> {
        let mut tx = self.customers.begin().await?;

        let name = CustomerRepo::name_of(&mut *tx, customer_id)
            .await?
            .ok_or(EngineError::NotFound {
                entity: "customer",
                id: customer_id,
            })?;
        let remaining_rentals = self.remaining_rentals(&mut tx, customer_id).await?;

        tx.commit().await?;

        Ok(PersonalData {
            customer_id,
            name: format!("{} {}", name.first_name, name.last_name),
            remaining_rentals,
        })
    }

    /// All rental plans on offer.
    pub async fn list_plans(&self) -> Result<Vec<Plan>, EngineError> {
        Ok(PlanRepo::list(&self.customers).await?)
    }

    /// A customer's full rental history, newest first.
    pub async fn rental_history(&self, customer_id: DbId) -> Result<Vec<Rental>, EngineError> {
        Ok(RentalRepo::history_for_customer(&self.customers, customer_id).await?)
    }

    /// Rent a movie to a customer.
    ///
    /// Write-then-verify: the OPEN rental row is inserted unconditionally,
    /// then the transaction commits only if the movie id was valid, the
    /// movie's post-insert OPEN count is exactly 1 (nobody else held it)
    /// and the customer had capacity before the insert.
    pub async fn rent(
        &self,
        customer_id: DbId,
        movie_id: DbId,
    ) -> Result<RentReceipt, EngineError> {
        let _guard = self.write_lock.lock().await;
        let mut tx = self.customers.begin().await?;

        // The catalog is a separate store; its read sits outside the
        // customer-store transaction, as the movie row cannot change here.
        let valid_movie = MovieRepo::is_valid(&self.catalog, movie_id).await?;
        let remaining_before = self.remaining_rentals(&mut tx, customer_id).await?;

        RentalRepo::insert_open(&mut *tx, customer_id, movie_id).await?;
        let open_count_after = RentalRepo::open_count_for_movie(&mut *tx, movie_id).await?;

        let check = RentCheck {
            valid_movie,
            open_count_after,
            remaining_before,
        };
        let outcome = decide_rent(&check);
        match outcome {
            Outcome::Committed => tx.commit().await?,
            _ => tx.rollback().await?,
        }

        tracing::info!(customer_id, movie_id, ?outcome, "rent transaction finished");
        Ok(RentReceipt { outcome, check })
    }

    /// Return a movie.
    ///
    /// Closing the OPEN row must free exactly one slot; anything else
    /// (invalid movie, nothing was open) rolls back.
    pub async fn return_movie(
        &self,
        customer_id: DbId,
        movie_id: DbId,
    ) -> Result<ReturnReceipt, EngineError> {
        let _guard = self.write_lock.lock().await;
        let mut tx = self.customers.begin().await?;

        let valid_movie = MovieRepo::is_valid(&self.catalog, movie_id).await?;
        let remaining_before = self.remaining_rentals(&mut tx, customer_id).await?;

        RentalRepo::close(&mut *tx, customer_id, movie_id).await?;
        let remaining_after = self.remaining_rentals(&mut tx, customer_id).await?;

        let check = ReturnCheck {
            valid_movie,
            remaining_before,
            remaining_after,
        };
        let outcome = decide_return(&check);
        match outcome {
            Outcome::Committed => tx.commit().await?,
            _ => tx.rollback().await?,
        }

        tracing::info!(customer_id, movie_id, ?outcome, "return transaction finished");
        Ok(ReturnReceipt { outcome, check })
    }

    /// Move a customer onto a new plan.
    ///
    /// The plan id is written unconditionally, then undone unless the
    /// customer's currently-held movies fit under the new cap. A
    /// same-plan change always rolls back and reports `Noop`.
    pub async fn change_plan(
        &self,
        customer_id: DbId,
        new_plan_id: DbId,
    ) -> Result<PlanChangeReceipt, EngineError> {
        let _guard = self.write_lock.lock().await;
        let mut tx = self.customers.begin().await?;

        let new_max_rentals = PlanRepo::max_rentals(&mut *tx, new_plan_id)
            .await?
            .ok_or(EngineError::NotFound {
                entity: "plan",
                id: new_plan_id,
            })?;
        let info = CustomerRepo::plan_info(&mut *tx, customer_id)
            .await?
            .ok_or(EngineError::NotFound {
                entity: "customer",
                id: customer_id,
            })?;
        let remaining_before = self.remaining_rentals(&mut tx, customer_id).await?;

        CustomerRepo::set_plan(&mut *tx, customer_id, new_plan_id).await?;

        let check = PlanChangeCheck {
            current_plan_id: info.plan_id,
            new_plan_id,
            current_max_rentals: info.max_rentals,
            new_max_rentals,
            remaining_before,
        };
        let outcome = decide_plan_change(&check);
        match outcome {
            Outcome::Committed => tx.commit().await?,
            _ => tx.rollback().await?,
        }

        tracing::info!(customer_id, new_plan_id, ?outcome, "plan change finished");
        Ok(PlanChangeReceipt { outcome, check })
    }

    /// Remaining rentals inside an open transaction, with a missing
    /// customer surfaced as NotFound instead of a null count.
    async fn remaining_rentals(
        &self,
        tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
        customer_id: DbId,
    ) -> Result<i64, EngineError> {
        RentalRepo::remaining_rentals(&mut **tx, customer_id)
            .await?
            .ok_or(EngineError::NotFound {
                entity: "customer",
                id: customer_id,
            })
    }
}
