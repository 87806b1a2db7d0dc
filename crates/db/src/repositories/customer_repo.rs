//! Customer-store queries for the `customers` table.

use sqlx::SqliteExecutor;
use vidstore_core::types::DbId;

use crate::models::customer::{CustomerName, PlanInfo};

/// Point lookups and the single write (plan assignment) on customers.
pub struct CustomerRepo;

impl CustomerRepo {
    /// Look up the customer matching these credentials exactly.
    ///
    /// Expected misses are `None`, not an error. Credentials are compared
    /// by equality against stored values; hardening belongs to an outer
    /// auth layer, not here.
    pub async fn authenticate(
        exec: impl SqliteExecutor<'_>,
        login: &str,
        password: &str,
    ) -> Result<Option<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM customers WHERE login = ? AND password = ?")
            .bind(login)
            .bind(password)
            .fetch_optional(exec)
            .await
    }

    /// First and last name of a customer.
    pub async fn name_of(
        exec: impl SqliteExecutor<'_>,
        id: DbId,
    ) -> Result<Option<CustomerName>, sqlx::Error> {
        sqlx::query_as::<_, CustomerName>(
            "SELECT first_name, last_name FROM customers WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(exec)
        .await
    }

    /// A customer's current plan id and that plan's rental cap.
    pub async fn plan_info(
        exec: impl SqliteExecutor<'_>,
        id: DbId,
    ) -> Result<Option<PlanInfo>, sqlx::Error> {
        sqlx::query_as::<_, PlanInfo>(
            "SELECT c.plan_id, p.max_rentals
             FROM customers c
             INNER JOIN plans p ON p.id = c.plan_id
             WHERE c.id = ?",
        )
        .bind(id)
        .fetch_optional(exec)
        .await
    }

    /// Assign a plan to a customer. Returns `true` if the row was updated.
    pub async fn set_plan(
        exec: impl SqliteExecutor<'_>,
        id: DbId,
        plan_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE customers SET plan_id = ? WHERE id = ?")
            .bind(plan_id)
            .bind(id)
            .execute(exec)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
