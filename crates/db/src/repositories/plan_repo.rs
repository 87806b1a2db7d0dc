//! Customer-store queries for the `plans` table.

use sqlx::SqliteExecutor;
use vidstore_core::types::DbId;

use crate::models::plan::Plan;

/// Read-only access to the plan catalog.
pub struct PlanRepo;

impl PlanRepo {
    /// All plans, ascending id.
    pub async fn list(exec: impl SqliteExecutor<'_>) -> Result<Vec<Plan>, sqlx::Error> {
        sqlx::query_as::<_, Plan>(
            "SELECT id, name, max_rentals, monthly_fee FROM plans ORDER BY id",
        )
        .fetch_all(exec)
        .await
    }

    /// The rental cap of one plan, or `None` if the plan does not exist.
    ///
    /// Doubles as the plan-validity check for plan changes.
    pub async fn max_rentals(
        exec: impl SqliteExecutor<'_>,
        id: DbId,
    ) -> Result<Option<i64>, sqlx::Error> {
        sqlx::query_scalar("SELECT max_rentals FROM plans WHERE id = ?")
            .bind(id)
            .fetch_optional(exec)
            .await
    }
}
