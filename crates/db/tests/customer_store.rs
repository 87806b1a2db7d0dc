//! Repository tests against a migrated customer store.

use sqlx::SqlitePool;
use vidstore_db::repositories::{CustomerRepo, PlanRepo, RentalRepo};

async fn seed(pool: &SqlitePool) {
    sqlx::query("INSERT INTO plans (id, name, max_rentals, monthly_fee) VALUES (1, 'Basic', 3, 999)")
        .execute(pool)
        .await
        .unwrap();
    sqlx::query("INSERT INTO plans (id, name, max_rentals, monthly_fee) VALUES (2, 'Premium', 10, 2499)")
        .execute(pool)
        .await
        .unwrap();
    sqlx::query(
        "INSERT INTO customers (id, login, password, first_name, last_name, plan_id)
         VALUES (7, 'alex', 'hunter2', 'Alex', 'Moreno', 1)",
    )
    .execute(pool)
    .await
    .unwrap();
}

#[sqlx::test(migrations = "migrations/customer")]
async fn authenticate_requires_exact_credentials(pool: SqlitePool) {
    seed(&pool).await;

    assert_eq!(
        CustomerRepo::authenticate(&pool, "alex", "hunter2")
            .await
            .unwrap(),
        Some(7)
    );
    assert_eq!(
        CustomerRepo::authenticate(&pool, "alex", "Hunter2")
            .await
            .unwrap(),
        None
    );
}

#[sqlx::test(migrations = "migrations/customer")]
async fn plan_lookups(pool: SqlitePool) {
    seed(&pool).await;

    let plans = PlanRepo::list(&pool).await.unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0].name, "Basic");

    assert_eq!(PlanRepo::max_rentals(&pool, 2).await.unwrap(), Some(10));
    assert_eq!(PlanRepo::max_rentals(&pool, 9).await.unwrap(), None);
}

#[sqlx::test(migrations = "migrations/customer")]
async fn plan_info_joins_customer_with_plan(pool: SqlitePool) {
    seed(&pool).await;

    let info = CustomerRepo::plan_info(&pool, 7).await.unwrap().unwrap();
    assert_eq!(info.plan_id, 1);
    assert_eq!(info.max_rentals, 3);

    assert!(CustomerRepo::plan_info(&pool, 42).await.unwrap().is_none());
}

#[sqlx::test(migrations = "migrations/customer")]
async fn set_plan_updates_the_customer_row(pool: SqlitePool) {
    seed(&pool).await;

    assert!(CustomerRepo::set_plan(&pool, 7, 2).await.unwrap());
    let info = CustomerRepo::plan_info(&pool, 7).await.unwrap().unwrap();
    assert_eq!(info.plan_id, 2);

    assert!(!CustomerRepo::set_plan(&pool, 42, 2).await.unwrap());
}

#[sqlx::test(migrations = "migrations/customer")]
async fn remaining_rentals_subtracts_open_count_from_cap(pool: SqlitePool) {
    seed(&pool).await;

    assert_eq!(
        RentalRepo::remaining_rentals(&pool, 7).await.unwrap(),
        Some(3)
    );

    RentalRepo::insert_open(&pool, 7, 10).await.unwrap();
    RentalRepo::insert_open(&pool, 7, 11).await.unwrap();
    assert_eq!(
        RentalRepo::remaining_rentals(&pool, 7).await.unwrap(),
        Some(1)
    );

    // Closed rows stop counting against the cap.
    RentalRepo::close(&pool, 7, 10).await.unwrap();
    assert_eq!(
        RentalRepo::remaining_rentals(&pool, 7).await.unwrap(),
        Some(2)
    );

    // Missing customer: the cap subquery is null, not zero.
    assert_eq!(RentalRepo::remaining_rentals(&pool, 42).await.unwrap(), None);
}

#[sqlx::test(migrations = "migrations/customer")]
async fn rental_state_transitions_and_counters(pool: SqlitePool) {
    seed(&pool).await;

    assert_eq!(RentalRepo::open_count_for_movie(&pool, 10).await.unwrap(), 0);
    assert_eq!(RentalRepo::current_renter(&pool, 10).await.unwrap(), None);

    RentalRepo::insert_open(&pool, 7, 10).await.unwrap();
    assert_eq!(RentalRepo::open_count_for_movie(&pool, 10).await.unwrap(), 1);
    assert_eq!(
        RentalRepo::current_renter(&pool, 10).await.unwrap(),
        Some(7)
    );
    RentalRepo::close(&pool, 7, 10).await.unwrap();
    assert_eq!(RentalRepo::open_count_for_movie(&pool, 10).await.unwrap(), 0);
    assert_eq!(RentalRepo::current_renter(&pool, 10).await.unwrap(), None);

    // History survives the close.
    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM rentals WHERE movie_id = 10")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 1);
}
