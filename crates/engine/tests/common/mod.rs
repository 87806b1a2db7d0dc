//! Two-store test fixture: in-memory catalog and customer databases with
//! seed helpers for movies, people, plans and customers.

#![allow(dead_code)]

use vidstore_core::types::DbId;
use vidstore_db::DbPool;
use vidstore_engine::RentalEngine;

pub struct TestStores {
    pub catalog: DbPool,
    pub customers: DbPool,
}

/// Fresh, migrated in-memory stores.
pub async fn stores() -> TestStores {
    let catalog = vidstore_db::create_memory_pool().await.unwrap();
    let customers = vidstore_db::create_memory_pool().await.unwrap();
    vidstore_db::run_catalog_migrations(&catalog).await.unwrap();
    vidstore_db::run_customer_migrations(&customers).await.unwrap();
    TestStores { catalog, customers }
}

impl TestStores {
    pub fn engine(&self) -> RentalEngine {
        RentalEngine::new(self.catalog.clone(), self.customers.clone())
    }

    pub async fn movie(&self, id: DbId, title: &str, year: i64) {
        sqlx::query("INSERT INTO movies (id, title, year) VALUES (?, ?, ?)")
            .bind(id)
            .bind(title)
            .bind(year)
            .execute(&self.catalog)
            .await
            .unwrap();
    }

    pub async fn director(&self, id: DbId, first: &str, last: &str) {
        sqlx::query("INSERT INTO directors (id, first_name, last_name) VALUES (?, ?, ?)")
            .bind(id)
            .bind(first)
            .bind(last)
            .execute(&self.catalog)
            .await
            .unwrap();
    }

    pub async fn directed_by(&self, movie_id: DbId, director_id: DbId) {
        sqlx::query("INSERT INTO movie_directors (movie_id, director_id) VALUES (?, ?)")
            .bind(movie_id)
            .bind(director_id)
            .execute(&self.catalog)
            .await
            .unwrap();
    }

    pub async fn actor(&self, id: DbId, first: &str, last: &str) {
        sqlx::query("INSERT INTO actors (id, first_name, last_name) VALUES (?, ?, ?)")
            .bind(id)
            .bind(first)
            .bind(last)
            .execute(&self.catalog)
            .await
            .unwrap();
    }

    pub async fn cast_in(&self, movie_id: DbId, actor_id: DbId) {
        sqlx::query("INSERT INTO casts (movie_id, actor_id) VALUES (?, ?)")
            .bind(movie_id)
            .bind(actor_id)
            .execute(&self.catalog)
            .await
            .unwrap();
    }

    pub async fn plan(&self, id: DbId, name: &str, max_rentals: i64) {
        sqlx::query("INSERT INTO plans (id, name, max_rentals, monthly_fee) VALUES (?, ?, ?, 999)")
            .bind(id)
            .bind(name)
            .bind(max_rentals)
            .execute(&self.customers)
            .await
            .unwrap();
    }

    pub async fn customer(&self, id: DbId, login: &str, password: &str, plan_id: DbId) {
        sqlx::query(
            "INSERT INTO customers (id, login, password, first_name, last_name, plan_id)
             VALUES (?, ?, ?, 'Alex', 'Moreno', ?)",
        )
        .bind(id)
        .bind(login)
        .bind(password)
        .bind(plan_id)
        .execute(&self.customers)
        .await
        .unwrap();
    }

    /// Current plan id straight from the customer row.
    pub async fn plan_of(&self, customer_id: DbId) -> DbId {
        sqlx::query_scalar("SELECT plan_id FROM customers WHERE id = ?")
            .bind(customer_id)
            .fetch_one(&self.customers)
            .await
            .unwrap()
    }

    /// OPEN rows for a movie, straight from the rentals table.
    pub async fn open_rows_for_movie(&self, movie_id: DbId) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM rentals WHERE movie_id = ? AND status = 1")
            .bind(movie_id)
            .fetch_one(&self.customers)
            .await
            .unwrap()
    }

    /// Total rows ever written for a movie, open or closed.
    pub async fn all_rows_for_movie(&self, movie_id: DbId) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM rentals WHERE movie_id = ?")
            .bind(movie_id)
            .fetch_one(&self.customers)
            .await
            .unwrap()
    }
}
