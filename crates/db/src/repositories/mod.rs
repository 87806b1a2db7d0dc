//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods.
//! Customer-store methods take `impl SqliteExecutor` so the engine can
//! run them against the pool or inside an open transaction; catalog-store
//! reads never participate in a transaction and take the pool directly.

pub mod customer_repo;
pub mod movie_repo;
pub mod plan_repo;
pub mod rental_repo;
pub mod search_repo;

pub use customer_repo::CustomerRepo;
pub use movie_repo::MovieRepo;
pub use plan_repo::PlanRepo;
pub use rental_repo::RentalRepo;
pub use search_repo::SearchRepo;
