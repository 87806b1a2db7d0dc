use std::sync::Arc;

use vidstore_db::DbPool;
use vidstore_engine::RentalEngine;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`. Cheaply cloneable.
#[derive(Clone)]
pub struct AppState {
    /// The transactional core.
    pub engine: Arc<RentalEngine>,
    /// Catalog store pool (health checks).
    pub catalog: DbPool,
    /// Customer store pool (health checks).
    pub customers: DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
