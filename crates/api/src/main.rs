use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vidstore_api::config::ServerConfig;
use vidstore_api::router::build_app_router;
use vidstore_api::state::AppState;
use vidstore_engine::RentalEngine;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vidstore_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Stores ---
    let catalog = vidstore_db::create_pool(&config.catalog_database_url)
        .await
        .expect("Failed to connect to catalog store");
    let customers = vidstore_db::create_pool(&config.customer_database_url)
        .await
        .expect("Failed to connect to customer store");
    tracing::info!("Store connection pools created");

    vidstore_db::health_check(&catalog)
        .await
        .expect("Catalog store health check failed");
    vidstore_db::health_check(&customers)
        .await
        .expect("Customer store health check failed");
    tracing::info!("Store health checks passed");

    vidstore_db::run_catalog_migrations(&catalog)
        .await
        .expect("Failed to run catalog migrations");
    vidstore_db::run_customer_migrations(&customers)
        .await
        .expect("Failed to run customer migrations");
    tracing::info!("Store migrations applied");

    // --- Engine ---
    let engine = Arc::new(RentalEngine::new(catalog.clone(), customers.clone()));

    // --- App state & router ---
    let state = AppState {
        engine,
        catalog,
        customers,
        config: Arc::new(config.clone()),
    };
    let app = build_app_router(state, &config);

    // --- Serve ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST"),
        config.port,
    );
    tracing::info!("Starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listen address");
    axum::serve(listener, app)
        .await
        .expect("Server terminated unexpectedly");
}
