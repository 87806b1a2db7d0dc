pub mod health;

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// POST /auth/login                    authenticate
///
/// GET  /plans                         plan catalog
///
/// GET  /customers/{id}                personal data
/// PUT  /customers/{id}/plan           change plan
/// GET  /customers/{id}/rentals        rental history
/// POST /customers/{id}/rentals        rent a movie
/// POST /customers/{id}/returns        return a movie
///
/// GET  /search                        sort-merge search
/// GET  /browse                        dependent-join search
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/plans", get(handlers::plans::list))
        .route("/customers/{id}", get(handlers::customers::personal_data))
        .route("/customers/{id}/plan", put(handlers::customers::change_plan))
        .route(
            "/customers/{id}/rentals",
            get(handlers::rentals::history).post(handlers::rentals::rent),
        )
        .route(
            "/customers/{id}/returns",
            post(handlers::rentals::return_movie),
        )
        .route("/search", get(handlers::search::fast_search))
        .route("/browse", get(handlers::search::browse))
}
