use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod routes;
pub mod validation;

pub use repository::PacmanRepository;

/// Builds the HTTP application around the given store.
pub fn app(repo: PacmanRepository) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(|| async { "Pacman Server - v1.0" }))
        .route("/health", get(routes::health::health_check))

        // Pacman endpoints
        .route("/pacman", delete(routes::pacman::delete_pacman))
        .route("/pacman/{latitude}/{longitude}", post(routes::pacman::create_pacman))
        .route(
            "/pacman/location",
            get(routes::pacman::get_pacman_location)
                .put(routes::pacman::set_pacman_location_from_body),
        )
        .route(
            "/pacman/location/{latitude}/{longitude}",
            put(routes::pacman::set_pacman_location),
        )

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(repo)
}
