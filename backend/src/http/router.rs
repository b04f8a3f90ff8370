//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;
use crate::routes::{aggregates, camera_image, dashboard, download, landing, timeline};

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive; the dashboard front end may be served elsewhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Controls
        .route(landing::LIST_PARKS, get(handlers::list_parks))
        .route(landing::LIST_CAMERAS, get(handlers::list_cameras))
        .route(landing::GET_CONTROLS, get(handlers::get_controls))
        .route(camera_image::GET_CAMERA_IMAGE, get(handlers::get_camera_image))
        // Views
        .route(timeline::GET_TIME_SERIES, get(handlers::get_time_series))
        .route(aggregates::GET_COUNT_BY_WEEKDAY, get(handlers::get_count_by_weekday))
        .route(aggregates::GET_COUNT_BY_HOUR, get(handlers::get_count_by_hour))
        .route(aggregates::GET_AVERAGE_BY_WEEKDAY, get(handlers::get_average_by_weekday))
        .route(aggregates::GET_AVERAGE_BY_HOUR, get(handlers::get_average_by_hour))
        .route(dashboard::GET_DASHBOARD, get(handlers::get_dashboard))
        // Export
        .route(download::GET_DOWNLOAD_LINK, get(handlers::get_download_link))
        .route(download::EXPORT_CSV, get(handlers::export_csv));

    let image_route = format!("{}{{file}}", state.images.route());

    Router::new()
        .route("/health", get(handlers::health_check))
        .route(&image_route, get(handlers::serve_image))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
