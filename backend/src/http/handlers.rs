//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint. Dataset access goes through
//! the repository; view computation is synchronous and runs on the blocking
//! pool.

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use log::debug;

use super::dto::{
    AggregateChartData, CameraImage, CameraListResponse, ControlsData, DashboardData,
    DownloadLink, FilterQuery, HealthResponse, ParkListResponse, SelectionQuery, TimeSeriesData,
};
use super::error::AppError;
use super::extract::ApiQuery;
use super::state::AppState;
use crate::api::{AggregateAxis, AggregateMethod};
use crate::db::services as db_services;
use crate::models::{DateRange, Filter, Record};
use crate::services::{aggregates, controls, dashboard, export, filtering, timeline};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

/// Validated filter plus the full series of the selected pair.
async fn resolve_filter(
    state: &AppState,
    query: FilterQuery,
) -> Result<(Filter, Vec<Record>), AppError> {
    let repo = state.repository.as_ref();
    let (park, camera) = (query.park(), query.camera());

    let bounds = db_services::date_bounds(repo, park, camera, state.initial_date).await?;
    let series = db_services::fetch_series(repo, park, camera).await?;
    let filter = query.into_filter(bounds)?;
    debug!(
        "filter {:?}/{:?} {}..={} over {} records",
        filter.park,
        filter.camera,
        filter.dates.start,
        filter.dates.end,
        series.len()
    );
    Ok((filter, series))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the dataset is loaded.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repo = state.repository.as_ref();
    let (dataset, records) = match (
        db_services::health_check(repo).await,
        repo.record_count().await,
    ) {
        (Ok(loaded), Ok(count)) => {
            let status = if loaded { "loaded" } else { "empty" };
            (status.to_string(), Some(count))
        }
        (Err(e), _) | (_, Err(e)) => (format!("error: {}", e), None),
    };
    let span = repo
        .dataset_span()
        .await
        .ok()
        .flatten()
        .map(|(start, end)| DateRange { start, end });

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        dataset,
        records,
        span,
    }))
}

// =============================================================================
// Controls
// =============================================================================

/// GET /v1/parks
///
/// Park selector entries sorted by display name.
pub async fn list_parks(State(state): State<AppState>) -> HandlerResult<ParkListResponse> {
    let parks = db_services::list_parks(state.repository.as_ref()).await?;
    let parks = controls::park_options(&parks, &state.park_names);
    let total = parks.len();

    Ok(Json(ParkListResponse {
        title: state.title.to_string(),
        parks,
        total,
    }))
}

/// GET /v1/parks/{park}/cameras
///
/// Cameras observed for a park; the first one is the auto-selected camera.
pub async fn list_cameras(
    State(state): State<AppState>,
    Path(park): Path<String>,
) -> HandlerResult<CameraListResponse> {
    let cameras = db_services::list_cameras(state.repository.as_ref(), Some(&park)).await?;
    let cameras = controls::camera_options(&cameras);
    let selected_camera = controls::select_camera(&cameras, None);

    Ok(Json(CameraListResponse {
        park,
        cameras,
        selected_camera,
    }))
}

/// GET /v1/controls?park=&camera=
///
/// Dependent control values after a park/camera selection: camera list,
/// selected camera, date bounds and snapshot image.
pub async fn get_controls(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SelectionQuery>,
) -> HandlerResult<ControlsData> {
    let repo = state.repository.as_ref();
    let park = query.park();

    let cameras = controls::camera_options(&db_services::list_cameras(repo, park).await?);
    let selected_camera = controls::select_camera(&cameras, query.camera());
    let date_range = db_services::date_bounds(
        repo,
        park,
        selected_camera.as_deref(),
        state.initial_date,
    )
    .await?;

    Ok(Json(controls::build_controls(
        park,
        cameras,
        selected_camera,
        date_range,
        &state.images,
    )))
}

/// GET /v1/camera-image?park=&camera=
///
/// Snapshot image source for a selection, or the placeholder.
pub async fn get_camera_image(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<SelectionQuery>,
) -> HandlerResult<CameraImage> {
    Ok(Json(state.images.image_for(query.park(), query.camera())))
}

// =============================================================================
// Views
// =============================================================================

/// GET /v1/views/time-series
///
/// Daily visitor totals with "no images" shading.
pub async fn get_time_series(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FilterQuery>,
) -> HandlerResult<TimeSeriesData> {
    let (filter, series) = resolve_filter(&state, query).await?;

    let data = tokio::task::spawn_blocking(move || {
        timeline::compute_time_series(&series, &filter)
    })
    .await?;

    Ok(Json(data))
}

async fn chart_view(
    state: AppState,
    query: FilterQuery,
    axis: AggregateAxis,
    method: AggregateMethod,
) -> HandlerResult<AggregateChartData> {
    let (filter, series) = resolve_filter(&state, query).await?;

    let data = tokio::task::spawn_blocking(move || {
        let selected = filtering::apply_filter(&series, &filter);
        aggregates::compute_chart(&selected, axis, method)
    })
    .await?;

    Ok(Json(data))
}

/// GET /v1/views/by-weekday
pub async fn get_count_by_weekday(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FilterQuery>,
) -> HandlerResult<AggregateChartData> {
    chart_view(state, query, AggregateAxis::Weekday, AggregateMethod::Count).await
}

/// GET /v1/views/by-hour
pub async fn get_count_by_hour(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FilterQuery>,
) -> HandlerResult<AggregateChartData> {
    chart_view(state, query, AggregateAxis::Hour, AggregateMethod::Count).await
}

/// GET /v1/views/by-weekday/average
pub async fn get_average_by_weekday(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FilterQuery>,
) -> HandlerResult<AggregateChartData> {
    chart_view(state, query, AggregateAxis::Weekday, AggregateMethod::Avg).await
}

/// GET /v1/views/by-hour/average
pub async fn get_average_by_hour(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FilterQuery>,
) -> HandlerResult<AggregateChartData> {
    chart_view(state, query, AggregateAxis::Hour, AggregateMethod::Avg).await
}

/// GET /v1/views/dashboard
///
/// Every view recomputed for one filter.
pub async fn get_dashboard(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FilterQuery>,
) -> HandlerResult<DashboardData> {
    let (filter, series) = resolve_filter(&state, query).await?;
    let columns = db_services::columns(state.repository.as_ref()).await?;
    let images = state.images.clone();

    let data = tokio::task::spawn_blocking(move || {
        dashboard::compute_dashboard(&series, &columns, &filter, &images)
    })
    .await??;

    Ok(Json(data))
}

// =============================================================================
// Export
// =============================================================================

/// GET /v1/download-link
///
/// Inline `data:` URI of the filtered CSV.
pub async fn get_download_link(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FilterQuery>,
) -> HandlerResult<DownloadLink> {
    let (filter, series) = resolve_filter(&state, query).await?;

    let columns = db_services::columns(state.repository.as_ref()).await?;

    let link = tokio::task::spawn_blocking(move || {
        let selected = filtering::apply_filter(&series, &filter);
        export::build_download_link(&columns, &selected)
    })
    .await??;

    Ok(Json(link))
}

/// GET /v1/export.csv
///
/// The filtered CSV as a file attachment.
pub async fn export_csv(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FilterQuery>,
) -> Result<Response, AppError> {
    let (filter, series) = resolve_filter(&state, query).await?;

    let columns = db_services::columns(state.repository.as_ref()).await?;

    let csv = tokio::task::spawn_blocking(move || {
        let selected = filtering::apply_filter(&series, &filter);
        export::to_csv_string(&columns, &selected)
    })
    .await??;

    let disposition = format!("attachment; filename=\"{}\"", export::DOWNLOAD_FILENAME);
    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}

// =============================================================================
// Static images
// =============================================================================

/// GET /static/{file}
///
/// Serve a snapshot image. Only names present in the startup listing are
/// served; anything else is rejected with 403.
pub async fn serve_image(
    State(state): State<AppState>,
    Path(file): Path<String>,
) -> Result<Response, AppError> {
    let bytes = state.images.read(&file).await?;

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, content_type(&file))],
        bytes,
    )
        .into_response())
}

fn content_type(file: &str) -> &'static str {
    let extension = file.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}
