//! High-level dataset functions that work with any repository implementation.
//!
//! Handlers call these instead of the trait methods so that logging and the
//! small amount of fallback policy live in one place.

use chrono::NaiveDate;
use log::debug;

use super::repository::{RepositoryResult, VisitorRepository};
use crate::models::{DateRange, Record};

/// `Ok(true)` when the repository holds data.
pub async fn health_check(repo: &dyn VisitorRepository) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Park codes in order of first appearance.
pub async fn list_parks(repo: &dyn VisitorRepository) -> RepositoryResult<Vec<String>> {
    repo.list_parks().await
}

/// Cameras observed for `park`, empty when no park is selected.
pub async fn list_cameras(
    repo: &dyn VisitorRepository,
    park: Option<&str>,
) -> RepositoryResult<Vec<String>> {
    match park {
        Some(park) => repo.list_cameras(park).await,
        None => Ok(Vec::new()),
    }
}

/// Column layout used for export.
pub async fn columns(repo: &dyn VisitorRepository) -> RepositoryResult<Vec<String>> {
    repo.columns().await
}

/// Full series for the selected pair, empty when either side is missing.
pub async fn fetch_series(
    repo: &dyn VisitorRepository,
    park: Option<&str>,
    camera: Option<&str>,
) -> RepositoryResult<Vec<Record>> {
    match (park, camera) {
        (Some(park), Some(camera)) => {
            let series = repo.fetch_series(park, camera).await?;
            debug!("fetched {} records for {}/{}", series.len(), park, camera);
            Ok(series)
        }
        _ => Ok(Vec::new()),
    }
}

/// Observed day span of the selected pair, or `fallback` for both ends when
/// nothing is selected or the pair has no records.
pub async fn date_bounds(
    repo: &dyn VisitorRepository,
    park: Option<&str>,
    camera: Option<&str>,
    fallback: NaiveDate,
) -> RepositoryResult<DateRange> {
    let span = match (park, camera) {
        (Some(park), Some(camera)) => repo.series_span(park, camera).await?,
        _ => None,
    };
    Ok(span
        .map(|(start, end)| DateRange { start, end })
        .unwrap_or_else(|| DateRange::single(fallback)))
}
