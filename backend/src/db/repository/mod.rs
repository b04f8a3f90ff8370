//! Repository trait for abstracting dataset access.
//!
//! Views never touch the loaded records directly; they go through
//! [`VisitorRepository`] so the HTTP layer and tests can share one seam.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::models::Record;

pub mod error;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Read-only access to the visitor-count dataset.
///
/// # Thread Safety
/// Implementations must be `Send + Sync` so a single instance can be shared
/// across request handlers.
#[async_trait]
pub trait VisitorRepository: Send + Sync {
    // ==================== Health ====================

    /// `Ok(true)` when the dataset is loaded and non-empty.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Number of records held.
    async fn record_count(&self) -> RepositoryResult<usize>;

    // ==================== Parks & Cameras ====================

    /// Distinct park codes in order of first appearance.
    async fn list_parks(&self) -> RepositoryResult<Vec<String>>;

    /// Distinct, sorted camera codes observed for a park. Unknown parks yield
    /// an empty list.
    async fn list_cameras(&self, park: &str) -> RepositoryResult<Vec<String>>;

    // ==================== Records ====================

    /// Header of the input file, in file order.
    async fn columns(&self) -> RepositoryResult<Vec<String>>;

    /// Every record of a park/camera pair in timestamp order. Unknown pairs
    /// yield an empty list.
    async fn fetch_series(&self, park: &str, camera: &str) -> RepositoryResult<Vec<Record>>;

    /// First and last observed day of a park/camera pair.
    async fn series_span(
        &self,
        park: &str,
        camera: &str,
    ) -> RepositoryResult<Option<(NaiveDate, NaiveDate)>>;

    /// First and last observed day of the whole dataset.
    async fn dataset_span(&self) -> RepositoryResult<Option<(NaiveDate, NaiveDate)>>;
}
