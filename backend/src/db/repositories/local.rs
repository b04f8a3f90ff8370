//! In-memory local repository implementation.
//!
//! Holds the dataset loaded at startup behind an `Arc`. There is no write
//! path: the repository is built from a finished [`Dataset`] and every method
//! only reads from it.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;

use crate::db::repository::*;
use crate::models::{Dataset, Record};

/// In-memory local repository.
///
/// # Example
/// ```
/// use health_matters::db::repositories::LocalRepository;
/// use health_matters::models::Dataset;
///
/// let repo = LocalRepository::new(Dataset::default());
/// assert_eq!(repo.len(), 0);
/// ```
#[derive(Clone)]
pub struct LocalRepository {
    dataset: Arc<Dataset>,
}

impl LocalRepository {
    /// Wrap a loaded dataset.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// Build directly from records; they are ordered by timestamp.
    pub fn from_records(records: Vec<Record>) -> Self {
        Self::new(Dataset::new(records))
    }

    /// Shared handle to the underlying dataset.
    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Get the number of records stored.
    pub fn len(&self) -> usize {
        self.dataset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dataset.is_empty()
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new(Dataset::default())
    }
}

#[async_trait]
impl VisitorRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(!self.dataset.is_empty())
    }

    async fn record_count(&self) -> RepositoryResult<usize> {
        Ok(self.dataset.len())
    }

    async fn list_parks(&self) -> RepositoryResult<Vec<String>> {
        Ok(self.dataset.parks())
    }

    async fn list_cameras(&self, park: &str) -> RepositoryResult<Vec<String>> {
        Ok(self.dataset.cameras(park))
    }

    async fn columns(&self) -> RepositoryResult<Vec<String>> {
        Ok(self.dataset.columns().to_vec())
    }

    async fn fetch_series(&self, park: &str, camera: &str) -> RepositoryResult<Vec<Record>> {
        Ok(self.dataset.series(park, camera))
    }

    async fn series_span(
        &self,
        park: &str,
        camera: &str,
    ) -> RepositoryResult<Option<(NaiveDate, NaiveDate)>> {
        let mut series = self
            .dataset
            .records()
            .iter()
            .filter(|r| r.belongs_to(park, camera));
        let Some(first) = series.next() else {
            return Ok(None);
        };
        let last = series.last().unwrap_or(first);
        Ok(Some((first.date(), last.date())))
    }

    async fn dataset_span(&self) -> RepositoryResult<Option<(NaiveDate, NaiveDate)>> {
        Ok(self.dataset.span())
    }
}
