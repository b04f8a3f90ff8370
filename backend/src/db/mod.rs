//! Dataset storage: loading, the repository seam and the process-wide
//! read-only instance.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers / services                                │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  services.rs - fallbacks for missing selections          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  VisitorRepository trait                                 │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────────────────────┐
//!     │  LocalRepository (immutable Dataset in Arc)   │
//!     └──────────────────────────────────────────────┘
//! ```
//!
//! The dataset is loaded exactly once by [`init_repository`]; afterwards
//! [`get_repository`] hands out the same shared instance and nothing can
//! write to it.

pub mod loader;
pub mod repositories;
pub mod repository;
pub mod services;

pub use loader::{load_dataset, read_dataset};
pub use repositories::LocalRepository;
pub use repository::{ErrorContext, RepositoryError, RepositoryResult, VisitorRepository};
pub use services::{columns, date_bounds, fetch_series, health_check, list_cameras, list_parks};

use anyhow::{Context, Result};
use std::path::Path;
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn VisitorRepository>> = OnceLock::new();

/// Load the dataset at `csv_path` and install it as the global repository.
///
/// Calling this again after a successful load is a no-op.
pub fn init_repository(csv_path: &Path) -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let dataset = load_dataset(csv_path)
        .with_context(|| format!("Failed to load dataset from {}", csv_path.display()))?;
    let repo: Arc<dyn VisitorRepository> = Arc::new(LocalRepository::new(dataset));
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn VisitorRepository>> {
    REPOSITORY
        .get()
        .context("Dataset not initialized. Call init_repository() first.")
}
