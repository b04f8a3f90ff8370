//! Application state for the HTTP server.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::db::repository::VisitorRepository;
use crate::services::images::ImageCatalog;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Read-only dataset access
    pub repository: Arc<dyn VisitorRepository>,
    /// Image listing taken at startup
    pub images: Arc<ImageCatalog>,
    /// Park code to display name
    pub park_names: Arc<BTreeMap<String, String>>,
    /// Date bounds used when no pair is selected
    pub initial_date: NaiveDate,
    /// Dashboard heading
    pub title: Arc<str>,
}

impl AppState {
    /// Create a new application state with the given repository and image
    /// listing, taking presentation defaults from `config`.
    pub fn new(
        repository: Arc<dyn VisitorRepository>,
        images: ImageCatalog,
        config: &DashboardConfig,
    ) -> Self {
        Self {
            repository,
            images: Arc::new(images),
            park_names: Arc::new(config.parks.clone()),
            initial_date: config.dashboard.initial_date,
            title: Arc::from(config.dashboard.title.as_str()),
        }
    }
}
