//! # Health Matters
//!
//! Visitor-count dashboard backend for park surveillance cameras.
//!
//! The crate loads a static, timestamped visitor-count table once at start-up
//! and recomputes every dashboard view on demand from the selected
//! park/camera pair and filter: the daily time series with "no images"
//! shading, count and average bar charts by weekday and by hour, the
//! filtered CSV export and the representative camera snapshot.
//!
//! ## Architecture
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`config`]: `dashboard.toml` settings and environment overrides
//! - [`db`]: CSV loading, repository seam and the process-wide dataset
//! - [`models`]: Records, filters and time helpers
//! - [`services`]: Pure view computations
//! - [`routes`]: Route-specific data types
//! - [`http`]: Axum-based HTTP server and request handlers
//!

// RepositoryError carries a rich ErrorContext
#![allow(clippy::result_large_err)]

pub mod api;
pub mod config;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
