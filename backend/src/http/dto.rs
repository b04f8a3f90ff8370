//! Data Transfer Objects for the HTTP API.
//!
//! Request query types live here together with the small response bodies
//! that have no counterpart in the routes module. View DTOs are re-exported
//! from [`crate::api`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use crate::api::{
    // Views
    AggregateChartData, DashboardData, TimeSeriesData,
    // Controls
    CameraImage, CameraOption, ControlsData, ParkOption,
    // Export
    DownloadLink,
};
use crate::models::{
    DateRange, Filter, FilterError, HourRange, WeekdaySet, HOUR_MAX, HOUR_MIN,
};

/// Query parameters shared by every view endpoint.
///
/// Omitted parameters default to the pair's observed date bounds, every
/// weekday and the full `[6, 22)` hour window.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FilterQuery {
    #[serde(default)]
    pub park: Option<String>,
    #[serde(default)]
    pub camera: Option<String>,
    /// Inclusive, `YYYY-MM-DD`
    #[serde(default)]
    pub start_date: Option<String>,
    /// Inclusive, `YYYY-MM-DD`
    #[serde(default)]
    pub end_date: Option<String>,
    /// Comma separated ISO weekdays, e.g. `1,2,7`
    #[serde(default)]
    pub weekdays: Option<String>,
    #[serde(default)]
    pub hour_start: Option<String>,
    #[serde(default)]
    pub hour_end: Option<String>,
}

impl FilterQuery {
    pub fn park(&self) -> Option<&str> {
        non_empty(self.park.as_deref())
    }

    pub fn camera(&self) -> Option<&str> {
        non_empty(self.camera.as_deref())
    }

    /// Build a validated filter, filling unset dates from `bounds`.
    ///
    /// Parameters that are present must parse; an empty value is rejected
    /// rather than treated as unset.
    pub fn into_filter(self, bounds: DateRange) -> Result<Filter, FilterError> {
        let dates = DateRange::new(
            parse_date("start_date", self.start_date.as_deref())?.unwrap_or(bounds.start),
            parse_date("end_date", self.end_date.as_deref())?.unwrap_or(bounds.end),
        )?;
        let weekdays = match self.weekdays.as_deref() {
            Some(list) => WeekdaySet::parse(list)?,
            None => WeekdaySet::all(),
        };
        let hours = HourRange::new(
            parse_hour("hour_start", self.hour_start.as_deref())?.unwrap_or(HOUR_MIN),
            parse_hour("hour_end", self.hour_end.as_deref())?.unwrap_or(HOUR_MAX),
        )?;

        let park = self.park().map(str::to_string);
        let camera = self.camera().map(str::to_string);
        Ok(Filter::new(park, camera, dates)
            .with_weekdays(weekdays)
            .with_hours(hours))
    }
}

/// Park/camera selection for the controls and image endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SelectionQuery {
    #[serde(default)]
    pub park: Option<String>,
    #[serde(default)]
    pub camera: Option<String>,
}

impl SelectionQuery {
    pub fn park(&self) -> Option<&str> {
        non_empty(self.park.as_deref())
    }

    pub fn camera(&self) -> Option<&str> {
        non_empty(self.camera.as_deref())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn unparseable(field: &'static str, value: &str) -> FilterError {
    FilterError::Unparseable {
        field,
        value: value.to_string(),
    }
}

fn parse_date(field: &'static str, value: Option<&str>) -> Result<Option<NaiveDate>, FilterError> {
    value
        .map(|v| {
            NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").map_err(|_| unparseable(field, v))
        })
        .transpose()
}

fn parse_hour(field: &'static str, value: Option<&str>) -> Result<Option<u8>, FilterError> {
    value
        .map(|v| v.trim().parse::<u8>().map_err(|_| unparseable(field, v)))
        .transpose()
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// "loaded", "empty" or an error description
    pub dataset: String,
    /// Absent when the record count could not be read
    pub records: Option<usize>,
    /// First and last observed day across all parks
    pub span: Option<DateRange>,
}

/// Park selector entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParkListResponse {
    pub title: String,
    pub parks: Vec<ParkOption>,
    pub total: usize,
}

/// Camera selector entries for one park.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraListResponse {
    pub park: String,
    pub cameras: Vec<CameraOption>,
    /// First camera, auto-selected by the dashboard
    pub selected_camera: Option<String>,
}
