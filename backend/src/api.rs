//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types for the HTTP API.
//! All types derive Serialize/Deserialize for JSON serialization.

pub use crate::routes::aggregates::AggregateAxis;
pub use crate::routes::aggregates::AggregateBar;
pub use crate::routes::aggregates::AggregateChartData;
pub use crate::routes::aggregates::AggregateMethod;
pub use crate::routes::camera_image::CameraImage;
pub use crate::routes::dashboard::DashboardData;
pub use crate::routes::download::DownloadLink;
pub use crate::routes::landing::CameraOption;
pub use crate::routes::landing::ControlsData;
pub use crate::routes::landing::ParkOption;
pub use crate::routes::timeline::DailyCount;
pub use crate::routes::timeline::GapAnnotation;
pub use crate::routes::timeline::HighlightRegion;
pub use crate::routes::timeline::TimeSeriesData;

pub use crate::models::{DateRange, Filter, HourRange, Record, WeekdaySet};
