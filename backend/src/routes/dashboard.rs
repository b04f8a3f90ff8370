use serde::{Deserialize, Serialize};

use super::aggregates::AggregateChartData;
use super::camera_image::CameraImage;
use super::download::DownloadLink;
use super::timeline::TimeSeriesData;
use crate::models::Filter;

/// Every derived view for one filter, rebuilt from scratch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardData {
    /// The filter after defaults were applied
    pub filter: Filter,
    pub time_series: TimeSeriesData,
    pub count_by_weekday: AggregateChartData,
    pub count_by_hour: AggregateChartData,
    pub average_by_weekday: AggregateChartData,
    pub average_by_hour: AggregateChartData,
    pub download: DownloadLink,
    pub camera_image: CameraImage,
}

pub const GET_DASHBOARD: &str = "/views/dashboard";
