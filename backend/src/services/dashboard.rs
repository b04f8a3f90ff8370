//! One full recomputation cycle: every view for a filter, from scratch.

use anyhow::Result;

use super::aggregates::compute_chart;
use super::export::build_download_link;
use super::filtering::apply_filter;
use super::images::ImageCatalog;
use super::timeline::compute_time_series;
use crate::api::{AggregateAxis, AggregateMethod, DashboardData};
use crate::models::{Filter, Record};

/// Build every dashboard view from the selected pair's full series.
pub fn compute_dashboard(
    series: &[Record],
    columns: &[String],
    filter: &Filter,
    images: &ImageCatalog,
) -> Result<DashboardData> {
    let selected = apply_filter(series, filter);

    Ok(DashboardData {
        filter: filter.clone(),
        time_series: compute_time_series(series, filter),
        count_by_weekday: compute_chart(&selected, AggregateAxis::Weekday, AggregateMethod::Count),
        count_by_hour: compute_chart(&selected, AggregateAxis::Hour, AggregateMethod::Count),
        average_by_weekday: compute_chart(&selected, AggregateAxis::Weekday, AggregateMethod::Avg),
        average_by_hour: compute_chart(&selected, AggregateAxis::Hour, AggregateMethod::Avg),
        download: build_download_link(columns, &selected)?,
        camera_image: images.image_for(filter.park.as_deref(), filter.camera.as_deref()),
    })
}
