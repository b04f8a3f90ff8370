//! Visitors-per-day time series.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use super::filtering::apply_filter;
use super::gaps::{highlight_intervals, no_data_dates};
use crate::api::{DailyCount, TimeSeriesData};
use crate::models::{Filter, Record};

pub const TIME_SERIES_TITLE: &str = "Number of visitors per day";

/// Daily totals of the filtered records, keeping only days that had images.
pub fn daily_counts(records: &[&Record]) -> Vec<DailyCount> {
    let mut days: BTreeMap<NaiveDate, Option<u64>> = BTreeMap::new();
    for record in records {
        let slot = days.entry(record.date()).or_insert(None);
        if !record.is_sentinel() {
            *slot = Some(slot.unwrap_or(0) + record.count);
        }
    }
    days.into_iter()
        .filter_map(|(date, count)| count.map(|count| DailyCount { date, count }))
        .collect()
}

/// Build the time series for `filter` from the pair's full `series`.
///
/// Bars honour every filter dimension; gap shading is computed from the
/// unfiltered series so that "no images" periods stay visible whatever the
/// weekday or hour selection.
pub fn compute_time_series(series: &[Record], filter: &Filter) -> TimeSeriesData {
    let selected = apply_filter(series, filter);
    let points = daily_counts(&selected);
    let (shapes, annotations) = highlight_intervals(&no_data_dates(series));

    TimeSeriesData {
        title: TIME_SERIES_TITLE.to_string(),
        points,
        shapes,
        annotations,
    }
}
