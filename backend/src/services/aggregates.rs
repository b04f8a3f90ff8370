//! Weekday and hour bar charts: plain sums and per-bucket averages.
//!
//! Sums group the filtered records directly. Averages first resample into
//! hourly or daily buckets, drop buckets that only hold sentinel rows, and
//! then take the mean bucket total per hour of day or day of week.

use chrono::{NaiveDate, Timelike};
use std::collections::BTreeMap;

use super::filtering::without_sentinels;
use crate::api::{AggregateAxis, AggregateBar, AggregateChartData, AggregateMethod};
use crate::models::{hour_label, iso_weekday, weekday_label, Record};

/// Running total of one resampled bucket.
#[derive(Debug, Default, Clone, Copy)]
struct Bucket {
    count: u64,
    has_images: bool,
}

impl Bucket {
    fn add(&mut self, record: &Record) {
        if !record.is_sentinel() {
            self.count += record.count;
            self.has_images = true;
        }
    }
}

fn label_for(axis: AggregateAxis, key: u8) -> String {
    match axis {
        AggregateAxis::Weekday => weekday_label(key).unwrap_or("?").to_string(),
        AggregateAxis::Hour => hour_label(key),
    }
}

fn to_bars(axis: AggregateAxis, groups: &BTreeMap<u8, f64>) -> Vec<AggregateBar> {
    groups
        .iter()
        .map(|(&key, &value)| AggregateBar {
            key,
            label: label_for(axis, key),
            value,
        })
        .collect()
}

fn mean_by_key(totals: impl Iterator<Item = (u8, u64)>) -> BTreeMap<u8, f64> {
    let mut sums: BTreeMap<u8, (u64, usize)> = BTreeMap::new();
    for (key, total) in totals {
        let entry = sums.entry(key).or_default();
        entry.0 += total;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(key, (sum, n))| (key, sum as f64 / n as f64))
        .collect()
}

/// Sum of counts per hour of day. Sentinel rows are skipped.
pub fn count_by_hour(records: &[&Record]) -> Vec<AggregateBar> {
    let mut groups: BTreeMap<u8, f64> = BTreeMap::new();
    for record in without_sentinels(records) {
        *groups.entry(record.hour).or_default() += record.count as f64;
    }
    to_bars(AggregateAxis::Hour, &groups)
}

/// Sum of counts per weekday. Sentinel rows are skipped.
pub fn count_by_weekday(records: &[&Record]) -> Vec<AggregateBar> {
    let mut groups: BTreeMap<u8, f64> = BTreeMap::new();
    for record in without_sentinels(records) {
        *groups.entry(record.weekday).or_default() += record.count as f64;
    }
    to_bars(AggregateAxis::Weekday, &groups)
}

/// Mean hourly total per hour of day, over hours that had images.
pub fn average_by_hour(records: &[&Record]) -> Vec<AggregateBar> {
    let mut buckets: BTreeMap<(NaiveDate, u32), Bucket> = BTreeMap::new();
    for record in records {
        buckets
            .entry((record.date(), record.isodate.hour()))
            .or_default()
            .add(record);
    }
    let means = mean_by_key(
        buckets
            .into_iter()
            .filter(|(_, b)| b.has_images)
            .map(|((_, hour), b)| (hour as u8, b.count)),
    );
    to_bars(AggregateAxis::Hour, &means)
}

/// Mean daily total per day of week, over days that had images.
pub fn average_by_weekday(records: &[&Record]) -> Vec<AggregateBar> {
    let mut buckets: BTreeMap<NaiveDate, Bucket> = BTreeMap::new();
    for record in records {
        buckets.entry(record.date()).or_default().add(record);
    }
    let means = mean_by_key(
        buckets
            .into_iter()
            .filter(|(_, b)| b.has_images)
            .map(|(day, b)| (iso_weekday(day), b.count)),
    );
    to_bars(AggregateAxis::Weekday, &means)
}

/// Wrap bars into a titled chart.
pub fn build_chart(
    axis: AggregateAxis,
    method: AggregateMethod,
    bars: Vec<AggregateBar>,
) -> AggregateChartData {
    AggregateChartData {
        title: method.title(axis).to_string(),
        axis,
        method,
        bars,
    }
}

/// Chart for one axis/method combination over already filtered records.
pub fn compute_chart(
    records: &[&Record],
    axis: AggregateAxis,
    method: AggregateMethod,
) -> AggregateChartData {
    let bars = match (axis, method) {
        (AggregateAxis::Weekday, AggregateMethod::Count) => count_by_weekday(records),
        (AggregateAxis::Hour, AggregateMethod::Count) => count_by_hour(records),
        (AggregateAxis::Weekday, AggregateMethod::Avg) => average_by_weekday(records),
        (AggregateAxis::Hour, AggregateMethod::Avg) => average_by_hour(records),
    };
    build_chart(axis, method, bars)
}

#[cfg(test)]
#[path = "aggregates_tests.rs"]
mod aggregates_tests;
