//! Detection of "no images" periods for the time series shading.

use chrono::{Duration, NaiveDate, NaiveTime};
use std::collections::BTreeSet;

use crate::api::{GapAnnotation, HighlightRegion};
use crate::models::Record;

pub const GAP_FILL_COLOR: &str = "#FF0000";
pub const GAP_OPACITY: f64 = 0.1;
pub const GAP_LABEL: &str = "No images";

/// Maximal run of consecutive no-data days, both ends inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GapInterval {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl GapInterval {
    pub fn span(&self) -> Duration {
        self.end - self.start
    }
}

/// Days of a series without usable images.
///
/// Covers every calendar day between the first and last record: a day is
/// reported when none of its records has images, including days with no
/// records at all.
pub fn no_data_dates(series: &[Record]) -> Vec<NaiveDate> {
    let (Some(first), Some(last)) = (series.first(), series.last()) else {
        return Vec::new();
    };
    let with_images: BTreeSet<NaiveDate> = series
        .iter()
        .filter(|r| !r.is_sentinel())
        .map(Record::date)
        .collect();

    first
        .date()
        .iter_days()
        .take_while(|d| *d <= last.date())
        .filter(|d| !with_images.contains(d))
        .collect()
}

/// Group sorted dates into runs; a step of more than one day starts a new run.
pub fn find_gap_intervals(dates: &[NaiveDate]) -> Vec<GapInterval> {
    let mut intervals = Vec::new();
    let Some((&first, rest)) = dates.split_first() else {
        return intervals;
    };

    let mut current = GapInterval {
        start: first,
        end: first,
    };
    for &date in rest {
        if date - current.end > Duration::days(1) {
            intervals.push(current);
            current = GapInterval {
                start: date,
                end: date,
            };
        } else {
            current.end = date;
        }
    }
    intervals.push(current);
    intervals
}

/// Shading for every interval, plus a centered label for those spanning at
/// least one full day.
pub fn highlight_intervals(dates: &[NaiveDate]) -> (Vec<HighlightRegion>, Vec<GapAnnotation>) {
    let mut shapes = Vec::new();
    let mut annotations = Vec::new();

    for interval in find_gap_intervals(dates) {
        shapes.push(HighlightRegion {
            kind: "rect".to_string(),
            xref: "x".to_string(),
            yref: "paper".to_string(),
            x0: interval.start,
            x1: interval.end,
            y0: 0.0,
            y1: 1.0,
            fillcolor: GAP_FILL_COLOR.to_string(),
            opacity: GAP_OPACITY,
        });

        if interval.span() >= Duration::days(1) {
            let midpoint = interval.start.and_time(NaiveTime::MIN) + interval.span() / 2;
            annotations.push(GapAnnotation {
                x: midpoint,
                y: 0.5,
                xref: "x".to_string(),
                yref: "paper".to_string(),
                text: GAP_LABEL.to_string(),
                showarrow: false,
            });
        }
    }

    (shapes, annotations)
}
