use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::record::Record;
use super::time::{HOUR_MAX, HOUR_MIN};

/// Reasons a filter is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilterError {
    #[error("weekday {0} is outside 1..=7")]
    InvalidWeekday(u8),

    #[error("hour {0} is outside {min}..={max}", min = HOUR_MIN, max = HOUR_MAX)]
    InvalidHour(u8),

    #[error("hour range start {start} is after end {end}")]
    InvertedHourRange { start: u8, end: u8 },

    #[error("start date {start} is after end date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },

    #[error("could not parse {field}: {value}")]
    Unparseable { field: &'static str, value: String },
}

/// Half-open hour window `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRange {
    pub start: u8,
    pub end: u8,
}

impl HourRange {
    pub fn new(start: u8, end: u8) -> Result<Self, FilterError> {
        for hour in [start, end] {
            if !(HOUR_MIN..=HOUR_MAX).contains(&hour) {
                return Err(FilterError::InvalidHour(hour));
            }
        }
        if start > end {
            return Err(FilterError::InvertedHourRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, hour: u8) -> bool {
        hour >= self.start && hour < self.end
    }
}

impl Default for HourRange {
    fn default() -> Self {
        Self {
            start: HOUR_MIN,
            end: HOUR_MAX,
        }
    }
}

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, FilterError> {
        if start > end {
            return Err(FilterError::InvertedDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Degenerate range covering a single day.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        day >= self.start && day <= self.end
    }
}

/// Selected weekdays, 1 = Monday .. 7 = Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdaySet(BTreeSet<u8>);

impl WeekdaySet {
    pub fn all() -> Self {
        Self((1..=7).collect())
    }

    pub fn new<I: IntoIterator<Item = u8>>(days: I) -> Result<Self, FilterError> {
        let mut set = BTreeSet::new();
        for day in days {
            if !(1..=7).contains(&day) {
                return Err(FilterError::InvalidWeekday(day));
            }
            set.insert(day);
        }
        Ok(Self(set))
    }

    /// Parse a comma separated list such as `1,2,7`. An empty string selects
    /// no weekday at all.
    pub fn parse(list: &str) -> Result<Self, FilterError> {
        let mut days = Vec::new();
        for part in list.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let day = part.parse::<u8>().map_err(|_| FilterError::Unparseable {
                field: "weekdays",
                value: part.to_string(),
            })?;
            days.push(day);
        }
        Self::new(days)
    }

    pub fn contains(&self, weekday: u8) -> bool {
        self.0.contains(&weekday)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        self.0.iter().copied()
    }
}

impl Default for WeekdaySet {
    fn default() -> Self {
        Self::all()
    }
}

/// One view recomputation's query against the dataset.
///
/// Without both a park and a camera the filter matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub park: Option<String>,
    pub camera: Option<String>,
    pub dates: DateRange,
    pub weekdays: WeekdaySet,
    pub hours: HourRange,
}

impl Filter {
    /// Filter over every weekday and the full hour window.
    pub fn new(park: Option<String>, camera: Option<String>, dates: DateRange) -> Self {
        Self {
            park,
            camera,
            dates,
            weekdays: WeekdaySet::all(),
            hours: HourRange::default(),
        }
    }

    pub fn with_weekdays(mut self, weekdays: WeekdaySet) -> Self {
        self.weekdays = weekdays;
        self
    }

    pub fn with_hours(mut self, hours: HourRange) -> Self {
        self.hours = hours;
        self
    }

    /// The selected park/camera pair, when both are set.
    pub fn pair(&self) -> Option<(&str, &str)> {
        match (self.park.as_deref(), self.camera.as_deref()) {
            (Some(park), Some(camera)) => Some((park, camera)),
            _ => None,
        }
    }

    pub fn matches(&self, record: &Record) -> bool {
        let Some((park, camera)) = self.pair() else {
            return false;
        };
        record.belongs_to(park, camera)
            && self.dates.contains(record.date())
            && self.weekdays.contains(record.weekday)
            && self.hours.contains(record.hour)
    }
}
