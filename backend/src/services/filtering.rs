//! Record selection for a [`Filter`].
//!
//! Each dimension has its own narrowing function so views can apply exactly
//! the steps they need; [`apply_filter`] runs all of them.

use crate::models::{DateRange, Filter, HourRange, Record, WeekdaySet};

/// Keep records of one park/camera pair.
pub fn filter_by_camera<'a>(records: &'a [Record], park: &str, camera: &str) -> Vec<&'a Record> {
    records
        .iter()
        .filter(|r| r.belongs_to(park, camera))
        .collect()
}

/// Keep records whose calendar day lies in the inclusive range.
pub fn filter_by_date_range<'a>(records: Vec<&'a Record>, dates: &DateRange) -> Vec<&'a Record> {
    records
        .into_iter()
        .filter(|r| dates.contains(r.date()))
        .collect()
}

/// Keep records on selected weekdays.
pub fn filter_by_weekdays<'a>(records: Vec<&'a Record>, weekdays: &WeekdaySet) -> Vec<&'a Record> {
    records
        .into_iter()
        .filter(|r| weekdays.contains(r.weekday))
        .collect()
}

/// Keep records inside the half-open hour window.
pub fn filter_by_hours<'a>(records: Vec<&'a Record>, hours: &HourRange) -> Vec<&'a Record> {
    records
        .into_iter()
        .filter(|r| hours.contains(r.hour))
        .collect()
}

/// Select every record matching the filter, in input order.
///
/// Sentinel rows are kept; views that compute counts drop them themselves.
pub fn apply_filter<'a>(records: &'a [Record], filter: &Filter) -> Vec<&'a Record> {
    let Some((park, camera)) = filter.pair() else {
        return Vec::new();
    };
    let selected = filter_by_camera(records, park, camera);
    let selected = filter_by_date_range(selected, &filter.dates);
    let selected = filter_by_weekdays(selected, &filter.weekdays);
    filter_by_hours(selected, &filter.hours)
}

/// Drop records whose bucket carries no images.
pub fn without_sentinels<'a>(records: &[&'a Record]) -> Vec<&'a Record> {
    records.iter().copied().filter(|r| !r.is_sentinel()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{iso_weekday, parse_isodate};
    use chrono::{NaiveDate, Timelike};

    fn record(ts: &str, camera: &str, count: u64, year: i32) -> Record {
        let isodate = parse_isodate(ts).unwrap();
        Record {
            isodate,
            park: "Br".into(),
            camera: camera.into(),
            weekday: iso_weekday(isodate.date()),
            hour: isodate.hour() as u8,
            count,
            year,
            extra: Vec::new(),
        }
    }

    fn records() -> Vec<Record> {
        vec![
            record("2017-06-05 09:00:00", "C1", 4, 2017), // Mon
            record("2017-06-05 15:00:00", "C1", 2, 2017),
            record("2017-06-06 09:00:00", "C1", 0, 0), // Tue, sentinel
            record("2017-06-10 21:00:00", "C1", 8, 2017), // Sat
            record("2017-06-10 21:00:00", "C2", 99, 2017),
        ]
    }

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn june() -> DateRange {
        DateRange::new(day("2017-06-01"), day("2017-06-30")).unwrap()
    }

    #[test]
    fn test_apply_filter_full_window() {
        let records = records();
        let filter = Filter::new(Some("Br".into()), Some("C1".into()), june());
        assert_eq!(apply_filter(&records, &filter).len(), 4);
    }

    #[test]
    fn test_apply_filter_end_date_is_inclusive() {
        let records = records();
        let dates = DateRange::new(day("2017-06-05"), day("2017-06-06")).unwrap();
        let filter = Filter::new(Some("Br".into()), Some("C1".into()), dates);
        assert_eq!(apply_filter(&records, &filter).len(), 3);
    }

    #[test]
    fn test_apply_filter_weekdays_and_hours() {
        let records = records();
        let filter = Filter::new(Some("Br".into()), Some("C1".into()), june())
            .with_weekdays(WeekdaySet::new([1]).unwrap())
            .with_hours(HourRange::new(6, 12).unwrap());
        let selected = apply_filter(&records, &filter);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].count, 4);
    }

    #[test]
    fn test_hour_window_excludes_end() {
        let records = records();
        let filter = Filter::new(Some("Br".into()), Some("C1".into()), june())
            .with_hours(HourRange::new(15, 21).unwrap());
        let selected = apply_filter(&records, &filter);
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].hour, 15);
    }

    #[test]
    fn test_no_pair_selects_nothing() {
        let records = records();
        let filter = Filter::new(None, Some("C1".into()), june());
        assert!(apply_filter(&records, &filter).is_empty());
    }

    #[test]
    fn test_without_sentinels() {
        let records = records();
        let all: Vec<&Record> = records.iter().collect();
        assert_eq!(without_sentinels(&all).len(), 4);
    }
}
