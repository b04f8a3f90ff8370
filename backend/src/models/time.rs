use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Timestamp layout used when writing records back out.
pub const ISODATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted timestamp layouts, tried in order.
const ISODATE_INPUT_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// First and last hour offered by the hour slider.
pub const HOUR_MIN: u8 = 6;
pub const HOUR_MAX: u8 = 22;

/// Short weekday labels, Monday first (index 0 is weekday 1).
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Parse an `isodate` cell.
///
/// Accepts a full timestamp with either a space or a `T` separator, or a bare
/// date which is taken as midnight.
pub fn parse_isodate(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    for format in ISODATE_INPUT_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(value, format) {
            return Some(ts);
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN))
}

/// Format a timestamp the way the export writes it.
pub fn format_isodate(ts: &NaiveDateTime) -> String {
    ts.format(ISODATE_FORMAT).to_string()
}

/// ISO weekday of a date, 1 = Monday .. 7 = Sunday.
pub fn iso_weekday(date: NaiveDate) -> u8 {
    date.weekday().number_from_monday() as u8
}

/// Label for a weekday number; `None` outside 1..=7.
pub fn weekday_label(weekday: u8) -> Option<&'static str> {
    match weekday {
        1..=7 => Some(WEEKDAY_LABELS[(weekday - 1) as usize]),
        _ => None,
    }
}

/// Tick label for an hour of day, e.g. `9:00`.
pub fn hour_label(hour: u8) -> String {
    format!("{}:00", hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_isodate_space_separator() {
        let ts = parse_isodate("2017-06-01 09:00:00").unwrap();
        assert_eq!(format_isodate(&ts), "2017-06-01 09:00:00");
    }

    #[test]
    fn test_parse_isodate_t_separator() {
        let ts = parse_isodate("2017-06-01T13:00:00").unwrap();
        assert_eq!(format_isodate(&ts), "2017-06-01 13:00:00");
    }

    #[test]
    fn test_parse_isodate_bare_date() {
        let ts = parse_isodate("2017-06-01").unwrap();
        assert_eq!(format_isodate(&ts), "2017-06-01 00:00:00");
    }

    #[test]
    fn test_parse_isodate_rejects_garbage() {
        assert!(parse_isodate("yesterday").is_none());
        assert!(parse_isodate("").is_none());
    }

    #[test]
    fn test_iso_weekday() {
        // 2017-06-05 was a Monday
        let monday = NaiveDate::from_ymd_opt(2017, 6, 5).unwrap();
        assert_eq!(iso_weekday(monday), 1);
        assert_eq!(iso_weekday(monday + chrono::Duration::days(6)), 7);
    }

    #[test]
    fn test_labels() {
        assert_eq!(weekday_label(1), Some("Mon"));
        assert_eq!(weekday_label(7), Some("Sun"));
        assert_eq!(weekday_label(0), None);
        assert_eq!(weekday_label(8), None);
        assert_eq!(hour_label(9), "9:00");
    }
}
