use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

// =========================================================
// Visitors-per-day time series types
// =========================================================

/// Total visitors on one day that had usable images.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

/// Shaded background region marking a run of days without images.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighlightRegion {
    #[serde(rename = "type")]
    pub kind: String,
    pub xref: String,
    pub yref: String,
    pub x0: NaiveDate,
    pub x1: NaiveDate,
    pub y0: f64,
    pub y1: f64,
    pub fillcolor: String,
    pub opacity: f64,
}

/// Text label centered on a gap of a full day or more.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnnotation {
    pub x: NaiveDateTime,
    pub y: f64,
    pub xref: String,
    pub yref: String,
    pub text: String,
    pub showarrow: bool,
}

/// Time series chart with gap shading.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesData {
    pub title: String,
    pub points: Vec<DailyCount>,
    pub shapes: Vec<HighlightRegion>,
    pub annotations: Vec<GapAnnotation>,
}

impl TimeSeriesData {
    pub fn total_count(&self) -> u64 {
        self.points.iter().map(|p| p.count).sum()
    }
}

/// Route function name constant for the time series
pub const GET_TIME_SERIES: &str = "/views/time-series";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_region_type_field() {
        let day = NaiveDate::from_ymd_opt(2017, 6, 1).unwrap();
        let region = HighlightRegion {
            kind: "rect".to_string(),
            xref: "x".to_string(),
            yref: "paper".to_string(),
            x0: day,
            x1: day,
            y0: 0.0,
            y1: 1.0,
            fillcolor: "#FF0000".to_string(),
            opacity: 0.1,
        };
        let json = serde_json::to_value(&region).unwrap();
        assert_eq!(json["type"], "rect");
        assert_eq!(json["x0"], "2017-06-01");
    }

    #[test]
    fn test_total_count() {
        let day = NaiveDate::from_ymd_opt(2017, 6, 1).unwrap();
        let data = TimeSeriesData {
            title: String::new(),
            points: vec![
                DailyCount { date: day, count: 3 },
                DailyCount { date: day.succ_opt().unwrap(), count: 4 },
            ],
            shapes: vec![],
            annotations: vec![],
        };
        assert_eq!(data.total_count(), 7);
    }
}
