use serde::{Deserialize, Serialize};

// =========================================================
// Weekday / hour bar chart types
// =========================================================

/// Category axis of an aggregate chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateAxis {
    Weekday,
    Hour,
}

/// How bucket values are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregateMethod {
    Count,
    Avg,
}

impl AggregateMethod {
    pub fn title(&self, axis: AggregateAxis) -> &'static str {
        match (self, axis) {
            (AggregateMethod::Count, AggregateAxis::Weekday) => "Number of visitors by day of week",
            (AggregateMethod::Count, AggregateAxis::Hour) => "Number of visitors by hour",
            (AggregateMethod::Avg, AggregateAxis::Weekday) => {
                "Average number of visitors by day of week"
            }
            (AggregateMethod::Avg, AggregateAxis::Hour) => "Average number of visitors by hour",
        }
    }
}

/// One bar: category key (weekday 1..7 or hour), its tick label and value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateBar {
    pub key: u8,
    pub label: String,
    pub value: f64,
}

/// Bar chart ready for rendering, bars ordered by key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateChartData {
    pub title: String,
    pub axis: AggregateAxis,
    pub method: AggregateMethod,
    pub bars: Vec<AggregateBar>,
}

impl AggregateChartData {
    /// Bar value for a key, if present.
    pub fn value(&self, key: u8) -> Option<f64> {
        self.bars.iter().find(|b| b.key == key).map(|b| b.value)
    }

    pub fn total(&self) -> f64 {
        self.bars.iter().map(|b| b.value).sum()
    }
}

pub const GET_COUNT_BY_WEEKDAY: &str = "/views/by-weekday";
pub const GET_COUNT_BY_HOUR: &str = "/views/by-hour";
pub const GET_AVERAGE_BY_WEEKDAY: &str = "/views/by-weekday/average";
pub const GET_AVERAGE_BY_HOUR: &str = "/views/by-hour/average";
