use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::time::format_isodate;

/// Columns every input file must carry. Any other column is passed through.
pub const REQUIRED_COLUMNS: [&str; 7] =
    ["isodate", "park", "camera", "weekday", "hour", "count", "year"];

/// Visitor count for one hourly bucket of one camera.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Start of the hourly bucket.
    pub isodate: NaiveDateTime,
    /// Park code, e.g. `Br`.
    pub park: String,
    /// Camera code within the park.
    pub camera: String,
    /// ISO weekday, 1 = Monday .. 7 = Sunday.
    pub weekday: u8,
    /// Hour of day, 6..=22.
    pub hour: u8,
    /// Number of visitors counted in the bucket.
    pub count: u64,
    /// Year of the source images, `0` when the camera produced none.
    pub year: i32,
    /// Values of the file's other columns, in file order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<String>,
}

impl Record {
    /// Calendar day of the bucket.
    pub fn date(&self) -> NaiveDate {
        self.isodate.date()
    }

    /// `true` when the bucket carries no usable images.
    pub fn is_sentinel(&self) -> bool {
        self.year == 0
    }

    /// `true` when the record belongs to the given park/camera pair.
    pub fn belongs_to(&self, park: &str, camera: &str) -> bool {
        self.park == park && self.camera == camera
    }

    /// Text of a required column as written on export.
    pub fn field(&self, column: &str) -> Option<String> {
        let value = match column {
            "isodate" => format_isodate(&self.isodate),
            "park" => self.park.clone(),
            "camera" => self.camera.clone(),
            "weekday" => self.weekday.to_string(),
            "hour" => self.hour.to_string(),
            "count" => self.count.to_string(),
            "year" => self.year.to_string(),
            _ => return None,
        };
        Some(value)
    }
}
