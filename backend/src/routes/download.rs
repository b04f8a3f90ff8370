use serde::{Deserialize, Serialize};

/// Inline CSV download of the filtered records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DownloadLink {
    /// `data:text/csv;charset=utf-8,` followed by the percent-encoded CSV
    pub href: String,
    /// Suggested file name for the browser
    pub filename: String,
    pub row_count: usize,
}

pub const GET_DOWNLOAD_LINK: &str = "/download-link";
pub const EXPORT_CSV: &str = "/export.csv";
