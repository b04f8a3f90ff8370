//! CSV export of the filtered, unaggregated records.

use anyhow::{Context, Result};

use crate::api::DownloadLink;
use crate::models::Record;

pub const DOWNLOAD_FILENAME: &str = "rawdata.csv";
pub const DATA_URI_PREFIX: &str = "data:text/csv;charset=utf-8,";

/// One output row laid out like the input file. Columns that are not
/// required take the record's pass-through values in order.
fn row_fields(columns: &[String], record: &Record) -> Vec<String> {
    let mut extra = record.extra.iter();
    columns
        .iter()
        .map(|column| match record.field(column) {
            Some(value) => value,
            None => extra.next().cloned().unwrap_or_default(),
        })
        .collect()
}

/// Serialize records under `columns`. No records gives a header-only CSV.
pub fn to_csv_string(columns: &[String], records: &[&Record]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(columns)?;
    for record in records {
        writer.write_record(row_fields(columns, record))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e))?;
    String::from_utf8(bytes).context("CSV export is not valid UTF-8")
}

/// Percent-encode a CSV document into an inline `data:` URI.
pub fn to_data_uri(csv: &str) -> String {
    format!("{}{}", DATA_URI_PREFIX, urlencoding::encode(csv))
}

/// Download link for the filtered records.
pub fn build_download_link(columns: &[String], records: &[&Record]) -> Result<DownloadLink> {
    let csv = to_csv_string(columns, records)?;
    Ok(DownloadLink {
        href: to_data_uri(&csv),
        filename: DOWNLOAD_FILENAME.to_string(),
        row_count: records.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_isodate, REQUIRED_COLUMNS};

    fn required() -> Vec<String> {
        REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect()
    }

    fn record(count: u64, year: i32) -> Record {
        Record {
            isodate: parse_isodate("2017-06-01 09:00:00").unwrap(),
            park: "Wo".into(),
            camera: "C1".into(),
            weekday: 4,
            hour: 9,
            count,
            year,
            extra: Vec::new(),
        }
    }

    #[test]
    fn test_header_only_for_empty_selection() {
        let csv = to_csv_string(&required(), &[]).unwrap();
        assert_eq!(csv, "isodate,park,camera,weekday,hour,count,year\n");
    }

    #[test]
    fn test_rows_include_sentinels() {
        let a = record(7, 2017);
        let b = record(0, 0);
        let csv = to_csv_string(&required(), &[&a, &b]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "2017-06-01 09:00:00,Wo,C1,4,9,7,2017");
        assert_eq!(lines[2], "2017-06-01 09:00:00,Wo,C1,4,9,0,0");
    }

    #[test]
    fn test_pass_through_columns_keep_file_order() {
        let mut a = record(7, 2017);
        a.extra = vec!["north gate".into(), "x, y".into()];
        let columns: Vec<String> = [
            "site", "isodate", "park", "camera", "weekday", "hour", "count", "year", "note",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect();

        let csv = to_csv_string(&columns, &[&a]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "site,isodate,park,camera,weekday,hour,count,year,note");
        assert_eq!(
            lines[1],
            "north gate,2017-06-01 09:00:00,Wo,C1,4,9,7,2017,\"x, y\""
        );
    }

    #[test]
    fn test_data_uri_round_trips() {
        let csv = "isodate,park\n2017-06-01 09:00:00,Wo\n";
        let uri = to_data_uri(csv);
        assert!(uri.starts_with(DATA_URI_PREFIX));
        let encoded = &uri[DATA_URI_PREFIX.len()..];
        assert!(!encoded.contains('\n'));
        assert!(!encoded.contains(' '));
        assert_eq!(urlencoding::decode(encoded).unwrap(), csv);
    }

    #[test]
    fn test_download_link() {
        let a = record(7, 2017);
        let link = build_download_link(&required(), &[&a]).unwrap();
        assert_eq!(link.filename, DOWNLOAD_FILENAME);
        assert_eq!(link.row_count, 1);
    }
}
