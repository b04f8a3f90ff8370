//! CSV loading for the visitor-count export.
//!
//! The input file is read once at startup. Any unreadable file or malformed
//! row aborts the load; there is no partial dataset.

use log::{debug, info};
use serde::Deserialize;
use std::io;
use std::path::Path;

use super::repository::{ErrorContext, RepositoryError, RepositoryResult};
use crate::models::{parse_isodate, Dataset, Record};

pub use crate::models::REQUIRED_COLUMNS;

/// One row as it appears in the file, before timestamp parsing.
#[derive(Debug, Deserialize)]
struct RawRecord {
    isodate: String,
    park: String,
    camera: String,
    weekday: u8,
    hour: u8,
    count: u64,
    year: i32,
}

impl RawRecord {
    fn into_record(self, line: u64, extra: Vec<String>) -> RepositoryResult<Record> {
        let context = || ErrorContext::new("load_dataset").with_entity("record").with_line(line);

        let isodate = parse_isodate(&self.isodate).ok_or_else(|| {
            RepositoryError::validation_with_context(
                format!("unparseable isodate '{}'", self.isodate),
                context(),
            )
        })?;
        if !(1..=7).contains(&self.weekday) {
            return Err(RepositoryError::validation_with_context(
                format!("weekday {} outside 1..=7", self.weekday),
                context(),
            ));
        }
        if self.hour > 23 {
            return Err(RepositoryError::validation_with_context(
                format!("hour {} outside 0..=23", self.hour),
                context(),
            ));
        }

        Ok(Record {
            isodate,
            park: self.park,
            camera: self.camera,
            weekday: self.weekday,
            hour: self.hour,
            count: self.count,
            year: self.year,
            extra,
        })
    }
}

/// Decode a CSV stream into a dataset that keeps the file's column layout.
pub fn read_dataset<R: io::Read>(reader: R) -> RepositoryResult<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let missing: Vec<&str> = REQUIRED_COLUMNS
        .iter()
        .copied()
        .filter(|col| !headers.iter().any(|h| h == *col))
        .collect();
    if !missing.is_empty() {
        return Err(RepositoryError::load_with_context(
            format!("missing required columns: {}", missing.join(", ")),
            ErrorContext::new("load_dataset").with_line(1),
        ));
    }

    // Positions of the pass-through columns
    let extra_columns: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !REQUIRED_COLUMNS.contains(h))
        .map(|(i, _)| i)
        .collect();

    let mut records = Vec::new();
    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|p| p.line()).unwrap_or_default();
        let raw: RawRecord = row.deserialize(Some(&headers)).map_err(|e| {
            RepositoryError::load_with_context(
                e.to_string(),
                ErrorContext::new("load_dataset").with_entity("record").with_line(line),
            )
        })?;
        let extra = extra_columns
            .iter()
            .map(|&i| row.get(i).unwrap_or_default().to_string())
            .collect();
        records.push(raw.into_record(line, extra)?);
    }
    debug!(
        "decoded {} rows, {} pass-through columns",
        records.len(),
        extra_columns.len()
    );

    let columns = headers.iter().map(str::to_string).collect();
    Ok(Dataset::with_columns(columns, records))
}

/// Load the dataset file at `path`.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> RepositoryResult<Dataset> {
    let path = path.as_ref();
    let display = path.display().to_string();

    let file = std::fs::File::open(path).map_err(|e| {
        RepositoryError::load_with_context(
            e.to_string(),
            ErrorContext::new("load_dataset").with_source(display.clone()),
        )
    })?;

    let dataset =
        read_dataset(io::BufReader::new(file)).map_err(|e| e.with_source(display.clone()))?;

    info!(
        "loaded {} records for {} parks from {}",
        dataset.len(),
        dataset.parks().len(),
        display
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
isodate,park,camera,weekday,hour,count,year,extra
2017-06-02 10:00:00,Br,C1,5,10,4,2017,x
2017-06-01 09:00:00,Br,C1,4,9,7,2017,y
2017-06-01 10:00:00,Br,C1,4,10,0,0,z
";

    #[test]
    fn test_extra_columns_are_kept() {
        let dataset = read_dataset(SAMPLE.as_bytes()).unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.columns().last().map(String::as_str), Some("extra"));
        let first = &dataset.records()[0];
        assert_eq!(first.count, 7);
        assert_eq!(first.extra, vec!["y".to_string()]);
        assert!(dataset.records()[1].is_sentinel());
    }

    #[test]
    fn test_dataset_is_sorted_after_load() {
        let dataset = read_dataset(SAMPLE.as_bytes()).unwrap();
        let hours: Vec<u8> = dataset.records().iter().map(|r| r.hour).collect();
        assert_eq!(hours, vec![9, 10, 10]);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let csv = "isodate,park,camera,weekday,hour,count\n2017-06-01 09:00:00,Br,C1,4,9,7\n";
        let err = read_dataset(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("year"));
    }

    #[test]
    fn test_bad_timestamp_reports_line() {
        let csv = "isodate,park,camera,weekday,hour,count,year\n\
2017-06-01 09:00:00,Br,C1,4,9,7,2017\n\
not-a-date,Br,C1,4,9,7,2017\n";
        let err = read_dataset(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, RepositoryError::ValidationError { .. }));
        assert_eq!(err.context().line, Some(3));
    }

    #[test]
    fn test_line_follows_multiline_fields() {
        let csv = "isodate,park,camera,weekday,hour,count,year,note\n\
2017-06-01 09:00:00,Br,C1,4,9,7,2017,\"two\nlines\"\n\
2017-06-01 10:00:00,Br,C1,4,30,7,2017,\n";
        let err = read_dataset(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("hour 30"));
        assert_eq!(err.context().line, Some(4));
    }

    #[test]
    fn test_negative_count_is_an_error() {
        let csv = "isodate,park,camera,weekday,hour,count,year\n2017-06-01 09:00:00,Br,C1,4,9,-1,2017\n";
        assert!(read_dataset(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_weekday_out_of_range() {
        let csv = "isodate,park,camera,weekday,hour,count,year\n2017-06-01 09:00:00,Br,C1,8,9,1,2017\n";
        let err = read_dataset(csv.as_bytes()).unwrap_err();
        assert!(err.to_string().contains("weekday 8"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_dataset("/definitely/not/here.csv").unwrap_err();
        assert_eq!(
            err.context().source_path.as_deref(),
            Some("/definitely/not/here.csv")
        );
    }
}
