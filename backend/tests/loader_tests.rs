//! Loading the visitor-count export from disk.

mod support;

use health_matters::db::{load_dataset, RepositoryError};
use support::{day, write_csv, FIXTURE_CSV};
use tempfile::tempdir;

#[test]
fn test_load_fixture_from_disk() {
    let dir = tempdir().unwrap();
    let path = write_csv(dir.path(), FIXTURE_CSV);

    let dataset = load_dataset(&path).unwrap();
    assert_eq!(dataset.len(), 8);
    assert_eq!(dataset.columns().last().map(String::as_str), Some("note"));
    assert_eq!(dataset.parks(), vec!["Br".to_string(), "Wo".to_string()]);
    assert_eq!(dataset.cameras("Br"), vec!["C1".to_string(), "C2".to_string()]);
    assert_eq!(dataset.span(), Some((day("2017-06-01"), day("2017-07-01"))));
}

#[test]
fn test_records_sorted_by_timestamp() {
    let dir = tempdir().unwrap();
    let path = write_csv(dir.path(), FIXTURE_CSV);

    let dataset = load_dataset(&path).unwrap();
    let stamps: Vec<_> = dataset.records().iter().map(|r| r.isodate).collect();
    let mut sorted = stamps.clone();
    sorted.sort();
    assert_eq!(stamps, sorted);
}

#[test]
fn test_missing_file_is_load_error() {
    let dir = tempdir().unwrap();
    let err = load_dataset(dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, RepositoryError::LoadError { .. }));
    assert!(err.context().source_path.is_some());
}

#[test]
fn test_missing_column_is_rejected() {
    let dir = tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "isodate,park,camera,weekday,hour,count\n2017-06-01 09:00:00,Br,C1,4,9,4\n",
    );

    let err = load_dataset(&path).unwrap_err();
    assert!(err.to_string().contains("year"));
}

#[test]
fn test_malformed_row_reports_line() {
    let dir = tempdir().unwrap();
    let path = write_csv(
        dir.path(),
        "isodate,park,camera,weekday,hour,count,year\n\
         2017-06-01 09:00:00,Br,C1,4,9,4,2017\n\
         yesterday,Br,C1,4,9,4,2017\n",
    );

    let err = load_dataset(&path).unwrap_err();
    assert!(matches!(err, RepositoryError::ValidationError { .. }));
    assert_eq!(err.context().line, Some(3));
}

#[test]
fn test_header_only_file_is_empty_dataset() {
    let dir = tempdir().unwrap();
    let path = write_csv(dir.path(), "isodate,park,camera,weekday,hour,count,year\n");

    let dataset = load_dataset(&path).unwrap();
    assert!(dataset.is_empty());
    assert!(dataset.parks().is_empty());
    assert_eq!(dataset.span(), None);
}
