use chrono::NaiveDate;

use super::record::{Record, REQUIRED_COLUMNS};

/// Immutable, timestamp-ordered collection of records.
///
/// Built once from the input file; there are no mutating methods.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// Header of the input file, in file order.
    columns: Vec<String>,
    records: Vec<Record>,
}

impl Dataset {
    /// Build a dataset with only the required columns, ordering records by
    /// timestamp.
    pub fn new(records: Vec<Record>) -> Self {
        let columns = REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect();
        Self::with_columns(columns, records)
    }

    /// Build a dataset that keeps the file's own column layout.
    ///
    /// The sort is stable so rows sharing a timestamp keep file order.
    pub fn with_columns(columns: Vec<String>, mut records: Vec<Record>) -> Self {
        records.sort_by_key(|r| r.isodate);
        Self { columns, records }
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct park codes in order of first appearance.
    pub fn parks(&self) -> Vec<String> {
        let mut parks: Vec<String> = Vec::new();
        for record in &self.records {
            if !parks.iter().any(|p| p == &record.park) {
                parks.push(record.park.clone());
            }
        }
        parks
    }

    /// Distinct camera codes observed for a park, sorted.
    pub fn cameras(&self, park: &str) -> Vec<String> {
        let mut cameras: Vec<String> = self
            .records
            .iter()
            .filter(|r| r.park == park)
            .map(|r| r.camera.clone())
            .collect();
        cameras.sort();
        cameras.dedup();
        cameras
    }

    /// All records of a park/camera pair, in timestamp order.
    pub fn series(&self, park: &str, camera: &str) -> Vec<Record> {
        self.records
            .iter()
            .filter(|r| r.belongs_to(park, camera))
            .cloned()
            .collect()
    }

    /// First and last calendar day covered by the dataset.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.records.first()?;
        let last = self.records.last()?;
        Some((first.date(), last.date()))
    }
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_isodate;

    fn record(ts: &str, park: &str, camera: &str) -> Record {
        let isodate = parse_isodate(ts).unwrap();
        Record {
            isodate,
            park: park.to_string(),
            camera: camera.to_string(),
            weekday: crate::models::iso_weekday(isodate.date()),
            hour: 9,
            count: 1,
            year: 2017,
            extra: Vec::new(),
        }
    }

    #[test]
    fn test_new_sorts_by_timestamp() {
        let ds = Dataset::new(vec![
            record("2017-06-03 09:00:00", "Br", "C1"),
            record("2017-06-01 09:00:00", "Br", "C1"),
            record("2017-06-02 09:00:00", "Br", "C1"),
        ]);
        let dates: Vec<_> = ds.records().iter().map(|r| r.date().to_string()).collect();
        assert_eq!(dates, vec!["2017-06-01", "2017-06-02", "2017-06-03"]);
    }

    #[test]
    fn test_parks_first_seen_order() {
        let ds = Dataset::new(vec![
            record("2017-06-01 09:00:00", "Wo", "C1"),
            record("2017-06-02 09:00:00", "Br", "C1"),
            record("2017-06-03 09:00:00", "Wo", "C2"),
        ]);
        assert_eq!(ds.parks(), vec!["Wo", "Br"]);
    }

    #[test]
    fn test_cameras_sorted_and_unique() {
        let ds = Dataset::new(vec![
            record("2017-06-01 09:00:00", "Br", "C2"),
            record("2017-06-02 09:00:00", "Br", "C1"),
            record("2017-06-03 09:00:00", "Br", "C2"),
            record("2017-06-03 10:00:00", "Cl", "C9"),
        ]);
        assert_eq!(ds.cameras("Br"), vec!["C1", "C2"]);
        assert!(ds.cameras("Zz").is_empty());
    }

    #[test]
    fn test_series_and_span() {
        let ds = Dataset::new(vec![
            record("2017-06-01 09:00:00", "Br", "C1"),
            record("2017-06-05 09:00:00", "Br", "C2"),
            record("2017-06-09 09:00:00", "Br", "C1"),
        ]);
        assert_eq!(ds.series("Br", "C1").len(), 2);
        let (start, end) = ds.span().unwrap();
        assert_eq!(start.to_string(), "2017-06-01");
        assert_eq!(end.to_string(), "2017-06-09");
        assert!(Dataset::default().span().is_none());
    }

    #[test]
    fn test_default_columns() {
        let ds = Dataset::default();
        assert_eq!(ds.columns(), REQUIRED_COLUMNS);
    }
}
