#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().expect("ENV_LOCK poisoned");
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

// =============================================================================
// Dataset fixture
// =============================================================================

use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use health_matters::db::{read_dataset, LocalRepository};
use health_matters::models::Dataset;

/// Small export covering two parks.
///
/// Br/C1 has data on 06-01, 06-02 and 06-05, a sentinel-only day on 06-03
/// and no rows on 06-04. 2017-06-01 is a Thursday.
pub const FIXTURE_CSV: &str = "\
isodate,park,camera,weekday,hour,count,year,note
2017-06-01 09:00:00,Br,C1,4,9,4,2017,
2017-06-01 10:00:00,Br,C1,4,10,2,2017,
2017-06-02 09:00:00,Br,C1,5,9,6,2017,
2017-06-03 09:00:00,Br,C1,6,9,0,0,no image
2017-06-05 09:00:00,Br,C1,1,9,3,2017,
2017-06-05 14:00:00,Br,C1,1,14,5,2017,
2017-07-01 12:00:00,Br,C2,6,12,7,2017,
2017-06-10 08:00:00,Wo,C1,6,8,1,2017,
";

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}

pub fn fixture_dataset() -> Dataset {
    read_dataset(FIXTURE_CSV.as_bytes()).expect("fixture parses")
}

pub fn fixture_repository() -> LocalRepository {
    LocalRepository::new(fixture_dataset())
}

/// Write `contents` to `export.csv` inside `dir`.
pub fn write_csv(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("export.csv");
    std::fs::write(&path, contents).expect("write fixture csv");
    path
}
