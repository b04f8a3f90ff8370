//! Service layer: pure view computations over the dataset.
//!
//! Nothing here performs I/O except the image catalog's startup scan and
//! file reads. Every view is a function of the selected pair's series and
//! the current filter.

pub mod aggregates;
pub mod controls;
pub mod dashboard;
pub mod export;
pub mod filtering;
pub mod gaps;
pub mod images;
pub mod timeline;

pub use aggregates::compute_chart;
pub use controls::{build_controls, camera_options, park_options, select_camera};
pub use dashboard::compute_dashboard;
pub use export::{build_download_link, to_csv_string};
pub use filtering::apply_filter;
pub use gaps::{find_gap_intervals, highlight_intervals, no_data_dates};
pub use images::{ImageCatalog, ImageError};
pub use timeline::compute_time_series;
