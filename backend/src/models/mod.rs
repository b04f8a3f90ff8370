pub mod dataset;
pub mod filter;
pub mod record;
pub mod time;

pub use dataset::*;
pub use filter::*;
pub use record::*;
pub use time::*;
